/// Configuration types for HTML conversion.
///
/// This module defines the options used to customize how markup trees are
/// rendered and how documents are mapped onto them.
use serde::{Deserialize, Serialize};

/// Configuration options for HTML conversion.
///
/// # Examples
///
/// ```rust
/// use litchi_html::html::{ClassSeparator, HtmlOptions};
///
/// // Create with defaults
/// let options = HtmlOptions::default();
/// assert_eq!(options.root_tag, "article");
///
/// // Or customize
/// let options = HtmlOptions::new()
///     .with_class_separator(ClassSeparator::Space)
///     .with_escaping(false)
///     .with_no_wrap(false);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HtmlOptions {
    /// How multiple class names are joined inside the `class` attribute
    pub class_separator: ClassSeparator,
    /// Whether text content and attribute values are HTML-escaped
    pub escape_markup: bool,
    /// Tag name of the element wrapping the whole document body
    pub root_tag: String,
    /// Tag name used for paragraphs
    pub paragraph_tag: String,
    /// Tag name used for runs
    pub run_tag: String,
    /// Whether paragraphs get `white-space:nowrap`
    pub no_wrap: bool,
    /// Whether batch conversion may fan out across threads
    pub use_parallel: bool,
}

impl Default for HtmlOptions {
    fn default() -> Self {
        Self {
            class_separator: ClassSeparator::CommaSpace,
            escape_markup: true,
            root_tag: "article".to_string(),
            paragraph_tag: "p".to_string(),
            run_tag: "span".to_string(),
            no_wrap: true,
            use_parallel: true,
        }
    }
}

impl HtmlOptions {
    /// Create a new `HtmlOptions` with default values.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the separator placed between class names.
    #[inline]
    pub fn with_class_separator(mut self, separator: ClassSeparator) -> Self {
        self.class_separator = separator;
        self
    }

    /// Set whether text and attribute values are escaped.
    ///
    /// Disabling escaping writes every value verbatim, so `<`, `&` and `"`
    /// pass through unchanged.
    #[inline]
    pub fn with_escaping(mut self, escape: bool) -> Self {
        self.escape_markup = escape;
        self
    }

    /// Set the root element tag name.
    #[inline]
    pub fn with_root_tag(mut self, tag: impl Into<String>) -> Self {
        self.root_tag = tag.into();
        self
    }

    /// Set the paragraph element tag name.
    #[inline]
    pub fn with_paragraph_tag(mut self, tag: impl Into<String>) -> Self {
        self.paragraph_tag = tag.into();
        self
    }

    /// Set the run element tag name.
    #[inline]
    pub fn with_run_tag(mut self, tag: impl Into<String>) -> Self {
        self.run_tag = tag.into();
        self
    }

    /// Set whether paragraphs are kept on one line (`white-space:nowrap`).
    #[inline]
    pub fn with_no_wrap(mut self, no_wrap: bool) -> Self {
        self.no_wrap = no_wrap;
        self
    }

    /// Set whether batch conversion runs in parallel.
    #[inline]
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.use_parallel = parallel;
        self
    }
}

/// Separator used when joining class names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ClassSeparator {
    /// `class="a, b"`
    #[default]
    CommaSpace,
    /// `class="a b"`, the separator HTML itself understands
    Space,
}

impl ClassSeparator {
    /// The literal separator text.
    #[inline]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::CommaSpace => ", ",
            Self::Space => " ",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_html_options_builder() {
        let options = HtmlOptions::new()
            .with_class_separator(ClassSeparator::Space)
            .with_escaping(false)
            .with_root_tag("section")
            .with_paragraph_tag("div")
            .with_run_tag("em")
            .with_no_wrap(false)
            .with_parallel(false);

        assert_eq!(options.class_separator, ClassSeparator::Space);
        assert!(!options.escape_markup);
        assert_eq!(options.root_tag, "section");
        assert_eq!(options.paragraph_tag, "div");
        assert_eq!(options.run_tag, "em");
        assert!(!options.no_wrap);
        assert!(!options.use_parallel);
    }

    #[test]
    fn test_html_options_default() {
        let options = HtmlOptions::default();
        assert_eq!(options.class_separator, ClassSeparator::CommaSpace);
        assert!(options.escape_markup);
        assert_eq!(options.root_tag, "article");
        assert_eq!(options.paragraph_tag, "p");
        assert_eq!(options.run_tag, "span");
        assert!(options.no_wrap);
    }

    #[test]
    fn test_class_separator_text() {
        assert_eq!(ClassSeparator::CommaSpace.as_str(), ", ");
        assert_eq!(ClassSeparator::Space.as_str(), " ");
    }
}
