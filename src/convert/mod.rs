/// Document to HTML/CSS conversion.
///
/// This module turns a [`WordDocument`] into a markup tree, renders it, and
/// emits the matching stylesheet.
///
/// # Example
///
/// ```rust
/// use litchi_html::common::RGBColor;
/// use litchi_html::convert::DocumentConverter;
/// use litchi_html::document::{ParagraphInfo, RunInfo, StyleRecord, StyleTable};
/// use litchi_html::html::{HtmlOptions, render};
///
/// let styles = StyleTable::build(vec![
///     StyleRecord::paragraph("Normal")
///         .with_font_color(RGBColor::new(255, 0, 0))
///         .with_font_size(24),
/// ])?;
/// let body = vec![ParagraphInfo::new(Some("Normal")).with_run(RunInfo::new("Hello")).into()];
///
/// let options = HtmlOptions::default();
/// let converter = DocumentConverter::new(&styles, &options);
/// let tree = converter.convert_to_markup(&body, "article")?;
///
/// assert_eq!(
///     render(&tree),
///     r##"<article><p class="Normal" style="white-space:nowrap;"><span style="color:#FF0000; font-size:24px;">Hello</span></p></article>"##
/// );
/// assert!(converter.generate_stylesheet()?.starts_with(".Normal {"));
/// # Ok::<(), litchi_html::Error>(())
/// ```
// Module declarations
mod batch;
mod converter;
mod stylesheet;

#[cfg(test)]
mod tests;

use crate::common::Result;
use crate::document::WordDocument;
use crate::html::{HtmlOptions, HtmlWriter, ToHtml};

// Re-export public API
pub use batch::{PARALLEL_THRESHOLD, convert_batch};
pub use converter::DocumentConverter;
pub use stylesheet::generate_stylesheet;

/// Rendered output of one document.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ConvertedDocument {
    /// Rendered markup
    pub html: String,
    /// Stylesheet for the class names used in `html`
    pub css: String,
}

impl WordDocument {
    /// Convert to HTML and CSS with default options.
    pub fn convert(&self) -> Result<ConvertedDocument> {
        self.convert_with_options(&HtmlOptions::default())
    }

    /// Convert to HTML and CSS.
    pub fn convert_with_options(&self, options: &HtmlOptions) -> Result<ConvertedDocument> {
        let converter = DocumentConverter::new(&self.styles, options);
        let tree = converter.convert_to_markup(&self.body, &options.root_tag)?;

        let mut writer = HtmlWriter::new(options.clone());
        writer.write_node(&tree);

        Ok(ConvertedDocument {
            html: writer.finish(),
            css: converter.generate_stylesheet()?,
        })
    }

    /// Emit only the stylesheet.
    pub fn to_css(&self) -> Result<String> {
        generate_stylesheet(&self.styles)
    }
}

impl ToHtml for WordDocument {
    fn to_html_with_options(&self, options: &HtmlOptions) -> Result<String> {
        let converter = DocumentConverter::new(&self.styles, options);
        let tree = converter.convert_to_markup(&self.body, &options.root_tag)?;
        tree.to_html_with_options(options)
    }
}
