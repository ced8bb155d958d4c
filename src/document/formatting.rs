/// Character formatting carried by runs and styles.
use crate::common::FontColor;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// CSS declarations produced from a [`RunFormatting`], in output order.
pub type Declarations = SmallVec<[(&'static str, String); 4]>;

/// The subset of run properties the converter understands.
///
/// Every field is optional: `None` means "not set here", so the value is
/// inherited from the next level of the style hierarchy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RunFormatting {
    /// Text color (`w:color`)
    pub font_color: Option<FontColor>,
    /// Font size as stored in the document (`w:sz`, half-points)
    pub font_size: Option<u32>,
    /// Bold (`w:b`)
    pub bold: Option<bool>,
    /// Italic (`w:i`)
    pub italic: Option<bool>,
}

impl RunFormatting {
    /// Formatting with nothing set.
    #[inline]
    pub const fn new() -> Self {
        Self {
            font_color: None,
            font_size: None,
            bold: None,
            italic: None,
        }
    }

    /// Set the text color.
    #[inline]
    pub fn with_font_color(mut self, color: impl Into<FontColor>) -> Self {
        self.font_color = Some(color.into());
        self
    }

    /// Set the font size.
    #[inline]
    pub fn with_font_size(mut self, size: u32) -> Self {
        self.font_size = Some(size);
        self
    }

    /// Set bold on or off.
    #[inline]
    pub fn with_bold(mut self, bold: bool) -> Self {
        self.bold = Some(bold);
        self
    }

    /// Set italic on or off.
    #[inline]
    pub fn with_italic(mut self, italic: bool) -> Self {
        self.italic = Some(italic);
        self
    }

    /// Whether no property is set.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.font_color.is_none()
            && self.font_size.is_none()
            && self.bold.is_none()
            && self.italic.is_none()
    }

    /// Keep every property set on `self`, fill the rest from `fallback`.
    #[must_use]
    pub fn or(self, fallback: RunFormatting) -> RunFormatting {
        RunFormatting {
            font_color: self.font_color.or(fallback.font_color),
            font_size: self.font_size.or(fallback.font_size),
            bold: self.bold.or(fallback.bold),
            italic: self.italic.or(fallback.italic),
        }
    }

    /// CSS declarations for the properties that are set.
    ///
    /// Order is fixed: `color`, `font-size`, `font-weight`, `font-style`.
    /// An automatic color yields no `color` declaration.
    pub fn css_declarations(&self) -> Declarations {
        let mut declarations = Declarations::new();

        if let Some(color) = self.font_color.and_then(|c| c.css_value()) {
            declarations.push(("color", color));
        }
        if let Some(size) = self.font_size {
            let mut buffer = itoa::Buffer::new();
            let mut value = String::with_capacity(8);
            value.push_str(buffer.format(size));
            value.push_str("px");
            declarations.push(("font-size", value));
        }
        if let Some(bold) = self.bold {
            let weight = if bold { "bold" } else { "normal" };
            declarations.push(("font-weight", weight.to_string()));
        }
        if let Some(italic) = self.italic {
            let style = if italic { "italic" } else { "normal" };
            declarations.push(("font-style", style.to_string()));
        }

        declarations
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::RGBColor;

    #[test]
    fn test_or_prefers_own_values() {
        let own = RunFormatting::new().with_font_size(20);
        let inherited = RunFormatting::new()
            .with_font_size(12)
            .with_font_color(RGBColor::new(0, 0, 255));

        let merged = own.or(inherited);
        assert_eq!(merged.font_size, Some(20));
        assert_eq!(merged.font_color, Some(FontColor::Rgb(RGBColor::new(0, 0, 255))));
        assert_eq!(merged.bold, None);
    }

    #[test]
    fn test_css_declarations_order() {
        let formatting = RunFormatting::new()
            .with_italic(true)
            .with_bold(false)
            .with_font_size(24)
            .with_font_color(RGBColor::new(255, 0, 0));

        let declarations = formatting.css_declarations();
        let pairs: Vec<(&str, &str)> = declarations
            .iter()
            .map(|(k, v)| (*k, v.as_str()))
            .collect();
        assert_eq!(
            pairs,
            [
                ("color", "#FF0000"),
                ("font-size", "24px"),
                ("font-weight", "normal"),
                ("font-style", "italic"),
            ]
        );
    }

    #[test]
    fn test_auto_color_has_no_declaration() {
        let formatting = RunFormatting::new().with_font_color(FontColor::Auto);
        assert!(!formatting.is_empty());
        assert!(formatting.css_declarations().is_empty());
    }
}
