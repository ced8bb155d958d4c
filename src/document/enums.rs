/// Enumerations for Word document styles.
use serde::{Deserialize, Serialize};
use std::fmt;

/// Specifies the kind of a style definition.
///
/// Corresponds to the `w:type` attribute of `<w:style>`.
///
/// # Examples
///
/// ```rust
/// use litchi_html::document::StyleType;
///
/// let style_type = StyleType::Paragraph;
/// assert_eq!(style_type.to_xml(), "paragraph");
/// assert_eq!(StyleType::from_xml("character"), Some(StyleType::Character));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[repr(u8)]
pub enum StyleType {
    /// Paragraph style.
    #[default]
    Paragraph = 1,
    /// Character (run) style.
    Character = 2,
    /// Table style.
    Table = 3,
    /// Numbering style.
    Numbering = 4,
}

impl StyleType {
    /// Convert the style type to its XML attribute value.
    #[inline]
    pub const fn to_xml(self) -> &'static str {
        match self {
            Self::Paragraph => "paragraph",
            Self::Character => "character",
            Self::Table => "table",
            Self::Numbering => "numbering",
        }
    }

    /// Parse style type from XML attribute value.
    ///
    /// Returns `None` if the value is not recognized.
    #[inline]
    pub fn from_xml(s: &str) -> Option<Self> {
        match s {
            "paragraph" => Some(Self::Paragraph),
            "character" => Some(Self::Character),
            "table" => Some(Self::Table),
            "numbering" => Some(Self::Numbering),
            _ => None,
        }
    }
}

impl fmt::Display for StyleType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Paragraph => write!(f, "Paragraph"),
            Self::Character => write!(f, "Character"),
            Self::Table => write!(f, "Table"),
            Self::Numbering => write!(f, "Numbering"),
        }
    }
}
