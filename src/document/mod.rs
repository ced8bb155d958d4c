/// Word document input model.
///
/// This module holds what a document reader hands to the converter: body
/// elements (paragraphs with their runs), the style table, and the style
/// resolution logic that walks `basedOn` chains.
///
/// # Architecture
///
/// - [`WordDocument`]: body elements plus style table
/// - [`BodyElement`], [`ParagraphInfo`], [`RunInfo`]: body content
/// - [`StyleTable`], [`StyleRecord`]: styles and chain resolution
/// - [`RunFormatting`]: the character properties that get resolved
///
/// # Example
///
/// ```rust
/// use litchi_html::document::{ParagraphInfo, RunInfo, StyleRecord, StyleTable, WordDocument};
/// use litchi_html::common::RGBColor;
///
/// let styles = StyleTable::build(vec![
///     StyleRecord::paragraph("Normal")
///         .with_font_color(RGBColor::new(255, 0, 0))
///         .with_font_size(24),
/// ])?;
/// let doc = WordDocument::new(
///     vec![ParagraphInfo::new(Some("Normal")).with_run(RunInfo::new("Hello")).into()],
///     styles,
/// );
///
/// let converted = doc.convert()?;
/// assert!(converted.html.contains("Hello"));
/// # Ok::<(), litchi_html::Error>(())
/// ```
// Submodule declarations
mod enums;
mod formatting;
mod styles;
mod types;

use crate::common::{Error, Result};
use serde::{Deserialize, Serialize};

// Re-exports
pub use enums::StyleType;
pub use formatting::{Declarations, RunFormatting};
pub use styles::{StyleRecord, StyleTable, build_style_table, resolve_run_formatting};
pub use types::{BodyElement, ParagraphInfo, RunInfo};

/// A pre-parsed Word document: body content plus styles.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WordDocument {
    /// Top-level body elements in document order
    pub body: Vec<BodyElement>,
    /// Style definitions
    pub styles: StyleTable,
}

impl WordDocument {
    /// Create a document from body elements and styles.
    pub fn new(body: Vec<BodyElement>, styles: StyleTable) -> Self {
        Self { body, styles }
    }

    /// Load a document from YAML.
    ///
    /// The style table is validated for duplicate ids while loading.
    ///
    /// ```rust
    /// use litchi_html::document::WordDocument;
    ///
    /// let doc = WordDocument::from_yaml(r#"
    /// body:
    ///   - kind: paragraph
    ///     style_id: Normal
    ///     runs:
    ///       - text: Hello
    /// styles:
    ///   records:
    ///     - style_id: Normal
    ///       font_size: 24
    /// "#)?;
    /// assert_eq!(doc.paragraphs().count(), 1);
    /// # Ok::<(), litchi_html::Error>(())
    /// ```
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        serde_saphyr::from_str(yaml)
            .map_err(|e| Error::InvalidFormat(format!("Failed to load document from YAML: {}", e)))
    }

    /// Paragraphs of the body, skipping other elements.
    pub fn paragraphs(&self) -> impl Iterator<Item = &ParagraphInfo> {
        self.body.iter().filter_map(|element| match element {
            BodyElement::Paragraph(paragraph) => Some(paragraph),
            BodyElement::Other { .. } => None,
        })
    }

    /// Plain text of the document, one line per paragraph.
    pub fn text(&self) -> String {
        self.paragraphs()
            .map(ParagraphInfo::text)
            .collect::<Vec<_>>()
            .join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::{FontColor, RGBColor};

    const SAMPLE: &str = r#"
body:
  - kind: paragraph
    style_id: Heading1
    runs:
      - text: Title
  - kind: other
    tag: tbl
  - kind: paragraph
    runs:
      - text: "Plain "
      - text: red
        font_color: FF0000
        bold: true
styles:
  defaults:
    font_size: 22
  records:
    - style_id: Normal
      style_type: paragraph
    - style_id: Heading1
      style_type: paragraph
      based_on: Normal
      font_size: 32
"#;

    #[test]
    fn test_from_yaml() {
        let doc = WordDocument::from_yaml(SAMPLE).unwrap();

        assert_eq!(doc.body.len(), 3);
        assert_eq!(doc.body[1], BodyElement::Other { tag: "tbl".to_string() });
        assert_eq!(doc.text(), "Title\nPlain red");

        let runs = &doc.paragraphs().nth(1).unwrap().runs;
        assert_eq!(
            runs[1].formatting.font_color,
            Some(FontColor::Rgb(RGBColor::new(255, 0, 0)))
        );
        assert_eq!(runs[1].formatting.bold, Some(true));

        assert_eq!(doc.styles.defaults().font_size, Some(22));
        assert_eq!(doc.styles.resolve("Heading1").unwrap().font_size, Some(32));
        assert_eq!(doc.styles.resolve("Normal").unwrap().font_size, Some(22));
    }

    #[test]
    fn test_from_yaml_digit_only_colors() {
        let yaml = r#"
body:
  - kind: paragraph
    style_id: Body
    runs:
      - text: black
        font_color: 000000
styles:
  records:
    - style_id: Body
      font_color: 112233
"#;
        let doc = WordDocument::from_yaml(yaml).unwrap();

        let run = &doc.paragraphs().next().unwrap().runs[0];
        assert_eq!(run.formatting.font_color, Some(FontColor::Rgb(RGBColor::new(0, 0, 0))));
        assert_eq!(
            doc.styles.resolve("Body").unwrap().font_color,
            Some(FontColor::Rgb(RGBColor::new(0x11, 0x22, 0x33)))
        );
    }

    #[test]
    fn test_from_yaml_rejects_duplicate_styles() {
        let yaml = r#"
styles:
  records:
    - style_id: Normal
    - style_id: Normal
"#;
        assert!(matches!(
            WordDocument::from_yaml(yaml),
            Err(Error::InvalidFormat(_))
        ));
    }
}
