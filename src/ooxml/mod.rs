//! Readers for WordprocessingML parts.
//!
//! These turn the XML of `word/document.xml` and `word/styles.xml` into
//! a [`WordDocument`]. Opening the package itself is left to the caller,
//! which hands over the raw part bytes.
//!
//! # Example
//!
//! ```rust
//! use litchi_html::ooxml::read_document;
//!
//! let document = br#"<w:document xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main">
//!   <w:body><w:p><w:pPr><w:pStyle w:val="Normal"/></w:pPr><w:r><w:t>Hi</w:t></w:r></w:p></w:body>
//! </w:document>"#;
//! let styles = br#"<w:styles xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main">
//!   <w:style w:type="paragraph" w:styleId="Normal"><w:rPr><w:b/></w:rPr></w:style>
//! </w:styles>"#;
//!
//! let doc = read_document(document, Some(&styles[..]))?;
//! let converted = doc.convert()?;
//! assert!(converted.html.contains("font-weight:bold;"));
//! # Ok::<(), litchi_html::Error>(())
//! ```

mod body;
mod properties;
mod styles;

use crate::common::Result;
use crate::document::{StyleTable, WordDocument};

pub use body::parse_body;
pub use styles::parse_styles;

/// Read a document from its main part and, when present, its styles part.
///
/// A document without a styles part gets an empty style table, so any
/// paragraph style it references fails at conversion time.
pub fn read_document(document_xml: &[u8], styles_xml: Option<&[u8]>) -> Result<WordDocument> {
    let styles = match styles_xml {
        Some(xml) => parse_styles(xml)?,
        None => StyleTable::default(),
    };
    let body = parse_body(document_xml)?;

    Ok(WordDocument::new(body, styles))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::Error;

    const DOCUMENT: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<w:document xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main">
  <w:body>
    <w:p>
      <w:pPr><w:pStyle w:val="Title"/></w:pPr>
      <w:r><w:t>Report</w:t></w:r>
    </w:p>
    <w:p>
      <w:r><w:rPr><w:sz w:val="18"/></w:rPr><w:t>fine print</w:t></w:r>
    </w:p>
    <w:sectPr/>
  </w:body>
</w:document>"#;

    const STYLES: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<w:styles xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main">
  <w:docDefaults><w:rPrDefault><w:rPr><w:sz w:val="22"/></w:rPr></w:rPrDefault></w:docDefaults>
  <w:style w:type="paragraph" w:styleId="Normal"><w:name w:val="Normal"/></w:style>
  <w:style w:type="paragraph" w:styleId="Title">
    <w:basedOn w:val="Normal"/>
    <w:rPr><w:color w:val="1F3864"/><w:sz w:val="56"/></w:rPr>
  </w:style>
</w:styles>"#;

    #[test]
    fn test_read_and_convert() {
        let doc = read_document(DOCUMENT.as_bytes(), Some(STYLES.as_bytes())).unwrap();
        assert_eq!(doc.text(), "Report\nfine print");

        let converted = doc.convert().unwrap();
        assert_eq!(
            converted.html,
            concat!(
                r##"<article><p class="Title" style="white-space:nowrap;"><span style="color:#1F3864; font-size:56px;">Report</span></p>"##,
                r#"<p style="white-space:nowrap;"><span style="font-size:18px;">fine print</span></p></article>"#,
            )
        );
        assert_eq!(
            converted.css,
            ".Normal {\n  font-size: 22px;\n}\n\n.Title {\n  color: #1F3864;\n  font-size: 56px;\n}\n"
        );
    }

    #[test]
    fn test_missing_styles_part() {
        let doc = read_document(DOCUMENT.as_bytes(), None).unwrap();
        assert!(doc.styles.is_empty());
        assert!(matches!(
            doc.convert(),
            Err(Error::UnknownStyleReference { .. })
        ));
    }
}
