/// Reader for the main document part (`word/document.xml`).
///
/// Only the top-level children of `w:body` are turned into elements.
/// Paragraph content is flattened into runs: runs nested in hyperlinks,
/// smart tags or simple fields are read in document order, while
/// drawings, deleted or moved-away revisions, tracked property changes and
/// alternate content are skipped.
use super::properties::{apply_run_property, attribute_value, local_name};
use crate::common::{Error, Result};
use crate::document::{BodyElement, ParagraphInfo, RunInfo};
use quick_xml::Reader;
use quick_xml::events::{BytesStart, Event};

/// Subtrees whose text never shows up in the flattened paragraph.
const SKIPPED: &[&[u8]] = &[
    b"drawing",
    b"pict",
    b"object",
    b"AlternateContent",
    b"del",
    b"moveFrom",
    // tracked property changes hold the formatting before the revision
    b"pPrChange",
    b"rPrChange",
];

/// Parse a document part into its body elements.
///
/// Paragraphs (`w:p`) become [`BodyElement::Paragraph`], every other
/// top-level child of `w:body` becomes [`BodyElement::Other`] with its
/// local name as tag.
///
/// # Examples
///
/// ```rust
/// use litchi_html::document::BodyElement;
/// use litchi_html::ooxml::parse_body;
///
/// let xml = br#"<w:document xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main">
///   <w:body>
///     <w:p><w:pPr><w:pStyle w:val="Title"/></w:pPr><w:r><w:t>Hello</w:t></w:r></w:p>
///     <w:sectPr/>
///   </w:body>
/// </w:document>"#;
///
/// let body = parse_body(xml)?;
/// assert_eq!(body.len(), 2);
/// assert_eq!(body[1], BodyElement::Other { tag: "sectPr".to_string() });
/// # Ok::<(), litchi_html::Error>(())
/// ```
pub fn parse_body(xml: &[u8]) -> Result<Vec<BodyElement>> {
    let mut reader = Reader::from_reader(xml);
    let mut parser = BodyParser::default();

    loop {
        match reader.read_event() {
            Ok(Event::Start(e)) => parser.on_start(&e, &reader)?,
            Ok(Event::Empty(e)) => parser.on_empty(&e, &reader)?,
            Ok(Event::End(e)) => parser.on_end(e.local_name().as_ref()),
            Ok(Event::Text(e)) => {
                if parser.in_text() {
                    let text = e.decode().map_err(|err| Error::XmlError(err.to_string()))?;
                    parser.push_text(&text);
                }
            },
            Ok(Event::CData(e)) => {
                if parser.in_text() {
                    let text = e.decode().map_err(|err| Error::XmlError(err.to_string()))?;
                    parser.push_text(&text);
                }
            },
            Ok(Event::GeneralRef(e)) => {
                if parser.in_text() {
                    let name = e.decode().map_err(|err| Error::XmlError(err.to_string()))?;
                    match resolve_entity(&name) {
                        Some(c) => parser.push_char(c),
                        None => log::warn!("ignoring unknown entity reference &{};", name),
                    }
                }
            },
            Ok(Event::Eof) => break,
            Err(e) => return Err(e.into()),
            _ => {},
        }
    }

    log::debug!("parsed {} body elements", parser.elements.len());
    Ok(parser.elements)
}

/// Streaming state for [`parse_body`].
#[derive(Default)]
struct BodyParser {
    elements: Vec<BodyElement>,
    in_body: bool,
    /// Element depth below `w:body`
    depth: usize,
    /// Depth at which a skipped subtree started
    skip_from: Option<usize>,
    paragraph: Option<ParagraphInfo>,
    run: Option<RunInfo>,
    in_run_properties: bool,
    in_paragraph_properties: bool,
    in_text: bool,
}

impl BodyParser {
    fn in_text(&self) -> bool {
        self.in_text && self.skip_from.is_none()
    }

    fn push_text(&mut self, text: &str) {
        if let Some(run) = self.run.as_mut() {
            run.text.push_str(text);
        }
    }

    fn push_char(&mut self, c: char) {
        if let Some(run) = self.run.as_mut() {
            run.text.push(c);
        }
    }

    fn on_start(&mut self, e: &BytesStart<'_>, reader: &Reader<&[u8]>) -> Result<()> {
        let name = e.local_name();
        let name = name.as_ref();

        if !self.in_body {
            self.in_body = name == b"body";
            return Ok(());
        }

        self.depth += 1;
        if self.skip_from.is_some() {
            return Ok(());
        }

        if self.depth == 1 {
            if name == b"p" {
                self.paragraph = Some(ParagraphInfo::default());
            } else {
                self.elements.push(BodyElement::Other { tag: local_name(e) });
                self.skip_from = Some(self.depth);
            }
            return Ok(());
        }

        if SKIPPED.contains(&name) {
            self.skip_from = Some(self.depth);
            return Ok(());
        }

        match name {
            b"pPr" => self.in_paragraph_properties = true,
            b"r" if self.run.is_none() => self.run = Some(RunInfo::default()),
            b"rPr" => self.in_run_properties = true,
            b"t" => self.in_text = self.run.is_some(),
            _ => self.on_leaf(e, reader)?,
        }
        Ok(())
    }

    fn on_empty(&mut self, e: &BytesStart<'_>, reader: &Reader<&[u8]>) -> Result<()> {
        if !self.in_body || self.skip_from.is_some() {
            return Ok(());
        }

        if self.depth == 0 {
            let element = match e.local_name().as_ref() {
                b"p" => ParagraphInfo::default().into(),
                _ => BodyElement::Other { tag: local_name(e) },
            };
            self.elements.push(element);
            return Ok(());
        }

        self.on_leaf(e, reader)
    }

    /// Property or content element inside a paragraph.
    fn on_leaf(&mut self, e: &BytesStart<'_>, reader: &Reader<&[u8]>) -> Result<()> {
        let name = e.local_name();

        if let Some(run) = self.run.as_mut() {
            if self.in_run_properties {
                if name.as_ref() == b"rStyle" {
                    run.style_id = attribute_value(e, reader, b"val")?
                        .filter(|value| !value.trim().is_empty());
                } else {
                    apply_run_property(&mut run.formatting, e, reader)?;
                }
            } else {
                match name.as_ref() {
                    b"tab" => run.text.push('\t'),
                    b"br" | b"cr" => run.text.push('\n'),
                    _ => {},
                }
            }
        } else if self.in_paragraph_properties
            && name.as_ref() == b"pStyle"
            && let Some(paragraph) = self.paragraph.as_mut()
        {
            paragraph.style_id = attribute_value(e, reader, b"val")?
                .filter(|value| !value.trim().is_empty());
        }
        Ok(())
    }

    fn on_end(&mut self, name: &[u8]) {
        if !self.in_body {
            return;
        }
        if self.depth == 0 {
            // end of w:body
            self.in_body = false;
            return;
        }

        let depth = self.depth;
        self.depth -= 1;

        if let Some(skip_from) = self.skip_from {
            if depth == skip_from {
                self.skip_from = None;
            }
            return;
        }

        match name {
            b"pPr" => self.in_paragraph_properties = false,
            b"rPr" => self.in_run_properties = false,
            b"t" => self.in_text = false,
            b"r" => {
                if let (Some(run), Some(paragraph)) = (self.run.take(), self.paragraph.as_mut()) {
                    paragraph.runs.push(run);
                }
            },
            b"p" if depth == 1 => {
                if let Some(paragraph) = self.paragraph.take() {
                    self.elements.push(paragraph.into());
                }
            },
            _ => {},
        }
    }
}

/// Resolve a predefined or numeric character reference.
fn resolve_entity(name: &str) -> Option<char> {
    match name {
        "amp" => Some('&'),
        "lt" => Some('<'),
        "gt" => Some('>'),
        "quot" => Some('"'),
        "apos" => Some('\''),
        _ => {
            let code = name.strip_prefix('#')?;
            let value = match code.strip_prefix(['x', 'X']) {
                Some(hex) => u32::from_str_radix(hex, 16).ok()?,
                None => code.parse().ok()?,
            };
            char::from_u32(value)
        },
    }
}
