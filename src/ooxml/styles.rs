/// Reader for the styles part (`word/styles.xml`).
use super::properties::{apply_run_property, attribute_value};
use crate::common::{Error, Result};
use crate::document::{RunFormatting, StyleRecord, StyleTable, StyleType};
use quick_xml::Reader;
use quick_xml::events::{BytesStart, Event};

/// Subtrees that never describe the style's current formatting: conditional
/// table formatting and tracked property changes holding the old values.
const SKIPPED: &[&[u8]] = &[b"tblStylePr", b"rPrChange", b"pPrChange"];

/// Parse a styles part into a [`StyleTable`].
///
/// Reads the document default run properties (`w:docDefaults`) and every
/// `w:style` with its type, id, name, `basedOn` link and run properties.
/// Conditional table formatting and tracked property changes are ignored.
/// Styles without an id are skipped with a warning.
///
/// # Examples
///
/// ```rust
/// use litchi_html::ooxml::parse_styles;
///
/// let xml = br#"<w:styles xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main">
///   <w:style w:type="paragraph" w:styleId="Normal">
///     <w:name w:val="Normal"/>
///     <w:rPr><w:sz w:val="24"/></w:rPr>
///   </w:style>
/// </w:styles>"#;
///
/// let styles = parse_styles(xml)?;
/// assert_eq!(styles.resolve("Normal")?.font_size, Some(24));
/// # Ok::<(), litchi_html::Error>(())
/// ```
pub fn parse_styles(xml: &[u8]) -> Result<StyleTable> {
    let mut reader = Reader::from_reader(xml);
    reader.config_mut().trim_text(true);

    let mut records = Vec::new();
    let mut defaults = RunFormatting::default();
    let mut current: Option<StyleRecord> = None;
    let mut in_doc_defaults = false;
    let mut in_rpr = false;
    // Nesting depth inside a skipped subtree, 0 when outside
    let mut skip_depth = 0usize;

    loop {
        match reader.read_event() {
            Ok(Event::Start(e)) => {
                if skip_depth > 0 || SKIPPED.contains(&e.local_name().as_ref()) {
                    skip_depth += 1;
                    continue;
                }
                match e.local_name().as_ref() {
                    b"docDefaults" => in_doc_defaults = true,
                    b"style" => current = start_style(&e, &reader)?,
                    b"rPr" => in_rpr = true,
                    _ => {
                        let target = property_target(&mut defaults, &mut current, in_doc_defaults);
                        on_property(&e, &reader, target, in_rpr)?;
                    },
                }
            },
            Ok(Event::Empty(e)) => {
                if skip_depth > 0 {
                    continue;
                }
                if e.local_name().as_ref() == b"style" {
                    records.extend(start_style(&e, &reader)?);
                    continue;
                }
                let target = property_target(&mut defaults, &mut current, in_doc_defaults);
                on_property(&e, &reader, target, in_rpr)?;
            },
            Ok(Event::End(e)) => {
                if skip_depth > 0 {
                    skip_depth -= 1;
                    continue;
                }
                match e.local_name().as_ref() {
                    b"docDefaults" => in_doc_defaults = false,
                    b"rPr" => in_rpr = false,
                    b"style" => {
                        if let Some(record) = current.take() {
                            records.push(record);
                        }
                    },
                    _ => {},
                }
            },
            Ok(Event::Eof) => break,
            Err(e) => return Err(Error::XmlError(format!("Failed to parse styles: {}", e))),
            _ => {},
        }
    }

    log::debug!("parsed {} style records", records.len());
    Ok(StyleTable::build(records)?.with_defaults(defaults))
}

/// Open a style record from the attributes of `w:style`.
fn start_style(element: &BytesStart<'_>, reader: &Reader<&[u8]>) -> Result<Option<StyleRecord>> {
    let style_type = attribute_value(element, reader, b"type")?
        .and_then(|value| StyleType::from_xml(&value))
        .unwrap_or_default();

    match attribute_value(element, reader, b"styleId")? {
        Some(style_id) if !style_id.trim().is_empty() => {
            Ok(Some(StyleRecord::new(style_id, style_type)))
        },
        _ => {
            log::warn!("skipping style without styleId");
            Ok(None)
        },
    }
}

/// What the current element applies to.
enum Target<'r> {
    Defaults(&'r mut RunFormatting),
    Style(&'r mut StyleRecord),
    Nothing,
}

fn property_target<'r>(
    defaults: &'r mut RunFormatting,
    current: &'r mut Option<StyleRecord>,
    in_doc_defaults: bool,
) -> Target<'r> {
    if in_doc_defaults {
        Target::Defaults(defaults)
    } else if let Some(record) = current.as_mut() {
        Target::Style(record)
    } else {
        Target::Nothing
    }
}

fn on_property(
    element: &BytesStart<'_>,
    reader: &Reader<&[u8]>,
    target: Target<'_>,
    run_property: bool,
) -> Result<()> {
    match target {
        Target::Defaults(defaults) if run_property => {
            apply_run_property(defaults, element, reader)?;
        },
        Target::Style(record) => match element.local_name().as_ref() {
            b"name" if !run_property => {
                record.name = attribute_value(element, reader, b"val")?;
            },
            b"basedOn" if !run_property => {
                record.based_on = attribute_value(element, reader, b"val")?
                    .filter(|value| !value.trim().is_empty());
            },
            _ if run_property => apply_run_property(&mut record.formatting, element, reader)?,
            _ => {},
        },
        _ => {},
    }
    Ok(())
}
