/// Helpers shared by the part readers: attribute access and run properties.
use crate::common::{Error, FontColor, Result};
use crate::document::RunFormatting;
use quick_xml::Reader;
use quick_xml::events::BytesStart;

/// Read the value of the attribute whose local name is `name`.
pub(crate) fn attribute_value(
    element: &BytesStart<'_>,
    reader: &Reader<&[u8]>,
    name: &[u8],
) -> Result<Option<String>> {
    for attr in element.attributes() {
        let attr = attr?;
        if attr.key.local_name().as_ref() == name {
            return match attr.decode_and_unescape_value(reader.decoder()) {
                Ok(value) => Ok(Some(value.into_owned())),
                Err(e) => Err(Error::XmlError(e.to_string())),
            };
        }
    }
    Ok(None)
}

/// Local name of an element as an owned string.
pub(crate) fn local_name(element: &BytesStart<'_>) -> String {
    String::from_utf8_lossy(element.local_name().as_ref()).into_owned()
}

/// Apply one child element of `w:rPr` to `formatting`.
///
/// Unknown elements are ignored; unparseable values are skipped with a
/// warning so that one odd property does not sink the whole document.
pub(crate) fn apply_run_property(
    formatting: &mut RunFormatting,
    element: &BytesStart<'_>,
    reader: &Reader<&[u8]>,
) -> Result<()> {
    match element.local_name().as_ref() {
        b"color" => {
            if let Some(value) = attribute_value(element, reader, b"val")? {
                match value.parse::<FontColor>() {
                    Ok(color) => formatting.font_color = Some(color),
                    Err(_) => log::warn!("ignoring unsupported color value '{}'", value),
                }
            }
        },
        b"sz" => {
            if let Some(value) = attribute_value(element, reader, b"val")? {
                match value.trim().parse::<u32>() {
                    Ok(size) => formatting.font_size = Some(size),
                    Err(_) => log::warn!("ignoring unsupported font size '{}'", value),
                }
            }
        },
        b"b" => formatting.bold = Some(toggle_value(element, reader)?),
        b"i" => formatting.italic = Some(toggle_value(element, reader)?),
        _ => {},
    }
    Ok(())
}

/// On/off properties are on when `w:val` is absent.
fn toggle_value(element: &BytesStart<'_>, reader: &Reader<&[u8]>) -> Result<bool> {
    Ok(match attribute_value(element, reader, b"val")? {
        None => true,
        Some(value) => !matches!(value.as_str(), "0" | "false" | "off"),
    })
}
