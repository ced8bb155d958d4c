//! Error conversion implementations.
//!
//! This module contains From trait implementations to convert errors raised by
//! the XML layer into the unified Error type.

#[cfg(feature = "ooxml")]
use super::types::Error;

#[cfg(feature = "ooxml")]
impl From<quick_xml::Error> for Error {
    fn from(err: quick_xml::Error) -> Self {
        Error::XmlError(err.to_string())
    }
}

#[cfg(feature = "ooxml")]
impl From<quick_xml::events::attributes::AttrError> for Error {
    fn from(err: quick_xml::events::attributes::AttrError) -> Self {
        Error::XmlError(err.to_string())
    }
}

#[cfg(all(test, feature = "ooxml"))]
mod tests {
    use super::*;

    #[test]
    fn test_xml_errors_convert() {
        let mut reader = quick_xml::Reader::from_str("<a></b>");
        let err = loop {
            match reader.read_event() {
                Ok(quick_xml::events::Event::Eof) => panic!("expected a mismatch error"),
                Ok(_) => continue,
                Err(e) => break Error::from(e),
            }
        };
        assert!(matches!(err, Error::XmlError(_)));
    }
}
