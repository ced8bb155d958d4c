//! Unified error types for litchi-html.
//!
//! Every failure the converter can raise is a property of the input document
//! (or of the calls used to build a markup tree). None of them are transient.
use thiserror::Error;

/// Main error type for markup construction, style resolution and conversion.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Malformed construction or mutation call (empty names, invalid tags)
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// A style id that is not present in the style table
    #[error("{}", unknown_reference_message(.style_id, .referenced_by))]
    UnknownStyleReference {
        /// The id that could not be found
        style_id: String,
        /// The style whose `basedOn` points at the missing id, if any
        referenced_by: Option<String>,
    },

    /// The based-on chain of a style loops back on itself
    #[error("Cyclic style chain: resolving '{style_id}' revisits '{revisited}'")]
    CyclicStyleChain {
        /// The style resolution started from
        style_id: String,
        /// The first id seen twice
        revisited: String,
    },

    /// Two style records share the same id
    #[error("Duplicate style id: {0}")]
    DuplicateStyleId(String),

    /// XML parsing error
    #[error("XML error: {0}")]
    XmlError(String),

    /// Input that is well-formed but not usable (bad YAML, bad attribute values)
    #[error("Invalid format: {0}")]
    InvalidFormat(String),
}

fn unknown_reference_message(style_id: &str, referenced_by: &Option<String>) -> String {
    match referenced_by {
        Some(owner) => format!("Unknown style reference: '{owner}' is based on missing style '{style_id}'"),
        None => format!("Unknown style reference: '{style_id}'"),
    }
}

impl Error {
    pub(crate) fn invalid_argument(msg: impl Into<String>) -> Self {
        Error::InvalidArgument(msg.into())
    }
}

/// Result type for litchi-html operations.
pub type Result<T> = std::result::Result<T, Error>;
