//! Input records handed to the converter by a document reader.
//!
//! These are plain data: the reader that extracted them owns their
//! correctness, the converter only reads them.

use super::formatting::RunFormatting;
use crate::common::FontColor;
use serde::{Deserialize, Serialize};

/// A contiguous span of text sharing direct formatting.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RunInfo {
    /// Run text
    pub text: String,
    /// Character style applied to the run (`w:rStyle`)
    pub style_id: Option<String>,
    /// Formatting set directly on the run
    #[serde(flatten)]
    pub formatting: RunFormatting,
}

impl RunInfo {
    /// Create a run with text and no direct formatting.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Self::default()
        }
    }

    /// Set the character style.
    pub fn with_style(mut self, style_id: impl Into<String>) -> Self {
        self.style_id = Some(style_id.into());
        self
    }

    /// Set a direct font size.
    pub fn with_font_size(mut self, size: u32) -> Self {
        self.formatting.font_size = Some(size);
        self
    }

    /// Set a direct font color.
    pub fn with_font_color(mut self, color: impl Into<FontColor>) -> Self {
        self.formatting.font_color = Some(color.into());
        self
    }

    /// Set direct bold.
    pub fn with_bold(mut self, bold: bool) -> Self {
        self.formatting.bold = Some(bold);
        self
    }

    /// Set direct italic.
    pub fn with_italic(mut self, italic: bool) -> Self {
        self.formatting.italic = Some(italic);
        self
    }
}

/// A paragraph: an optional paragraph style and its runs in order.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ParagraphInfo {
    /// Paragraph style (`w:pStyle`)
    pub style_id: Option<String>,
    /// Runs in document order
    pub runs: Vec<RunInfo>,
}

impl ParagraphInfo {
    /// Create a paragraph with the given style and no runs.
    pub fn new(style_id: Option<&str>) -> Self {
        Self {
            style_id: style_id.map(str::to_string),
            runs: Vec::new(),
        }
    }

    /// Append a run.
    pub fn with_run(mut self, run: RunInfo) -> Self {
        self.runs.push(run);
        self
    }

    /// Concatenated text of all runs.
    pub fn text(&self) -> String {
        self.runs.iter().map(|r| r.text.as_str()).collect()
    }
}

/// A top-level element of the document body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum BodyElement {
    /// A paragraph
    Paragraph(ParagraphInfo),
    /// Any element the converter does not render (tables, section
    /// properties, content controls...)
    Other {
        /// Local name of the element, e.g. `tbl`
        tag: String,
    },
}

impl From<ParagraphInfo> for BodyElement {
    fn from(paragraph: ParagraphInfo) -> Self {
        BodyElement::Paragraph(paragraph)
    }
}
