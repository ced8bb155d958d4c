//! Litchi HTML - Convert Word documents into HTML markup and CSS
//!
//! This library turns the paragraphs, runs and styles of a Word document
//! into an HTML fragment plus a stylesheet. Formatting inherited through
//! `basedOn` style chains is resolved before rendering, so every run carries
//! its effective font color, size, weight and slant.
//!
//! # Features
//!
//! - **Markup tree**: Build and render HTML element trees with [`html::MarkupNode`]
//! - **Style resolution**: Walk `basedOn` chains with cycle and dangling-reference detection
//! - **Stylesheet generation**: One CSS class rule per paragraph style
//! - **Batch conversion**: Convert many documents in parallel
//! - **OOXML readers**: Read `document.xml` and `styles.xml` parts (feature `ooxml`)
//!
//! # Example - Converting a document
//!
//! ```rust
//! use litchi_html::WordDocument;
//! use litchi_html::common::RGBColor;
//! use litchi_html::document::{ParagraphInfo, RunInfo, StyleRecord, StyleTable};
//!
//! # fn main() -> Result<(), litchi_html::Error> {
//! let styles = StyleTable::build(vec![
//!     StyleRecord::paragraph("Normal")
//!         .with_font_color(RGBColor::new(255, 0, 0))
//!         .with_font_size(24),
//! ])?;
//! let doc = WordDocument::new(
//!     vec![ParagraphInfo::new(Some("Normal")).with_run(RunInfo::new("Hello")).into()],
//!     styles,
//! );
//!
//! let converted = doc.convert()?;
//! println!("{}", converted.html);
//! println!("{}", converted.css);
//! # Ok(())
//! # }
//! ```
//!
//! # Example - Building markup by hand
//!
//! ```rust
//! use litchi_html::html::{MarkupNode, render};
//!
//! # fn main() -> Result<(), litchi_html::Error> {
//! let mut root = MarkupNode::new("div")?;
//! root.set_id("main")?;
//! root.add_child(MarkupNode::with_text("span", "hi")?);
//! assert_eq!(render(&root), r#"<div id="main"><span>hi</span></div>"#);
//! # Ok(())
//! # }
//! ```

/// Common types shared across modules: errors and colors
pub mod common;

/// Document to markup conversion and stylesheet generation
pub mod convert;

/// Word document input model and style resolution
pub mod document;

/// HTML element tree and serialization
pub mod html;

/// Readers for WordprocessingML parts
#[cfg(feature = "ooxml")]
pub mod ooxml;

// Re-export commonly used types for convenience
pub use common::{Error, Result};
pub use convert::{ConvertedDocument, convert_batch};
pub use document::WordDocument;
pub use html::ToHtml;
