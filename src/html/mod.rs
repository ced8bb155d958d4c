/// HTML markup trees and their rendering.
///
/// This module holds the in-memory markup model the converter builds and
/// the writer that turns it into text.
///
/// # Architecture
///
/// - [`MarkupNode`]: one element with id, classes, inline styles,
///   attributes, leading text and ordered children
/// - [`HtmlWriter`]: serializes a tree with a fixed attribute order
/// - [`HtmlOptions`]: rendering and conversion configuration
/// - [`ToHtml`]: implemented by trees and documents
///
/// # Example
///
/// ```rust
/// use litchi_html::html::{MarkupNode, render};
///
/// let mut tag = MarkupNode::with_text("tag", "...")?;
/// tag.set_id("x")?;
/// tag.add_class_name("a")?;
/// tag.add_class_name("b")?;
/// tag.add_style_property("color", "red");
/// tag.add_attribute("data-x", "1")?;
///
/// assert_eq!(
///     render(&tag),
///     r#"<tag id="x" class="a, b" style="color:red;" data-x="1">...</tag>"#
/// );
/// # Ok::<(), litchi_html::Error>(())
/// ```
// Module declarations
mod config;
mod node;
mod traits;
mod writer;

// Re-export public API
pub use config::{ClassSeparator, HtmlOptions};
pub use node::MarkupNode;
pub use traits::ToHtml;
pub use writer::{HtmlWriter, render, render_with_options};
