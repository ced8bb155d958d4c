/// Core trait for HTML conversion.
///
/// This module defines the `ToHtml` trait implemented by markup trees and
/// by whole documents.
use super::config::HtmlOptions;
use super::node::MarkupNode;
use super::writer::render_with_options;
use crate::common::Result;

/// Core trait for types that can be converted to HTML.
///
/// # Examples
///
/// ```rust
/// use litchi_html::html::{MarkupNode, ToHtml};
///
/// let node = MarkupNode::with_text("p", "Hello")?;
/// assert_eq!(node.to_html()?, "<p>Hello</p>");
/// # Ok::<(), litchi_html::Error>(())
/// ```
pub trait ToHtml {
    /// Convert this item to HTML with default options.
    fn to_html(&self) -> Result<String> {
        self.to_html_with_options(&HtmlOptions::default())
    }

    /// Convert this item to HTML with custom options.
    fn to_html_with_options(&self, options: &HtmlOptions) -> Result<String>;
}

impl ToHtml for MarkupNode {
    fn to_html_with_options(&self, options: &HtmlOptions) -> Result<String> {
        Ok(render_with_options(self, options))
    }
}
