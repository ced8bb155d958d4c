/// Low-level writer for HTML generation.
///
/// This module provides the `HtmlWriter` struct which serializes a
/// [`MarkupNode`] tree into text. Attributes are always written in the same
/// order: `id`, `class`, `style`, then the free-form attributes in insertion
/// order. Elements without children and without text use the self-closing
/// form.
use super::config::HtmlOptions;
use super::node::MarkupNode;
use std::borrow::Cow;

/// Writer that accumulates rendered markup in a single buffer.
///
/// Rendering cannot fail: every node is validated when it is built.
#[derive(Debug)]
pub struct HtmlWriter {
    /// The output buffer
    buffer: String,
    /// Current options
    options: HtmlOptions,
}

impl Default for HtmlWriter {
    fn default() -> Self {
        Self::new(HtmlOptions::default())
    }
}

impl HtmlWriter {
    /// Create a new writer with the given options.
    pub fn new(options: HtmlOptions) -> Self {
        Self {
            buffer: String::with_capacity(2048),
            options,
        }
    }

    /// Options this writer renders with.
    #[inline]
    pub fn options(&self) -> &HtmlOptions {
        &self.options
    }

    /// Render a node and all of its descendants into the buffer.
    pub fn write_node(&mut self, node: &MarkupNode) {
        self.buffer.push('<');
        self.buffer.push_str(node.name());
        self.write_attributes(node);

        if node.is_empty_element() {
            self.buffer.push_str("/>");
            return;
        }

        self.buffer.push('>');
        let text = self.escape_text(node.text());
        self.buffer.push_str(&text);

        for child in node.children() {
            self.write_node(child);
        }

        self.buffer.push_str("</");
        self.buffer.push_str(node.name());
        self.buffer.push('>');
    }

    fn write_attributes(&mut self, node: &MarkupNode) {
        if let Some(id) = node.id() {
            self.write_attribute("id", id);
        }

        if !node.class_names().is_empty() {
            let classes = node
                .class_names()
                .join(self.options.class_separator.as_str());
            self.write_attribute("class", &classes);
        }

        let mut style = String::new();
        for (property, value) in node.style_properties() {
            if !style.is_empty() {
                style.push(' ');
            }
            style.push_str(property);
            style.push(':');
            style.push_str(value);
            style.push(';');
        }
        if !style.is_empty() {
            self.write_attribute("style", &style);
        }

        for (name, value) in node.attributes() {
            self.write_attribute(name, value);
        }
    }

    fn write_attribute(&mut self, name: &str, value: &str) {
        let value = if self.options.escape_markup {
            html_escape::encode_double_quoted_attribute(value)
        } else {
            Cow::Borrowed(value)
        };
        self.buffer.push(' ');
        self.buffer.push_str(name);
        self.buffer.push_str("=\"");
        self.buffer.push_str(&value);
        self.buffer.push('"');
    }

    fn escape_text<'a>(&self, text: &'a str) -> Cow<'a, str> {
        if self.options.escape_markup {
            html_escape::encode_text(text)
        } else {
            Cow::Borrowed(text)
        }
    }

    /// Get the rendered output, consuming the writer.
    pub fn finish(self) -> String {
        self.buffer
    }
}

/// Render a tree with default options.
pub fn render(node: &MarkupNode) -> String {
    render_with_options(node, &HtmlOptions::default())
}

/// Render a tree with the given options.
pub fn render_with_options(node: &MarkupNode, options: &HtmlOptions) -> String {
    let mut writer = HtmlWriter::new(options.clone());
    writer.write_node(node);
    writer.finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::html::ClassSeparator;
    use proptest::prelude::*;

    fn node(name: &str) -> MarkupNode {
        MarkupNode::new(name).unwrap()
    }

    #[test]
    fn test_empty_element_is_self_closing() {
        assert_eq!(render(&node("br")), "<br/>");

        let mut with_class = node("hr");
        with_class.add_class_name("rule").unwrap();
        assert_eq!(render(&with_class), r#"<hr class="rule"/>"#);
    }

    #[test]
    fn test_text_or_children_use_open_and_close_tags() {
        assert_eq!(render(&MarkupNode::with_text("p", "Hi").unwrap()), "<p>Hi</p>");

        let mut parent = node("div");
        parent.add_child(node("br"));
        assert_eq!(render(&parent), "<div><br/></div>");
    }

    #[test]
    fn test_text_is_written_before_children() {
        let mut parent = MarkupNode::with_text("p", "lead ").unwrap();
        parent.add_child(MarkupNode::with_text("b", "bold").unwrap());
        parent.add_child(MarkupNode::with_text("i", "italic").unwrap());
        assert_eq!(render(&parent), "<p>lead <b>bold</b><i>italic</i></p>");
    }

    #[test]
    fn test_attribute_order() {
        let mut tag = MarkupNode::with_text("tag", "...").unwrap();
        tag.add_attribute("data-x", "1").unwrap();
        tag.add_style_property("color", "red");
        tag.add_class_name("a").unwrap();
        tag.add_class_name("b").unwrap();
        tag.set_id("x").unwrap();

        assert_eq!(
            render(&tag),
            r#"<tag id="x" class="a, b" style="color:red;" data-x="1">...</tag>"#
        );
    }

    #[test]
    fn test_style_declarations_are_space_separated() {
        let mut span = MarkupNode::with_text("span", "Hello").unwrap();
        span.add_style_property("color", "#FF0000");
        span.add_style_property("font-size", "24px");
        assert_eq!(
            render(&span),
            r##"<span style="color:#FF0000; font-size:24px;">Hello</span>"##
        );
    }

    #[test]
    fn test_space_class_separator() {
        let mut p = node("p");
        p.add_class_name("a").unwrap();
        p.add_class_name("b").unwrap();
        let options = HtmlOptions::new().with_class_separator(ClassSeparator::Space);
        assert_eq!(render_with_options(&p, &options), r#"<p class="a b"/>"#);
    }

    #[test]
    fn test_escaping_can_be_disabled() {
        let mut p = MarkupNode::with_text("p", "a < b & c").unwrap();
        p.add_attribute("title", r#"say "hi""#).unwrap();

        assert_eq!(
            render(&p),
            r#"<p title="say &quot;hi&quot;">a &lt; b &amp; c</p>"#
        );
        assert_eq!(
            render_with_options(&p, &HtmlOptions::new().with_escaping(false)),
            r#"<p title="say "hi"">a < b & c</p>"#
        );
    }

    #[test]
    fn test_writer_accumulates_nodes() {
        let mut writer = HtmlWriter::default();
        writer.write_node(&node("a"));
        writer.write_node(&MarkupNode::with_text("b", "x").unwrap());
        assert_eq!(writer.finish(), "<a/><b>x</b>");
    }

    fn arb_tree() -> impl Strategy<Value = MarkupNode> {
        let leaf = ("[a-z]{1,6}", "[ -~]{0,12}", proptest::collection::vec("[a-z]{1,4}", 0..3))
            .prop_map(|(name, text, classes)| {
                let mut node = MarkupNode::with_text(name, text).unwrap();
                for class in classes {
                    node.add_class_name(class).unwrap();
                }
                node
            });
        leaf.prop_recursive(3, 24, 4, |inner| {
            ("[a-z]{1,6}", proptest::collection::vec(inner, 0..4)).prop_map(|(name, children)| {
                let mut node = MarkupNode::new(name).unwrap();
                for child in children {
                    node.add_child(child);
                }
                node
            })
        })
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        #[test]
        fn prop_rendering_is_deterministic(tree in arb_tree()) {
            prop_assert_eq!(render(&tree), render(&tree));
        }

        #[test]
        fn prop_self_closing_iff_empty(tree in arb_tree()) {
            let html = render(&tree);
            let closing = format!("</{}>", tree.name());
            if tree.is_empty_element() {
                prop_assert!(html.ends_with("/>"));
                prop_assert!(!html.ends_with(&closing));
            } else {
                prop_assert!(html.ends_with(&closing));
            }
        }
    }
}
