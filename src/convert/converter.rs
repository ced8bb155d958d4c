/// Builds markup trees from document body elements.
use crate::common::Result;
use crate::document::{BodyElement, ParagraphInfo, RunFormatting, RunInfo, StyleTable};
use crate::html::{HtmlOptions, MarkupNode};

/// Converts paragraphs and runs into a [`MarkupNode`] tree.
///
/// One converter serves one document: it borrows that document's style
/// table and never outlives the conversion call.
#[derive(Debug, Clone, Copy)]
pub struct DocumentConverter<'a> {
    styles: &'a StyleTable,
    options: &'a HtmlOptions,
}

impl<'a> DocumentConverter<'a> {
    /// Create a converter over a style table.
    pub fn new(styles: &'a StyleTable, options: &'a HtmlOptions) -> Self {
        Self { styles, options }
    }

    /// The style table this converter resolves against.
    #[inline]
    pub fn styles(&self) -> &'a StyleTable {
        self.styles
    }

    /// Build the markup tree for a document body.
    ///
    /// The root element is named `root_tag`. Each paragraph becomes a
    /// paragraph element carrying its style id as class name, each run a
    /// run element carrying its resolved formatting as inline style.
    /// Elements other than paragraphs are skipped.
    pub fn convert_to_markup(&self, body: &[BodyElement], root_tag: &str) -> Result<MarkupNode> {
        let mut root = MarkupNode::new(root_tag)?;

        for element in body {
            match element {
                BodyElement::Paragraph(paragraph) => {
                    root.add_child(self.convert_paragraph(paragraph)?);
                },
                BodyElement::Other { tag } => {
                    log::debug!("skipping unsupported body element <{}>", tag);
                },
            }
        }

        Ok(root)
    }

    /// Build the element for one paragraph and its runs.
    pub fn convert_paragraph(&self, paragraph: &ParagraphInfo) -> Result<MarkupNode> {
        let mut node = MarkupNode::new(self.options.paragraph_tag.as_str())?;

        let inherited = match non_blank(paragraph.style_id.as_deref()) {
            Some(style_id) => {
                node.add_class_name(style_id)?;
                self.styles.resolve(style_id)?
            },
            None => *self.styles.defaults(),
        };

        if self.options.no_wrap {
            node.add_style_property("white-space", "nowrap");
        }

        for run in &paragraph.runs {
            node.add_child(self.convert_run(run, inherited)?);
        }

        Ok(node)
    }

    /// Build the element for one run.
    ///
    /// Direct run formatting wins over the run's character style, which
    /// wins over the formatting inherited from the paragraph. The character
    /// style contributes its chain only, so document defaults never mask
    /// paragraph formatting.
    pub fn convert_run(&self, run: &RunInfo, inherited: RunFormatting) -> Result<MarkupNode> {
        let mut node = MarkupNode::with_text(self.options.run_tag.as_str(), run.text.as_str())?;

        let mut effective = run.formatting;
        if let Some(style_id) = non_blank(run.style_id.as_deref()) {
            node.add_class_name(style_id)?;
            effective = effective.or(self.styles.resolve_chain(style_id)?);
        }
        effective = effective.or(inherited);

        for (property, value) in effective.css_declarations() {
            node.add_style_property(property, &value);
        }

        Ok(node)
    }
}

/// A blank style id counts as no style id.
fn non_blank(style_id: Option<&str>) -> Option<&str> {
    style_id.filter(|id| !id.trim().is_empty())
}
