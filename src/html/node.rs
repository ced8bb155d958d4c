/// Markup tree nodes.
///
/// A [`MarkupNode`] is one element of the HTML output: a tag name, an
/// optional id, an ordered list of class names, an ordered set of inline
/// style declarations, free-form attributes, leading text and child
/// elements. Trees are always built fresh by the converter and owned
/// top-down, so nodes are never shared or re-attached.
use crate::common::{Error, Result};
use smallvec::SmallVec;

/// Attribute names that have dedicated fields on [`MarkupNode`].
const RESERVED_ATTRIBUTES: [&str; 3] = ["id", "class", "style"];

/// An ordered markup element.
///
/// # Examples
///
/// ```rust
/// use litchi_html::html::{MarkupNode, render};
///
/// let mut p = MarkupNode::new("p")?;
/// p.add_class_name("Normal")?;
/// p.add_style_property("white-space", "nowrap");
/// p.add_child(MarkupNode::with_text("span", "Hello")?);
///
/// assert_eq!(
///     render(&p),
///     r#"<p class="Normal" style="white-space:nowrap;"><span>Hello</span></p>"#
/// );
/// # Ok::<(), litchi_html::Error>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarkupNode {
    name: String,
    text: String,
    children: Vec<MarkupNode>,
    id: Option<String>,
    class_names: SmallVec<[String; 2]>,
    style_properties: SmallVec<[(String, String); 4]>,
    attributes: SmallVec<[(String, String); 2]>,
}

impl MarkupNode {
    /// Create an empty element.
    ///
    /// Fails with [`Error::InvalidArgument`] if `name` is blank or not a
    /// valid tag identifier.
    pub fn new(name: impl Into<String>) -> Result<Self> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(Error::invalid_argument("element name must not be empty"));
        }
        if !is_valid_tag_name(&name) {
            return Err(Error::invalid_argument(format!(
                "'{name}' is not a valid element name"
            )));
        }

        Ok(Self {
            name,
            text: String::new(),
            children: Vec::new(),
            id: None,
            class_names: SmallVec::new(),
            style_properties: SmallVec::new(),
            attributes: SmallVec::new(),
        })
    }

    /// Create an element with leading text.
    ///
    /// An empty `text` yields the same node as [`MarkupNode::new`].
    pub fn with_text(name: impl Into<String>, text: impl Into<String>) -> Result<Self> {
        let mut node = Self::new(name)?;
        node.text = text.into();
        Ok(node)
    }

    /// Tag name of this element.
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Text rendered before the children.
    #[inline]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Child elements in document order.
    #[inline]
    pub fn children(&self) -> &[MarkupNode] {
        &self.children
    }

    /// The element id, if one was set.
    #[inline]
    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    /// Class names in insertion order.
    #[inline]
    pub fn class_names(&self) -> &[String] {
        &self.class_names
    }

    /// Inline style declarations in insertion order.
    pub fn style_properties(&self) -> impl Iterator<Item = (&str, &str)> {
        self.style_properties
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Look up a single inline style declaration.
    pub fn style_property(&self, property: &str) -> Option<&str> {
        self.style_properties
            .iter()
            .find(|(k, _)| k == property)
            .map(|(_, v)| v.as_str())
    }

    /// Free-form attributes in insertion order.
    pub fn attributes(&self) -> impl Iterator<Item = (&str, &str)> {
        self.attributes.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Look up a single free-form attribute.
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }

    /// Whether this element renders in the self-closing form.
    #[inline]
    pub fn is_empty_element(&self) -> bool {
        self.children.is_empty() && self.text.is_empty()
    }

    /// Append a child and return a handle to it for further building.
    pub fn add_child(&mut self, child: MarkupNode) -> &mut MarkupNode {
        let index = self.children.len();
        self.children.push(child);
        &mut self.children[index]
    }

    /// Set the element id.
    pub fn set_id(&mut self, id: impl Into<String>) -> Result<()> {
        let id = id.into();
        if id.trim().is_empty() {
            return Err(Error::invalid_argument("id must not be empty"));
        }
        self.id = Some(id);
        Ok(())
    }

    /// Append a class name. Duplicates are kept.
    pub fn add_class_name(&mut self, class_name: impl Into<String>) -> Result<()> {
        let class_name = class_name.into();
        if class_name.trim().is_empty() {
            return Err(Error::invalid_argument("class name must not be empty"));
        }
        self.class_names.push(class_name);
        Ok(())
    }

    /// Set an inline style declaration.
    ///
    /// Blank properties or values are ignored. Setting a property again
    /// replaces its value but keeps its original position.
    pub fn add_style_property(&mut self, property: &str, value: &str) {
        if property.trim().is_empty() || value.trim().is_empty() {
            return;
        }
        upsert(&mut self.style_properties, property, value);
    }

    /// Set a free-form attribute, replacing any earlier value in place.
    ///
    /// `id`, `class` and `style` are rejected; use [`MarkupNode::set_id`],
    /// [`MarkupNode::add_class_name`] and [`MarkupNode::add_style_property`].
    pub fn add_attribute(&mut self, name: &str, value: impl Into<String>) -> Result<()> {
        if !is_valid_attribute_name(name) {
            return Err(Error::invalid_argument(format!(
                "'{name}' is not a valid attribute name"
            )));
        }
        if RESERVED_ATTRIBUTES
            .iter()
            .any(|reserved| reserved.eq_ignore_ascii_case(name))
        {
            return Err(Error::invalid_argument(format!(
                "attribute '{name}' has a dedicated setter"
            )));
        }
        upsert(&mut self.attributes, name, value.into());
        Ok(())
    }

    /// Append to the leading text and return the full text.
    pub fn append_text(&mut self, text: &str) -> &str {
        if !text.is_empty() {
            self.text.push_str(text);
        }
        &self.text
    }
}

fn upsert<A>(entries: &mut SmallVec<A>, key: &str, value: impl Into<String>)
where
    A: smallvec::Array<Item = (String, String)>,
{
    let value = value.into();
    match entries.iter_mut().find(|(k, _)| k == key) {
        Some((_, existing)) => *existing = value,
        None => entries.push((key.to_string(), value)),
    }
}

/// Tag names may only contain letters, digits, underscores, colons and hyphens.
pub(crate) fn is_valid_tag_name(tag: &str) -> bool {
    !tag.is_empty()
        && tag
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == ':' || c == '-')
}

/// Attribute names additionally allow dots.
pub(crate) fn is_valid_attribute_name(name: &str) -> bool {
    !name.is_empty()
        && name
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == ':' || c == '-' || c == '.')
}
