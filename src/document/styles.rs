/// Styles - style records and based-on chain resolution.
///
/// A [`StyleTable`] owns every style record of a document in source order
/// and resolves effective run formatting by following `basedOn` links as
/// explicit id lookups. Broken chains (missing ids, loops) are reported as
/// errors instead of being papered over with defaults.
use super::enums::StyleType;
use super::formatting::RunFormatting;
use crate::common::{Error, FontColor, Result};
use fixedbitset::FixedBitSet;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A single style definition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StyleRecord {
    /// Style identifier, unique within a table
    pub style_id: String,
    /// Kind of style
    #[serde(default)]
    pub style_type: StyleType,
    /// ID of the style this one inherits from
    #[serde(default)]
    pub based_on: Option<String>,
    /// UI-visible name
    #[serde(default)]
    pub name: Option<String>,
    /// Run formatting defined on the style itself
    #[serde(flatten)]
    pub formatting: RunFormatting,
}

impl StyleRecord {
    /// Create a record with no base and no formatting.
    pub fn new(style_id: impl Into<String>, style_type: StyleType) -> Self {
        Self {
            style_id: style_id.into(),
            style_type,
            based_on: None,
            name: None,
            formatting: RunFormatting::default(),
        }
    }

    /// Shorthand for a paragraph style.
    pub fn paragraph(style_id: impl Into<String>) -> Self {
        Self::new(style_id, StyleType::Paragraph)
    }

    /// Shorthand for a character style.
    pub fn character(style_id: impl Into<String>) -> Self {
        Self::new(style_id, StyleType::Character)
    }

    /// Set the base style.
    pub fn based_on(mut self, base: impl Into<String>) -> Self {
        self.based_on = Some(base.into());
        self
    }

    /// Set the UI name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Set the font color.
    pub fn with_font_color(mut self, color: impl Into<FontColor>) -> Self {
        self.formatting.font_color = Some(color.into());
        self
    }

    /// Set the font size.
    pub fn with_font_size(mut self, size: u32) -> Self {
        self.formatting.font_size = Some(size);
        self
    }

    /// Set the run formatting in one go.
    pub fn with_formatting(mut self, formatting: RunFormatting) -> Self {
        self.formatting = formatting;
        self
    }
}

/// All styles of a document, in source order, indexed by id.
///
/// # Examples
///
/// ```rust
/// use litchi_html::document::{StyleRecord, StyleTable};
///
/// let table = StyleTable::build(vec![
///     StyleRecord::paragraph("A").with_font_size(12),
///     StyleRecord::paragraph("B").based_on("A"),
/// ])?;
///
/// let formatting = table.resolve("B")?;
/// assert_eq!(formatting.font_size, Some(12));
/// assert_eq!(formatting.font_color, None);
/// # Ok::<(), litchi_html::Error>(())
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawStyleTable", into = "RawStyleTable")]
pub struct StyleTable {
    records: Vec<StyleRecord>,
    index: HashMap<String, usize>,
    defaults: RunFormatting,
}

/// Serialized shape of a [`StyleTable`]; validated on the way in.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
struct RawStyleTable {
    defaults: RunFormatting,
    records: Vec<StyleRecord>,
}

impl TryFrom<RawStyleTable> for StyleTable {
    type Error = Error;

    fn try_from(raw: RawStyleTable) -> Result<Self> {
        Ok(StyleTable::build(raw.records)?.with_defaults(raw.defaults))
    }
}

impl From<StyleTable> for RawStyleTable {
    fn from(table: StyleTable) -> Self {
        RawStyleTable {
            defaults: table.defaults,
            records: table.records,
        }
    }
}

impl StyleTable {
    /// Build a table from records in source order.
    ///
    /// Fails with [`Error::DuplicateStyleId`] when two records share an id
    /// and with [`Error::InvalidArgument`] on a blank id. Based-on links are
    /// not checked here; see [`StyleTable::validate`].
    pub fn build(records: impl IntoIterator<Item = StyleRecord>) -> Result<Self> {
        let records: Vec<StyleRecord> = records.into_iter().collect();
        let mut index = HashMap::with_capacity(records.len());

        for (position, record) in records.iter().enumerate() {
            if record.style_id.trim().is_empty() {
                return Err(Error::invalid_argument("style id must not be empty"));
            }
            if index.insert(record.style_id.clone(), position).is_some() {
                return Err(Error::DuplicateStyleId(record.style_id.clone()));
            }
        }

        Ok(Self {
            records,
            index,
            defaults: RunFormatting::default(),
        })
    }

    /// Set the document default run formatting (`w:docDefaults`).
    ///
    /// Defaults fill whatever a resolved chain leaves unset.
    pub fn with_defaults(mut self, defaults: RunFormatting) -> Self {
        self.defaults = defaults;
        self
    }

    /// Document default run formatting.
    #[inline]
    pub fn defaults(&self) -> &RunFormatting {
        &self.defaults
    }

    /// Number of records.
    #[inline]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the table holds no records.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Records in source order.
    pub fn iter(&self) -> std::slice::Iter<'_, StyleRecord> {
        self.records.iter()
    }

    /// Look up a record by id.
    pub fn get(&self, style_id: &str) -> Option<&StyleRecord> {
        self.index.get(style_id).map(|&i| &self.records[i])
    }

    /// Resolve the effective run formatting of a style.
    ///
    /// Walks from `style_id` through the `basedOn` links. For every property
    /// the first value found wins, so a style's own value beats anything it
    /// inherits. Properties still unset at the end of the chain come from the
    /// document defaults.
    ///
    /// # Errors
    ///
    /// - [`Error::UnknownStyleReference`] if `style_id` or any base on the
    ///   way is missing from the table
    /// - [`Error::CyclicStyleChain`] if the chain visits a style twice
    pub fn resolve(&self, style_id: &str) -> Result<RunFormatting> {
        Ok(self.resolve_chain(style_id)?.or(self.defaults))
    }

    /// Like [`StyleTable::resolve`], without falling back to the document
    /// defaults.
    pub fn resolve_chain(&self, style_id: &str) -> Result<RunFormatting> {
        let mut current = self
            .index
            .get(style_id)
            .copied()
            .ok_or_else(|| Error::UnknownStyleReference {
                style_id: style_id.to_string(),
                referenced_by: None,
            })?;

        let mut visited = FixedBitSet::with_capacity(self.records.len());
        let mut resolved = RunFormatting::default();

        loop {
            let record = &self.records[current];
            if visited.put(current) {
                return Err(Error::CyclicStyleChain {
                    style_id: style_id.to_string(),
                    revisited: record.style_id.clone(),
                });
            }

            resolved = resolved.or(record.formatting);

            let Some(base) = record.based_on.as_deref() else {
                break;
            };
            current = self
                .index
                .get(base)
                .copied()
                .ok_or_else(|| Error::UnknownStyleReference {
                    style_id: base.to_string(),
                    referenced_by: Some(record.style_id.clone()),
                })?;
        }

        log::debug!(
            "resolved style '{}' across {} record(s)",
            style_id,
            visited.count_ones(..)
        );

        Ok(resolved)
    }

    /// Check every based-on chain in the table.
    ///
    /// Returns the first missing reference or loop, in source order.
    pub fn validate(&self) -> Result<()> {
        for record in &self.records {
            self.resolve(&record.style_id)?;
        }
        Ok(())
    }
}

impl<'a> IntoIterator for &'a StyleTable {
    type Item = &'a StyleRecord;
    type IntoIter = std::slice::Iter<'a, StyleRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Build a style table from raw records. See [`StyleTable::build`].
pub fn build_style_table(records: impl IntoIterator<Item = StyleRecord>) -> Result<StyleTable> {
    StyleTable::build(records)
}

/// Resolve the effective run formatting of `style_id`. See [`StyleTable::resolve`].
pub fn resolve_run_formatting(style_id: &str, table: &StyleTable) -> Result<RunFormatting> {
    table.resolve(style_id)
}
