/// CSS generation from the style table.
///
/// Every paragraph style gets one class rule holding its resolved run
/// formatting. Character styles only show up when their own chain sets
/// something; table and numbering styles never do.
use super::converter::DocumentConverter;
use crate::common::Result;
use crate::document::{RunFormatting, StyleRecord, StyleTable, StyleType};

impl DocumentConverter<'_> {
    /// Emit the stylesheet for the converter's style table.
    ///
    /// Rules follow the table order, which is the order of the source
    /// document. Resolution errors abort the whole stylesheet.
    pub fn generate_stylesheet(&self) -> Result<String> {
        generate_stylesheet(self.styles())
    }
}

/// Emit one CSS rule block per paragraph style (and per formatted character style).
///
/// # Examples
///
/// ```rust
/// use litchi_html::convert::generate_stylesheet;
/// use litchi_html::document::{StyleRecord, StyleTable};
///
/// let styles = StyleTable::build(vec![StyleRecord::paragraph("Normal").with_font_size(24)])?;
/// assert_eq!(generate_stylesheet(&styles)?, ".Normal {\n  font-size: 24px;\n}\n");
/// # Ok::<(), litchi_html::Error>(())
/// ```
pub fn generate_stylesheet(styles: &StyleTable) -> Result<String> {
    let mut css = String::with_capacity(64 * styles.len());

    for record in styles {
        let Some(formatting) = rule_formatting(styles, record)? else {
            continue;
        };

        if !css.is_empty() {
            css.push('\n');
        }
        push_class_selector(&mut css, &record.style_id);
        css.push_str(" {\n");
        for (property, value) in formatting.css_declarations() {
            css.push_str("  ");
            css.push_str(property);
            css.push_str(": ");
            css.push_str(&value);
            css.push_str(";\n");
        }
        css.push_str("}\n");
    }

    Ok(css)
}

/// Formatting a record contributes to the stylesheet, `None` when it gets no rule.
fn rule_formatting(styles: &StyleTable, record: &StyleRecord) -> Result<Option<RunFormatting>> {
    match record.style_type {
        StyleType::Paragraph => styles.resolve(&record.style_id).map(Some),
        StyleType::Character => {
            let formatting = styles.resolve_chain(&record.style_id)?;
            if formatting.css_declarations().is_empty() {
                log::debug!("character style '{}' has no formatting", record.style_id);
                Ok(None)
            } else {
                Ok(Some(formatting))
            }
        },
        StyleType::Table | StyleType::Numbering => Ok(None),
    }
}

/// Write `.id`, escaping characters that are not valid in a CSS identifier.
fn push_class_selector(css: &mut String, style_id: &str) {
    css.push('.');
    for (i, c) in style_id.chars().enumerate() {
        if i == 0 && c.is_ascii_digit() {
            css.push_str("\\3");
            css.push(c);
            css.push(' ');
        } else if c.is_ascii_alphanumeric() || c == '-' || c == '_' || !c.is_ascii() {
            css.push(c);
        } else if c.is_ascii_control() {
            css.push_str(&format!("\\{:x} ", c as u32));
        } else {
            css.push('\\');
            css.push(c);
        }
    }
}
