use std::fmt;

use serde::de::{self, Unexpected, Visitor};
use serde::{Deserialize, Deserializer, Serialize};

use crate::common::{Error, Result};

/// RGB color representation.
///
/// Represents a color using red, green, and blue components, each in the range 0-255.
///
/// # Examples
///
/// ```rust
/// use litchi_html::common::RGBColor;
///
/// let red = RGBColor::from_hex("FF0000").unwrap();
/// assert_eq!(red.to_string(), "#FF0000");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RGBColor {
    /// Red component (0-255)
    pub r: u8,
    /// Green component (0-255)
    pub g: u8,
    /// Blue component (0-255)
    pub b: u8,
}

impl RGBColor {
    /// Create a new RGB color.
    #[inline]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Create an RGB color from a hex string.
    ///
    /// Accepts `"FF0000"` as well as `"#FF0000"`, in either case.
    /// Returns `None` for anything that is not exactly six hex digits.
    pub fn from_hex(hex: &str) -> Option<Self> {
        let hex = hex.trim_start_matches('#');
        if hex.len() != 6 || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return None;
        }

        let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
        let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
        let b = u8::from_str_radix(&hex[4..6], 16).ok()?;

        Some(Self::new(r, g, b))
    }

    /// Convert to an uppercase hex string (without # prefix).
    pub fn to_hex(&self) -> String {
        format!("{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

impl fmt::Display for RGBColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.to_hex())
    }
}

/// Text color as carried by a run or a style.
///
/// WordprocessingML stores either a six digit hex value or the keyword
/// `auto`, which leaves the color to the consumer. `Auto` therefore produces
/// no CSS declaration at all.
///
/// # Examples
///
/// ```rust
/// use litchi_html::common::FontColor;
///
/// let color: FontColor = "ff0000".parse().unwrap();
/// assert_eq!(color.css_value().as_deref(), Some("#FF0000"));
///
/// let auto: FontColor = "auto".parse().unwrap();
/// assert_eq!(auto.css_value(), None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(into = "String")]
pub enum FontColor {
    /// Automatic color, chosen by the renderer
    Auto,
    /// Explicit RGB color
    Rgb(RGBColor),
}

impl FontColor {
    /// Value suitable for a CSS `color` declaration, `None` for [`FontColor::Auto`].
    pub fn css_value(&self) -> Option<String> {
        match self {
            Self::Auto => None,
            Self::Rgb(rgb) => Some(rgb.to_string()),
        }
    }
}

impl From<RGBColor> for FontColor {
    fn from(rgb: RGBColor) -> Self {
        Self::Rgb(rgb)
    }
}

impl std::str::FromStr for FontColor {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let trimmed = s.trim();
        if trimmed.eq_ignore_ascii_case("auto") {
            return Ok(Self::Auto);
        }
        RGBColor::from_hex(trimmed)
            .map(Self::Rgb)
            .ok_or_else(|| Error::InvalidFormat(format!("not a color value: '{s}'")))
    }
}

impl TryFrom<String> for FontColor {
    type Error = Error;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

impl From<FontColor> for String {
    fn from(color: FontColor) -> Self {
        match color {
            FontColor::Auto => "auto".to_string(),
            FontColor::Rgb(rgb) => rgb.to_hex(),
        }
    }
}

/// Accepts strings as well as the numbers a YAML loader infers for
/// digit-only hex values such as `000000`.
impl<'de> Deserialize<'de> for FontColor {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        deserializer.deserialize_any(FontColorVisitor)
    }
}

struct FontColorVisitor;

impl Visitor<'_> for FontColorVisitor {
    type Value = FontColor;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a six digit hex color or \"auto\"")
    }

    fn visit_str<E: de::Error>(self, v: &str) -> std::result::Result<FontColor, E> {
        v.parse().map_err(E::custom)
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> std::result::Result<FontColor, E> {
        if v > 999_999 {
            return Err(E::invalid_value(Unexpected::Unsigned(v), &self));
        }
        format!("{v:06}").parse().map_err(E::custom)
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> std::result::Result<FontColor, E> {
        match u64::try_from(v) {
            Ok(v) => self.visit_u64(v),
            Err(_) => Err(E::invalid_value(Unexpected::Signed(v), &self)),
        }
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> std::result::Result<FontColor, E> {
        if v.fract() == 0.0 && (0.0..=999_999.0).contains(&v) {
            self.visit_u64(v as u64)
        } else {
            Err(E::invalid_value(Unexpected::Float(v), &self))
        }
    }
}

impl fmt::Display for FontColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Auto => f.write_str("auto"),
            Self::Rgb(rgb) => fmt::Display::fmt(rgb, f),
        }
    }
}
