//! Palette colors.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ColorParseError;

/// An opaque 8-bit RGB color.
///
/// Serialized as a lowercase `#rrggbb` string. Parsing also accepts the
/// short `#rgb` form and uppercase digits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    /// Create a color from 8-bit components.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Create black.
    pub const fn black() -> Self {
        Self::rgb(0, 0, 0)
    }

    /// Create white.
    pub const fn white() -> Self {
        Self::rgb(255, 255, 255)
    }

    /// Returns the canonical `#rrggbb` form.
    pub fn to_hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl FromStr for Color {
    type Err = ColorParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let digits = s
            .strip_prefix('#')
            .ok_or_else(|| ColorParseError::MissingHash(s.to_string()))?;

        if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(ColorParseError::InvalidDigit(s.to_string()));
        }

        let nibble = |i: usize| u8::from_str_radix(&digits[i..i + 1], 16);
        let byte = |i: usize| u8::from_str_radix(&digits[i..i + 2], 16);
        let invalid = |_| ColorParseError::InvalidDigit(s.to_string());

        match digits.len() {
            3 => {
                let r = nibble(0).map_err(invalid)?;
                let g = nibble(1).map_err(invalid)?;
                let b = nibble(2).map_err(invalid)?;
                Ok(Self::rgb(r * 17, g * 17, b * 17))
            }
            6 => Ok(Self::rgb(
                byte(0).map_err(invalid)?,
                byte(2).map_err(invalid)?,
                byte(4).map_err(invalid)?,
            )),
            _ => Err(ColorParseError::InvalidLength(s.to_string())),
        }
    }
}

impl TryFrom<String> for Color {
    type Error = ColorParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Color> for String {
    fn from(color: Color) -> Self {
        color.to_hex()
    }
}

/// Ordered, fixed list of colors indexed by grid cells.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Palette(Vec<Color>);

impl Palette {
    /// Create a palette from an ordered list of colors.
    pub fn new(colors: Vec<Color>) -> Self {
        Self(colors)
    }

    /// Number of colors in the palette.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the palette has no colors.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Look up the color for a grid index.
    pub fn get(&self, index: u8) -> Option<Color> {
        self.0.get(index as usize).copied()
    }

    /// Iterate over colors in index order.
    pub fn iter(&self) -> impl Iterator<Item = &Color> {
        self.0.iter()
    }

    /// The colors as a slice.
    pub fn colors(&self) -> &[Color] {
        &self.0
    }
}

impl FromIterator<Color> for Palette {
    fn from_iter<I: IntoIterator<Item = Color>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}
