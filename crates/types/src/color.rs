use serde::{Deserialize, Deserializer, Serialize, Serializer, de};
use std::fmt;

/// An RGB color parsed from a CSS-style hex string.
///
/// Color records carry their hex value as entered by the user; this type
/// validates it and normalizes formatting for swatch rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Default for Rgb {
    fn default() -> Self {
        // Neutral placeholder swatch for links without a usable color.
        Self { r: 0xee, g: 0xee, b: 0xee }
    }
}

impl Rgb {
    pub fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parses a CSS-style hex color, accepting `#RGB` and `#RRGGBB`.
    pub fn parse_hex(s: &str) -> Result<Rgb, String> {
        let s = s.trim();
        let hex = s
            .strip_prefix('#')
            .ok_or_else(|| format!("hex color missing leading '#': {}", s))?;
        if !hex.is_ascii() {
            return Err(format!("hex color has non-ASCII digits: {}", s));
        }

        let channel = |digits: &str| {
            u8::from_str_radix(digits, 16)
                .map_err(|_| format!("bad hex digits in color component: {}", digits))
        };
        match hex.len() {
            // Shorthand: each digit doubles.
            3 => Ok(Rgb {
                r: channel(&hex[0..1].repeat(2))?,
                g: channel(&hex[1..2].repeat(2))?,
                b: channel(&hex[2..3].repeat(2))?,
            }),
            6 => Ok(Rgb {
                r: channel(&hex[0..2])?,
                g: channel(&hex[2..4])?,
                b: channel(&hex[4..6])?,
            }),
            n => Err(format!("hex color needs 3 or 6 digits, got {}", n)),
        }
    }

    /// Uppercase `#RRGGBB` form, the normalization used in documents.
    pub fn css_hex(&self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.css_hex())
    }
}

impl Serialize for Rgb {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.css_hex())
    }
}

impl<'de> Deserialize<'de> for Rgb {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::parse_hex(&s).map_err(de::Error::custom)
    }
}
