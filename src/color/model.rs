use crate::error::{ConvertError, ConvertResult};
use crate::registry::Domain;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The three text representations the color page converts between.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ColorFormat {
    Hex,
    Rgb,
    Hsl,
}

impl ColorFormat {
    pub const ALL: [ColorFormat; 3] = [ColorFormat::Hex, ColorFormat::Rgb, ColorFormat::Hsl];

    pub fn name(self) -> &'static str {
        match self {
            ColorFormat::Hex => "HEX",
            ColorFormat::Rgb => "RGB",
            ColorFormat::Hsl => "HSL",
        }
    }
}

impl fmt::Display for ColorFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ColorFormat {
    type Err = ConvertError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "HEX" | "#" => Ok(ColorFormat::Hex),
            "RGB" => Ok(ColorFormat::Rgb),
            "HSL" => Ok(ColorFormat::Hsl),
            _ => Err(ConvertError::UnknownUnit {
                domain: Domain::Color,
                unit: s.to_string(),
            }),
        }
    }
}

/// An sRGB color with 8-bit channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Unpack a 24-bit `0xRRGGBB` integer.
    pub fn from_u32(packed: u32) -> Self {
        Self {
            r: ((packed >> 16) & 0xff) as u8,
            g: ((packed >> 8) & 0xff) as u8,
            b: (packed & 0xff) as u8,
        }
    }

    pub fn to_u32(self) -> u32 {
        ((self.r as u32) << 16) | ((self.g as u32) << 8) | self.b as u32
    }

    /// Lowercase `#rrggbb`.
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgb({}, {}, {})", self.r, self.g, self.b)
    }
}

/// Hue in degrees (0-360), saturation and lightness in percent (0-100).
///
/// Components are kept unrounded so chained conversions do not accumulate
/// error; `Display` rounds to the canonical integer form.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
pub struct Hsl {
    pub h: f64,
    pub s: f64,
    pub l: f64,
}

impl Hsl {
    pub fn new(h: f64, s: f64, l: f64) -> Self {
        Self { h, s, l }
    }

    pub fn is_achromatic(&self) -> bool {
        self.s == 0.0
    }
}

impl fmt::Display for Hsl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "hsl({}, {}%, {}%)",
            self.h.round() as i64,
            self.s.round() as i64,
            self.l.round() as i64
        )
    }
}

/// A color in one of the three representations. Lives for a single conversion.
#[derive(Debug, Clone, PartialEq)]
pub enum ColorValue {
    /// Normalized lowercase `#rrggbb`.
    Hex(String),
    Rgb(Rgb),
    Hsl(Hsl),
}

impl ColorValue {
    pub fn format(&self) -> ColorFormat {
        match self {
            ColorValue::Hex(_) => ColorFormat::Hex,
            ColorValue::Rgb(_) => ColorFormat::Rgb,
            ColorValue::Hsl(_) => ColorFormat::Hsl,
        }
    }

    /// Render an RGB pivot in the requested representation.
    pub fn from_rgb(rgb: Rgb, format: ColorFormat) -> Self {
        match format {
            ColorFormat::Hex => ColorValue::Hex(rgb.to_hex()),
            ColorFormat::Rgb => ColorValue::Rgb(rgb),
            ColorFormat::Hsl => ColorValue::Hsl(super::convert::rgb_to_hsl(rgb)),
        }
    }
}

impl fmt::Display for ColorValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ColorValue::Hex(hex) => f.write_str(hex),
            ColorValue::Rgb(rgb) => rgb.fmt(f),
            ColorValue::Hsl(hsl) => hsl.fmt(f),
        }
    }
}
