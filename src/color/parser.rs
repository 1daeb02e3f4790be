use super::convert::hsl_to_rgb;
use super::model::{ColorFormat, ColorValue, Hsl, Rgb};
use crate::error::{ConvertError, ConvertResult};
use lazy_static::lazy_static;
use regex::Regex;
use tracing::debug;

lazy_static! {
    // `rgb(r, g, b)`; the function name and parentheses are optional, the
    // separators may be commas or spaces. Signs are captured so negative
    // components are rejected by the range check instead of silently dropped.
    static ref RGB_TEXT: Regex = Regex::new(
        r"(?i)^(?:rgb\s*)?\(?\s*(-?\d+(?:\.\d+)?)(?:\s*,\s*|\s+)(-?\d+(?:\.\d+)?)(?:\s*,\s*|\s+)(-?\d+(?:\.\d+)?)\s*\)?$"
    ).unwrap();

    // `hsl(h, s%, l%)` with an optional `deg` on the hue.
    static ref HSL_TEXT: Regex = Regex::new(
        r"(?i)^(?:hsl\s*)?\(?\s*(-?\d+(?:\.\d+)?)(?:deg)?(?:\s*,\s*|\s+)(-?\d+(?:\.\d+)?)%?(?:\s*,\s*|\s+)(-?\d+(?:\.\d+)?)%?\s*\)?$"
    ).unwrap();
}

fn invalid(format: ColorFormat, input: &str, reason: impl Into<String>) -> ConvertError {
    let reason = reason.into();
    debug!(%format, input, %reason, "rejected color input");
    ConvertError::InvalidFormat {
        format: format.name(),
        input: input.to_string(),
        reason,
    }
}

/// Parse `#rrggbb` or `#rgb` (the `#` is optional). Shorthand digits are doubled.
pub fn parse_hex(input: &str) -> ConvertResult<Rgb> {
    let digits = input.trim();
    let digits = digits.strip_prefix('#').unwrap_or(digits);

    if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(invalid(ColorFormat::Hex, input, "expected hexadecimal digits"));
    }

    let expanded = match digits.len() {
        3 => digits.chars().flat_map(|c| [c, c]).collect::<String>(),
        6 => digits.to_string(),
        n => {
            return Err(invalid(
                ColorFormat::Hex,
                input,
                format!("expected 3 or 6 digits, got {}", n),
            ))
        }
    };

    let packed = u32::from_str_radix(&expanded, 16)
        .map_err(|e| invalid(ColorFormat::Hex, input, e.to_string()))?;
    Ok(Rgb::from_u32(packed))
}

/// Match functional color text against the pattern for `format` and pull out
/// its three components. Text written in another format never matches.
fn components(format: ColorFormat, input: &str) -> ConvertResult<[f64; 3]> {
    let (pattern, shape) = match format {
        ColorFormat::Rgb => (&*RGB_TEXT, "rgb(r, g, b)"),
        ColorFormat::Hsl => (&*HSL_TEXT, "hsl(h, s%, l%)"),
        ColorFormat::Hex => return Err(invalid(format, input, "not functional color text")),
    };

    let caps = pattern
        .captures(input.trim())
        .ok_or_else(|| invalid(format, input, format!("expected {}", shape)))?;

    let mut values = [0.0; 3];
    for (i, value) in values.iter_mut().enumerate() {
        *value = caps[i + 1]
            .parse::<f64>()
            .map_err(|e| invalid(format, input, e.to_string()))?;
    }
    Ok(values)
}

fn in_range(format: ColorFormat, input: &str, name: &str, value: f64, max: f64) -> ConvertResult<f64> {
    if (0.0..=max).contains(&value) {
        Ok(value)
    } else {
        Err(invalid(
            format,
            input,
            format!("{} must be between 0 and {}, got {}", name, max, value),
        ))
    }
}

/// Parse `rgb(r, g, b)`; channels must lie in 0-255.
pub fn parse_rgb(input: &str) -> ConvertResult<Rgb> {
    let [r, g, b] = components(ColorFormat::Rgb, input)?;
    let channel = |name: &str, v: f64| -> ConvertResult<u8> {
        Ok(in_range(ColorFormat::Rgb, input, name, v, 255.0)?.round() as u8)
    };
    Ok(Rgb::new(channel("red", r)?, channel("green", g)?, channel("blue", b)?))
}

/// Parse `hsl(h, s%, l%)`; hue in 0-360, saturation and lightness in 0-100.
pub fn parse_hsl(input: &str) -> ConvertResult<Hsl> {
    let [h, s, l] = components(ColorFormat::Hsl, input)?;
    Ok(Hsl::new(
        in_range(ColorFormat::Hsl, input, "hue", h, 360.0)?,
        in_range(ColorFormat::Hsl, input, "saturation", s, 100.0)?,
        in_range(ColorFormat::Hsl, input, "lightness", l, 100.0)?,
    ))
}

impl ColorValue {
    /// Parse text written in `format`.
    pub fn parse(input: &str, format: ColorFormat) -> ConvertResult<Self> {
        match format {
            ColorFormat::Hex => Ok(ColorValue::Hex(parse_hex(input)?.to_hex())),
            ColorFormat::Rgb => Ok(ColorValue::Rgb(parse_rgb(input)?)),
            ColorFormat::Hsl => Ok(ColorValue::Hsl(parse_hsl(input)?)),
        }
    }

    /// The RGB pivot every cross-format conversion goes through.
    pub fn to_rgb(&self) -> ConvertResult<Rgb> {
        match self {
            ColorValue::Hex(hex) => parse_hex(hex),
            ColorValue::Rgb(rgb) => Ok(*rgb),
            ColorValue::Hsl(hsl) => Ok(hsl_to_rgb(*hsl)),
        }
    }
}

/// Guess the representation of free-form color text.
pub fn detect_format(input: &str) -> Option<ColorFormat> {
    let trimmed = input.trim().to_ascii_lowercase();
    if trimmed.starts_with('#') {
        Some(ColorFormat::Hex)
    } else if trimmed.starts_with("rgb") {
        Some(ColorFormat::Rgb)
    } else if trimmed.starts_with("hsl") {
        Some(ColorFormat::Hsl)
    } else {
        None
    }
}
