use super::model::{ColorFormat, ColorValue, Hsl, Rgb};
use super::parser::{parse_hex, parse_hsl, parse_rgb};
use crate::error::ConvertResult;
use tracing::debug;

/// Standard max/min/chroma RGB -> HSL.
///
/// Gray inputs (`max == min`) have no defined hue; both hue and saturation
/// come back as exactly 0.
pub fn rgb_to_hsl(rgb: Rgb) -> Hsl {
    let r = rgb.r as f64 / 255.0;
    let g = rgb.g as f64 / 255.0;
    let b = rgb.b as f64 / 255.0;

    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let l = (max + min) / 2.0;

    if max == min {
        return Hsl::new(0.0, 0.0, l * 100.0);
    }

    let d = max - min;
    let s = if l > 0.5 {
        d / (2.0 - max - min)
    } else {
        d / (max + min)
    };

    let sextant = if max == r {
        (g - b) / d + if g < b { 6.0 } else { 0.0 }
    } else if max == g {
        (b - r) / d + 2.0
    } else {
        (r - g) / d + 4.0
    };
    let h = (sextant * 60.0).rem_euclid(360.0);

    Hsl::new(h, s * 100.0, l * 100.0)
}

fn hue_to_channel(p: f64, q: f64, t: f64) -> f64 {
    let t = if t < 0.0 {
        t + 1.0
    } else if t > 1.0 {
        t - 1.0
    } else {
        t
    };

    if t < 1.0 / 6.0 {
        p + (q - p) * 6.0 * t
    } else if t < 1.0 / 2.0 {
        q
    } else if t < 2.0 / 3.0 {
        p + (q - p) * (2.0 / 3.0 - t) * 6.0
    } else {
        p
    }
}

fn to_channel(unit: f64) -> u8 {
    (unit * 255.0).round().clamp(0.0, 255.0) as u8
}

/// HSL -> RGB. Zero saturation skips the hue math and uses lightness for all channels.
pub fn hsl_to_rgb(hsl: Hsl) -> Rgb {
    let h = hsl.h / 360.0;
    let s = hsl.s / 100.0;
    let l = hsl.l / 100.0;

    if s == 0.0 {
        let v = to_channel(l);
        return Rgb::new(v, v, v);
    }

    let q = if l < 0.5 { l * (1.0 + s) } else { l + s - l * s };
    let p = 2.0 * l - q;

    Rgb::new(
        to_channel(hue_to_channel(p, q, h + 1.0 / 3.0)),
        to_channel(hue_to_channel(p, q, h)),
        to_channel(hue_to_channel(p, q, h - 1.0 / 3.0)),
    )
}

/// `"#efadbd"` -> `"rgb(239, 173, 189)"`.
pub fn hex_to_rgb(hex: &str) -> ConvertResult<String> {
    Ok(parse_hex(hex)?.to_string())
}

/// `"rgb(239, 173, 189)"` -> `"#efadbd"`.
pub fn rgb_to_hex(rgb: &str) -> ConvertResult<String> {
    Ok(parse_rgb(rgb)?.to_hex())
}

/// `"rgb(...)"` -> `"hsl(h, s%, l%)"`.
pub fn rgb_text_to_hsl(rgb: &str) -> ConvertResult<String> {
    Ok(rgb_to_hsl(parse_rgb(rgb)?).to_string())
}

/// `"hsl(...)"` -> `"rgb(r, g, b)"`.
pub fn hsl_text_to_rgb(hsl: &str) -> ConvertResult<String> {
    Ok(hsl_to_rgb(parse_hsl(hsl)?).to_string())
}

/// Convert color text between HEX, RGB and HSL.
///
/// Identical formats return the input untouched. Everything else is parsed,
/// pivoted through RGB and rendered in the target's canonical form.
pub fn convert_color(value: &str, from: ColorFormat, to: ColorFormat) -> ConvertResult<String> {
    if from == to {
        return Ok(value.to_string());
    }

    let rgb = ColorValue::parse(value, from)?.to_rgb()?;
    let result = ColorValue::from_rgb(rgb, to).to_string();
    debug!(value, %from, %to, %result, "converted color");
    Ok(result)
}

/// [`convert_color`] taking format names ("HEX", "rgb", ...) from user input.
pub fn convert_color_str(value: &str, from: &str, to: &str) -> ConvertResult<String> {
    convert_color(value, from.parse()?, to.parse()?)
}
