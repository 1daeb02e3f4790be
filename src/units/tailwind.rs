//! Tailwind CSS reference scales.
//!
//! These are presentation data copied from Tailwind's default theme, not
//! computed conversions, so they are exposed as read-only tables and keyed
//! lookups rather than through `convert`.

use crate::error::{ConvertError, ConvertResult};
use crate::registry::Domain;
use lazy_static::lazy_static;
use serde::Serialize;

/// Pixels per spacing step (`p-1` is 4px).
pub const SPACING_STEP_PX: f64 = 4.0;
/// Rem per spacing step (`p-1` is 0.25rem).
pub const SPACING_STEP_REM: f64 = 0.25;

static SPACING_KEYS: [&str; 34] = [
    "0", "0.5", "1", "1.5", "2", "2.5", "3", "3.5", "4", "5", "6", "7", "8", "9", "10", "11",
    "12", "14", "16", "20", "24", "28", "32", "36", "40", "44", "48", "52", "56", "60", "64",
    "72", "80", "96",
];

static FONT_SIZES: [(&str, u32); 13] = [
    ("text-xs", 12),
    ("text-sm", 14),
    ("text-base", 16),
    ("text-lg", 18),
    ("text-xl", 20),
    ("text-2xl", 24),
    ("text-3xl", 30),
    ("text-4xl", 36),
    ("text-5xl", 48),
    ("text-6xl", 60),
    ("text-7xl", 72),
    ("text-8xl", 96),
    ("text-9xl", 128),
];

static BREAKPOINTS: [(&str, u32); 5] = [
    ("sm", 640),
    ("md", 768),
    ("lg", 1024),
    ("xl", 1280),
    ("2xl", 1536),
];

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SpacingStep {
    pub key: &'static str,
    pub rem: f64,
    pub px: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FontSize {
    pub class: &'static str,
    pub px: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Breakpoint {
    pub name: &'static str,
    pub min_width_px: u32,
}

/// All three scales together, as the reference page renders them.
#[derive(Debug, Clone, Serialize)]
pub struct TailwindTables {
    pub spacing: &'static [SpacingStep],
    pub font_sizes: &'static [FontSize],
    pub breakpoints: &'static [Breakpoint],
}

lazy_static! {
    static ref SPACING: Vec<SpacingStep> = SPACING_KEYS
        .iter()
        .map(|key| {
            let steps: f64 = key.parse().expect("spacing keys are numeric");
            SpacingStep {
                key: *key,
                rem: steps * SPACING_STEP_REM,
                px: steps * SPACING_STEP_PX,
            }
        })
        .collect();
    static ref FONTS: Vec<FontSize> = FONT_SIZES
        .iter()
        .map(|(class, px)| FontSize {
            class: *class,
            px: *px,
        })
        .collect();
    static ref SCREENS: Vec<Breakpoint> = BREAKPOINTS
        .iter()
        .map(|(name, min_width_px)| Breakpoint {
            name: *name,
            min_width_px: *min_width_px,
        })
        .collect();
}

pub fn spacing_scale() -> &'static [SpacingStep] {
    &SPACING
}

pub fn font_sizes() -> &'static [FontSize] {
    &FONTS
}

pub fn breakpoints() -> &'static [Breakpoint] {
    &SCREENS
}

pub fn tables() -> TailwindTables {
    TailwindTables {
        spacing: spacing_scale(),
        font_sizes: font_sizes(),
        breakpoints: breakpoints(),
    }
}

fn unknown(key: &str) -> ConvertError {
    ConvertError::UnknownUnit {
        domain: Domain::Tailwind,
        unit: key.to_string(),
    }
}

/// Look up a spacing step by its key ("4") or a utility class using it ("p-4", "mx-0.5").
///
/// Negative utilities ("-m-4") return the step with negated `rem` and `px`;
/// `key` stays the scale key.
pub fn spacing(key: &str) -> ConvertResult<SpacingStep> {
    let trimmed = key.trim();
    let (negative, class) = match trimmed.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, trimmed),
    };
    let step_key = class.rsplit('-').next().unwrap_or(class);

    let step = spacing_scale()
        .iter()
        .find(|s| s.key == step_key)
        .copied()
        .ok_or_else(|| unknown(key))?;

    if negative {
        Ok(SpacingStep {
            rem: -step.rem,
            px: -step.px,
            ..step
        })
    } else {
        Ok(step)
    }
}

/// Look up a font size by class ("text-xl") or bare size name ("xl").
pub fn font_size(class: &str) -> ConvertResult<&'static FontSize> {
    let trimmed = class.trim();
    let class_name = if trimmed.starts_with("text-") {
        trimmed.to_string()
    } else {
        format!("text-{}", trimmed)
    };
    font_sizes()
        .iter()
        .find(|f| f.class == class_name)
        .ok_or_else(|| unknown(class))
}

/// Look up a responsive breakpoint ("md") or its variant prefix ("md:").
pub fn breakpoint(name: &str) -> ConvertResult<&'static Breakpoint> {
    let trimmed = name.trim().trim_end_matches(':');
    breakpoints()
        .iter()
        .find(|b| b.name == trimmed)
        .ok_or_else(|| unknown(name))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spacing_scale_shape() {
        let scale = spacing_scale();
        assert_eq!(scale.len(), 34);
        assert_eq!(scale[0].px, 0.0);
        assert_eq!(scale.last().unwrap().px, 384.0);
    }

    #[test]
    fn test_spacing_lookup() {
        let step = spacing("p-4").unwrap();
        assert_eq!(step.px, 16.0);
        assert_eq!(step.rem, 1.0);
        assert_eq!(spacing("0.5").unwrap().px, 2.0);
        assert_eq!(spacing("mx-2.5").unwrap().px, 10.0);
    }

    #[test]
    fn test_negative_spacing_keeps_its_sign() {
        let step = spacing("-m-4").unwrap();
        assert_eq!(step.key, "4");
        assert_eq!(step.px, -16.0);
        assert_eq!(step.rem, -1.0);
        assert_eq!(spacing("-mx-0.5").unwrap().px, -2.0);
        assert!(spacing("-m-13").is_err());
    }

    #[test]
    fn test_spacing_unknown() {
        assert!(matches!(
            spacing("p-13"),
            Err(ConvertError::UnknownUnit { domain: Domain::Tailwind, .. })
        ));
    }

    #[test]
    fn test_font_size_lookup() {
        assert_eq!(font_size("text-3xl").unwrap().px, 30);
        assert_eq!(font_size("base").unwrap().px, 16);
        assert!(font_size("text-10xl").is_err());
    }

    #[test]
    fn test_breakpoint_lookup() {
        assert_eq!(breakpoint("md").unwrap().min_width_px, 768);
        assert_eq!(breakpoint("2xl:").unwrap().min_width_px, 1536);
        assert!(breakpoint("3xl").is_err());
    }
}
