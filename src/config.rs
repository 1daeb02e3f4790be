use crate::error::ConfigError;
use crate::units::{Context, ViewportFrame, DEFAULT_BASE_FONT_SIZE, DEFAULT_PRECISION};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::debug;

const MAX_PRECISION: u32 = 12;

#[derive(Debug, Clone, PartialEq, Default, Deserialize, Serialize)]
pub struct EngineConfig {
    #[serde(default)]
    pub typography: TypographyConfig,

    #[serde(default)]
    pub viewport: ViewportConfig,

    #[serde(default)]
    pub display: DisplayConfig,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct TypographyConfig {
    // Root font size in px that rem and em are measured against
    #[serde(default = "default_base_font_size")]
    pub base_font_size: f64,
}

impl Default for TypographyConfig {
    fn default() -> Self {
        Self {
            base_font_size: default_base_font_size(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct ViewportConfig {
    // Frame used when the caller does not supply one
    #[serde(default = "default_viewport_width")]
    pub width: f64,
    #[serde(default = "default_viewport_height")]
    pub height: f64,
}

impl Default for ViewportConfig {
    fn default() -> Self {
        Self {
            width: default_viewport_width(),
            height: default_viewport_height(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct DisplayConfig {
    // Decimals shown for converted numbers
    #[serde(default = "default_precision")]
    pub precision: u32,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            precision: default_precision(),
        }
    }
}

fn default_base_font_size() -> f64 {
    DEFAULT_BASE_FONT_SIZE
}

fn default_viewport_width() -> f64 {
    ViewportFrame::default().width
}

fn default_viewport_height() -> f64 {
    ViewportFrame::default().height
}

fn default_precision() -> u32 {
    DEFAULT_PRECISION
}

impl EngineConfig {
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        debug!(path = %path.display(), "loading config");
        let content = std::fs::read_to_string(path)?;
        Self::load_from_str(&content)
    }

    pub fn load_from_str(content: &str) -> Result<Self, ConfigError> {
        let config: EngineConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let positive = |v: f64| v.is_finite() && v > 0.0;

        if !positive(self.typography.base_font_size) {
            return Err(ConfigError::Invalid {
                key: "typography.base_font_size",
                reason: format!("must be positive, got {}", self.typography.base_font_size),
            });
        }
        if !positive(self.viewport.width) {
            return Err(ConfigError::Invalid {
                key: "viewport.width",
                reason: format!("must be positive, got {}", self.viewport.width),
            });
        }
        if !positive(self.viewport.height) {
            return Err(ConfigError::Invalid {
                key: "viewport.height",
                reason: format!("must be positive, got {}", self.viewport.height),
            });
        }
        if self.display.precision > MAX_PRECISION {
            return Err(ConfigError::Invalid {
                key: "display.precision",
                reason: format!("must be at most {}, got {}", MAX_PRECISION, self.display.precision),
            });
        }
        Ok(())
    }

    pub fn viewport_frame(&self) -> ViewportFrame {
        ViewportFrame {
            width: self.viewport.width,
            height: self.viewport.height,
        }
    }

    pub fn context(&self) -> Context {
        Context {
            base_font_size: self.typography.base_font_size,
            viewport: self.viewport_frame(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = EngineConfig::load_from_str("").unwrap();
        assert_eq!(config, EngineConfig::default());
        assert_eq!(config.typography.base_font_size, 16.0);
        assert_eq!(config.viewport_frame(), ViewportFrame::default());
        assert_eq!(config.display.precision, 6);
    }

    #[test]
    fn test_partial_sections() {
        let config = EngineConfig::load_from_str(
            r#"
[typography]
base_font_size = 10.0

[viewport]
width = 390.0
"#,
        )
        .unwrap();
        assert_eq!(config.typography.base_font_size, 10.0);
        assert_eq!(config.viewport.width, 390.0);
        assert_eq!(config.viewport.height, 1080.0);
    }

    #[test]
    fn test_rejects_zero_font_size() {
        let err = EngineConfig::load_from_str("[typography]\nbase_font_size = 0.0\n").unwrap_err();
        assert!(matches!(
            err,
            ConfigError::Invalid { key: "typography.base_font_size", .. }
        ));
    }

    #[test]
    fn test_rejects_excessive_precision() {
        let err = EngineConfig::load_from_str("[display]\nprecision = 40\n").unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { key: "display.precision", .. }));
    }

    #[test]
    fn test_rejects_malformed_toml() {
        assert!(matches!(
            EngineConfig::load_from_str("[viewport\nwidth = 1"),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn test_missing_file() {
        assert!(matches!(
            EngineConfig::load_from_file("/definitely/not/here/unitforge.toml"),
            Err(ConfigError::Io(_))
        ));
    }
}
