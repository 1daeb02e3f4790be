use crate::color::{self, ColorFormat};
use crate::config::EngineConfig;
use crate::error::ConvertResult;
use crate::query::{parse_query, QueryExecutor, QueryOutcome};
use crate::registry::Domain;
use crate::units::{self, format_value, Context, ViewportFrame};
use crate::validation::{self, DomainWarning};

/// Conversion engine bound to one configuration.
///
/// Every front end (CLI, wasm) goes through this type so the configured font
/// size, viewport frame and display precision apply uniformly.
#[derive(Debug, Clone, Default)]
pub struct Engine {
    config: EngineConfig,
}

impl Engine {
    pub fn new(config: EngineConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn context(&self) -> Context {
        self.config.context()
    }

    /// Use a different viewport frame for subsequent viewport conversions.
    pub fn with_viewport(mut self, frame: ViewportFrame) -> ConvertResult<Self> {
        frame.validate()?;
        self.config.viewport.width = frame.width;
        self.config.viewport.height = frame.height;
        Ok(self)
    }

    pub fn convert(&self, domain: Domain, value: f64, from: &str, to: &str) -> ConvertResult<f64> {
        units::convert(domain, value, from, to, &self.context())
    }

    pub fn convert_color(&self, value: &str, from: &str, to: &str) -> ConvertResult<String> {
        color::convert_color(value, from.parse::<ColorFormat>()?, to.parse::<ColorFormat>()?)
    }

    /// Parse and run a free-form query such as `"2 inch to cm"`.
    pub fn evaluate(&self, text: &str) -> ConvertResult<QueryOutcome> {
        let query = parse_query(text)?;
        QueryExecutor::new(self.context(), self.config.display.precision).execute(&query)
    }

    pub fn format(&self, value: f64) -> String {
        format_value(value, self.config.display.precision)
    }

    pub fn assess(&self, domain: Domain, value: f64, unit: &str) -> Option<DomainWarning> {
        validation::assess(domain, value, unit)
    }
}
