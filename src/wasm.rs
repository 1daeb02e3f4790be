// WebAssembly bindings for the converter pages
use crate::config::EngineConfig;
use crate::engine::Engine;
use crate::registry::{self, Domain};
use crate::units::{self, tailwind, ViewportFrame};
use wasm_bindgen::prelude::*;

fn js_error(e: impl std::fmt::Display) -> JsValue {
    JsValue::from_str(&e.to_string())
}

#[wasm_bindgen]
pub struct UnitforgeWasm {
    engine: Engine,
}

#[wasm_bindgen]
impl UnitforgeWasm {
    /// Build an engine from optional TOML config content.
    #[wasm_bindgen(constructor)]
    pub fn new(config_content: Option<String>) -> Result<UnitforgeWasm, JsValue> {
        let config = match config_content {
            Some(content) => EngineConfig::load_from_str(&content)
                .map_err(|e| JsValue::from_str(&format!("Failed to load config: {}", e)))?,
            None => EngineConfig::default(),
        };
        Ok(Self {
            engine: Engine::new(config),
        })
    }

    #[wasm_bindgen]
    pub fn convert(&self, domain: &str, value: f64, from: &str, to: &str) -> Result<f64, JsValue> {
        let domain: Domain = domain.parse().map_err(js_error)?;
        self.engine.convert(domain, value, from, to).map_err(js_error)
    }

    /// Viewport conversion against an explicit frame (the page's width/height inputs).
    #[wasm_bindgen]
    pub fn convert_viewport(
        &self,
        value: f64,
        from: &str,
        to: &str,
        width: f64,
        height: f64,
    ) -> Result<f64, JsValue> {
        let frame = ViewportFrame::new(width, height).map_err(js_error)?;
        units::viewport::convert(
            value,
            from.parse().map_err(js_error)?,
            to.parse().map_err(js_error)?,
            frame,
        )
        .map_err(js_error)
    }

    #[wasm_bindgen]
    pub fn convert_color(&self, value: &str, from: &str, to: &str) -> Result<String, JsValue> {
        self.engine.convert_color(value, from, to).map_err(js_error)
    }

    /// Evaluate a free-form query; returns the outcome as a JSON string
    #[wasm_bindgen]
    pub fn evaluate(&self, query: &str) -> Result<String, JsValue> {
        let outcome = self.engine.evaluate(query).map_err(js_error)?;
        serde_json::to_string(&outcome)
            .map_err(|e| JsValue::from_str(&format!("Failed to serialize result: {}", e)))
    }

    #[wasm_bindgen]
    pub fn format_value(&self, value: f64) -> String {
        self.engine.format(value)
    }

    #[wasm_bindgen]
    pub fn units(&self, domain: &str) -> Result<js_sys::Array, JsValue> {
        let symbols = registry::units_for(domain).map_err(js_error)?;
        Ok(symbols.into_iter().map(JsValue::from_str).collect())
    }

    #[wasm_bindgen]
    pub fn domains(&self) -> Result<String, JsValue> {
        serde_json::to_string(&registry::domains())
            .map_err(|e| JsValue::from_str(&format!("Failed to serialize domains: {}", e)))
    }

    #[wasm_bindgen]
    pub fn tailwind_tables(&self) -> Result<String, JsValue> {
        serde_json::to_string(&tailwind::tables())
            .map_err(|e| JsValue::from_str(&format!("Failed to serialize tables: {}", e)))
    }
}
