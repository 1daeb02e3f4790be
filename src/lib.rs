pub mod color;
pub mod config;
pub mod engine;
pub mod error;
pub mod query;
pub mod registry;
pub mod units;
pub mod validation;

#[cfg(target_arch = "wasm32")]
pub mod wasm;

pub use config::EngineConfig;
pub use engine::Engine;
pub use error::{ConfigError, ConvertError, ConvertResult};
pub use registry::Domain;
