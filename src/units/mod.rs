// Linear and affine unit conversion, one module per domain.
// Linear domains share the generic UnitTable; temperature pivots through Celsius
// and Tailwind is a set of lookup tables.

pub mod detector;
pub mod formatter;
pub mod length;
pub mod speed;
pub mod storage;
pub mod table;
pub mod tailwind;
pub mod temperature;
pub mod time;
pub mod typography;
pub mod viewport;
pub mod weight;

#[cfg(test)]
mod tests;

pub use detector::{looks_like_quantity, split_quantity};
pub use formatter::{format_quantity, format_value, DEFAULT_PRECISION};
pub use length::LengthUnit;
pub use speed::SpeedUnit;
pub use storage::StorageUnit;
pub use table::{Unit, UnitTable};
pub use temperature::TemperatureUnit;
pub use time::TimeUnit;
pub use typography::{TypographyUnit, DEFAULT_BASE_FONT_SIZE};
pub use viewport::{ViewportFrame, ViewportUnit};
pub use weight::WeightUnit;

use crate::error::{ConvertError, ConvertResult};
use crate::registry::Domain;

/// Ambient parameters for the domains whose factors are not fixed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Context {
    pub base_font_size: f64,
    pub viewport: ViewportFrame,
}

impl Default for Context {
    fn default() -> Self {
        Self {
            base_font_size: DEFAULT_BASE_FONT_SIZE,
            viewport: ViewportFrame::default(),
        }
    }
}

/// Convert between two unit symbols of a domain chosen at runtime.
///
/// This is the string boundary used by callers that only have form-field text;
/// unknown symbols come back as [`ConvertError::UnknownUnit`].
pub fn convert(
    domain: Domain,
    value: f64,
    from: &str,
    to: &str,
    ctx: &Context,
) -> ConvertResult<f64> {
    match domain {
        Domain::Length => length::table().convert_symbols(value, from, to),
        Domain::Weight => weight::table().convert_symbols(value, from, to),
        Domain::Storage => storage::table().convert_symbols(value, from, to),
        Domain::Speed => speed::table().convert_symbols(value, from, to),
        Domain::Time => time::table().convert_symbols(value, from, to),
        Domain::Temperature => {
            temperature::convert(value, from.parse()?, to.parse()?)
        }
        Domain::Typography => {
            typography::table(ctx.base_font_size)?.convert_symbols(value, from, to)
        }
        Domain::Viewport => ctx.viewport.table()?.convert_symbols(value, from, to),
        Domain::Tailwind | Domain::Color => Err(ConvertError::NotConvertible(domain)),
    }
}

/// The canonical symbol for `symbol` within `domain`, if the domain knows it.
pub fn canonical_symbol(domain: Domain, symbol: &str) -> Option<&'static str> {
    fn lookup<U: Unit>(symbol: &str) -> Option<&'static str> {
        U::from_symbol(symbol).map(|u| u.symbol())
    }

    let symbol = symbol.trim();
    match domain {
        Domain::Length => lookup::<LengthUnit>(symbol),
        Domain::Weight => lookup::<WeightUnit>(symbol),
        Domain::Temperature => lookup::<TemperatureUnit>(symbol),
        Domain::Storage => lookup::<StorageUnit>(symbol),
        Domain::Speed => lookup::<SpeedUnit>(symbol),
        Domain::Time => lookup::<TimeUnit>(symbol),
        Domain::Typography => lookup::<TypographyUnit>(symbol),
        Domain::Viewport => lookup::<ViewportUnit>(symbol),
        Domain::Tailwind | Domain::Color => None,
    }
}

/// True when `symbol` names a unit of `domain`.
pub fn recognizes(domain: Domain, symbol: &str) -> bool {
    canonical_symbol(domain, symbol).is_some()
}
