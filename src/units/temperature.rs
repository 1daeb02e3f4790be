// Temperature is affine, not multiplicative, so it cannot share UnitTable.
// Every conversion pivots through Celsius.

use super::table::{ensure_finite, unit_enum, Unit};
use crate::error::ConvertResult;
use crate::registry::Domain;
use crate::validation::DomainWarning;
use tracing::{debug, warn};

/// Absolute zero in degrees Celsius.
pub const ABSOLUTE_ZERO_C: f64 = -273.15;

unit_enum! {
    pub enum TemperatureUnit in Domain::Temperature {
        Celsius => "C" | "°C" | "c" | "celsius",
        Fahrenheit => "F" | "°F" | "f" | "fahrenheit",
        Kelvin => "K" | "k" | "kelvin",
    }
}

pub fn to_celsius(value: f64, from: TemperatureUnit) -> f64 {
    match from {
        TemperatureUnit::Celsius => value,
        TemperatureUnit::Fahrenheit => (value - 32.0) * (5.0 / 9.0),
        TemperatureUnit::Kelvin => value - 273.15,
    }
}

pub fn from_celsius(celsius: f64, to: TemperatureUnit) -> f64 {
    match to {
        TemperatureUnit::Celsius => celsius,
        TemperatureUnit::Fahrenheit => celsius * (9.0 / 5.0) + 32.0,
        TemperatureUnit::Kelvin => celsius + 273.15,
    }
}

/// Convert a temperature. Values below absolute zero pass through unchanged;
/// use [`assess`] to flag them.
pub fn convert(value: f64, from: TemperatureUnit, to: TemperatureUnit) -> ConvertResult<f64> {
    ensure_finite(value)?;
    if from == to {
        return Ok(value);
    }

    let result = ensure_finite(from_celsius(to_celsius(value, from), to))?;
    debug!(value, %from, %to, result, "converted temperature");
    Ok(result)
}

/// Flag readings colder than absolute zero. The conversion itself is still defined.
pub fn assess(value: f64, unit: TemperatureUnit) -> Option<DomainWarning> {
    let celsius = to_celsius(value, unit);
    // Tolerate rounding noise from the F and K pivots at exactly absolute zero.
    if celsius < ABSOLUTE_ZERO_C - 1e-9 {
        warn!(value, %unit, "temperature below absolute zero");
        Some(DomainWarning::new(
            Domain::Temperature,
            value,
            unit.symbol(),
            format!("{} {} is below absolute zero", value, unit),
        ))
    } else {
        None
    }
}
