// Non-fatal findings about an input value. A warning never blocks a conversion;
// the caller decides whether to show it next to the result.

use crate::registry::Domain;
use crate::units::{temperature, Unit};
use serde::Serialize;
use std::fmt;

/// A physically implausible but mathematically defined input.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DomainWarning {
    pub domain: Domain,
    pub value: f64,
    pub unit: String,
    pub message: String,
}

impl DomainWarning {
    pub fn new(domain: Domain, value: f64, unit: &str, message: String) -> Self {
        Self {
            domain,
            value,
            unit: unit.to_string(),
            message,
        }
    }
}

impl fmt::Display for DomainWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.domain, self.message)
    }
}

/// Check an input quantity for physical plausibility.
///
/// Temperatures below absolute zero and negative lengths, masses or sizes are
/// flagged. Unrecognized units produce no warning; the conversion itself
/// reports those.
pub fn assess(domain: Domain, value: f64, unit: &str) -> Option<DomainWarning> {
    match domain {
        Domain::Temperature => temperature::TemperatureUnit::from_symbol(unit.trim())
            .and_then(|u| temperature::assess(value, u)),
        Domain::Length | Domain::Weight | Domain::Storage if value < 0.0 => {
            Some(DomainWarning::new(
                domain,
                value,
                unit.trim(),
                format!("negative {} ({} {}) has no physical meaning", domain, value, unit.trim()),
            ))
        }
        _ => None,
    }
}
