use crate::error::{ConvertError, ConvertResult};
use crate::registry::Domain;
use std::fmt;
use tracing::{debug, warn};

/// A closed set of units belonging to one domain.
///
/// Strings only become units at the edge, through [`Unit::parse`]; everything
/// past that boundary works with the enum variants.
pub trait Unit: Copy + Eq + fmt::Debug + fmt::Display + 'static {
    const DOMAIN: Domain;

    /// All variants, in display order.
    fn all() -> &'static [Self];

    /// Canonical symbol shown in the unit picker ("mm", "km/h", ...).
    fn symbol(self) -> &'static str;

    /// Match a symbol or one of its accepted spellings.
    fn from_symbol(s: &str) -> Option<Self>;

    fn parse(s: &str) -> ConvertResult<Self> {
        Self::from_symbol(s.trim()).ok_or_else(|| {
            debug!(domain = %Self::DOMAIN, unit = s, "unrecognized unit");
            ConvertError::UnknownUnit {
                domain: Self::DOMAIN,
                unit: s.to_string(),
            }
        })
    }
}

/// Declares a domain's unit enum with its symbols and accepted aliases.
macro_rules! unit_enum {
    (
        $(#[$meta:meta])*
        pub enum $name:ident in $domain:path {
            $($variant:ident => $symbol:literal $(| $alias:literal)*),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum $name {
            $($variant),+
        }

        impl $crate::units::table::Unit for $name {
            const DOMAIN: $crate::registry::Domain = $domain;

            fn all() -> &'static [Self] {
                &[$($name::$variant),+]
            }

            fn symbol(self) -> &'static str {
                match self {
                    $($name::$variant => $symbol),+
                }
            }

            fn from_symbol(s: &str) -> Option<Self> {
                match s {
                    $($symbol $(| $alias)* => Some($name::$variant),)+
                    _ => None,
                }
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str($crate::units::table::Unit::symbol(*self))
            }
        }

        impl ::std::str::FromStr for $name {
            type Err = $crate::error::ConvertError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                <$name as $crate::units::table::Unit>::parse(s)
            }
        }

        impl ::serde::Serialize for $name {
            fn serialize<S: ::serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.serialize_str($crate::units::table::Unit::symbol(*self))
            }
        }
    };
}

pub(crate) use unit_enum;

/// Conversion factors for one domain, each relative to the domain's base unit.
///
/// Invariants checked by [`UnitTable::new`]: every factor is finite and strictly
/// positive, no unit appears twice, and the base unit maps to exactly 1.
#[derive(Debug, Clone, PartialEq)]
pub struct UnitTable<U: Unit> {
    base: U,
    factors: Vec<(U, f64)>,
}

impl<U: Unit> UnitTable<U> {
    pub fn new(base: U, factors: Vec<(U, f64)>) -> ConvertResult<Self> {
        let invalid = |reason: String| {
            warn!(domain = %U::DOMAIN, %reason, "rejected unit table");
            ConvertError::InvalidTable {
                domain: U::DOMAIN,
                reason,
            }
        };

        for (i, (unit, factor)) in factors.iter().enumerate() {
            if !factor.is_finite() || *factor <= 0.0 {
                return Err(invalid(format!(
                    "factor for '{}' must be positive and finite, got {}",
                    unit, factor
                )));
            }
            if factors[..i].iter().any(|(seen, _)| seen == unit) {
                return Err(invalid(format!("unit '{}' listed twice", unit)));
            }
        }

        match factors.iter().find(|(unit, _)| *unit == base) {
            Some((_, factor)) if *factor == 1.0 => Ok(Self { base, factors }),
            Some((_, factor)) => Err(invalid(format!(
                "base unit '{}' must map to 1, got {}",
                base, factor
            ))),
            None => Err(invalid(format!("base unit '{}' is missing", base))),
        }
    }

    pub fn base(&self) -> U {
        self.base
    }

    pub fn units(&self) -> impl Iterator<Item = U> + '_ {
        self.factors.iter().map(|(unit, _)| *unit)
    }

    pub fn contains(&self, unit: U) -> bool {
        self.factors.iter().any(|(u, _)| *u == unit)
    }

    pub fn factor(&self, unit: U) -> ConvertResult<f64> {
        self.factors
            .iter()
            .find(|(u, _)| *u == unit)
            .map(|(_, factor)| *factor)
            .ok_or_else(|| ConvertError::UnknownUnit {
                domain: U::DOMAIN,
                unit: unit.symbol().to_string(),
            })
    }

    /// Convert by normalizing to the base unit, then denormalizing.
    pub fn convert(&self, value: f64, from: U, to: U) -> ConvertResult<f64> {
        ensure_finite(value)?;
        let from_factor = self.factor(from)?;
        let to_factor = self.factor(to)?;

        if from == to {
            return Ok(value);
        }

        let result = ensure_finite(value * from_factor / to_factor)?;
        debug!(domain = %U::DOMAIN, value, %from, %to, result, "converted");
        Ok(result)
    }

    /// Same as [`UnitTable::convert`] but takes unit symbols from user input.
    pub fn convert_symbols(&self, value: f64, from: &str, to: &str) -> ConvertResult<f64> {
        self.convert(value, U::parse(from)?, U::parse(to)?)
    }
}

pub(crate) fn ensure_finite(value: f64) -> ConvertResult<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(ConvertError::NonFiniteValue(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::units::LengthUnit;

    fn sample() -> UnitTable<LengthUnit> {
        UnitTable::new(
            LengthUnit::Meter,
            vec![
                (LengthUnit::Meter, 1.0),
                (LengthUnit::Kilometer, 1000.0),
                (LengthUnit::Centimeter, 0.01),
            ],
        )
        .unwrap()
    }

    #[test]
    fn test_table_converts_through_base() {
        let table = sample();
        assert_eq!(table.convert(2.5, LengthUnit::Kilometer, LengthUnit::Meter).unwrap(), 2500.0);
        assert!((table.convert(150.0, LengthUnit::Centimeter, LengthUnit::Meter).unwrap() - 1.5).abs() < 1e-12);
    }

    #[test]
    fn test_identity_is_exact() {
        let table = sample();
        let v = 0.1 + 0.2;
        assert_eq!(table.convert(v, LengthUnit::Centimeter, LengthUnit::Centimeter).unwrap(), v);
    }

    #[test]
    fn test_missing_unit_is_unknown() {
        let table = sample();
        let err = table.convert(1.0, LengthUnit::Mile, LengthUnit::Meter).unwrap_err();
        assert_eq!(
            err,
            ConvertError::UnknownUnit {
                domain: Domain::Length,
                unit: "mile".to_string()
            }
        );
    }

    #[test]
    fn test_rejects_bad_tables() {
        assert!(matches!(
            UnitTable::new(LengthUnit::Meter, vec![(LengthUnit::Meter, 2.0)]),
            Err(ConvertError::InvalidTable { .. })
        ));
        assert!(matches!(
            UnitTable::new(LengthUnit::Meter, vec![(LengthUnit::Centimeter, 0.01)]),
            Err(ConvertError::InvalidTable { .. })
        ));
        assert!(matches!(
            UnitTable::new(
                LengthUnit::Meter,
                vec![(LengthUnit::Meter, 1.0), (LengthUnit::Inch, -0.0254)]
            ),
            Err(ConvertError::InvalidTable { .. })
        ));
        assert!(matches!(
            UnitTable::new(
                LengthUnit::Meter,
                vec![(LengthUnit::Meter, 1.0), (LengthUnit::Foot, f64::NAN)]
            ),
            Err(ConvertError::InvalidTable { .. })
        ));
        assert!(matches!(
            UnitTable::new(
                LengthUnit::Meter,
                vec![(LengthUnit::Meter, 1.0), (LengthUnit::Meter, 1.0)]
            ),
            Err(ConvertError::InvalidTable { .. })
        ));
    }

    #[test]
    fn test_non_finite_value_rejected() {
        let table = sample();
        assert!(matches!(
            table.convert(f64::INFINITY, LengthUnit::Meter, LengthUnit::Kilometer),
            Err(ConvertError::NonFiniteValue(_))
        ));
    }

    #[test]
    fn test_overflow_is_an_error() {
        let table = sample();
        assert!(matches!(
            table.convert(1e308, LengthUnit::Kilometer, LengthUnit::Centimeter),
            Err(ConvertError::NonFiniteValue(v)) if v.is_infinite()
        ));
    }

    #[test]
    fn test_convert_symbols() {
        let table = sample();
        assert_eq!(table.convert_symbols(3.0, "km", "m").unwrap(), 3000.0);
        assert!(matches!(
            table.convert_symbols(5.0, "parsec", "m"),
            Err(ConvertError::UnknownUnit { .. })
        ));
    }
}
