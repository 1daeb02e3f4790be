use super::*;
use crate::error::ConvertError;
use proptest::prelude::*;

fn close(a: f64, b: f64) -> bool {
    let scale = a.abs().max(b.abs()).max(1.0);
    (a - b).abs() <= 1e-9 * scale
}

fn symbols(domain: Domain) -> Vec<&'static str> {
    crate::registry::domain_info(domain).units
}

const NUMERIC: [Domain; 8] = [
    Domain::Length,
    Domain::Weight,
    Domain::Temperature,
    Domain::Storage,
    Domain::Speed,
    Domain::Time,
    Domain::Typography,
    Domain::Viewport,
];

#[test]
fn test_reference_scenarios() {
    let ctx = Context::default();
    assert!(close(convert(Domain::Length, 2.0, "inch", "cm", &ctx).unwrap(), 5.08));
    assert_eq!(convert(Domain::Temperature, 0.0, "C", "F", &ctx).unwrap(), 32.0);
    assert!(close(convert(Domain::Temperature, -273.15, "C", "K", &ctx).unwrap(), 0.0));
    assert_eq!(convert(Domain::Storage, 1024.0, "MB", "GB", &ctx).unwrap(), 1.0);
    assert_eq!(convert(Domain::Time, 90.0, "min", "hr", &ctx).unwrap(), 1.5);
}

#[test]
fn test_unknown_unit_is_typed() {
    let ctx = Context::default();
    let err = convert(Domain::Length, 5.0, "parsec", "m", &ctx).unwrap_err();
    assert_eq!(
        err,
        ConvertError::UnknownUnit {
            domain: Domain::Length,
            unit: "parsec".to_string()
        }
    );
}

#[test]
fn test_cross_domain_symbol_is_unknown() {
    let ctx = Context::default();
    assert!(matches!(
        convert(Domain::Weight, 1.0, "kg", "m", &ctx),
        Err(ConvertError::UnknownUnit { domain: Domain::Weight, .. })
    ));
}

#[test]
fn test_overflowing_result_is_rejected() {
    let ctx = Context::default();
    assert!(matches!(
        convert(Domain::Length, 1e308, "km", "mm", &ctx),
        Err(ConvertError::NonFiniteValue(_))
    ));
    assert!(matches!(
        convert(Domain::Storage, f64::MAX, "TB", "bit", &ctx),
        Err(ConvertError::NonFiniteValue(_))
    ));
}

#[test]
fn test_reference_domains_have_no_converter() {
    let ctx = Context::default();
    assert_eq!(
        convert(Domain::Color, 1.0, "HEX", "RGB", &ctx),
        Err(ConvertError::NotConvertible(Domain::Color))
    );
    assert!(convert(Domain::Tailwind, 1.0, "p-4", "px", &ctx).is_err());
}

#[test]
fn test_context_drives_typography_and_viewport() {
    let ctx = Context {
        base_font_size: 20.0,
        viewport: ViewportFrame::new(1000.0, 800.0).unwrap(),
    };
    assert_eq!(convert(Domain::Typography, 40.0, "px", "rem", &ctx).unwrap(), 2.0);
    assert_eq!(convert(Domain::Viewport, 100.0, "px", "vw", &ctx).unwrap(), 10.0);
}

#[test]
fn test_every_listed_unit_is_recognized() {
    for domain in NUMERIC {
        for symbol in symbols(domain) {
            assert!(recognizes(domain, symbol), "{} {}", domain, symbol);
        }
    }
}

#[test]
fn test_tables_hold_their_invariants() {
    for unit in length::table().units() {
        let f = length::table().factor(unit).unwrap();
        assert!(f.is_finite() && f > 0.0);
    }
    assert_eq!(length::table().factor(LengthUnit::Meter).unwrap(), 1.0);
    assert_eq!(weight::table().factor(WeightUnit::Kilogram).unwrap(), 1.0);
    assert_eq!(storage::table().factor(StorageUnit::Byte).unwrap(), 1.0);
    assert_eq!(speed::table().factor(SpeedUnit::MetersPerSecond).unwrap(), 1.0);
    assert_eq!(time::table().factor(TimeUnit::Second).unwrap(), 1.0);
}

fn domain_strategy() -> impl Strategy<Value = Domain> {
    prop::sample::select(NUMERIC.to_vec())
}

proptest! {
    #[test]
    fn prop_same_unit_is_identity(domain in domain_strategy(), value in -1e9f64..1e9, pick in any::<prop::sample::Index>()) {
        let ctx = Context::default();
        let units = symbols(domain);
        let unit = units[pick.index(units.len())];
        let result = convert(domain, value, unit, unit, &ctx).unwrap();
        prop_assert_eq!(result, value);
    }

    #[test]
    fn prop_there_and_back(
        domain in domain_strategy(),
        value in -1e6f64..1e6,
        a in any::<prop::sample::Index>(),
        b in any::<prop::sample::Index>(),
    ) {
        let ctx = Context::default();
        let units = symbols(domain);
        let from = units[a.index(units.len())];
        let to = units[b.index(units.len())];
        let there = convert(domain, value, from, to, &ctx).unwrap();
        let back = convert(domain, there, to, from, &ctx).unwrap();
        prop_assert!(close(back, value), "{} {} -> {} -> {}: {}", domain, from, to, from, back);
    }
}
