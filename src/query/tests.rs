use super::executor::{resolve_domain, QueryExecutor, QueryOutcome, QueryValue};
use super::formatter::{format_outcome, format_outcome_json};
use super::parser::parse_query;
use crate::error::ConvertError;
use crate::registry::Domain;
use crate::units::{Context, ViewportFrame, DEFAULT_PRECISION};

fn run(text: &str) -> Result<QueryOutcome, ConvertError> {
    let executor = QueryExecutor::new(Context::default(), DEFAULT_PRECISION);
    executor.execute(&parse_query(text)?)
}

#[test]
fn test_length_query() {
    let outcome = run("2 inch to cm").unwrap();
    assert_eq!(outcome.domain, Domain::Length);
    assert_eq!(outcome.unit.as_deref(), Some("cm"));
    assert_eq!(outcome.display, "5.08 cm");
    assert_eq!(outcome.input, "2 inch");
    assert!(outcome.warning.is_none());
}

#[test]
fn test_inch_alias_does_not_split_query() {
    let outcome = run("2 in to cm").unwrap();
    assert_eq!(outcome.display, "5.08 cm");
}

#[test]
fn test_speed_query() {
    let outcome = run("100 km/h in mph").unwrap();
    assert_eq!(outcome.domain, Domain::Speed);
    assert_eq!(outcome.display, "62.137119 mph");
}

#[test]
fn test_temperature_query() {
    let outcome = run("-40 F as C").unwrap();
    assert_eq!(outcome.domain, Domain::Temperature);
    assert_eq!(outcome.result, QueryValue::Number(-40.0));
    assert_eq!(outcome.display, "-40 C");
}

#[test]
fn test_below_absolute_zero_carries_warning() {
    let outcome = run("-500 C to K").unwrap();
    assert!(outcome.warning.is_some());
    let text = format_outcome(&outcome);
    assert!(text.contains("warning:"));
    assert!(text.starts_with("-500 C = "));
}

#[test]
fn test_shared_symbol_resolves_in_domain_order() {
    assert_eq!(resolve_domain("px", "rem").unwrap(), Domain::Typography);
    assert_eq!(resolve_domain("px", "vw").unwrap(), Domain::Viewport);
    assert_eq!(resolve_domain("px", "px").unwrap(), Domain::Typography);
}

#[test]
fn test_viewport_query_uses_context_frame() {
    let ctx = Context {
        base_font_size: 16.0,
        viewport: ViewportFrame::new(1000.0, 500.0).unwrap(),
    };
    let executor = QueryExecutor::new(ctx, DEFAULT_PRECISION);
    let outcome = executor.execute(&parse_query("250 px to vw").unwrap()).unwrap();
    assert_eq!(outcome.result, QueryValue::Number(25.0));
}

#[test]
fn test_explicit_domain_wins() {
    let outcome = run("viewport: 16 px to px").unwrap();
    assert_eq!(outcome.domain, Domain::Viewport);
}

#[test]
fn test_color_query() {
    let outcome = run("#efadbd to rgb").unwrap();
    assert_eq!(outcome.domain, Domain::Color);
    assert_eq!(outcome.result, QueryValue::Color("rgb(239, 173, 189)".to_string()));
    assert!(outcome.unit.is_none());

    let outcome = run("rgb(239, 173, 189) -> hex").unwrap();
    assert_eq!(outcome.display, "#efadbd");
}

#[test]
fn test_incompatible_units() {
    assert_eq!(
        run("5 kg to m").unwrap_err(),
        ConvertError::IncompatibleUnits {
            from: "kg".to_string(),
            to: "m".to_string()
        }
    );
}

#[test]
fn test_one_unknown_unit_names_the_other_domain() {
    assert_eq!(
        run("5 parsec to km").unwrap_err(),
        ConvertError::UnknownUnit {
            domain: Domain::Length,
            unit: "parsec".to_string()
        }
    );
}

#[test]
fn test_both_units_unknown() {
    assert!(matches!(run("5 foo to bar"), Err(ConvertError::InvalidQuery(_))));
}

#[test]
fn test_explicit_domain_with_foreign_unit() {
    assert!(matches!(
        run("weight: 5 m to kg"),
        Err(ConvertError::UnknownUnit { domain: Domain::Weight, .. })
    ));
}

#[test]
fn test_json_output() {
    let outcome = run("1024 MB to GB").unwrap();
    let json: serde_json::Value = serde_json::from_str(&format_outcome_json(&outcome)).unwrap();
    assert_eq!(json["domain"], "storage");
    assert_eq!(json["result"], 1.0);
    assert_eq!(json["unit"], "GB");
    assert!(json.get("warning").is_none());
}
