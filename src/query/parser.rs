use crate::color::{detect_format, ColorFormat};
use crate::error::{ConvertError, ConvertResult};
use crate::registry::Domain;
use crate::units::split_quantity;
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // "[domain:] <lhs> to|in|as|into|-> <target>"
    static ref QUERY: Regex = Regex::new(
        r"(?i)^\s*(?:(?P<domain>[a-z][a-z-]*)\s*:\s*)?(?P<lhs>.+?)\s*(?:\s(?:to|in|as|into)\s|->|=>)\s*(?P<to>\S+)\s*$"
    ).unwrap();
}

#[derive(Debug, Clone, PartialEq)]
pub enum Query {
    // Numeric conversion: "2 inch to cm"
    Quantity {
        value: f64,
        from: String,
        to: String,
        domain: Option<Domain>,
    },
    // Color conversion: "#efadbd to hsl"
    Color {
        value: String,
        from: ColorFormat,
        to: ColorFormat,
    },
}

pub fn parse_query(text: &str) -> ConvertResult<Query> {
    let invalid = || ConvertError::InvalidQuery(text.to_string());

    let caps = QUERY.captures(text).ok_or_else(invalid)?;
    let lhs = caps.name("lhs").map(|m| m.as_str().trim()).ok_or_else(invalid)?;
    let to = caps.name("to").map(|m| m.as_str()).ok_or_else(invalid)?;
    let domain = caps
        .name("domain")
        .map(|m| m.as_str().parse::<Domain>())
        .transpose()?;

    if let Some(from) = detect_format(lhs) {
        if domain.is_some_and(|d| d != Domain::Color) {
            return Err(invalid());
        }
        return Ok(Query::Color {
            value: lhs.to_string(),
            from,
            to: to.parse()?,
        });
    }

    if domain == Some(Domain::Color) {
        // Bare hex digits are allowed once the domain is explicit.
        return Ok(Query::Color {
            value: lhs.to_string(),
            from: ColorFormat::Hex,
            to: to.parse()?,
        });
    }

    let (value, from) = split_quantity(lhs).ok_or_else(invalid)?;

    Ok(Query::Quantity {
        value,
        from: from.to_string(),
        to: to.to_string(),
        domain,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_quantity() {
        let query = parse_query("2 inch to cm").unwrap();
        assert_eq!(
            query,
            Query::Quantity {
                value: 2.0,
                from: "inch".to_string(),
                to: "cm".to_string(),
                domain: None
            }
        );
    }

    #[test]
    fn test_parse_compact_and_arrow() {
        match parse_query("16px -> rem").unwrap() {
            Query::Quantity { value, from, to, .. } => {
                assert_eq!(value, 16.0);
                assert_eq!(from, "px");
                assert_eq!(to, "rem");
            }
            other => panic!("Expected Quantity, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_with_domain_prefix() {
        match parse_query("viewport: 50 vw in px").unwrap() {
            Query::Quantity { domain, .. } => assert_eq!(domain, Some(Domain::Viewport)),
            other => panic!("Expected Quantity, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_negative_and_exponent() {
        match parse_query("-1.5e2 C as F").unwrap() {
            Query::Quantity { value, .. } => assert_eq!(value, -150.0),
            other => panic!("Expected Quantity, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_color() {
        let query = parse_query("rgb(239, 173, 189) to hex").unwrap();
        assert_eq!(
            query,
            Query::Color {
                value: "rgb(239, 173, 189)".to_string(),
                from: ColorFormat::Rgb,
                to: ColorFormat::Hex
            }
        );
        assert!(matches!(
            parse_query("#abc in HSL").unwrap(),
            Query::Color { from: ColorFormat::Hex, to: ColorFormat::Hsl, .. }
        ));
    }

    #[test]
    fn test_parse_bare_hex_with_color_domain() {
        assert!(matches!(
            parse_query("color: efadbd to rgb").unwrap(),
            Query::Color { from: ColorFormat::Hex, .. }
        ));
    }

    #[test]
    fn test_parse_errors() {
        assert!(matches!(parse_query(""), Err(ConvertError::InvalidQuery(_))));
        assert!(matches!(parse_query("2 inch"), Err(ConvertError::InvalidQuery(_))));
        assert!(matches!(parse_query("inch to cm"), Err(ConvertError::InvalidQuery(_))));
        assert!(matches!(
            parse_query("planet: 2 inch to cm"),
            Err(ConvertError::UnknownDomain(_))
        ));
        assert!(matches!(
            parse_query("#fff to cmyk"),
            Err(ConvertError::UnknownUnit { domain: Domain::Color, .. })
        ));
    }
}
