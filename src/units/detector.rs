use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // "<number><optional space><unit>": "100 km/h", "-40 °F", "1.5e3 ms", "16px"
    static ref QUANTITY_PATTERN: Regex = Regex::new(
        r"^(?P<value>[-+]?(?:\d+(?:\.\d*)?|\.\d+)(?:[eE][+-]?\d+)?)\s*(?P<unit>[a-zA-Z°/]+)$"
    ).unwrap();
}

/// Split text such as `"12 px"` into its number and unit symbol.
///
/// The unit is returned as written; whether any domain knows it is decided later.
pub fn split_quantity(s: &str) -> Option<(f64, &str)> {
    let caps = QUANTITY_PATTERN.captures(s.trim())?;
    let value = caps.name("value")?.as_str().parse::<f64>().ok()?;
    let unit = caps.name("unit")?.as_str();
    Some((value, unit))
}

pub fn looks_like_quantity(s: &str) -> bool {
    split_quantity(s).is_some()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quantity_detection() {
        assert!(looks_like_quantity("100 km/h"));
        assert!(looks_like_quantity("10.5 m"));
        assert!(looks_like_quantity("-40 °F"));
        assert!(looks_like_quantity(".5 rem"));

        assert!(!looks_like_quantity("100"));
        assert!(!looks_like_quantity("km"));
        assert!(!looks_like_quantity("2 inch to cm"));
        assert!(!looks_like_quantity(""));
    }

    #[test]
    fn test_split_quantity() {
        assert_eq!(split_quantity("16px"), Some((16.0, "px")));
        assert_eq!(split_quantity(" 1e3 ms "), Some((1000.0, "ms")));
        assert_eq!(split_quantity("-1.5e2 C"), Some((-150.0, "C")));
        assert_eq!(split_quantity("5em"), Some((5.0, "em")));
        assert_eq!(split_quantity("2 in ch"), None);
    }
}
