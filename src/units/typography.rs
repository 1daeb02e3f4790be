// CSS typography units. rem and em both scale with the root font size;
// the page has no parent-element context, so em is treated like rem.

use super::table::{unit_enum, UnitTable};
use crate::error::ConvertResult;
use crate::registry::Domain;

pub const DEFAULT_BASE_FONT_SIZE: f64 = 16.0;

unit_enum! {
    pub enum TypographyUnit in Domain::Typography {
        Px => "px" | "pixel" | "pixels",
        Rem => "rem",
        Em => "em",
    }
}

/// Build the px/rem/em table for a given root font size in pixels.
pub fn table(base_font_size: f64) -> ConvertResult<UnitTable<TypographyUnit>> {
    UnitTable::new(
        TypographyUnit::Px,
        vec![
            (TypographyUnit::Px, 1.0),
            (TypographyUnit::Rem, base_font_size),
            (TypographyUnit::Em, base_font_size),
        ],
    )
}

pub fn convert(
    value: f64,
    from: TypographyUnit,
    to: TypographyUnit,
    base_font_size: f64,
) -> ConvertResult<f64> {
    table(base_font_size)?.convert(value, from, to)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ConvertError;

    #[test]
    fn test_px_to_rem_default_base() {
        assert_eq!(
            convert(24.0, TypographyUnit::Px, TypographyUnit::Rem, DEFAULT_BASE_FONT_SIZE).unwrap(),
            1.5
        );
    }

    #[test]
    fn test_custom_base_font_size() {
        assert_eq!(
            convert(2.0, TypographyUnit::Em, TypographyUnit::Px, 10.0).unwrap(),
            20.0
        );
    }

    #[test]
    fn test_rem_and_em_match() {
        assert_eq!(
            convert(3.0, TypographyUnit::Rem, TypographyUnit::Em, DEFAULT_BASE_FONT_SIZE).unwrap(),
            3.0
        );
    }

    #[test]
    fn test_zero_base_font_size_rejected() {
        assert!(matches!(
            convert(1.0, TypographyUnit::Px, TypographyUnit::Rem, 0.0),
            Err(ConvertError::InvalidTable { domain: Domain::Typography, .. })
        ));
    }
}
