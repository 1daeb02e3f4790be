use super::table::{unit_enum, UnitTable};
use crate::error::ConvertResult;
use crate::registry::Domain;
use lazy_static::lazy_static;

unit_enum! {
    /// Mass units, converted through the kilogram. `ton` is the metric tonne.
    pub enum WeightUnit in Domain::Weight {
        Milligram => "mg" | "milligram" | "milligrams",
        Gram => "g" | "gram" | "grams",
        Kilogram => "kg" | "kilogram" | "kilograms",
        Ounce => "oz" | "ounce" | "ounces",
        Pound => "lb" | "lbs" | "pound" | "pounds",
        Ton => "ton" | "t" | "tonne" | "tons",
    }
}

lazy_static! {
    static ref WEIGHT_TABLE: UnitTable<WeightUnit> = UnitTable::new(
        WeightUnit::Kilogram,
        vec![
            (WeightUnit::Milligram, 0.000001),
            (WeightUnit::Gram, 0.001),
            (WeightUnit::Kilogram, 1.0),
            (WeightUnit::Ounce, 0.0283495),
            (WeightUnit::Pound, 0.453592),
            (WeightUnit::Ton, 1000.0),
        ],
    )
    .expect("weight table is valid");
}

pub fn table() -> &'static UnitTable<WeightUnit> {
    &WEIGHT_TABLE
}

pub fn convert(value: f64, from: WeightUnit, to: WeightUnit) -> ConvertResult<f64> {
    WEIGHT_TABLE.convert(value, from, to)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kilograms_to_pounds() {
        let lb = convert(1.0, WeightUnit::Kilogram, WeightUnit::Pound).unwrap();
        assert!((lb - 2.204624).abs() < 1e-6);
    }

    #[test]
    fn test_grams_to_milligrams() {
        let mg = convert(2.5, WeightUnit::Gram, WeightUnit::Milligram).unwrap();
        assert!((mg - 2500.0).abs() < 1e-9);
    }
}
