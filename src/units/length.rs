use super::table::{unit_enum, UnitTable};
use crate::error::ConvertResult;
use crate::registry::Domain;
use lazy_static::lazy_static;

unit_enum! {
    /// Length units, converted through the meter.
    pub enum LengthUnit in Domain::Length {
        Millimeter => "mm" | "millimeter" | "millimeters",
        Centimeter => "cm" | "centimeter" | "centimeters",
        Meter => "m" | "meter" | "meters",
        Kilometer => "km" | "kilometer" | "kilometers",
        Inch => "inch" | "in" | "inches",
        Foot => "foot" | "ft" | "feet",
        Yard => "yard" | "yd" | "yards",
        Mile => "mile" | "mi" | "miles",
    }
}

lazy_static! {
    static ref LENGTH_TABLE: UnitTable<LengthUnit> = UnitTable::new(
        LengthUnit::Meter,
        vec![
            (LengthUnit::Millimeter, 0.001),
            (LengthUnit::Centimeter, 0.01),
            (LengthUnit::Meter, 1.0),
            (LengthUnit::Kilometer, 1000.0),
            (LengthUnit::Inch, 0.0254),
            (LengthUnit::Foot, 0.3048),
            (LengthUnit::Yard, 0.9144),
            (LengthUnit::Mile, 1609.34),
        ],
    )
    .expect("length table is valid");
}

pub fn table() -> &'static UnitTable<LengthUnit> {
    &LENGTH_TABLE
}

pub fn convert(value: f64, from: LengthUnit, to: LengthUnit) -> ConvertResult<f64> {
    LENGTH_TABLE.convert(value, from, to)
}
