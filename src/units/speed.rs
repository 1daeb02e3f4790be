use super::table::{unit_enum, UnitTable};
use crate::error::ConvertResult;
use crate::registry::Domain;
use lazy_static::lazy_static;

unit_enum! {
    /// Speed units, converted through meters per second.
    pub enum SpeedUnit in Domain::Speed {
        MetersPerSecond => "m/s" | "mps",
        KilometersPerHour => "km/h" | "kph" | "kmh",
        MilesPerHour => "mph" | "mi/h",
        Knot => "knots" | "knot" | "kn" | "kt",
    }
}

lazy_static! {
    static ref SPEED_TABLE: UnitTable<SpeedUnit> = UnitTable::new(
        SpeedUnit::MetersPerSecond,
        vec![
            (SpeedUnit::MetersPerSecond, 1.0),
            (SpeedUnit::KilometersPerHour, 1.0 / 3.6),
            (SpeedUnit::MilesPerHour, 0.44704),
            (SpeedUnit::Knot, 0.514444),
        ],
    )
    .expect("speed table is valid");
}

pub fn table() -> &'static UnitTable<SpeedUnit> {
    &SPEED_TABLE
}

pub fn convert(value: f64, from: SpeedUnit, to: SpeedUnit) -> ConvertResult<f64> {
    SPEED_TABLE.convert(value, from, to)
}
