use super::table::{unit_enum, UnitTable};
use crate::error::ConvertResult;
use crate::registry::Domain;
use lazy_static::lazy_static;

unit_enum! {
    /// Time units, converted through the second.
    pub enum TimeUnit in Domain::Time {
        Millisecond => "ms" | "millisecond" | "milliseconds",
        Second => "s" | "sec" | "second" | "seconds",
        Minute => "min" | "minute" | "minutes",
        Hour => "hr" | "h" | "hour" | "hours",
        Day => "day" | "d" | "days",
    }
}

lazy_static! {
    static ref TIME_TABLE: UnitTable<TimeUnit> = UnitTable::new(
        TimeUnit::Second,
        vec![
            (TimeUnit::Millisecond, 1.0 / 1000.0),
            (TimeUnit::Second, 1.0),
            (TimeUnit::Minute, 60.0),
            (TimeUnit::Hour, 3600.0),
            (TimeUnit::Day, 86400.0),
        ],
    )
    .expect("time table is valid");
}

pub fn table() -> &'static UnitTable<TimeUnit> {
    &TIME_TABLE
}

pub fn convert(value: f64, from: TimeUnit, to: TimeUnit) -> ConvertResult<f64> {
    TIME_TABLE.convert(value, from, to)
}
