use super::table::{unit_enum, UnitTable};
use crate::error::ConvertResult;
use crate::registry::Domain;
use lazy_static::lazy_static;

unit_enum! {
    /// Data storage units. Multiples are binary (1 KB = 1024 B).
    pub enum StorageUnit in Domain::Storage {
        Bit => "bit" | "bits" | "b",
        Byte => "B" | "byte" | "bytes",
        Kilobyte => "KB" | "kB" | "KiB",
        Megabyte => "MB" | "MiB",
        Gigabyte => "GB" | "GiB",
        Terabyte => "TB" | "TiB",
    }
}

const KIB: f64 = 1024.0;

lazy_static! {
    static ref STORAGE_TABLE: UnitTable<StorageUnit> = UnitTable::new(
        StorageUnit::Byte,
        vec![
            (StorageUnit::Bit, 1.0 / 8.0),
            (StorageUnit::Byte, 1.0),
            (StorageUnit::Kilobyte, KIB),
            (StorageUnit::Megabyte, KIB.powi(2)),
            (StorageUnit::Gigabyte, KIB.powi(3)),
            (StorageUnit::Terabyte, KIB.powi(4)),
        ],
    )
    .expect("storage table is valid");
}

pub fn table() -> &'static UnitTable<StorageUnit> {
    &STORAGE_TABLE
}

pub fn convert(value: f64, from: StorageUnit, to: StorageUnit) -> ConvertResult<f64> {
    STORAGE_TABLE.convert(value, from, to)
}
