// Registry of conversion domains and the units each one offers.
// The converter pages read this to populate their unit pickers.

use crate::error::{ConvertError, ConvertResult};
use crate::units::{
    LengthUnit, SpeedUnit, StorageUnit, TemperatureUnit, TimeUnit, TypographyUnit, Unit,
    ViewportUnit, WeightUnit,
};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Domain {
    Length,
    Weight,
    Temperature,
    Storage,
    Speed,
    Time,
    Typography,
    Viewport,
    Tailwind,
    Color,
}

impl Domain {
    /// Every domain, in the order queries try them when resolving a unit pair.
    pub const ALL: [Domain; 10] = [
        Domain::Length,
        Domain::Weight,
        Domain::Temperature,
        Domain::Storage,
        Domain::Speed,
        Domain::Time,
        Domain::Typography,
        Domain::Viewport,
        Domain::Tailwind,
        Domain::Color,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Domain::Length => "length",
            Domain::Weight => "weight",
            Domain::Temperature => "temperature",
            Domain::Storage => "storage",
            Domain::Speed => "speed",
            Domain::Time => "time",
            Domain::Typography => "typography",
            Domain::Viewport => "viewport",
            Domain::Tailwind => "tailwind",
            Domain::Color => "color",
        }
    }

    /// True for domains served by the numeric `convert` contract.
    pub fn is_numeric(self) -> bool {
        !matches!(self, Domain::Tailwind | Domain::Color)
    }
}

impl fmt::Display for Domain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Domain {
    type Err = ConvertError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_ascii_lowercase();
        let domain = match key.as_str() {
            "length" | "distance" => Domain::Length,
            "weight" | "mass" => Domain::Weight,
            "temperature" | "temp" => Domain::Temperature,
            "storage" | "data" | "data-storage" | "datastorage" => Domain::Storage,
            "speed" | "velocity" => Domain::Speed,
            "time" | "duration" => Domain::Time,
            "typography" | "px-rem-em" | "pxremem" | "font" => Domain::Typography,
            "viewport" => Domain::Viewport,
            "tailwind" => Domain::Tailwind,
            "color" | "colour" => Domain::Color,
            _ => return Err(ConvertError::UnknownDomain(s.to_string())),
        };
        Ok(domain)
    }
}

/// Everything a converter page needs to render its form.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DomainInfo {
    pub domain: Domain,
    pub title: &'static str,
    pub base_unit: &'static str,
    pub units: Vec<&'static str>,
    pub default_from: &'static str,
    pub default_to: &'static str,
}

fn symbols<U: Unit>() -> Vec<&'static str> {
    U::all().iter().map(|u| u.symbol()).collect()
}

/// Look up the page metadata for a single domain.
pub fn domain_info(domain: Domain) -> DomainInfo {
    match domain {
        Domain::Length => DomainInfo {
            domain,
            title: "Length Converter",
            base_unit: LengthUnit::Meter.symbol(),
            units: symbols::<LengthUnit>(),
            default_from: LengthUnit::Inch.symbol(),
            default_to: LengthUnit::Centimeter.symbol(),
        },
        Domain::Weight => DomainInfo {
            domain,
            title: "Weight Converter",
            base_unit: WeightUnit::Kilogram.symbol(),
            units: symbols::<WeightUnit>(),
            default_from: WeightUnit::Kilogram.symbol(),
            default_to: WeightUnit::Pound.symbol(),
        },
        Domain::Temperature => DomainInfo {
            domain,
            title: "Temperature Converter",
            base_unit: TemperatureUnit::Celsius.symbol(),
            units: symbols::<TemperatureUnit>(),
            default_from: TemperatureUnit::Celsius.symbol(),
            default_to: TemperatureUnit::Fahrenheit.symbol(),
        },
        Domain::Storage => DomainInfo {
            domain,
            title: "Data Storage Converter",
            base_unit: StorageUnit::Byte.symbol(),
            units: symbols::<StorageUnit>(),
            default_from: StorageUnit::Megabyte.symbol(),
            default_to: StorageUnit::Gigabyte.symbol(),
        },
        Domain::Speed => DomainInfo {
            domain,
            title: "Speed Converter",
            base_unit: SpeedUnit::MetersPerSecond.symbol(),
            units: symbols::<SpeedUnit>(),
            default_from: SpeedUnit::KilometersPerHour.symbol(),
            default_to: SpeedUnit::MilesPerHour.symbol(),
        },
        Domain::Time => DomainInfo {
            domain,
            title: "Time Converter",
            base_unit: TimeUnit::Second.symbol(),
            units: symbols::<TimeUnit>(),
            default_from: TimeUnit::Minute.symbol(),
            default_to: TimeUnit::Second.symbol(),
        },
        Domain::Typography => DomainInfo {
            domain,
            title: "PX to REM/EM Converter",
            base_unit: TypographyUnit::Px.symbol(),
            units: symbols::<TypographyUnit>(),
            default_from: TypographyUnit::Px.symbol(),
            default_to: TypographyUnit::Rem.symbol(),
        },
        Domain::Viewport => DomainInfo {
            domain,
            title: "Viewport Units Converter",
            base_unit: ViewportUnit::Px.symbol(),
            units: symbols::<ViewportUnit>(),
            default_from: ViewportUnit::Px.symbol(),
            default_to: ViewportUnit::Vw.symbol(),
        },
        Domain::Tailwind => DomainInfo {
            domain,
            title: "Tailwind CSS PX Converter",
            base_unit: "px",
            units: vec!["spacing", "font-size", "breakpoint"],
            default_from: "spacing",
            default_to: "px",
        },
        Domain::Color => DomainInfo {
            domain,
            title: "Color Converter",
            base_unit: "RGB",
            units: vec!["HEX", "RGB", "HSL"],
            default_from: "HEX",
            default_to: "RGB",
        },
    }
}

/// Page metadata for every domain, in registry order.
pub fn domains() -> Vec<DomainInfo> {
    Domain::ALL.iter().map(|d| domain_info(*d)).collect()
}

/// Unit symbols for a domain name such as `"length"`.
pub fn units_for(domain: &str) -> ConvertResult<Vec<&'static str>> {
    let domain: Domain = domain.parse()?;
    Ok(domain_info(domain).units)
}
