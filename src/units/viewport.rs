use super::table::{unit_enum, UnitTable};
use crate::error::{ConvertError, ConvertResult};
use crate::registry::Domain;
use serde::{Deserialize, Serialize};
use tracing::warn;

unit_enum! {
    /// Viewport-relative CSS units. 1vw is 1% of the frame width, 1vh 1% of its height.
    pub enum ViewportUnit in Domain::Viewport {
        Px => "px" | "pixel" | "pixels",
        Vw => "vw",
        Vh => "vh",
    }
}

/// The width/height pair vw and vh are measured against.
///
/// Supplied by the caller on every conversion (a form field or the live
/// browser window); the engine never keeps one around.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
pub struct ViewportFrame {
    pub width: f64,
    pub height: f64,
}

impl ViewportFrame {
    pub fn new(width: f64, height: f64) -> ConvertResult<Self> {
        let frame = Self { width, height };
        frame.validate()?;
        Ok(frame)
    }

    pub fn validate(&self) -> ConvertResult<()> {
        let usable = |d: f64| d.is_finite() && d > 0.0;
        if usable(self.width) && usable(self.height) {
            Ok(())
        } else {
            warn!(width = self.width, height = self.height, "rejected viewport frame");
            Err(ConvertError::InvalidReferenceFrame {
                width: self.width,
                height: self.height,
            })
        }
    }

    /// Unit table for this frame; vw/vh factors are derived from the dimensions.
    pub fn table(&self) -> ConvertResult<UnitTable<ViewportUnit>> {
        self.validate()?;
        UnitTable::new(
            ViewportUnit::Px,
            vec![
                (ViewportUnit::Px, 1.0),
                (ViewportUnit::Vw, self.width / 100.0),
                (ViewportUnit::Vh, self.height / 100.0),
            ],
        )
    }
}

impl Default for ViewportFrame {
    /// A 1920x1080 desktop screen.
    fn default() -> Self {
        Self {
            width: 1920.0,
            height: 1080.0,
        }
    }
}

pub fn convert(
    value: f64,
    from: ViewportUnit,
    to: ViewportUnit,
    frame: ViewportFrame,
) -> ConvertResult<f64> {
    frame.table()?.convert(value, from, to)
}
