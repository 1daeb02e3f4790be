//! HEX / RGB / HSL color conversion.
//!
//! RGB is the pivot representation: HEX and HSL are only ever converted to
//! each other by way of an [`Rgb`] value.

pub mod convert;
pub mod model;
pub mod parser;


pub use convert::{
    convert_color, convert_color_str, hex_to_rgb, hsl_text_to_rgb, hsl_to_rgb, rgb_text_to_hsl,
    rgb_to_hex, rgb_to_hsl,
};
pub use model::{ColorFormat, ColorValue, Hsl, Rgb};
pub use parser::{detect_format, parse_hex, parse_hsl, parse_rgb};
