//! Point lights from `.rtlights` files.
//!
//! Each non-blank line holds an optional `!` marker, the origin, the radius
//! and the color, followed by fields that are not carried over (style,
//! cubemap, corona and so on).

pub mod parser;
pub mod repr;

pub use parser::{parse_light, parse_lights};
pub use repr::Light;

pub const LIGHTS_EXTENSION: &str = "rtlights";

#[cfg(test)]
mod parser_test;
