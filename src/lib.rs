//! Converts Quake `.map` files, together with their `.rtlights`, into maps
//! for Quetoo.
//!
//! A [`Document`] is read once, converted into a new document by a
//! [`Converter`] and written out with [`Writes::write_to`]. Conversion only
//! understands Quake input; feeding it its own output is not supported.

pub mod config;
pub mod convert;
pub mod document;
pub mod error;
pub mod lexer;
pub mod light;
pub mod qmap;

pub use config::{ConvertConfig, FlamePolicy};
pub use convert::{Converter, RuleTable};
pub use document::{companion_path, Document};
pub use error::{Error, LineError, Result};
pub use lexer::Cursor;
pub use light::Light;
pub use qmap::{Brush, Edict, Entity, Side, TextureTransform, Writes};


#[cfg(test)]
mod document_test;
