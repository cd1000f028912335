pub mod parser;
pub mod repr;

pub use repr::{
    Brush, Edict, Entity, HalfSpace, Point, Side, TextureTransform, Vec2,
    Writes,
};

pub use parser::{parse_brush, parse_entities, parse_entity, parse_side};
