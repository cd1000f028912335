use crate::error::{Error, Result};
use crate::lexer::Cursor;
use crate::qmap::repr::{Brush, Edict, Entity, Side, TextureTransform};

const MIN_BRUSH_SIDES: usize = 4;

/// Parses entities for as long as the next token opens one.
pub fn parse_entities(cursor: &mut Cursor) -> Result<Vec<Entity>> {
    let mut entities = Vec::new();

    while cursor.peek()? == "{" {
        entities.push(parse_entity(cursor)?);
    }

    Ok(entities)
}

pub fn parse_entity(cursor: &mut Cursor) -> Result<Entity> {
    let mut edict = Edict::new();
    let mut brushes = Vec::new();

    cursor.expect("{")?;

    loop {
        if cursor.is_drained() {
            return Err(Error::from_parser(
                String::from("Unmatched `{` in entity"),
                cursor.line_number(),
            ));
        }

        match cursor.peek()? {
            "}" => break,
            "{" => brushes.push(parse_brush(cursor)?),
            _ => {
                let key = cursor.next_token()?;
                let value = cursor.next_token()?;
                edict.insert(key, value);
            }
        }
    }

    cursor.expect("}")?;

    Ok(Entity::new(edict, brushes))
}

pub fn parse_brush(cursor: &mut Cursor) -> Result<Brush> {
    let mut sides = Vec::with_capacity(MIN_BRUSH_SIDES);

    cursor.expect("{")?;

    while cursor.peek()? != "}" {
        sides.push(parse_side(cursor)?);
    }

    cursor.expect("}")?;

    Ok(sides)
}

/// Sides are read in the standard field order: three points, texture,
/// translate u/v, rotation, scale u/v.
pub fn parse_side(cursor: &mut Cursor) -> Result<Side> {
    let half_space = [
        cursor.next_point()?,
        cursor.next_point()?,
        cursor.next_point()?,
    ];

    let line_number = cursor.line_number();
    let texture = cursor.next_token()?;

    if texture.is_empty() {
        return Err(Error::eof(line_number));
    }

    let translate_u = cursor.next_number()?;
    let translate_v = cursor.next_number()?;
    let rotation = cursor.next_number()?;
    let scale_u = cursor.next_number()?;
    let scale_v = cursor.next_number()?;

    Ok(Side {
        half_space,
        transform: TextureTransform {
            texture: texture.to_string(),
            rotation,
            translate: [translate_u, translate_v],
            scale: [scale_u, scale_v],
        },
    })
}
