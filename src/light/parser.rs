use crate::error::{Error, Result};
use crate::lexer::Cursor;
use crate::light::Light;

const MARKER: &str = "!";

const RECORD_FIELDS: usize = 7;

pub fn parse_lights(cursor: &mut Cursor) -> Result<Vec<Light>> {
    let mut lights = Vec::new();

    while !cursor.is_drained() {
        lights.push(parse_light(cursor)?);
    }

    Ok(lights)
}

/// Parses the next non-blank line as one light. A record never borrows
/// fields from the line after it.
pub fn parse_light(cursor: &mut Cursor) -> Result<Light> {
    cursor.skip_whitespace();
    let line_number = cursor.line_number();
    let mut record = Cursor::starting_at(cursor.next_line(), line_number);

    record.skip(MARKER);

    let mut fields = [0.0; RECORD_FIELDS];

    for (read, field) in fields.iter_mut().enumerate() {
        if record.is_drained() {
            return Err(Error::from_parser(
                format!(
                    "Light record ends early, {} of {} fields",
                    read, RECORD_FIELDS
                ),
                line_number,
            ));
        }

        *field = record.next_number()?;
    }

    let [x, y, z, radius, r, g, b] = fields;

    Ok(Light {
        origin: [x, y, z],
        radius,
        color: [r, g, b],
    })
}
