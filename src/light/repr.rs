use std::io;

use crate::qmap::{Point, Writes};

#[derive(Debug, Clone, PartialEq)]
pub struct Light {
    pub origin: Point,
    pub radius: f64,
    pub color: [f64; 3],
}

/// Lights are written as `light` entities.
impl<W: io::Write> Writes<W> for Light {
    fn write_to(&self, writer: &mut W) -> io::Result<()> {
        let [x, y, z] = self.origin;
        let [r, g, b] = self.color;

        writer.write_all(b"{\n")?;
        writeln!(writer, " \"classname\" \"light\"")?;
        writeln!(writer, " \"origin\" \"{:.6} {:.6} {:.6}\"", x, y, z)?;
        writeln!(writer, " \"light\" \"{:.6}\"", self.radius)?;
        writeln!(writer, " \"_color\" \"{:.6} {:.6} {:.6}\"", r, g, b)?;
        writer.write_all(b"}\n")?;
        Ok(())
    }
}
