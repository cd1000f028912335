use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::convert::Converter;
use crate::error::{Error, Result};
use crate::lexer::Cursor;
use crate::light::{self, Light, LIGHTS_EXTENSION};
use crate::qmap::{self, Entity, Writes};

/// A map together with its companion lights.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Document {
    pub map_path: PathBuf,
    pub lights_path: PathBuf,
    pub entities: Vec<Entity>,
    pub lights: Vec<Light>,
}

/// `maps/e1m1.map` pairs with `maps/e1m1.rtlights`.
pub fn companion_path(map_path: &Path) -> PathBuf {
    map_path.with_extension(LIGHTS_EXTENSION)
}

impl Document {
    pub fn new(
        map_path: impl Into<PathBuf>,
        lights_path: Option<PathBuf>,
    ) -> Document {
        let map_path = map_path.into();
        let lights_path =
            lights_path.unwrap_or_else(|| companion_path(&map_path));

        Document {
            map_path,
            lights_path,
            entities: Vec::new(),
            lights: Vec::new(),
        }
    }

    /// Reads both files. The map must be readable; a missing or unreadable
    /// lights file leaves the document without lights.
    pub fn read(&mut self) -> Result<()> {
        let map_text = fs::read_to_string(&self.map_path)
            .map_err(|e| Error::from_io(&self.map_path, e))?;

        let lights_text = match fs::read_to_string(&self.lights_path) {
            Ok(text) => Some(text),
            Err(err) => {
                tracing::warn!(
                    path = %self.lights_path.display(),
                    error = %err,
                    "failed to read lights, continuing without them"
                );
                None
            }
        };

        self.parse_map(&map_text)?;

        if let Some(text) = lights_text {
            self.parse_lights(&text)?;
        }

        tracing::info!(
            entities = self.entities.len(),
            lights = self.lights.len(),
            map = %self.map_path.display(),
            "read map"
        );

        Ok(())
    }

    pub fn parse_map(&mut self, text: &str) -> Result<()> {
        let mut cursor = Cursor::new(text);
        self.entities = qmap::parse_entities(&mut cursor)?;

        if !cursor.is_drained() {
            tracing::warn!(
                line = cursor.line_number().get(),
                "ignoring trailing content after the last entity"
            );
        }

        Ok(())
    }

    pub fn parse_lights(&mut self, text: &str) -> Result<()> {
        let mut cursor = Cursor::new(text);
        self.lights = light::parse_lights(&mut cursor)?;
        Ok(())
    }

    /// Builds the converted document, leaving `self` untouched.
    pub fn convert(&self, converter: &Converter) -> Document {
        let entities = converter.convert_entities(&self.entities);

        tracing::info!(
            converted = entities.len(),
            dropped = self.entities.len() - entities.len(),
            "converted entities"
        );

        Document {
            map_path: self.map_path.clone(),
            lights_path: self.lights_path.clone(),
            entities,
            lights: self.lights.clone(),
        }
    }
}

/// Entities first, then one `light` entity per light.
impl<W: io::Write> Writes<W> for Document {
    fn write_to(&self, writer: &mut W) -> io::Result<()> {
        for entity in &self.entities {
            entity.write_to(writer)?;
        }

        for light in &self.lights {
            light.write_to(writer)?;
        }

        Ok(())
    }
}
