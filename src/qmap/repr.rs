use std::io;

use hashbrown::HashMap;

pub type Point = [f64; 3];
pub type Vec2 = [f64; 2];
pub type HalfSpace = [Point; 3];

pub trait Writes<W: io::Write> {
    fn write_to(&self, writer: &mut W) -> io::Result<()>;
}

/// Ordered key/value attributes of an entity.
///
/// Entries keep the order in which their keys were first inserted.
/// Re-inserting a key replaces the value in place.
#[derive(Debug, Clone, Default)]
pub struct Edict {
    entries: Vec<(String, String)>,
    index: HashMap<String, usize>,
}

impl Edict {
    pub fn new() -> Edict {
        Edict::default()
    }

    pub fn insert(
        &mut self,
        key: impl Into<String>,
        value: impl Into<String>,
    ) -> Option<String> {
        let key = key.into();
        let value = value.into();

        match self.index.get(&key) {
            Some(&slot) => {
                Some(std::mem::replace(&mut self.entries[slot].1, value))
            }
            None => {
                self.index.insert(key.clone(), self.entries.len());
                self.entries.push((key, value));
                None
            }
        }
    }

    /// Builder form of [`Edict::insert`].
    pub fn with(
        mut self,
        key: impl Into<String>,
        value: impl Into<String>,
    ) -> Edict {
        self.insert(key, value);
        self
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.index
            .get(key)
            .map(|&slot| self.entries[slot].1.as_str())
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.index.contains_key(key)
    }

    pub fn remove(&mut self, key: &str) -> Option<String> {
        let slot = self.index.remove(key)?;
        let (_, value) = self.entries.remove(slot);

        for later in self.index.values_mut() {
            if *later > slot {
                *later -= 1;
            }
        }

        Some(value)
    }

    /// Builder form of [`Edict::remove`].
    pub fn without(mut self, key: &str) -> Edict {
        self.remove(key);
        self
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> + '_ {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> + '_ {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl PartialEq for Edict {
    fn eq(&self, other: &Edict) -> bool {
        self.entries == other.entries
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Edict {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Edict {
        let mut edict = Edict::new();

        for (key, value) in iter {
            edict.insert(key, value);
        }

        edict
    }
}

impl<W: io::Write> Writes<W> for Edict {
    fn write_to(&self, writer: &mut W) -> io::Result<()> {
        for (key, value) in self.iter() {
            writeln!(writer, " \"{}\" \"{}\"", key, value)?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TextureTransform {
    pub texture: String,
    pub rotation: f64,
    pub translate: Vec2,
    pub scale: Vec2,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Side {
    pub half_space: HalfSpace,
    pub transform: TextureTransform,
}

impl<W: io::Write> Writes<W> for Side {
    fn write_to(&self, writer: &mut W) -> io::Result<()> {
        writer.write_all(b"  ")?;

        for pt in &self.half_space {
            write!(writer, "( {} {} {} ) ", pt[0], pt[1], pt[2])?;
        }

        let transform = &self.transform;
        writeln!(
            writer,
            "{} {:.6} {:.6} {:.6} {:.6} {:.6}",
            transform.texture,
            transform.translate[0],
            transform.translate[1],
            transform.rotation,
            transform.scale[0],
            transform.scale[1]
        )
    }
}

pub type Brush = Vec<Side>;

impl<W: io::Write> Writes<W> for Brush {
    fn write_to(&self, writer: &mut W) -> io::Result<()> {
        writer.write_all(b" {\n")?;

        for side in self {
            side.write_to(writer)?;
        }

        writer.write_all(b" }\n")?;
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Entity {
    pub edict: Edict,
    pub brushes: Vec<Brush>,
}

impl Entity {
    pub fn new(edict: Edict, brushes: Vec<Brush>) -> Entity {
        Entity { edict, brushes }
    }

    pub fn classname(&self) -> Option<&str> {
        self.edict.get("classname")
    }

    /// `spawnflags` as a bit field; missing or malformed flags read as 0.
    pub fn spawnflags(&self) -> u32 {
        spawnflags(&self.edict)
    }
}

pub(crate) fn spawnflags(edict: &Edict) -> u32 {
    edict
        .get("spawnflags")
        .and_then(|flags| flags.trim().parse().ok())
        .unwrap_or(0)
}

impl<W: io::Write> Writes<W> for Entity {
    fn write_to(&self, writer: &mut W) -> io::Result<()> {
        writer.write_all(b"{\n")?;
        self.edict.write_to(writer)?;

        for brush in &self.brushes {
            brush.write_to(writer)?;
        }

        writer.write_all(b"}\n")?;
        Ok(())
    }
}
