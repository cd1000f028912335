//! Quake to Quetoo conversion.
//!
//! Conversion never mutates its input. Every entity maps to at most one
//! entity and every brush and side to exactly one, in source order.

pub mod classname;
pub mod texture;

pub use classname::{Rule, RuleTable};
pub use texture::{convert_brush, convert_side, convert_transform};

use crate::config::ConvertConfig;
use crate::qmap::{Edict, Entity};

const ITEM_PREFIXES: [&str; 2] = ["item_", "weapon_"];

#[derive(Debug)]
pub struct Converter {
    config: ConvertConfig,
    rules: RuleTable,
}

impl Converter {
    pub fn new(config: ConvertConfig) -> Converter {
        let rules = RuleTable::standard(&config);
        Converter { config, rules }
    }

    pub fn with_rules(config: ConvertConfig, rules: RuleTable) -> Converter {
        Converter { config, rules }
    }

    pub fn config(&self) -> &ConvertConfig {
        &self.config
    }

    pub fn rules(&self) -> &RuleTable {
        &self.rules
    }

    pub fn rules_mut(&mut self) -> &mut RuleTable {
        &mut self.rules
    }

    pub fn convert_entities(&self, entities: &[Entity]) -> Vec<Entity> {
        entities
            .iter()
            .filter_map(|entity| self.convert_entity(entity))
            .collect()
    }

    pub fn convert_entity(&self, entity: &Entity) -> Option<Entity> {
        let source_classname = entity.classname().unwrap_or_default();

        let Some(mut edict) = self.rules.apply(&entity.edict) else {
            tracing::debug!(classname = source_classname, "dropping entity");
            return None;
        };

        edict.remove("spawnflags");

        if is_item(source_classname) {
            edict = shift_origin(edict, self.config.item_offset);
        }

        Some(Entity::new(
            edict,
            entity.brushes.iter().map(convert_brush).collect(),
        ))
    }
}

impl Default for Converter {
    fn default() -> Self {
        Converter::new(ConvertConfig::default())
    }
}

fn is_item(classname: &str) -> bool {
    let classname = classname.to_lowercase();
    ITEM_PREFIXES
        .iter()
        .any(|prefix| classname.starts_with(prefix))
}

fn is_number(text: &str) -> bool {
    text.parse::<f64>().is_ok()
}

/// Raises the Z of an `x y z` origin. X and Y keep their source text.
fn shift_origin(edict: Edict, offset: f64) -> Edict {
    let Some(origin) = edict.get("origin") else {
        return edict;
    };

    let mut components = origin.split_whitespace();
    let shifted = match (
        components.next(),
        components.next(),
        components.next(),
        components.next(),
    ) {
        (Some(x), Some(y), Some(z), None) if is_number(x) && is_number(y) => z
            .parse::<f64>()
            .ok()
            .map(|z| format!("{} {} {}", x, y, z + offset)),
        _ => None,
    };

    match shifted {
        Some(shifted) => edict.with("origin", shifted),
        None => {
            tracing::warn!(origin, "leaving malformed item origin unchanged");
            edict
        }
    }
}
