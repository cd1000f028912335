//! Classname rewrite rules.
//!
//! A [`RuleTable`] maps a lowercased Quake classname to the rule producing
//! its Quetoo counterpart. A rule builds a new [`Edict`] from the source one
//! and returns `None` when the entity has no counterpart at all.

use std::fmt;

use hashbrown::HashMap;

use crate::config::{ConvertConfig, FlamePolicy};
use crate::qmap::repr::spawnflags;
use crate::qmap::Edict;

pub type Rule = Box<dyn Fn(&Edict) -> Option<Edict> + Send + Sync>;

pub const FLAME_RADIUS: &str = "32";

pub const DRIP_SOUND: &str = "ambient/drip";

pub const WORLDSPAWN_AMBIENT: &str = "0.1 0.1 0.1";
pub const WORLDSPAWN_BRIGHTNESS: &str = "1.0";
pub const WORLDSPAWN_GIVE: &str = "weapon_shotgun";
pub const WORLDSPAWN_SKY: &str = "rygel/sky";

const TORCH: &str = "light_torch_small_walltorch";
const LARGE_FLAME: &str = "light_flame_large_yellow";

const WORLDSPAWN_DROPPED_KEYS: [&str; 3] = ["wad", "worldtype", "sounds"];

const RENAMES: [(&str, &str); 10] = [
    ("info_intermission", "info_player_intermission"),
    ("item_armor1", "armor_jacket"),
    ("item_armor2", "armor_combat"),
    ("item_cells", "ammo_bolts"),
    ("item_rockets", "ammo_rockets"),
    ("item_shells", "ammo_shells"),
    ("item_spikes", "ammo_bullets"),
    ("weapon_nailgun", "weapon_machinegun"),
    ("weapon_supernailgun", "weapon_hyperblaster"),
    (TORCH, "misc_flame"),
];

#[derive(Default)]
pub struct RuleTable {
    rules: HashMap<String, Rule>,
}

impl RuleTable {
    pub fn new() -> RuleTable {
        RuleTable::default()
    }

    /// The Quake to Quetoo rules.
    pub fn standard(config: &ConvertConfig) -> RuleTable {
        let mut table = RuleTable::new();

        for (from, to) in RENAMES {
            table.insert(from, rename(to));
        }

        table.insert("light", Box::new(drop_entity));
        table.insert("ambient_drip", Box::new(ambient_drip));
        table.insert("item_health", Box::new(item_health));
        table.insert(
            "info_teleport_destination",
            Box::new(teleport_destination),
        );
        table.insert("worldspawn", Box::new(worldspawn));

        match config.flames {
            FlamePolicy::Convert => {
                table.insert(LARGE_FLAME, Box::new(large_flame));
            }
            FlamePolicy::Drop => {
                table.insert(TORCH, Box::new(drop_entity));
                table.insert(LARGE_FLAME, Box::new(drop_entity));
            }
        }

        table
    }

    /// Adds or replaces the rule for `classname`, returning the old one.
    pub fn insert(&mut self, classname: &str, rule: Rule) -> Option<Rule> {
        self.rules.insert(classname.to_lowercase(), rule)
    }

    pub fn remove(&mut self, classname: &str) -> Option<Rule> {
        self.rules.remove(&classname.to_lowercase())
    }

    pub fn get(&self, classname: &str) -> Option<&Rule> {
        self.rules.get(&classname.to_lowercase())
    }

    pub fn contains(&self, classname: &str) -> bool {
        self.get(classname).is_some()
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Runs the rule matching the edict's classname. Edicts without a
    /// matching rule, or without a classname, come back unchanged.
    pub fn apply(&self, edict: &Edict) -> Option<Edict> {
        match edict.get("classname").and_then(|name| self.get(name)) {
            Some(rule) => rule(edict),
            None => Some(edict.clone()),
        }
    }
}

impl fmt::Debug for RuleTable {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let mut classnames = self.rules.keys().collect::<Vec<_>>();
        classnames.sort();
        f.debug_struct("RuleTable")
            .field("classnames", &classnames)
            .finish()
    }
}

pub fn rename(classname: &'static str) -> Rule {
    Box::new(move |edict: &Edict| {
        Some(edict.clone().with("classname", classname))
    })
}

pub fn drop_entity(_: &Edict) -> Option<Edict> {
    None
}

fn large_flame(edict: &Edict) -> Option<Edict> {
    Some(
        edict
            .clone()
            .with("classname", "misc_flame")
            .with("radius", FLAME_RADIUS),
    )
}

fn ambient_drip(edict: &Edict) -> Option<Edict> {
    Some(
        edict
            .clone()
            .with("classname", "misc_sound")
            .with("sound", DRIP_SOUND),
    )
}

fn item_health(edict: &Edict) -> Option<Edict> {
    let classname = match spawnflags(edict) {
        1 => "item_health",
        2 => "item_health_mega",
        _ => return Some(edict.clone()),
    };

    Some(edict.clone().with("classname", classname))
}

fn teleport_destination(edict: &Edict) -> Option<Edict> {
    Some(
        edict
            .clone()
            .with("classname", "misc_teleporter_dest")
            .without("light"),
    )
}

fn worldspawn(edict: &Edict) -> Option<Edict> {
    let kept = edict
        .iter()
        .filter(|(key, _)| !WORLDSPAWN_DROPPED_KEYS.contains(key))
        .collect::<Edict>();

    Some(
        kept.with("ambient", WORLDSPAWN_AMBIENT)
            .with("brightness", WORLDSPAWN_BRIGHTNESS)
            .with("give", WORLDSPAWN_GIVE)
            .with("sky", WORLDSPAWN_SKY),
    )
}
