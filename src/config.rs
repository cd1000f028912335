/// What to do with Quake's decorative flame lights.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FlamePolicy {
    /// Turn them into `misc_flame` entities.
    #[default]
    Convert,
    /// Leave them out of the converted map.
    Drop,
}

pub const DEFAULT_ITEM_OFFSET: f64 = 16.0;

#[derive(Debug, Clone, PartialEq)]
pub struct ConvertConfig {
    pub flames: FlamePolicy,
    /// Added to the Z of every item and weapon origin. Quake places pickups
    /// by the bottom of their bounds, Quetoo by the center.
    pub item_offset: f64,
}

impl Default for ConvertConfig {
    fn default() -> Self {
        ConvertConfig {
            flames: FlamePolicy::default(),
            item_offset: DEFAULT_ITEM_OFFSET,
        }
    }
}
