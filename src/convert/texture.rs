use crate::qmap::{Brush, Side, TextureTransform};

const TEXTURE_SCALE: f64 = 16.0;

const COMMON_SCALE: f64 = 0.5;

const SKY_TEXTURES: [&str; 5] = ["sky", "sky1", "sky2", "sky3", "sky4"];

pub fn convert_brush(brush: &Brush) -> Brush {
    brush.iter().map(convert_side).collect()
}

pub fn convert_side(side: &Side) -> Side {
    Side {
        half_space: side.half_space,
        transform: convert_transform(&side.transform),
    }
}

/// Maps a Quake texture onto the Quetoo texture set.
///
/// Tool textures land in `common/` with a fixed alignment, everything else in
/// `rygel/` with translate and scale brought down to the smaller texel size.
pub fn convert_transform(transform: &TextureTransform) -> TextureTransform {
    let name = transform.texture.to_lowercase();

    match name.as_str() {
        "clip" | "trigger" => common_transform(&name),
        sky if SKY_TEXTURES.contains(&sky) => common_transform("sky"),
        _ => TextureTransform {
            texture: texture_path("rygel", &name),
            rotation: transform.rotation,
            translate: transform.translate.map(|t| t / TEXTURE_SCALE),
            scale: transform.scale.map(|s| s / TEXTURE_SCALE),
        },
    }
}

fn common_transform(name: &str) -> TextureTransform {
    TextureTransform {
        texture: texture_path("common", name),
        rotation: 0.0,
        translate: [0.0, 0.0],
        scale: [COMMON_SCALE, COMMON_SCALE],
    }
}

// Quetoo reserves `*` in texture paths; liquids use `#` instead.
fn texture_path(set: &str, name: &str) -> String {
    format!("{}/{}", set, name).replace('*', "#")
}
