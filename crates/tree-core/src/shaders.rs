//! WGSL sources shared by the web and native renderers.

use crate::constants::*;

pub static SPRITE_WGSL: &str = include_str!("../shaders/sprite.wgsl");
pub static POST_WGSL: &str = include_str!("../shaders/post.wgsl");
static FOLIAGE_TEMPLATE: &str = include_str!("../shaders/foliage.wgsl");

/// Foliage shader with its `{{NAME}}` placeholders filled from the constants
/// the CPU morph uses, so both sides agree on the curve.
pub fn foliage_wgsl() -> String {
    let subs: [(&str, f32); 7] = [
        ("JITTER_BASE", JITTER_BASE),
        ("JITTER_SPAN", JITTER_SPAN),
        ("SWAY_PROGRESS_THRESHOLD", SWAY_PROGRESS_THRESHOLD),
        ("SWAY_FREQUENCY", SWAY_FREQUENCY),
        ("SWAY_AMPLITUDE", SWAY_AMPLITUDE),
        ("POINT_SIZE_SPAN", POINT_SIZE_SPAN),
        ("POINT_SIZE_BASE", POINT_SIZE_BASE),
    ];
    let mut src = FOLIAGE_TEMPLATE.to_owned();
    for (name, value) in subs {
        // Debug formatting always keeps a decimal point, which WGSL needs for f32
        src = src.replace(&format!("{{{{{name}}}}}"), &format!("{value:?}"));
    }
    src
}
