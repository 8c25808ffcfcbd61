// Host-side tests for constants and their mathematical relationships.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}

use constants::*;
use tree_core::constants as tuning;

#[test]
fn element_ids_are_distinct() {
    let ids = [
        CANVAS_ID,
        TOGGLE_BUTTON_ID,
        TOGGLE_LABEL_ID,
        STATUS_LABEL_ID,
        TITLE_OVERLAY_ID,
    ];
    for (i, a) in ids.iter().enumerate() {
        assert!(!a.is_empty());
        assert!(!a.starts_with('#'), "ids are bare, got {a}");
        for b in &ids[i + 1..] {
            assert_ne!(a, b);
        }
    }
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn frame_cap_lets_the_morph_settle() {
    assert!(MAX_FRAME_DT > 0.0);
    // one capped frame never moves progress by more than a fifth
    let rate = tuning::MORPH_STEP_SCALE * tuning::MORPH_SPEED;
    assert!(MAX_FRAME_DT * rate <= 0.2);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn star_sits_above_the_tree_top() {
    let top = tuning::TREE_HEIGHT / 2.0 + tuning::TREE_VERTICAL_OFFSET;
    assert!(tuning::STAR_POSITION[1] > top);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn dust_respawns_inside_its_volume() {
    let half = tuning::DUST_EXTENT / 2.0;
    assert!(tuning::DUST_RESPAWN_HEIGHT <= half);
    assert!(tuning::DUST_RESPAWN_BELOW >= -half);
    assert!(tuning::DUST_ATTRACT_RADIUS < tuning::DUST_FORCE_FALLOFF);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn emissive_sprites_clear_the_bloom_threshold() {
    assert!(tuning::LIGHT_EMISSIVE > tuning::BLOOM_THRESHOLD);
    assert!(tuning::STAR_EMISSIVE > tuning::BLOOM_THRESHOLD);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn rotation_friction_decays() {
    assert!(tuning::ROTATION_FRICTION > 0.0 && tuning::ROTATION_FRICTION < 1.0);
    assert!(tuning::IDLE_SPIN_PER_TICK < tuning::IDLE_SPIN_THRESHOLD);
}
