//! Morph curves shared by the CPU simulation and the foliage shader.
//!
//! Everything here is a pure function of its arguments. The WGSL emitted by
//! [`crate::shaders::foliage_wgsl`] spells out the same expressions with the
//! same constants, so GPU-drawn particles follow [`foliage_position`].

use crate::constants::{
    JITTER_BASE, JITTER_SPAN, SWAY_AMPLITUDE, SWAY_FREQUENCY, SWAY_PROGRESS_THRESHOLD,
};
use glam::Vec3;

/// Clamped cubic Hermite blend `3t² - 2t³` of `x` between the two edges.
#[inline]
pub fn smoothstep(edge0: f32, edge1: f32, x: f32) -> f32 {
    let t = ((x - edge0) / (edge1 - edge0)).clamp(0.0, 1.0);
    t * t * (3.0 - 2.0 * t)
}

/// Decelerating curve `1 - (1 - x)³`.
#[inline]
pub fn ease_out_cubic(x: f32) -> f32 {
    let inv = 1.0 - x;
    1.0 - inv * inv * inv
}

/// Endpoint-exact linear interpolation: `t = 0` yields `a`, `t = 1` yields `b`.
///
/// `glam`'s `Vec3::lerp` computes `a + (b - a) * t`, which can miss `b` by an
/// ulp; the boundary states must land on their stored positions exactly.
#[inline]
pub fn lerp_exact(a: Vec3, b: Vec3, t: f32) -> Vec3 {
    a * (1.0 - t) + b * t
}

/// Per-particle progress: global progress scaled by the particle's jitter and
/// smoothed. Particles with a larger random factor arrive sooner.
#[inline]
pub fn effective_progress(progress: f32, random_factor: f32) -> f32 {
    smoothstep(0.0, 1.0, progress * (JITTER_BASE + random_factor * JITTER_SPAN))
}

/// Horizontal wind sway for a particle at height `y`. Fades to zero as the
/// particle's effective progress reaches 1.
#[inline]
pub fn sway_offset(elapsed: f32, y: f32, effective: f32) -> f32 {
    (elapsed * SWAY_FREQUENCY + y).sin() * SWAY_AMPLITUDE * (1.0 - effective)
}

/// Where a foliage particle is drawn this frame.
pub fn foliage_position(
    chaos: Vec3,
    target: Vec3,
    random_factor: f32,
    progress: f32,
    elapsed: f32,
) -> Vec3 {
    let effective = effective_progress(progress, random_factor);
    let mut pos = lerp_exact(chaos, target, ease_out_cubic(effective));
    if progress > SWAY_PROGRESS_THRESHOLD {
        pos.x += sway_offset(elapsed, pos.y, effective);
    }
    pos
}
