//! Sampling primitives for the two particle distributions.

use crate::config::TreeParams;
use glam::Vec3;
use rand::Rng;
use std::f32::consts::{PI, TAU};

/// Cone radius at cone-space height `y` (0 = base, `tree_height` = apex).
///
/// A degenerate cone (zero height or radius) collapses onto its axis.
#[inline]
pub fn cone_radius_at(y: f32, tree_height: f32, max_radius: f32) -> f32 {
    if tree_height <= 0.0 || max_radius <= 0.0 {
        return 0.0;
    }
    ((1.0 - y / tree_height) * max_radius).max(0.0)
}

/// Polar `(radius, angle)` to a point on the horizontal plane at height `y`.
#[inline]
fn ring_point(radius: f32, angle: f32, y: f32) -> Vec3 {
    Vec3::new(angle.cos() * radius, y, angle.sin() * radius)
}

/// Formed position inside the cone volume.
///
/// Height is uniform and the radial offset is uniform up to the
/// height-dependent radius, so points bunch toward the axis and the apex
/// relative to a volume-uniform fill.
pub fn sample_cone_volume<R: Rng + ?Sized>(rng: &mut R, params: &TreeParams) -> Vec3 {
    let y = rng.gen::<f32>() * params.tree_height.max(0.0);
    let r = cone_radius_at(y, params.tree_height, params.max_radius);
    let angle = rng.gen::<f32>() * TAU;
    let offset = rng.gen::<f32>() * r;
    ring_point(offset, angle, params.recentre(y))
}

/// Formed position on the cone surface at the given cone-space height.
pub fn sample_cone_surface<R: Rng + ?Sized>(rng: &mut R, y: f32, params: &TreeParams) -> Vec3 {
    let r = cone_radius_at(y, params.tree_height, params.max_radius);
    let angle = rng.gen::<f32>() * TAU;
    ring_point(r, angle, params.recentre(y))
}

/// Point in a spherical shell of radius `[base, base + spread)`.
///
/// `phi = acos(2v - 1)` keeps directions uniform over the sphere instead of
/// clustering at the poles like a naive latitude/longitude draw.
pub fn sample_shell<R: Rng + ?Sized>(rng: &mut R, base: f32, spread: f32) -> Vec3 {
    let u = rng.gen::<f32>();
    let v = rng.gen::<f32>();
    let theta = TAU * u;
    let phi = (2.0 * v - 1.0).clamp(-1.0, 1.0).acos();
    let radius = base + rng.gen::<f32>() * spread;
    Vec3::new(
        radius * phi.sin() * theta.cos(),
        radius * phi.sin() * theta.sin(),
        radius * phi.cos(),
    )
}

/// Point in the axis-aligned cube of edge `extent` centred on the origin.
pub fn sample_cube<R: Rng + ?Sized>(rng: &mut R, extent: f32) -> Vec3 {
    Vec3::new(
        (rng.gen::<f32>() - 0.5) * extent,
        (rng.gen::<f32>() - 0.5) * extent,
        (rng.gen::<f32>() - 0.5) * extent,
    )
}

/// Static orientation triple `[U·π, U·π, 0]`.
pub fn sample_rotation<R: Rng + ?Sized>(rng: &mut R) -> Vec3 {
    Vec3::new(rng.gen::<f32>() * PI, rng.gen::<f32>() * PI, 0.0)
}
