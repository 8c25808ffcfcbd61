use crate::constants::*;
use glam::Vec3;
use rand::Rng;

/// Gold dust drifting around the scene, independent of the tree state.
///
/// Unlike foliage, each mote keeps a live position that is nudged every
/// tick. Motes falling through the floor reappear at the top; the count
/// never changes.
#[derive(Clone, Debug, Default)]
pub struct DustField {
    positions: Vec<Vec3>,
}

impl DustField {
    pub fn generate<R: Rng + ?Sized>(count: usize, rng: &mut R) -> Self {
        let positions = (0..count)
            .map(|_| crate::shape::sample_cube(rng, DUST_EXTENT))
            .collect();
        Self { positions }
    }

    pub fn from_positions(positions: Vec<Vec3>) -> Self {
        Self { positions }
    }

    pub fn positions(&self) -> &[Vec3] {
        &self.positions
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// One frame of drift, pointer attraction and recycling.
    pub fn tick(&mut self, elapsed: f32, attractor: Option<Vec3>) {
        for (i, pos) in self.positions.iter_mut().enumerate() {
            let fi = i as f32;
            let mut step = drift(elapsed, fi);
            if let Some(target) = attractor {
                step += attraction(*pos, target);
            }
            *pos += step;
            if pos.y < DUST_RESPAWN_BELOW {
                pos.y = DUST_RESPAWN_HEIGHT;
            }
        }
    }
}

/// Sinusoidal wander plus a constant downward bias. No z component.
#[inline]
pub fn drift(elapsed: f32, index: f32) -> Vec3 {
    Vec3::new(
        (elapsed * 0.5 + index).sin() * DUST_DRIFT_AMPLITUDE,
        (elapsed * 0.3 + index * 2.0).cos() * DUST_DRIFT_AMPLITUDE - DUST_GRAVITY,
        0.0,
    )
}

/// Pull toward `target`, zero outside [`DUST_ATTRACT_RADIUS`].
#[inline]
pub fn attraction(pos: Vec3, target: Vec3) -> Vec3 {
    let to_target = target - pos;
    let distance = to_target.length();
    if distance >= DUST_ATTRACT_RADIUS {
        return Vec3::ZERO;
    }
    let force = ((DUST_FORCE_FALLOFF - distance) / DUST_FORCE_FALLOFF).max(0.0);
    to_target.normalize_or_zero() * DUST_ATTRACT_STRENGTH * force
}
