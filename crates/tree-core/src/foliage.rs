use crate::config::TreeParams;
use crate::easing;
use crate::shape;
use glam::Vec3;
use rand::Rng;

/// Per-instance vertex data uploaded once to the GPU.
#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct FoliageInstance {
    pub chaos: [f32; 3],
    pub random: f32,
    pub target: [f32; 3],
    pub _pad: f32,
}

/// The needle cloud: immutable chaos/target pairs plus a jitter seed each.
///
/// Positions are never written after [`FoliageField::generate`]; the drawn
/// position is recomputed every frame from global progress.
#[derive(Clone, Debug, Default)]
pub struct FoliageField {
    chaos: Vec<Vec3>,
    target: Vec<Vec3>,
    random: Vec<f32>,
}

impl FoliageField {
    pub fn generate<R: Rng + ?Sized>(count: usize, params: &TreeParams, rng: &mut R) -> Self {
        let mut chaos = Vec::with_capacity(count);
        let mut target = Vec::with_capacity(count);
        let mut random = Vec::with_capacity(count);
        for _ in 0..count {
            target.push(shape::sample_cone_volume(rng, params));
            chaos.push(shape::sample_shell(
                rng,
                params.chaos_base_radius,
                params.chaos_spread,
            ));
            random.push(rng.gen::<f32>());
        }
        log::debug!("[foliage] generated {} particles", count);
        Self {
            chaos,
            target,
            random,
        }
    }

    pub fn len(&self) -> usize {
        self.random.len()
    }

    pub fn is_empty(&self) -> bool {
        self.random.is_empty()
    }

    pub fn chaos_positions(&self) -> &[Vec3] {
        &self.chaos
    }

    pub fn target_positions(&self) -> &[Vec3] {
        &self.target
    }

    pub fn random_factors(&self) -> &[f32] {
        &self.random
    }

    /// Drawn position of particle `index`, or `None` past the end.
    pub fn position_at(&self, index: usize, progress: f32, elapsed: f32) -> Option<Vec3> {
        Some(easing::foliage_position(
            *self.chaos.get(index)?,
            self.target[index],
            self.random[index],
            progress,
            elapsed,
        ))
    }

    /// CPU evaluation of every particle, written into `out`.
    pub fn positions_into(&self, progress: f32, elapsed: f32, out: &mut Vec<Vec3>) {
        out.clear();
        out.extend(
            self.chaos
                .iter()
                .zip(&self.target)
                .zip(&self.random)
                .map(|((c, t), r)| easing::foliage_position(*c, *t, *r, progress, elapsed)),
        );
    }

    /// GPU layout of the static attributes.
    pub fn instances(&self) -> Vec<FoliageInstance> {
        self.chaos
            .iter()
            .zip(&self.target)
            .zip(&self.random)
            .map(|((c, t), r)| FoliageInstance {
                chaos: c.to_array(),
                random: *r,
                target: t.to_array(),
                _pad: 0.0,
            })
            .collect()
    }
}
