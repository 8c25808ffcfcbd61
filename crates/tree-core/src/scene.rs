//! The whole simulation behind one explicit object.
//!
//! Frontends own a [`TreeScene`], feed it input events and call
//! [`TreeScene::tick`] once per rendered frame, then read back whatever the
//! renderer needs.

use crate::config::TreeParams;
use crate::constants::*;
use crate::dust::DustField;
use crate::error::ConfigError;
use crate::foliage::FoliageField;
use crate::morph::{Morph, TreeState};
use crate::ornament::{generate_ornaments, OrnamentLayer, OrnamentPose};
use crate::rotation::DragRotation;
use glam::{Mat4, Quat, Vec3};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Star topper state for the current frame (tree space).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StarState {
    pub position: Vec3,
    pub scale: f32,
}

impl StarState {
    pub fn visible(&self) -> bool {
        self.scale > 0.0
    }
}

pub struct TreeScene {
    params: TreeParams,
    foliage: FoliageField,
    ornaments: OrnamentLayer,
    dust: DustField,
    morph: Morph,
    rotation: DragRotation,
    state: TreeState,
    pointer_target: Option<Vec3>,
    elapsed: f32,
}

impl TreeScene {
    /// Validate `params` and generate every particle set. Starts formed.
    pub fn new<R: Rng + ?Sized>(params: TreeParams, rng: &mut R) -> Result<Self, ConfigError> {
        params.validate()?;
        let foliage = FoliageField::generate(params.foliage_count, &params, rng);
        let ornaments = OrnamentLayer::new(generate_ornaments(&params, rng));
        let dust = DustField::generate(params.dust_count, rng);
        log::debug!(
            "[scene] foliage={} ornaments={} dust={}",
            foliage.len(),
            ornaments.len(),
            dust.len()
        );
        Ok(Self {
            params,
            foliage,
            ornaments,
            dust,
            morph: Morph::new(),
            rotation: DragRotation::new(),
            state: TreeState::Formed,
            pointer_target: None,
            elapsed: 0.0,
        })
    }

    /// Deterministic scene for a fixed seed.
    pub fn seeded(params: TreeParams, seed: u64) -> Result<Self, ConfigError> {
        let mut rng = StdRng::seed_from_u64(seed);
        Self::new(params, &mut rng)
    }

    pub fn params(&self) -> &TreeParams {
        &self.params
    }

    pub fn state(&self) -> TreeState {
        self.state
    }

    pub fn set_state(&mut self, state: TreeState) {
        if self.state != state {
            log::debug!("[scene] state {:?} -> {:?}", self.state, state);
        }
        self.state = state;
    }

    /// Flip the desired state. Always valid, even mid-transition.
    pub fn toggle(&mut self) -> TreeState {
        self.set_state(self.state.toggled());
        self.state
    }

    pub fn progress(&self) -> f32 {
        self.morph.progress()
    }

    pub fn elapsed(&self) -> f32 {
        self.elapsed
    }

    pub fn drag_start(&mut self, x: f32) {
        self.rotation.drag_start(x);
    }

    pub fn drag_move(&mut self, x: f32) {
        self.rotation.drag_move(x);
    }

    pub fn drag_end(&mut self) {
        self.rotation.drag_end();
    }

    pub fn rotation(&self) -> &DragRotation {
        &self.rotation
    }

    /// Scene point the dust is attracted to, `None` disables attraction.
    pub fn set_pointer_target(&mut self, target: Option<Vec3>) {
        self.pointer_target = target;
    }

    /// Advance one frame. Progress is settled before any particle reads it.
    pub fn tick(&mut self, dt_sec: f32) {
        if dt_sec.is_finite() && dt_sec > 0.0 {
            self.elapsed += dt_sec;
        }
        let progress = self.morph.tick(self.state, dt_sec);
        self.ornaments.update(progress, self.elapsed);
        self.dust.tick(self.elapsed, self.pointer_target);
        self.rotation.tick();
    }

    pub fn foliage(&self) -> &FoliageField {
        &self.foliage
    }

    pub fn ornaments(&self) -> &OrnamentLayer {
        &self.ornaments
    }

    pub fn ornament_poses(&self) -> &[OrnamentPose] {
        self.ornaments.poses()
    }

    pub fn dust_positions(&self) -> &[Vec3] {
        self.dust.positions()
    }

    /// Model matrix of the tree group: offset, spun about y, scaled down.
    pub fn tree_transform(&self) -> Mat4 {
        Mat4::from_scale_rotation_translation(
            Vec3::splat(TREE_GROUP_SCALE),
            Quat::from_rotation_y(self.rotation.angle()),
            tree_group_offset_vec3(),
        )
    }

    pub fn star(&self) -> StarState {
        let scale = if self.progress() > STAR_VISIBLE_ABOVE {
            STAR_SCALE
        } else {
            0.0
        };
        StarState {
            position: star_position_vec3(),
            scale,
        }
    }
}
