//! Ornaments: discrete baubles, gifts and fairy lights hung on the cone
//! surface.
//!
//! They share the foliage's chaos/target contract but move with a plain
//! linear blend of the global progress; the per-particle easing curve and the
//! wind sway are foliage-only.

use crate::config::TreeParams;
use crate::constants::*;
use crate::easing::lerp_exact;
use crate::shape;
use glam::Vec3;
use rand::Rng;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum OrnamentKind {
    Light,
    Ball,
    Gift,
}

impl OrnamentKind {
    /// Fraction of base-quota ornaments drawn as gifts.
    pub const GIFT_WEIGHT: f32 = 0.7;
    /// Of the non-gift draws, the fraction that become balls (rest are lights).
    pub const BALL_WEIGHT: f32 = 0.6;

    pub fn draw<R: Rng + ?Sized>(rng: &mut R) -> Self {
        if rng.gen::<f32>() < Self::GIFT_WEIGHT {
            OrnamentKind::Gift
        } else if rng.gen::<f32>() < Self::BALL_WEIGHT {
            OrnamentKind::Ball
        } else {
            OrnamentKind::Light
        }
    }

    pub fn scale(self) -> f32 {
        match self {
            OrnamentKind::Gift => 0.6,
            OrnamentKind::Ball => 0.4,
            OrnamentKind::Light => 0.1,
        }
    }

    /// Motion weight: heavier ornaments get smaller values. Carried for
    /// renderers; the linear blend in [`Ornament::position_at`] ignores it.
    pub fn lerp_speed(self) -> f32 {
        match self {
            OrnamentKind::Gift => 0.02,
            OrnamentKind::Ball => 0.05,
            OrnamentKind::Light => 0.1,
        }
    }

    /// Candidate sRGB colours; one is chosen with equal odds.
    pub fn palette(self) -> &'static [u32] {
        match self {
            OrnamentKind::Gift => &[DARK_RED, GOLD],
            OrnamentKind::Ball => &[SILVER, GOLD],
            OrnamentKind::Light => &[WHITE],
        }
    }

    pub fn is_emissive(self) -> bool {
        matches!(self, OrnamentKind::Light)
    }

    pub fn spins(self) -> bool {
        matches!(self, OrnamentKind::Gift)
    }

    fn pick_color<R: Rng + ?Sized>(self, rng: &mut R) -> u32 {
        let palette = self.palette();
        if palette.len() == 1 {
            return palette[0];
        }
        if rng.gen::<f32>() < 0.5 {
            palette[0]
        } else {
            palette[1]
        }
    }
}

/// Static record of one ornament, fixed at generation.
#[derive(Clone, Debug, PartialEq)]
pub struct Ornament {
    pub id: u32,
    pub kind: OrnamentKind,
    pub chaos: Vec3,
    pub target: Vec3,
    /// sRGB `0xRRGGBB`.
    pub color: u32,
    pub scale: f32,
    pub lerp_speed: f32,
    pub rotation: Vec3,
}

impl Ornament {
    fn generate<R: Rng + ?Sized>(
        rng: &mut R,
        id: u32,
        cone_y: f32,
        kind: OrnamentKind,
        params: &TreeParams,
    ) -> Self {
        let target = shape::sample_cone_surface(rng, cone_y, params);
        let chaos = shape::sample_cube(rng, ORNAMENT_CHAOS_EXTENT);
        let color = kind.pick_color(rng);
        Self {
            id,
            kind,
            chaos,
            target,
            color,
            scale: kind.scale(),
            lerp_speed: kind.lerp_speed(),
            rotation: shape::sample_rotation(rng),
        }
    }

    pub fn linear_color(&self) -> [f32; 3] {
        srgb_hex_to_linear(self.color)
    }

    /// Position for global progress `p`: linear blend plus a small hover
    /// while the tree is scattered.
    pub fn position_at(&self, progress: f32, elapsed: f32) -> Vec3 {
        let mut pos = lerp_exact(self.chaos, self.target, progress);
        if progress < ORNAMENT_HOVER_THRESHOLD {
            pos.y += (elapsed + self.id as f32).sin() * ORNAMENT_HOVER_AMPLITUDE;
        }
        pos
    }
}

/// Per-frame output for one ornament, keyed by its stable id.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OrnamentPose {
    pub id: u32,
    pub position: Vec3,
    pub rotation: Vec3,
}

/// Generate the base quota (any height, weighted category) followed by the
/// bottom quota (forced balls in the lowest band of the tree).
pub fn generate_ornaments<R: Rng + ?Sized>(params: &TreeParams, rng: &mut R) -> Vec<Ornament> {
    let mut out = Vec::with_capacity(params.ornament_count());
    let height = params.tree_height.max(0.0);
    for _ in 0..params.ornament_base_count {
        let y = rng.gen::<f32>() * height;
        let kind = OrnamentKind::draw(rng);
        let id = out.len() as u32;
        out.push(Ornament::generate(rng, id, y, kind, params));
    }
    let band = height * params.ornament_bottom_fraction;
    for _ in 0..params.ornament_bottom_count {
        let y = rng.gen::<f32>() * band;
        let id = out.len() as u32;
        out.push(Ornament::generate(rng, id, y, OrnamentKind::Ball, params));
    }
    log::debug!(
        "[ornaments] generated {} ({} base + {} bottom)",
        out.len(),
        params.ornament_base_count,
        params.ornament_bottom_count
    );
    out
}

/// Ornaments plus their live rotations.
#[derive(Clone, Debug, Default)]
pub struct OrnamentLayer {
    ornaments: Vec<Ornament>,
    poses: Vec<OrnamentPose>,
}

impl OrnamentLayer {
    pub fn new(ornaments: Vec<Ornament>) -> Self {
        let poses = ornaments
            .iter()
            .map(|o| OrnamentPose {
                id: o.id,
                position: o.target,
                rotation: o.rotation,
            })
            .collect();
        Self { ornaments, poses }
    }

    pub fn ornaments(&self) -> &[Ornament] {
        &self.ornaments
    }

    pub fn poses(&self) -> &[OrnamentPose] {
        &self.poses
    }

    pub fn get(&self, id: u32) -> Option<(&Ornament, &OrnamentPose)> {
        let i = id as usize;
        Some((self.ornaments.get(i)?, self.poses.get(i)?))
    }

    pub fn len(&self) -> usize {
        self.ornaments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ornaments.is_empty()
    }

    /// One frame: place every ornament and spin the gifts.
    pub fn update(&mut self, progress: f32, elapsed: f32) {
        for (o, pose) in self.ornaments.iter().zip(self.poses.iter_mut()) {
            debug_assert_eq!(o.id, pose.id);
            pose.position = o.position_at(progress, elapsed);
            if o.kind.spins() {
                pose.rotation.x += GIFT_SPIN_PER_TICK;
                pose.rotation.y += GIFT_SPIN_PER_TICK;
            }
        }
    }
}
