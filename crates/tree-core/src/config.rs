//! Runtime scene configuration.
//!
//! [`TreeParams::default`] is the stock tree; the
//! front-ends construct scenes from it and tests shrink the counts.

use crate::constants::*;
use crate::error::ConfigError;

#[derive(Clone, Debug, PartialEq)]
pub struct TreeParams {
    pub tree_height: f32,
    pub max_radius: f32,
    pub vertical_offset: f32,
    pub chaos_base_radius: f32,
    pub chaos_spread: f32,
    pub foliage_count: usize,
    pub ornament_base_count: usize,
    pub ornament_bottom_count: usize,
    pub ornament_bottom_fraction: f32,
    pub dust_count: usize,
}

impl Default for TreeParams {
    fn default() -> Self {
        Self {
            tree_height: TREE_HEIGHT,
            max_radius: TREE_MAX_RADIUS,
            vertical_offset: TREE_VERTICAL_OFFSET,
            chaos_base_radius: CHAOS_BASE_RADIUS,
            chaos_spread: CHAOS_SPREAD,
            foliage_count: FOLIAGE_COUNT,
            ornament_base_count: ORNAMENT_BASE_COUNT,
            ornament_bottom_count: ORNAMENT_BOTTOM_COUNT,
            ornament_bottom_fraction: ORNAMENT_BOTTOM_FRACTION,
            dust_count: DUST_COUNT,
        }
    }
}

impl TreeParams {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.tree_height.is_finite() && self.tree_height > 0.0) {
            return Err(ConfigError::TreeHeight(self.tree_height));
        }
        if !(self.max_radius.is_finite() && self.max_radius > 0.0) {
            return Err(ConfigError::MaxRadius(self.max_radius));
        }
        let shell_ok = self.chaos_base_radius.is_finite()
            && self.chaos_spread.is_finite()
            && self.chaos_base_radius >= 0.0
            && self.chaos_spread >= 0.0;
        if !shell_ok {
            return Err(ConfigError::ChaosShell {
                base: self.chaos_base_radius,
                spread: self.chaos_spread,
            });
        }
        let f = self.ornament_bottom_fraction;
        if !(f.is_finite() && f > 0.0 && f <= 1.0) {
            return Err(ConfigError::BottomFraction(f));
        }
        Ok(())
    }

    /// Total ornaments produced by the base and bottom quotas.
    pub fn ornament_count(&self) -> usize {
        self.ornament_base_count + self.ornament_bottom_count
    }

    /// Map a cone-space height in `[0, tree_height]` to scene space.
    #[inline]
    pub fn recentre(&self, y: f32) -> f32 {
        y - self.tree_height / 2.0 + self.vertical_offset
    }
}
