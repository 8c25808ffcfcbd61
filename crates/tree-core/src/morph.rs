use crate::constants::{MORPH_SNAP_EPSILON, MORPH_SPEED, MORPH_STEP_SCALE};

/// Desired configuration of the tree, driven by the UI toggle.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum TreeState {
    Chaos,
    #[default]
    Formed,
}

impl TreeState {
    pub fn toggled(self) -> Self {
        match self {
            TreeState::Chaos => TreeState::Formed,
            TreeState::Formed => TreeState::Chaos,
        }
    }

    /// Progress value this state converges to.
    #[inline]
    pub fn target_progress(self) -> f32 {
        match self {
            TreeState::Chaos => 0.0,
            TreeState::Formed => 1.0,
        }
    }

    /// Caption for the toggle button: the action it performs.
    pub fn button_label(self) -> &'static str {
        match self {
            TreeState::Chaos => "ASSEMBLE",
            TreeState::Formed => "SHATTER",
        }
    }

    pub fn status_label(self) -> &'static str {
        match self {
            TreeState::Chaos => "Chaos Mode Active",
            TreeState::Formed => "Formed Mode Active",
        }
    }
}

/// Global chaos/formed blend, 0 = chaos, 1 = formed.
///
/// Approaches its target exponentially and snaps once within
/// [`MORPH_SNAP_EPSILON`], so it reaches 0 or 1 exactly after finitely many
/// ticks instead of decaying forever.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Morph {
    progress: f32,
    rate: f32,
}

impl Default for Morph {
    fn default() -> Self {
        Self::new()
    }
}

impl Morph {
    /// Starts fully formed.
    pub fn new() -> Self {
        Self::with_progress(1.0)
    }

    pub fn with_progress(progress: f32) -> Self {
        Self {
            progress: progress.clamp(0.0, 1.0),
            rate: MORPH_STEP_SCALE * MORPH_SPEED,
        }
    }

    #[inline]
    pub fn progress(&self) -> f32 {
        self.progress
    }

    /// Per-second approach rate.
    #[inline]
    pub fn rate(&self) -> f32 {
        self.rate
    }

    pub fn is_settled(&self, state: TreeState) -> bool {
        self.progress == state.target_progress()
    }

    /// Advance one frame toward `state`. Returns the new progress.
    pub fn tick(&mut self, state: TreeState, dt_sec: f32) -> f32 {
        let dt = if dt_sec.is_finite() { dt_sec.max(0.0) } else { 0.0 };
        let target = state.target_progress();
        let diff = target - self.progress;
        if diff.abs() > MORPH_SNAP_EPSILON {
            self.progress += diff * dt * self.rate;
            // targets are the bounds; this stops a long frame from overshooting
            self.progress = self.progress.clamp(0.0, 1.0);
        } else {
            self.progress = target;
        }
        self.progress
    }
}
