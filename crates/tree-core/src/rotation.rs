use crate::constants::{
    DRAG_SENSITIVITY, IDLE_SPIN_PER_TICK, IDLE_SPIN_THRESHOLD, ROTATION_FRICTION,
};

/// Horizontal drag spins the tree; the spin coasts down under friction and
/// a slow idle rotation takes over once it has nearly stopped.
///
/// Stepped once per rendered frame.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct DragRotation {
    angle: f32,
    angular_velocity: f32,
    last_x: f32,
    dragging: bool,
}

impl DragRotation {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn angle(&self) -> f32 {
        self.angle
    }

    pub fn angular_velocity(&self) -> f32 {
        self.angular_velocity
    }

    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    pub fn drag_start(&mut self, x: f32) {
        self.dragging = true;
        self.last_x = x;
    }

    pub fn drag_move(&mut self, x: f32) {
        if !self.dragging {
            return;
        }
        let dx = x - self.last_x;
        self.last_x = x;
        self.angular_velocity += dx * DRAG_SENSITIVITY;
    }

    /// Pointer released or left the interaction area. Momentum is kept.
    pub fn drag_end(&mut self) {
        self.dragging = false;
    }

    pub fn tick(&mut self) -> f32 {
        self.angle += self.angular_velocity;
        self.angular_velocity *= ROTATION_FRICTION;
        if !self.dragging && self.angular_velocity.abs() < IDLE_SPIN_THRESHOLD {
            self.angle += IDLE_SPIN_PER_TICK;
        }
        self.angle
    }
}
