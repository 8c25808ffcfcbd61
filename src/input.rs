use glam::Vec2;
use tree_core::pixel_to_ndc;

/// Latest pointer sample, shared between the DOM handlers and the frame loop.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PointerState {
    /// Canvas backing-store pixels.
    pub x: f32,
    pub y: f32,
    pub down: bool,
    /// CSS pixels; drag rotation is tuned against these, not the backing store.
    pub drag_x: f32,
    /// Stays at the centre until the pointer first moves.
    pub ndc: Vec2,
}

impl PointerState {
    pub fn update(&mut self, client: Vec2, px: Vec2, canvas_size: Vec2) {
        self.x = px.x;
        self.y = px.y;
        self.drag_x = client.x;
        self.ndc = pixel_to_ndc(px.x, px.y, canvas_size.x, canvas_size.y);
    }
}

/// CSS client coordinates to canvas backing-store pixels.
#[inline]
pub fn client_to_canvas_px(client: Vec2, rect_origin: Vec2, rect_size: Vec2, backing: Vec2) -> Vec2 {
    if rect_size.x <= 0.0 || rect_size.y <= 0.0 {
        return Vec2::ZERO;
    }
    (client - rect_origin) / rect_size * backing
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyAction {
    ToggleTree,
    ToggleOverlay,
    ToggleFullscreen,
}

#[inline]
pub fn action_for_key(key: &str) -> Option<KeyAction> {
    match key {
        " " => Some(KeyAction::ToggleTree),
        "h" | "H" => Some(KeyAction::ToggleOverlay),
        "Enter" => Some(KeyAction::ToggleFullscreen),
        _ => None,
    }
}

/// Frame delta in seconds, capped so a backgrounded tab resumes smoothly.
#[inline]
pub fn frame_dt(elapsed_sec: f32, max_dt: f32) -> f32 {
    if elapsed_sec.is_finite() {
        elapsed_sec.clamp(0.0, max_dt)
    } else {
        0.0
    }
}
