// Page elements the front-end binds to.
pub const CANVAS_ID: &str = "app-canvas";
pub const TOGGLE_BUTTON_ID: &str = "toggle-button";
pub const TOGGLE_LABEL_ID: &str = "toggle-label";
pub const STATUS_LABEL_ID: &str = "status-label";
pub const TITLE_OVERLAY_ID: &str = "title-overlay";

// Longest frame step fed to the simulation (seconds)
pub const MAX_FRAME_DT: f32 = 0.1;
