//! Simulation core for the particle Christmas tree: particle generation,
//! the chaos/formed morph, ornaments, gold dust and drag rotation.
//!
//! Nothing here touches a GPU or a window; `tree-render` and the front-ends
//! read state out of a [`TreeScene`] once per frame.

pub mod camera;
pub mod config;
pub mod constants;
pub mod dust;
pub mod easing;
pub mod error;
pub mod foliage;
pub mod morph;
pub mod ornament;
pub mod rotation;
pub mod scene;
pub mod shaders;
pub mod shape;

pub use camera::{pixel_to_ndc, Camera};
pub use config::TreeParams;
pub use constants::*;
pub use dust::DustField;
pub use error::ConfigError;
pub use foliage::{FoliageField, FoliageInstance};
pub use morph::{Morph, TreeState};
pub use ornament::{generate_ornaments, Ornament, OrnamentKind, OrnamentLayer, OrnamentPose};
pub use rotation::DragRotation;
pub use scene::{StarState, TreeScene};
pub use shaders::{foliage_wgsl, POST_WGSL, SPRITE_WGSL};
