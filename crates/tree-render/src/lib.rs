//! GPU side of the tree: the foliage point cloud, camera-facing sprites for
//! ornaments, dust and the star, and an HDR bloom/vignette chain.
//!
//! The crate is windowing-agnostic. Front-ends create a `wgpu::Surface`
//! from a canvas or a winit window and hand it to [`Renderer::new`].

mod foliage;
mod helpers;
mod post;
pub mod renderer;
pub mod sprites;
mod targets;

pub use renderer::Renderer;
pub use sprites::{collect_sprites, SpriteInstance, SpriteShape};
