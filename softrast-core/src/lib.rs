//! softrast core - CPU triangle rasterizer
//!
//! Stateless building blocks for drawing a spinning mesh into a pixel buffer:
//! vector math, rotation transforms, orthographic projection, half-plane
//! rasterization and OBJ loading. Presentation lives in the front-end crates.

pub mod color;
pub mod error;
pub mod framebuffer;
pub mod geometry;
pub mod math;
pub mod obj;
pub mod palette;
pub mod projection;
pub mod raster;
pub mod renderer;
pub mod transform;

// Re-export commonly used types
pub use color::Color;
pub use error::{FramebufferError, MeshError};
pub use framebuffer::Framebuffer;
pub use geometry::Mesh;
pub use math::{Vec2, Vec3};
pub use palette::TriangleColors;
pub use projection::world_to_screen;
pub use renderer::Renderer;
pub use transform::{RotationTransform, Spin};
