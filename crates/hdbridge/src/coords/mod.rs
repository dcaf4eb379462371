//! Coordinate and geometry types shared by the dispatchers and the engine seam.
//!
//! Conventions:
//! - Matrices are 4x4 doubles in the host's GL memory order (16 contiguous values)
//! - World-space vectors are `f64`; colors are `f32`
//! - Viewports are integer pixel rectangles (x, y, width, height)

mod bbox;
mod color;
mod mat4;
mod vec3;
mod viewport;

pub use bbox::BoundingBox;
pub use color::ColorRgba;
pub use mat4::Mat4;
pub use vec3::Vec3;
pub use viewport::Viewport;
