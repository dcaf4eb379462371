//! Seam to the external scene imaging engine.
//!
//! The engine owns scene traversal and GPU submission. This crate only hands it
//! camera state, lighting state and per-pass render parameters.

mod params;
mod traits;

pub use params::{complexity_from_subdivision_level, CullStyle, DrawMode, RenderParams};
pub use traits::{EngineFactory, ImagingEngine};
