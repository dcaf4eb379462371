//! Seam to the host application's viewport.
//!
//! Two host pipelines are modeled:
//! - the legacy immediate-mode view ([`LegacyView`]), drawn one request at a time
//! - the modern command-buffer viewport ([`DrawContext`]), drawn in batches
//!
//! Both expose the same low-level graphics state ([`GlState`]). Issuing the
//! individual state commands is the host's job; this crate decides which ones
//! to issue and keeps them balanced.

mod context;
mod gl;
mod style;
mod view;

pub use context::{CullMode, DrawApi, DrawContext};
pub use gl::{AttribMask, Capability, GlState, MatrixMode};
pub use style::{DisplayStatus, DisplayStyle, ViewDisplayStyle};
pub use view::{LegacyView, ShapeGeometry};
