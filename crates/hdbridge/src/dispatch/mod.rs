//! Pass execution against the host viewport.
//!
//! - [`LegacyDispatcher`]: one pass per call on the immediate-mode view
//! - [`ModernDispatcher`]: one batch per call on the command-buffer viewport
//!
//! Every piece of host graphics state touched here is acquired through a
//! guard from `guard`, so it is released on all exit paths, including `?`.

mod camera;
mod guard;
mod legacy;
mod modern;

pub use camera::CameraState;
pub use guard::{AttribScope, EnableScope, GlScope, LightingScope, MatrixScope, SelectScope};
pub use legacy::LegacyDispatcher;
pub use modern::ModernDispatcher;

use crate::coords::BoundingBox;
use crate::host::GlState;

/// Unit wire cube moved onto `bounds` in the current model-view space.
fn draw_box<G: GlState + ?Sized>(gl: &mut G, bounds: &BoundingBox) {
    gl.translate(bounds.center());
    gl.scale(bounds.size());
    gl.wire_cube(1.0);
}
