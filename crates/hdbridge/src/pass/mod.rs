//! Draw passes: what to draw for one object in one frame.
//!
//! - `descriptor`: the pass value type
//! - `policy`: which passes to emit for a display style / selection state
//! - `mapping`: pass kind -> engine render parameters, shared by both dispatchers

mod descriptor;
mod mapping;
mod policy;

pub use descriptor::{DrawPass, PassKind};
pub use mapping::pass_render_params;
pub use policy::build_passes;
