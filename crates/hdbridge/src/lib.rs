//! hdbridge crate.
//!
//! Translates viewport draw requests from a 3D content-creation host into
//! calls against an external scene imaging engine, and restores host graphics
//! state afterwards.
//!
//! Layout:
//! - `pass`: which draw passes to emit for a display style / selection state
//! - `dispatch`: executes passes on the legacy (immediate) or modern (batched) viewport
//! - `binding`: the single engine instance bound to a scene scope
//! - `pick`: hit-testing through the bound engine
//! - `renderer`: the host-facing facade tying the above together

pub mod binding;
pub mod config;
pub mod coords;
pub mod dispatch;
pub mod engine;
pub mod host;
pub mod logging;
pub mod pass;
pub mod pick;
pub mod renderer;
pub mod scope;

#[cfg(test)]
mod testing;

pub use binding::{BoundRenderer, RendererBinding};
pub use config::BridgeConfig;
pub use engine::{complexity_from_subdivision_level, EngineFactory, ImagingEngine, RenderParams};
pub use pass::{build_passes, DrawPass, PassKind};
pub use renderer::HdRenderer;
pub use scope::{ScenePath, SceneScope};
