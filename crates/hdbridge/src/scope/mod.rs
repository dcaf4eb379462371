//! Scene scope: which part of the scene a bound engine instance displays.

mod path;
mod scene_scope;

pub use path::{ScenePath, ScopeError};
pub use scene_scope::SceneScope;
