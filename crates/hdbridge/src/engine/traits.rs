use anyhow::Result;

use crate::coords::{Mat4, Vec3};
use crate::scope::{ScenePath, SceneScope};

use super::RenderParams;

/// One imaging engine instance scoped to a [`SceneScope`].
///
/// All calls are synchronous and happen on the host's render thread.
pub trait ImagingEngine {
    /// Camera for subsequent `render` / `test_intersection` calls.
    ///
    /// `viewport` is `(x, y, width, height)` in pixels.
    fn set_camera_state(&mut self, model_view: &Mat4, projection: &Mat4, viewport: [f64; 4]);

    /// Captures the lights currently configured in the host's GL state.
    fn set_lighting_state_from_gl(&mut self);

    /// Draws the scene under `root` with `params`.
    fn render(&mut self, root: &ScenePath, params: &RenderParams) -> Result<()>;

    /// Hit-tests the scene under `root`.
    ///
    /// Returns the nearest hit point, or `None` when nothing was hit.
    fn test_intersection(
        &mut self,
        view: &Mat4,
        projection: &Mat4,
        world: &Mat4,
        root: &ScenePath,
        params: &RenderParams,
    ) -> Result<Option<Vec3>>;

    /// Whether the scope root still resolves in the loaded scene.
    ///
    /// A root can disappear after binding (e.g. the stage was unloaded).
    fn has_valid_root(&self) -> bool {
        true
    }
}

/// Constructs engine instances for a scope.
pub trait EngineFactory {
    fn create(&mut self, scope: &SceneScope) -> Result<Box<dyn ImagingEngine>>;
}

impl<F> EngineFactory for F
where
    F: FnMut(&SceneScope) -> Result<Box<dyn ImagingEngine>>,
{
    fn create(&mut self, scope: &SceneScope) -> Result<Box<dyn ImagingEngine>> {
        self(scope)
    }
}
