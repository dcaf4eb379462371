//! The engine instance bound to a scene scope.

use anyhow::{Context, Result};
use log::{debug, warn};

use crate::coords::{Mat4, Vec3};
use crate::dispatch::CameraState;
use crate::engine::{EngineFactory, ImagingEngine, RenderParams};
use crate::scope::{ScenePath, SceneScope};

/// One engine instance plus the scope it was constructed for.
pub struct BoundRenderer {
    engine: Box<dyn ImagingEngine>,
    scope: SceneScope,
}

impl BoundRenderer {
    #[inline]
    pub fn scope(&self) -> &SceneScope {
        &self.scope
    }

    #[inline]
    pub fn root(&self) -> &ScenePath {
        self.scope.root()
    }

    #[inline]
    pub fn has_valid_root(&self) -> bool {
        self.engine.has_valid_root()
    }

    pub fn set_camera_state(&mut self, camera: &CameraState) {
        self.engine
            .set_camera_state(&camera.view, &camera.projection, camera.viewport.to_vec4());
    }

    pub fn set_lighting_state_from_gl(&mut self) {
        self.engine.set_lighting_state_from_gl();
    }

    pub fn render(&mut self, params: &RenderParams) -> Result<()> {
        self.engine
            .render(self.scope.root(), params)
            .with_context(|| format!("imaging engine failed to render {}", self.scope.root()))
    }

    pub fn test_intersection(
        &mut self,
        view: &Mat4,
        projection: &Mat4,
        world: &Mat4,
        params: &RenderParams,
    ) -> Result<Option<Vec3>> {
        self.engine
            .test_intersection(view, projection, world, self.scope.root(), params)
            .with_context(|| format!("imaging engine failed to hit-test {}", self.scope.root()))
    }
}

/// Owns at most one [`BoundRenderer`] and rebinds it when the requested scope
/// changes.
///
/// Construction is lazy: nothing is built until the first [`ensure_bound`]
/// with a resolved scope.
///
/// [`ensure_bound`]: RendererBinding::ensure_bound
pub struct RendererBinding {
    factory: Box<dyn EngineFactory>,
    bound: Option<BoundRenderer>,
}

impl RendererBinding {
    pub fn new(factory: impl EngineFactory + 'static) -> Self {
        Self {
            factory: Box::new(factory),
            bound: None,
        }
    }

    /// Binds an engine to `scope`, replacing the current one if the scope differs.
    ///
    /// `None` means the host could not resolve a scene root; the binding is
    /// released and later draw/pick calls become no-ops.
    ///
    /// The replacement engine is fully constructed before the old one is
    /// dropped. If construction fails, the error propagates and the previous
    /// binding stays in place untouched.
    pub fn ensure_bound(&mut self, scope: Option<SceneScope>) -> Result<()> {
        let Some(scope) = scope else {
            if let Some(previous) = self.bound.take() {
                warn!("scene root unresolved; releasing renderer bound to {}", previous.root());
            }
            return Ok(());
        };

        if self.bound.as_ref().is_some_and(|b| b.scope == scope) {
            return Ok(());
        }

        let engine = self
            .factory
            .create(&scope)
            .with_context(|| format!("failed to construct imaging engine for {}", scope.root()))?;

        debug!(
            "binding renderer to {} ({} exclusion(s))",
            scope.root(),
            scope.excluded().len()
        );

        let previous = self.bound.replace(BoundRenderer { engine, scope });
        drop(previous);
        Ok(())
    }

    #[inline]
    pub fn is_bound(&self) -> bool {
        self.bound.is_some()
    }

    #[inline]
    pub fn bound(&self) -> Option<&BoundRenderer> {
        self.bound.as_ref()
    }

    /// The bound renderer, if there is one and its root still resolves.
    #[inline]
    pub fn active_mut(&mut self) -> Option<&mut BoundRenderer> {
        self.bound.as_mut().filter(|b| b.has_valid_root())
    }
}
