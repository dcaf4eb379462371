//! Recording mocks for the host and engine seams.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use anyhow::{bail, Result};

use crate::binding::RendererBinding;
use crate::coords::{BoundingBox, ColorRgba, Mat4, Vec3, Viewport};
use crate::engine::{EngineFactory, ImagingEngine, RenderParams};
use crate::host::{
    AttribMask, Capability, CullMode, DisplayStyle, DrawApi, DrawContext, GlState, LegacyView,
    MatrixMode, ShapeGeometry,
};
use crate::scope::{ScenePath, SceneScope};

pub fn path(s: &str) -> ScenePath {
    ScenePath::parse(s).unwrap()
}

/// A binding already bound to `root`, plus the log of its engine.
pub fn bound_binding(root: &str) -> (RendererBinding, EngineLog) {
    let (binding, log, _) = bound_binding_with_root_flag(root);
    (binding, log)
}

/// Like [`bound_binding`], also returning the switch behind the engine's
/// `has_valid_root`.
pub fn bound_binding_with_root_flag(root: &str) -> (RendererBinding, EngineLog, Rc<Cell<bool>>) {
    let factory = MockFactory::default();
    let log = factory.log.clone();
    let root_valid = factory.root_valid.clone();
    let mut binding = RendererBinding::new(factory);
    binding
        .ensure_bound(Some(SceneScope::new(path(root), [])))
        .unwrap();
    (binding, log, root_valid)
}

// ── host ──────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    PushAttrib(AttribMask),
    PopAttrib,
    Enable(Capability),
    Disable(Capability),
    SetColor(ColorRgba),
    MatrixMode(MatrixMode),
    PushMatrix,
    PopMatrix,
    LoadMatrix(Mat4),
    Translate(Vec3),
    Scale(Vec3),
    WireCube(f64),
    BeginGl,
    EndGl,
    BeginSelect,
    EndSelect,
    SetupLighting,
    UnsetLighting,
}

/// Host that is both a legacy view and a modern draw context, recording every
/// state call it receives.
pub struct MockHost {
    pub calls: Vec<Call>,

    pub color: ColorRgba,
    pub gl_model_view: Mat4,
    pub gl_projection: Mat4,
    pub matrix_mode: MatrixMode,

    pub model_view: Mat4,
    pub projection: Mat4,
    pub viewport: Viewport,
    pub pick_view: Mat4,
    pub pick_projection: Mat4,

    pub session: Option<DrawApi>,
    pub state_manager: bool,
    pub cull: Option<CullMode>,
    pub style: DisplayStyle,
    pub world_view: Mat4,
    pub world: Mat4,
    pub bounds: Option<BoundingBox>,
    pub wireframe_color: ColorRgba,
}

impl Default for MockHost {
    fn default() -> Self {
        Self {
            calls: Vec::new(),
            color: ColorRgba::white(),
            gl_model_view: Mat4::IDENTITY,
            gl_projection: Mat4::IDENTITY,
            matrix_mode: MatrixMode::ModelView,
            model_view: Mat4::IDENTITY,
            projection: Mat4::IDENTITY,
            viewport: Viewport::new(0, 0, 1920, 1080),
            pick_view: Mat4::IDENTITY,
            pick_projection: Mat4::IDENTITY,
            session: Some(DrawApi::OpenGl),
            state_manager: true,
            cull: Some(CullMode::Back),
            style: DisplayStyle::GOURAUD_SHADED,
            world_view: Mat4::IDENTITY,
            world: Mat4::IDENTITY,
            bounds: None,
            wireframe_color: ColorRgba::black(),
        }
    }
}

impl MockHost {
    /// Attribute pushes minus pops.
    pub fn attrib_balance(&self) -> i32 {
        self.balance(|c| matches!(c, Call::PushAttrib(_)), |c| *c == Call::PopAttrib)
    }

    /// Matrix pushes minus pops.
    pub fn matrix_balance(&self) -> i32 {
        self.balance(|c| *c == Call::PushMatrix, |c| *c == Call::PopMatrix)
    }

    fn balance(&self, open: impl Fn(&Call) -> bool, close: impl Fn(&Call) -> bool) -> i32 {
        self.calls.iter().fold(0, |n, c| {
            if open(c) {
                n + 1
            } else if close(c) {
                n - 1
            } else {
                n
            }
        })
    }
}

impl GlState for MockHost {
    fn push_attrib(&mut self, mask: AttribMask) {
        self.calls.push(Call::PushAttrib(mask));
    }

    fn pop_attrib(&mut self) {
        self.calls.push(Call::PopAttrib);
    }

    fn enable(&mut self, cap: Capability) {
        self.calls.push(Call::Enable(cap));
    }

    fn disable(&mut self, cap: Capability) {
        self.calls.push(Call::Disable(cap));
    }

    fn current_color(&self) -> [f32; 4] {
        *self.color.as_array()
    }

    fn set_color(&mut self, rgba: &[f32; 4]) {
        self.color = ColorRgba::from_array(*rgba);
        self.calls.push(Call::SetColor(self.color));
    }

    fn matrix(&self, mode: MatrixMode) -> [f64; 16] {
        let m = match mode {
            MatrixMode::ModelView => &self.gl_model_view,
            MatrixMode::Projection => &self.gl_projection,
        };
        *m.as_array()
    }

    fn set_matrix_mode(&mut self, mode: MatrixMode) {
        self.matrix_mode = mode;
        self.calls.push(Call::MatrixMode(mode));
    }

    fn push_matrix(&mut self) {
        self.calls.push(Call::PushMatrix);
    }

    fn pop_matrix(&mut self) {
        self.calls.push(Call::PopMatrix);
    }

    fn load_matrix(&mut self, m: &[f64; 16]) {
        let m = Mat4::from_array(*m);
        match self.matrix_mode {
            MatrixMode::ModelView => self.gl_model_view = m,
            MatrixMode::Projection => self.gl_projection = m,
        }
        self.calls.push(Call::LoadMatrix(m));
    }

    fn translate(&mut self, t: Vec3) {
        self.calls.push(Call::Translate(t));
    }

    fn scale(&mut self, s: Vec3) {
        self.calls.push(Call::Scale(s));
    }

    fn wire_cube(&mut self, size: f64) {
        self.calls.push(Call::WireCube(size));
    }
}

impl LegacyView for MockHost {
    fn begin_gl(&mut self) {
        self.calls.push(Call::BeginGl);
    }

    fn end_gl(&mut self) {
        self.calls.push(Call::EndGl);
    }

    fn model_view_matrix(&self) -> Mat4 {
        self.model_view
    }

    fn projection_matrix(&self) -> Mat4 {
        self.projection
    }

    fn viewport(&self) -> Viewport {
        self.viewport
    }

    fn begin_select(&mut self) {
        self.gl_model_view = self.pick_view;
        self.gl_projection = self.pick_projection;
        self.calls.push(Call::BeginSelect);
    }

    fn end_select(&mut self) {
        self.gl_model_view = Mat4::IDENTITY;
        self.gl_projection = Mat4::IDENTITY;
        self.calls.push(Call::EndSelect);
    }
}

impl DrawContext for MockHost {
    fn renderer_session(&self) -> Option<DrawApi> {
        self.session
    }

    fn has_state_manager(&self) -> bool {
        self.state_manager
    }

    fn cull_mode(&self) -> Option<CullMode> {
        self.cull
    }

    fn display_style(&self) -> DisplayStyle {
        self.style
    }

    fn world_view_matrix(&self) -> Mat4 {
        self.world_view
    }

    fn draw_projection_matrix(&self) -> Mat4 {
        self.projection
    }

    fn world_matrix(&self) -> Mat4 {
        self.world
    }

    fn draw_viewport(&self) -> Viewport {
        self.viewport
    }

    fn object_bounds(&self) -> Option<BoundingBox> {
        self.bounds
    }

    fn wireframe_color(&self) -> ColorRgba {
        self.wireframe_color
    }

    fn setup_lighting(&mut self) {
        self.calls.push(Call::SetupLighting);
    }

    fn unset_lighting(&mut self) {
        self.calls.push(Call::UnsetLighting);
    }
}

pub struct MockShape {
    bounded: bool,
    bbox: BoundingBox,
}

impl MockShape {
    pub fn bounded(bbox: BoundingBox) -> Self {
        Self { bounded: true, bbox }
    }

    pub fn unbounded() -> Self {
        Self {
            bounded: false,
            bbox: BoundingBox::default(),
        }
    }
}

impl ShapeGeometry for MockShape {
    fn is_bounded(&self) -> bool {
        self.bounded
    }

    fn bounding_box(&self) -> BoundingBox {
        self.bbox
    }
}

// ── engine ────────────────────────────────────────────────────────────────

#[derive(Debug, Clone)]
pub enum EngineCall {
    Created(SceneScope),
    Camera {
        view: Mat4,
        projection: Mat4,
        viewport: [f64; 4],
    },
    Lighting,
    Render(ScenePath, RenderParams),
    Intersect {
        view: Mat4,
        projection: Mat4,
        world: Mat4,
        params: RenderParams,
    },
    Dropped(ScenePath),
}

/// Shared between a factory, its engines, and the test body.
#[derive(Clone, Default)]
pub struct EngineLog {
    calls: Rc<RefCell<Vec<EngineCall>>>,
    pub fail_render: Rc<Cell<bool>>,
    pub hit: Rc<Cell<Option<Vec3>>>,
}

impl EngineLog {
    fn push(&self, call: EngineCall) {
        self.calls.borrow_mut().push(call);
    }

    pub fn calls(&self) -> Vec<EngineCall> {
        self.calls.borrow().clone()
    }

    pub fn created(&self) -> usize {
        self.calls
            .borrow()
            .iter()
            .filter(|c| matches!(c, EngineCall::Created(_)))
            .count()
    }

    /// Scene roots passed to `render`, in call order.
    pub fn rendered_roots(&self) -> Vec<ScenePath> {
        self.calls
            .borrow()
            .iter()
            .filter_map(|c| match c {
                EngineCall::Render(root, _) => Some(root.clone()),
                _ => None,
            })
            .collect()
    }

    pub fn rendered(&self) -> Vec<RenderParams> {
        self.calls
            .borrow()
            .iter()
            .filter_map(|c| match c {
                EngineCall::Render(_, params) => Some(*params),
                _ => None,
            })
            .collect()
    }
}

pub struct MockEngine {
    root: ScenePath,
    log: EngineLog,
    root_valid: Rc<Cell<bool>>,
}

impl ImagingEngine for MockEngine {
    fn set_camera_state(&mut self, model_view: &Mat4, projection: &Mat4, viewport: [f64; 4]) {
        self.log.push(EngineCall::Camera {
            view: *model_view,
            projection: *projection,
            viewport,
        });
    }

    fn set_lighting_state_from_gl(&mut self) {
        self.log.push(EngineCall::Lighting);
    }

    fn render(&mut self, root: &ScenePath, params: &RenderParams) -> Result<()> {
        if self.log.fail_render.get() {
            bail!("render failed");
        }
        self.log.push(EngineCall::Render(root.clone(), *params));
        Ok(())
    }

    fn test_intersection(
        &mut self,
        view: &Mat4,
        projection: &Mat4,
        world: &Mat4,
        _root: &ScenePath,
        params: &RenderParams,
    ) -> Result<Option<Vec3>> {
        self.log.push(EngineCall::Intersect {
            view: *view,
            projection: *projection,
            world: *world,
            params: *params,
        });
        Ok(self.log.hit.get())
    }

    fn has_valid_root(&self) -> bool {
        self.root_valid.get()
    }
}

impl Drop for MockEngine {
    fn drop(&mut self) {
        self.log.push(EngineCall::Dropped(self.root.clone()));
    }
}

pub struct MockFactory {
    pub log: EngineLog,
    pub fail_create: Rc<Cell<bool>>,
    pub root_valid: Rc<Cell<bool>>,
}

impl Default for MockFactory {
    fn default() -> Self {
        Self {
            log: EngineLog::default(),
            fail_create: Rc::new(Cell::new(false)),
            root_valid: Rc::new(Cell::new(true)),
        }
    }
}

impl EngineFactory for MockFactory {
    fn create(&mut self, scope: &SceneScope) -> Result<Box<dyn ImagingEngine>> {
        if self.fail_create.get() {
            bail!("engine construction failed");
        }
        self.log.push(EngineCall::Created(scope.clone()));
        Ok(Box::new(MockEngine {
            root: scope.root().clone(),
            log: self.log.clone(),
            root_valid: self.root_valid.clone(),
        }))
    }
}
