use crate::coords::ColorRgba;

/// Geometry representation the engine draws.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum DrawMode {
    Points,
    Wireframe,
    ShadedFlat,
    ShadedSmooth,
    /// Geometry with no shading; used for hit-testing.
    GeomOnly,
}

/// Face culling policy requested from the engine.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum CullStyle {
    Nothing,
    BackUnlessDoubleSided,
}

/// Per-call render parameters.
///
/// Passed by value into each engine call and never retained.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct RenderParams {
    pub draw_mode: DrawMode,
    pub enable_lighting: bool,
    pub cull_style: CullStyle,
    /// Flat color replacing material shading. Only honored for unlit modes.
    pub override_color: Option<ColorRgba>,
    /// Refinement complexity; see [`complexity_from_subdivision_level`].
    pub complexity: f32,
}

impl Default for RenderParams {
    fn default() -> Self {
        Self {
            draw_mode: DrawMode::ShadedSmooth,
            enable_lighting: true,
            cull_style: CullStyle::Nothing,
            override_color: None,
            complexity: 1.0,
        }
    }
}

impl RenderParams {
    /// Default parameters refined for the given subdivision level.
    pub fn with_subdivision_level(level: i32) -> Self {
        Self {
            complexity: complexity_from_subdivision_level(level),
            ..Self::default()
        }
    }
}

/// Maps a host subdivision level to engine complexity: `1.0 + 0.1 * level`.
///
/// The mapping is historical and deliberately coarse. The engine's own
/// complexity-to-level conversion rounds differently (1.4 maps back to level
/// 3, and anything above 1.8 saturates at 8), so the two are not inverses.
#[inline]
pub fn complexity_from_subdivision_level(level: i32) -> f32 {
    1.0 + level as f32 * 0.1
}
