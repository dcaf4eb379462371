//! Bridge configuration.

use crate::engine::RenderParams;

/// Host-level settings for [`crate::HdRenderer`].
///
/// Keep this small; add fields only for behavior a host actually varies.
#[derive(Debug, Clone)]
pub struct BridgeConfig {
    /// Whether the host distinguishes flat from smooth shading.
    ///
    /// When false, the flat-shaded style flag is ignored and shaded passes are
    /// always smooth.
    pub flat_shading_supported: bool,

    /// Subdivision level used for the default render parameters.
    pub subdivision_level: i32,

    /// Enable the sRGB framebuffer around legacy draws.
    pub enable_srgb_legacy: bool,
}

impl Default for BridgeConfig {
    fn default() -> Self {
        Self {
            flat_shading_supported: true,
            subdivision_level: 0,
            enable_srgb_legacy: true,
        }
    }
}

impl BridgeConfig {
    /// Base render parameters every pass starts from.
    pub fn default_params(&self) -> RenderParams {
        RenderParams::with_subdivision_level(self.subdivision_level)
    }
}
