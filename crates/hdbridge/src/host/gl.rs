use core::ops::BitOr;

use crate::coords::Vec3;

/// Attribute groups saved/restored by `push_attrib` / `pop_attrib`.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct AttribMask(u32);

impl AttribMask {
    pub const CURRENT: Self = Self(0x0000_0001);
    pub const LIGHTING: Self = Self(0x0000_0040);
    pub const ENABLE: Self = Self(0x0000_2000);

    /// The `GL_*_BIT` mask a [`GlState`] implementation passes to `glPushAttrib`.
    #[inline]
    pub const fn bits(self) -> u32 {
        self.0
    }
}

impl BitOr for AttribMask {
    type Output = Self;
    #[inline]
    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

/// Server-side capabilities toggled by the dispatchers.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Capability {
    Lighting,
    FramebufferSrgb,
}

/// Matrix stack selector.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum MatrixMode {
    ModelView,
    Projection,
}

/// Low-level fixed-function graphics state of the host's GL context.
///
/// Colors and matrices cross this seam in the GL's own memory layout; use
/// [`ColorRgba::from_array`](crate::coords::ColorRgba::from_array) and
/// [`Mat4::from_array`](crate::coords::Mat4::from_array) to lift them.
///
/// Implementations forward straight to the bound context. Every `push_*` must
/// be matched by the corresponding `pop_*` on the same thread; the guards in
/// [`crate::dispatch`] enforce that.
pub trait GlState {
    fn push_attrib(&mut self, mask: AttribMask);
    fn pop_attrib(&mut self);

    fn enable(&mut self, cap: Capability);
    fn disable(&mut self, cap: Capability);

    /// Current vertex color as RGBA floats, as last set by the host or by
    /// `set_color`.
    fn current_color(&self) -> [f32; 4];
    fn set_color(&mut self, rgba: &[f32; 4]);

    /// Reads the top of the given matrix stack as 16 doubles.
    fn matrix(&self, mode: MatrixMode) -> [f64; 16];
    fn set_matrix_mode(&mut self, mode: MatrixMode);
    fn push_matrix(&mut self);
    fn pop_matrix(&mut self);
    fn load_matrix(&mut self, m: &[f64; 16]);
    fn translate(&mut self, t: Vec3);
    fn scale(&mut self, s: Vec3);

    /// Draws a wireframe cube of edge `size` centered at the origin.
    fn wire_cube(&mut self, size: f64);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn attrib_bits_match_gl_values() {
        let mask = AttribMask::LIGHTING | AttribMask::CURRENT | AttribMask::ENABLE;
        assert_eq!(mask.bits(), 0x2041);
    }
}
