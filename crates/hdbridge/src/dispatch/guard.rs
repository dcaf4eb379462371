//! Scoped acquisition of host graphics state.
//!
//! Each guard performs the "begin" half in its constructor and the "end" half
//! in `Drop`, and derefs to the wrapped host so nested guards and plain state
//! calls go through it.

use core::ops::{Deref, DerefMut};

use crate::host::{AttribMask, Capability, DrawContext, GlState, LegacyView, MatrixMode};

macro_rules! deref_to_host {
    ($guard:ident, $bound:ident) => {
        impl<H: $bound + ?Sized> Deref for $guard<'_, H> {
            type Target = H;
            #[inline]
            fn deref(&self) -> &H {
                self.host
            }
        }

        impl<H: $bound + ?Sized> DerefMut for $guard<'_, H> {
            #[inline]
            fn deref_mut(&mut self) -> &mut H {
                self.host
            }
        }
    };
}

/// `push_attrib(mask)` .. `pop_attrib()`.
pub struct AttribScope<'a, H: GlState + ?Sized> {
    host: &'a mut H,
}

impl<'a, H: GlState + ?Sized> AttribScope<'a, H> {
    pub fn push(host: &'a mut H, mask: AttribMask) -> Self {
        host.push_attrib(mask);
        Self { host }
    }
}

impl<H: GlState + ?Sized> Drop for AttribScope<'_, H> {
    fn drop(&mut self) {
        self.host.pop_attrib();
    }
}

deref_to_host!(AttribScope, GlState);

/// `push_matrix()` on one stack .. `pop_matrix()` on the same stack.
///
/// Leaves the model-view stack selected on exit.
pub struct MatrixScope<'a, H: GlState + ?Sized> {
    host: &'a mut H,
    mode: MatrixMode,
}

impl<'a, H: GlState + ?Sized> MatrixScope<'a, H> {
    pub fn push(host: &'a mut H, mode: MatrixMode) -> Self {
        host.set_matrix_mode(mode);
        host.push_matrix();
        Self { host, mode }
    }
}

impl<H: GlState + ?Sized> Drop for MatrixScope<'_, H> {
    fn drop(&mut self) {
        self.host.set_matrix_mode(self.mode);
        self.host.pop_matrix();
        if self.mode != MatrixMode::ModelView {
            self.host.set_matrix_mode(MatrixMode::ModelView);
        }
    }
}

deref_to_host!(MatrixScope, GlState);

/// `enable(cap)` .. `disable(cap)`; inert when constructed disabled.
pub struct EnableScope<'a, H: GlState + ?Sized> {
    host: &'a mut H,
    cap: Capability,
    active: bool,
}

impl<'a, H: GlState + ?Sized> EnableScope<'a, H> {
    pub fn on(host: &'a mut H, cap: Capability) -> Self {
        Self::on_if(host, cap, true)
    }

    pub fn on_if(host: &'a mut H, cap: Capability, active: bool) -> Self {
        if active {
            host.enable(cap);
        }
        Self { host, cap, active }
    }
}

impl<H: GlState + ?Sized> Drop for EnableScope<'_, H> {
    fn drop(&mut self) {
        if self.active {
            self.host.disable(self.cap);
        }
    }
}

deref_to_host!(EnableScope, GlState);

/// `begin_gl()` .. `end_gl()` on a legacy view.
pub struct GlScope<'a, H: LegacyView + ?Sized> {
    host: &'a mut H,
}

impl<'a, H: LegacyView + ?Sized> GlScope<'a, H> {
    pub fn begin(host: &'a mut H) -> Self {
        host.begin_gl();
        Self { host }
    }
}

impl<H: LegacyView + ?Sized> Drop for GlScope<'_, H> {
    fn drop(&mut self) {
        self.host.end_gl();
    }
}

deref_to_host!(GlScope, LegacyView);

/// `begin_select()` .. `end_select()` on a legacy view.
pub struct SelectScope<'a, H: LegacyView + ?Sized> {
    host: &'a mut H,
}

impl<'a, H: LegacyView + ?Sized> SelectScope<'a, H> {
    pub fn begin(host: &'a mut H) -> Self {
        host.begin_select();
        Self { host }
    }
}

impl<H: LegacyView + ?Sized> Drop for SelectScope<'_, H> {
    fn drop(&mut self) {
        self.host.end_select();
    }
}

deref_to_host!(SelectScope, LegacyView);

/// Viewport lighting setup + GL lighting enabled .. lighting unset.
///
/// Inert when constructed inactive (wireframe batches).
pub struct LightingScope<'a, H: DrawContext + ?Sized> {
    host: &'a mut H,
    active: bool,
}

impl<'a, H: DrawContext + ?Sized> LightingScope<'a, H> {
    pub fn setup_if(host: &'a mut H, active: bool) -> Self {
        if active {
            host.setup_lighting();
            host.enable(Capability::Lighting);
        }
        Self { host, active }
    }
}

impl<H: DrawContext + ?Sized> Drop for LightingScope<'_, H> {
    fn drop(&mut self) {
        if self.active {
            self.host.unset_lighting();
        }
    }
}

deref_to_host!(LightingScope, DrawContext);
