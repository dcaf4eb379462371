use crate::coords::{BoundingBox, ColorRgba};
use crate::host::ViewDisplayStyle;

/// Kind of draw pass.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum PassKind {
    Wireframe,
    Points,
    ShadedFlat,
    ShadedSmooth,
    BoundingBox,
}

impl PassKind {
    /// Unlit kinds draw with a flat override color.
    #[inline]
    pub fn is_unlit(self) -> bool {
        matches!(self, Self::Wireframe | Self::Points)
    }

    #[inline]
    pub fn is_shaded(self) -> bool {
        matches!(self, Self::ShadedFlat | Self::ShadedSmooth)
    }

    /// Display style a host request of this kind carries.
    #[inline]
    pub fn view_style(self) -> ViewDisplayStyle {
        match self {
            Self::Wireframe => ViewDisplayStyle::Wireframe,
            Self::Points => ViewDisplayStyle::Points,
            Self::ShadedFlat => ViewDisplayStyle::FlatShaded,
            Self::ShadedSmooth => ViewDisplayStyle::GouraudShaded,
            Self::BoundingBox => ViewDisplayStyle::BoundingBox,
        }
    }
}

/// One request to draw the bound scope in a particular mode.
///
/// Immutable once produced; consumed once per draw.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct DrawPass {
    pub kind: PassKind,
    pub display_style: Option<ViewDisplayStyle>,
    pub wireframe_color: ColorRgba,
    pub bounds: Option<BoundingBox>,
}

impl DrawPass {
    #[inline]
    pub fn new(kind: PassKind, wireframe_color: ColorRgba, bounds: Option<BoundingBox>) -> Self {
        Self {
            kind,
            display_style: Some(kind.view_style()),
            wireframe_color,
            bounds,
        }
    }

    #[inline]
    pub fn wireframe(bounds: BoundingBox, color: ColorRgba) -> Self {
        Self::new(PassKind::Wireframe, color, Some(bounds))
    }

    #[inline]
    pub fn bounding_box(bounds: BoundingBox, color: ColorRgba) -> Self {
        Self::new(PassKind::BoundingBox, color, Some(bounds))
    }

    /// Display style the pass resolves to (explicit override, else the kind's).
    #[inline]
    pub fn effective_style(&self) -> ViewDisplayStyle {
        self.display_style.unwrap_or_else(|| self.kind.view_style())
    }

    /// Smooth-shaded passes become wireframe passes; everything else is unchanged.
    ///
    /// Applied batch-wide when the viewport is in wireframe display mode.
    #[must_use]
    pub fn downgraded_to_wireframe(self) -> Self {
        if self.effective_style() == ViewDisplayStyle::GouraudShaded {
            Self {
                kind: PassKind::Wireframe,
                display_style: Some(ViewDisplayStyle::Wireframe),
                ..self
            }
        } else {
            self
        }
    }
}
