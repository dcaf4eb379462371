use core::fmt;
use core::ops::{BitOr, BitOrAssign};

/// Bitset of active viewport display modes.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Default)]
pub struct DisplayStyle {
    bits: u32,
}

impl DisplayStyle {
    pub const EMPTY: Self = Self { bits: 0 };
    pub const GOURAUD_SHADED: Self = Self { bits: 1 << 0 };
    pub const WIREFRAME: Self = Self { bits: 1 << 1 };
    pub const BOUNDING_BOX: Self = Self { bits: 1 << 2 };
    pub const TEXTURED: Self = Self { bits: 1 << 3 };
    pub const DEFAULT_MATERIAL: Self = Self { bits: 1 << 4 };
    pub const XRAY_JOINT: Self = Self { bits: 1 << 5 };
    pub const XRAY: Self = Self { bits: 1 << 6 };
    pub const TWO_SIDED_LIGHTING: Self = Self { bits: 1 << 7 };
    pub const FLAT_SHADED: Self = Self { bits: 1 << 8 };

    const NAMES: [(Self, &'static str); 9] = [
        (Self::GOURAUD_SHADED, "GOURAUD_SHADED"),
        (Self::WIREFRAME, "WIREFRAME"),
        (Self::BOUNDING_BOX, "BOUNDING_BOX"),
        (Self::TEXTURED, "TEXTURED"),
        (Self::DEFAULT_MATERIAL, "DEFAULT_MATERIAL"),
        (Self::XRAY_JOINT, "XRAY_JOINT"),
        (Self::XRAY, "XRAY"),
        (Self::TWO_SIDED_LIGHTING, "TWO_SIDED_LIGHTING"),
        (Self::FLAT_SHADED, "FLAT_SHADED"),
    ];

    /// Keeps unknown bits so host values round-trip unchanged.
    #[inline]
    pub const fn from_bits_truncate(bits: u32) -> Self {
        Self { bits }
    }

    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.bits == 0
    }

    /// True if every flag in `other` is set.
    #[inline]
    pub const fn contains(&self, other: Self) -> bool {
        (self.bits & other.bits) == other.bits
    }

    /// True if any flag in `other` is set.
    #[inline]
    pub const fn intersects(&self, other: Self) -> bool {
        (self.bits & other.bits) != 0
    }

    #[must_use]
    #[inline]
    pub const fn without(self, other: Self) -> Self {
        Self { bits: self.bits & !other.bits }
    }
}

impl BitOr for DisplayStyle {
    type Output = Self;
    #[inline]
    fn bitor(self, rhs: Self) -> Self {
        Self { bits: self.bits | rhs.bits }
    }
}

impl BitOrAssign for DisplayStyle {
    #[inline]
    fn bitor_assign(&mut self, rhs: Self) {
        self.bits |= rhs.bits;
    }
}

impl fmt::Debug for DisplayStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return f.write_str("DisplayStyle(EMPTY)");
        }
        f.write_str("DisplayStyle(")?;
        let mut first = true;
        for (flag, name) in Self::NAMES {
            if self.contains(flag) {
                if !first {
                    f.write_str(" | ")?;
                }
                f.write_str(name)?;
                first = false;
            }
        }
        f.write_str(")")
    }
}

/// Per-object display status reported by the host.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum DisplayStatus {
    Active,
    Live,
    Dormant,
    Invisible,
    Hilite,
    Template,
    ActiveTemplate,
    ActiveComponent,
    Lead,
    IntermediateObject,
    ActiveAffected,
    NoStatus,
}

impl DisplayStatus {
    /// Selected objects get a wireframe overlay.
    #[inline]
    pub fn is_selected(self) -> bool {
        matches!(self, Self::Active | Self::Lead | Self::Hilite)
    }
}

/// Display style attached to a single host draw request.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum ViewDisplayStyle {
    BoundingBox,
    Wireframe,
    Points,
    FlatShaded,
    GouraudShaded,
}
