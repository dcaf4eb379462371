use super::Vec3;

/// Axis-aligned bounding box in object space.
///
/// `min`/`max` are normalized on construction so `min <= max` per axis.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct BoundingBox {
    pub min: Vec3,
    pub max: Vec3,
}

impl BoundingBox {
    #[inline]
    pub fn new(a: Vec3, b: Vec3) -> Self {
        Self {
            min: a.min(b),
            max: a.max(b),
        }
    }

    #[inline]
    pub fn center(&self) -> Vec3 {
        (self.min + self.max) * 0.5
    }

    /// `(width, height, depth)` as a vector; the scale applied to a unit cube.
    #[inline]
    pub fn size(&self) -> Vec3 {
        self.max - self.min
    }
}
