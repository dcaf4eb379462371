use bytemuck::{Pod, Zeroable};

use super::Vec3;

/// 4x4 double-precision matrix.
///
/// Storage is the 16 contiguous values shared by the host matrix type and the
/// GL matrix stack, so conversion in either direction is a plain cast.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
pub struct Mat4 {
    pub rows: [[f64; 4]; 4],
}

impl Mat4 {
    pub const IDENTITY: Mat4 = Mat4 {
        rows: [
            [1.0, 0.0, 0.0, 0.0],
            [0.0, 1.0, 0.0, 0.0],
            [0.0, 0.0, 1.0, 0.0],
            [0.0, 0.0, 0.0, 1.0],
        ],
    };

    #[inline]
    pub fn from_array(values: [f64; 16]) -> Self {
        bytemuck::cast(values)
    }

    #[inline]
    pub fn as_array(&self) -> &[f64; 16] {
        bytemuck::cast_ref(self)
    }

    /// Translation-only matrix (row-vector convention: translation in the last row).
    #[inline]
    pub fn from_translation(t: Vec3) -> Self {
        let mut m = Self::IDENTITY;
        m.rows[3] = [t.x, t.y, t.z, 1.0];
        m
    }

    #[inline]
    pub fn translation(&self) -> Vec3 {
        Vec3::new(self.rows[3][0], self.rows[3][1], self.rows[3][2])
    }
}

impl Default for Mat4 {
    fn default() -> Self {
        Self::IDENTITY
    }
}
