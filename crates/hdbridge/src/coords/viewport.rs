/// Viewport rectangle in device pixels, as reported by the host view.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub struct Viewport {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Viewport {
    #[inline]
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self { x, y, width, height }
    }

    /// `(x, y, width, height)` widened to `f64` for the imaging engine's camera.
    #[inline]
    pub fn to_vec4(self) -> [f64; 4] {
        [
            f64::from(self.x),
            f64::from(self.y),
            f64::from(self.width),
            f64::from(self.height),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn to_vec4_keeps_origin_and_extent() {
        assert_eq!(Viewport::new(10, -4, 640, 480).to_vec4(), [10.0, -4.0, 640.0, 480.0]);
    }
}
