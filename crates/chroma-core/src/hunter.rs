//! Hunter Lab.

use crate::{illuminant, CieXyz};

/// A Hunter Lab value.
///
/// Predates CIE Lab and uses square roots instead of cube roots. The
/// family default white is illuminant C, the one Hunter's original
/// constants (175 and 70) were fitted to.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HunterLab {
    /// Lightness
    pub l: f32,
    /// Red-green axis
    pub a: f32,
    /// Yellow-blue axis
    pub b: f32,
    /// Reference white
    pub white_point: CieXyz,
}

impl HunterLab {
    /// Reference white used by [`HunterLab::new`]: illuminant C.
    pub const DEFAULT_WHITE_POINT: CieXyz = illuminant::C;

    /// Creates a Hunter Lab value relative to illuminant C.
    #[inline]
    pub const fn new(l: f32, a: f32, b: f32) -> Self {
        Self::with_white_point(l, a, b, Self::DEFAULT_WHITE_POINT)
    }

    /// Creates a Hunter Lab value relative to an explicit white.
    #[inline]
    pub const fn with_white_point(l: f32, a: f32, b: f32, white_point: CieXyz) -> Self {
        Self {
            l,
            a,
            b,
            white_point,
        }
    }

    /// Returns `[L, a, b]`.
    #[inline]
    pub const fn to_array(self) -> [f32; 3] {
        [self.l, self.a, self.b]
    }
}

impl Default for HunterLab {
    fn default() -> Self {
        Self::new(0.0, 0.0, 0.0)
    }
}
