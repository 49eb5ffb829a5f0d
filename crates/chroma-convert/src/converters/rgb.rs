//! Linear RGB <-> CIE XYZ and companded <-> linear RGB.

use chroma_core::{CieXyz, LinearRgb, Rgb, RgbWorkingSpace};
use chroma_math::Mat3;

/// Stand-in for the matrix of a degenerate working space; every product
/// with it is NaN.
const UNDEFINED: Mat3 = Mat3::from_rows([[f32::NAN; 3]; 3]);

/// Linear RGB -> XYZ for one working space.
///
/// The XYZ result is relative to the working space's own white.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearRgbToXyz {
    working_space: RgbWorkingSpace,
    matrix: Mat3,
}

impl LinearRgbToXyz {
    /// Derives the matrix for `working_space`.
    ///
    /// Degenerate primaries yield a converter that produces NaN.
    pub fn new(working_space: RgbWorkingSpace) -> Self {
        Self {
            working_space,
            matrix: working_space.rgb_to_xyz_matrix().unwrap_or(UNDEFINED),
        }
    }

    /// The working space this converter was built for.
    #[inline]
    pub fn working_space(&self) -> &RgbWorkingSpace {
        &self.working_space
    }

    /// Converts linear RGB channels to XYZ.
    ///
    /// The value's own working space is not consulted.
    #[inline]
    pub fn convert(&self, rgb: LinearRgb) -> CieXyz {
        CieXyz::from_vec3(self.matrix * rgb.to_vec3())
    }
}

/// XYZ -> linear RGB for one working space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct XyzToLinearRgb {
    working_space: RgbWorkingSpace,
    matrix: Mat3,
}

impl XyzToLinearRgb {
    /// Derives the inverse matrix for `working_space`.
    ///
    /// Degenerate primaries yield a converter that produces NaN.
    pub fn new(working_space: RgbWorkingSpace) -> Self {
        Self {
            working_space,
            matrix: working_space.xyz_to_rgb_matrix().unwrap_or(UNDEFINED),
        }
    }

    /// The working space this converter was built for.
    #[inline]
    pub fn working_space(&self) -> &RgbWorkingSpace {
        &self.working_space
    }

    /// Converts XYZ (relative to the working space white) to linear RGB.
    #[inline]
    pub fn convert(&self, xyz: CieXyz) -> LinearRgb {
        LinearRgb::from_vec3(self.matrix * xyz.to_vec3(), self.working_space)
    }
}

/// Removes the working space companding. The working space is kept.
///
/// ```rust
/// use chroma_convert::converters::rgb_to_linear;
/// use chroma_core::Rgb;
///
/// let lin = rgb_to_linear(Rgb::new(0.5, 0.5, 0.5));
/// assert!((lin.r - 0.2140).abs() < 1e-4);
/// ```
#[inline]
pub fn rgb_to_linear(rgb: Rgb) -> LinearRgb {
    let ws = rgb.working_space;
    LinearRgb::from_vec3(ws.companding.expand_rgb(rgb.to_vec3()), ws)
}

/// Applies the working space companding. The working space is kept.
#[inline]
pub fn linear_to_rgb(lin: LinearRgb) -> Rgb {
    let ws = lin.working_space;
    Rgb::from_vec3(ws.companding.compress_rgb(lin.to_vec3()), ws)
}
