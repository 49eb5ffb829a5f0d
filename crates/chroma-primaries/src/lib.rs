//! # chroma-primaries
//!
//! RGB working spaces and RGB-XYZ matrix generation.
//!
//! A working space is defined by the chromaticities of its three
//! primaries, its reference white (as XYZ) and its companding curve.
//! From those the 3x3 matrix taking linear RGB to CIE XYZ is derived.
//!
//! # Included Working Spaces
//!
//! | Working Space | White | Companding |
//! |---------------|-------|------------|
//! | [`SRGB`] | D65 | sRGB |
//! | [`SRGB_SIMPLIFIED`] | D65 | gamma 2.2 |
//! | [`REC709`] | D65 | Rec.709 |
//! | [`REC2020`] | D65 | Rec.2020 |
//! | [`ECI_RGB_V2`] | D50 | L* |
//! | [`ADOBE_RGB_1998`] | D65 | gamma 2.2 |
//! | [`APPLE_SRGB`] | D65 | gamma 1.8 |
//! | [`BEST_RGB`] | D50 | gamma 2.2 |
//! | [`BETA_RGB`] | D50 | gamma 2.2 |
//! | [`BRUCE_RGB`] | D65 | gamma 2.2 |
//! | [`CIE_RGB`] | E | gamma 2.2 |
//! | [`COLOR_MATCH_RGB`] | D50 | gamma 1.8 |
//! | [`DON_RGB_4`] | D50 | gamma 2.2 |
//! | [`EKTA_SPACE_PS5`] | D50 | gamma 2.2 |
//! | [`NTSC_RGB`] | C | gamma 2.2 |
//! | [`PAL_SECAM_RGB`] | D65 | gamma 2.2 |
//! | [`PRO_PHOTO_RGB`] | D50 | gamma 1.8 |
//! | [`SMPTE_C_RGB`] | D65 | gamma 2.2 |
//! | [`WIDE_GAMUT_RGB`] | D50 | gamma 2.2 |
//!
//! # Usage
//!
//! ```rust
//! use chroma_primaries::SRGB;
//! use chroma_math::Vec3;
//!
//! let to_xyz = SRGB.rgb_to_xyz_matrix().unwrap();
//!
//! // (1, 1, 1) lands on the reference white.
//! let white = to_xyz * Vec3::ONE;
//! assert!((white.z - SRGB.white.z).abs() < 1e-4);
//! ```
//!
//! # Dependencies
//!
//! - [`chroma-math`] - Matrix operations and illuminants
//! - [`chroma-transfer`] - Companding curves
//!
//! # Used By
//!
//! - `chroma-core` - RGB value types carry a working space
//! - `chroma-convert` - linear RGB <-> XYZ conversion

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

use chroma_math::{Mat3, Vec3};
use chroma_transfer::Companding;

/// Chromaticities of the three RGB primaries.
///
/// # Example
///
/// ```rust
/// use chroma_primaries::Primaries;
///
/// let rec709 = Primaries {
///     r: (0.64, 0.33),
///     g: (0.30, 0.60),
///     b: (0.15, 0.06),
/// };
/// assert_eq!(rec709.r.0, 0.64);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Primaries {
    /// Red primary (x, y) chromaticity
    pub r: (f32, f32),
    /// Green primary (x, y) chromaticity
    pub g: (f32, f32),
    /// Blue primary (x, y) chromaticity
    pub b: (f32, f32),
}

impl Primaries {
    /// Creates primaries from three xy pairs.
    #[inline]
    pub const fn new(r: (f32, f32), g: (f32, f32), b: (f32, f32)) -> Self {
        Self { r, g, b }
    }
}

/// An RGB working space: primaries, reference white and companding.
///
/// Two working spaces compare equal when their white, companding and
/// primaries match. The display name does not take part, so a custom
/// space built from the sRGB numbers equals [`SRGB`].
///
/// # Example
///
/// ```rust
/// use chroma_primaries::{RgbWorkingSpace, SRGB};
///
/// let custom = RgbWorkingSpace::new("my sRGB", SRGB.white, SRGB.companding, SRGB.primaries);
/// assert_eq!(custom, SRGB);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct RgbWorkingSpace {
    /// Display name
    pub name: &'static str,
    /// Reference white as XYZ (Y = 1)
    pub white: Vec3,
    /// Companding curve
    pub companding: Companding,
    /// Primary chromaticities
    pub primaries: Primaries,
}

impl RgbWorkingSpace {
    /// Creates a working space.
    #[inline]
    pub const fn new(
        name: &'static str,
        white: Vec3,
        companding: Companding,
        primaries: Primaries,
    ) -> Self {
        Self {
            name,
            white,
            companding,
            primaries,
        }
    }

    /// Linear RGB to XYZ matrix, relative to [`Self::white`].
    ///
    /// `None` when the primaries are degenerate.
    #[inline]
    pub fn rgb_to_xyz_matrix(&self) -> Option<Mat3> {
        rgb_to_xyz_matrix(&self.primaries, self.white)
    }

    /// XYZ to linear RGB matrix, the inverse of [`Self::rgb_to_xyz_matrix`].
    #[inline]
    pub fn xyz_to_rgb_matrix(&self) -> Option<Mat3> {
        xyz_to_rgb_matrix(&self.primaries, self.white)
    }
}

impl PartialEq for RgbWorkingSpace {
    fn eq(&self, other: &Self) -> bool {
        self.white == other.white
            && self.companding == other.companding
            && self.primaries == other.primaries
    }
}

impl Default for RgbWorkingSpace {
    fn default() -> Self {
        SRGB
    }
}

// ============================================================================
// Standard Working Spaces
// ============================================================================

const SRGB_PRIMARIES: Primaries = Primaries::new((0.64, 0.33), (0.30, 0.60), (0.15, 0.06));

/// sRGB (IEC 61966-2-1).
///
/// The default working space.
pub const SRGB: RgbWorkingSpace =
    RgbWorkingSpace::new("sRGB", chroma_math::D65, Companding::Srgb, SRGB_PRIMARIES);

/// sRGB primaries with a pure 2.2 gamma instead of the piecewise curve.
pub const SRGB_SIMPLIFIED: RgbWorkingSpace = RgbWorkingSpace::new(
    "sRGB simplified",
    chroma_math::D65,
    Companding::Gamma(2.2),
    SRGB_PRIMARIES,
);

/// Rec.709 (ITU-R BT.709).
pub const REC709: RgbWorkingSpace =
    RgbWorkingSpace::new("Rec.709", chroma_math::D65, Companding::Rec709, SRGB_PRIMARIES);

/// Rec.2020 (ITU-R BT.2020).
///
/// Ultra HD TV working space with a much wider gamut than Rec.709.
pub const REC2020: RgbWorkingSpace = RgbWorkingSpace::new(
    "Rec.2020",
    chroma_math::D65,
    Companding::Rec2020,
    Primaries::new((0.708, 0.292), (0.170, 0.797), (0.131, 0.046)),
);

/// eciRGB v2 (European Color Initiative).
pub const ECI_RGB_V2: RgbWorkingSpace = RgbWorkingSpace::new(
    "eciRGB v2",
    chroma_math::D50,
    Companding::LStar,
    Primaries::new((0.67, 0.33), (0.21, 0.71), (0.14, 0.08)),
);

/// Adobe RGB (1998).
pub const ADOBE_RGB_1998: RgbWorkingSpace = RgbWorkingSpace::new(
    "Adobe RGB (1998)",
    chroma_math::D65,
    Companding::Gamma(2.2),
    Primaries::new((0.64, 0.33), (0.21, 0.71), (0.15, 0.06)),
);

/// Apple sRGB (legacy Apple displays, gamma 1.8).
pub const APPLE_SRGB: RgbWorkingSpace = RgbWorkingSpace::new(
    "Apple sRGB",
    chroma_math::D65,
    Companding::Gamma(1.8),
    Primaries::new((0.625, 0.34), (0.28, 0.595), (0.155, 0.07)),
);

/// Best RGB.
pub const BEST_RGB: RgbWorkingSpace = RgbWorkingSpace::new(
    "Best RGB",
    chroma_math::D50,
    Companding::Gamma(2.2),
    Primaries::new((0.7347, 0.2653), (0.215, 0.775), (0.13, 0.035)),
);

/// Beta RGB.
pub const BETA_RGB: RgbWorkingSpace = RgbWorkingSpace::new(
    "Beta RGB",
    chroma_math::D50,
    Companding::Gamma(2.2),
    Primaries::new((0.6888, 0.3112), (0.1986, 0.7551), (0.1265, 0.0352)),
);

/// Bruce RGB.
pub const BRUCE_RGB: RgbWorkingSpace = RgbWorkingSpace::new(
    "Bruce RGB",
    chroma_math::D65,
    Companding::Gamma(2.2),
    Primaries::new((0.64, 0.33), (0.28, 0.65), (0.15, 0.06)),
);

/// CIE RGB (1931 matching primaries, equal-energy white).
pub const CIE_RGB: RgbWorkingSpace = RgbWorkingSpace::new(
    "CIE RGB",
    chroma_math::E,
    Companding::Gamma(2.2),
    Primaries::new((0.735, 0.265), (0.274, 0.717), (0.167, 0.009)),
);

/// ColorMatch RGB.
pub const COLOR_MATCH_RGB: RgbWorkingSpace = RgbWorkingSpace::new(
    "ColorMatch RGB",
    chroma_math::D50,
    Companding::Gamma(1.8),
    Primaries::new((0.63, 0.34), (0.295, 0.605), (0.15, 0.075)),
);

/// Don RGB 4.
pub const DON_RGB_4: RgbWorkingSpace = RgbWorkingSpace::new(
    "Don RGB 4",
    chroma_math::D50,
    Companding::Gamma(2.2),
    Primaries::new((0.696, 0.30), (0.215, 0.765), (0.13, 0.035)),
);

/// Ekta Space PS5.
pub const EKTA_SPACE_PS5: RgbWorkingSpace = RgbWorkingSpace::new(
    "Ekta Space PS5",
    chroma_math::D50,
    Companding::Gamma(2.2),
    Primaries::new((0.695, 0.305), (0.26, 0.70), (0.11, 0.005)),
);

/// NTSC RGB (1953).
pub const NTSC_RGB: RgbWorkingSpace = RgbWorkingSpace::new(
    "NTSC RGB",
    chroma_math::C,
    Companding::Gamma(2.2),
    Primaries::new((0.67, 0.33), (0.21, 0.71), (0.14, 0.08)),
);

/// PAL/SECAM RGB.
pub const PAL_SECAM_RGB: RgbWorkingSpace = RgbWorkingSpace::new(
    "PAL/SECAM RGB",
    chroma_math::D65,
    Companding::Gamma(2.2),
    Primaries::new((0.64, 0.33), (0.29, 0.60), (0.15, 0.06)),
);

/// ProPhoto RGB (ROMM RGB).
pub const PRO_PHOTO_RGB: RgbWorkingSpace = RgbWorkingSpace::new(
    "ProPhoto RGB",
    chroma_math::D50,
    Companding::Gamma(1.8),
    Primaries::new((0.7347, 0.2653), (0.1596, 0.8404), (0.0366, 0.0001)),
);

/// SMPTE-C RGB.
pub const SMPTE_C_RGB: RgbWorkingSpace = RgbWorkingSpace::new(
    "SMPTE-C RGB",
    chroma_math::D65,
    Companding::Gamma(2.2),
    Primaries::new((0.63, 0.34), (0.31, 0.595), (0.155, 0.07)),
);

/// Wide Gamut RGB (Adobe).
pub const WIDE_GAMUT_RGB: RgbWorkingSpace = RgbWorkingSpace::new(
    "Wide Gamut RGB",
    chroma_math::D50,
    Companding::Gamma(2.2),
    Primaries::new((0.735, 0.265), (0.115, 0.826), (0.157, 0.018)),
);

/// Every standard working space, in catalogue order.
pub const ALL: [RgbWorkingSpace; 19] = [
    SRGB,
    SRGB_SIMPLIFIED,
    REC709,
    REC2020,
    ECI_RGB_V2,
    ADOBE_RGB_1998,
    APPLE_SRGB,
    BEST_RGB,
    BETA_RGB,
    BRUCE_RGB,
    CIE_RGB,
    COLOR_MATCH_RGB,
    DON_RGB_4,
    EKTA_SPACE_PS5,
    NTSC_RGB,
    PAL_SECAM_RGB,
    PRO_PHOTO_RGB,
    SMPTE_C_RGB,
    WIDE_GAMUT_RGB,
];

/// Looks up a standard working space by display name (ASCII case-insensitive).
///
/// ```rust
/// use chroma_primaries::{by_name, PRO_PHOTO_RGB};
///
/// assert_eq!(by_name("prophoto rgb"), Some(PRO_PHOTO_RGB));
/// assert_eq!(by_name("nope"), None);
/// ```
pub fn by_name(name: &str) -> Option<RgbWorkingSpace> {
    ALL.iter()
        .find(|ws| ws.name.eq_ignore_ascii_case(name))
        .copied()
}

// ============================================================================
// Matrix Generation
// ============================================================================

/// Converts xy chromaticity to XYZ (with Y=1).
fn xy_to_xyz(x: f32, y: f32) -> Vec3 {
    if y.abs() < 1e-10 {
        Vec3::ZERO
    } else {
        Vec3::new(x / y, 1.0, (1.0 - x - y) / y)
    }
}

/// Computes the linear RGB to XYZ matrix for a set of primaries.
///
/// The white is given as XYZ, not xy, so `(1, 1, 1)` maps exactly onto
/// the tabulated illuminant.
///
/// # Algorithm
///
/// 1. Convert xy chromaticities to XYZ (with Y=1)
/// 2. Solve `M * S = W` for the per-channel scale `S`
/// 3. Multiply the primary columns by `S`
///
/// Returns `None` when the primaries are degenerate.
///
/// # Example
///
/// ```rust
/// use chroma_primaries::{rgb_to_xyz_matrix, SRGB};
/// use chroma_math::{Vec3, D65};
///
/// let m = rgb_to_xyz_matrix(&SRGB.primaries, D65).unwrap();
/// let white = m * Vec3::ONE;
/// assert!((white.x - D65.x).abs() < 1e-4);
/// assert!((white.y - 1.0).abs() < 1e-4);
/// ```
pub fn rgb_to_xyz_matrix(primaries: &Primaries, white: Vec3) -> Option<Mat3> {
    let r_xyz = xy_to_xyz(primaries.r.0, primaries.r.1);
    let g_xyz = xy_to_xyz(primaries.g.0, primaries.g.1);
    let b_xyz = xy_to_xyz(primaries.b.0, primaries.b.1);

    let m = Mat3::from_col_vecs(r_xyz, g_xyz, b_xyz);
    let s = m.inverse()? * white;

    Some(Mat3::from_col_vecs(r_xyz * s.x, g_xyz * s.y, b_xyz * s.z))
}

/// Computes the XYZ to linear RGB matrix for a set of primaries.
///
/// This is the inverse of [`rgb_to_xyz_matrix`].
pub fn xyz_to_rgb_matrix(primaries: &Primaries, white: Vec3) -> Option<Mat3> {
    rgb_to_xyz_matrix(primaries, white)?.inverse()
}
