//! Companded and linear RGB.
//!
//! Both types carry the [`RgbWorkingSpace`] they are expressed in. The
//! nominal channel range is [0, 1] but nothing enforces it: wide-gamut
//! conversions can produce negative or super-unity channels and those are
//! kept.

use chroma_math::Vec3;
use chroma_primaries::{RgbWorkingSpace, SRGB};

/// Companded (device) RGB in a working space.
///
/// # Example
///
/// ```rust
/// use chroma_core::Rgb;
/// use chroma_primaries::{ADOBE_RGB_1998, SRGB};
///
/// let red = Rgb::new(1.0, 0.0, 0.0);
/// assert_eq!(red.working_space, SRGB);
///
/// let adobe = Rgb::with_working_space(1.0, 0.0, 0.0, ADOBE_RGB_1998);
/// assert_ne!(red, adobe);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgb {
    /// Red channel
    pub r: f32,
    /// Green channel
    pub g: f32,
    /// Blue channel
    pub b: f32,
    /// Working space the channels are expressed in
    pub working_space: RgbWorkingSpace,
}

impl Rgb {
    /// Working space used by [`Rgb::new`]: sRGB.
    pub const DEFAULT_WORKING_SPACE: RgbWorkingSpace = SRGB;

    /// Creates an sRGB value.
    #[inline]
    pub const fn new(r: f32, g: f32, b: f32) -> Self {
        Self::with_working_space(r, g, b, Self::DEFAULT_WORKING_SPACE)
    }

    /// Creates a value in an explicit working space.
    #[inline]
    pub const fn with_working_space(
        r: f32,
        g: f32,
        b: f32,
        working_space: RgbWorkingSpace,
    ) -> Self {
        Self {
            r,
            g,
            b,
            working_space,
        }
    }

    /// Creates from 8-bit channels (divided by 255).
    ///
    /// ```rust
    /// use chroma_core::Rgb;
    ///
    /// let grey = Rgb::from_u8(128, 128, 128);
    /// assert!((grey.r - 0.50196).abs() < 1e-5);
    /// ```
    #[inline]
    pub fn from_u8(r: u8, g: u8, b: u8) -> Self {
        Self::new(r as f32 / 255.0, g as f32 / 255.0, b as f32 / 255.0)
    }

    /// Creates from a [`Vec3`] in the given working space.
    #[inline]
    pub const fn from_vec3(v: Vec3, working_space: RgbWorkingSpace) -> Self {
        Self::with_working_space(v.x, v.y, v.z, working_space)
    }

    /// Channels as a [`Vec3`].
    #[inline]
    pub const fn to_vec3(self) -> Vec3 {
        Vec3::new(self.r, self.g, self.b)
    }

    /// Returns `[r, g, b]`.
    #[inline]
    pub const fn to_array(self) -> [f32; 3] {
        [self.r, self.g, self.b]
    }
}

impl Default for Rgb {
    fn default() -> Self {
        Self::new(0.0, 0.0, 0.0)
    }
}

/// Linear-light RGB in a working space.
///
/// Same primaries and white as [`Rgb`], with the companding removed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearRgb {
    /// Red channel
    pub r: f32,
    /// Green channel
    pub g: f32,
    /// Blue channel
    pub b: f32,
    /// Working space the channels are expressed in
    pub working_space: RgbWorkingSpace,
}

impl LinearRgb {
    /// Working space used by [`LinearRgb::new`]: sRGB.
    pub const DEFAULT_WORKING_SPACE: RgbWorkingSpace = SRGB;

    /// Creates a linear sRGB value.
    #[inline]
    pub const fn new(r: f32, g: f32, b: f32) -> Self {
        Self::with_working_space(r, g, b, Self::DEFAULT_WORKING_SPACE)
    }

    /// Creates a value in an explicit working space.
    #[inline]
    pub const fn with_working_space(
        r: f32,
        g: f32,
        b: f32,
        working_space: RgbWorkingSpace,
    ) -> Self {
        Self {
            r,
            g,
            b,
            working_space,
        }
    }

    /// Creates from a [`Vec3`] in the given working space.
    #[inline]
    pub const fn from_vec3(v: Vec3, working_space: RgbWorkingSpace) -> Self {
        Self::with_working_space(v.x, v.y, v.z, working_space)
    }

    /// Channels as a [`Vec3`].
    #[inline]
    pub const fn to_vec3(self) -> Vec3 {
        Vec3::new(self.r, self.g, self.b)
    }

    /// Returns `[r, g, b]`.
    #[inline]
    pub const fn to_array(self) -> [f32; 3] {
        [self.r, self.g, self.b]
    }
}

impl Default for LinearRgb {
    fn default() -> Self {
        Self::new(0.0, 0.0, 0.0)
    }
}
