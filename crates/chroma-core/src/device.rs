//! Device-relative representations of companded RGB.
//!
//! HSL, HSV, CMYK and YCbCr are reshufflings of [`Rgb`](crate::Rgb)
//! channels. They carry no white point of their own; the converter reads
//! them as living in its target working space.

/// Hue, saturation, lightness.
///
/// `h` in degrees [0, 360), `s` and `l` in [0, 1].
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Hsl {
    /// Hue in degrees
    pub h: f32,
    /// Saturation
    pub s: f32,
    /// Lightness
    pub l: f32,
}

impl Hsl {
    /// Creates a new HSL value.
    #[inline]
    pub const fn new(h: f32, s: f32, l: f32) -> Self {
        Self { h, s, l }
    }

    /// Returns `[h, s, l]`.
    #[inline]
    pub const fn to_array(self) -> [f32; 3] {
        [self.h, self.s, self.l]
    }
}

/// Hue, saturation, value.
///
/// `h` in degrees [0, 360), `s` and `v` in [0, 1].
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Hsv {
    /// Hue in degrees
    pub h: f32,
    /// Saturation
    pub s: f32,
    /// Value
    pub v: f32,
}

impl Hsv {
    /// Creates a new HSV value.
    #[inline]
    pub const fn new(h: f32, s: f32, v: f32) -> Self {
        Self { h, s, v }
    }

    /// Returns `[h, s, v]`.
    #[inline]
    pub const fn to_array(self) -> [f32; 3] {
        [self.h, self.s, self.v]
    }
}

/// Cyan, magenta, yellow, key (black), each in [0, 1].
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Cmyk {
    /// Cyan
    pub c: f32,
    /// Magenta
    pub m: f32,
    /// Yellow
    pub y: f32,
    /// Key (black)
    pub k: f32,
}

impl Cmyk {
    /// Creates a new CMYK value.
    #[inline]
    pub const fn new(c: f32, m: f32, y: f32, k: f32) -> Self {
        Self { c, m, y, k }
    }

    /// Returns `[c, m, y, k]`.
    #[inline]
    pub const fn to_array(self) -> [f32; 4] {
        [self.c, self.m, self.y, self.k]
    }
}

/// Full-range JFIF YCbCr with channels on the 0..255 scale.
///
/// Values stay `f32`; nothing is rounded or clamped to bytes.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct YCbCr {
    /// Luma
    pub y: f32,
    /// Blue-difference chroma (128 is neutral)
    pub cb: f32,
    /// Red-difference chroma (128 is neutral)
    pub cr: f32,
}

impl YCbCr {
    /// Creates a new YCbCr value.
    #[inline]
    pub const fn new(y: f32, cb: f32, cr: f32) -> Self {
        Self { y, cb, cr }
    }

    /// Returns `[Y, Cb, Cr]`.
    #[inline]
    pub const fn to_array(self) -> [f32; 3] {
        [self.y, self.cb, self.cr]
    }
}
