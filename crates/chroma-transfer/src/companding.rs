//! Companding curve selector.

use chroma_math::Vec3;

use crate::{gamma, lstar, rec2020, rec709, srgb};

/// A working space's companding curve.
///
/// `expand` takes encoded (device) values to linear light, `compress` is
/// its inverse. Both act per channel and never clamp.
///
/// # Example
///
/// ```rust
/// use chroma_transfer::Companding;
///
/// let curve = Companding::Gamma(2.2);
/// let linear = curve.expand(0.5);
/// assert!((curve.compress(linear) - 0.5).abs() < 1e-6);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Companding {
    /// IEC 61966-2-1 sRGB curve.
    Srgb,
    /// Pure power law with the given exponent.
    Gamma(f32),
    /// CIE L* curve.
    LStar,
    /// ITU-R BT.709 curve.
    Rec709,
    /// ITU-R BT.2020 curve.
    Rec2020,
}

impl Companding {
    /// Expands one encoded channel to linear light.
    #[inline]
    pub fn expand(self, v: f32) -> f32 {
        match self {
            Self::Srgb => srgb::expand(v),
            Self::Gamma(g) => gamma::expand(v, g),
            Self::LStar => lstar::expand(v),
            Self::Rec709 => rec709::expand(v),
            Self::Rec2020 => rec2020::expand(v),
        }
    }

    /// Compresses one linear channel to its encoded value.
    #[inline]
    pub fn compress(self, l: f32) -> f32 {
        match self {
            Self::Srgb => srgb::compress(l),
            Self::Gamma(g) => gamma::compress(l, g),
            Self::LStar => lstar::compress(l),
            Self::Rec709 => rec709::compress(l),
            Self::Rec2020 => rec2020::compress(l),
        }
    }

    /// Expands an RGB triplet.
    #[inline]
    pub fn expand_rgb(self, rgb: Vec3) -> Vec3 {
        rgb.map(|v| self.expand(v))
    }

    /// Compresses a linear RGB triplet.
    #[inline]
    pub fn compress_rgb(self, rgb: Vec3) -> Vec3 {
        rgb.map(|l| self.compress(l))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [Companding; 6] = [
        Companding::Srgb,
        Companding::Gamma(1.8),
        Companding::Gamma(2.2),
        Companding::LStar,
        Companding::Rec709,
        Companding::Rec2020,
    ];

    #[test]
    fn test_endpoints_fixed() {
        for curve in ALL {
            assert!(curve.expand(0.0).abs() < 1e-7, "{:?}", curve);
            assert!((curve.expand(1.0) - 1.0).abs() < 1e-5, "{:?}", curve);
            assert!((curve.compress(1.0) - 1.0).abs() < 1e-5, "{:?}", curve);
        }
    }

    #[test]
    fn test_triplet_roundtrip() {
        let rgb = Vec3::new(0.1, 0.5, 0.9);
        for curve in ALL {
            let back = curve.compress_rgb(curve.expand_rgb(rgb));
            for (b, v) in back.to_array().into_iter().zip(rgb.to_array()) {
                assert!((b - v).abs() < 1e-4, "{:?}", curve);
            }
        }
    }

    #[test]
    fn test_gamma_exponent_in_equality() {
        assert_eq!(Companding::Gamma(2.2), Companding::Gamma(2.2));
        assert_ne!(Companding::Gamma(2.2), Companding::Gamma(1.8));
    }
}
