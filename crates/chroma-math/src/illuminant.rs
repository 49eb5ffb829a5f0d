//! Standard illuminants as XYZ reference whites.
//!
//! All whites are normalised so that `Y = 1`. Values are the 2° observer
//! tristimulus values tabulated by Bruce Lindbloom.

use crate::Vec3;

/// CIE Standard Illuminant A (tungsten, ~2856K).
pub const A: Vec3 = Vec3::new(1.09850, 1.0, 0.35585);

/// CIE Illuminant B (direct noon sunlight, ~4874K).
pub const B: Vec3 = Vec3::new(0.99072, 1.0, 0.85223);

/// CIE Illuminant C (average daylight, ~6774K).
///
/// The reference white of Hunter Lab and NTSC RGB.
pub const C: Vec3 = Vec3::new(0.98074, 1.0, 1.18232);

/// CIE Standard Illuminant D50 (horizon light, ~5000K).
///
/// Standard reference for ICC profiles and the default CIE Lab white.
pub const D50: Vec3 = Vec3::new(0.96422, 1.0, 0.82521);

/// CIE Standard Illuminant D55 (mid-morning daylight, ~5500K).
pub const D55: Vec3 = Vec3::new(0.95682, 1.0, 0.92149);

/// CIE Standard Illuminant D65 (noon daylight, ~6500K).
///
/// White point of sRGB, Rec.709, Rec.2020 and Adobe RGB (1998).
pub const D65: Vec3 = Vec3::new(0.95047, 1.0, 1.08883);

/// CIE Standard Illuminant D75 (north sky daylight, ~7500K).
pub const D75: Vec3 = Vec3::new(0.94972, 1.0, 1.22638);

/// CIE Standard Illuminant E (equal energy).
pub const E: Vec3 = Vec3::new(1.0, 1.0, 1.0);

/// CIE Illuminant F2 (cool white fluorescent).
pub const F2: Vec3 = Vec3::new(0.99186, 1.0, 0.67393);

/// CIE Illuminant F7 (broad-band daylight fluorescent).
pub const F7: Vec3 = Vec3::new(0.95041, 1.0, 1.08747);

/// CIE Illuminant F11 (narrow-band white fluorescent).
pub const F11: Vec3 = Vec3::new(1.00962, 1.0, 0.64350);
