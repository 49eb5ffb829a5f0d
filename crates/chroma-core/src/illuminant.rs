//! Standard illuminants as [`CieXyz`] reference whites (Y = 1).
//!
//! Same values as the [`chroma_math`] vector constants, typed for use as
//! white points on the color value types.

use crate::CieXyz;

/// Incandescent / tungsten.
pub const A: CieXyz = CieXyz::from_vec3(chroma_math::A);

/// Direct sunlight at noon (obsolete).
pub const B: CieXyz = CieXyz::from_vec3(chroma_math::B);

/// Average / north sky daylight. Default Hunter Lab white.
pub const C: CieXyz = CieXyz::from_vec3(chroma_math::C);

/// Horizon light. Default CIE Lab white; ICC profile connection space.
pub const D50: CieXyz = CieXyz::from_vec3(chroma_math::D50);

/// Mid-morning / mid-afternoon daylight.
pub const D55: CieXyz = CieXyz::from_vec3(chroma_math::D55);

/// Noon daylight. Default global and CIE Luv white.
pub const D65: CieXyz = CieXyz::from_vec3(chroma_math::D65);

/// North sky daylight.
pub const D75: CieXyz = CieXyz::from_vec3(chroma_math::D75);

/// Equal energy.
pub const E: CieXyz = CieXyz::from_vec3(chroma_math::E);

/// Cool white fluorescent.
pub const F2: CieXyz = CieXyz::from_vec3(chroma_math::F2);

/// D65 simulator, daylight simulator.
pub const F7: CieXyz = CieXyz::from_vec3(chroma_math::F7);

/// Philips TL84, Ultralume 40.
pub const F11: CieXyz = CieXyz::from_vec3(chroma_math::F11);
