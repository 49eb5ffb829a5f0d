//! Rec.709 (BT.709) companding.
//!
//! The camera OETF of HDTV and its exact inverse. Display pipelines
//! usually decode with BT.1886 instead; a working space wants the
//! mathematical inverse so that RGB round-trips.
//!
//! # Reference
//!
//! ITU-R BT.709-6

/// Compresses linear light to Rec.709.
///
/// # Formula
///
/// ```text
/// if L < 0.018:
///     V = 4.5 * L
/// else:
///     V = 1.099 * L^0.45 - 0.099
/// ```
#[inline]
pub fn compress(l: f32) -> f32 {
    if l < 0.018 {
        4.5 * l
    } else {
        1.099 * l.powf(0.45) - 0.099
    }
}

/// Expands Rec.709 to linear light.
#[inline]
pub fn expand(v: f32) -> f32 {
    if v < 0.081 {
        v / 4.5
    } else {
        ((v + 0.099) / 1.099).powf(1.0 / 0.45)
    }
}
