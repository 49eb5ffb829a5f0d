//! Pure power-law companding.
//!
//! Used by the simplified sRGB, Adobe RGB (1998), Apple sRGB, ProPhoto
//! and most of the legacy working spaces (gamma 1.8 or 2.2).
//!
//! No clamping is applied: a negative input raised to a fractional power
//! yields NaN, and that NaN is returned as-is.

/// Expands an encoded value: `v^gamma`.
///
/// # Example
///
/// ```rust
/// use chroma_transfer::gamma::expand;
///
/// let linear = expand(0.5, 2.2);
/// assert!((linear - 0.2176).abs() < 1e-3);
/// ```
#[inline]
pub fn expand(v: f32, gamma: f32) -> f32 {
    v.powf(gamma)
}

/// Compresses a linear value: `l^(1/gamma)`.
///
/// # Example
///
/// ```rust
/// use chroma_transfer::gamma::compress;
///
/// let encoded = compress(0.218, 2.2);
/// assert!((encoded - 0.5).abs() < 0.01);
/// ```
#[inline]
pub fn compress(l: f32, gamma: f32) -> f32 {
    l.powf(1.0 / gamma)
}
