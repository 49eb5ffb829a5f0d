//! Error types for color conversion.
//!
//! Conversions themselves never fail: out-of-range or undefined inputs
//! produce whatever the formulas produce (including NaN). Errors only
//! arise from configuration and from bulk preconditions.

use chroma_core::CieXyz;
use thiserror::Error;

/// Color conversion error.
///
/// Covers the failure modes of the converter:
/// - Invalid configuration (white points, matrices)
/// - Bulk buffers of mismatched length
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ColorError {
    /// A bulk destination cannot hold every converted source element.
    ///
    /// Returned before anything is written.
    #[error("destination too short: {destination_len} elements for {source_len} sources")]
    DestinationTooShort {
        /// Number of source elements.
        source_len: usize,
        /// Number of destination slots.
        destination_len: usize,
    },

    /// A configured white point is non-finite or has a non-positive component.
    #[error("invalid white point {name}: {value:?}")]
    InvalidWhitePoint {
        /// Which option held the white point.
        name: &'static str,
        /// The rejected value.
        value: CieXyz,
    },

    /// A configured 3x3 matrix cannot be inverted.
    #[error("singular matrix: {0}")]
    SingularMatrix(&'static str),
}

/// Result type for color operations.
pub type ColorResult<T> = Result<T, ColorError>;
