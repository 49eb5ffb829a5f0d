//! LMS cone response.

/// Long, medium and short cone responses.
///
/// The basis is whatever LMS matrix the converter is configured with;
/// the value itself does not record it.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Lms {
    /// Long-wavelength (red) cone
    pub l: f32,
    /// Medium-wavelength (green) cone
    pub m: f32,
    /// Short-wavelength (blue) cone
    pub s: f32,
}

impl Lms {
    /// Creates a new LMS value.
    #[inline]
    pub const fn new(l: f32, m: f32, s: f32) -> Self {
        Self { l, m, s }
    }

    /// Returns `[L, M, S]`.
    #[inline]
    pub const fn to_array(self) -> [f32; 3] {
        [self.l, self.m, self.s]
    }
}
