//! CIE constants shared by the Lab, Luv and L* formulas.

/// CIE ε = 216 / 24389 (the actual CIE standard, not the rounded 0.008856).
pub const EPSILON: f32 = 216.0 / 24389.0;

/// CIE κ = 24389 / 27 (the actual CIE standard, not the rounded 903.3).
pub const KAPPA: f32 = 24389.0 / 27.0;
