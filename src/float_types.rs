//! Scalar type, tolerances, and curve-resolution arithmetic.

/// Our Real scalar type. The engine's tolerance contract is specified for
/// double precision, so unlike some CSG libraries there is no `f32` switch.
pub type Real = f64;

/// Classification tolerance: a point within `EPSILON` of a plane is coplanar
/// with it. All robustness in the engine hangs off this single constant.
pub const EPSILON: Real = 1e-6;

/// Archimedes' constant (π)
pub const PI: Real = core::f64::consts::PI;

/// The full circle constant (τ)
pub const TAU: Real = core::f64::consts::TAU;

/// Number of straight segments used to approximate a circle of `radius`,
/// given a maximum chord length `fs` (length units) and a maximum angle per
/// segment `fa` (degrees): `min(360/fa, ceil(2πr / fs))`, never below 3.
pub fn segment_count(radius: Real, fs: Real, fa: Real) -> usize {
    let by_angle = 360.0 / fa;
    let by_chord = (TAU * radius / fs).ceil();
    (by_angle.min(by_chord) as usize).max(3)
}
