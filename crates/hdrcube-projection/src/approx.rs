//! Scale-aware floating point comparison.

/// Tolerance used when deciding which cube face a projected point lies on.
pub const FACE_EPSILON: f64 = 1e-6;

/// Returns `true` when `a` and `b` are equal within `epsilon` scaled by `|a|`.
///
/// The tolerance never drops below `epsilon` itself, so values near zero are
/// compared absolutely. Exact equality is checked first so that matching
/// infinities compare equal.
#[inline]
#[must_use]
pub fn is_close_to(a: f64, b: f64, epsilon: f64) -> bool {
    if a == b {
        return true;
    }
    let tolerance = (epsilon * a.abs()).max(epsilon);
    (a - b).abs() < tolerance
}
