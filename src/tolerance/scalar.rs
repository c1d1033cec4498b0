//! Relative-epsilon scalar comparisons.

use num_traits::Float;

/// Tests whether two scalars are equal within a relative tolerance.
///
/// `a` and `b` compare equal when `|a - b| <= max(|a|, |b|) * eps`,
/// so the tolerance scales with the magnitude of the operands. The test
/// is symmetric in its arguments. Pass `F::epsilon()` for the tightest
/// meaningful comparison.
#[inline]
pub fn approx_eq<F: Float>(a: F, b: F, eps: F) -> bool {
    (a - b).abs() <= a.abs().max(b.abs()) * eps
}

/// Tests whether `a` is smaller than `b` by more than a relative tolerance.
///
/// Returns `true` when `b - a > max(|a|, |b|) * eps`. Together with
/// [`approx_eq`] this partitions scalar pairs into less, equal and
/// greater without ever comparing raw floats for equality.
#[inline]
pub fn strictly_less<F: Float>(a: F, b: F, eps: F) -> bool {
    b - a > a.abs().max(b.abs()) * eps
}
