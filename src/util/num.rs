/// Largest integer value exactly representable as an `f64` (`2^53 - 1`).
pub const MAX_SAFE_U64_INT: u64 = 9_007_199_254_740_991;

/// Safely converts an `f64` to `usize` if the value is finite, non-negative,
/// within range, and not fractional.
///
/// ## Errors
/// Returns `Err(error)` for non-finite, negative, out-of-range, or fractional
/// values.
///
/// ## Example
/// ```
/// use rcalc::util::num::f64_to_usize_checked;
///
/// assert_eq!(f64_to_usize_checked(7.0, "bad"), Ok(7));
/// assert_eq!(f64_to_usize_checked(-5.0, "bad"), Err("bad"));
/// assert_eq!(f64_to_usize_checked(1.5, "bad"), Err("bad"));
/// assert_eq!(f64_to_usize_checked(f64::NAN, "bad"), Err("bad"));
/// ```
#[allow(clippy::cast_possible_truncation)]
#[allow(clippy::cast_precision_loss)]
#[allow(clippy::cast_sign_loss)]
pub fn f64_to_usize_checked<E>(value: f64, error: E) -> Result<usize, E> {
    if !value.is_finite() || value < 0.0 || value > MAX_SAFE_U64_INT as f64 {
        return Err(error);
    }
    if value.fract() != 0.0 {
        return Err(error);
    }
    usize::try_from(value as u64).map_err(|_| error)
}

/// Truncates an `f64` toward zero and converts it to `usize`.
///
/// Same range checks as [`f64_to_usize_checked`], but a fractional part is
/// dropped instead of rejected.
///
/// ## Errors
/// Returns `Err(error)` for non-finite, negative or out-of-range values.
///
/// ## Example
/// ```
/// use rcalc::util::num::f64_to_usize_truncated;
///
/// assert_eq!(f64_to_usize_truncated(2.9, "bad"), Ok(2));
/// ```
pub fn f64_to_usize_truncated<E>(value: f64, error: E) -> Result<usize, E> {
    f64_to_usize_checked(value.trunc(), error)
}

/// Floors an `f64` and clamps it into `usize`.
///
/// Negative values and `NaN` become `0`, values beyond `usize::MAX` become
/// `usize::MAX`. Used for repetition and truncation counts.
///
/// ## Example
/// ```
/// use rcalc::util::num::f64_to_count;
///
/// assert_eq!(f64_to_count(2.7), 2);
/// assert_eq!(f64_to_count(-3.0), 0);
/// assert_eq!(f64_to_count(f64::NAN), 0);
/// ```
#[must_use]
#[allow(clippy::cast_possible_truncation)]
#[allow(clippy::cast_sign_loss)]
pub fn f64_to_count(value: f64) -> usize {
    value.floor().max(0.0) as usize
}
