//! Math utility functions.

use num_traits::Float;

/// Round `value` to the nearest multiple of `1 / scale`.
pub fn round_to<T: Float>(value: T, scale: T) -> T {
    (value * scale).round() / scale
}

/// Wrap `value` into `[0, period)`.
pub fn wrap<T: Float>(value: T, period: T) -> T {
    let r = value % period;
    if r < T::zero() {
        r + period
    } else {
        r
    }
}

/// Returns true if `value` is in the half open range `[min, max)`. NaN is
/// never in range.
pub fn in_half_open<T: Float>(value: T, min: T, max: T) -> bool {
    value >= min && value < max
}

/// Returns true if `value` is in the closed range `[min, max]`. NaN is never
/// in range.
pub fn in_closed<T: Float>(value: T, min: T, max: T) -> bool {
    value >= min && value <= max
}
