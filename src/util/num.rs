use crate::error::ArithmeticError;

/// Converts an exact integer literal to the result type.
///
/// Every result is an `f64`. Values up to `2^53` convert exactly; larger
/// ones round to the nearest representable `f64`.
///
/// ## Example
/// ```
/// use tally::util::num::u64_to_f64;
///
/// assert_eq!(u64_to_f64(42), 42.0);
/// assert_eq!(u64_to_f64(9_007_199_254_740_991), 9_007_199_254_740_991.0);
/// ```
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub const fn u64_to_f64(value: u64) -> f64 {
    value as f64
}

/// Checks that a value is still a finite number.
///
/// ## Errors
/// Returns [`ArithmeticError::Overflow`] at `position` for infinite or NaN
/// values.
///
/// ## Example
/// ```
/// use tally::{error::ArithmeticError, util::num::finite_checked};
///
/// assert_eq!(finite_checked(1.5, 0), Ok(1.5));
/// assert_eq!(finite_checked(f64::INFINITY, 7),
///            Err(ArithmeticError::Overflow { position: 7 }));
/// ```
pub fn finite_checked(value: f64, position: usize) -> Result<f64, ArithmeticError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(ArithmeticError::Overflow { position })
    }
}
