/// Numeric helpers.
///
/// This module fixes the result representation: every value an expression
/// produces is an `f64`. It converts integer literals into that type and
/// rejects intermediate results that leave the finite range.
pub mod num;
