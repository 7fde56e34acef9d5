//! Dense univariate polynomials and closed-form real root extraction.
//!
//! The coefficient sequence of a [Polynomial](polynomial::Polynomial) is
//! stored with the coefficient of the highest power first, so the last
//! entry is the constant term. The sequence is kept normalized: leading
//! zeroes are trimmed at construction, and an all-zero input collapses to
//! the single-entry zero polynomial. The helpers in this module perform
//! the normalization scans.

pub mod polynomial;
pub mod roots;

use crate::coefficient::Coefficient;

pub const INLINED_COEFFICIENTS: usize = 8;

/// Strip leading zero coefficients, so that the first retained entry is
/// significant and the sequence length reflects the true degree. An
/// all-zero sequence yields the empty slice.
pub fn trim_leading_zeroes(coefficients: &[Coefficient]) -> &[Coefficient] {
    let start = coefficients
        .iter()
        .position(|c| !c.is_zero())
        .unwrap_or(coefficients.len());
    &coefficients[start..]
}

/// Count the consecutive zero coefficients at the end of the sequence.
/// A nonzero constant term gives 0.
pub fn count_trailing_zeroes(coefficients: &[Coefficient]) -> usize {
    coefficients.iter().rev().take_while(|c| c.is_zero()).count()
}
