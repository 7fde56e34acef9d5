use std::error::Error;
use std::fmt::{self, Display, Formatter};

/// The ways a polynomial operation can fail. Every failure is reported at
/// the offending call; no operation leaves its operands modified.
#[derive(Clone, Debug, PartialEq)]
pub enum PolynomialError {
    /// The constructor was given an empty coefficient sequence.
    NoCoefficients,
    /// The constructor was given a NaN or infinite coefficient.
    NonNumericCoefficient,
    /// Division by a non-constant polynomial was requested.
    PolynomialDivision,
    /// Checked coefficient access past the end of the sequence.
    CoefficientIndex { index: usize, len: usize },
    /// The discriminant of a quadratic is negative.
    NoRealRoots { discriminant: f64 },
    /// The degree is out of reach for closed-form root extraction.
    DegreeTooHigh { degree: usize },
    /// A vertex was requested for a polynomial that is not a parabola.
    NotAParabola { degree: usize },
}

impl Display for PolynomialError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            PolynomialError::NoCoefficients => {
                write!(f, "At least one coefficient must be supplied")
            }
            PolynomialError::NonNumericCoefficient => {
                write!(f, "Coefficients must be finite numbers")
            }
            PolynomialError::PolynomialDivision => {
                write!(f, "Cannot divide by a non-constant polynomial")
            }
            PolynomialError::CoefficientIndex { index, len } => {
                write!(
                    f,
                    "Coefficient index {} is out of bounds for {} stored coefficients",
                    index, len
                )
            }
            PolynomialError::NoRealRoots { discriminant } => {
                write!(f, "The discriminant {:?} is negative: no real roots", discriminant)
            }
            PolynomialError::DegreeTooHigh { degree } => {
                write!(
                    f,
                    "No closed-form root extraction for a polynomial of degree {}",
                    degree
                )
            }
            PolynomialError::NotAParabola { degree } => {
                write!(
                    f,
                    "Only a degree-2 polynomial has a vertex, the degree is {}",
                    degree
                )
            }
        }
    }
}

impl Error for PolynomialError {}
