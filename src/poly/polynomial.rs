use std::fmt::{self, Display, Formatter};
use std::ops::{Add, Div, Index, Mul, Neg, Sub};

use smallvec::{smallvec, SmallVec};
use smartstring::{LazyCompact, SmartString};

use crate::coefficient::Coefficient;
use crate::error::PolynomialError;
use crate::printer::{PolynomialPrinter, PrintOptions};

use super::{trim_leading_zeroes, INLINED_COEFFICIENTS};

/// The normalized coefficient sequence of a polynomial, highest power
/// first. Sequences up to [INLINED_COEFFICIENTS] entries are stored inline.
pub type CoefficientList = SmallVec<[Coefficient; INLINED_COEFFICIENTS]>;

/// A dense univariate polynomial.
///
/// The coefficient of the highest power comes first and the constant term
/// last, so `coefficients.len() - 1` is the degree. The sequence is never
/// empty and its leading entry is nonzero, unless the polynomial is the
/// single-entry zero polynomial.
///
/// Every operation builds a new polynomial from owned copies of the
/// operand sequences; operands are never modified.
#[derive(Clone, Debug)]
pub struct Polynomial {
    pub coefficients: CoefficientList,
    pub variable: SmartString<LazyCompact>,
}

impl Polynomial {
    /// Create a polynomial in the variable `x` from a coefficient
    /// sequence with the highest power first.
    ///
    /// The sequence is normalized by trimming leading zeroes; an all-zero
    /// sequence collapses to the zero polynomial. An empty sequence or a
    /// non-finite coefficient is rejected.
    pub fn new<I>(coefficients: I) -> Result<Polynomial, PolynomialError>
    where
        I: IntoIterator,
        I::Item: Into<Coefficient>,
    {
        Self::with_variable(coefficients, "x")
    }

    /// Create a polynomial in a custom variable. See [Polynomial::new].
    pub fn with_variable<I>(coefficients: I, variable: &str) -> Result<Polynomial, PolynomialError>
    where
        I: IntoIterator,
        I::Item: Into<Coefficient>,
    {
        let supplied: CoefficientList = coefficients.into_iter().map(Into::into).collect();

        if supplied.is_empty() {
            return Err(PolynomialError::NoCoefficients);
        }

        if supplied.iter().any(|c| !c.is_finite()) {
            return Err(PolynomialError::NonNumericCoefficient);
        }

        Ok(Self::from_normalized(supplied, variable.into()))
    }

    /// Normalize a coefficient sequence and wrap it. All operations route
    /// through here, so the stored sequence always satisfies the leading
    /// coefficient invariant.
    fn from_normalized(
        coefficients: CoefficientList,
        variable: SmartString<LazyCompact>,
    ) -> Polynomial {
        let trimmed = trim_leading_zeroes(&coefficients);

        let coefficients = if trimmed.is_empty() {
            smallvec![Coefficient::Integer(0)]
        } else {
            SmallVec::from_slice(trimmed)
        };

        Polynomial {
            coefficients,
            variable,
        }
    }

    /// The zero polynomial, inheriting the variable from `self`.
    pub fn zero(&self) -> Polynomial {
        Polynomial {
            coefficients: smallvec![Coefficient::Integer(0)],
            variable: self.variable.clone(),
        }
    }

    /// A constant polynomial, inheriting the variable from `self`.
    pub fn constant(&self, coefficient: Coefficient) -> Polynomial {
        Polynomial {
            coefficients: smallvec![coefficient],
            variable: self.variable.clone(),
        }
    }

    /// A polynomial with a single term, inheriting the variable from `self`.
    pub fn monomial(&self, coefficient: Coefficient, exponent: usize) -> Polynomial {
        if coefficient.is_zero() {
            return self.zero();
        }

        let mut coefficients: CoefficientList =
            smallvec![Coefficient::Integer(0); exponent + 1];
        coefficients[0] = coefficient;

        Polynomial {
            coefficients,
            variable: self.variable.clone(),
        }
    }

    #[inline]
    pub fn degree(&self) -> usize {
        self.coefficients.len() - 1
    }

    /// The number of stored coefficients, `degree + 1`.
    #[inline]
    pub fn len(&self) -> usize {
        self.coefficients.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.coefficients.is_empty()
    }

    #[inline]
    pub fn is_zero(&self) -> bool {
        self.coefficients.len() == 1 && self.coefficients[0].is_zero()
    }

    /// Returns true if the polynomial is constant.
    #[inline]
    pub fn is_constant(&self) -> bool {
        self.coefficients.len() <= 1
    }

    /// Get the leading coefficient.
    #[inline]
    pub fn lcoeff(&self) -> Coefficient {
        self.coefficients[0]
    }

    /// Get the constant term of the polynomial.
    #[inline]
    pub fn get_constant(&self) -> Coefficient {
        self.coefficients[self.coefficients.len() - 1]
    }

    /// Checked access to the coefficient at `index` in the stored
    /// (post-trim) sequence, counting from the leading coefficient.
    pub fn coefficient(&self, index: usize) -> Result<Coefficient, PolynomialError> {
        self.coefficients
            .get(index)
            .copied()
            .ok_or(PolynomialError::CoefficientIndex {
                index,
                len: self.coefficients.len(),
            })
    }

    /// Evaluate the polynomial at `x` with Horner's scheme.
    pub fn evaluate(&self, x: f64) -> f64 {
        self.coefficients
            .iter()
            .fold(0., |acc, c| acc * x + c.to_f64())
    }

    /// Returns true iff every coefficient value of `other` also appears
    /// somewhere in the coefficient sequence of `self`. This is membership
    /// per value, not a subsequence or divisibility test.
    pub fn contains(&self, other: &Polynomial) -> bool {
        other
            .coefficients
            .iter()
            .all(|c| self.coefficients.contains(c))
    }

    /// Divide by `div` if the divisor is a constant polynomial. General
    /// polynomial long division is not supported and is reported as
    /// [PolynomialError::PolynomialDivision].
    pub fn try_div(&self, div: &Polynomial) -> Result<Polynomial, PolynomialError> {
        if div.is_zero() {
            panic!("Cannot divide by the zero polynomial");
        }

        if !div.is_constant() {
            return Err(PolynomialError::PolynomialDivision);
        }

        Ok(self / div.coefficients[0])
    }

    /// Floor-divide every coefficient by the scalar `div`.
    pub fn floor_div<C: Into<Coefficient>>(&self, div: C) -> Polynomial {
        let div = div.into();
        let coefficients = self.coefficients.iter().map(|c| c.floor_div(&div)).collect();
        Polynomial::from_normalized(coefficients, self.variable.clone())
    }

    /// Create a printer for this polynomial that renders with the given
    /// options and can be used in a [format!] macro.
    pub fn printer(&self, opts: PrintOptions) -> PolynomialPrinter<'_> {
        PolynomialPrinter::new_with_options(self, opts)
    }
}

impl PartialEq for Polynomial {
    /// Two polynomials are equal iff their normalized coefficient
    /// sequences are equal. The variable name does not take part.
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.coefficients == other.coefficients
    }
}

impl Index<usize> for Polynomial {
    type Output = Coefficient;

    fn index(&self, index: usize) -> &Self::Output {
        &self.coefficients[index]
    }
}

impl Display for Polynomial {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        PolynomialPrinter::new(self).fmt(f)
    }
}

impl Add<&Polynomial> for &Polynomial {
    type Output = Polynomial;

    /// Add two polynomials, aligning the sequences by degree. The result
    /// takes the variable of the left operand.
    fn add(self, rhs: &Polynomial) -> Polynomial {
        let len = self.len().max(rhs.len());
        let mut coefficients: CoefficientList = smallvec![Coefficient::Integer(0); len];

        // align by degree: the constant terms sit at the end of both sequences
        for (c, s) in coefficients.iter_mut().rev().zip(self.coefficients.iter().rev()) {
            *c = *s;
        }
        for (c, o) in coefficients.iter_mut().rev().zip(rhs.coefficients.iter().rev()) {
            *c = *c + *o;
        }

        Polynomial::from_normalized(coefficients, self.variable.clone())
    }
}

impl Sub<&Polynomial> for &Polynomial {
    type Output = Polynomial;

    fn sub(self, rhs: &Polynomial) -> Polynomial {
        let len = self.len().max(rhs.len());
        let mut coefficients: CoefficientList = smallvec![Coefficient::Integer(0); len];

        for (c, s) in coefficients.iter_mut().rev().zip(self.coefficients.iter().rev()) {
            *c = *s;
        }
        for (c, o) in coefficients.iter_mut().rev().zip(rhs.coefficients.iter().rev()) {
            *c = *c - *o;
        }

        Polynomial::from_normalized(coefficients, self.variable.clone())
    }
}

impl Mul<&Polynomial> for &Polynomial {
    type Output = Polynomial;

    /// Multiply two polynomials by distributing every term pair.
    fn mul(self, rhs: &Polynomial) -> Polynomial {
        let mut coefficients: CoefficientList =
            smallvec![Coefficient::Integer(0); self.len() + rhs.len() - 1];

        for (i, a) in self.coefficients.iter().enumerate() {
            if a.is_zero() {
                continue;
            }

            for (j, b) in rhs.coefficients.iter().enumerate() {
                coefficients[i + j] = coefficients[i + j] + *a * *b;
            }
        }

        Polynomial::from_normalized(coefficients, self.variable.clone())
    }
}

impl Add for Polynomial {
    type Output = Polynomial;

    fn add(self, rhs: Polynomial) -> Polynomial {
        (&self).add(&rhs)
    }
}

impl Sub for Polynomial {
    type Output = Polynomial;

    fn sub(self, rhs: Polynomial) -> Polynomial {
        (&self).sub(&rhs)
    }
}

impl Mul for Polynomial {
    type Output = Polynomial;

    fn mul(self, rhs: Polynomial) -> Polynomial {
        (&self).mul(&rhs)
    }
}

impl Neg for Polynomial {
    type Output = Polynomial;

    fn neg(mut self) -> Polynomial {
        for c in &mut self.coefficients {
            *c = -*c;
        }
        self
    }
}

impl Add<Coefficient> for &Polynomial {
    type Output = Polynomial;

    /// Add a scalar to the constant term.
    fn add(self, rhs: Coefficient) -> Polynomial {
        let mut coefficients = self.coefficients.clone();
        let last = coefficients.len() - 1;
        coefficients[last] = coefficients[last] + rhs;
        Polynomial::from_normalized(coefficients, self.variable.clone())
    }
}

impl Sub<Coefficient> for &Polynomial {
    type Output = Polynomial;

    /// Subtract a scalar from the constant term.
    fn sub(self, rhs: Coefficient) -> Polynomial {
        let mut coefficients = self.coefficients.clone();
        let last = coefficients.len() - 1;
        coefficients[last] = coefficients[last] - rhs;
        Polynomial::from_normalized(coefficients, self.variable.clone())
    }
}

impl Mul<Coefficient> for &Polynomial {
    type Output = Polynomial;

    /// Scale every coefficient.
    fn mul(self, rhs: Coefficient) -> Polynomial {
        let coefficients = self.coefficients.iter().map(|c| *c * rhs).collect();
        Polynomial::from_normalized(coefficients, self.variable.clone())
    }
}

impl Div<Coefficient> for &Polynomial {
    type Output = Polynomial;

    /// Divide every coefficient. The results are real numbers, also for
    /// integer coefficients.
    fn div(self, rhs: Coefficient) -> Polynomial {
        let coefficients = self.coefficients.iter().map(|c| *c / rhs).collect();
        Polynomial::from_normalized(coefficients, self.variable.clone())
    }
}

macro_rules! impl_scalar_ops {
    ($($t:ty),*) => {
        $(
        impl Add<$t> for &Polynomial {
            type Output = Polynomial;

            fn add(self, rhs: $t) -> Polynomial {
                self + Coefficient::from(rhs)
            }
        }

        impl Add<$t> for Polynomial {
            type Output = Polynomial;

            fn add(self, rhs: $t) -> Polynomial {
                &self + Coefficient::from(rhs)
            }
        }

        impl Sub<$t> for &Polynomial {
            type Output = Polynomial;

            fn sub(self, rhs: $t) -> Polynomial {
                self - Coefficient::from(rhs)
            }
        }

        impl Sub<$t> for Polynomial {
            type Output = Polynomial;

            fn sub(self, rhs: $t) -> Polynomial {
                &self - Coefficient::from(rhs)
            }
        }

        impl Mul<$t> for &Polynomial {
            type Output = Polynomial;

            fn mul(self, rhs: $t) -> Polynomial {
                self * Coefficient::from(rhs)
            }
        }

        impl Mul<$t> for Polynomial {
            type Output = Polynomial;

            fn mul(self, rhs: $t) -> Polynomial {
                &self * Coefficient::from(rhs)
            }
        }

        impl Div<$t> for &Polynomial {
            type Output = Polynomial;

            fn div(self, rhs: $t) -> Polynomial {
                self / Coefficient::from(rhs)
            }
        }

        impl Div<$t> for Polynomial {
            type Output = Polynomial;

            fn div(self, rhs: $t) -> Polynomial {
                &self / Coefficient::from(rhs)
            }
        }
        )*
    };
}

impl_scalar_ops!(i64, f64);

impl Add<Coefficient> for Polynomial {
    type Output = Polynomial;

    fn add(self, rhs: Coefficient) -> Polynomial {
        &self + rhs
    }
}

impl Sub<Coefficient> for Polynomial {
    type Output = Polynomial;

    fn sub(self, rhs: Coefficient) -> Polynomial {
        &self - rhs
    }
}

impl Mul<Coefficient> for Polynomial {
    type Output = Polynomial;

    fn mul(self, rhs: Coefficient) -> Polynomial {
        &self * rhs
    }
}

impl Div<Coefficient> for Polynomial {
    type Output = Polynomial;

    fn div(self, rhs: Coefficient) -> Polynomial {
        &self / rhs
    }
}
