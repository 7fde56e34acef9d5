//! Mixed integer and floating-point coefficients.

use std::fmt::{self, Display, Formatter};
use std::ops::{Add, Div, Mul, Neg, Sub};

/// A polynomial coefficient that is either an integer or a real number.
///
/// Arithmetic between two integers stays in the integers, except for
/// [division](Coefficient::div), which always produces a real result.
/// Arithmetic that mixes the two variants promotes to a real number.
#[derive(Copy, Clone, Debug)]
pub enum Coefficient {
    Integer(i64),
    Real(f64),
}

impl Coefficient {
    #[inline]
    pub fn is_zero(&self) -> bool {
        match self {
            Coefficient::Integer(n) => *n == 0,
            Coefficient::Real(r) => *r == 0.,
        }
    }

    #[inline]
    pub fn is_one(&self) -> bool {
        match self {
            Coefficient::Integer(n) => *n == 1,
            Coefficient::Real(r) => *r == 1.,
        }
    }

    #[inline]
    pub fn is_negative(&self) -> bool {
        match self {
            Coefficient::Integer(n) => *n < 0,
            Coefficient::Real(r) => *r < 0.,
        }
    }

    /// Returns `true` iff the coefficient is an integer or a finite real.
    /// A NaN or infinite real is representable but does not qualify as a
    /// polynomial coefficient.
    #[inline]
    pub fn is_finite(&self) -> bool {
        match self {
            Coefficient::Integer(_) => true,
            Coefficient::Real(r) => r.is_finite(),
        }
    }

    #[inline]
    pub fn abs(&self) -> Coefficient {
        match self {
            Coefficient::Integer(n) => Coefficient::Integer(n.abs()),
            Coefficient::Real(r) => Coefficient::Real(r.abs()),
        }
    }

    #[inline]
    pub fn to_f64(&self) -> f64 {
        match self {
            Coefficient::Integer(n) => *n as f64,
            Coefficient::Real(r) => *r,
        }
    }

    /// Floor division, rounding the quotient towards negative infinity.
    /// Two integers yield an integer; any real operand yields a real.
    pub fn floor_div(&self, other: &Coefficient) -> Coefficient {
        match (self, other) {
            (Coefficient::Integer(a), Coefficient::Integer(b)) => {
                Coefficient::Integer(floor_div_i64(*a, *b))
            }
            _ => Coefficient::Real((self.to_f64() / other.to_f64()).floor()),
        }
    }
}

/// Floor division on machine integers. `/` truncates towards zero, so the
/// quotient must be corrected when the remainder and divisor disagree in sign.
fn floor_div_i64(a: i64, b: i64) -> i64 {
    let q = a / b;
    if a % b != 0 && (a < 0) != (b < 0) {
        q - 1
    } else {
        q
    }
}

impl From<i64> for Coefficient {
    fn from(value: i64) -> Coefficient {
        Coefficient::Integer(value)
    }
}

impl From<i32> for Coefficient {
    fn from(value: i32) -> Coefficient {
        Coefficient::Integer(value as i64)
    }
}

impl From<f64> for Coefficient {
    fn from(value: f64) -> Coefficient {
        Coefficient::Real(value)
    }
}

impl PartialEq for Coefficient {
    /// Coefficients compare numerically across variants, so `Integer(2)`
    /// equals `Real(2.0)`.
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Coefficient::Integer(a), Coefficient::Integer(b)) => a == b,
            (Coefficient::Real(a), Coefficient::Real(b)) => a == b,
            _ => self.to_f64() == other.to_f64(),
        }
    }
}

impl Add for Coefficient {
    type Output = Coefficient;

    fn add(self, rhs: Self) -> Self::Output {
        match (self, rhs) {
            (Coefficient::Integer(a), Coefficient::Integer(b)) => Coefficient::Integer(a + b),
            _ => Coefficient::Real(self.to_f64() + rhs.to_f64()),
        }
    }
}

impl Sub for Coefficient {
    type Output = Coefficient;

    fn sub(self, rhs: Self) -> Self::Output {
        match (self, rhs) {
            (Coefficient::Integer(a), Coefficient::Integer(b)) => Coefficient::Integer(a - b),
            _ => Coefficient::Real(self.to_f64() - rhs.to_f64()),
        }
    }
}

impl Mul for Coefficient {
    type Output = Coefficient;

    fn mul(self, rhs: Self) -> Self::Output {
        match (self, rhs) {
            (Coefficient::Integer(a), Coefficient::Integer(b)) => Coefficient::Integer(a * b),
            _ => Coefficient::Real(self.to_f64() * rhs.to_f64()),
        }
    }
}

impl Div for Coefficient {
    type Output = Coefficient;

    /// True division. The result is always a real number, also for two
    /// integer operands.
    fn div(self, rhs: Self) -> Self::Output {
        Coefficient::Real(self.to_f64() / rhs.to_f64())
    }
}

impl Neg for Coefficient {
    type Output = Coefficient;

    fn neg(self) -> Self::Output {
        match self {
            Coefficient::Integer(n) => Coefficient::Integer(-n),
            Coefficient::Real(r) => Coefficient::Real(-r),
        }
    }
}

impl Display for Coefficient {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Coefficient::Integer(n) => write!(f, "{}", n),
            // the debug formatter keeps the decimal point on round reals
            Coefficient::Real(r) => write!(f, "{:?}", r),
        }
    }
}
