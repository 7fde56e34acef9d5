use std::fmt::{self, Display, Formatter, Write};

use crate::poly::polynomial::Polynomial;

/// Output customization for [PolynomialPrinter]. The defaults produce the
/// plain rendering, e.g. `5x^2 + 3x + 1`.
#[derive(Debug, Copy, Clone)]
pub struct PrintOptions {
    /// Write `x**2` instead of `x^2`.
    pub double_star_for_exponentiation: bool,
    /// Write `3*x` instead of `3x`.
    pub explicit_multiplication: bool,
}

impl PrintOptions {
    pub const fn new() -> PrintOptions {
        PrintOptions {
            double_star_for_exponentiation: false,
            explicit_multiplication: false,
        }
    }
}

impl Default for PrintOptions {
    fn default() -> Self {
        Self::new()
    }
}

/// Renders a polynomial as a human-readable expression, highest power
/// first, suitable as an argument to [format!].
///
/// Zero terms are skipped, magnitude-1 coefficients of non-constant terms
/// drop the digit, and only the constant term appears without the
/// variable. A polynomial that stores a single coefficient renders as
/// just that number.
pub struct PolynomialPrinter<'a> {
    pub poly: &'a Polynomial,
    pub opts: PrintOptions,
}

impl<'a> PolynomialPrinter<'a> {
    pub fn new(poly: &'a Polynomial) -> PolynomialPrinter<'a> {
        PolynomialPrinter {
            poly,
            opts: PrintOptions::default(),
        }
    }

    pub fn new_with_options(poly: &'a Polynomial, opts: PrintOptions) -> PolynomialPrinter<'a> {
        PolynomialPrinter { poly, opts }
    }
}

impl Display for PolynomialPrinter<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let poly = self.poly;

        if poly.len() == 1 {
            return write!(f, "{}", poly.coefficients[0]);
        }

        let degree = poly.degree();
        let mut first = true;

        for (index, coefficient) in poly.coefficients.iter().enumerate() {
            if coefficient.is_zero() {
                continue;
            }

            let exponent = degree - index;

            if first {
                if coefficient.is_negative() {
                    f.write_char('-')?;
                }
            } else if coefficient.is_negative() {
                f.write_str(" - ")?;
            } else {
                f.write_str(" + ")?;
            }
            first = false;

            let magnitude = coefficient.abs();

            if exponent == 0 {
                // a constant 1 or -1 still shows the digit
                if magnitude.is_one() {
                    f.write_char('1')?;
                } else {
                    write!(f, "{}", magnitude)?;
                }
                continue;
            }

            if !magnitude.is_one() {
                write!(f, "{}", magnitude)?;
                if self.opts.explicit_multiplication {
                    f.write_char('*')?;
                }
            }

            f.write_str(&poly.variable)?;

            if exponent >= 2 {
                if self.opts.double_star_for_exponentiation {
                    f.write_str("**")?;
                } else {
                    f.write_char('^')?;
                }
                write!(f, "{}", exponent)?;
            }
        }

        Ok(())
    }
}
