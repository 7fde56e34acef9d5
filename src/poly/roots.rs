//! Closed-form real root extraction for low-degree polynomials.

use std::fmt::{self, Display, Formatter};

use tracing::debug;

use crate::error::PolynomialError;
use crate::poly::polynomial::Polynomial;

use super::count_trailing_zeroes;

/// The real roots of a linear or quadratic polynomial.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Roots {
    /// The single zero of a linear polynomial.
    Linear(f64),
    /// The repeated root of a quadratic with a vanishing discriminant.
    Repeated(f64),
    /// The two distinct real roots of a quadratic, rounded to three
    /// decimal places.
    Distinct(f64, f64),
}

/// The outcome of root extraction. `zero_root` marks that a power of the
/// variable was factored out during degree reduction, which contributes a
/// root at the origin on top of [Roots].
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct RootFindings {
    pub roots: Roots,
    pub zero_root: bool,
}

/// The vertex of a parabola.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ParabolaVertex {
    pub x: f64,
    pub y: f64,
}

fn round_to_3(x: f64) -> f64 {
    (x * 1000.).round() / 1000.
}

impl Polynomial {
    /// Extract the real roots in closed form.
    ///
    /// Linear and quadratic polynomials are solved directly. A polynomial
    /// of degree `d > 2` whose `d - 2` lowest coefficients are all zero is
    /// first reduced by factoring out that power of the variable, which
    /// contributes a root at the origin; the remaining quadratic is then
    /// solved. Anything else has no closed form here and is reported as
    /// [PolynomialError::DegreeTooHigh].
    pub fn real_roots(&self) -> Result<RootFindings, PolynomialError> {
        let mut coefficients = self.coefficients.clone();
        let mut zero_root = false;

        // reduce by factoring out powers of the variable, then solve
        loop {
            let degree = coefficients.len() - 1;

            if degree == 2 {
                let a = coefficients[0].to_f64();
                let b = coefficients[1].to_f64();
                let c = coefficients[2].to_f64();

                let discriminant = b * b - 4. * a * c;

                if discriminant == 0. {
                    return Ok(RootFindings {
                        roots: Roots::Repeated(-b / (2. * a)),
                        zero_root,
                    });
                }

                if discriminant < 0. {
                    return Err(PolynomialError::NoRealRoots { discriminant });
                }

                let sqrt = discriminant.sqrt();
                return Ok(RootFindings {
                    roots: Roots::Distinct(
                        round_to_3((-b + sqrt) / (2. * a)),
                        round_to_3((-b - sqrt) / (2. * a)),
                    ),
                    zero_root,
                });
            }

            let trailing = count_trailing_zeroes(&coefficients);
            if degree > 2 && degree - 2 == trailing {
                debug!("factoring out a root at the origin of multiplicity {}", trailing);
                coefficients.truncate(coefficients.len() - trailing);
                zero_root = true;
                continue;
            }

            if degree == 1 {
                let root = -coefficients[1].to_f64() / coefficients[0].to_f64();
                return Ok(RootFindings {
                    roots: Roots::Linear(root),
                    zero_root,
                });
            }

            return Err(PolynomialError::DegreeTooHigh { degree });
        }
    }

    /// The vertex of a degree-2 polynomial, at `x = -b / 2a`.
    pub fn parabola_vertex(&self) -> Result<ParabolaVertex, PolynomialError> {
        if self.degree() != 2 {
            return Err(PolynomialError::NotAParabola {
                degree: self.degree(),
            });
        }

        let x = -self.coefficients[1].to_f64() / (2. * self.coefficients[0].to_f64());
        Ok(ParabolaVertex {
            x,
            y: self.evaluate(x),
        })
    }
}

impl Display for RootFindings {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self.roots {
            Roots::Linear(x) => write!(f, "Zero at ({:?}, 0.0)", x)?,
            Roots::Repeated(x) => write!(f, "Root at ({:?}, 0.0)", x)?,
            Roots::Distinct(x1, x2) => {
                write!(f, "Roots at ({:?}, 0.0) and ({:?}, 0.0)", x1, x2)?
            }
        }

        if self.zero_root {
            f.write_str(" and (0.0, 0.0)")?;
        }

        Ok(())
    }
}

impl Display for ParabolaVertex {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Vertex at ({:?}, {:?})", self.x, self.y)
    }
}

#[cfg(test)]
mod test {
    use crate::error::PolynomialError;
    use crate::poly::polynomial::Polynomial;

    use super::{ParabolaVertex, RootFindings, Roots};

    #[test]
    fn distinct_quadratic_roots() {
        // x^2 - 4: discriminant 16
        let p = Polynomial::new([1, 0, -4]).unwrap();
        let findings = p.real_roots().unwrap();

        assert_eq!(
            findings,
            RootFindings {
                roots: Roots::Distinct(2., -2.),
                zero_root: false,
            }
        );
        assert_eq!(findings.to_string(), "Roots at (2.0, 0.0) and (-2.0, 0.0)");
    }

    #[test]
    fn repeated_quadratic_root() {
        // (x + 1)^2
        let p = Polynomial::new([1, 2, 1]).unwrap();
        let findings = p.real_roots().unwrap();

        assert_eq!(findings.roots, Roots::Repeated(-1.));
        assert!(!findings.zero_root);
        assert_eq!(findings.to_string(), "Root at (-1.0, 0.0)");
    }

    #[test]
    fn negative_discriminant_has_no_real_roots() {
        let p = Polynomial::new([1, 0, 1]).unwrap();
        assert_eq!(
            p.real_roots().unwrap_err(),
            PolynomialError::NoRealRoots { discriminant: -4. }
        );
    }

    #[test]
    fn quadratic_with_one_trailing_zero_solves_directly() {
        // x^2 - 3x: a trailing zero, but already a quadratic
        let p = Polynomial::new([1, -3, 0]).unwrap();
        let findings = p.real_roots().unwrap();

        assert_eq!(findings.roots, Roots::Distinct(3., 0.));
        assert!(!findings.zero_root);
    }

    #[test]
    fn trailing_zeroes_reduce_to_a_quadratic() {
        // x^4 - 4x^2 = x^2 (x^2 - 4)
        let p = Polynomial::new([1, 0, -4, 0, 0]).unwrap();
        let findings = p.real_roots().unwrap();

        assert_eq!(findings.roots, Roots::Distinct(2., -2.));
        assert!(findings.zero_root);
        assert_eq!(
            findings.to_string(),
            "Roots at (2.0, 0.0) and (-2.0, 0.0) and (0.0, 0.0)"
        );
    }

    #[test]
    fn reduction_can_end_in_a_repeated_root() {
        // x^4 + 2x^3 + x^2 = x^2 (x + 1)^2
        let p = Polynomial::new([1, 2, 1, 0, 0]).unwrap();
        let findings = p.real_roots().unwrap();

        assert_eq!(findings.roots, Roots::Repeated(-1.));
        assert!(findings.zero_root);
        assert_eq!(findings.to_string(), "Root at (-1.0, 0.0) and (0.0, 0.0)");
    }

    #[test]
    fn linear_zero() {
        // 2x + 4
        let p = Polynomial::new([2, 4]).unwrap();
        let findings = p.real_roots().unwrap();

        assert_eq!(findings.roots, Roots::Linear(-2.));
        assert_eq!(findings.to_string(), "Zero at (-2.0, 0.0)");
    }

    #[test]
    fn irreducible_high_degrees_are_rejected() {
        // x^3: three trailing zeroes, not the required one
        let p = Polynomial::new([1, 0, 0, 0]).unwrap();
        assert_eq!(
            p.real_roots().unwrap_err(),
            PolynomialError::DegreeTooHigh { degree: 3 }
        );

        // x^3 + x^2 + x + 1: no trailing zeroes at all
        let q = Polynomial::new([1, 1, 1, 1]).unwrap();
        assert_eq!(
            q.real_roots().unwrap_err(),
            PolynomialError::DegreeTooHigh { degree: 3 }
        );
    }

    #[test]
    fn constants_have_no_roots() {
        let p = Polynomial::new([5]).unwrap();
        assert_eq!(
            p.real_roots().unwrap_err(),
            PolynomialError::DegreeTooHigh { degree: 0 }
        );
    }

    #[test]
    fn roots_are_rounded_to_three_decimals() {
        // 3x^2 - x - 1: roots (1 ± sqrt(13)) / 6
        let p = Polynomial::new([3, -1, -1]).unwrap();
        let findings = p.real_roots().unwrap();

        assert_eq!(findings.roots, Roots::Distinct(0.768, -0.434));
    }

    #[test]
    fn vertex() {
        let p = Polynomial::new([1, 0, -4]).unwrap();
        let vertex = p.parabola_vertex().unwrap();
        assert_eq!(vertex, ParabolaVertex { x: 0., y: -4. });
        assert_eq!(vertex.to_string(), "Vertex at (0.0, -4.0)");

        // x^2 - 2x + 2 has its vertex off the axes
        let q = Polynomial::new([1, -2, 2]).unwrap();
        assert_eq!(q.parabola_vertex().unwrap(), ParabolaVertex { x: 1., y: 1. });
    }

    #[test]
    fn vertex_of_a_non_parabola_is_rejected() {
        let p = Polynomial::new([2, 4]).unwrap();
        assert_eq!(
            p.parabola_vertex().unwrap_err(),
            PolynomialError::NotAParabola { degree: 1 }
        );

        let c = Polynomial::new([1, 0, 0, 1]).unwrap();
        assert_eq!(
            c.parabola_vertex().unwrap_err(),
            PolynomialError::NotAParabola { degree: 3 }
        );
    }
}
