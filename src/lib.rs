//! Unipoly is a small univariate polynomial algebra library.
//!
//! A polynomial is stored as a dense coefficient sequence with the
//! coefficient of the highest power first. The crate provides the usual
//! arithmetic and evaluation, configurable string rendering, and
//! closed-form real root extraction for polynomials that are linear,
//! quadratic, or reducible to a quadratic by factoring out a power of
//! the variable.
//!
//! For example:
//!
//! ```
//! use unipoly::poly::polynomial::Polynomial;
//!
//! fn main() -> Result<(), unipoly::error::PolynomialError> {
//!     let p = Polynomial::new([1, 0, -4])?;
//!     assert_eq!(p.to_string(), "x^2 - 4");
//!     println!("{} has {}", p, p.real_roots()?);
//!     Ok(())
//! }
//! ```

pub mod coefficient;
pub mod error;
pub mod poly;
pub mod printer;
