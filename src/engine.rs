//! Checked entry points over raw coefficient slices.
//!
//! Each function validates its input before doing any work and fails with
//! [`InvalidPolynomial`] when the leading coefficient is zero. Callers that
//! already hold a [`Poly`] can use its methods directly, since a `Poly` is
//! valid by construction.

use num_bigint::BigInt;

use crate::structures::poly::{InvalidPolynomial, Poly};

/// Evaluate the polynomial with coefficients `coeffs` (highest degree first) at `x`.
///
/// The empty slice is the zero polynomial and evaluates to 0.
///
/// # Example
///
/// ```
/// use introots::{evaluate, BigInt};
///
/// assert_eq!(evaluate(&[1, 2, 1], 3), Ok(BigInt::from(16)));
/// assert!(evaluate(&[0, 1], 3).is_err());
/// ```
pub fn evaluate<C, X>(coeffs: &[C], x: X) -> Result<BigInt, InvalidPolynomial>
where
    C: Clone + Into<BigInt>,
    X: Into<BigInt>,
{
    Ok(Poly::new(coeffs.iter().cloned())?.eval(x))
}

/// Check whether `x` is a root of the polynomial with coefficients `coeffs`.
///
/// # Example
///
/// ```
/// use introots::is_root;
///
/// assert_eq!(is_root(&[1, 2, 1], -1), Ok(true));
/// assert_eq!(is_root(&[1, 2, 1], 3), Ok(false));
/// ```
pub fn is_root<C, X>(coeffs: &[C], x: X) -> Result<bool, InvalidPolynomial>
where
    C: Clone + Into<BigInt>,
    X: Into<BigInt>,
{
    Ok(Poly::new(coeffs.iter().cloned())?.is_root(x))
}

/// Find all integer roots of the polynomial with coefficients `coeffs`.
///
/// See [`Poly::integer_roots`] for the search range and ordering.
///
/// # Example
///
/// ```
/// use introots::{integer_roots, BigInt};
///
/// assert_eq!(integer_roots(&[1, -5, 6]), Ok(vec![BigInt::from(2), BigInt::from(3)]));
/// assert_eq!(integer_roots::<i64>(&[]), Ok(vec![]));
/// ```
pub fn integer_roots<C>(coeffs: &[C]) -> Result<Vec<BigInt>, InvalidPolynomial>
where
    C: Clone + Into<BigInt>,
{
    Ok(Poly::new(coeffs.iter().cloned())?.integer_roots())
}
