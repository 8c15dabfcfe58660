use core::fmt;

use num_bigint::BigInt;
use num_traits::{One, Signed, Zero};

/// Error returned when a coefficient sequence is not a valid polynomial.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvalidPolynomial {
    /// The sequence is non-empty and its first (leading) coefficient is zero.
    ZeroLeadingCoefficient,
}

impl fmt::Display for InvalidPolynomial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InvalidPolynomial::ZeroLeadingCoefficient => {
                write!(f, "invalid polynomial: the leading coefficient is zero")
            }
        }
    }
}

impl std::error::Error for InvalidPolynomial {}

/// Check that `coeffs` is a valid polynomial.
///
/// Coefficients are given highest degree first. The empty sequence is the
/// zero polynomial and always passes; otherwise the leading coefficient must
/// be non-zero.
///
/// # Errors
///
/// Returns `InvalidPolynomial::ZeroLeadingCoefficient` if the first
/// coefficient is zero.
///
/// # Example
///
/// ```
/// use introots::{validate, InvalidPolynomial};
///
/// assert!(validate(&[1, 2, 1]).is_ok());
/// assert!(validate::<i32>(&[]).is_ok());
/// assert_eq!(validate(&[0, 1]), Err(InvalidPolynomial::ZeroLeadingCoefficient));
/// ```
pub fn validate<C>(coeffs: &[C]) -> Result<(), InvalidPolynomial>
where
    C: Clone + Into<BigInt>,
{
    match coeffs.first() {
        Some(lead) => {
            let lead: BigInt = lead.clone().into();
            if lead.is_zero() {
                Err(InvalidPolynomial::ZeroLeadingCoefficient)
            } else {
                Ok(())
            }
        }
        None => Ok(()),
    }
}

/// Polynomial with arbitrary-precision integer coefficients.
///
/// Coefficients are stored in descending order of degree: `coeffs[0]` is
/// the leading coefficient and the last entry is the constant term.
///
/// The zero polynomial is represented as an empty coefficient vector.
/// Every other value has a non-zero leading coefficient.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Poly {
    coeffs: Vec<BigInt>,
}

impl Poly {
    /// Create a polynomial from coefficients, highest degree first.
    ///
    /// # Errors
    ///
    /// Returns `InvalidPolynomial::ZeroLeadingCoefficient` if the sequence
    /// is non-empty and starts with zero.
    ///
    /// # Example
    ///
    /// ```
    /// use introots::Poly;
    ///
    /// // x^2 + 2x + 1
    /// let p = Poly::new([1, 2, 1]).unwrap();
    /// assert_eq!(p.degree(), Some(2));
    ///
    /// assert!(Poly::new([0, 1]).is_err());
    /// ```
    pub fn new<I, C>(coeffs: I) -> Result<Self, InvalidPolynomial>
    where
        I: IntoIterator<Item = C>,
        C: Into<BigInt>,
    {
        let coeffs: Vec<BigInt> = coeffs.into_iter().map(Into::into).collect();
        validate(&coeffs)?;
        Ok(Self { coeffs })
    }

    /// Create the zero polynomial.
    pub fn zero() -> Self {
        Self { coeffs: Vec::new() }
    }

    /// Create the monic polynomial `(x - r1)(x - r2)...(x - rn)`.
    ///
    /// An empty set of roots gives the constant polynomial `1`.
    ///
    /// # Example
    ///
    /// ```
    /// use introots::Poly;
    ///
    /// // (x - 2)(x - 3) = x^2 - 5x + 6
    /// let p = Poly::from_roots([2, 3]);
    /// assert_eq!(p, Poly::new([1, -5, 6]).unwrap());
    /// ```
    pub fn from_roots<I, R>(roots: I) -> Self
    where
        I: IntoIterator<Item = R>,
        R: Into<BigInt>,
    {
        let mut coeffs = vec![BigInt::one()];
        for root in roots {
            let root: BigInt = root.into();
            // Multiply by (x - root): shift up one degree, subtract root * p.
            let mut next = coeffs.clone();
            next.push(BigInt::zero());
            for (i, c) in coeffs.iter().enumerate() {
                next[i + 1] -= &root * c;
            }
            coeffs = next;
        }
        Self { coeffs }
    }

    /// Check if this is the zero polynomial.
    pub fn is_zero(&self) -> bool {
        self.coeffs.is_empty()
    }

    /// Get the degree of the polynomial.
    ///
    /// Returns `None` for the zero polynomial, `Some(len - 1)` otherwise.
    pub fn degree(&self) -> Option<usize> {
        self.coeffs.len().checked_sub(1)
    }

    /// Get the leading coefficient, `None` for the zero polynomial.
    pub fn leading_coeff(&self) -> Option<&BigInt> {
        self.coeffs.first()
    }

    /// Get the constant term, `None` for the zero polynomial.
    pub fn constant_term(&self) -> Option<&BigInt> {
        self.coeffs.last()
    }

    /// Get a slice of all coefficients, highest degree first.
    pub fn coefficients(&self) -> &[BigInt] {
        &self.coeffs
    }

    /// Evaluate the polynomial at a point using Horner's method.
    ///
    /// The zero polynomial evaluates to 0 everywhere.
    ///
    /// # Example
    ///
    /// ```
    /// use introots::{BigInt, Poly};
    ///
    /// let p = Poly::new([1, 2, 1]).unwrap();
    /// assert_eq!(p.eval(3), BigInt::from(16));
    /// assert_eq!(p.eval(-1), BigInt::from(0));
    /// ```
    pub fn eval<X: Into<BigInt>>(&self, x: X) -> BigInt {
        self.eval_at(&x.into())
    }

    pub(crate) fn eval_at(&self, x: &BigInt) -> BigInt {
        // p(x) = (...((a_0 * x + a_1) * x + a_2) ...) * x + a_n
        let mut acc = BigInt::zero();
        for coeff in &self.coeffs {
            acc = acc * x + coeff;
        }
        acc
    }

    /// Check whether `x` is a root, i.e. `p(x) == 0`.
    ///
    /// Every point is a root of the zero polynomial.
    pub fn is_root<X: Into<BigInt>>(&self, x: X) -> bool {
        self.is_root_at(&x.into())
    }

    pub(crate) fn is_root_at(&self, x: &BigInt) -> bool {
        self.eval_at(x).is_zero()
    }
}

impl TryFrom<Vec<BigInt>> for Poly {
    type Error = InvalidPolynomial;

    fn try_from(coeffs: Vec<BigInt>) -> Result<Self, Self::Error> {
        validate(&coeffs)?;
        Ok(Self { coeffs })
    }
}

impl fmt::Debug for Poly {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Some(degree) = self.degree() else {
            return write!(f, "0");
        };

        let mut first = true;
        for (i, coeff) in self.coeffs.iter().enumerate() {
            if coeff.is_zero() {
                continue;
            }

            let negative = coeff.is_negative();
            if first {
                if negative {
                    write!(f, "-")?;
                }
            } else if negative {
                write!(f, " - ")?;
            } else {
                write!(f, " + ")?;
            }
            first = false;

            let magnitude = coeff.abs();
            let power = degree - i;
            match power {
                0 => write!(f, "{}", magnitude)?,
                1 if magnitude.is_one() => write!(f, "x")?,
                1 => write!(f, "{}x", magnitude)?,
                _ if magnitude.is_one() => write!(f, "x^{}", power)?,
                _ => write!(f, "{}x^{}", magnitude, power)?,
            }
        }

        Ok(())
    }
}

impl fmt::Display for Poly {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

/// Coefficient wire form: plain integers when they fit in `i64`, decimal
/// strings otherwise.
#[cfg(feature = "serde")]
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(untagged)]
enum WireCoeff {
    Small(i64),
    Big(String),
}

#[cfg(feature = "serde")]
impl serde::Serialize for Poly {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::Serialize;

        let values: Vec<WireCoeff> = self
            .coeffs
            .iter()
            .map(|c| match i64::try_from(c) {
                Ok(small) => WireCoeff::Small(small),
                Err(_) => WireCoeff::Big(c.to_string()),
            })
            .collect();
        values.serialize(serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Poly {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        use serde::de::Error;
        use serde::Deserialize;

        let values = Vec::<WireCoeff>::deserialize(deserializer)?;
        let coeffs = values
            .into_iter()
            .map(|v| match v {
                WireCoeff::Small(small) => Ok(BigInt::from(small)),
                WireCoeff::Big(text) => text.parse::<BigInt>().map_err(D::Error::custom),
            })
            .collect::<Result<Vec<_>, _>>()?;
        Self::try_from(coeffs).map_err(D::Error::custom)
    }
}
