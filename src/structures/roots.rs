use core::iter::FusedIterator;

use num_bigint::BigInt;
use num_traits::{One, Signed, Zero};
use tracing::{debug, trace};

use crate::structures::poly::Poly;

/// Ascending iterator over the closed integer interval `[-bound, bound]`.
///
/// # Example
///
/// ```
/// use introots::{BigInt, Candidates};
///
/// let xs: Vec<BigInt> = Candidates::new(&BigInt::from(2)).collect();
/// assert_eq!(xs, [-2, -1, 0, 1, 2].map(BigInt::from));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidates {
    next: BigInt,
    end: BigInt,
}

impl Candidates {
    /// Candidates from `-|bound|` to `|bound|` inclusive.
    pub fn new(bound: &BigInt) -> Self {
        let end = bound.abs();
        Self { next: -&end, end }
    }

    /// An iterator that yields nothing.
    pub fn empty() -> Self {
        Self {
            next: BigInt::one(),
            end: BigInt::zero(),
        }
    }

    /// Number of candidates still to be yielded.
    pub fn remaining(&self) -> BigInt {
        if self.next > self.end {
            BigInt::zero()
        } else {
            &self.end - &self.next + 1u32
        }
    }
}

impl Iterator for Candidates {
    type Item = BigInt;

    fn next(&mut self) -> Option<BigInt> {
        if self.next > self.end {
            return None;
        }
        let current = self.next.clone();
        self.next += 1u32;
        Some(current)
    }
}

impl FusedIterator for Candidates {}

impl Poly {
    /// Magnitude of the constant term, `None` for the zero polynomial.
    ///
    /// Every integer in `[-bound, bound]` is tested by
    /// [`integer_roots`](Self::integer_roots).
    pub fn search_bound(&self) -> Option<BigInt> {
        self.constant_term().map(Signed::abs)
    }

    /// The candidates [`integer_roots`](Self::integer_roots) will test, in order.
    pub fn candidates(&self) -> Candidates {
        match self.search_bound() {
            Some(bound) => Candidates::new(&bound),
            None => Candidates::empty(),
        }
    }

    /// Find every integer root in `[-|c|, |c|]`, where `c` is the constant term.
    ///
    /// Each integer in the range is evaluated, not just the divisors of `c`,
    /// so the cost is `O(|c| * degree)`. Roots come back strictly ascending,
    /// each listed once regardless of multiplicity.
    ///
    /// The zero polynomial returns an empty list even though every integer
    /// is one of its roots. A zero constant term leaves `0` as the only
    /// candidate.
    ///
    /// # Example
    ///
    /// ```
    /// use introots::{BigInt, Poly};
    ///
    /// let p = Poly::new([1, -3, -75, 475, -750]).unwrap();
    /// assert_eq!(p.integer_roots(), [-10, 3, 5].map(BigInt::from));
    /// ```
    pub fn integer_roots(&self) -> Vec<BigInt> {
        let Some(bound) = self.search_bound() else {
            debug!("zero polynomial, skipping root search");
            return Vec::new();
        };

        if bound.is_zero() {
            // p(0) is the constant term, so the single candidate is a root.
            debug!(polynomial = %self, "constant term is zero, only candidate is 0");
            return vec![BigInt::zero()];
        }

        debug!(polynomial = %self, bound = %bound, "searching for integer roots");
        let roots: Vec<BigInt> = Candidates::new(&bound)
            .filter(|x| self.is_root_at(x))
            .inspect(|root| trace!(root = %root, "found integer root"))
            .collect();
        debug!(count = roots.len(), "integer root search finished");
        roots
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ints(values: &[i64]) -> Vec<BigInt> {
        values.iter().copied().map(BigInt::from).collect()
    }

    fn roots_of(coeffs: &[i64]) -> Vec<BigInt> {
        Poly::new(coeffs.iter().copied()).unwrap().integer_roots()
    }

    #[test]
    fn candidates_range() {
        let xs: Vec<BigInt> = Candidates::new(&BigInt::from(-3)).collect();
        assert_eq!(xs, ints(&[-3, -2, -1, 0, 1, 2, 3]));
    }

    #[test]
    fn candidates_zero_bound() {
        let xs: Vec<BigInt> = Candidates::new(&BigInt::zero()).collect();
        assert_eq!(xs, ints(&[0]));
    }

    #[test]
    fn candidates_empty() {
        let mut it = Candidates::empty();
        assert_eq!(it.remaining(), BigInt::zero());
        assert_eq!(it.next(), None);
        assert_eq!(it.next(), None);
    }

    #[test]
    fn candidates_remaining_counts_down() {
        let mut it = Candidates::new(&BigInt::from(5));
        assert_eq!(it.remaining(), BigInt::from(11));
        it.next();
        it.next();
        assert_eq!(it.remaining(), BigInt::from(9));
        assert_eq!(it.count(), 9);
    }

    #[test]
    fn poly_candidates_follow_constant_term() {
        let p = Poly::new([2, 1]).unwrap();
        assert_eq!(p.search_bound(), Some(BigInt::one()));
        assert_eq!(p.candidates().collect::<Vec<_>>(), ints(&[-1, 0, 1]));

        let q = Poly::new([1, 0, -4]).unwrap();
        assert_eq!(q.search_bound(), Some(BigInt::from(4)));

        assert_eq!(Poly::zero().search_bound(), None);
        assert_eq!(Poly::zero().candidates().count(), 0);
    }

    #[test]
    fn zero_polynomial_has_no_listed_roots() {
        assert!(Poly::zero().integer_roots().is_empty());
    }

    #[test]
    fn known_roots() {
        assert_eq!(roots_of(&[1]), ints(&[]));
        assert_eq!(roots_of(&[1, 1]), ints(&[-1]));
        assert_eq!(roots_of(&[2, 1]), ints(&[]));
        assert_eq!(roots_of(&[1, -5, 6]), ints(&[2, 3]));
        assert_eq!(roots_of(&[1, 5, 6]), ints(&[-3, -2]));
        assert_eq!(roots_of(&[1, 2, 1]), ints(&[-1]));
        assert_eq!(roots_of(&[1, -2, 1]), ints(&[1]));
        assert_eq!(roots_of(&[1, -3, -75, 475, -750]), ints(&[-10, 3, 5]));
    }

    #[test]
    fn negative_constant_term() {
        // x^2 - 4
        assert_eq!(roots_of(&[1, 0, -4]), ints(&[-2, 2]));
        // -x + 7
        assert_eq!(roots_of(&[-1, 7]), ints(&[7]));
    }

    #[test]
    fn zero_constant_term_yields_only_zero() {
        assert_eq!(roots_of(&[1, 0]), ints(&[0]));
        // x^2 - x has roots 0 and 1, but the range collapses to {0}
        assert_eq!(roots_of(&[1, -1, 0]), ints(&[0]));
    }

    #[test]
    fn no_integer_roots() {
        // x^2 + 1
        assert!(roots_of(&[1, 0, 1]).is_empty());
        // 3x - 2
        assert!(roots_of(&[3, -2]).is_empty());
    }
}
