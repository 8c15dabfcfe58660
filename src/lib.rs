//! Integer roots of polynomials with integer coefficients.
//!
//! A polynomial is a coefficient sequence ordered from the highest-degree
//! term down to the constant term. Roots are found by evaluating the
//! polynomial at every integer between `-|c|` and `|c|`, where `c` is the
//! constant term.
//!
//! ```
//! use introots::{BigInt, Poly};
//!
//! // x^4 - 3x^3 - 75x^2 + 475x - 750
//! let p = Poly::new([1, -3, -75, 475, -750]).unwrap();
//! assert_eq!(p.integer_roots(), [-10, 3, 5].map(BigInt::from));
//! ```

pub mod engine;
pub mod structures;
pub mod utils;

pub use num_bigint::BigInt;

pub use engine::{evaluate, integer_roots, is_root};
pub use structures::poly::{validate, InvalidPolynomial, Poly};
pub use structures::roots::Candidates;
pub use utils::{format_roots, parse_coefficients, ParseCoefficientError};
