use core::fmt;

use num_bigint::{BigInt, ParseBigIntError};

/// Error returned when a coefficient token is not a base-10 integer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseCoefficientError {
    /// Zero-based position of the token in the input.
    pub index: usize,
    /// The token as given.
    pub token: String,
    source: ParseBigIntError,
}

impl fmt::Display for ParseCoefficientError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "coefficient {} ({:?}) is not an integer",
            self.index + 1,
            self.token
        )
    }
}

impl std::error::Error for ParseCoefficientError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.source)
    }
}

/// Convert textual tokens into polynomial coefficients, keeping their order.
///
/// Each token must be an optionally signed base-10 integer. Surrounding
/// whitespace is ignored.
///
/// # Example
///
/// ```
/// use introots::{parse_coefficients, BigInt};
///
/// let coeffs = parse_coefficients(&["2", "-3"]).unwrap();
/// assert_eq!(coeffs, vec![BigInt::from(2), BigInt::from(-3)]);
/// assert!(parse_coefficients(&["1", "x"]).is_err());
/// ```
pub fn parse_coefficients<S: AsRef<str>>(
    tokens: &[S],
) -> Result<Vec<BigInt>, ParseCoefficientError> {
    tokens
        .iter()
        .enumerate()
        .map(|(index, token)| {
            let token = token.as_ref();
            token
                .trim()
                .parse::<BigInt>()
                .map_err(|source| ParseCoefficientError {
                    index,
                    token: token.to_owned(),
                    source,
                })
        })
        .collect()
}

/// Render roots one per line in the given order.
///
/// Each line ends with a newline; an empty slice renders as the empty string.
///
/// # Example
///
/// ```
/// use introots::{format_roots, BigInt};
///
/// assert_eq!(format_roots(&[BigInt::from(2), BigInt::from(3)]), "2\n3\n");
/// assert_eq!(format_roots(&[]), "");
/// ```
pub fn format_roots(roots: &[BigInt]) -> String {
    let mut out = String::new();
    for root in roots {
        out.push_str(&root.to_string());
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn parses_signed_tokens() {
        let coeffs = parse_coefficients(&["1", "-3", "-75", "475", "-750"]).unwrap();
        let expected: Vec<BigInt> = [1, -3, -75, 475, -750].map(BigInt::from).to_vec();
        assert_eq!(coeffs, expected);
    }

    #[test]
    fn parses_owned_strings() {
        let tokens = vec![String::from(" 4 "), String::from("0")];
        assert_eq!(
            parse_coefficients(&tokens).unwrap(),
            vec![BigInt::from(4), BigInt::from(0)]
        );
    }

    #[test]
    fn parses_large_values() {
        let coeffs = parse_coefficients(&["99999999999999999999999"]).unwrap();
        assert_eq!(coeffs[0].to_string(), "99999999999999999999999");
    }

    #[test]
    fn empty_input() {
        let tokens: [&str; 0] = [];
        assert!(parse_coefficients(&tokens).unwrap().is_empty());
    }

    #[test]
    fn rejects_non_integers() {
        for bad in ["abc", "1.5", "", "--2", "1e3"] {
            let err = parse_coefficients(&["1", bad]).unwrap_err();
            assert_eq!(err.index, 1);
            assert_eq!(err.token, bad);
            assert!(err.source().is_some());
        }
    }

    #[test]
    fn error_message_names_token() {
        let err = parse_coefficients(&["7", "8", "nine"]).unwrap_err();
        assert_eq!(err.to_string(), "coefficient 3 (\"nine\") is not an integer");
    }

    #[test]
    fn formats_one_root_per_line() {
        let roots: Vec<BigInt> = [-10, 3, 5].map(BigInt::from).to_vec();
        assert_eq!(format_roots(&roots), "-10\n3\n5\n");
        assert_eq!(format_roots(&[BigInt::from(0)]), "0\n");
        assert_eq!(format_roots(&[]), "");
    }
}
