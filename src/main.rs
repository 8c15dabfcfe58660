//! introots CLI - print the integer roots of a polynomial

use std::fmt;
use std::process::ExitCode;

use clap::{CommandFactory, Parser, ValueEnum};
use introots::{
    format_roots, parse_coefficients, BigInt, InvalidPolynomial, ParseCoefficientError, Poly,
};
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

const EXAMPLE: &str = "\
Example:

Find the roots of x^4 - 3x^3 - 75x^2 + 475x - 750.

$ introots 1 -3 -75 475 -750
-10
3
5";

/// Verbosity level
#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq, PartialOrd, Ord)]
enum Verbosity {
    /// Only the roots
    Normal,
    /// Log the polynomial being searched
    Verbose,
    /// Log the search range and root count
    Debug,
    /// Log every root as it is found
    Trace,
}

/// Find integer roots of a polynomial with integer coefficients.
#[derive(Parser, Debug)]
#[command(name = "introots")]
#[command(version)]
#[command(about = "Find integer roots of a polynomial with integer coefficients")]
#[command(after_help = EXAMPLE)]
struct Args {
    /// Coefficients from the highest-degree term down to the constant term
    #[arg(value_name = "COEFF", allow_negative_numbers = true)]
    coefficients: Vec<String>,

    /// Log level for diagnostics written to stderr
    #[arg(short, long, value_enum, default_value = "normal")]
    verbosity: Verbosity,

    /// Refuse to search when the constant term's magnitude exceeds N
    #[arg(long, value_name = "N")]
    max_bound: Option<u64>,
}

#[derive(Debug)]
enum CliError {
    Parse(ParseCoefficientError),
    Invalid(InvalidPolynomial),
    BoundExceeded { bound: BigInt, max: u64 },
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::Parse(e) => write!(f, "{}", e),
            CliError::Invalid(e) => write!(f, "{}", e),
            CliError::BoundExceeded { bound, max } => write!(
                f,
                "search bound {} exceeds --max-bound {}",
                bound, max
            ),
        }
    }
}

impl std::error::Error for CliError {}

impl From<ParseCoefficientError> for CliError {
    fn from(e: ParseCoefficientError) -> Self {
        CliError::Parse(e)
    }
}

impl From<InvalidPolynomial> for CliError {
    fn from(e: InvalidPolynomial) -> Self {
        CliError::Invalid(e)
    }
}

fn init_tracing(verbosity: Verbosity) {
    let level = match verbosity {
        Verbosity::Normal => return,
        Verbosity::Verbose => Level::INFO,
        Verbosity::Debug => Level::DEBUG,
        Verbosity::Trace => Level::TRACE,
    };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .finish();
    if let Err(e) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("Failed to set tracing subscriber: {}", e);
    }
}

/// Parse, validate and search, returning the rendered roots.
fn run(args: &Args) -> Result<String, CliError> {
    let coeffs = parse_coefficients(&args.coefficients)?;
    let poly = Poly::new(coeffs)?;

    if let (Some(max), Some(bound)) = (args.max_bound, poly.search_bound()) {
        if bound > BigInt::from(max) {
            return Err(CliError::BoundExceeded { bound, max });
        }
    }

    info!(polynomial = %poly, "finding integer roots");
    let roots = poly.integer_roots();
    info!(count = roots.len(), "done");
    Ok(format_roots(&roots))
}

fn main() -> ExitCode {
    let args = Args::parse();

    if args.coefficients.is_empty() {
        return match Args::command().print_help() {
            Ok(()) => ExitCode::SUCCESS,
            Err(e) => {
                eprintln!("Error: {}", e);
                ExitCode::FAILURE
            }
        };
    }

    init_tracing(args.verbosity);

    match run(&args) {
        Ok(output) => {
            print!("{}", output);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(tokens: &[&str]) -> Args {
        Args::try_parse_from(std::iter::once("introots").chain(tokens.iter().copied())).unwrap()
    }

    #[test]
    fn cli_definition_is_valid() {
        Args::command().debug_assert();
    }

    #[test]
    fn negative_coefficients_are_positional() {
        let a = args(&["1", "-5", "6"]);
        assert_eq!(a.coefficients, ["1", "-5", "6"]);
        assert_eq!(a.verbosity, Verbosity::Normal);
        assert_eq!(a.max_bound, None);
    }

    #[test]
    fn options_mix_with_coefficients() {
        let a = args(&["-v", "debug", "--max-bound", "100", "1", "-1"]);
        assert_eq!(a.verbosity, Verbosity::Debug);
        assert_eq!(a.max_bound, Some(100));
        assert_eq!(a.coefficients, ["1", "-1"]);
    }

    #[test]
    fn run_prints_roots() {
        assert_eq!(run(&args(&["1", "-3", "-75", "475", "-750"])).unwrap(), "-10\n3\n5\n");
        assert_eq!(run(&args(&["2", "1"])).unwrap(), "");
    }

    #[test]
    fn run_reports_errors() {
        assert!(matches!(run(&args(&["0", "1"])), Err(CliError::Invalid(_))));
        assert!(matches!(run(&args(&["1", "two"])), Err(CliError::Parse(_))));
        assert!(matches!(
            run(&args(&["--max-bound", "10", "1", "-11"])),
            Err(CliError::BoundExceeded { .. })
        ));
        assert!(run(&args(&["--max-bound", "10", "1", "-10"])).is_ok());
    }
}
