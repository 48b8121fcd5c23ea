//! # lagrange-secret
//!
//! Recover the constant term of a polynomial from sample points whose y
//! values are written in arbitrary bases.
//!
//! A record names how many points to use (`keys.k`) and lists the points by
//! x coordinate:
//!
//! ```
//! use lagrange_secret::solve_str;
//!
//! let record = r#"{
//!     "keys": { "n": 3, "k": 2 },
//!     "1": { "base": "10", "value": "5" },
//!     "2": { "base": "2", "value": "111" },
//!     "3": { "base": "16", "value": "ff" }
//! }"#;
//! assert_eq!(solve_str(record).unwrap().to_string(), "3");
//! ```
//!
//! The k points with the smallest x are interpolated with exact rational
//! arithmetic, so a constant term that is not an integer comes back as a
//! reduced fraction rather than being truncated.

pub mod base;
pub mod batch;
pub mod error;
pub mod fraction;
pub mod lagrange;
pub mod points;

use serde_json::Value;

pub use base::parse_base;
pub use error::{Result, SecretError};
pub use fraction::Fraction;
pub use lagrange::{coefficients, constant_term};
pub use points::{parse_record, select_points, Point};

/// What to print for each record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// The value at x = 0.
    #[default]
    ConstantTerm,
    /// All coefficients, lowest power first, space separated.
    Coefficients,
}

/// Constant term of the polynomial described by `record`.
pub fn solve(record: &Value) -> Result<Fraction> {
    let points = select_points(record)?;
    constant_term(&points)
}

/// Same as [`solve`], starting from raw JSON text.
pub fn solve_str(text: &str) -> Result<Fraction> {
    solve(&parse_record(text)?)
}

/// Solve raw record text and format the answer for `mode`.
pub fn render(text: &str, mode: Mode) -> Result<String> {
    let record = parse_record(text)?;
    match mode {
        Mode::ConstantTerm => Ok(solve(&record)?.to_string()),
        Mode::Coefficients => {
            let points = select_points(&record)?;
            let coeffs = coefficients(&points)?;
            Ok(coeffs
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join(" "))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"{
        "keys": { "n": 4, "k": 3 },
        "1": { "base": "10", "value": "4" },
        "2": { "base": "2", "value": "111" },
        "3": { "base": "10", "value": "12" },
        "6": { "base": "4", "value": "213" }
    }"#;

    #[test]
    fn renders_constant_term() {
        assert_eq!(render(SAMPLE, Mode::ConstantTerm).unwrap(), "3");
    }

    #[test]
    fn renders_coefficients() {
        // (1,4) (2,7) (3,12): y = x^2 + 3
        assert_eq!(render(SAMPLE, Mode::Coefficients).unwrap(), "3 0 1");
    }

    #[test]
    fn propagates_parse_errors() {
        assert!(matches!(render("[", Mode::ConstantTerm), Err(SecretError::Json(_))));
    }
}
