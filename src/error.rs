//! Errors raised while reading a record and interpolating its points.

use std::path::PathBuf;

use num_bigint::BigInt;
use thiserror::Error;

/// Every failure the pipeline can report.
#[derive(Error, Debug)]
pub enum SecretError {
    #[error("invalid base {0}: expected an integer in 2..=36")]
    InvalidBase(String),

    #[error("empty value")]
    EmptyValue,

    #[error("invalid character {character:?} for base {base}")]
    InvalidCharacter { character: char, base: u32 },

    #[error("record is missing keys.k")]
    MissingK,

    #[error("invalid keys.k {0}: expected a positive integer")]
    InvalidK(String),

    #[error("invalid point key {0:?}: expected a base-10 integer")]
    InvalidPointKey(String),

    #[error("invalid entry for point {key:?}: {reason}")]
    InvalidPointEntry { key: String, reason: &'static str },

    #[error("invalid value type for point {key:?}: {found}")]
    InvalidValueType { key: String, found: String },

    #[error("record must be a JSON object, found {0}")]
    InvalidRecord(String),

    #[error("insufficient points: need {needed}, have {available}")]
    InsufficientPoints { needed: usize, available: usize },

    #[error("duplicate x coordinate {0}")]
    DuplicateX(BigInt),

    #[error("zero denominator in fraction {0}/0")]
    ZeroDenominator(BigInt),

    #[error("interpolation produced a zero denominator")]
    DegenerateDenominator,

    #[error("malformed JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl SecretError {
    /// True for arithmetic invariant violations, which point at a bug rather
    /// than at bad input.
    pub fn is_defect(&self) -> bool {
        matches!(
            self,
            SecretError::ZeroDenominator(_) | SecretError::DegenerateDenominator
        )
    }
}

/// Result type for interpolation operations
pub type Result<T> = std::result::Result<T, SecretError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_arithmetic_invariants_are_defects() {
        assert!(SecretError::DegenerateDenominator.is_defect());
        assert!(SecretError::ZeroDenominator(BigInt::from(3)).is_defect());
        assert!(!SecretError::MissingK.is_defect());
        assert!(!SecretError::DuplicateX(BigInt::from(1)).is_defect());
    }

    #[test]
    fn messages_carry_context() {
        let err = SecretError::InvalidCharacter { character: 'g', base: 16 };
        assert_eq!(err.to_string(), "invalid character 'g' for base 16");

        let err = SecretError::InsufficientPoints { needed: 4, available: 2 };
        assert_eq!(err.to_string(), "insufficient points: need 4, have 2");
    }
}
