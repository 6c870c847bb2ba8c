//! Scoring engine errors.
//!
//! Categorical lookups are default-on-miss and cannot fail; the only
//! failure mode is a physically impossible height or weight, which must
//! surface as an error rather than a division fault in the BMI derivation.

/// Invalid numeric input to the scoring engine.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum ScoringError {
    #[error("height must be positive, got {0} cm")]
    InvalidHeight(f64),
    #[error("weight must be positive, got {0} kg")]
    InvalidWeight(f64),
}
