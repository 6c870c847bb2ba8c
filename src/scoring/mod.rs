//! Pure scoring engine: patient attributes in, risk percentages out.
//!
//! No I/O, no side effects, no shared state. The API shell is a thin
//! wrapper over `compute_risk_score` + `build_complication_table`.

pub mod engine;
pub mod error;
pub mod table;

pub use engine::{bmi, compute_risk_score, score_with_bmi};
pub use error::ScoringError;
pub use table::build_complication_table;
