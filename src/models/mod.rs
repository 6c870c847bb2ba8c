//! Domain model types shared by the scoring engine and the API shell.

pub mod complication;
pub mod patient;

pub use complication::{Comparison, Complication, ComplicationRow};
pub use patient::{AsaClass, Diagnosis, PatientInput};
