//! Form-population constants endpoint.
//!
//! The page renders its selects and the averages column from this payload
//! so the fixed tables live in exactly one place (the model enums).

use axum::Json;
use serde::Serialize;

use crate::models::{AsaClass, Complication, Diagnosis, PatientInput};

#[derive(Serialize)]
pub struct ReferenceResponse {
    pub age_range: AgeRange,
    pub asa_classes: Vec<AsaOption>,
    pub diagnoses: Vec<DiagnosisOption>,
    pub complications: Vec<ComplicationOption>,
}

#[derive(Serialize)]
pub struct AgeRange {
    pub min: u32,
    pub max: u32,
}

#[derive(Serialize)]
pub struct AsaOption {
    pub id: &'static str,
    pub label: &'static str,
}

#[derive(Serialize)]
pub struct DiagnosisOption {
    pub id: &'static str,
    pub label: &'static str,
}

#[derive(Serialize)]
pub struct ComplicationOption {
    pub id: Complication,
    pub label: &'static str,
    pub average_risk: f64,
}

/// `GET /api/reference` — fixed option lists and reference averages.
pub async fn reference() -> Json<ReferenceResponse> {
    Json(ReferenceResponse {
        age_range: AgeRange {
            min: PatientInput::MIN_AGE,
            max: PatientInput::MAX_AGE,
        },
        asa_classes: AsaClass::ALL
            .into_iter()
            .map(|asa| AsaOption {
                id: asa.as_str(),
                label: asa.label(),
            })
            .collect(),
        diagnoses: Diagnosis::ALL
            .into_iter()
            .map(|dx| DiagnosisOption {
                id: dx.as_str(),
                label: dx.label(),
            })
            .collect(),
        complications: Complication::ALL
            .into_iter()
            .map(|c| ComplicationOption {
                id: c,
                label: c.label(),
                average_risk: c.reference_average(),
            })
            .collect(),
    })
}
