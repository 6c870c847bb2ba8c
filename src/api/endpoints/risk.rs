//! Risk estimation endpoint: the one computation-and-render cycle.

use axum::Json;
use serde::{Deserialize, Serialize};

use crate::api::error::ApiError;
use crate::models::{AsaClass, ComplicationRow, Diagnosis, PatientInput};
use crate::scoring;

/// One form submission. ASA class and diagnosis arrive as strings and are
/// resolved with the engine's default-on-miss contract, so an unrecognized
/// category never fails the request.
#[derive(Debug, Deserialize)]
pub struct RiskRequest {
    pub age: u32,
    pub height_cm: f64,
    pub weight_kg: f64,
    pub asa_class: String,
    pub diagnosis: String,
    #[serde(default)]
    pub has_diabetes: bool,
    #[serde(default)]
    pub has_copd: bool,
    #[serde(default)]
    pub is_emergency: bool,
}

#[derive(Debug, Serialize)]
pub struct RiskResponse {
    /// BMI formatted to 2 decimals for display.
    pub bmi: String,
    pub bmi_value: f64,
    /// Overall complication probability (%), 1 decimal.
    pub base_score: f64,
    pub rows: Vec<ComplicationRow>,
    pub chart: ChartSeries,
}

/// Bar-chart series: predicted risk per complication, table order.
#[derive(Debug, Serialize)]
pub struct ChartSeries {
    pub labels: Vec<&'static str>,
    pub values: Vec<f64>,
}

/// `POST /api/risk` — score a patient and build the comparison table.
pub async fn estimate(Json(req): Json<RiskRequest>) -> Result<Json<RiskResponse>, ApiError> {
    let input = PatientInput::new(
        req.age,
        req.height_cm,
        req.weight_kg,
        AsaClass::from_label(&req.asa_class),
        req.has_diabetes,
        req.has_copd,
        req.is_emergency,
        Diagnosis::from_label(&req.diagnosis),
    );

    let bmi = scoring::bmi(&input)?;
    let base_score = scoring::score_with_bmi(&input, bmi);
    let rows = scoring::build_complication_table(base_score);

    tracing::debug!(
        age = input.age,
        asa = input.asa_class.as_str(),
        diagnosis = input.diagnosis.as_str(),
        base_score,
        "risk estimate computed"
    );

    let chart = ChartSeries {
        labels: rows.iter().map(|r| r.label).collect(),
        values: rows.iter().map(|r| r.predicted_risk).collect(),
    };

    Ok(Json(RiskResponse {
        bmi: format!("{bmi:.2}"),
        bmi_value: bmi,
        base_score,
        rows,
        chart,
    }))
}
