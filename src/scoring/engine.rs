//! Logistic risk model.
//!
//! A linear predictor over patient attributes is pushed through the
//! logistic function, giving an overall complication probability that is
//! monotonic in every risk factor and bounded in the open interval
//! (0, 100).
//!
//! History note: an earlier revision of this estimator used a plain
//! additive score (intercept −5.0, 0.04·age, ASA weights {0, 0.5, 1.0,
//! 2.0}, additive per-complication offsets). The logistic model below is
//! the canonical one; the additive variant is documented in DESIGN.md and
//! intentionally not implemented.

use crate::models::PatientInput;
use crate::scoring::error::ScoringError;

// ═══════════════════════════════════════════════════════════
// Model coefficients
// ═══════════════════════════════════════════════════════════

const INTERCEPT: f64 = -5.8;
const COEF_AGE: f64 = 0.03;
const COEF_BMI: f64 = 0.05;
const COEF_DIABETES: f64 = 0.8;
const COEF_EMERGENCY: f64 = 1.2;
const COEF_COPD: f64 = 0.9;
const COEF_ASA: f64 = 0.7;
const COEF_DIAGNOSIS: f64 = 0.6;

// ═══════════════════════════════════════════════════════════
// Derivations
// ═══════════════════════════════════════════════════════════

/// Body Mass Index: weight(kg) / height(m)².
///
/// Non-positive height or weight is rejected up front so the division
/// can never produce an infinity or NaN.
pub fn bmi(input: &PatientInput) -> Result<f64, ScoringError> {
    if input.height_cm <= 0.0 {
        return Err(ScoringError::InvalidHeight(input.height_cm));
    }
    if input.weight_kg <= 0.0 {
        return Err(ScoringError::InvalidWeight(input.weight_kg));
    }
    let height_m = input.height_cm / 100.0;
    Ok(input.weight_kg / (height_m * height_m))
}

/// Overall complication probability (%), rounded to 1 decimal.
///
/// `logit = intercept + Σ coef·factor`, `p = e^logit / (1 + e^logit)`.
pub fn compute_risk_score(input: &PatientInput) -> Result<f64, ScoringError> {
    Ok(score_with_bmi(input, bmi(input)?))
}

/// Score with an already-derived BMI, for callers that need both values
/// without running the derivation twice.
pub fn score_with_bmi(input: &PatientInput, bmi: f64) -> f64 {
    let logit = INTERCEPT
        + COEF_AGE * f64::from(input.age)
        + COEF_BMI * bmi
        + COEF_DIABETES * indicator(input.has_diabetes)
        + COEF_EMERGENCY * indicator(input.is_emergency)
        + COEF_COPD * indicator(input.has_copd)
        + COEF_ASA * input.asa_class.severity_weight()
        + COEF_DIAGNOSIS * input.diagnosis.weight();

    let odds = logit.exp();
    round1(100.0 * odds / (1.0 + odds))
}

fn indicator(flag: bool) -> f64 {
    if flag {
        1.0
    } else {
        0.0
    }
}

/// Round to 1 decimal place.
pub(crate) fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

// ═══════════════════════════════════════════════════════════
// Tests
// ═══════════════════════════════════════════════════════════

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{AsaClass, Diagnosis};

    fn baseline() -> PatientInput {
        PatientInput::new(
            50,
            160.0,
            60.0,
            AsaClass::II,
            false,
            false,
            false,
            Diagnosis::RoboticColectomy,
        )
    }

    #[test]
    fn bmi_matches_hand_computation() {
        // 60 / 1.6² = 23.4375 exactly
        assert_eq!(bmi(&baseline()).unwrap(), 23.4375);
    }

    #[test]
    fn zero_height_is_rejected() {
        let mut input = baseline();
        input.height_cm = 0.0;
        assert_eq!(bmi(&input), Err(ScoringError::InvalidHeight(0.0)));
        assert_eq!(
            compute_risk_score(&input),
            Err(ScoringError::InvalidHeight(0.0))
        );
    }

    #[test]
    fn negative_weight_is_rejected() {
        let mut input = baseline();
        input.weight_kg = -1.0;
        assert_eq!(bmi(&input), Err(ScoringError::InvalidWeight(-1.0)));
    }

    #[test]
    fn reference_case_scores_13_8() {
        // age 50, bmi 23.4375, ASA II (weight 1), colectomy (weight 1.0):
        // logit = -5.8 + 1.5 + 1.171875 + 0.7 + 0.6 = -1.828125
        // p = e^-1.828125 / (1 + e^-1.828125) ≈ 0.13846 → 13.8
        assert_eq!(compute_risk_score(&baseline()).unwrap(), 13.8);
    }

    #[test]
    fn precomputed_bmi_path_matches_full_computation() {
        let input = baseline();
        let derived = bmi(&input).unwrap();
        assert_eq!(
            score_with_bmi(&input, derived),
            compute_risk_score(&input).unwrap()
        );
    }

    #[test]
    fn monotonic_in_age() {
        let mut older = baseline();
        older.age = 70;
        assert!(
            compute_risk_score(&older).unwrap() >= compute_risk_score(&baseline()).unwrap()
        );
    }

    #[test]
    fn monotonic_in_bmi() {
        let mut heavier = baseline();
        heavier.weight_kg = 95.0;
        assert!(
            compute_risk_score(&heavier).unwrap() >= compute_risk_score(&baseline()).unwrap()
        );
    }

    #[test]
    fn monotonic_in_each_comorbidity() {
        let base = compute_risk_score(&baseline()).unwrap();

        let mut diabetic = baseline();
        diabetic.has_diabetes = true;
        assert!(compute_risk_score(&diabetic).unwrap() >= base);

        let mut copd = baseline();
        copd.has_copd = true;
        assert!(compute_risk_score(&copd).unwrap() >= base);

        let mut emergency = baseline();
        emergency.is_emergency = true;
        assert!(compute_risk_score(&emergency).unwrap() >= base);
    }

    #[test]
    fn monotonic_in_asa_class() {
        let mut prev = 0.0;
        for asa in AsaClass::ALL {
            let mut input = baseline();
            input.asa_class = asa;
            let score = compute_risk_score(&input).unwrap();
            assert!(score >= prev, "score dropped at ASA {asa:?}");
            prev = score;
        }
    }

    #[test]
    fn monotonic_in_diagnosis_weight() {
        let mut low = baseline();
        low.diagnosis = Diagnosis::RoboticThyroidectomy; // weight 0.3
        let mut high = baseline();
        high.diagnosis = Diagnosis::RoboticEsophagectomy; // weight 1.5
        assert!(compute_risk_score(&high).unwrap() >= compute_risk_score(&low).unwrap());
    }

    #[test]
    fn score_stays_in_open_interval() {
        // Lowest-risk corner
        let low = PatientInput::new(
            18,
            200.0,
            50.0,
            AsaClass::I,
            false,
            false,
            false,
            Diagnosis::RoboticThyroidectomy,
        );
        let low_score = compute_risk_score(&low).unwrap();
        assert!(low_score > 0.0 && low_score < 100.0);

        // Highest-risk corner
        let high = PatientInput::new(
            100,
            150.0,
            200.0,
            AsaClass::IV,
            true,
            true,
            true,
            Diagnosis::RoboticEsophagectomy,
        );
        let high_score = compute_risk_score(&high).unwrap();
        assert!(high_score > 0.0 && high_score < 100.0);
        assert!(high_score > low_score);
    }

    #[test]
    fn score_is_rounded_to_one_decimal() {
        let score = compute_risk_score(&baseline()).unwrap();
        assert_eq!(score, round1(score));
    }

    #[test]
    fn round1_behaves() {
        assert_eq!(round1(13.845), 13.8);
        assert_eq!(round1(13.85001), 13.9);
        assert_eq!(round1(0.04), 0.0);
    }
}
