//! Patient attributes consumed by the scoring engine.
//!
//! The two categorical inputs (ASA class, diagnosis) carry their fixed
//! model weights here, next to the types that own them. String resolution
//! is deliberately forgiving: an unrecognized label falls back to the
//! lowest-weight / catch-all variant instead of erroring, so the engine
//! never fails on a categorical input.

use serde::{Deserialize, Serialize};

// ═══════════════════════════════════════════════════════════
// ASA physical status
// ═══════════════════════════════════════════════════════════

/// ASA physical status classification, ordinal severity I–IV.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AsaClass {
    I,
    II,
    III,
    IV,
}

impl AsaClass {
    pub const ALL: [AsaClass; 4] = [AsaClass::I, AsaClass::II, AsaClass::III, AsaClass::IV];

    pub fn as_str(&self) -> &'static str {
        match self {
            AsaClass::I => "I",
            AsaClass::II => "II",
            AsaClass::III => "III",
            AsaClass::IV => "IV",
        }
    }

    /// Human-readable description for form display.
    pub fn label(&self) -> &'static str {
        match self {
            AsaClass::I => "I — healthy patient",
            AsaClass::II => "II — mild systemic disease",
            AsaClass::III => "III — severe systemic disease",
            AsaClass::IV => "IV — life-threatening disease",
        }
    }

    /// Severity weight entering the logistic model.
    pub fn severity_weight(&self) -> f64 {
        match self {
            AsaClass::I => 0.0,
            AsaClass::II => 1.0,
            AsaClass::III => 2.0,
            AsaClass::IV => 3.0,
        }
    }

    /// Resolve a submitted label. Unknown input falls back to class I,
    /// which carries weight 0 (default-on-miss).
    pub fn from_label(label: &str) -> AsaClass {
        match label.trim() {
            "I" | "1" => AsaClass::I,
            "II" | "2" => AsaClass::II,
            "III" | "3" => AsaClass::III,
            "IV" | "4" => AsaClass::IV,
            _ => AsaClass::I,
        }
    }
}

// ═══════════════════════════════════════════════════════════
// Surgical diagnosis
// ═══════════════════════════════════════════════════════════

/// The 13 fixed robotic procedures the model knows about.
///
/// Declaration order matches the form's option order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Diagnosis {
    RoboticProstatectomy,
    RoboticHysterectomy,
    RoboticColectomy,
    RoboticProctectomy,
    RoboticGastrectomy,
    RoboticThyroidectomy,
    RoboticNephrectomy,
    RoboticLobectomy,
    RoboticCystectomy,
    RoboticPancreatectomy,
    RoboticHepatectomy,
    RoboticEsophagectomy,
    Other,
}

impl Diagnosis {
    pub const ALL: [Diagnosis; 13] = [
        Diagnosis::RoboticProstatectomy,
        Diagnosis::RoboticHysterectomy,
        Diagnosis::RoboticColectomy,
        Diagnosis::RoboticProctectomy,
        Diagnosis::RoboticGastrectomy,
        Diagnosis::RoboticThyroidectomy,
        Diagnosis::RoboticNephrectomy,
        Diagnosis::RoboticLobectomy,
        Diagnosis::RoboticCystectomy,
        Diagnosis::RoboticPancreatectomy,
        Diagnosis::RoboticHepatectomy,
        Diagnosis::RoboticEsophagectomy,
        Diagnosis::Other,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Diagnosis::RoboticProstatectomy => "robotic_prostatectomy",
            Diagnosis::RoboticHysterectomy => "robotic_hysterectomy",
            Diagnosis::RoboticColectomy => "robotic_colectomy",
            Diagnosis::RoboticProctectomy => "robotic_proctectomy",
            Diagnosis::RoboticGastrectomy => "robotic_gastrectomy",
            Diagnosis::RoboticThyroidectomy => "robotic_thyroidectomy",
            Diagnosis::RoboticNephrectomy => "robotic_nephrectomy",
            Diagnosis::RoboticLobectomy => "robotic_lobectomy",
            Diagnosis::RoboticCystectomy => "robotic_cystectomy",
            Diagnosis::RoboticPancreatectomy => "robotic_pancreatectomy",
            Diagnosis::RoboticHepatectomy => "robotic_hepatectomy",
            Diagnosis::RoboticEsophagectomy => "robotic_esophagectomy",
            Diagnosis::Other => "other",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Diagnosis::RoboticProstatectomy => "Robotic prostatectomy",
            Diagnosis::RoboticHysterectomy => "Robotic hysterectomy",
            Diagnosis::RoboticColectomy => "Robotic colectomy",
            Diagnosis::RoboticProctectomy => "Robotic proctectomy",
            Diagnosis::RoboticGastrectomy => "Robotic gastrectomy",
            Diagnosis::RoboticThyroidectomy => "Robotic thyroidectomy",
            Diagnosis::RoboticNephrectomy => "Robotic nephrectomy",
            Diagnosis::RoboticLobectomy => "Robotic lung lobectomy",
            Diagnosis::RoboticCystectomy => "Robotic cystectomy",
            Diagnosis::RoboticPancreatectomy => "Robotic pancreatectomy",
            Diagnosis::RoboticHepatectomy => "Robotic hepatectomy",
            Diagnosis::RoboticEsophagectomy => "Robotic esophagectomy",
            Diagnosis::Other => "Other procedure",
        }
    }

    /// Procedure weight entering the logistic model, in [0.3, 1.5].
    pub fn weight(&self) -> f64 {
        match self {
            Diagnosis::RoboticProstatectomy => 0.4,
            Diagnosis::RoboticHysterectomy => 0.6,
            Diagnosis::RoboticColectomy => 1.0,
            Diagnosis::RoboticProctectomy => 1.1,
            Diagnosis::RoboticGastrectomy => 0.9,
            Diagnosis::RoboticThyroidectomy => 0.3,
            Diagnosis::RoboticNephrectomy => 0.7,
            Diagnosis::RoboticLobectomy => 1.2,
            Diagnosis::RoboticCystectomy => 1.3,
            Diagnosis::RoboticPancreatectomy => 1.4,
            Diagnosis::RoboticHepatectomy => 1.2,
            Diagnosis::RoboticEsophagectomy => 1.5,
            Diagnosis::Other => 0.5,
        }
    }

    /// Resolve a submitted identifier or display label. Unknown input
    /// falls back to `Other` (weight 0.5, default-on-miss).
    pub fn from_label(label: &str) -> Diagnosis {
        let needle = label.trim();
        Diagnosis::ALL
            .into_iter()
            .find(|dx| dx.as_str() == needle || dx.label() == needle)
            .unwrap_or(Diagnosis::Other)
    }
}

// ═══════════════════════════════════════════════════════════
// Patient input
// ═══════════════════════════════════════════════════════════

/// One form submission's worth of patient attributes.
///
/// Created per request, scored, discarded after render. No identity,
/// no persistence.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PatientInput {
    pub age: u32,
    pub height_cm: f64,
    pub weight_kg: f64,
    pub asa_class: AsaClass,
    pub has_diabetes: bool,
    pub has_copd: bool,
    pub is_emergency: bool,
    pub diagnosis: Diagnosis,
}

impl PatientInput {
    pub const MIN_AGE: u32 = 18;
    pub const MAX_AGE: u32 = 100;

    /// Build a patient record, clamping age to the supported [18, 100] range.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        age: u32,
        height_cm: f64,
        weight_kg: f64,
        asa_class: AsaClass,
        has_diabetes: bool,
        has_copd: bool,
        is_emergency: bool,
        diagnosis: Diagnosis,
    ) -> Self {
        Self {
            age: age.clamp(Self::MIN_AGE, Self::MAX_AGE),
            height_cm,
            weight_kg,
            asa_class,
            has_diabetes,
            has_copd,
            is_emergency,
            diagnosis,
        }
    }
}
