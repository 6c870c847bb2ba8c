//! The 12 tracked complication types and their reference data.
//!
//! Each complication carries a fixed multiplier applied to the base risk
//! score and a hard-coded reference average drawn from published NSQIP-style
//! population rates. `Complication::ALL` fixes the row order the table and
//! chart must preserve.

use serde::{Deserialize, Serialize};

/// Post-surgical complication types, in fixed display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Complication {
    SeriousComplication,
    AnyComplication,
    Pneumonia,
    CardiacComplication,
    VenousThromboembolism,
    Sepsis,
    SurgicalSiteInfection,
    UrinaryTractInfection,
    RenalFailure,
    Readmission,
    ReturnToOr,
    Death,
}

impl Complication {
    /// Display order is the declaration order; never resorted.
    pub const ALL: [Complication; 12] = [
        Complication::SeriousComplication,
        Complication::AnyComplication,
        Complication::Pneumonia,
        Complication::CardiacComplication,
        Complication::VenousThromboembolism,
        Complication::Sepsis,
        Complication::SurgicalSiteInfection,
        Complication::UrinaryTractInfection,
        Complication::RenalFailure,
        Complication::Readmission,
        Complication::ReturnToOr,
        Complication::Death,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Complication::SeriousComplication => "Serious complication",
            Complication::AnyComplication => "Any complication",
            Complication::Pneumonia => "Pneumonia",
            Complication::CardiacComplication => "Cardiac complication",
            Complication::VenousThromboembolism => "Venous thromboembolism",
            Complication::Sepsis => "Sepsis",
            Complication::SurgicalSiteInfection => "Surgical site infection",
            Complication::UrinaryTractInfection => "Urinary tract infection",
            Complication::RenalFailure => "Renal failure",
            Complication::Readmission => "Readmission",
            Complication::ReturnToOr => "Return to OR",
            Complication::Death => "Death",
        }
    }

    /// Multiplier applied to the base risk score to get this
    /// complication's predicted risk.
    pub fn multiplier(&self) -> f64 {
        match self {
            Complication::SeriousComplication => 1.0,
            Complication::AnyComplication => 1.1,
            Complication::Pneumonia => 0.02,
            Complication::CardiacComplication => 0.02,
            Complication::VenousThromboembolism => 0.05,
            Complication::Sepsis => 0.04,
            Complication::SurgicalSiteInfection => 0.7,
            Complication::UrinaryTractInfection => 0.3,
            Complication::RenalFailure => 0.02,
            Complication::Readmission => 0.5,
            Complication::ReturnToOr => 0.4,
            Complication::Death => 0.01,
        }
    }

    /// Reference population average rate (%), the comparison baseline.
    pub fn reference_average(&self) -> f64 {
        match self {
            Complication::SeriousComplication => 5.5,
            Complication::AnyComplication => 7.5,
            Complication::Pneumonia => 0.1,
            Complication::CardiacComplication => 0.1,
            Complication::VenousThromboembolism => 0.7,
            Complication::Sepsis => 0.5,
            Complication::SurgicalSiteInfection => 4.9,
            Complication::UrinaryTractInfection => 2.0,
            Complication::RenalFailure => 0.3,
            Complication::Readmission => 3.7,
            Complication::ReturnToOr => 1.7,
            Complication::Death => 0.0,
        }
    }
}

/// Verdict of predicted risk vs. the reference average.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Comparison {
    Below,
    Above,
    Equal,
}

impl Comparison {
    /// Strict numeric classification: `< → Below`, `> → Above`, else Equal.
    pub fn classify(predicted: f64, average: f64) -> Comparison {
        if predicted < average {
            Comparison::Below
        } else if predicted > average {
            Comparison::Above
        } else {
            Comparison::Equal
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Comparison::Below => "Below average",
            Comparison::Above => "Above average",
            Comparison::Equal => "At average",
        }
    }
}

/// One row of the comparison table rendered in the browser.
#[derive(Debug, Clone, Serialize)]
pub struct ComplicationRow {
    pub complication: Complication,
    pub label: &'static str,
    /// Predicted risk (%), rounded to 1 decimal.
    pub predicted_risk: f64,
    /// Fixed reference average (%).
    pub average_risk: f64,
    pub comparison: Comparison,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn twelve_complications_in_declared_order() {
        assert_eq!(Complication::ALL.len(), 12);
        assert_eq!(Complication::ALL[0], Complication::SeriousComplication);
        assert_eq!(Complication::ALL[1], Complication::AnyComplication);
        assert_eq!(Complication::ALL[11], Complication::Death);
    }

    #[test]
    fn classify_is_strict() {
        assert_eq!(Comparison::classify(1.0, 2.0), Comparison::Below);
        assert_eq!(Comparison::classify(3.0, 2.0), Comparison::Above);
        assert_eq!(Comparison::classify(2.0, 2.0), Comparison::Equal);
    }

    #[test]
    fn reference_averages_match_published_constants() {
        assert_eq!(Complication::SeriousComplication.reference_average(), 5.5);
        assert_eq!(Complication::AnyComplication.reference_average(), 7.5);
        assert_eq!(Complication::SurgicalSiteInfection.reference_average(), 4.9);
        assert_eq!(Complication::Death.reference_average(), 0.0);
    }

    #[test]
    fn comparison_serializes_snake_case() {
        let json = serde_json::to_string(&Comparison::Below).unwrap();
        assert_eq!(json, "\"below\"");
    }
}
