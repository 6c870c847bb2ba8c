//! Per-complication risk table.

use crate::models::{Comparison, Complication, ComplicationRow};
use crate::scoring::engine::round1;

/// Expand a base risk score into the 12-row comparison table.
///
/// Rows come out in `Complication::ALL` order. Predicted risk is the base
/// score times the complication's fixed multiplier. The comparison verdict
/// is classified against the unrounded product; rounding to 1 decimal is
/// display-only, so a risk that rounds onto the average still reads as
/// below or above it.
pub fn build_complication_table(base_score: f64) -> Vec<ComplicationRow> {
    Complication::ALL
        .into_iter()
        .map(|complication| {
            let raw = base_score * complication.multiplier();
            let average = complication.reference_average();
            ComplicationRow {
                complication,
                label: complication.label(),
                predicted_risk: round1(raw),
                average_risk: average,
                comparison: Comparison::classify(raw, average),
            }
        })
        .collect()
}
