use serde::Serialize;

use super::entity::round_grams;

/// kg CO2e avoided per kg of avoided waste.
pub const DEFAULT_CO2_FACTOR: f64 = 1.2;

/// Baseline-vs-latest reduction summary over the full history.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Default)]
pub struct ReductionIndicators {
    pub baseline_g: i64,
    pub actual_g: i64,
    #[serde(rename = "reduccion_g")]
    pub reduction_g: i64,
    #[serde(rename = "reduccion_pct")]
    pub reduction_pct: f64,
    pub co2_kg_ev: f64,
}

impl ReductionIndicators {
    /// Compute indicators from weights ordered oldest first.
    ///
    /// Absent weights are discarded. An increase over the baseline is
    /// reported as zero reduction, never as a negative value.
    pub fn compute<I>(weights: I, co2_factor: f64) -> Self
    where
        I: IntoIterator<Item = Option<f64>>,
    {
        let mut values = weights.into_iter().flatten();

        let Some(baseline) = values.next() else {
            return Self::default();
        };
        let actual = values.last().unwrap_or(baseline);

        let reduction = (baseline - actual).max(0.0);
        let reduction_pct = if baseline > 0.0 {
            reduction / baseline * 100.0
        } else {
            0.0
        };
        let co2 = (reduction / 1000.0) * co2_factor;

        Self {
            baseline_g: round_grams(baseline),
            actual_g: round_grams(actual),
            reduction_g: round_grams(reduction),
            reduction_pct: round2(reduction_pct),
            co2_kg_ev: round2(co2),
        }
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
