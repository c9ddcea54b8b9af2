//----------------------------------------
// sample_size mod types
//----------------------------------------
use serde::{Deserialize, Serialize};
use std::fmt;

/// Names the input that failed validation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Parameter {
    Confidence,
    MinimumDetectableDifference,
    BaselineRate,
    Power,
    GroupCount,
    PerGroupSize,
}

impl fmt::Display for Parameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Parameter::Confidence => "confidence",
            Parameter::MinimumDetectableDifference => "minimum detectable difference",
            Parameter::BaselineRate => "baseline rate",
            Parameter::Power => "power",
            Parameter::GroupCount => "group count",
            Parameter::PerGroupSize => "per-group sample size",
        };
        write!(f, "{name}")
    }
}

/// Inputs to a two-proportion sample size calculation. All rates are
/// proportions in [0, 1], not percentages.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SampleSizeRequest {
    /// Statistical confidence, 1 - alpha
    pub confidence: f64,
    /// Absolute difference in proportions the test should detect
    pub minimum_detectable_difference: f64,
    /// Assumed proportion in the control group
    pub baseline_rate: f64,
    /// Passed straight to the normal quantile; see `estimate_group_sample_size`
    pub power: f64,
    /// Number of groups, control included
    pub group_count: usize,
}

impl Default for SampleSizeRequest {
    fn default() -> Self {
        SampleSizeRequest {
            confidence: 0.95,
            minimum_detectable_difference: 0.05,
            baseline_rate: 0.10,
            power: 0.8,
            group_count: 2,
        }
    }
}

impl SampleSizeRequest {
    /// Builds a request from baseline and minimum detectable difference
    /// given in percent, as they are usually entered by a user
    pub fn from_percentages(
        baseline_pct: f64,
        mdd_pct: f64,
        power: f64,
        confidence: f64,
        group_count: usize,
    ) -> Self {
        SampleSizeRequest {
            confidence,
            minimum_detectable_difference: mdd_pct / 100.,
            baseline_rate: baseline_pct / 100.,
            power,
            group_count,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SampleSizeCalculation {
    pub per_group: f64,
    pub total: f64,
    pub group_count: usize,
    pub z_alpha: f64,
    pub z_power: f64,
}

impl SampleSizeCalculation {
    /// Per-group size truncated toward zero, as it is reported
    pub fn per_group_needed(&self) -> u64 {
        self.per_group as u64
    }

    pub fn total_needed(&self) -> u64 {
        self.total as u64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn percentages_are_normalized() {
        let req = SampleSizeRequest::from_percentages(10., 5., 0.8, 0.95, 2);
        assert_eq!(req, SampleSizeRequest::default());
    }

    #[test]
    fn request_missing_fields_take_defaults() {
        let req: SampleSizeRequest =
            serde_json::from_str(r#"{"baseline_rate": 0.5, "group_count": 4}"#)
                .expect("failed to parse request");
        assert_eq!(req.baseline_rate, 0.5);
        assert_eq!(req.group_count, 4);
        assert_eq!(req.confidence, 0.95);
        assert_eq!(req.power, 0.8);
    }

    #[test]
    fn needed_sizes_truncate() {
        let calc = SampleSizeCalculation {
            per_group: 685.97,
            total: 2057.91,
            group_count: 3,
            z_alpha: 1.96,
            z_power: 0.84,
        };
        assert_eq!(calc.per_group_needed(), 685);
        assert_eq!(calc.total_needed(), 2057);
    }

    #[test]
    fn parameter_display() {
        assert_eq!(
            Parameter::MinimumDetectableDifference.to_string(),
            "minimum detectable difference"
        );
    }
}
