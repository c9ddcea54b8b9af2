use crate::sample_size::error::SampleSizeErr;
use crate::sample_size::types::Parameter;

// Slack allowed on baseline + difference before it counts as exceeding 1;
// percent inputs divided by 100 can overshoot by an ulp or two.
pub(crate) const RATE_SUM_TOL: f64 = 1e-12;

fn invalid(param: Parameter, value: f64, constraint: &'static str) -> SampleSizeErr {
    SampleSizeErr::InvalidParameter {
        param,
        value,
        constraint,
    }
}

/// Value must lie strictly inside (0, 1)
pub(crate) fn open_unit(param: Parameter, value: f64) -> Result<f64, SampleSizeErr> {
    if value > 0.0 && value < 1.0 {
        Ok(value)
    } else {
        Err(invalid(param, value, "must be strictly between 0 and 1"))
    }
}

/// Value must lie in [0, 1)
pub(crate) fn half_open_unit(param: Parameter, value: f64) -> Result<f64, SampleSizeErr> {
    if (0.0..1.0).contains(&value) {
        Ok(value)
    } else {
        Err(invalid(param, value, "must be at least 0 and less than 1"))
    }
}

/// Returns the variant rate p2 = baseline + difference, clamped to 1 when it
/// overshoots only by rounding
pub(crate) fn variant_rate(baseline: f64, mdd: f64) -> Result<f64, SampleSizeErr> {
    let p2 = baseline + mdd;
    if p2 > 1.0 + RATE_SUM_TOL {
        return Err(invalid(
            Parameter::MinimumDetectableDifference,
            mdd,
            "baseline rate plus difference must not exceed 1",
        ));
    }
    let p2 = p2.min(1.0);
    // A difference below the resolution of the baseline vanishes in the sum
    if p2 - baseline <= 0.0 {
        return Err(invalid(
            Parameter::MinimumDetectableDifference,
            mdd,
            "too small to change the baseline rate",
        ));
    }
    Ok(p2)
}

pub(crate) fn group_count(count: usize) -> Result<usize, SampleSizeErr> {
    if count >= 2 {
        Ok(count)
    } else {
        Err(invalid(
            Parameter::GroupCount,
            count as f64,
            "at least 2 groups (control included) are required",
        ))
    }
}

pub(crate) fn finite(param: Parameter, value: f64) -> Result<f64, SampleSizeErr> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(invalid(param, value, "must be a finite number"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn open_unit_rejects_endpoints() {
        assert!(open_unit(Parameter::Power, 0.0).is_err());
        assert!(open_unit(Parameter::Power, 1.0).is_err());
        assert!(open_unit(Parameter::Power, f64::NAN).is_err());
        assert_eq!(open_unit(Parameter::Power, 0.8), Ok(0.8));
    }

    #[test]
    fn half_open_unit_accepts_zero() {
        assert_eq!(half_open_unit(Parameter::BaselineRate, 0.0), Ok(0.0));
        assert!(half_open_unit(Parameter::BaselineRate, -0.01).is_err());
        assert!(half_open_unit(Parameter::BaselineRate, 1.0).is_err());
    }

    #[test]
    fn variant_rate_at_one_is_allowed() {
        assert_eq!(variant_rate(0.95, 0.05), Ok(1.0));
        assert_eq!(variant_rate(0.8, 0.2), Ok(1.0));
    }

    #[test]
    fn variant_rate_above_one_is_rejected() {
        let err = variant_rate(0.9, 0.2).unwrap_err();
        assert_eq!(
            err.to_string(),
            "invalid minimum detectable difference (got 0.2): \
            baseline rate plus difference must not exceed 1"
        );
    }

    #[test]
    fn variant_rate_absorbed_difference_rejected() {
        let err = variant_rate(0.5, 1e-17).unwrap_err();
        assert_eq!(
            err.to_string(),
            "invalid minimum detectable difference (got 0.00000000000000001): \
            too small to change the baseline rate"
        );
    }

    #[test]
    fn group_count_needs_two() {
        assert!(group_count(0).is_err());
        assert!(group_count(1).is_err());
        assert_eq!(group_count(2), Ok(2));
    }
}
