use tracing::debug;

use crate::error::AbcomputeErr;
use crate::normal::std_normal::std_normal_quantile;
use crate::sample_size::error::SampleSizeErr;
use crate::sample_size::types::{Parameter, SampleSizeCalculation, SampleSizeRequest};
use crate::sample_size::validate;

/// Critical values and per-group size from the two-proportion z-test formula
struct GroupEstimate {
    n: f64,
    z_alpha: f64,
    z_power: f64,
}

fn group_estimate(
    confidence: f64,
    mdd: f64,
    baseline: f64,
    power: f64,
) -> Result<GroupEstimate, AbcomputeErr> {
    let confidence = validate::open_unit(Parameter::Confidence, confidence)?;
    let mdd = validate::open_unit(Parameter::MinimumDetectableDifference, mdd)?;
    let p1 = validate::half_open_unit(Parameter::BaselineRate, baseline)?;
    let power = validate::open_unit(Parameter::Power, power)?;
    let p2 = validate::variant_rate(p1, mdd)?;

    let alpha = 1. - confidence;
    let pooled_p = (p1 + p2) / 2.;
    let pooled_q = 1. - pooled_p;

    // Two-sided critical value
    let z_alpha = std_normal_quantile(1. - alpha / 2.)?;
    // Quantile of `power` itself, not of 1 - power
    let z_power = std_normal_quantile(power)?;

    let se_null = (2. * pooled_p * pooled_q).sqrt();
    let se_alt = (p1 * (1. - p1) + p2 * (1. - p2)).sqrt();
    let n = ((z_alpha * se_null + z_power * se_alt) / (p2 - p1)).powi(2);

    if !n.is_finite() {
        return Err(SampleSizeErr::NonFiniteResult(n).into());
    }
    Ok(GroupEstimate {
        n,
        z_alpha,
        z_power,
    })
}

/// Sample size needed in each group to detect an absolute lift of `mdd`
/// over a `baseline` conversion rate with a two-sided two-proportion z-test.
///
/// n = ((z_a * sqrt(2 p q) + z_b * sqrt(p1 (1 - p1) + p2 (1 - p2))) / (p2 - p1))^2
///
/// where p1 = baseline, p2 = baseline + mdd, p is their mean, q = 1 - p,
/// z_a is the normal quantile at 1 - alpha / 2 and z_b the quantile at
/// `power`.
///
/// Note that `power` goes into the quantile unchanged. The textbook formula
/// uses the quantile at 1 - beta, which equals this only when `power` is
/// read as 1 - beta already. For `power` below 0.5, z_b is negative and the
/// estimate shrinks, and it is no longer guaranteed to fall as `mdd` grows.
///
/// The result is real valued; callers truncate when reporting.
pub fn estimate_group_sample_size(
    confidence: f64,
    mdd: f64,
    baseline: f64,
    power: f64,
) -> Result<f64, AbcomputeErr> {
    Ok(group_estimate(confidence, mdd, baseline, power)?.n)
}

/// Total sample size across `group_count` equally sized groups
pub fn estimate_total_sample_size(per_group: f64, group_count: usize) -> Result<f64, AbcomputeErr> {
    let per_group = validate::finite(Parameter::PerGroupSize, per_group)?;
    let group_count = validate::group_count(group_count)?;
    Ok(per_group * group_count as f64)
}

/// Computes per-group and total sample size for a full request
pub fn compute_sample_size(
    request: &SampleSizeRequest,
) -> Result<SampleSizeCalculation, AbcomputeErr> {
    let group_count = validate::group_count(request.group_count)?;
    let GroupEstimate {
        n,
        z_alpha,
        z_power,
    } = group_estimate(
        request.confidence,
        request.minimum_detectable_difference,
        request.baseline_rate,
        request.power,
    )?;
    let total = estimate_total_sample_size(n, group_count)?;

    debug!(
        confidence = request.confidence,
        mdd = request.minimum_detectable_difference,
        baseline = request.baseline_rate,
        power = request.power,
        z_alpha,
        z_power,
        per_group = n,
        total,
        "computed sample size"
    );

    Ok(SampleSizeCalculation {
        per_group: n,
        total,
        group_count,
        z_alpha,
        z_power,
    })
}
