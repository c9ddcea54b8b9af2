use crate::error::AbcomputeErr;
use crate::normal::error::NormalDistErr;
use statrs::distribution::{ContinuousCDF, Normal};

// statrs validates the parameters even for N(0, 1)
fn std_normal() -> Result<Normal, NormalDistErr> {
    Normal::new(0.0, 1.0).map_err(|e| NormalDistErr::Construction(e.to_string()))
}

/// Standard normal CDF. Not used by the sample size formula; exported so
/// callers can turn a critical value back into a probability.
pub fn std_normal_cdf(z: f64) -> Result<f64, AbcomputeErr> {
    Ok(std_normal()?.cdf(z))
}

/// Inverse of the standard normal CDF. Only defined on the open interval
/// (0, 1); the quantile diverges at both endpoints.
pub fn std_normal_quantile(p: f64) -> Result<f64, AbcomputeErr> {
    if !(p > 0.0 && p < 1.0) {
        return Err(NormalDistErr::QuantileOutOfBounds(p).into());
    }
    Ok(std_normal()?.inverse_cdf(p))
}
