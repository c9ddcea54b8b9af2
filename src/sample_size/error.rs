//----------------------------------------
// sample size errors
//----------------------------------------
use crate::error::AbcomputeErr;
use crate::sample_size::types::Parameter;
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum SampleSizeErr {
    #[error("invalid {param} (got {value}): {constraint}")]
    InvalidParameter {
        param: Parameter,
        value: f64,
        constraint: &'static str,
    },
    #[error("sample size formula produced a non-finite value ({0})")]
    NonFiniteResult(f64),
}

impl From<SampleSizeErr> for AbcomputeErr {
    fn from(err: SampleSizeErr) -> Self {
        AbcomputeErr::SampleSize(err)
    }
}
