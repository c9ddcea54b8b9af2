//----------------------------------------
// Crate error type
//----------------------------------------
use crate::normal::error::NormalDistErr;
use crate::sample_size::error::SampleSizeErr;
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum AbcomputeErr {
    #[error("while evaluating normal distribution: {0}")]
    NormalDist(NormalDistErr),
    #[error("while computing sample size: {0}")]
    SampleSize(SampleSizeErr),
}

impl AbcomputeErr {
    /// True when the error was caused by an input outside its valid domain
    pub fn is_invalid_parameter(&self) -> bool {
        matches!(
            self,
            AbcomputeErr::SampleSize(SampleSizeErr::InvalidParameter { .. })
                | AbcomputeErr::NormalDist(NormalDistErr::QuantileOutOfBounds(_))
        )
    }
}
