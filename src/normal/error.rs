//----------------------------------------
// normal distribution errors
//----------------------------------------
use crate::error::AbcomputeErr;
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum NormalDistErr {
    #[error("arguments to quantile function should be in (0, 1); got {0}")]
    QuantileOutOfBounds(f64),
    #[error("failed to construct standard normal distribution: {0}")]
    Construction(String),
}

impl From<NormalDistErr> for AbcomputeErr {
    fn from(err: NormalDistErr) -> Self {
        AbcomputeErr::NormalDist(err)
    }
}
