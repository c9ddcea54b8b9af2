//----------------------------------------
// compute mod types
//----------------------------------------
pub use crate::sample_size::error::SampleSizeErr;
pub use crate::sample_size::types::{Parameter, SampleSizeCalculation, SampleSizeRequest};
