//----------------------------------------
// compute mod
//----------------------------------------
pub mod types;

pub use crate::sample_size::compute_ss::{
    compute_sample_size, estimate_group_sample_size, estimate_total_sample_size,
};
