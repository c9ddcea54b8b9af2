//----------------------------------------
// sample_size mod
//----------------------------------------
pub mod compute_ss;
pub mod error;
pub mod types;
mod validate;
