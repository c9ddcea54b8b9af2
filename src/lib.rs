//----------------------------------------
// Root lib
//----------------------------------------
//! The purpose of this library is to compute the sample size needed for an
//! A/B test on a conversion rate, given a baseline rate, the smallest lift
//! worth detecting, a confidence level and power. Right now the only
//! supported design is the two-sided two-proportion z-test.

/// This module houses the public API for computing sample sizes
pub mod compute;
/// This module contains error types
pub mod error;
/// Standard normal distribution helpers
pub mod normal;
mod sample_size;
