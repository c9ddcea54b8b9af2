use std::path::PathBuf;

use clap::{Parser, ValueEnum};

// Input ranges follow the sliders of the interactive calculator
#[derive(Parser, Debug)]
#[command(
    name = "abcompute",
    version,
    about = "Sample size calculator for two-proportion A/B tests"
)]
pub struct Cli {
    /// Number of test groups including the control group
    #[arg(long, default_value_t = 2, value_parser = clap::value_parser!(u16).range(2..=10))]
    pub groups: u16,

    /// Baseline value of the test metric (%)
    #[arg(long, default_value_t = 10.0, value_parser = baseline_pct)]
    pub baseline: f64,

    /// Minimum detectable difference in the test metric (%)
    #[arg(long, default_value_t = 5.0, value_parser = mdd_pct)]
    pub mdd: f64,

    /// Statistical power, typically 0.8
    #[arg(long, default_value_t = 0.8, value_parser = power)]
    pub power: f64,

    /// Statistical confidence 1 - alpha, typically 0.95
    #[arg(long, default_value_t = 0.95, value_parser = confidence)]
    pub confidence: f64,

    /// Read the request from a JSON file instead (rates as proportions)
    #[arg(long, conflicts_with_all = ["groups", "baseline", "mdd", "power", "confidence"])]
    pub request: Option<PathBuf>,

    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

fn ranged(raw: &str, min: f64, max: f64) -> Result<f64, String> {
    let value: f64 = raw
        .parse()
        .map_err(|_| format!("`{raw}` is not a number"))?;
    if (min..=max).contains(&value) {
        Ok(value)
    } else {
        Err(format!("{value} is not in {min}..={max}"))
    }
}

fn baseline_pct(raw: &str) -> Result<f64, String> {
    ranged(raw, 0.0, 100.0)
}

fn mdd_pct(raw: &str) -> Result<f64, String> {
    ranged(raw, 0.1, 20.0)
}

fn power(raw: &str) -> Result<f64, String> {
    ranged(raw, 0.1, 0.9)
}

fn confidence(raw: &str) -> Result<f64, String> {
    ranged(raw, 0.80, 0.99)
}
