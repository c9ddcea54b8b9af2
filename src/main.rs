mod cli;
mod output;

use abcompute::compute::{compute_sample_size, types::SampleSizeRequest};
use abcompute::error::AbcomputeErr;
use anyhow::{Context, Result};
use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::filter::LevelFilter;

use crate::cli::{Cli, OutputFormat};

// Exit status for inputs outside the formula's domain, as opposed to I/O or
// parse failures
const EXIT_INVALID_INPUT: i32 = 2;

fn main() {
    init_tracing();

    if let Err(err) = run() {
        let code = exit_code(&err);
        if code == EXIT_INVALID_INPUT {
            error!(reason = %err.root_cause(), "A/B test inputs rejected");
        } else {
            error!(error = %err, "could not estimate A/B test sample size");
            for cause in err.chain().skip(1) {
                error!(cause = %cause, "caused by");
            }
        }
        std::process::exit(code);
    }
}

fn exit_code(err: &anyhow::Error) -> i32 {
    match err.downcast_ref::<AbcomputeErr>() {
        Some(e) if e.is_invalid_parameter() => EXIT_INVALID_INPUT,
        _ => 1,
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    let request = match &cli.request {
        Some(path) => {
            let raw = std::fs::read_to_string(path)
                .with_context(|| format!("failed to read request {}", path.display()))?;
            serde_json::from_str::<SampleSizeRequest>(&raw)
                .with_context(|| format!("failed to parse request {}", path.display()))?
        }
        None => SampleSizeRequest::from_percentages(
            cli.baseline,
            cli.mdd,
            cli.power,
            cli.confidence,
            usize::from(cli.groups),
        ),
    };
    info!(?request, "computing sample size");

    let calc = compute_sample_size(&request).context("failed to size the A/B test")?;

    let rendered = match cli.format {
        OutputFormat::Text => output::render_text(&calc),
        OutputFormat::Json => output::render_json(&calc)?,
    };
    print!("{rendered}");
    Ok(())
}

// Library events stay quiet unless RUST_LOG asks for them; stdout carries
// only the report
fn init_tracing() {
    let env_filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::WARN.into())
        .from_env_lossy();

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .without_time()
        .with_writer(std::io::stderr)
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;
    use abcompute::compute::estimate_group_sample_size;

    #[test]
    fn invalid_inputs_exit_with_two() {
        let err = estimate_group_sample_size(0.95, 0.2, 0.9, 0.8).unwrap_err();
        let err = anyhow::Error::new(err).context("failed to size the A/B test");
        assert_eq!(exit_code(&err), EXIT_INVALID_INPUT);
    }

    #[test]
    fn other_failures_exit_with_one() {
        let err = anyhow::anyhow!("failed to read request req.json");
        assert_eq!(exit_code(&err), 1);
    }
}
