use anyhow::{Context, Result};
use clap::Parser;
use fibseq::cli::Cli;
use fibseq::{generate, observability, print_sequence};

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = cli.run_config();

    observability::init_logging(config.log_level).context("Failed to initialise logging")?;

    let sequence = generate(config.upper_index);
    tracing::info!(terms = sequence.len(), "Generated Fibonacci sequence");
    if let Some(index) = sequence.first_wrapped_index() {
        tracing::debug!(index, "32-bit overflow: terms from this index on have wrapped");
    }

    print_sequence(&sequence).context("Failed to write sequence to stdout")?;
    Ok(())
}
