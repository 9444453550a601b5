use crate::config::{level_from_flags, RunConfig};
use clap::{ArgAction, Parser};

#[derive(Parser, Debug)]
#[command(name = "fibseq")]
#[command(about = "Print the Fibonacci sequence F(0) through F(100)", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Increase log verbosity on stderr (-v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count, conflicts_with = "quiet")]
    pub verbose: u8,

    /// Only log errors
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    pub fn run_config(&self) -> RunConfig {
        RunConfig::with_log_level(level_from_flags(self.verbose, self.quiet))
    }
}
