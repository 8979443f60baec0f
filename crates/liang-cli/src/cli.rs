use clap::{ArgAction, Parser, Subcommand};

use crate::check::{CheckArgs, run_check};
use crate::error::Result;
use crate::hyphenate::{HyphenateArgs, run_hyphenate};
use crate::logging;

#[derive(Debug, Parser)]
#[command(
    name = "liang",
    about = "Hyphenate words with TeX/Liang patterns",
    version
)]
pub struct Cli {
    /// Raise log verbosity (-v debug, -vv trace). RUST_LOG overrides.
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Print each word split at its hyphenation points.
    Hyphenate(HyphenateArgs),

    /// Compare a dictionary against expected hyphenations like `hy-phen-ation`.
    Check(CheckArgs),
}

pub fn run_from_env() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);
    run(cli)
}

pub fn run(cli: Cli) -> Result<()> {
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    match cli.command {
        Commands::Hyphenate(args) => run_hyphenate(&args, &mut out),
        Commands::Check(args) => run_check(&args, &mut out),
    }
}
