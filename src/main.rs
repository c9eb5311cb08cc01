//! CLI entry point for the wave function collapse grid generator

use clap::Parser;
use wavegrid::io::cli::{Cli, SolveRunner};

fn main() -> wavegrid::Result<()> {
    let cli = Cli::parse();
    let mut runner = SolveRunner::new(cli);
    runner.process()
}
