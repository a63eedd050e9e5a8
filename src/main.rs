use anyhow::Result;
use clap::Parser;

use extfilter::Cli;

fn main() -> Result<()> {
    let cli = Cli::parse();
    cli.run()
}
