use clap::Parser;
use miette::Result;
use spx::cli::Cli;

fn main() -> Result<()> {
    let cli = Cli::parse();
    spx::cli::run(cli)?;

    Ok(())
}
