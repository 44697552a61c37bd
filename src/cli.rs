//! Command-line interface for spx.

use std::path::PathBuf;

use clap::Parser;

use crate::error::Result;
use crate::output::{display_path, plural, Printer};

/// spx - Export sprites and sprite metadata from a layered PSD document
#[derive(Parser, Debug)]
#[command(name = "spx")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Input layered document (.psd)
    pub input: PathBuf,

    /// Output directory; receives sprites/ and sprites.kml
    pub output: PathBuf,
}

pub fn run(cli: Cli) -> Result<()> {
    let printer = Printer::new();

    let doc = crate::psd::open_document(&cli.input)?;
    printer.status(
        "Converting",
        &format!(
            "{} ({} x {})",
            display_path(&cli.input),
            doc.width,
            doc.height
        ),
    );

    let conversion = crate::convert::convert_document(&doc, &cli.output, &printer)?;
    printer.success(
        "Finished",
        &format!(
            "{} -> {}",
            plural(conversion.sprites.len(), "sprite", "sprites"),
            display_path(&cli.output)
        ),
    );

    Ok(())
}
