use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;

use crate::commands::convert::{self, ConvertOptions};

#[derive(Debug, Parser)]
#[command(name = "wacz-harvest", version, about = "Convert WACZ into directory structure.")]
struct Cli {
    /// Path to the WACZ file.
    file: PathBuf,

    /// Directory into which the converted harvest is stored.
    target_directory: PathBuf,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    let report = convert::run(&ConvertOptions {
        wacz_path: cli.file,
        target_dir: cli.target_directory,
    })?;

    for line in &report.details {
        println!("{line}");
    }

    Ok(())
}
