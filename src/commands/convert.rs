use anyhow::{Context, Result};
use std::path::PathBuf;

use crate::commands::CommandReport;
use crate::harvest;

#[derive(Debug, Clone)]
pub struct ConvertOptions {
    pub wacz_path: PathBuf,
    pub target_dir: PathBuf,
}

pub fn run(opts: &ConvertOptions) -> Result<CommandReport> {
    let mut report = CommandReport::new("convert");

    let outcome = harvest::convert(&opts.wacz_path, &opts.target_dir)
        .with_context(|| format!("failed to convert {}", opts.wacz_path.display()))?;

    report.detail(format!("harvest_name={}", outcome.harvest_name));
    report.detail(format!("harvest_path={}", outcome.harvest_path.display()));
    report.detail(format!("warc_entries_extracted={}", outcome.extracted.len()));
    match &outcome.renamed_warc {
        Some(path) => report.detail(format!("data_warc_renamed_to={}", path.display())),
        None => report.detail("data_warc_renamed_to=none"),
    }

    Ok(report)
}
