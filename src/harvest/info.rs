use chrono::Local;
use std::fs;
use std::path::Path;

use crate::error::HarvestError;
use crate::harvest::metadata::HarvestMetadata;

const TOOL_NAME: &str = env!("CARGO_PKG_NAME");
const TOOL_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Write the provenance record to `logs/crawl/info.txt`.
pub fn write_info_file(
    harvest_metadata: &HarvestMetadata,
    harvest_path: &Path,
    wacz_file_name: &str,
    harvest_name: &str,
) -> Result<(), HarvestError> {
    let conversion_date = Local::now().format("%Y-%m-%dT%H:%M:%S%.6f").to_string();
    let content = render_info(
        harvest_metadata,
        wacz_file_name,
        harvest_name,
        &conversion_date,
    );

    let info_file_path = harvest_path.join("logs/crawl/info.txt");
    fs::write(&info_file_path, content)?;
    Ok(())
}

/// One `key: value` line per field, fixed order. `wacz_created` is the
/// manifest timestamp verbatim; `conversion_date` is the wall clock of this
/// run. Absent optional fields get no line at all.
fn render_info(
    harvest_metadata: &HarvestMetadata,
    wacz_file_name: &str,
    harvest_name: &str,
    conversion_date: &str,
) -> String {
    let mut out = String::new();
    out.push_str("info: this harvest was extracted from WACZ file\n");
    out.push_str(&format!("original_file: {wacz_file_name}\n"));
    out.push_str(&format!("converted_with: {TOOL_NAME} {TOOL_VERSION}\n"));
    out.push_str(&format!("conversion_date: {conversion_date}\n"));
    out.push_str(&format!("harvest_name: {harvest_name}\n"));
    out.push_str(&format!(
        "wacz_created: {}\n",
        harvest_metadata.required.full_date
    ));

    let optional = &harvest_metadata.optional;
    if let Some(title) = &optional.title {
        out.push_str(&format!("wacz_title: {title}\n"));
    }
    if let Some(software) = &optional.software {
        out.push_str(&format!("wacz_software: {software}\n"));
    }
    if let Some(main_page_url) = &optional.main_page_url {
        out.push_str(&format!("wacz_main_page_url: {main_page_url}\n"));
    }
    if let Some(main_page_date) = &optional.main_page_date {
        out.push_str(&format!("wacz_main_page_date: {main_page_date}\n"));
    }

    out
}
