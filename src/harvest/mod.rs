pub mod extract;
pub mod info;
pub mod layout;
pub mod metadata;
pub mod naming;

use std::fs;
use std::io::BufReader;
use std::path::{Path, PathBuf};
use zip::ZipArchive;

use crate::error::HarvestError;

/// Zip-internal namespace holding the capture files.
pub const WARC_ZIP_PREFIX: &str = "archive/";

#[derive(Debug, Clone)]
pub struct ConvertOutcome {
    pub harvest_name: String,
    pub harvest_path: PathBuf,
    pub extracted: Vec<String>,
    pub renamed_warc: Option<PathBuf>,
}

/// Convert one WACZ container into the harvest directory layout.
///
/// Required metadata is validated before the first filesystem mutation, so a
/// manifest error leaves the target directory untouched. A failure after
/// directory creation leaves the partially built tree in place.
pub fn convert(wacz_path: &Path, target_dir: &Path) -> Result<ConvertOutcome, HarvestError> {
    let file = fs::File::open(wacz_path)?;
    let mut wacz = ZipArchive::new(BufReader::new(file))?;

    let harvest_metadata = metadata::read_harvest_metadata(&mut wacz)?;

    let wacz_file_name = wacz_path
        .file_name()
        .and_then(|name| name.to_str())
        .unwrap_or("harvest.wacz");
    let harvest_name =
        naming::harvest_name(&naming::harvest_prefix(), &harvest_metadata, wacz_file_name);

    let harvest_path = target_dir.join(&harvest_name);
    layout::create_directory_structure(&harvest_path)?;

    let extracted = extract::extract_flattened(&mut wacz, WARC_ZIP_PREFIX, &harvest_path)?;
    let renamed_warc = extract::rename_capture_file(&harvest_path, &harvest_name)?;

    info::write_info_file(&harvest_metadata, &harvest_path, wacz_file_name, &harvest_name)?;

    Ok(ConvertOutcome {
        harvest_name,
        harvest_path,
        extracted,
        renamed_warc,
    })
}
