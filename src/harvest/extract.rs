use std::fs;
use std::io::{self, Read, Seek};
use std::path::{Path, PathBuf};
use zip::ZipArchive;

use crate::error::HarvestError;

/// Conventional name capture tools give the single data file.
pub const CANONICAL_WARC_NAME: &str = "data.warc.gz";

const WARC_EXTENSION: &str = "warc.gz";

/// Stream every entry under `zip_prefix` into `target_dir`, flattened.
///
/// Zip-internal directory segments never reach the filesystem: only the final
/// path component of each entry is used as the output name, which also strips
/// any `..` segments a hostile container could carry. Directory markers are
/// skipped. Returns the flattened file names in container order.
pub fn extract_flattened<R: Read + Seek>(
    wacz: &mut ZipArchive<R>,
    zip_prefix: &str,
    target_dir: &Path,
) -> Result<Vec<String>, HarvestError> {
    let mut extracted = Vec::new();

    for index in 0..wacz.len() {
        let mut entry = wacz.by_index(index)?;
        if !entry.name().starts_with(zip_prefix) || entry.is_dir() {
            continue;
        }

        let entry_name = entry.name().to_string();
        let Some(file_name) = Path::new(&entry_name).file_name() else {
            continue;
        };

        let target = target_dir.join(file_name);
        if target.exists() {
            return Err(HarvestError::OutputCollision(target));
        }

        let mut out = fs::File::create(&target)?;
        io::copy(&mut entry, &mut out).map_err(|err| HarvestError::CorruptArchiveEntry {
            name: entry_name.clone(),
            source: err,
        })?;

        extracted.push(file_name.to_string_lossy().into_owned());
    }

    Ok(extracted)
}

/// Rename the conventional `data.warc.gz` to a name unique per harvest, so
/// converted collections can sit side by side. Absent canonical file means
/// the container carried zero or differently-named warcs; leave those alone.
pub fn rename_capture_file(
    target_dir: &Path,
    harvest_name: &str,
) -> Result<Option<PathBuf>, HarvestError> {
    let canonical = target_dir.join(CANONICAL_WARC_NAME);
    if !canonical.exists() {
        return Ok(None);
    }

    let unique = target_dir.join(format!("{harvest_name}.{WARC_EXTENSION}"));
    if unique.exists() {
        return Err(HarvestError::OutputCollision(unique));
    }

    fs::rename(&canonical, &unique)?;
    Ok(Some(unique))
}
