use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use crate::error::HarvestError;

/// Create the harvest directory skeleton.
///
/// Each level is a plain single-directory create, in parent-before-child
/// order; there is no cleanup of levels already created when a later one
/// fails.
pub fn create_directory_structure(harvest_path: &Path) -> Result<(), HarvestError> {
    // Root directory; warc files land here.
    make_dir(harvest_path)?;

    let logs_path = harvest_path.join("logs");
    make_dir(&logs_path)?;

    // Reserved for the old cdx index format. Stays empty but the downstream
    // pipeline expects it to exist.
    make_dir(&logs_path.join("cdx"))?;

    // Would hold gzipped crawler logs; here it receives the info file.
    make_dir(&logs_path.join("crawl"))?;

    Ok(())
}

fn make_dir(path: &Path) -> Result<(), HarvestError> {
    fs::create_dir(path).map_err(|err| match err.kind() {
        ErrorKind::AlreadyExists => HarvestError::DestinationAlreadyExists(path.to_path_buf()),
        ErrorKind::PermissionDenied => HarvestError::PermissionDenied(path.to_path_buf()),
        _ => HarvestError::Io(err),
    })
}
