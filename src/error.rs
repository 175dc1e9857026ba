use std::path::PathBuf;
use thiserror::Error;

/// Failure kinds of a WACZ conversion. All of these are fatal; the pipeline
/// never retries and never rolls back directories created before the failure.
#[derive(Debug, Error)]
pub enum HarvestError {
    #[error("archive has no datapackage.json at its root")]
    MissingManifest,

    #[error("datapackage.json is not valid manifest data: {0}")]
    MalformedManifest(String),

    #[error("datapackage.json is missing the required '{0}' property")]
    MissingRequiredField(&'static str),

    #[error("destination {} already exists", .0.display())]
    DestinationAlreadyExists(PathBuf),

    #[error("permission denied while creating {}", .0.display())]
    PermissionDenied(PathBuf),

    #[error("output file {} already exists", .0.display())]
    OutputCollision(PathBuf),

    #[error("archive entry '{name}' could not be read")]
    CorruptArchiveEntry {
        name: String,
        #[source]
        source: std::io::Error,
    },

    #[error("not a readable zip container: {0}")]
    InvalidContainer(#[from] zip::result::ZipError),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
