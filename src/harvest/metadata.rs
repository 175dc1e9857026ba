use serde::Deserialize;
use std::io::{Read, Seek};
use zip::ZipArchive;
use zip::result::ZipError;

use crate::error::HarvestError;

const MANIFEST_NAME: &str = "datapackage.json";

/// Raw manifest shape as written by capture tools. Everything is optional at
/// this level; presence of `created` is enforced when the record is built.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Datapackage {
    created: Option<String>,
    title: Option<String>,
    software: Option<String>,
    main_page_url: Option<String>,
    main_page_date: Option<String>,
}

#[derive(Debug, Clone)]
pub struct RequiredHarvestMetadata {
    /// The manifest `created` value, verbatim. Kept as a string on purpose:
    /// ISO-8601 parsing support is inconsistent and the pipeline only ever
    /// needs the year-month head.
    pub full_date: String,
    /// First 7 characters of `full_date`, i.e. `YYYY-MM`.
    pub date: String,
}

#[derive(Debug, Clone, Default)]
pub struct OptionalHarvestMetadata {
    pub title: Option<String>,
    pub software: Option<String>,
    pub main_page_url: Option<String>,
    pub main_page_date: Option<String>,
}

#[derive(Debug, Clone)]
pub struct HarvestMetadata {
    pub required: RequiredHarvestMetadata,
    pub optional: OptionalHarvestMetadata,
}

/// Read and validate `datapackage.json` from the container root.
pub fn read_harvest_metadata<R: Read + Seek>(
    wacz: &mut ZipArchive<R>,
) -> Result<HarvestMetadata, HarvestError> {
    let mut entry = match wacz.by_name(MANIFEST_NAME) {
        Ok(entry) => entry,
        Err(ZipError::FileNotFound) => return Err(HarvestError::MissingManifest),
        Err(err) => return Err(HarvestError::InvalidContainer(err)),
    };

    let mut raw = String::new();
    entry
        .read_to_string(&mut raw)
        .map_err(|err| HarvestError::CorruptArchiveEntry {
            name: MANIFEST_NAME.to_string(),
            source: err,
        })?;

    let datapackage: Datapackage =
        serde_json::from_str(&raw).map_err(|err| HarvestError::MalformedManifest(err.to_string()))?;

    let full_date = datapackage
        .created
        .ok_or(HarvestError::MissingRequiredField("created"))?;
    let date = year_month_token(&full_date)?.to_string();

    Ok(HarvestMetadata {
        required: RequiredHarvestMetadata { full_date, date },
        optional: OptionalHarvestMetadata {
            title: datapackage.title,
            software: datapackage.software,
            main_page_url: datapackage.main_page_url,
            main_page_date: datapackage.main_page_date,
        },
    })
}

/// The year-month token is the first 7 characters of the `created` value.
/// They must look like `YYYY-MM`; the rest of the value is never parsed.
fn year_month_token(full_date: &str) -> Result<&str, HarvestError> {
    let token = full_date.get(..7).ok_or_else(|| {
        HarvestError::MalformedManifest(format!(
            "'created' value '{full_date}' is too short for a YYYY-MM date"
        ))
    })?;

    let bytes = token.as_bytes();
    let shaped = bytes[..4].iter().all(u8::is_ascii_digit)
        && bytes[4] == b'-'
        && bytes[5..7].iter().all(u8::is_ascii_digit);
    if !shaped {
        return Err(HarvestError::MalformedManifest(format!(
            "'created' value '{full_date}' does not start with YYYY-MM"
        )));
    }

    Ok(token)
}
