use std::env;

use crate::harvest::metadata::HarvestMetadata;

pub const DEFAULT_HARVEST_PREFIX: &str = "Linkra";

/// Harvest name prefix, overridable per deployment.
pub fn harvest_prefix() -> String {
    match env::var("WACZ_HARVEST_PREFIX") {
        Ok(value) if !value.trim().is_empty() => value.trim().to_string(),
        _ => DEFAULT_HARVEST_PREFIX.to_string(),
    }
}

/// Compose the harvest name: `<prefix>-<YYYY-MM>-<stem>`.
///
/// The stem is the WACZ basename cut at the *first* dot, not the last, so
/// `crawl-001.tar.wacz` contributes `crawl-001`. Downstream collections were
/// named under this rule; keep it even for multi-dot filenames.
pub fn harvest_name(prefix: &str, metadata: &HarvestMetadata, wacz_file_name: &str) -> String {
    let stem = wacz_file_name
        .split('.')
        .next()
        .unwrap_or(wacz_file_name);
    format!("{prefix}-{}-{stem}", metadata.required.date)
}
