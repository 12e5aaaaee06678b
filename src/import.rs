use std::fs;
use std::path::Path;

use serde::Deserialize;
use tracing::{info, warn};

use crate::doc::RawText;
use crate::error::ImportError;
use crate::store::SqliteStore;
use crate::text::strip_quotes;

/// One collected faculty page: a display name and its biography paragraphs.
#[derive(Debug, Clone, Deserialize)]
pub struct FacultyRecord {
    pub name: String,
    pub biography: RawText,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ImportStats {
    pub inserted: u32,
    pub duplicates: u32,
}

/// Names are stored on one line, upper-cased.
pub fn clean_name(name: &str) -> String {
    name.trim().replace('\n', " ").to_uppercase()
}

/// Paragraphs are joined with single spaces and quote marks removed.
pub fn clean_biography(biography: &RawText) -> String {
    strip_quotes(&biography.flatten())
}

pub fn import_records(records: &[FacultyRecord], store: &SqliteStore) -> Result<ImportStats, ImportError> {
    let mut stats = ImportStats::default();
    for record in records {
        let name = clean_name(&record.name);
        let biography = clean_biography(&record.biography);
        if store.insert(&name, &biography)? {
            stats.inserted += 1;
        } else {
            warn!("Duplicate entry not added for {name}.");
            stats.duplicates += 1;
        }
    }
    Ok(stats)
}

/// Load a JSON array of [`FacultyRecord`]s from `path` into `store`.
pub fn import_file<P: AsRef<Path>>(path: P, store: &SqliteStore) -> Result<ImportStats, ImportError> {
    let raw = fs::read_to_string(path.as_ref())?;
    let records: Vec<FacultyRecord> = serde_json::from_str(&raw)?;
    info!(records = records.len(), source = %path.as_ref().display(), "importing faculty records");
    let stats = import_records(&records, store)?;
    info!(
        inserted = stats.inserted,
        duplicates = stats.duplicates,
        "import finished"
    );
    Ok(stats)
}
