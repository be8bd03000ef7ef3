// Catalog module: owns the on-disk list of saved movies. The whole document
// is read on every query and rewritten on every save; at this scale a
// whole-file JSON array is plenty, and the interface (load/contains/append/
// list) keeps callers away from the storage details.

use anyhow::{Context, Result};
use std::fs;
use std::path::PathBuf;

use crate::tmdb::MovieRecord;

/// The user's saved-movies list, backed by a single JSON file. Two records
/// are the same entry when their lower-cased names and year strings match;
/// the provider id plays no part in identity.
pub struct Catalog {
    path: PathBuf,
}

/// Result of an append. A duplicate is an informational outcome, not an
/// error: the file is left untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveOutcome {
    Saved,
    AlreadyExists,
}

impl Catalog {
    pub fn new(path: PathBuf) -> Self {
        Catalog { path }
    }

    /// Read the full list. A missing backing file means an empty catalog; a
    /// file that exists but does not parse is an error surfaced to the
    /// caller, with the path named in the message.
    pub fn load(&self) -> Result<Vec<MovieRecord>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }
        let data = fs::read_to_string(&self.path)
            .with_context(|| format!("Failed to read catalog file {}", self.path.display()))?;
        serde_json::from_str(&data)
            .with_context(|| format!("Catalog file {} is not valid JSON", self.path.display()))
    }

    /// Whether an entry with this (name, year) key is already saved.
    /// Name comparison is case-insensitive, year is an exact string match.
    pub fn contains(&self, name: &str, year: &str) -> Result<bool> {
        let entries = self.load()?;
        Ok(entries.iter().any(|entry| same_key(entry, name, year)))
    }

    /// Append a record unless its key is already present. Load, scan, append,
    /// rewrite; the rewrite goes through a temporary sibling file and a
    /// rename so a crash mid-write cannot truncate the list.
    pub fn append(&self, record: &MovieRecord) -> Result<SaveOutcome> {
        let mut entries = self.load()?;
        if entries
            .iter()
            .any(|entry| same_key(entry, &record.name, &record.year))
        {
            return Ok(SaveOutcome::AlreadyExists);
        }
        entries.push(record.clone());
        self.write(&entries)?;
        Ok(SaveOutcome::Saved)
    }

    /// Display rows for the saved list: (position, name, year). The position
    /// is just where the entry sits in the file right now, not a stable id.
    pub fn list(&self) -> Result<Vec<(usize, String, String)>> {
        let entries = self.load()?;
        Ok(entries
            .into_iter()
            .enumerate()
            .map(|(index, entry)| (index, entry.name, entry.year))
            .collect())
    }

    fn write(&self, entries: &[MovieRecord]) -> Result<()> {
        if let Some(dir) = self.path.parent() {
            fs::create_dir_all(dir)
                .with_context(|| format!("Failed to create catalog directory {}", dir.display()))?;
        }
        let json = serde_json::to_string_pretty(entries).context("Serializing catalog")?;
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, json)
            .with_context(|| format!("Failed to write catalog file {}", tmp.display()))?;
        fs::rename(&tmp, &self.path)
            .with_context(|| format!("Failed to replace catalog file {}", self.path.display()))?;
        Ok(())
    }
}

fn same_key(entry: &MovieRecord, name: &str, year: &str) -> bool {
    entry.name.to_lowercase() == name.to_lowercase() && entry.year == year
}
