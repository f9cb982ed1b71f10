//! Daily log store: one append-only JSON array of submissions per calendar day.
//!
//! File layout: `<dir>/exemption_requests_<DD-MM-YYYY>.json`.

use crate::errors::AppResult;
use crate::models::SubmissionRecord;
use crate::utils::DateKey;
use crate::utils::fs::write_atomic;
use std::fs;
use std::path::{Path, PathBuf};

pub const LOG_FILE_PREFIX: &str = "exemption_requests_";

#[derive(Debug, Clone)]
pub struct DailyLogStore {
    dir: PathBuf,
}

impl DailyLogStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn log_path(&self, date: &DateKey) -> PathBuf {
        self.dir.join(format!("{LOG_FILE_PREFIX}{date}.json"))
    }

    pub fn exists(&self, date: &DateKey) -> bool {
        self.log_path(date).exists()
    }

    /// Creates the directory and an empty array for `date` if they are missing.
    pub fn ensure(&self, date: &DateKey) -> AppResult<PathBuf> {
        fs::create_dir_all(&self.dir)?;

        let path = self.log_path(date);
        if !path.exists() {
            write_atomic(&path, b"[]")?;
        }
        Ok(path)
    }

    /// Read-modify-write append. Callers must serialize appends for the same
    /// day; concurrent writers can lose records.
    ///
    /// Returns the number of records in the log after the append.
    pub fn append(&self, date: &DateKey, record: &SubmissionRecord) -> AppResult<usize> {
        let path = self.ensure(date)?;

        let mut records = read_records(&path)?;
        records.push(record.clone());

        let json = serde_json::to_string_pretty(&records)?;
        write_atomic(&path, json.as_bytes())?;

        Ok(records.len())
    }

    /// All records for `date` in arrival order; empty if the day has no log.
    pub fn read_all(&self, date: &DateKey) -> AppResult<Vec<SubmissionRecord>> {
        let path = self.log_path(date);
        if !path.exists() {
            return Ok(Vec::new());
        }
        read_records(&path)
    }
}

fn read_records(path: &Path) -> AppResult<Vec<SubmissionRecord>> {
    let raw = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&raw)?)
}
