//! Submission pipeline: append to today's log, then re-render today's
//! spreadsheet from the whole log.

use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::export::{export_xlsx, flatten};
use crate::models::{SubmissionPayload, SubmissionRecord};
use crate::roster::RosterHandle;
use crate::store::DailyLogStore;
use crate::ui::messages::{error, info};
use crate::utils::DateKey;
use chrono::{DateTime, Utc};
use std::path::PathBuf;
use std::sync::{Arc, Mutex, PoisonError};

pub struct SubmissionService {
    store: DailyLogStore,
    cfg: Config,
    roster: Arc<RosterHandle>,
    // single writer: one read-modify-write cycle at a time
    writer: Mutex<()>,
}

impl SubmissionService {
    pub fn new(cfg: &Config, roster: Arc<RosterHandle>) -> Self {
        Self {
            store: DailyLogStore::new(cfg.lists_path()),
            cfg: cfg.clone(),
            roster,
            writer: Mutex::new(()),
        }
    }

    pub fn store(&self) -> &DailyLogStore {
        &self.store
    }

    pub fn xlsx_path(&self, date: &DateKey) -> PathBuf {
        self.cfg.xlsx_path(date)
    }

    /// Stamps the payload with the current time and files it under today.
    pub fn submit(&self, payload: SubmissionPayload) -> AppResult<SubmissionRecord> {
        self.submit_at(payload, Utc::now(), DateKey::today())
    }

    pub fn submit_at(
        &self,
        payload: SubmissionPayload,
        now: DateTime<Utc>,
        date: DateKey,
    ) -> AppResult<SubmissionRecord> {
        let _guard = self.writer.lock().unwrap_or_else(PoisonError::into_inner);

        let record = SubmissionRecord::new(payload, now);
        let total = self.store.append(&date, &record)?;
        info(format!(
            "Request {} saved to {} ({total} today)",
            record.id,
            self.store.log_path(&date).display()
        ));

        self.regenerate_locked(&date)?;
        Ok(record)
    }

    /// Rebuilds the spreadsheet for `date` from the full log.
    ///
    /// Returns the written path, or `None` when there is no log for the day or
    /// the log cannot be parsed. A parse failure is logged and leaves the
    /// previous spreadsheet in place.
    pub fn regenerate(&self, date: &DateKey) -> AppResult<Option<PathBuf>> {
        let _guard = self.writer.lock().unwrap_or_else(PoisonError::into_inner);
        self.regenerate_locked(date)
    }

    fn regenerate_locked(&self, date: &DateKey) -> AppResult<Option<PathBuf>> {
        if !self.store.exists(date) {
            return Ok(None);
        }

        let records = match self.store.read_all(date) {
            Ok(records) => records,
            Err(AppError::Json(e)) => {
                error(format!(
                    "Error parsing {}: {e}",
                    self.store.log_path(date).display()
                ));
                return Ok(None);
            }
            Err(e) => return Err(e),
        };

        let rows = {
            let roster = self.roster.read();
            flatten(&records, &roster)
        };

        let path = self.xlsx_path(date);
        export_xlsx(&rows, &path)?;
        Ok(Some(path))
    }
}
