// src/export/logic.rs

use crate::config::Config;
use crate::errors::AppResult;
use crate::export::ExportFormat;
use crate::export::flatten::flatten;
use crate::export::fs_utils::ensure_writable;
use crate::export::json_csv::{export_csv, export_json};
use crate::export::model::ExportRow;
use crate::export::xlsx::export_xlsx;
use crate::roster;
use crate::store::DailyLogStore;
use crate::ui::messages::warning;
use crate::utils::DateKey;
use std::path::Path;

/// Logica di alto livello per l'export da riga di comando.
pub struct ExportLogic;

impl ExportLogic {
    /// Flattened rows for one day, resolved against the configured roster.
    pub fn rows_for(cfg: &Config, date: &DateKey) -> AppResult<Vec<ExportRow>> {
        let store = DailyLogStore::new(cfg.lists_path());
        let records = store.read_all(date)?;
        if records.is_empty() {
            return Ok(Vec::new());
        }

        let roster = roster::load_or_empty(&cfg.roster_path());
        Ok(flatten(&records, &roster))
    }

    /// Export of one day's rows to an arbitrary file.
    ///
    /// - `format`: xlsx | csv | json
    /// - `force`: overwrite without asking
    pub fn export(
        cfg: &Config,
        date: &DateKey,
        format: &ExportFormat,
        file: &str,
        force: bool,
    ) -> AppResult<()> {
        let path = Path::new(file);

        ensure_writable(path, force)?;

        let rows = Self::rows_for(cfg, date)?;

        if rows.is_empty() {
            warning(format!("No requests found for {date}. Nothing to export."));
            return Ok(());
        }

        match format {
            ExportFormat::Csv => export_csv(&rows, path)?,
            ExportFormat::Json => export_json(&rows, path)?,
            ExportFormat::Xlsx => export_xlsx(&rows, path)?,
        }

        Ok(())
    }
}
