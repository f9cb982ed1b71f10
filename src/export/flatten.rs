// src/export/flatten.rs

use crate::export::model::ExportRow;
use crate::models::SubmissionRecord;
use crate::roster::Roster;

/// Flattens a day's submissions into spreadsheet rows.
///
/// - one row per lecture, in arrival order then lecture order
/// - `serial` is the 1-based position of the submission in `records`
/// - serial, name, app ID, year, role and reason only on the first lecture row
/// - course, faculty and timing on every row
///
/// A submission without lectures produces no rows but still uses up its serial.
pub fn flatten(records: &[SubmissionRecord], roster: &Roster) -> Vec<ExportRow> {
    let mut rows = Vec::with_capacity(records.iter().map(|r| r.lectures().len()).sum());

    for (index, record) in records.iter().enumerate() {
        let member = roster.lookup(record.app_id());

        for (lec_index, lec) in record.lectures().iter().enumerate() {
            let mut row = ExportRow {
                course: lec.course.clone(),
                faculty: lec.faculty.clone(),
                timing: lec.timing(),
                ..Default::default()
            };

            if lec_index == 0 {
                row.serial = Some(index + 1);
                row.name = member.name.clone();
                row.app_id = record.app_id().to_string();
                row.year = member.year.clone();
                row.role = member.role.clone();
                row.reason = record.reason().to_string();
            }

            rows.push(row);
        }
    }

    rows
}
