// src/export/model.rs

use serde::Serialize;

/// One spreadsheet row. Identity fields are only set on the first lecture of
/// a submission, so consecutive rows of the same request read like merged cells.
#[derive(Serialize, Clone, Debug, Default, PartialEq)]
pub struct ExportRow {
    #[serde(rename = "Sr. No.")]
    pub serial: Option<usize>,
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "App ID")]
    pub app_id: String,
    #[serde(rename = "Year")]
    pub year: String,
    #[serde(rename = "Role")]
    pub role: String,
    #[serde(rename = "Course")]
    pub course: String,
    #[serde(rename = "Faculty")]
    pub faculty: String,
    #[serde(rename = "Lecture Timing")]
    pub timing: String,
    #[serde(rename = "Reason")]
    pub reason: String,
}

impl ExportRow {
    /// First row of a submission group.
    pub fn is_group_start(&self) -> bool {
        self.serial.is_some()
    }
}

/// Header per CSV / JSON / XLSX / terminal, in column order.
pub const HEADERS: [&str; 9] = [
    "Sr. No.",
    "Name",
    "App ID",
    "Year",
    "Role",
    "Course",
    "Faculty",
    "Lecture Timing",
    "Reason",
];

/// Spreadsheet column widths, in characters.
pub const COLUMN_WIDTHS: [f64; 9] = [8.0, 20.0, 10.0, 10.0, 20.0, 20.0, 20.0, 15.0, 40.0];

/// Row → cells in [`HEADERS`] order; missing serial becomes "".
pub fn row_to_values(r: &ExportRow) -> Vec<String> {
    vec![
        r.serial.map(|s| s.to_string()).unwrap_or_default(),
        r.name.clone(),
        r.app_id.clone(),
        r.year.clone(),
        r.role.clone(),
        r.course.clone(),
        r.faculty.clone(),
        r.timing.clone(),
        r.reason.clone(),
    ]
}
