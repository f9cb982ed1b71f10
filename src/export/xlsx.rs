// src/export/xlsx.rs

use crate::errors::AppResult;
use crate::export::model::{COLUMN_WIDTHS, ExportRow, HEADERS, row_to_values};
use crate::export::notify_export_success;
use crate::utils::fs::write_atomic;
use rust_xlsxwriter::{Color, Format, FormatAlign, FormatBorder, FormatPattern, Workbook};
use std::path::Path;

pub const SHEET_NAME: &str = "Exemptions";

/// Renders the rows to `path`, replacing whatever was there.
pub fn export_xlsx(rows: &[ExportRow], path: &Path) -> AppResult<()> {
    let buffer = build_workbook(rows)?;
    write_atomic(path, &buffer)?;

    notify_export_success("XLSX", path);
    Ok(())
}

/// Builds the workbook in memory: fixed headers, fixed widths, one band colour
/// per submission group.
pub fn build_workbook(rows: &[ExportRow]) -> AppResult<Vec<u8>> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet.set_name(SHEET_NAME)?;

    // ---------------------------
    // Header
    // ---------------------------
    let header_format = Format::new()
        .set_bold()
        .set_font_color(Color::RGB(0xFFFFFF))
        .set_background_color(Color::RGB(0x2F75B5))
        .set_pattern(FormatPattern::Solid)
        .set_border(FormatBorder::Thin);

    for (col, header) in HEADERS.iter().enumerate() {
        worksheet.write_with_format(0, col as u16, *header, &header_format)?;
    }
    worksheet.set_freeze_panes(1, 0)?;

    for (col, width) in COLUMN_WIDTHS.iter().enumerate() {
        worksheet.set_column_width(col as u16, *width)?;
    }

    // ---------------------------
    // Scrittura righe
    // ---------------------------
    let band1 = Color::RGB(0xEAF3FB);
    let band2 = Color::RGB(0xFFFFFF);
    let mut group = 0usize;

    for (row_index, r) in rows.iter().enumerate() {
        if r.is_group_start() && row_index > 0 {
            group += 1;
        }
        let band_color = if group % 2 == 0 { band1 } else { band2 };
        let row = (row_index + 1) as u32;

        let cell_format = Format::new()
            .set_background_color(band_color)
            .set_pattern(FormatPattern::Solid)
            .set_border(FormatBorder::Thin)
            .set_align(FormatAlign::Top);

        match r.serial {
            Some(n) => {
                let serial_format = cell_format.clone().set_align(FormatAlign::Center);
                worksheet.write_with_format(row, 0, n as f64, &serial_format)?;
            }
            None => {
                worksheet.write_blank(row, 0, &cell_format)?;
            }
        }

        for (col, value) in row_to_values(r).iter().enumerate().skip(1) {
            if value.is_empty() {
                worksheet.write_blank(row, col as u16, &cell_format)?;
            } else {
                worksheet.write_with_format(row, col as u16, value.as_str(), &cell_format)?;
            }
        }
    }

    Ok(workbook.save_to_buffer()?)
}
