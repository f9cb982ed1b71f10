use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::export::ExportLogic;
use crate::export::model::{HEADERS, row_to_values};
use crate::ui::messages::{info, warning};
use crate::utils::DateKey;
use crate::utils::table::Table;

/// Handle the `list` command
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::List { date } = cmd {
        let date = DateKey::parse_or_today(date.as_deref())?;
        let rows = ExportLogic::rows_for(cfg, &date)?;

        if rows.is_empty() {
            warning(format!("No requests found for {date}."));
            return Ok(());
        }

        let mut table = Table::with_headers(&HEADERS);
        for r in &rows {
            table.add_row(row_to_values(r));
        }

        info(format!(
            "Exemptions for {date}: {} requests, {} lectures",
            rows.iter().filter(|r| r.is_group_start()).count(),
            rows.len()
        ));
        println!("{}", table.render());
    }
    Ok(())
}
