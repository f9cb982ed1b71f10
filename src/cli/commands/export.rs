use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::export::ExportLogic;
use crate::ui::messages::info;
use crate::utils::DateKey;

/// Handle the `export` command
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        date,
        format,
        file,
        force,
    } = cmd
    {
        let date = DateKey::parse_or_today(date.as_deref())?;
        info(format!("Exporting {date} as {}", format.as_str()));
        ExportLogic::export(cfg, &date, format, file, *force)?;
    }
    Ok(())
}
