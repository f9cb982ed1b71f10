use crate::cli::parser::Cli;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::{info, success, warning};

/// Handle the `init` command
///
/// This initializes:
///  - the configuration file (left untouched if present)
///  - the lists directory for daily logs and spreadsheets
pub fn handle(cli: &Cli) -> AppResult<()> {
    let path = crate::config_path(cli);
    let existed = path.exists();

    let cfg = Config::init_all(&path)?;

    info("Initializing exemptlog…");
    if existed {
        info(format!("Config file : {} (already present)", path.display()));
    } else {
        info(format!("Config file : {}", path.display()));
    }
    info(format!("Lists dir   : {}", cfg.lists_path().display()));

    if !cfg.roster_path().exists() {
        warning(format!(
            "Roster file {} not found: every member will show as Unknown",
            cfg.roster_path().display()
        ));
    }

    success("exemptlog initialization completed!");
    Ok(())
}
