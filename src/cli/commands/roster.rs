use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::roster;
use crate::ui::messages::warning;

/// Handle the `roster` command
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Roster { lookup } = cmd {
        let roster = roster::load_or_empty(&cfg.roster_path());

        if let Some(app_id) = lookup {
            let member = roster.lookup(app_id);
            if member.is_unknown() {
                warning(format!("App ID {app_id} is not in the roster"));
            }
            println!("App ID : {}", member.app_id);
            println!("Name   : {}", member.name);
            println!("Year   : {}", member.year);
            println!("Role   : {}", member.role);
        }
    }
    Ok(())
}
