use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::SubmissionService;
use crate::errors::AppResult;
use crate::roster::{self, RosterHandle};
use crate::ui::messages::warning;
use crate::utils::DateKey;
use std::sync::Arc;

/// Handle the `regen` command: same re-render the server does after a submission.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Regen { date } = cmd {
        let date = DateKey::parse_or_today(date.as_deref())?;

        let roster = roster::load_or_empty(&cfg.roster_path());
        let service = SubmissionService::new(cfg, Arc::new(RosterHandle::loaded(roster)));

        if service.regenerate(&date)?.is_none() {
            warning(format!("Spreadsheet for {date} not rebuilt."));
        }
    }
    Ok(())
}
