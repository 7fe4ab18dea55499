use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::store::ScheduleStore;
use crate::ui::messages::info;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::List = cmd {
        let store = ScheduleStore::new(cfg.storage_path());
        let entries = store.list()?;

        if entries.is_empty() {
            info(format!("No saved rosters in {}", store.dir().display()));
            return Ok(());
        }

        for e in entries {
            println!("{}/{} - {}", e.month, e.year, e.id);
        }
    }

    Ok(())
}
