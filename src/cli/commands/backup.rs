use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::backup::BackupLogic;
use crate::errors::AppResult;
use crate::store::ScheduleStore;
use crate::ui::messages::success;
use std::path::Path;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Backup { file } = cmd {
        let store = ScheduleStore::new(cfg.storage_path());
        let count = BackupLogic::backup(&store, Path::new(file))?;
        success(format!("📦 Backup created: {file} ({count} roster(s) archived)."));
    }

    Ok(())
}
