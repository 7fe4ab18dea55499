use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::export::ExportLogic;
use crate::store::ScheduleStore;
use std::path::Path;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        id,
        format,
        file,
        force,
    } = cmd
    {
        let store = ScheduleStore::new(cfg.storage_path());
        let schedule = store.load(id)?;
        ExportLogic::export(&schedule, *format, Path::new(file), *force, cfg)?;
    }
    Ok(())
}
