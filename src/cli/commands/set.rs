use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::edit::EditLogic;
use crate::errors::AppResult;
use crate::models::Slot;
use crate::store::ScheduleStore;
use crate::ui::messages::success;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Set {
        id,
        day,
        slot,
        text,
        replace,
    } = cmd
    {
        let slot = Slot::from_code(slot)?;
        let store = ScheduleStore::new(cfg.storage_path());

        let new_id = EditLogic::set_cell(&store, id, *day, slot, text, *replace)?;

        success(format!("Day {} / {} saved.", day, slot.label()));
        println!("{new_id}");
    }

    Ok(())
}
