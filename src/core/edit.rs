use crate::errors::AppResult;
use crate::models::Slot;
use crate::store::ScheduleStore;
use crate::ui::messages::info;

pub struct EditLogic;

impl EditLogic {
    /// Loads `id`, writes one cell and saves the result as a new record.
    ///
    /// The original record is kept unless `replace` is set, in which case it
    /// is deleted once the new one is safely written. Returns the new id.
    pub fn set_cell(
        store: &ScheduleStore,
        id: &str,
        day: u32,
        slot: Slot,
        value: &str,
        replace: bool,
    ) -> AppResult<String> {
        let mut schedule = store.load(id)?;
        schedule.set_shift(day, slot, value)?;

        let new_id = store.save(&schedule)?;

        if replace && new_id != id {
            store.delete(id)?;
            info(format!("Replaced {id}"));
        }

        Ok(new_id)
    }
}
