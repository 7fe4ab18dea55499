use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::models::Schedule;
use crate::store::ScheduleStore;
use crate::ui::messages::success;
use crate::utils::date;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::New { month, year } = cmd {
        let month = month.unwrap_or_else(date::current_month);
        let year = year.unwrap_or_else(date::current_year);

        let schedule = Schedule::blank(year, month)?;
        let store = ScheduleStore::new(cfg.storage_path());
        let id = store.save(&schedule)?;

        success(format!(
            "Roster {}/{} created ({} days).",
            schedule.month_name(),
            year,
            schedule.len()
        ));
        println!("{id}");
    }

    Ok(())
}
