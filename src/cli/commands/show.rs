use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::render::{HEADERS, RosterTable};
use crate::store::ScheduleStore;
use crate::ui::messages::header;
use crate::utils::colors::weekend_line;
use crate::utils::formatting::max_width;
use crate::utils::table::{Column, Table};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Show { id } = cmd {
        let store = ScheduleStore::new(cfg.storage_path());
        let schedule = store.load(id)?;
        let roster = RosterTable::from_schedule(&schedule);

        header(&roster.title);
        print!("{}", build_table(&roster).render_with(decorate));
    }

    Ok(())
}

fn build_table(roster: &RosterTable) -> Table {
    let columns = HEADERS
        .iter()
        .enumerate()
        .map(|(i, h)| Column {
            header: h.to_string(),
            width: max_width(
                std::iter::once(*h).chain(roster.rows.iter().map(|r| cell(&r.cells[i]))),
                0,
            ),
        })
        .collect();

    let mut table = Table::new(columns);
    for row in &roster.rows {
        let cells = row.cells.iter().map(|c| cell(c).to_string()).collect();
        table.add_row(cells, row.is_weekend);
    }
    table
}

/// Unassigned slots print as a dash.
fn cell(value: &str) -> &str {
    if value.is_empty() { "-" } else { value }
}

fn decorate(line: &str, weekend: bool) -> String {
    if weekend {
        weekend_line(line)
    } else {
        line.to_string()
    }
}
