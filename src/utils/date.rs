use chrono::{Datelike, NaiveDate, Weekday};

/// Nomi dei mesi, indice 0 = gennaio.
pub const MONTH_NAMES: [&str; 12] = [
    "Janeiro",
    "Fevereiro",
    "Março",
    "Abril",
    "Maio",
    "Junho",
    "Julho",
    "Agosto",
    "Setembro",
    "Outubro",
    "Novembro",
    "Dezembro",
];

pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

pub fn current_month() -> u32 {
    today().month()
}

pub fn current_year() -> i32 {
    today().year()
}

/// Month label for 1..=12, `None` otherwise.
pub fn month_name(month: u32) -> Option<&'static str> {
    month
        .checked_sub(1)
        .and_then(|idx| MONTH_NAMES.get(idx as usize))
        .copied()
}

pub fn weekday_label(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "Segunda",
        Weekday::Tue => "Terça",
        Weekday::Wed => "Quarta",
        Weekday::Thu => "Quinta",
        Weekday::Fri => "Sexta",
        Weekday::Sat => "Sábado",
        Weekday::Sun => "Domingo",
    }
}

/// `DD/MM/YYYY`, the format used in snapshots and rendered tables.
pub fn format_day(date: NaiveDate) -> String {
    date.format("%d/%m/%Y").to_string()
}
