//! Record identifiers: `escala_{MM}_{YYYY}_{YYYYMMDD}_{HHMMSS}[_{n}]`.

use chrono::NaiveDateTime;

const PREFIX: &str = "escala";
pub(crate) const EXTENSION: &str = "json";

/// Parsed form of an identifier, used for ordering the catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct RecordName {
    pub stamp: String,
    pub suffix: u32,
}

pub(crate) fn build(month: u32, year: i32, saved_at: NaiveDateTime, suffix: u32) -> String {
    let stamp = saved_at.format("%Y%m%d_%H%M%S");
    if suffix == 0 {
        format!("{PREFIX}_{month:02}_{year}_{stamp}")
    } else {
        format!("{PREFIX}_{month:02}_{year}_{stamp}_{suffix}")
    }
}

/// Identifiers are plain file stems; anything that could escape the
/// storage directory never resolves.
pub(crate) fn is_safe(id: &str) -> bool {
    !id.is_empty()
        && !id.contains(['/', '\\'])
        && !id.contains("..")
        && !id.starts_with('.')
}

pub(crate) fn parse(id: &str) -> Option<RecordName> {
    let rest = id.strip_prefix(PREFIX)?.strip_prefix('_')?;
    let parts: Vec<&str> = rest.split('_').collect();

    if parts.len() != 4 && parts.len() != 5 {
        return None;
    }

    parts[0].parse::<u32>().ok()?;
    parts[1].parse::<i32>().ok()?;

    if parts[2].len() != 8 || parts[3].len() != 6 {
        return None;
    }
    if !parts[2].chars().chain(parts[3].chars()).all(|c| c.is_ascii_digit()) {
        return None;
    }

    let suffix = match parts.get(4) {
        Some(s) => s.parse().ok()?,
        None => 0,
    };

    Some(RecordName {
        stamp: format!("{}{}", parts[2], parts[3]),
        suffix,
    })
}
