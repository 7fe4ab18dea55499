//! Persistence of roster snapshots, one JSON file per save.
//!
//! The store keeps no state besides its directory: every list/load re-reads
//! the files, so a record written by `save` is visible to the next call.

mod identifier;

use crate::errors::{AppError, AppResult};
use crate::models::{Schedule, Snapshot};
use crate::ui::messages::warning;
use chrono::NaiveDateTime;
use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use identifier::EXTENSION;

/// Catalog entry returned by [`ScheduleStore::list`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredEntry {
    pub id: String,
    pub year: i32,
    pub month: u32,
}

pub struct ScheduleStore {
    dir: PathBuf,
}

impl ScheduleStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Saves a new record stamped with the local time.
    pub fn save(&self, schedule: &Schedule) -> AppResult<String> {
        self.save_at(schedule, chrono::Local::now().naive_local())
    }

    /// Saves a new record stamped with `saved_at`.
    ///
    /// Never overwrites: if the name is already taken within the same second
    /// a numeric suffix is appended.
    pub fn save_at(&self, schedule: &Schedule, saved_at: NaiveDateTime) -> AppResult<String> {
        fs::create_dir_all(&self.dir)?;

        let json = serde_json::to_string_pretty(&schedule.to_snapshot())
            .map_err(|e| AppError::Other(format!("JSON serialization error: {e}")))?;

        let mut suffix = 0;
        loop {
            let id = identifier::build(schedule.month(), schedule.year(), saved_at, suffix);
            let path = self.path_for(&id);

            match OpenOptions::new().write(true).create_new(true).open(&path) {
                Ok(mut file) => {
                    file.write_all(json.as_bytes())?;
                    return Ok(id);
                }
                Err(e) if e.kind() == io::ErrorKind::AlreadyExists => suffix += 1,
                Err(e) => return Err(e.into()),
            }
        }
    }

    /// All records, newest first. A missing directory is an empty catalog.
    pub fn list(&self) -> AppResult<Vec<StoredEntry>> {
        let read_dir = match fs::read_dir(&self.dir) {
            Ok(rd) => rd,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(e.into()),
        };

        let mut entries = Vec::new();

        for item in read_dir {
            let path = item?.path();
            if path.extension().and_then(|e| e.to_str()) != Some(EXTENSION) {
                continue;
            }
            let Some(id) = path.file_stem().and_then(|s| s.to_str()) else {
                continue;
            };

            match read_record(&path, id) {
                Ok(schedule) => entries.push(StoredEntry {
                    id: id.to_string(),
                    year: schedule.year(),
                    month: schedule.month(),
                }),
                Err(e) => warning(format!("Skipping unreadable record: {e}")),
            }
        }

        entries.sort_by(|a, b| sort_key(&b.id).cmp(&sort_key(&a.id)));
        Ok(entries)
    }

    pub fn load(&self, id: &str) -> AppResult<Schedule> {
        if !identifier::is_safe(id) {
            return Err(AppError::NotFound(id.to_string()));
        }

        let path = self.path_for(id);
        if !path.is_file() {
            return Err(AppError::NotFound(id.to_string()));
        }

        read_record(&path, id)
    }

    /// Removes a record. Unknown identifiers are a no-op.
    pub fn delete(&self, id: &str) -> AppResult<()> {
        if !identifier::is_safe(id) {
            return Ok(());
        }

        match fs::remove_file(self.path_for(id)) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }

    /// Path of every record file currently in the directory.
    pub fn record_paths(&self) -> AppResult<Vec<PathBuf>> {
        let mut out = Vec::new();
        if !self.dir.is_dir() {
            return Ok(out);
        }
        for item in fs::read_dir(&self.dir)? {
            let path = item?.path();
            if path.is_file() && path.extension().and_then(|e| e.to_str()) == Some(EXTENSION) {
                out.push(path);
            }
        }
        out.sort();
        Ok(out)
    }

    fn path_for(&self, id: &str) -> PathBuf {
        self.dir.join(format!("{id}.{EXTENSION}"))
    }
}

/// Reads and validates one record. Anything that is not a snapshot of a
/// real month is `CorruptRecord`; only read failures stay `Io`.
fn read_record(path: &Path, id: &str) -> AppResult<Schedule> {
    let bytes = fs::read(path)?;
    let snapshot: Snapshot =
        serde_json::from_slice(&bytes).map_err(|e| AppError::corrupt(id, e))?;

    Schedule::from_snapshot(&snapshot).map_err(|e| match e {
        AppError::InvalidDate(reason) => AppError::corrupt(id, reason),
        other => other,
    })
}

/// Newest-first ordering key: embedded timestamp, then suffix, then the raw
/// identifier. Names that do not follow the pattern sort last.
fn sort_key(id: &str) -> (Option<(String, u32)>, &str) {
    (identifier::parse(id).map(|r| (r.stamp, r.suffix)), id)
}
