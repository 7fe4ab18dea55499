#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use rplantao::models::{Schedule, Slot};
use rplantao::store::ScheduleStore;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Binary under test, isolated from the user's real config and colours.
pub fn rpl(home: &Path) -> Command {
    let mut cmd = cargo_bin_cmd!("rplantao");
    cmd.env("HOME", home)
        .env("APPDATA", home)
        .env("NO_COLOR", "1");
    cmd
}

pub fn temp_dir() -> TempDir {
    tempfile::tempdir().expect("create temp dir")
}

/// Storage directory inside `dir` (not created).
pub fn store_path(dir: &TempDir) -> PathBuf {
    dir.path().join("escalas")
}

pub fn store_in(dir: &TempDir) -> ScheduleStore {
    ScheduleStore::new(store_path(dir))
}

/// A roster with a few assignments, leaving most cells empty.
pub fn sample_schedule(year: i32, month: u32) -> Schedule {
    let mut s = Schedule::blank(year, month).expect("valid month");
    s.set_shift(1, Slot::Night, "Ana").expect("day 1");
    s.set_shift(1, Slot::Morning, "Bruno").expect("day 1");
    s.set_shift(5, Slot::Afternoon, "Dra. Conceição").expect("day 5");
    s.set_shift(28, Slot::Night, "João").expect("day 28");
    s
}

/// Last non-empty stdout line, where commands print identifiers.
pub fn last_line(stdout: &[u8]) -> String {
    String::from_utf8_lossy(stdout)
        .lines()
        .rev()
        .find(|l| !l.trim().is_empty())
        .unwrap_or("")
        .trim()
        .to_string()
}
