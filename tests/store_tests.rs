mod common;

use chrono::NaiveDate;
use common::{sample_schedule, store_in, store_path, temp_dir};
use rplantao::errors::AppError;
use rplantao::models::Schedule;
use rplantao::store::ScheduleStore;
use std::fs;

fn at(y: i32, m: u32, d: u32, h: u32, min: u32, s: u32) -> chrono::NaiveDateTime {
    NaiveDate::from_ymd_opt(y, m, d)
        .unwrap()
        .and_hms_opt(h, min, s)
        .unwrap()
}

#[test]
fn test_save_then_list_single_entry() {
    let dir = temp_dir();
    let store = store_in(&dir);

    let id = store.save(&Schedule::blank(2025, 5).unwrap()).unwrap();

    let entries = store.list().unwrap();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].id, id);
    assert_eq!(entries[0].year, 2025);
    assert_eq!(entries[0].month, 5);
    assert!(id.starts_with("escala_05_2025_"), "{id}");
}

#[test]
fn test_save_creates_storage_directory() {
    let dir = temp_dir();
    let store = store_in(&dir);
    assert!(!store_path(&dir).exists());

    store.save(&Schedule::blank(2024, 1).unwrap()).unwrap();
    assert!(store_path(&dir).is_dir());
}

#[test]
fn test_list_missing_directory_is_empty() {
    let dir = temp_dir();
    let store = ScheduleStore::new(dir.path().join("nope"));
    assert!(store.list().unwrap().is_empty());
}

#[test]
fn test_list_newest_first() {
    let dir = temp_dir();
    let store = store_in(&dir);

    let old = store
        .save_at(&Schedule::blank(2025, 12).unwrap(), at(2025, 1, 10, 8, 0, 0))
        .unwrap();
    let mid = store
        .save_at(&Schedule::blank(2025, 1).unwrap(), at(2025, 3, 2, 9, 30, 0))
        .unwrap();
    let new = store
        .save_at(&Schedule::blank(2024, 6).unwrap(), at(2025, 3, 2, 9, 30, 1))
        .unwrap();

    let ids: Vec<String> = store.list().unwrap().into_iter().map(|e| e.id).collect();
    assert_eq!(ids, vec![new, mid, old]);
}

#[test]
fn test_same_second_saves_never_overwrite() {
    let dir = temp_dir();
    let store = store_in(&dir);
    let ts = at(2025, 5, 1, 12, 0, 0);

    let mut first = sample_schedule(2025, 5);
    let a = store.save_at(&first, ts).unwrap();

    first.set_shift(2, rplantao::models::Slot::Night, "Outra").unwrap();
    let b = store.save_at(&first, ts).unwrap();

    assert_eq!(a, "escala_05_2025_20250501_120000");
    assert_eq!(b, "escala_05_2025_20250501_120000_1");

    assert_eq!(store.load(&a).unwrap(), sample_schedule(2025, 5));
    assert_eq!(store.load(&b).unwrap(), first);

    let ids: Vec<String> = store.list().unwrap().into_iter().map(|e| e.id).collect();
    assert_eq!(ids, vec![b, a]);
}

#[test]
fn test_load_round_trip() {
    let dir = temp_dir();
    let store = store_in(&dir);
    let original = sample_schedule(2024, 7);

    let id = store.save(&original).unwrap();
    assert_eq!(store.load(&id).unwrap(), original);
}

#[test]
fn test_load_unknown_identifier() {
    let dir = temp_dir();
    let store = store_in(&dir);
    store.save(&Schedule::blank(2024, 3).unwrap()).unwrap();

    for id in ["escala_01_1999_19990101_000000", "../escalas", "", "a/b"] {
        let err = store.load(id).unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)), "{id}: {err}");
    }
}

#[test]
fn test_load_corrupt_records() {
    let dir = temp_dir();
    let store = store_in(&dir);
    fs::create_dir_all(store.dir()).unwrap();

    fs::write(store.dir().join("escala_01_2024_20240101_000000.json"), "{ not json").unwrap();
    fs::write(
        store.dir().join("escala_13_2024_20240101_000001.json"),
        r#"{"mes": 13, "ano": 2024, "escalas": []}"#,
    )
    .unwrap();
    fs::write(
        store.dir().join("escala_02_2024_20240101_000002.json"),
        r#"{"mes": 2, "ano": 2024}"#,
    )
    .unwrap();

    for id in [
        "escala_01_2024_20240101_000000",
        "escala_13_2024_20240101_000001",
        "escala_02_2024_20240101_000002",
    ] {
        let err = store.load(id).unwrap_err();
        assert!(matches!(err, AppError::CorruptRecord { .. }), "{id}: {err}");
    }
}

#[test]
fn test_list_skips_unreadable_records() {
    let dir = temp_dir();
    let store = store_in(&dir);
    let id = store.save(&Schedule::blank(2024, 8).unwrap()).unwrap();

    fs::write(store.dir().join("escala_09_2024_20000101_000000.json"), "[]").unwrap();
    fs::write(store.dir().join("notes.txt"), "not a record").unwrap();

    let entries = store.list().unwrap();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].id, id);
}

#[test]
fn test_load_non_utf8_record_is_corrupt() {
    let dir = temp_dir();
    let store = store_in(&dir);
    fs::create_dir_all(store.dir()).unwrap();
    fs::write(
        store.dir().join("escala_05_2025_20250101_000000.json"),
        [0xff, 0xfe, b'{'],
    )
    .unwrap();

    let err = store.load("escala_05_2025_20250101_000000").unwrap_err();
    assert!(matches!(err, AppError::CorruptRecord { .. }), "{err}");
    assert!(store.list().unwrap().is_empty());
}

#[test]
fn test_list_agrees_with_load_on_invalid_month() {
    let dir = temp_dir();
    let store = store_in(&dir);
    let id = store.save(&Schedule::blank(2025, 1).unwrap()).unwrap();

    fs::write(
        store.dir().join("escala_13_2025_20250101_000000.json"),
        r#"{"mes":13,"ano":2025,"escalas":[]}"#,
    )
    .unwrap();

    let entries = store.list().unwrap();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].id, id);
    assert!(entries.iter().all(|e| (1..=12).contains(&e.month)));

    assert!(matches!(
        store.load("escala_13_2025_20250101_000000"),
        Err(AppError::CorruptRecord { .. })
    ));
}

#[test]
fn test_load_tolerates_missing_row_fields() {
    let dir = temp_dir();
    let store = store_in(&dir);
    fs::create_dir_all(store.dir()).unwrap();
    fs::write(
        store.dir().join("escala_07_2024_20240701_080000.json"),
        r#"{"mes": 7, "ano": 2024, "escalas": [{"noite": "Ana"}, {"tarde": "Bia"}]}"#,
    )
    .unwrap();

    let s = store.load("escala_07_2024_20240701_080000").unwrap();
    assert_eq!(s.len(), 31);
    assert_eq!(s.shifts(1).unwrap().night, "Ana");
    assert_eq!(s.shifts(2).unwrap().afternoon, "Bia");
    assert!(s.shifts(3).unwrap().is_empty());
}

#[test]
fn test_delete_is_idempotent() {
    let dir = temp_dir();
    let store = store_in(&dir);
    let id = store.save(&Schedule::blank(2025, 5).unwrap()).unwrap();

    store.delete(&id).unwrap();
    assert!(store.list().unwrap().is_empty());

    store.delete(&id).unwrap();
    assert!(store.list().unwrap().is_empty());
    assert!(matches!(store.load(&id), Err(AppError::NotFound(_))));

    // unknown and unsafe identifiers are no-ops too
    store.delete("escala_01_2000_20000101_000000").unwrap();
    store.delete("../../etc/passwd").unwrap();
}

#[test]
fn test_saved_file_is_pretty_snapshot_json() {
    let dir = temp_dir();
    let store = store_in(&dir);
    let id = store.save(&sample_schedule(2024, 2)).unwrap();

    let content = fs::read_to_string(store.dir().join(format!("{id}.json"))).unwrap();
    assert!(content.contains("\n  \"mes\": 2"));
    assert!(content.contains("\"dia_semana\": \"Sábado\""));
    assert!(content.contains("Conceição"));

    let v: serde_json::Value = serde_json::from_str(&content).unwrap();
    assert_eq!(v["escalas"].as_array().unwrap().len(), 29);
}
