mod common;

use common::{last_line, rpl, temp_dir};
use predicates::prelude::*;
use std::fs;
use std::path::Path;

fn store_arg(dir: &Path) -> String {
    dir.join("escalas").to_string_lossy().to_string()
}

/// Runs `new` and returns the printed identifier.
fn create(home: &Path, month: &str, year: &str) -> String {
    let out = rpl(home)
        .args(["--store", &store_arg(home), "new", "--month", month, "--year", year])
        .output()
        .expect("run new");
    assert!(out.status.success(), "{}", String::from_utf8_lossy(&out.stderr));
    last_line(&out.stdout)
}

#[test]
fn test_new_then_list() {
    let dir = temp_dir();
    let home = dir.path();

    let id = create(home, "5", "2025");
    assert!(id.starts_with("escala_05_2025_"), "{id}");

    rpl(home)
        .args(["--store", &store_arg(home), "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains(format!("5/2025 - {id}")));
}

#[test]
fn test_set_then_show() {
    let dir = temp_dir();
    let home = dir.path();
    let id = create(home, "7", "2024");

    let out = rpl(home)
        .args(["--store", &store_arg(home), "set", &id, "1", "night", "Ana Souza"])
        .output()
        .unwrap();
    assert!(out.status.success());
    let new_id = last_line(&out.stdout);
    assert_ne!(new_id, id);

    rpl(home)
        .args(["--store", &store_arg(home), "show", &new_id])
        .assert()
        .success()
        .stdout(predicate::str::contains("Ana Souza"))
        .stdout(predicate::str::contains("01/07/2024"))
        .stdout(predicate::str::contains("Segunda"));

    // the previous record is untouched
    rpl(home)
        .args(["--store", &store_arg(home), "show", &id])
        .assert()
        .success()
        .stdout(predicate::str::contains("Ana Souza").not());
}

#[test]
fn test_set_replace_removes_previous_record() {
    let dir = temp_dir();
    let home = dir.path();
    let id = create(home, "7", "2024");

    let out = rpl(home)
        .args([
            "--store",
            &store_arg(home),
            "set",
            &id,
            "5",
            "tarde",
            "Bia",
            "--replace",
        ])
        .output()
        .unwrap();
    assert!(out.status.success());
    let new_id = last_line(&out.stdout);

    rpl(home)
        .args(["--store", &store_arg(home), "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains(new_id.as_str()))
        .stdout(predicate::str::contains(format!("- {id}\n")).not());

    rpl(home)
        .args(["--store", &store_arg(home), "show", &id])
        .assert()
        .failure();
}

#[test]
fn test_set_invalid_slot_and_day() {
    let dir = temp_dir();
    let home = dir.path();
    let id = create(home, "2", "2024");

    rpl(home)
        .args(["--store", &store_arg(home), "set", &id, "1", "evening", "X"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid shift slot"));

    rpl(home)
        .args(["--store", &store_arg(home), "set", &id, "30", "noite", "X"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid date"));
}

#[test]
fn test_delete_then_list_empty() {
    let dir = temp_dir();
    let home = dir.path();
    let id = create(home, "3", "2025");

    rpl(home)
        .args(["--store", &store_arg(home), "del", &id, "--yes"])
        .assert()
        .success();

    rpl(home)
        .args(["--store", &store_arg(home), "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No saved rosters"));

    // deleting again is not an error
    rpl(home)
        .args(["--store", &store_arg(home), "del", &id, "-y"])
        .assert()
        .success();
}

#[test]
fn test_export_pdf_and_png() {
    let dir = temp_dir();
    let home = dir.path();
    let id = create(home, "7", "2024");

    let pdf = home.join("out.pdf");
    let png = home.join("out.png");

    rpl(home)
        .args(["--store", &store_arg(home), "export", &id, "--format", "pdf", "--file"])
        .arg(&pdf)
        .arg("--force")
        .assert()
        .success()
        .stdout(predicate::str::contains("PDF export completed"));

    rpl(home)
        .args(["--store", &store_arg(home), "export", &id, "--format", "png", "--file"])
        .arg(&png)
        .arg("-f")
        .assert()
        .success();

    assert!(fs::read(&pdf).unwrap().starts_with(b"%PDF"));
    assert!(fs::read(&png).unwrap().starts_with(&[0x89, b'P', b'N', b'G']));
}

#[test]
fn test_unknown_identifier_fails() {
    let dir = temp_dir();
    let home = dir.path();
    let out = home.join("never.pdf");

    rpl(home)
        .args(["--store", &store_arg(home), "show", "escala_01_2020_20200101_000000"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Schedule not found"));

    rpl(home)
        .args([
            "--store",
            &store_arg(home),
            "export",
            "escala_01_2020_20200101_000000",
            "--file",
        ])
        .arg(&out)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Schedule not found"));

    assert!(!out.exists());
}

#[test]
fn test_new_rejects_invalid_month_and_year() {
    let dir = temp_dir();
    let home = dir.path();

    rpl(home)
        .args(["--store", &store_arg(home), "new", "--month", "13", "--year", "2025"])
        .assert()
        .failure();

    rpl(home)
        .args(["--store", &store_arg(home), "new", "--month", "1", "--year", "2019"])
        .assert()
        .failure();

    assert!(!home.join("escalas").exists());
}

#[test]
fn test_backup_creates_zip() {
    let dir = temp_dir();
    let home = dir.path();
    create(home, "1", "2025");
    create(home, "2", "2025");

    let zip = home.join("backup").join("escalas.zip");

    let out = rpl(home)
        .args(["--store", &store_arg(home), "backup", "--file"])
        .arg(&zip)
        .output()
        .unwrap();
    assert!(out.status.success());

    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(stdout.contains("2 roster(s) archived"));
    assert_eq!(stdout.matches("Backup created").count(), 1, "{stdout}");

    assert!(fs::read(&zip).unwrap().starts_with(b"PK"));
}

#[test]
fn test_init_in_test_mode() {
    let dir = temp_dir();
    let home = dir.path();
    let store = home.join("custom_store");

    rpl(home)
        .args(["--test", "--store"])
        .arg(&store)
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("initialization completed"));

    assert!(store.is_dir());
    assert!(!home.join(".rplantao").join("rplantao.conf").exists());
}

#[test]
fn test_config_print_uses_home() {
    let dir = temp_dir();
    let home = dir.path();

    rpl(home)
        .args(["config", "--print"])
        .assert()
        .success()
        .stdout(predicate::str::contains("storage_dir"));
}
