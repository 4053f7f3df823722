use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn beerus(data_dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("beerus").unwrap();
    cmd.env("BEERUS_DATA_DIR", data_dir)
        .env_remove("BEERUS_CONFIG")
        .env_remove("BEERUS_LOG");
    cmd
}

fn register(data_dir: &Path, title: &str, amount: &str, date: &str) {
    beerus(data_dir)
        .args(["register", "--title", title, "--amount", amount, "--date", date, "--yes"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Bill registered."));
}

fn seeded() -> TempDir {
    let temp_dir = TempDir::new().unwrap();
    beerus(temp_dir.path()).arg("init").assert().success();
    register(temp_dir.path(), "Rent", "1000.00", "2024-01-05");
    register(temp_dir.path(), "Rent", "1000.00", "2024-02-05");
    register(temp_dir.path(), "Food", "50.25", "2024-01-10");
    temp_dir
}

const RANGE: [&str; 4] = ["--from", "2024-01-01", "--to", "2024-02-28"];

#[test]
fn init_creates_store_and_settings() {
    let temp_dir = TempDir::new().unwrap();

    beerus(temp_dir.path())
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("Initialized bill store"));

    assert!(temp_dir.path().join("bills.db").exists());
    assert!(temp_dir.path().join("config.json").exists());
}

#[test]
fn list_shows_total_and_average() {
    let temp_dir = seeded();

    beerus(temp_dir.path())
        .arg("list")
        .args(RANGE)
        .assert()
        .success()
        .stdout(predicate::str::contains("Period of 2024-01-01 to 2024-02-28"))
        .stdout(predicate::str::contains("Food"))
        .stdout(predicate::str::contains("Total amount: $2050.25\n"))
        .stdout(predicate::str::contains("Monthly average: $1025.125\n"));
}

#[test]
fn plot_shows_monthly_totals() {
    let temp_dir = seeded();

    beerus(temp_dir.path())
        .arg("plot")
        .args(RANGE)
        .assert()
        .success()
        .stdout(predicate::str::contains("2024-01"))
        .stdout(predicate::str::contains("$1050.25"))
        .stdout(predicate::str::contains("$1000.00"));
}

#[test]
fn deficit_against_target() {
    let temp_dir = seeded();

    beerus(temp_dir.path())
        .args(["deficit", "900"])
        .args(RANGE)
        .assert()
        .success()
        .stdout(predicate::str::contains("Total deficit: $250.25"))
        .stdout(predicate::str::contains("$150.25"))
        .stdout(predicate::str::contains("Over target in: 2024-01, 2024-02"));
}

#[test]
fn delete_removes_matching_bill() {
    let temp_dir = seeded();

    beerus(temp_dir.path())
        .args(["delete", "-t", "Food", "-a", "50.25", "-d", "2024-01-10", "-y"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Deleted 1 bill."));

    beerus(temp_dir.path())
        .arg("list")
        .args(RANGE)
        .assert()
        .success()
        .stdout(predicate::str::contains("Total amount: $2000.00\n"));
}

#[test]
fn delete_unknown_bill_is_noop() {
    let temp_dir = seeded();

    beerus(temp_dir.path())
        .args(["delete", "-t", "Gym", "-a", "30", "-d", "2024-01-10", "-y"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No matching bill found."));
}

#[test]
fn missing_store_fails() {
    let temp_dir = TempDir::new().unwrap();

    beerus(temp_dir.path())
        .arg("list")
        .assert()
        .failure()
        .stderr(predicate::str::contains("run 'beerus init' first"));
    assert!(!temp_dir.path().join("bills.db").exists());
}

#[test]
fn invalid_amount_fails() {
    let temp_dir = TempDir::new().unwrap();
    beerus(temp_dir.path()).arg("init").assert().success();

    beerus(temp_dir.path())
        .args(["register", "-t", "Rent", "-a", "a lot", "-d", "2024-01-05", "-y"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid amount"));
}

#[test]
fn declined_prompt_aborts_cleanly() {
    let temp_dir = TempDir::new().unwrap();
    beerus(temp_dir.path()).arg("init").assert().success();

    beerus(temp_dir.path())
        .args(["register", "-t", "Rent", "-a", "1000", "-d", "2024-01-05"])
        .write_stdin("n\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Action aborted."));

    beerus(temp_dir.path())
        .arg("list")
        .args(RANGE)
        .assert()
        .success()
        .stdout(predicate::str::contains("No bills found."));
}

#[test]
fn register_prompts_for_missing_fields() {
    let temp_dir = TempDir::new().unwrap();
    beerus(temp_dir.path()).arg("init").assert().success();

    beerus(temp_dir.path())
        .arg("register")
        .write_stdin("Water\n42.10\n2024-01-20\ny\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Title: "))
        .stdout(predicate::str::contains("Bill registered."));

    beerus(temp_dir.path())
        .arg("list")
        .args(RANGE)
        .assert()
        .success()
        .stdout(predicate::str::contains("Water"));
}

#[test]
fn dump_then_load_into_fresh_store() {
    let source = seeded();
    let dump = source.path().join("bills.sql");

    beerus(source.path())
        .arg("dump")
        .arg(&dump)
        .assert()
        .success()
        .stdout(predicate::str::contains("Dumped 3 bills"));

    let script = std::fs::read_to_string(&dump).unwrap();
    assert!(script.starts_with("BEGIN TRANSACTION;\n"));
    assert!(script.contains("INSERT INTO \"bills\" VALUES('Food','50.25','2024-01-10');"));
    assert!(script.ends_with("COMMIT;\n"));

    let target = TempDir::new().unwrap();
    beerus(target.path())
        .arg("load")
        .arg(&dump)
        .arg("--yes")
        .assert()
        .success()
        .stdout(predicate::str::contains("Loaded 3 bills"));

    beerus(target.path())
        .arg("list")
        .args(RANGE)
        .assert()
        .success()
        .stdout(predicate::str::contains("Total amount: $2050.25\n"));
}

#[test]
fn export_csv() {
    let temp_dir = seeded();
    let out = temp_dir.path().join("bills.csv");

    beerus(temp_dir.path())
        .arg("export")
        .arg(&out)
        .args(["--format", "csv"])
        .args(RANGE)
        .assert()
        .success();

    let text = std::fs::read_to_string(&out).unwrap();
    assert_eq!(
        text,
        "title,amount,date\nRent,1000.00,2024-01-05\nFood,50.25,2024-01-10\nRent,1000.00,2024-02-05\n"
    );
}

#[test]
fn explicit_settings_file_selects_store() {
    let temp_dir = TempDir::new().unwrap();
    let settings = temp_dir.path().join("alt").join("settings.json");
    std::fs::create_dir_all(settings.parent().unwrap()).unwrap();
    std::fs::write(&settings, r#"{ "database_path": "alt.db", "currency_symbol": "€" }"#).unwrap();

    beerus(temp_dir.path())
        .arg("--config")
        .arg(&settings)
        .arg("init")
        .assert()
        .success();
    assert!(temp_dir.path().join("alt").join("alt.db").exists());

    beerus(temp_dir.path())
        .arg("--config")
        .arg(&settings)
        .args(["register", "-t", "Rent", "-a", "700", "-d", "2024-01-05", "-y"])
        .assert()
        .success();

    beerus(temp_dir.path())
        .arg("--config")
        .arg(&settings)
        .arg("list")
        .args(RANGE)
        .assert()
        .success()
        .stdout(predicate::str::contains("Total amount: €700.00"));
}

#[test]
fn malformed_settings_fail() {
    let temp_dir = TempDir::new().unwrap();
    std::fs::write(temp_dir.path().join("config.json"), "{ not json").unwrap();

    beerus(temp_dir.path())
        .arg("config")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Configuration error"));
}

#[test]
fn overflowing_totals_fail_without_panicking() {
    let temp_dir = TempDir::new().unwrap();
    beerus(temp_dir.path()).arg("init").assert().success();
    register(temp_dir.path(), "A", "79228162514264337593543950335", "2024-01-05");
    register(temp_dir.path(), "B", "79228162514264337593543950335", "2024-01-06");

    for command in ["list", "plot"] {
        beerus(temp_dir.path())
            .arg(command)
            .args(RANGE)
            .assert()
            .code(1)
            .stderr(predicate::str::contains("Amount out of range"));
    }
}

#[test]
fn extreme_deficit_target_fails_without_panicking() {
    let temp_dir = seeded();

    beerus(temp_dir.path())
        .args(["deficit", "-79228162514264337593543950335"])
        .args(RANGE)
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Amount out of range"));
}

#[test]
fn oversized_default_range_is_a_config_error() {
    let temp_dir = TempDir::new().unwrap();
    std::fs::write(
        temp_dir.path().join("config.json"),
        r#"{ "default_range_days": 4000000000 }"#,
    )
    .unwrap();

    beerus(temp_dir.path())
        .arg("list")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("default_range_days"));
}

#[test]
fn failed_load_leaves_no_store_behind() {
    let temp_dir = TempDir::new().unwrap();
    let script = temp_dir.path().join("broken.sql");
    std::fs::write(&script, "INSERT INTO nowhere VALUES(1);\n").unwrap();

    beerus(temp_dir.path())
        .arg("load")
        .arg(&script)
        .arg("--yes")
        .assert()
        .code(1);
    assert!(!temp_dir.path().join("bills.db").exists());

    beerus(temp_dir.path()).arg("init").assert().success();
}
