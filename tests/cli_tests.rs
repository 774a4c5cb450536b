use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::process::Command;
use tempfile::TempDir;

type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;

fn roster(dir: &TempDir) -> Result<Command> {
    let mut cmd = Command::cargo_bin("roster")?;
    cmd.arg("--config")
        .arg(dir.path().join("config.toml"))
        .arg("--data-dir")
        .arg(dir.path().join("data"));
    Ok(cmd)
}

#[test]
fn lists_seed_data_on_first_run() -> Result<()> {
    let dir = tempfile::tempdir()?;
    roster(&dir)?
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Ahmet"))
        .stdout(predicate::str::contains("Page 1 of 2 (12 employees)"));
    Ok(())
}

#[test]
fn adds_and_persists_employee() -> Result<()> {
    let dir = tempfile::tempdir()?;
    roster(&dir)?
        .args([
            "add",
            "--first-name",
            "Deniz",
            "--last-name",
            "Yurt",
            "--email",
            "deniz.yurt@ing.com",
            "--phone-number",
            "5321234567",
            "--dob",
            "1994-05-06",
            "--doe",
            "2024-02-01",
            "--department",
            "tech",
            "--position",
            "medior",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Added employee"));

    roster(&dir)?
        .args(["list", "--search", "deniz"])
        .assert()
        .success()
        .stdout(predicate::str::contains("+(90) 532 123 45 67"))
        .stdout(predicate::str::contains("(1 employees)"));
    Ok(())
}

#[test]
fn rejects_invalid_email() -> Result<()> {
    let dir = tempfile::tempdir()?;
    roster(&dir)?
        .args([
            "add",
            "--first-name",
            "Bad",
            "--last-name",
            "Mail",
            "--email",
            "not-an-email",
            "--phone-number",
            "5321234567",
            "--dob",
            "1994-05-06",
            "--doe",
            "2024-02-01",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid email address"));
    Ok(())
}

#[test]
fn updates_single_field() -> Result<()> {
    let dir = tempfile::tempdir()?;
    roster(&dir)?
        .args(["update", "1", "--last-name", "Yıldız"])
        .assert()
        .success();

    roster(&dir)?
        .args(["show", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Ahmet Yıldız"))
        .stdout(predicate::str::contains("+(90) 532 123 45 67"));
    Ok(())
}

#[test]
fn updates_record_with_nine_digit_french_phone() -> Result<()> {
    let dir = tempfile::tempdir()?;
    roster(&dir)?
        .args(["update", "10", "--position", "Senior"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Updated employee 10"));

    roster(&dir)?
        .args(["show", "10"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Senior"))
        .stdout(predicate::str::contains("+33 6 12 34 56 78"));
    Ok(())
}

#[test]
fn update_rejects_invalid_given_field() -> Result<()> {
    let dir = tempfile::tempdir()?;
    roster(&dir)?
        .args(["update", "10", "--email", "nope"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid email address"));
    Ok(())
}

#[test]
fn deletes_employee() -> Result<()> {
    let dir = tempfile::tempdir()?;
    roster(&dir)?.args(["delete", "2"]).assert().success();

    roster(&dir)?
        .args(["show", "2"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Employee not found: 2"));
    Ok(())
}

#[test]
fn reset_restores_seed() -> Result<()> {
    let dir = tempfile::tempdir()?;
    roster(&dir)?.args(["delete", "1"]).assert().success();
    roster(&dir)?
        .arg("reset")
        .assert()
        .success()
        .stdout(predicate::str::contains("Restored 12 sample employees"));
    roster(&dir)?.args(["show", "1"]).assert().success();
    Ok(())
}

#[test]
fn rejects_out_of_range_page() -> Result<()> {
    let dir = tempfile::tempdir()?;
    roster(&dir)?
        .args(["list", "--page", "5"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("out of range"));
    Ok(())
}

#[test]
fn turkish_labels_in_list_view() -> Result<()> {
    let dir = tempfile::tempdir()?;
    roster(&dir)?
        .args(["list", "--view", "list", "--lang", "tr"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Departman"));
    Ok(())
}
