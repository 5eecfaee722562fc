use assert_cmd::cargo;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

/// Config with English "translations" and Saturday trash duty
fn write_config(dir: &Path, print: Option<&str>) -> std::path::PathBuf {
    let names = [
        "Monday", "Tuesday", "Wednesday", "Thursday", "Friday", "Saturday", "Sunday", "January",
        "February", "March", "April", "May", "June", "July", "August", "September", "October",
        "November", "December",
    ];
    let translations = names
        .iter()
        .map(|name| format!("\"{}\": \"{}\"", name, name))
        .collect::<Vec<_>>()
        .join(", ");

    let print = print
        .map(|p| format!(",\n  \"print\": {}", p))
        .unwrap_or_default();

    let content = format!(
        r#"{{
  "translations": {{ {} }},
  "heading": "DAY MONTH DATE",
  "daily": ["Water plants"],
  "specific": {{ "1": null, "2": null, "3": null, "4": null, "5": null, "6": ["Take out trash"], "7": null }}{}
}}"#,
        translations, print
    );

    let path = dir.join("config.json");
    fs::write(&path, content).unwrap();
    path
}

fn checklist_cmd(dir: &Path) -> assert_cmd::Command {
    let mut cmd = cargo::cargo_bin_cmd!("checklist");
    cmd.current_dir(dir).env("NO_COLOR", "1");
    cmd
}

#[test]
fn test_dump_config() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = write_config(temp_dir.path(), None);

    checklist_cmd(temp_dir.path())
        .args(["--config-file", config_path.to_str().unwrap(), "--dump-config"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\t\"heading\": \"DAY MONTH DATE\""))
        .stdout(predicate::str::contains("\"6\": [\n\t\t\t\"Take out trash\"\n\t\t]"))
        .stdout(predicate::str::contains("\"print\"").not())
        .stdout(predicate::str::contains("Looks good?").not());

    assert!(!temp_dir.path().join("checklist.rtf").exists());
}

#[test]
fn test_dump_config_ignores_dates() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = write_config(temp_dir.path(), None);

    checklist_cmd(temp_dir.path())
        .args([
            "-c",
            config_path.to_str().unwrap(),
            "-s",
            "not-a-date",
            "-e",
            "2000-01-01",
            "-d",
        ])
        .assert()
        .success();
}

#[test]
fn test_missing_config_file() {
    let temp_dir = TempDir::new().unwrap();
    let missing = temp_dir.path().join("nope.json");

    checklist_cmd(temp_dir.path())
        .args(["-c", missing.to_str().unwrap(), "-n"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Config file not found"));
}

#[test]
fn test_config_missing_weekday() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = write_config(temp_dir.path(), None);
    let content = fs::read_to_string(&config_path)
        .unwrap()
        .replace("\"7\": null", "\"0\": null");
    fs::write(&config_path, content).unwrap();

    checklist_cmd(temp_dir.path())
        .args(["-c", config_path.to_str().unwrap(), "-d"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Error: Configuration error: Invalid config"))
        .stderr(predicate::str::contains("missing weekday \"7\""));
}

#[test]
fn test_invalid_start_date() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = write_config(temp_dir.path(), None);

    checklist_cmd(temp_dir.path())
        .args(["-c", config_path.to_str().unwrap(), "-s", "2024-02-30", "-n"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Invalid start date"));
}

#[test]
fn test_invalid_end_date() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = write_config(temp_dir.path(), None);

    checklist_cmd(temp_dir.path())
        .args(["-c", config_path.to_str().unwrap(), "-e", "sunday", "-n"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Invalid end date"));
}

#[test]
fn test_start_after_end() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = write_config(temp_dir.path(), None);

    checklist_cmd(temp_dir.path())
        .args([
            "-c",
            config_path.to_str().unwrap(),
            "-s",
            "2024-03-10",
            "-e",
            "2024-03-08",
            "-n",
        ])
        .assert()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Invalid dates"));

    assert!(!temp_dir.path().join("checklist.rtf").exists());
}

#[test]
fn test_friday_to_sunday_no_print() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = write_config(temp_dir.path(), None);

    checklist_cmd(temp_dir.path())
        .args([
            "-c",
            config_path.to_str().unwrap(),
            "-s",
            "2024-03-08",
            "-e",
            "2024-03-10",
            "-o",
            "week.rtf",
            "-n",
        ])
        .write_stdin("Y\n")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Friday March 8\n☐  Water plants\n\nSaturday March 9\n☐  Water plants\n☐  Take out trash\n\nSunday March 10\n☐  Water plants\n\n",
        ))
        .stdout(predicate::str::contains("Saved to week.rtf"))
        .stdout(predicate::str::contains("Printing...").not());

    let rtf = fs::read_to_string(temp_dir.path().join("week.rtf")).unwrap();
    assert!(rtf.starts_with("{\\rtf1\\ansi\\deff0 {\\fonttbl {\\f0 Arial;}}\n"));
    assert_eq!(rtf.matches("\\fs56 {\\pard ").count(), 3);
    assert_eq!(rtf.matches("\\page").count(), 2);
    assert!(rtf.contains("Water plants\\page\\par}\n\n\\f0\\fs56 {\\pard Saturday March 9\\par}"));
    assert!(rtf.contains("Take out trash\\page\\par}\n\n\\f0\\fs56 {\\pard Sunday March 10\\par}"));
    assert!(rtf.ends_with("Water plants\\par}\n}"));
}

#[test]
fn test_declined_confirmation_writes_nothing() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = write_config(temp_dir.path(), None);

    checklist_cmd(temp_dir.path())
        .args([
            "-c",
            config_path.to_str().unwrap(),
            "-s",
            "2024-03-08",
            "-e",
            "2024-03-08",
        ])
        .write_stdin("n\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Looks good? (Y/n): "))
        .stdout(predicate::str::contains("Saved to").not());

    assert!(!temp_dir.path().join("checklist.rtf").exists());
}

#[test]
fn test_invalid_answer_reprompts() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = write_config(temp_dir.path(), None);

    let assert = checklist_cmd(temp_dir.path())
        .args([
            "-c",
            config_path.to_str().unwrap(),
            "-s",
            "2024-03-08",
            "-e",
            "2024-03-08",
            "-n",
        ])
        .write_stdin("yes\ny\nY\n")
        .assert()
        .success();

    let stdout = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    assert_eq!(stdout.matches("Looks good? (Y/n): ").count(), 3);
    assert!(temp_dir.path().join("checklist.rtf").exists());
}

#[test]
fn test_closed_stdin_aborts() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = write_config(temp_dir.path(), None);

    checklist_cmd(temp_dir.path())
        .args([
            "-c",
            config_path.to_str().unwrap(),
            "-s",
            "2024-03-08",
            "-e",
            "2024-03-08",
            "-n",
        ])
        .write_stdin("")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Confirmation aborted"));

    assert!(!temp_dir.path().join("checklist.rtf").exists());
}

#[test]
fn test_default_range_ends_on_sunday() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = write_config(temp_dir.path(), None);

    checklist_cmd(temp_dir.path())
        .args(["-c", config_path.to_str().unwrap(), "-n"])
        .write_stdin("n\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Sunday "));
}

#[cfg(unix)]
#[test]
fn test_print_removes_file() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = write_config(
        temp_dir.path(),
        Some(r#"{ "command": ["true"], "grace_seconds": 0 }"#),
    );

    checklist_cmd(temp_dir.path())
        .args([
            "-c",
            config_path.to_str().unwrap(),
            "-s",
            "2024-03-08",
            "-e",
            "2024-03-10",
        ])
        .write_stdin("Y\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Saved to checklist.rtf"))
        .stdout(predicate::str::contains("Printing..."));

    assert!(!temp_dir.path().join("checklist.rtf").exists());
}

#[test]
fn test_print_command_failure() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = write_config(
        temp_dir.path(),
        Some(r#"{ "command": ["definitely-not-a-printer-binary"], "grace_seconds": 0 }"#),
    );

    checklist_cmd(temp_dir.path())
        .args([
            "-c",
            config_path.to_str().unwrap(),
            "-s",
            "2024-03-08",
            "-e",
            "2024-03-08",
        ])
        .write_stdin("Y\n")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Print error"));

    // Saved before the print attempt and left in place
    assert!(temp_dir.path().join("checklist.rtf").exists());
}
