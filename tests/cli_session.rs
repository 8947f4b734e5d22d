use assert_cmd::Command;
use predicates::prelude::*;
use std::path::Path;

fn sprint(home: &Path) -> Command {
    let mut cmd = Command::cargo_bin("internsprint").unwrap();
    cmd.env("INTERNSPRINT_HOME", home).env("NO_COLOR", "1");
    cmd
}

#[test]
fn interactive_session_adds_lists_and_saves() {
    let temp_dir = tempfile::tempdir().unwrap();

    sprint(temp_dir.path())
        .write_stdin(
            "add software /c Google /r SWE Intern /tech Rust\n\
             add general /c UBS /r Analyst /dept Finance\n\
             list\n\
             bye\n",
        )
        .assert()
        .success()
        .stdout(predicate::str::contains("Got it. Added this internship:"))
        .stdout(predicate::str::contains("SWE Intern - Google"))
        .stdout(predicate::str::contains("Analyst - UBS"))
        .stdout(predicate::str::contains("Now you have 2 internship(s) in the list."))
        .stdout(predicate::str::contains("Bye."));

    let saved = std::fs::read_to_string(temp_dir.path().join("internships.json")).unwrap();
    assert!(saved.contains("Google"));
    assert!(saved.contains("\"tech_stack\": \"Rust\""));
    assert!(temp_dir.path().join("profile.json").exists());
}

#[test]
fn errors_do_not_end_the_session() {
    let temp_dir = tempfile::tempdir().unwrap();

    sprint(temp_dir.path())
        .write_stdin(
            "fly\n\
             delete /index 3\n\
             add hardware /c Intel /r Intern\n\
             list\n",
        )
        .assert()
        .success()
        .stdout(predicate::str::contains("Unknown command: 'fly'"))
        .stdout(predicate::str::contains("out of range"))
        .stdout(predicate::str::contains("Missing required field: /hardtech"))
        .stdout(predicate::str::contains("There are no internships in your list yet."));
}

#[test]
fn end_of_input_saves_like_bye() {
    let temp_dir = tempfile::tempdir().unwrap();

    sprint(temp_dir.path())
        .write_stdin("add general /c UBS /r IT /dept Tech\nmy /name Ada\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Bye."));

    let profile = std::fs::read_to_string(temp_dir.path().join("profile.json")).unwrap();
    assert!(profile.contains("Ada"));
}

#[test]
fn one_shot_commands_share_the_data_dir() {
    let temp_dir = tempfile::tempdir().unwrap();

    sprint(temp_dir.path())
        .args(["add", "hardware", "/c", "AMD", "/r", "Engineer", "/hardtech", "FPGA"])
        .assert()
        .success();
    sprint(temp_dir.path())
        .args(["add", "software", "/c", "Meta", "/r", "SWE", "/tech", "Hack"])
        .assert()
        .success();

    sprint(temp_dir.path())
        .args(["edit", "/index", "2", "/status", "Interviewing"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Company: AMD"));

    sprint(temp_dir.path())
        .args(["desc", "2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Status: Interviewing"))
        .stdout(predicate::str::contains("Hardware Technologies: FPGA"));
}

#[test]
fn one_shot_failures_exit_non_zero() {
    let temp_dir = tempfile::tempdir().unwrap();

    sprint(temp_dir.path())
        .args(["delete", "1"])
        .assert()
        .failure()
        .stdout(predicate::str::contains("out of range"));

    sprint(temp_dir.path())
        .args(["launch"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown command"));
}

#[test]
fn data_dir_flag_overrides_env() {
    let env_home = tempfile::tempdir().unwrap();
    let flag_home = tempfile::tempdir().unwrap();

    sprint(env_home.path())
        .arg("--data-dir")
        .arg(flag_home.path())
        .args(["add", "general", "/c", "UBS", "/r", "IT", "/dept", "Tech"])
        .assert()
        .success();

    assert!(flag_home.path().join("internships.json").exists());
    assert!(!env_home.path().join("internships.json").exists());
}

#[test]
fn unreadable_data_is_kept_when_starting_empty() {
    let temp_dir = tempfile::tempdir().unwrap();
    let broken = r#"{ "software": [ {"company": "Google" "#;
    std::fs::write(temp_dir.path().join("internships.json"), broken).unwrap();

    sprint(temp_dir.path())
        .write_stdin("list\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Starting with an empty list."))
        .stdout(predicate::str::contains("internships.json.bak"))
        .stdout(predicate::str::contains("Bye."));

    let kept = std::fs::read_to_string(temp_dir.path().join("internships.json.bak")).unwrap();
    assert_eq!(kept, broken);
}
