use assert_cmd::cargo::cargo_bin_cmd;
use chrono::{Duration, Local};
use std::fs;
use tempfile::TempDir;

fn run_session(args: &[&str], script: &str) -> String {
    let output = cargo_bin_cmd!("palbook")
        .args(args)
        .write_stdin(script)
        .output()
        .expect("run palbook");
    assert!(output.status.success(), "session failed: {:?}", output);
    String::from_utf8(output.stdout).expect("utf8")
}

#[test]
fn repl_add_change_show_flow() {
    let stdout = run_session(
        &[],
        "hello\n\
         add John 1234567890\n\
         add John 5555555555\n\
         phone John\n\
         change John 5555555555 9999999999\n\
         all\n\
         exit\n",
    );

    assert!(stdout.contains("Welcome to the assistant bot!"));
    assert!(stdout.contains("How can I help you?"));
    assert!(stdout.contains("Contact added."));
    assert!(stdout.contains("Contact updated."));
    assert!(stdout.contains("1234567890; 5555555555"));
    assert!(stdout.contains("Contact name: John, phones: 1234567890; 9999999999"));
    assert!(stdout.contains("Good bye!"));
}

#[test]
fn repl_reports_errors_and_keeps_going() {
    let stdout = run_session(
        &[],
        "add John 123\n\
         change John 1111111111 2222222222\n\
         phone Ghost\n\
         nonsense\n\
         \n\
         all\n\
         close\n",
    );

    assert!(stdout.contains("invalid phone number \"123\": expected exactly 10 digits"));
    // the contact was still created, with an empty phone list
    assert!(stdout.contains("Contact name: John, phones: "));
    assert!(stdout.contains("phone number 1111111111 not found"));
    assert!(stdout.contains("contact \"Ghost\" not found"));
    assert!(stdout.contains("Invalid command."));
    assert!(stdout.contains("Invalid command. (empty input)"));
    assert!(stdout.contains("Good bye!"));
}

#[test]
fn repl_birthday_flow() {
    let tomorrow = (Local::now().date_naive() + Duration::days(1))
        .format("%d.%m.%Y")
        .to_string();
    let stdout = run_session(
        &[],
        &format!(
            "add Ada 1234567890\n\
             add-birthday Ada {tomorrow}\n\
             show-birthday Ada\n\
             birthdays\n\
             delete Ada\n\
             birthdays\n\
             exit\n"
        ),
    );

    assert!(stdout.contains("Birthday added."));
    assert!(stdout.contains(&tomorrow));
    // congratulation dates may be weekend-shifted, so only the name is
    // asserted here; the date math is covered in palbook-core
    assert!(stdout.contains("Ada - "));
    assert!(stdout.contains("Contact deleted."));
    assert!(stdout.contains("No upcoming birthdays in the next 7 days."));
}

#[test]
fn repl_missing_arguments_usage() {
    let stdout = run_session(&[], "add John\nshow-birthday\nexit\n");
    assert!(stdout.contains("not enough arguments: usage: add NAME PHONE"));
    assert!(stdout.contains("not enough arguments: usage: show-birthday NAME"));
}

#[test]
fn repl_honors_config_file() {
    let temp = TempDir::new().expect("temp dir");
    let config_path = temp.path().join("config.toml");
    fs::write(&config_path, "horizon_days = 30\nprompt = \"palbook> \"\n")
        .expect("write config");

    let stdout = run_session(
        &["--config", config_path.to_str().expect("config path")],
        "birthdays\nexit\n",
    );
    assert!(stdout.contains("palbook> "));
    assert!(stdout.contains("No upcoming birthdays in the next 30 days."));
}

#[test]
fn horizon_flag_overrides_config() {
    let stdout = run_session(&["--horizon-days", "3"], "birthdays\nexit\n");
    assert!(stdout.contains("No upcoming birthdays in the next 3 days."));
}

#[test]
fn invalid_horizon_fails_at_startup() {
    let output = cargo_bin_cmd!("palbook")
        .args(["--horizon-days", "0"])
        .output()
        .expect("run palbook");
    assert!(!output.status.success());
    let stderr = String::from_utf8(output.stderr).expect("utf8");
    assert!(stderr.contains("invalid horizon days: 0"));
}
