use predicates::str::contains;

mod common;
use common::{init_file_with_data, rct, setup_test_file};

#[test]
fn test_init_creates_calendar_document() {
    let file = setup_test_file("cli_init");

    rct()
        .args(["--file", &file, "--test", "init"])
        .assert()
        .success()
        .stdout(contains("initialization completed"));

    let content = std::fs::read_to_string(&file).expect("calendar written by init");
    assert!(content.contains("\"days\""));
    assert!(content.contains("\"weeks\""));
    assert!(content.contains("\"months\""));
}

#[test]
fn test_add_and_view_day() {
    let file = setup_test_file("cli_view_day");
    init_file_with_data(&file);

    rct()
        .args(["--file", &file, "view", "day", "2025-01-09"])
        .assert()
        .success()
        .stdout(contains("Quiz prep"))
        .stdout(contains("Gym"))
        .stdout(contains("18:00"));
}

#[test]
fn test_view_week_groups_by_date() {
    let file = setup_test_file("cli_view_week");
    init_file_with_data(&file);

    rct()
        .args(["--file", &file, "view", "week", "2025-01-09"])
        .assert()
        .success()
        .stdout(contains("Week 2025-W02"))
        .stdout(contains("[2025-01-09]"))
        .stdout(contains("[2025-01-10]"))
        .stdout(contains("Standup"));
}

#[test]
fn test_view_month_contains_all_days() {
    let file = setup_test_file("cli_view_month");
    init_file_with_data(&file);

    rct()
        .args(["--file", &file, "view", "month", "2025-01-15"])
        .assert()
        .success()
        .stdout(contains("Month 2025-01"))
        .stdout(contains("Quiz prep"))
        .stdout(contains("Gym"))
        .stdout(contains("Standup"));
}

#[test]
fn test_view_empty_day() {
    let file = setup_test_file("cli_view_empty");
    init_file_with_data(&file);

    rct()
        .args(["--file", &file, "view", "day", "2025-06-01"])
        .assert()
        .success()
        .stdout(contains("No events."));
}

#[test]
fn test_view_invalid_mode_fails() {
    let file = setup_test_file("cli_bad_mode");

    rct()
        .args(["--file", &file, "view", "yearly", "2025-01-09"])
        .assert()
        .failure()
        .stderr(contains("Invalid view mode"));
}

#[test]
fn test_update_event_patches_fields() {
    let file = setup_test_file("cli_update");
    init_file_with_data(&file);

    rct()
        .args([
            "--file",
            &file,
            "update",
            "2025-01-09",
            "Quiz prep",
            "--time",
            "19:30",
            "--memo",
            "bring notes",
        ])
        .assert()
        .success()
        .stdout(contains("updated"));

    rct()
        .args(["--file", &file, "view", "day", "2025-01-09"])
        .assert()
        .success()
        .stdout(contains("19:30"))
        .stdout(contains("bring notes"));
}

#[test]
fn test_update_missing_event_warns() {
    let file = setup_test_file("cli_update_missing");
    init_file_with_data(&file);

    rct()
        .args([
            "--file",
            &file,
            "update",
            "2025-01-09",
            "Nap",
            "--time",
            "14:00",
        ])
        .assert()
        .success()
        .stdout(contains("No event titled 'Nap'"));
}

#[test]
fn test_del_removes_all_matching_titles() {
    let file = setup_test_file("cli_del");
    init_file_with_data(&file);

    // a duplicate title on the same day
    rct()
        .args([
            "--file",
            &file,
            "add",
            "2025-01-09",
            "Gym",
            "--time",
            "07:00",
            "--category",
            "exercise",
        ])
        .assert()
        .success();

    rct()
        .args(["--file", &file, "del", "2025-01-09", "Gym", "--yes"])
        .assert()
        .success()
        .stdout(contains("removed"));

    let view = rct()
        .args(["--file", &file, "view", "day", "2025-01-09"])
        .assert()
        .success();
    let out = String::from_utf8_lossy(&view.get_output().stdout).to_string();
    assert!(!out.contains("Gym"));
    assert!(out.contains("Quiz prep"));
}

#[test]
fn test_add_invalid_date_fails() {
    let file = setup_test_file("cli_bad_date");

    rct()
        .args(["--file", &file, "add", "2025-13-40", "Impossible"])
        .assert()
        .failure()
        .stderr(contains("Invalid date"));
}

#[test]
fn test_cal_month_grid() {
    let file = setup_test_file("cli_cal_month");

    rct()
        .args(["--file", &file, "cal", "--month", "2025-01"])
        .assert()
        .success()
        .stdout(contains("January 2025"))
        .stdout(contains("Su Mo Tu We Th Fr Sa"))
        .stdout(contains(" 5  6  7  8  9 10 11"));
}

#[test]
fn test_cal_invalid_month_fails() {
    let file = setup_test_file("cli_cal_bad_month");

    rct()
        .args(["--file", &file, "cal", "--month", "2025-13"])
        .assert()
        .failure()
        .stderr(contains("Invalid date"));
}

#[test]
fn test_cal_week_info() {
    let file = setup_test_file("cli_cal_week");

    rct()
        .args(["--file", &file, "cal", "--week", "2025-01-09"])
        .assert()
        .success()
        .stdout(contains("ISO Week: 2025-W02"))
        .stdout(contains("Weekday: 4"));
}

#[test]
fn test_cal_year_grid() {
    let file = setup_test_file("cli_cal_year");

    rct()
        .args(["--file", &file, "cal", "--year", "2025"])
        .assert()
        .success()
        .stdout(contains("2025"))
        .stdout(contains("January 2025"))
        .stdout(contains("December 2025"));
}

#[test]
fn test_summary_refuses_empty_day_without_model() {
    let file = setup_test_file("cli_summary_empty");
    init_file_with_data(&file);

    // no event on this date, so no model call is attempted
    rct()
        .args(["--file", &file, "summary", "day", "2099-01-01"])
        .assert()
        .success()
        .stdout(contains("No events recorded for 2099-01-01."));
}
