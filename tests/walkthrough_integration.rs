use std::process::Command;

use gradewalk::cursor::{CursorError, ListCursor, Motion};
use gradewalk::walkthrough::Walkthrough;

#[test]
fn test_binary_prints_three_lines_and_exits_cleanly() {
    let output = Command::new(env!("CARGO_BIN_EXE_gradewalk"))
        .env_remove("RUST_LOG")
        .output()
        .unwrap();
    assert!(output.status.success());
    assert_eq!(
        String::from_utf8(output.stdout).unwrap(),
        "A B C D E F \nA+ B+ C+ D+ E+ F+ \nF+ E+ D+ C+ B+ A+ \n"
    );
}

fn run_with_log_filter(filter: &str) -> std::process::Output {
    Command::new(env!("CARGO_BIN_EXE_gradewalk"))
        .env("RUST_LOG", filter)
        .output()
        .unwrap()
}

#[test]
fn test_debug_logging_stays_off_stdout() {
    let output = run_with_log_filter("gradewalk=trace");
    assert!(output.status.success());
    assert!(!output.stderr.is_empty(), "trace events should reach stderr");
    assert_eq!(String::from_utf8(output.stdout).unwrap().lines().count(), 3);
}

#[test]
fn test_bare_log_level_raises_verbosity() {
    for filter in ["debug", "trace"] {
        let output = run_with_log_filter(filter);
        assert!(output.status.success());
        assert!(
            String::from_utf8(output.stderr)
                .unwrap()
                .contains("printing grades"),
            "RUST_LOG={filter} should enable walkthrough debug events"
        );
        assert_eq!(String::from_utf8(output.stdout).unwrap().lines().count(), 3);
    }
}

#[test]
fn test_default_log_level_keeps_stderr_quiet() {
    let output = Command::new(env!("CARGO_BIN_EXE_gradewalk"))
        .env_remove("RUST_LOG")
        .output()
        .unwrap();
    assert!(output.status.success());
    assert!(output.stderr.is_empty());
}

#[test]
fn test_walkthrough_result_matches_fresh_forward_read() {
    let mut out = Vec::new();
    let grades = Walkthrough::new().run(&mut out).unwrap();

    let mut reread = grades.clone();
    let mut cursor = ListCursor::new(&mut reread);
    let mut seen = Vec::new();
    while cursor.has_next() {
        seen.push(cursor.next().unwrap().clone());
    }
    assert_eq!(seen, grades);
}

#[test]
fn test_cursor_reports_both_boundaries() {
    let mut items = vec!["A".to_string()];
    let mut cursor = ListCursor::new(&mut items);
    assert!(matches!(
        cursor.previous(),
        Err(CursorError::OutOfBounds {
            motion: Motion::Backward,
            ..
        })
    ));
    cursor.next().unwrap();
    assert!(matches!(
        cursor.next(),
        Err(CursorError::OutOfBounds {
            motion: Motion::Forward,
            ..
        })
    ));
}

#[test]
fn test_cursor_edits_mix_with_traversal() {
    let mut items: Vec<String> = ["A", "B", "C"].into_iter().map(String::from).collect();
    let mut cursor = ListCursor::new(&mut items);
    while cursor.has_next() {
        let grade = cursor.next().unwrap().clone();
        if grade == "B" {
            cursor.remove().unwrap();
            cursor.insert("B-".to_string());
            cursor.insert("B+".to_string());
        } else {
            cursor.set(format!("{grade}!")).unwrap();
        }
    }
    assert_eq!(items, ["A!", "B-", "B+", "C!"]);
}
