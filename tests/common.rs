#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn stl() -> Command {
    cargo_bin_cmd!("studylog")
}

/// Create a unique test log path inside the system temp dir and remove any existing file
pub fn setup_test_log(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_studylog.csv", name));
    let log_path = path.to_string_lossy().to_string();
    fs::remove_file(&log_path).ok();
    log_path
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Record one completed session through the CLI stopwatch (stop immediately)
pub fn record_session(log_path: &str, subject: &str) {
    stl()
        .args(["--log", log_path, "--test", "start", subject])
        .write_stdin("s\n")
        .assert()
        .success();
}

/// Seed the log directly via the library store API with fixed dates and durations
pub fn seed_log(log_path: &str, rows: &[(&str, &str, i64, &str)]) {
    let store = studylog::store::SessionStore::new(log_path);
    for (date, subject, seconds, start) in rows {
        let session = studylog::models::session::Session::new(
            chrono::NaiveDate::parse_from_str(date, "%Y-%m-%d").expect("date"),
            subject,
            *seconds,
            chrono::NaiveTime::parse_from_str(start, "%H:%M").expect("time"),
        )
        .expect("session");
        store.append(&session).expect("append");
    }
}
