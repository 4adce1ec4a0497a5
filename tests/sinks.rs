#![allow(clippy::unwrap_used, clippy::expect_used)]

mod common;

use std::{
    fs::{self, File},
    io::Write,
    sync::{Arc, Mutex},
};

use logcenter::{LogCenter, Severity};
use serial_test::serial;

#[test]
#[serial]
fn file_sink_lifecycle_closes_owned_files() {
    let center = LogCenter::new();
    let dir = tempfile::tempdir().unwrap();
    let baseline = common::count_open_fds();

    center.set_low_sink_file(dir.path().join("low.log"));
    assert_eq!(common::count_open_fds(), baseline + 1);

    // Replacing one owned file with another keeps exactly one open.
    center.set_low_sink_file(dir.path().join("low2.log"));
    assert_eq!(common::count_open_fds(), baseline + 1);

    // Replacing with a caller-owned stream closes the owned file.
    let stream: Arc<Mutex<Vec<u8>>> = Arc::new(Mutex::new(Vec::new()));
    center.set_low_sink(stream);
    assert_eq!(common::count_open_fds(), baseline);
}

#[test]
#[serial]
fn reset_closes_owned_files() {
    let center = LogCenter::new();
    let dir = tempfile::tempdir().unwrap();
    let baseline = common::count_open_fds();

    center.set_high_sink_file(dir.path().join("high.log"));
    center.set_low_sink_file(dir.path().join("low.log"));
    assert_eq!(common::count_open_fds(), baseline + 2);

    center.reset();
    assert_eq!(common::count_open_fds(), baseline);
    assert_eq!(center.threshold(), Severity::INFO);
}

#[test]
#[serial]
fn replacing_an_external_stream_leaves_it_open() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("external.log");
    let shared = Arc::new(Mutex::new(File::create(&path).unwrap()));

    let center = LogCenter::new();
    center.set_high_sink(shared.clone());
    center.log(Severity::ERROR, "to the caller's file");

    // Hand the sink back to a plain buffer; the caller's file must
    // survive the replacement.
    center.set_high_sink(Arc::new(Mutex::new(Vec::<u8>::new())));
    shared.lock().unwrap().write_all(b"still open\n").unwrap();

    let written = fs::read_to_string(&path).unwrap();
    assert!(written.contains("] ERROR: to the caller's file"));
    assert!(written.ends_with("still open\n"));
}

#[test]
#[serial]
fn failed_file_open_keeps_previous_sink_working() {
    let center = LogCenter::new();
    center.set_threshold(Severity::TRACE);
    let dir = tempfile::tempdir().unwrap();
    let low_path = dir.path().join("low.log");
    center.set_low_sink_file(&low_path);

    let high: Arc<Mutex<Vec<u8>>> = Arc::new(Mutex::new(Vec::new()));
    center.set_high_sink(high.clone());

    let bad_path = dir.path().join("missing").join("low.log");
    center.set_low_sink_file(&bad_path);

    // The failure is reported at ERROR severity, naming the path and the
    // OS error.
    let report = String::from_utf8(high.lock().unwrap().clone()).unwrap();
    assert!(report.contains("] ERROR: could not open log file"));
    assert!(report.contains("missing"));
    assert!(report.contains("os error"));

    // The previous sink is still fully usable.
    center.log(Severity::INFO, "still routed to the old file");
    assert_eq!(common::count_lines(&low_path), 1);
    let written = fs::read_to_string(&low_path).unwrap();
    assert!(written.contains("] INFO: still routed to the old file"));
}
