//! Tests for `src/logging.rs`.

use assurance_validators::logging::{self, LoggingGuard};

#[test]
fn logging_guard_is_send() {
    fn assert_send<T: Send>() {}
    assert_send::<LoggingGuard>();
}

#[test]
fn init_with_file_creates_logs_dir() {
    let tmp = tempfile::tempdir().expect("should create temp dir");
    let logs_dir = tmp.path().join("logs");
    assert!(!logs_dir.exists());

    // Only one global subscriber can be installed per process; the directory
    // is created either way.
    let guard = logging::init_with_file(&logs_dir, "info").expect("init logging");
    assert!(logs_dir.exists(), "logs directory should be created");
    drop(guard);
}

#[test]
fn init_cli_twice_is_harmless() {
    logging::init_cli("warn");
    logging::init_cli("debug");
}
