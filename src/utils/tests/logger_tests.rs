//! Tests for the file logger

use std::fs;

use log::{Level, LevelFilter, Log, Metadata, Record};
use tempfile::tempdir;

use crate::utils::logger::Logger;

#[test]
fn test_log_writes_to_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("test.log");
    let logger = Logger::new(path.to_str().unwrap()).unwrap();

    logger.log("first line").unwrap();
    logger.log("second line").unwrap();

    let contents = fs::read_to_string(&path).unwrap();
    assert_eq!(contents, "first line\nsecond line\n");
}

#[test]
fn test_records_respect_file_level() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("levels.log");
    let logger = Logger::with_levels(path.to_str().unwrap(), LevelFilter::Info, LevelFilter::Off).unwrap();

    Log::log(&logger, &Record::builder()
        .level(Level::Info)
        .args(format_args!("kept"))
        .build());
    Log::log(&logger, &Record::builder()
        .level(Level::Debug)
        .args(format_args!("dropped"))
        .build());

    let contents = fs::read_to_string(&path).unwrap();
    assert_eq!(contents, "[INFO] kept\n");
}

#[test]
fn test_enabled_uses_most_verbose_sink() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("enabled.log");
    let logger = Logger::with_levels(path.to_str().unwrap(), LevelFilter::Warn, LevelFilter::Debug).unwrap();

    assert_eq!(logger.max_level(), LevelFilter::Debug);
    assert!(logger.enabled(&Metadata::builder().level(Level::Debug).build()));
    assert!(!logger.enabled(&Metadata::builder().level(Level::Trace).build()));
}

#[test]
fn test_new_fails_for_missing_directory() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("missing").join("test.log");
    assert!(Logger::new(path.to_str().unwrap()).is_err());
}

#[test]
fn test_init_global_logger_installs_file_sink() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("global.log");
    Logger::init_global_logger(path.to_str().unwrap(), LevelFilter::Info, LevelFilter::Off).unwrap();

    log::info!("global logger ready");
    log::debug!("below file level");

    let contents = fs::read_to_string(&path).unwrap();
    assert_eq!(contents, "[INFO] global logger ready\n");
}
