//! Logger utility for application-wide logging
//!
//! This module provides a custom logger implementation that works alongside
//! the standard log crate, writing every record to a log file and mirroring
//! the more important ones to stderr. Standard output is left free for
//! conversion results.

use std::fs::File;
use std::io::{self, Write};
use std::path::Path;
use std::sync::Mutex;
use log::{Log, Record, Metadata, LevelFilter};

/// Custom logger implementation
pub struct Logger {
    /// File handle for log output
    file: Mutex<Option<File>>,
    /// Most verbose level written to the file
    file_level: LevelFilter,
    /// Most verbose level echoed to stderr
    console_level: LevelFilter,
}

impl Logger {
    /// Creates a new logger instance
    ///
    /// # Arguments
    ///
    /// * `log_file` - Path to the log file
    ///
    /// # Returns
    ///
    /// A new Logger instance or an error if the file cannot be created
    pub fn new(log_file: &str) -> io::Result<Self> {
        Self::with_levels(log_file, LevelFilter::Debug, LevelFilter::Warn)
    }

    /// Creates a logger with explicit file and console levels
    pub fn with_levels(log_file: &str,
                       file_level: LevelFilter,
                       console_level: LevelFilter) -> io::Result<Self> {
        let file = File::create(Path::new(log_file))?;
        Ok(Logger {
            file: Mutex::new(Some(file)),
            file_level,
            console_level,
        })
    }

    /// Logs a message to the log file
    ///
    /// # Arguments
    ///
    /// * `message` - The message to log
    pub fn log(&self, message: &str) -> io::Result<()> {
        let mut guard = self.file.lock()
            .map_err(|_| io::Error::new(io::ErrorKind::Other, "log file lock poisoned"))?;
        if let Some(file) = guard.as_mut() {
            writeln!(file, "{}", message)?;
            file.flush()?;
        }
        Ok(())
    }

    /// Most verbose level this logger accepts from any sink
    pub fn max_level(&self) -> LevelFilter {
        self.file_level.max(self.console_level)
    }

    /// Static method to initialize the global logger
    ///
    /// # Arguments
    ///
    /// * `log_file` - Path to the log file
    /// * `file_level` - Most verbose level written to the file
    /// * `console_level` - Most verbose level echoed to stderr
    pub fn init_global_logger(log_file: &str,
                              file_level: LevelFilter,
                              console_level: LevelFilter) -> io::Result<()> {
        let global_logger = Logger::with_levels(log_file, file_level, console_level)?;
        let max_level = global_logger.max_level();

        // Only the first call wins; later calls keep the existing logger
        if log::set_boxed_logger(Box::new(global_logger)).is_err() {
            eprintln!("Warning: Global logger was already initialized");
            return Ok(());
        }

        log::set_max_level(max_level);
        Ok(())
    }
}

// Implement the Log trait to make our Logger work with the log crate
impl Log for Logger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.max_level()
    }

    fn log(&self, record: &Record) {
        let level = record.level();
        let message = format!("[{}] {}", level, record.args());

        if level <= self.file_level {
            let _ = Logger::log(self, &message);
        }

        if level <= self.console_level {
            eprintln!("{}", message);
        }
    }

    fn flush(&self) {
        // Already flushing in the log method
    }
}
