//! File name utilities
//!
//! Checks and rewrites applied to the batch mode's input and output paths.

use std::path::{Path, PathBuf};

/// Extension required on batch input files and forced on outputs
pub const CSV_EXTENSION: &str = "csv";

/// Returns true when the name ends in `.csv`, ignoring case
pub fn is_csv_file(filename: &str) -> bool {
    filename.to_lowercase().ends_with(".csv")
}

/// Coerce an output file name to the `.csv` extension
///
/// Names that already end in `.csv` are kept as they are. Otherwise any
/// existing extension is replaced with `.csv`.
pub fn ensure_csv_extension(filename: &str) -> PathBuf {
    if is_csv_file(filename) {
        return PathBuf::from(filename);
    }

    Path::new(filename).with_extension(CSV_EXTENSION)
}
