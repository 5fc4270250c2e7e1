//! Utility modules for common functionality
//!
//! This module provides various utility functions and types used throughout the application.

pub mod logger;
pub(crate) mod progress;
pub mod format_utils;
pub mod path_utils;
#[cfg(test)]
mod tests;
