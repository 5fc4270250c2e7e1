//! CLI command implementations
//!
//! This module contains implementations of various commands
//! supported by the CLI application using the Command pattern.

pub mod command_traits;
pub mod direct_command;
pub mod forward_command;
pub mod batch_command;

pub use command_traits::{Command, CommandFactory};
pub use direct_command::DirectCommand;
pub use forward_command::ForwardCommand;
pub use batch_command::BatchCommand;

use clap::ArgMatches;
use crate::api::Svy21Kit;
use crate::cli::USAGE;
use crate::errors::{ConvertError, ConvertResult};

/// Factory for creating command instances based on CLI arguments
///
/// This factory examines the command-line arguments and creates
/// the appropriate command instance for execution.
pub struct Svy21CommandFactory;

impl Svy21CommandFactory {
    /// Create a new factory instance
    pub fn new() -> Self {
        Svy21CommandFactory
    }
}

impl Default for Svy21CommandFactory {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> CommandFactory<'a> for Svy21CommandFactory {
    fn create_command(&self, args: &ArgMatches, kit: &'a Svy21Kit) -> ConvertResult<Box<dyn Command + 'a>> {
        if args.contains_id("direct") {
            Ok(Box::new(DirectCommand::new(args, kit)?))
        } else if args.contains_id("forward") {
            Ok(Box::new(ForwardCommand::new(args, kit)?))
        } else if args.contains_id("input") && args.contains_id("output") {
            Ok(Box::new(BatchCommand::new(args, kit)?))
        } else {
            Err(ConvertError::Usage(USAGE.to_string()))
        }
    }
}
