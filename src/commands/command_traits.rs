//! Traits shared by the converter's command-line modes

use clap::ArgMatches;

use crate::api::Svy21Kit;
use crate::errors::ConvertResult;

/// One runnable conversion mode (single point or batch file)
pub trait Command {
    /// Short name of the mode, used in log lines
    fn name(&self) -> &'static str;

    /// Run the conversion and print its result
    fn execute(&self) -> ConvertResult<()>;
}

/// Picks a [`Command`] for a set of parsed arguments
pub trait CommandFactory<'a> {
    /// Build the command selected by `args`
    ///
    /// # Arguments
    /// * `args` - Parsed command-line arguments
    /// * `kit` - Converter the command borrows for its lifetime
    ///
    /// # Returns
    /// The selected command, a parse error for bad values, or a usage error
    /// when no mode was selected
    fn create_command(&self, args: &ArgMatches, kit: &'a Svy21Kit) -> ConvertResult<Box<dyn Command + 'a>>;
}
