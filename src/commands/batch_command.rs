//! Batch CSV conversion command
//!
//! This module implements the command for converting a CSV file of SVY21
//! `x,y` rows into a CSV file of `Lat,Long` rows.

use clap::ArgMatches;
use log::info;

use crate::api::{BatchSummary, Svy21Kit};
use crate::commands::command_traits::Command;
use crate::errors::{ConvertError, ConvertResult};

/// Command for converting a CSV file of grid coordinates
pub struct BatchCommand<'a> {
    /// Path to the input file
    input_file: String,
    /// Path to the output file, before extension coercion
    output_file: String,
    /// Converter used for every row
    kit: &'a Svy21Kit,
}

impl<'a> BatchCommand<'a> {
    /// Create a new batch command
    ///
    /// # Arguments
    /// * `args` - CLI argument matches from clap
    /// * `kit` - Converter used for every row
    ///
    /// # Returns
    /// A new BatchCommand instance or an error
    pub fn new(args: &ArgMatches, kit: &'a Svy21Kit) -> ConvertResult<Self> {
        let input_file = args.get_one::<String>("input")
            .ok_or_else(|| ConvertError::Usage("Missing input file".to_string()))?
            .clone();

        let output_file = args.get_one::<String>("output")
            .ok_or_else(|| ConvertError::Usage("Missing output file".to_string()))?
            .clone();

        Ok(BatchCommand {
            input_file,
            output_file,
            kit,
        })
    }

    /// Run the conversion and report what was written
    pub fn run(&self) -> ConvertResult<BatchSummary> {
        self.kit.convert_file(&self.input_file, &self.output_file)
    }
}

impl<'a> Command for BatchCommand<'a> {
    fn name(&self) -> &'static str {
        "batch"
    }

    fn execute(&self) -> ConvertResult<()> {
        info!("Batch converting {} into {}", self.input_file, self.output_file);

        let summary = self.run()?;

        info!("Batch conversion successful ({} rows)", summary.rows);
        println!("Done! Check {} file in the folder", summary.output_path.display());

        Ok(())
    }
}
