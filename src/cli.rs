//! Command-line interface definition
//!
//! Builds the clap parser and turns its matches into a [`ConverterConfig`].

use clap::{Arg, ArgAction, ArgMatches, Command as ClapCommand};
use log::LevelFilter;

use crate::config::ConverterConfig;
use crate::errors::ConvertResult;

/// Usage text shown when the arguments select no mode
pub const USAGE: &str = "Usage: svy21kit --direct <x> <y>\n       svy21kit --forward <lat> <lon>\n       svy21kit <input_file.csv> <output_file.csv>";

/// Build the argument parser
pub fn build_cli() -> ClapCommand {
    ClapCommand::new("svy21kit")
        .version(env!("CARGO_PKG_VERSION"))
        .author("Maurice Schilpp")
        .about("Convert between SVY21 grid coordinates and WGS84 latitude/longitude")
        .arg(
            Arg::new("input")
                .help("Input CSV file of x,y (easting,northing) rows")
                .value_name("INPUT")
                .required(false)
                .index(1),
        )
        .arg(
            Arg::new("output")
                .help("Output CSV file for Lat,Long rows")
                .value_name("OUTPUT")
                .required(false)
                .index(2),
        )
        .arg(
            Arg::new("direct")
                .long("direct")
                .help("Convert a single SVY21 point given as <x> <y> (easting northing)")
                .value_names(["X", "Y"])
                .num_args(2)
                .allow_negative_numbers(true)
                .conflicts_with_all(["input", "forward"]),
        )
        .arg(
            Arg::new("forward")
                .long("forward")
                .help("Convert a single WGS84 point given as <lat> <lon> to SVY21")
                .value_names(["LAT", "LON"])
                .num_args(2)
                .allow_negative_numbers(true)
                .conflicts_with("input"),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .help("TOML configuration file")
                .value_name("FILE")
                .required(false),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Enable verbose output")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("no-progress")
                .long("no-progress")
                .help("Do not draw a progress bar in batch mode")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("no-header")
                .long("no-header")
                .help("Treat the first input row as data instead of a header")
                .action(ArgAction::SetTrue),
        )
}

/// Load the configuration file, if any, and apply command-line overrides
pub fn resolve_config(args: &ArgMatches) -> ConvertResult<ConverterConfig> {
    let mut config = match args.get_one::<String>("config") {
        Some(path) => ConverterConfig::from_file(path)?,
        None => ConverterConfig::default(),
    };

    if args.get_flag("verbose") {
        config.log_level = config.log_level.max(LevelFilter::Debug);
    }
    if args.get_flag("no-progress") {
        config.show_progress = false;
    }
    if args.get_flag("no-header") {
        config.skip_header = false;
    }

    Ok(config)
}

/// Most verbose level echoed to the terminal
///
/// Without `--verbose` nothing is mirrored; `main` reports failures itself.
pub fn console_level(args: &ArgMatches) -> LevelFilter {
    if args.get_flag("verbose") {
        LevelFilter::Debug
    } else {
        LevelFilter::Off
    }
}
