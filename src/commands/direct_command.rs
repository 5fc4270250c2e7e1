//! Single-point SVY21 to latitude/longitude command
//!
//! Takes grid `x y` (easting, northing) from the command line and prints
//! the rounded latitude and longitude.

use clap::ArgMatches;
use log::info;

use crate::api::Svy21Kit;
use crate::commands::command_traits::Command;
use crate::coordinate::GeodeticCoordinate;
use crate::errors::{ConvertError, ConvertResult};
use crate::utils::format_utils::parse_number;

/// Command converting one SVY21 point to WGS84
pub struct DirectCommand<'a> {
    /// Grid easting (x)
    easting: f64,
    /// Grid northing (y)
    northing: f64,
    /// Converter used for the projection
    kit: &'a Svy21Kit,
}

impl<'a> DirectCommand<'a> {
    /// Create a new direct command from the two `--direct` values
    ///
    /// # Arguments
    /// * `args` - CLI argument matches from clap
    /// * `kit` - Converter used for the projection
    ///
    /// # Returns
    /// A new DirectCommand, or a parse error if either value is not numeric
    pub fn new(args: &ArgMatches, kit: &'a Svy21Kit) -> ConvertResult<Self> {
        let values: Vec<&String> = args.get_many::<String>("direct")
            .ok_or_else(|| ConvertError::Usage("Missing --direct <x> <y> values".to_string()))?
            .collect();

        if values.len() != 2 {
            return Err(ConvertError::Usage("--direct expects exactly two values: <x> <y>".to_string()));
        }

        Self::from_values(values[0], values[1], kit)
    }

    /// Create a direct command from raw `x` and `y` strings
    pub fn from_values(x: &str, y: &str, kit: &'a Svy21Kit) -> ConvertResult<Self> {
        let easting = parse_number("x (easting)", x)?;
        let northing = parse_number("y (northing)", y)?;

        Ok(DirectCommand {
            easting,
            northing,
            kit,
        })
    }

    /// Convert the point
    pub fn convert(&self) -> GeodeticCoordinate {
        self.kit.to_latlon(self.northing, self.easting)
    }

    /// The lines printed for the converted point
    pub fn render(&self) -> String {
        let result = self.convert();
        format!("Latitude: {}\nLongitude: {}", result.latitude, result.longitude)
    }
}

impl<'a> Command for DirectCommand<'a> {
    fn name(&self) -> &'static str {
        "direct"
    }

    fn execute(&self) -> ConvertResult<()> {
        info!("Converting SVY21 point x={}, y={}", self.easting, self.northing);
        println!("{}", self.render());
        Ok(())
    }
}
