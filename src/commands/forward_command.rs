//! Single-point latitude/longitude to SVY21 command

use clap::ArgMatches;
use log::info;

use crate::api::Svy21Kit;
use crate::commands::command_traits::Command;
use crate::coordinate::ProjectedCoordinate;
use crate::errors::{ConvertError, ConvertResult};
use crate::utils::format_utils::{parse_number, round_to, GRID_DECIMALS};

/// Command converting one WGS84 point to SVY21
pub struct ForwardCommand<'a> {
    latitude: f64,
    longitude: f64,
    kit: &'a Svy21Kit,
}

impl<'a> ForwardCommand<'a> {
    /// Create a new forward command from the two `--forward` values
    pub fn new(args: &ArgMatches, kit: &'a Svy21Kit) -> ConvertResult<Self> {
        let values: Vec<&String> = args.get_many::<String>("forward")
            .ok_or_else(|| ConvertError::Usage("Missing --forward <lat> <lon> values".to_string()))?
            .collect();

        if values.len() != 2 {
            return Err(ConvertError::Usage("--forward expects exactly two values: <lat> <lon>".to_string()));
        }

        Self::from_values(values[0], values[1], kit)
    }

    /// Create a forward command from raw latitude and longitude strings
    pub fn from_values(lat: &str, lon: &str, kit: &'a Svy21Kit) -> ConvertResult<Self> {
        let latitude = parse_number("latitude", lat)?;
        let longitude = parse_number("longitude", lon)?;

        if !(-90.0..=90.0).contains(&latitude) {
            return Err(ConvertError::Validation(format!(
                "Latitude must lie in [-90, 90], got {}", latitude
            )));
        }

        Ok(ForwardCommand {
            latitude,
            longitude,
            kit,
        })
    }

    pub fn convert(&self) -> ProjectedCoordinate {
        self.kit.to_svy21(self.latitude, self.longitude)
    }

    /// The lines printed for the converted point, in millimeters
    pub fn render(&self) -> String {
        let result = self.convert();
        format!("Northing: {}\nEasting: {}",
                round_to(result.northing, GRID_DECIMALS),
                round_to(result.easting, GRID_DECIMALS))
    }
}

impl<'a> Command for ForwardCommand<'a> {
    fn name(&self) -> &'static str {
        "forward"
    }

    fn execute(&self) -> ConvertResult<()> {
        info!("Converting WGS84 point lat={}, lon={}", self.latitude, self.longitude);
        println!("{}", self.render());
        Ok(())
    }
}
