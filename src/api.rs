use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::{Path, PathBuf};
use log::{debug, info};

use crate::config::ConverterConfig;
use crate::coordinate::{svy21, GeodeticCoordinate, ProjectedCoordinate, ProjectionEngine};
use crate::errors::{ConvertError, ConvertResult};
use crate::io::{read_projected_records, write_geodetic_records};
use crate::utils::path_utils::{ensure_csv_extension, is_csv_file};
use crate::utils::progress::ProgressTracker;

/// Outcome of a batch file conversion
#[derive(Debug, Clone, PartialEq)]
pub struct BatchSummary {
    /// File actually written, after extension coercion
    pub output_path: PathBuf,
    /// Number of coordinate rows converted
    pub rows: usize,
}

/// Main interface to the svy21kit library
pub struct Svy21Kit {
    engine: &'static ProjectionEngine,
    config: ConverterConfig,
}

impl Svy21Kit {
    /// Create a new Svy21Kit instance using the shared SVY21 engine
    ///
    /// # Arguments
    /// * `config` - Batch and logging settings
    pub fn new(config: ConverterConfig) -> Self {
        Svy21Kit {
            engine: svy21(),
            config,
        }
    }

    /// The settings this instance was created with
    pub fn config(&self) -> &ConverterConfig {
        &self.config
    }

    /// Convert an SVY21 northing/easting to a rounded latitude/longitude
    pub fn to_latlon(&self, northing: f64, easting: f64) -> GeodeticCoordinate {
        let result = self.engine.unproject(northing, easting);
        debug!("SVY21 (N {}, E {}) -> {}", northing, easting, result);
        result
    }

    /// Convert a latitude/longitude to an SVY21 northing/easting
    pub fn to_svy21(&self, lat: f64, lon: f64) -> ProjectedCoordinate {
        let result = self.engine.project(lat, lon);
        debug!("WGS84 ({}, {}) -> SVY21 {}", lat, lon, result);
        result
    }

    /// Check that a batch input path exists and carries a `.csv` extension
    pub fn validate_input(input_path: &str) -> ConvertResult<()> {
        if !Path::new(input_path).exists() {
            return Err(ConvertError::NotFound(input_path.to_string()));
        }
        if !is_csv_file(input_path) {
            return Err(ConvertError::Validation(format!(
                "Make sure the input file extension is '.csv': {}", input_path
            )));
        }
        Ok(())
    }

    /// Convert a CSV of SVY21 `x,y` rows into a CSV of `Lat,Long` rows
    ///
    /// Every row is converted before the output file is created, so a
    /// malformed row leaves no output behind.
    ///
    /// # Arguments
    /// * `input_path` - Existing `.csv` file of easting,northing rows
    /// * `output_path` - Destination; coerced to a `.csv` extension
    ///
    /// # Returns
    /// The path written and the number of rows, or an error
    pub fn convert_file(&self, input_path: &str, output_path: &str) -> ConvertResult<BatchSummary> {
        Self::validate_input(input_path)?;

        let output_path = ensure_csv_extension(output_path);
        info!("Converting {} to {}", input_path, output_path.display());

        let reader = BufReader::new(File::open(input_path)?);
        let grid_points = read_projected_records(reader, self.config.skip_header)?;

        let progress = if self.config.show_progress && !grid_points.is_empty() {
            ProgressTracker::new(grid_points.len() as u64, "Converting")
        } else {
            ProgressTracker::hidden()
        };

        let mut converted = Vec::with_capacity(grid_points.len());
        for point in &grid_points {
            converted.push(self.engine.unproject_point(point));
            progress.increment(1);
        }
        progress.finish();

        let writer = BufWriter::new(File::create(&output_path)?);
        write_geodetic_records(writer, &converted)?;

        info!("Wrote {} rows to {}", converted.len(), output_path.display());
        Ok(BatchSummary {
            output_path,
            rows: converted.len(),
        })
    }
}

impl Default for Svy21Kit {
    fn default() -> Self {
        Svy21Kit::new(ConverterConfig::default())
    }
}
