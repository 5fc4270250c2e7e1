//! Projection origin and false offsets

use crate::errors::{ConvertError, ConvertResult};

/// Origin, false offsets and scale factor of a transverse Mercator grid
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProjectionOrigin {
    /// Origin latitude in degrees
    pub latitude: f64,
    /// Origin longitude (central meridian) in degrees
    pub longitude: f64,
    /// False northing in meters
    pub false_northing: f64,
    /// False easting in meters
    pub false_easting: f64,
    /// Scale factor on the central meridian
    pub scale_factor: f64,
}

impl ProjectionOrigin {
    /// SVY21 origin: Base 7 at Pierce Reservoir
    pub const SVY21: ProjectionOrigin = ProjectionOrigin {
        latitude: 1.366666,
        longitude: 103.833333,
        false_northing: 38744.572,
        false_easting: 28001.642,
        scale_factor: 1.0,
    };

    /// Create a projection origin, rejecting a non-positive scale factor
    pub fn new(latitude: f64,
               longitude: f64,
               false_northing: f64,
               false_easting: f64,
               scale_factor: f64) -> ConvertResult<Self> {
        if !(scale_factor.is_finite() && scale_factor > 0.0) {
            return Err(ConvertError::Validation(format!(
                "Scale factor must be positive, got {}", scale_factor
            )));
        }

        Ok(ProjectionOrigin {
            latitude,
            longitude,
            false_northing,
            false_easting,
            scale_factor,
        })
    }
}

impl Default for ProjectionOrigin {
    fn default() -> Self {
        Self::SVY21
    }
}
