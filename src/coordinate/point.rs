//! Point structures for the two coordinate systems

use std::fmt;

/// A latitude/longitude pair in degrees
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeodeticCoordinate {
    /// Latitude in degrees, north positive
    pub latitude: f64,
    /// Longitude in degrees, east positive
    pub longitude: f64,
}

impl GeodeticCoordinate {
    /// Create a new geodetic coordinate
    pub fn new(latitude: f64, longitude: f64) -> Self {
        GeodeticCoordinate { latitude, longitude }
    }
}

impl fmt::Display for GeodeticCoordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.latitude, self.longitude)
    }
}

/// A northing/easting pair in meters
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProjectedCoordinate {
    /// Northing in meters
    pub northing: f64,
    /// Easting in meters
    pub easting: f64,
}

impl ProjectedCoordinate {
    /// Create a new projected coordinate
    pub fn new(northing: f64, easting: f64) -> Self {
        ProjectedCoordinate { northing, easting }
    }

    /// Create a projected coordinate from grid x (easting) and y (northing)
    pub fn from_xy(x: f64, y: f64) -> Self {
        ProjectedCoordinate { northing: y, easting: x }
    }
}

impl fmt::Display for ProjectedCoordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(N {}, E {})", self.northing, self.easting)
    }
}
