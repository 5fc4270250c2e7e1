//! Reference ellipsoid and the meridional arc series derived from it

use crate::errors::{ConvertError, ConvertResult};

/// Reference ellipsoid parameters
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EllipsoidConstants {
    /// Semi-major axis in meters
    pub a: f64,
    /// Flattening
    pub f: f64,
    /// Semi-minor axis: a * (1 - f)
    pub b: f64,
    /// First eccentricity squared: 2f - f^2
    pub e2: f64,
    /// e2 squared
    pub e4: f64,
    /// e2 cubed
    pub e6: f64,
}

impl EllipsoidConstants {
    /// WGS 84 semi-major axis in meters
    pub const WGS84_A: f64 = 6378137.0;
    /// WGS 84 flattening
    pub const WGS84_F: f64 = 1.0 / 298.257223563;

    /// The WGS 84 ellipsoid
    pub fn wgs84() -> Self {
        Self::derive(Self::WGS84_A, Self::WGS84_F)
    }

    /// Create an ellipsoid from its semi-major axis and flattening
    ///
    /// # Arguments
    /// * `a` - Semi-major axis in meters, must be positive
    /// * `f` - Flattening, must lie strictly between 0 and 1
    ///
    /// # Returns
    /// The ellipsoid with its derived constants, or a validation error
    pub fn new(a: f64, f: f64) -> ConvertResult<Self> {
        if !(a.is_finite() && a > 0.0) {
            return Err(ConvertError::Validation(format!(
                "Semi-major axis must be positive, got {}", a
            )));
        }
        if !(f > 0.0 && f < 1.0) {
            return Err(ConvertError::Validation(format!(
                "Flattening must lie in (0, 1), got {}", f
            )));
        }

        Ok(Self::derive(a, f))
    }

    fn derive(a: f64, f: f64) -> Self {
        let b = a * (1.0 - f);
        let e2 = (2.0 * f) - (f * f);
        let e4 = e2 * e2;
        let e6 = e4 * e2;

        EllipsoidConstants { a, f, b, e2, e4, e6 }
    }

    /// Third flattening n = (a - b) / (a + b)
    pub fn third_flattening(&self) -> f64 {
        (self.a - self.b) / (self.a + self.b)
    }
}

impl Default for EllipsoidConstants {
    fn default() -> Self {
        Self::wgs84()
    }
}

/// Coefficients of the meridional arc length series
///
/// M = a * (A0*phi - A2*sin(2 phi) + A4*sin(4 phi) - A6*sin(6 phi))
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SeriesCoefficients {
    pub a0: f64,
    pub a2: f64,
    pub a4: f64,
    pub a6: f64,
}

impl SeriesCoefficients {
    /// Derive the series coefficients from an ellipsoid
    pub fn from_ellipsoid(ellipsoid: &EllipsoidConstants) -> Self {
        let e2 = ellipsoid.e2;
        let e4 = ellipsoid.e4;
        let e6 = ellipsoid.e6;

        SeriesCoefficients {
            a0: 1.0 - (e2 / 4.0) - (3.0 * e4 / 64.0) - (5.0 * e6 / 256.0),
            a2: (3.0 / 8.0) * (e2 + (e4 / 4.0) + (15.0 * e6 / 128.0)),
            a4: (15.0 / 256.0) * (e4 + (3.0 * e6 / 4.0)),
            a6: 35.0 * e6 / 3072.0,
        }
    }
}
