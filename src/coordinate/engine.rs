//! SVY21 projection engine
//!
//! Forward and inverse transverse Mercator mapping between WGS 84
//! latitude/longitude and the SVY21 grid, using the Redfearn series.
//! Reference: LINZ, "Transverse Mercator preliminary computations".

use std::f64::consts::PI;
use lazy_static::lazy_static;

use super::ellipsoid::{EllipsoidConstants, SeriesCoefficients};
use super::origin::ProjectionOrigin;
use super::point::{GeodeticCoordinate, ProjectedCoordinate};
use crate::utils::format_utils::{round_to, LATITUDE_DECIMALS, LONGITUDE_DECIMALS};

lazy_static! {
    static ref SVY21_ENGINE: ProjectionEngine = ProjectionEngine::default();
}

/// Shared SVY21 engine, built on first use
pub fn svy21() -> &'static ProjectionEngine {
    &SVY21_ENGINE
}

/// Immutable transverse Mercator engine for one ellipsoid and origin
///
/// All derived constants are computed in the constructor, so the engine
/// can be shared freely between threads.
#[derive(Debug, Clone)]
pub struct ProjectionEngine {
    ellipsoid: EllipsoidConstants,
    origin: ProjectionOrigin,
    coefficients: SeriesCoefficients,
    /// Meridional arc length at the origin latitude
    m0: f64,
}

impl ProjectionEngine {
    /// Create an engine for the given ellipsoid and origin
    pub fn new(ellipsoid: EllipsoidConstants, origin: ProjectionOrigin) -> Self {
        let coefficients = SeriesCoefficients::from_ellipsoid(&ellipsoid);
        let m0 = Self::arc_length(&ellipsoid, &coefficients, origin.latitude);

        ProjectionEngine {
            ellipsoid,
            origin,
            coefficients,
            m0,
        }
    }

    /// The ellipsoid the engine was built with
    pub fn ellipsoid(&self) -> &EllipsoidConstants {
        &self.ellipsoid
    }

    /// The projection origin the engine was built with
    pub fn origin(&self) -> &ProjectionOrigin {
        &self.origin
    }

    /// The meridional arc series coefficients
    pub fn coefficients(&self) -> &SeriesCoefficients {
        &self.coefficients
    }

    fn arc_length(ellipsoid: &EllipsoidConstants, c: &SeriesCoefficients, lat: f64) -> f64 {
        let lat_r = lat.to_radians();
        ellipsoid.a * ((c.a0 * lat_r)
            - (c.a2 * (2.0 * lat_r).sin())
            + (c.a4 * (4.0 * lat_r).sin())
            - (c.a6 * (6.0 * lat_r).sin()))
    }

    /// Distance along the meridian from the equator to `lat` (degrees)
    pub fn meridional_arc_length(&self, lat: f64) -> f64 {
        Self::arc_length(&self.ellipsoid, &self.coefficients, lat)
    }

    /// Meridional radius of curvature for a given sin²(latitude)
    pub fn radius_of_curvature(&self, sin2_lat: f64) -> f64 {
        let num = self.ellipsoid.a * (1.0 - self.ellipsoid.e2);
        let denom = (1.0 - self.ellipsoid.e2 * sin2_lat).powf(1.5);
        num / denom
    }

    /// Radius of curvature in the prime vertical for a given sin²(latitude)
    pub fn radius_in_prime_vertical(&self, sin2_lat: f64) -> f64 {
        let poly = 1.0 - self.ellipsoid.e2 * sin2_lat;
        self.ellipsoid.a / poly.sqrt()
    }

    /// Project a latitude/longitude (degrees) onto the grid
    pub fn project(&self, lat: f64, lon: f64) -> ProjectedCoordinate {
        let lat_r = lat.to_radians();
        let sin_lat = lat_r.sin();
        let sin2_lat = sin_lat * sin_lat;
        let cos_lat = lat_r.cos();
        let cos2_lat = cos_lat * cos_lat;
        let cos3_lat = cos2_lat * cos_lat;
        let cos4_lat = cos3_lat * cos_lat;
        let cos5_lat = cos4_lat * cos_lat;
        let cos6_lat = cos5_lat * cos_lat;
        let cos7_lat = cos6_lat * cos_lat;

        let rho = self.radius_of_curvature(sin2_lat);
        let v = self.radius_in_prime_vertical(sin2_lat);
        let psi = v / rho;
        let t = lat_r.tan();
        let w = (lon - self.origin.longitude).to_radians();

        let m = self.meridional_arc_length(lat);

        let w2 = w * w;
        let w4 = w2 * w2;
        let w6 = w4 * w2;
        let w8 = w6 * w2;

        let psi2 = psi * psi;
        let psi3 = psi2 * psi;
        let psi4 = psi3 * psi;

        let t2 = t * t;
        let t4 = t2 * t2;
        let t6 = t4 * t2;

        let n_term1 = w2 / 2.0 * v * sin_lat * cos_lat;
        let n_term2 = w4 / 24.0 * v * sin_lat * cos3_lat * (4.0 * psi2 + psi - t2);
        let n_term3 = w6 / 720.0 * v * sin_lat * cos5_lat
            * ((8.0 * psi4) * (11.0 - 24.0 * t2) - (28.0 * psi3) * (1.0 - 6.0 * t2)
                + psi2 * (1.0 - 32.0 * t2) - psi * 2.0 * t2 + t4);
        let n_term4 = w8 / 40320.0 * v * sin_lat * cos7_lat
            * (1385.0 - 3111.0 * t2 + 543.0 * t4 - t6);
        let k = self.origin.scale_factor;
        let northing = self.origin.false_northing
            + k * (m - self.m0 + n_term1 + n_term2 + n_term3 + n_term4);

        let e_term1 = w2 / 6.0 * cos2_lat * (psi - t2);
        let e_term2 = w4 / 120.0 * cos4_lat
            * ((4.0 * psi3) * (1.0 - 6.0 * t2) + psi2 * (1.0 + 8.0 * t2) - psi * 2.0 * t2 + t4);
        let e_term3 = w6 / 5040.0 * cos6_lat * (61.0 - 479.0 * t2 + 179.0 * t4 - t6);
        let easting = self.origin.false_easting
            + k * v * w * cos_lat * (1.0 + e_term1 + e_term2 + e_term3);

        ProjectedCoordinate::new(northing, easting)
    }

    /// Project a geodetic coordinate onto the grid
    pub fn project_point(&self, point: &GeodeticCoordinate) -> ProjectedCoordinate {
        self.project(point.latitude, point.longitude)
    }

    /// Recover latitude/longitude from grid northing/easting
    ///
    /// Latitude is rounded to 5 decimal places and longitude to 3. Use
    /// [`ProjectionEngine::unproject_unrounded`] for full precision.
    pub fn unproject(&self, northing: f64, easting: f64) -> GeodeticCoordinate {
        let exact = self.unproject_unrounded(northing, easting);
        GeodeticCoordinate::new(
            round_to(exact.latitude, LATITUDE_DECIMALS),
            round_to(exact.longitude, LONGITUDE_DECIMALS),
        )
    }

    /// Recover latitude/longitude from a projected coordinate, rounded
    pub fn unproject_point(&self, point: &ProjectedCoordinate) -> GeodeticCoordinate {
        self.unproject(point.northing, point.easting)
    }

    /// Inverse projection without the output rounding
    pub fn unproject_unrounded(&self, northing: f64, easting: f64) -> GeodeticCoordinate {
        let k = self.origin.scale_factor;
        let a = self.ellipsoid.a;

        let n_prime = northing - self.origin.false_northing;
        let m_prime = self.m0 + (n_prime / k);

        let n = self.ellipsoid.third_flattening();
        let n2 = n * n;
        let n3 = n2 * n;
        let n4 = n2 * n2;
        let g = a * (1.0 - n) * (1.0 - n2) * (1.0 + (9.0 * n2 / 4.0) + (225.0 * n4 / 64.0))
            * (PI / 180.0);
        let sigma = (m_prime * PI) / (180.0 * g);

        // Footpoint latitude
        let lat_prime = sigma
            + ((3.0 * n / 2.0) - (27.0 * n3 / 32.0)) * (2.0 * sigma).sin()
            + ((21.0 * n2 / 16.0) - (55.0 * n4 / 32.0)) * (4.0 * sigma).sin()
            + (151.0 * n3 / 96.0) * (6.0 * sigma).sin()
            + (1097.0 * n4 / 512.0) * (8.0 * sigma).sin();

        let sin_lat_prime = lat_prime.sin();
        let sin2_lat_prime = sin_lat_prime * sin_lat_prime;

        let rho_prime = self.radius_of_curvature(sin2_lat_prime);
        let v_prime = self.radius_in_prime_vertical(sin2_lat_prime);
        let psi_prime = v_prime / rho_prime;
        let psi_prime2 = psi_prime * psi_prime;
        let psi_prime3 = psi_prime2 * psi_prime;
        let psi_prime4 = psi_prime3 * psi_prime;
        let t_prime = lat_prime.tan();
        let t_prime2 = t_prime * t_prime;
        let t_prime4 = t_prime2 * t_prime2;
        let t_prime6 = t_prime4 * t_prime2;

        let e_prime = easting - self.origin.false_easting;
        let x = e_prime / (k * v_prime);
        let x2 = x * x;
        let x3 = x2 * x;
        let x5 = x3 * x2;
        let x7 = x5 * x2;

        let lat_factor = t_prime / (k * rho_prime);
        let lat_term1 = lat_factor * ((e_prime * x) / 2.0);
        let lat_term2 = lat_factor * ((e_prime * x3) / 24.0)
            * ((-4.0 * psi_prime2) + (9.0 * psi_prime) * (1.0 - t_prime2) + (12.0 * t_prime2));
        let lat_term3 = lat_factor * ((e_prime * x5) / 720.0)
            * ((8.0 * psi_prime4) * (11.0 - 24.0 * t_prime2)
                - (12.0 * psi_prime3) * (21.0 - 71.0 * t_prime2)
                + (15.0 * psi_prime2) * (15.0 - 98.0 * t_prime2 + 15.0 * t_prime4)
                + (180.0 * psi_prime) * (5.0 * t_prime2 - 3.0 * t_prime4)
                + 360.0 * t_prime4);
        let lat_term4 = lat_factor * ((e_prime * x7) / 40320.0)
            * (1385.0 - 3633.0 * t_prime2 + 4095.0 * t_prime4 + 1575.0 * t_prime6);
        let lat = lat_prime - lat_term1 + lat_term2 - lat_term3 + lat_term4;

        // Secant of the corrected latitude, not the footpoint
        let sec_lat = 1.0 / lat.cos();
        let lon_term1 = x * sec_lat;
        let lon_term2 = ((x3 * sec_lat) / 6.0) * (psi_prime + 2.0 * t_prime2);
        let lon_term3 = ((x5 * sec_lat) / 120.0)
            * ((-4.0 * psi_prime3) * (1.0 - 6.0 * t_prime2)
                + psi_prime2 * (9.0 - 68.0 * t_prime2)
                + 72.0 * psi_prime * t_prime2
                + 24.0 * t_prime4);
        let lon_term4 = ((x7 * sec_lat) / 5040.0)
            * (61.0 + 662.0 * t_prime2 + 1320.0 * t_prime4 + 720.0 * t_prime6);
        let lon = self.origin.longitude.to_radians()
            + lon_term1 - lon_term2 + lon_term3 - lon_term4;

        GeodeticCoordinate::new(lat.to_degrees(), lon.to_degrees())
    }
}

impl Default for ProjectionEngine {
    fn default() -> Self {
        ProjectionEngine::new(EllipsoidConstants::wgs84(), ProjectionOrigin::SVY21)
    }
}
