//! Tests for the ellipsoid and origin constants

use approx::assert_relative_eq;

use crate::coordinate::{EllipsoidConstants, ProjectionOrigin, SeriesCoefficients};
use crate::errors::ConvertError;

#[test]
fn test_wgs84_derived_constants() {
    let wgs84 = EllipsoidConstants::wgs84();
    assert_relative_eq!(wgs84.a, 6_378_137.0);
    assert_relative_eq!(wgs84.b, 6_356_752.314_245_179, epsilon = 0.001);
    assert_relative_eq!(wgs84.e2, 0.006_694_379_990_14, epsilon = 1e-12);
    assert_relative_eq!(wgs84.e4, wgs84.e2 * wgs84.e2);
    assert_relative_eq!(wgs84.e6, wgs84.e4 * wgs84.e2);
    assert_relative_eq!(wgs84.third_flattening(), 0.001_679_220_386_383_705, epsilon = 1e-12);
}

#[test]
fn test_series_coefficients() {
    let coefficients = SeriesCoefficients::from_ellipsoid(&EllipsoidConstants::wgs84());

    // A0 is slightly below one and the higher terms shrink quickly
    assert!(coefficients.a0 < 1.0 && coefficients.a0 > 0.998);
    assert_relative_eq!(coefficients.a2, 0.002_514_607_06, epsilon = 1e-10);
    assert!(coefficients.a4 < coefficients.a2 * 1e-2);
    assert!(coefficients.a6 < coefficients.a4 * 1e-2);
}

#[test]
fn test_default_is_wgs84() {
    assert_eq!(EllipsoidConstants::default(), EllipsoidConstants::wgs84());
}

#[test]
fn test_checked_constructor_rejects_bad_flattening() {
    for f in [0.0, 1.0, -0.1, f64::NAN] {
        let result = EllipsoidConstants::new(6_378_137.0, f);
        assert!(matches!(result, Err(ConvertError::Validation(_))), "f = {f}");
    }
}

#[test]
fn test_checked_constructor_rejects_bad_axis() {
    let result = EllipsoidConstants::new(-1.0, EllipsoidConstants::WGS84_F);
    assert!(matches!(result, Err(ConvertError::Validation(_))));
}

#[test]
fn test_checked_constructor_matches_wgs84() {
    let checked = EllipsoidConstants::new(EllipsoidConstants::WGS84_A, EllipsoidConstants::WGS84_F).unwrap();
    assert_eq!(checked, EllipsoidConstants::wgs84());
}

#[test]
fn test_svy21_origin_constants() {
    let origin = ProjectionOrigin::default();
    assert_eq!(origin.latitude, 1.366666);
    assert_eq!(origin.longitude, 103.833333);
    assert_eq!(origin.false_northing, 38744.572);
    assert_eq!(origin.false_easting, 28001.642);
    assert_eq!(origin.scale_factor, 1.0);
}

#[test]
fn test_origin_rejects_non_positive_scale() {
    let result = ProjectionOrigin::new(1.366666, 103.833333, 38744.572, 28001.642, 0.0);
    assert!(matches!(result, Err(ConvertError::Validation(_))));

    let ok = ProjectionOrigin::new(1.366666, 103.833333, 38744.572, 28001.642, 0.9996);
    assert!(ok.is_ok());
}
