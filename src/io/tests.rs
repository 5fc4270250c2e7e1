//! Tests for the record reader and writer

use std::io::Cursor;

use crate::coordinate::{GeodeticCoordinate, ProjectedCoordinate};
use crate::errors::ConvertError;
use crate::io::{read_projected_records, write_geodetic_records};

#[test]
fn test_read_skips_header() {
    let input = "x,y\n28001.642,38744.572\n30000,30000\n";
    let records = read_projected_records(Cursor::new(input), true).unwrap();

    assert_eq!(records, vec![
        ProjectedCoordinate::new(38744.572, 28001.642),
        ProjectedCoordinate::new(30000.0, 30000.0),
    ]);
}

#[test]
fn test_read_without_header() {
    let input = "28001.642,38744.572\n";
    let records = read_projected_records(Cursor::new(input), false).unwrap();
    assert_eq!(records, vec![ProjectedCoordinate::new(38744.572, 28001.642)]);
}

#[test]
fn test_header_skipped_even_if_numeric() {
    let input = "1,2\n3,4\n";
    let records = read_projected_records(Cursor::new(input), true).unwrap();
    assert_eq!(records, vec![ProjectedCoordinate::from_xy(3.0, 4.0)]);
}

#[test]
fn test_read_tolerates_quotes_blanks_and_extra_columns() {
    let input = "\"X\",\"Y\"\r\n\"100.5\", \"200.25\"\r\n\r\n300,400,ignored\n";
    let records = read_projected_records(Cursor::new(input), true).unwrap();

    assert_eq!(records, vec![
        ProjectedCoordinate::from_xy(100.5, 200.25),
        ProjectedCoordinate::from_xy(300.0, 400.0),
    ]);
}

#[test]
fn test_read_empty_input() {
    let records = read_projected_records(Cursor::new(""), true).unwrap();
    assert!(records.is_empty());
}

#[test]
fn test_malformed_value_reports_line() {
    let input = "x,y\n1,2\nthree,4\n";
    let err = read_projected_records(Cursor::new(input), true).unwrap_err();

    match err {
        ConvertError::Parse(msg) => {
            assert!(msg.starts_with("Line 3:"), "{msg}");
            assert!(msg.contains("three"), "{msg}");
        },
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_missing_column_reports_line() {
    let input = "x,y\n12345\n";
    let err = read_projected_records(Cursor::new(input), true).unwrap_err();
    assert!(matches!(err, ConvertError::Parse(ref msg) if msg.starts_with("Line 2:")));
}

#[test]
fn test_write_header_and_rows() {
    let mut buffer = Vec::new();
    let records = [
        GeodeticCoordinate::new(1.36667, 103.833),
        GeodeticCoordinate::new(1.28758, 103.851),
    ];
    write_geodetic_records(&mut buffer, &records).unwrap();

    let output = String::from_utf8(buffer).unwrap();
    assert_eq!(output, "Lat,Long\n1.36667,103.833\n1.28758,103.851\n");
}

#[test]
fn test_write_header_only() {
    let mut buffer = Vec::new();
    write_geodetic_records(&mut buffer, &[]).unwrap();
    assert_eq!(String::from_utf8(buffer).unwrap(), "Lat,Long\n");
}

#[test]
fn test_write_uses_shortest_display_form() {
    let mut buffer = Vec::new();
    write_geodetic_records(&mut buffer, &[GeodeticCoordinate::new(0.00001, 104.0)]).unwrap();
    assert_eq!(String::from_utf8(buffer).unwrap(), "Lat,Long\n0.00001,104\n");
}
