//! Delimited text records for batch conversion
//!
//! Input rows carry grid `x,y` (easting, northing). Output rows carry the
//! rounded `Lat,Long` pair produced by the inverse projection.

use std::io::{BufRead, Write};
use log::debug;

use crate::coordinate::{GeodeticCoordinate, ProjectedCoordinate};
use crate::errors::{ConvertError, ConvertResult};
use crate::utils::format_utils::parse_number;

/// Header row written at the top of every output file
pub const OUTPUT_HEADER: [&str; 2] = ["Lat", "Long"];

/// Read grid coordinates from comma-separated rows
///
/// # Arguments
/// * `reader` - Source of the rows
/// * `skip_header` - Discard the first row whatever it contains
///
/// # Returns
/// The coordinates in file order, or a parse error naming the line
pub fn read_projected_records<R: BufRead>(reader: R, skip_header: bool) -> ConvertResult<Vec<ProjectedCoordinate>> {
    let mut records = Vec::new();

    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        let line_number = index + 1;

        if skip_header && index == 0 {
            debug!("Skipping header row: {}", line.trim());
            continue;
        }

        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        records.push(parse_projected_row(line, line_number)?);
    }

    debug!("Read {} coordinate rows", records.len());
    Ok(records)
}

/// Parse one `x,y` row; columns past the second are ignored
fn parse_projected_row(line: &str, line_number: usize) -> ConvertResult<ProjectedCoordinate> {
    let parts: Vec<&str> = line.split(',').collect();
    if parts.len() < 2 {
        return Err(ConvertError::Parse(format!(
            "Line {}: expected 2 columns (x,y), found {}", line_number, parts.len()
        )));
    }

    let x = parse_field("x", parts[0], line_number)?;
    let y = parse_field("y", parts[1], line_number)?;

    Ok(ProjectedCoordinate::from_xy(x, y))
}

fn parse_field(label: &str, raw: &str, line_number: usize) -> ConvertResult<f64> {
    parse_number(label, raw).map_err(|_| ConvertError::Parse(format!(
        "Line {}: invalid {} value '{}'", line_number, label, raw.trim()
    )))
}

/// Write converted coordinates under the `Lat,Long` header
///
/// Values use `f64`'s shortest `Display` form, so `104.0` is written as
/// `104` and `1e-05` as `0.00001`.
pub fn write_geodetic_records<W: Write>(mut writer: W, records: &[GeodeticCoordinate]) -> ConvertResult<()> {
    writeln!(writer, "{}", OUTPUT_HEADER.join(","))?;

    for record in records {
        writeln!(writer, "{},{}", record.latitude, record.longitude)?;
    }

    writer.flush()?;
    Ok(())
}
