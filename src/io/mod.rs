pub mod records;
#[cfg(test)]
mod tests;

pub use records::{read_projected_records, write_geodetic_records, OUTPUT_HEADER};
