//! Coordinate handling for the SVY21 grid
//!
//! This module provides the WGS 84 ellipsoid, the SVY21 projection origin
//! and the engine that maps between geodetic and grid coordinates.

mod ellipsoid;
mod origin;
mod point;
mod engine;
#[cfg(test)]
mod tests;

// Re-export key types
pub use self::ellipsoid::{EllipsoidConstants, SeriesCoefficients};
pub use self::origin::ProjectionOrigin;
pub use self::point::{GeodeticCoordinate, ProjectedCoordinate};
pub use self::engine::{svy21, ProjectionEngine};
