pub mod errors;
pub mod config;
pub mod utils;
pub mod coordinate;
pub mod io;
pub mod cli;
pub mod commands;
pub mod api;

pub use crate::api::{BatchSummary, Svy21Kit};

pub use errors::{ConvertError, ConvertResult};
pub use config::ConverterConfig;
pub use coordinate::{svy21, EllipsoidConstants, GeodeticCoordinate, ProjectedCoordinate, ProjectionEngine, ProjectionOrigin};
