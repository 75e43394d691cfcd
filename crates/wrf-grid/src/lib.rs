//! Coordinate lookup for the WRF Alaska grid.
//!
//! Converts WGS84 latitude/longitude pairs to 1-indexed (row, column) cell
//! locations on the fixed 20 km polar stereographic grid used for Alaska
//! weather modeling.

pub mod error;
pub mod grid;
pub mod locate;
pub mod polar;

pub use error::{GridError, GridResult};
pub use grid::{GridCell, GridTransform, PlanarCoord};
pub use locate::GridLocator;
pub use polar::PolarStereographic;
