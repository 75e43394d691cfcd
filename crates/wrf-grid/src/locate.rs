//! End-to-end lookup from geographic coordinates to a grid cell.

use tracing::debug;

use crate::error::{GridError, GridResult};
use crate::grid::{GridCell, GridTransform};
use crate::polar::PolarStereographic;

/// Combined projection and grid transform for one fixed grid definition.
///
/// Both halves are frozen at construction; a locator never varies per
/// lookup.
#[derive(Debug, Clone)]
pub struct GridLocator {
    projection: PolarStereographic,
    transform: GridTransform,
}

impl GridLocator {
    /// Create a locator from a projection/transform pair.
    pub fn new(projection: PolarStereographic, transform: GridTransform) -> Self {
        Self {
            projection,
            transform,
        }
    }

    /// Locator for the 20 km WRF Alaska grid.
    pub fn wrf_alaska() -> Self {
        Self::new(
            PolarStereographic::wrf_alaska(),
            GridTransform::wrf_alaska(),
        )
    }

    /// The projection half of this locator.
    pub fn projection(&self) -> &PolarStereographic {
        &self.projection
    }

    /// The grid transform half of this locator.
    pub fn transform(&self) -> &GridTransform {
        &self.transform
    }

    /// Find the 1-indexed grid cell containing a WGS84 coordinate.
    ///
    /// Latitude/longitude range limits are not enforced; points outside
    /// the grid yield out-of-range indices rather than errors.
    pub fn locate(&self, lat_deg: f64, lon_deg: f64) -> GridResult<GridCell> {
        if !lat_deg.is_finite() {
            return Err(GridError::InvalidCoordinate {
                param: "lat".to_string(),
                message: format!("expected a finite value, got {}", lat_deg),
            });
        }
        if !lon_deg.is_finite() {
            return Err(GridError::InvalidCoordinate {
                param: "lon".to_string(),
                message: format!("expected a finite value, got {}", lon_deg),
            });
        }

        let coord = self.projection.project(lat_deg, lon_deg);
        if !coord.is_finite() {
            return Err(GridError::Projection(format!(
                "({}, {}) projected to non-finite coordinate ({}, {})",
                lat_deg, lon_deg, coord.x, coord.y
            )));
        }

        let (col_frac, row_frac) = self.transform.cell_fraction(coord);
        debug!(
            x = coord.x,
            y = coord.y,
            col_frac,
            row_frac,
            "projected coordinate"
        );

        Ok(self.transform.to_cell(coord))
    }
}
