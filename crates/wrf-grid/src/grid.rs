//! Affine grid transform for meteorological raster grids.

use serde::{Deserialize, Serialize};

/// A projected planar coordinate in meters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlanarCoord {
    pub x: f64,
    pub y: f64,
}

impl PlanarCoord {
    /// Create a new planar coordinate.
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// True when both components are finite.
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

/// A 1-indexed grid cell location.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridCell {
    pub col: i64,
    pub row: i64,
}

/// Affine transform between planar meters and grid cell coordinates.
///
/// The forward direction maps fractional cell coordinates to meters:
///
/// ```text
/// x = dx * col_frac + origin_x
/// y = dy * row_frac + origin_y
/// ```
///
/// `dy` is negative for north-up rasters, so row numbers grow as y
/// decreases.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GridTransform {
    /// Cell size in X direction (meters)
    pub dx: f64,
    /// Cell size in Y direction (meters, negative for north-up grids)
    pub dy: f64,
    /// X origin offset (meters)
    pub origin_x: f64,
    /// Y origin offset (meters)
    pub origin_y: f64,
}

impl GridTransform {
    /// Create a new grid transform.
    pub fn new(dx: f64, dy: f64, origin_x: f64, origin_y: f64) -> Self {
        Self {
            dx,
            dy,
            origin_x,
            origin_y,
        }
    }

    /// The 20 km WRF Alaska grid transform.
    pub fn wrf_alaska() -> Self {
        Self::new(
            20_000.0,              // dx
            -20_000.0,             // dy
            -2_620_000.0,          // origin_x
            -172_425.477_371_663_8, // origin_y
        )
    }

    /// Convert planar meters to fractional (col, row) cell coordinates.
    pub fn cell_fraction(&self, coord: PlanarCoord) -> (f64, f64) {
        (
            (coord.x - self.origin_x) / self.dx,
            (coord.y - self.origin_y) / self.dy,
        )
    }

    /// Convert planar meters to the containing 1-indexed grid cell.
    ///
    /// Fractional coordinates refer to cell centers, so 0.5 is the center
    /// of the first cell. Adding 0.5 before rounding makes a coordinate
    /// exactly on a cell's left/top edge land in that cell rather than the
    /// previous one. Halfway values round away from zero.
    pub fn to_cell(&self, coord: PlanarCoord) -> GridCell {
        let (col_frac, row_frac) = self.cell_fraction(coord);

        GridCell {
            col: (col_frac + 0.5).round() as i64,
            row: (row_frac + 0.5).round() as i64,
        }
    }

    /// Planar coordinate of a cell's center point.
    pub fn cell_center(&self, cell: GridCell) -> PlanarCoord {
        PlanarCoord {
            x: self.dx * (cell.col as f64 - 0.5) + self.origin_x,
            y: self.dy * (cell.row as f64 - 0.5) + self.origin_y,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_cell_center() {
        let transform = GridTransform::wrf_alaska();

        let coord = PlanarCoord::new(-2_610_000.0, -182_425.477_371_663_8);
        let (col_frac, row_frac) = transform.cell_fraction(coord);

        assert!((col_frac - 0.5).abs() < 1e-9, "col_frac should be 0.5, got {}", col_frac);
        assert!((row_frac - 0.5).abs() < 1e-9, "row_frac should be 0.5, got {}", row_frac);
        assert_eq!(transform.to_cell(coord), GridCell { col: 1, row: 1 });
    }

    #[test]
    fn test_origin_corner_rounds_into_first_cell() {
        let transform = GridTransform::wrf_alaska();

        // Exactly on the first cell's left/top edge
        let coord = PlanarCoord::new(-2_620_000.0, -172_425.477_371_663_8);
        assert_eq!(transform.to_cell(coord), GridCell { col: 1, row: 1 });
    }

    #[test]
    fn test_projection_origin_lands_above_grid() {
        let transform = GridTransform::wrf_alaska();

        // The pole projects to (0, 0), which sits north of the grid's top row
        let cell = transform.to_cell(PlanarCoord::new(0.0, 0.0));
        assert_eq!(cell, GridCell { col: 132, row: -8 });
    }

    #[test]
    fn test_cell_center_roundtrip() {
        let transform = GridTransform::wrf_alaska();

        for cell in [
            GridCell { col: 1, row: 1 },
            GridCell { col: 142, row: 126 },
            GridCell { col: 137, row: 147 },
            GridCell { col: 132, row: -8 },
        ] {
            let center = transform.cell_center(cell);
            assert_eq!(
                transform.to_cell(center),
                cell,
                "cell center roundtrip failed for {:?}",
                cell
            );
        }
    }
}
