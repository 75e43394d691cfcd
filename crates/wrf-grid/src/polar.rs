//! Polar stereographic projection.
//!
//! This projection is commonly used for high-latitude weather grids,
//! including the WRF Alaska domain. It maps points from a sphere onto a
//! plane tangent or secant near the pole, preserving angles locally.
//!
//! The projection parameters include:
//! - Latitude of true scale (lat_ts): where the map scale factor is 1
//! - Central longitude (lon0): the meridian running straight down the grid
//! - Latitude of projection origin: the pole (90° for the north aspect)
//! - Earth radius: the sphere the geographic coordinates are taken on

use std::f64::consts::PI;

use crate::grid::PlanarCoord;

/// Spherical north-polar stereographic projection parameters.
///
/// These parameters define the projection from geographic (lat/lon) to
/// planar (x, y) coordinates in meters and vice versa.
#[derive(Debug, Clone)]
pub struct PolarStereographic {
    /// Central longitude in radians
    pub lon0: f64,
    /// Latitude of true scale in radians
    pub lat_ts: f64,
    /// False easting (meters)
    pub false_easting: f64,
    /// False northing (meters)
    pub false_northing: f64,
    /// Earth radius (meters)
    pub earth_radius: f64,
    /// Scale constant: 1 + sin(lat_ts)
    akm1: f64,
}

impl PolarStereographic {
    /// Create a new north-polar stereographic projection on a sphere.
    ///
    /// # Arguments
    /// * `lat_ts_deg` - Latitude of true scale (degrees)
    /// * `lon0_deg` - Central longitude (degrees)
    /// * `false_easting` - X offset added to projected coordinates (meters)
    /// * `false_northing` - Y offset added to projected coordinates (meters)
    /// * `earth_radius` - Radius of the spherical earth model (meters)
    pub fn new(
        lat_ts_deg: f64,
        lon0_deg: f64,
        false_easting: f64,
        false_northing: f64,
        earth_radius: f64,
    ) -> Self {
        let to_rad = PI / 180.0;

        let lat_ts = lat_ts_deg * to_rad;
        let lon0 = lon0_deg * to_rad;

        // Scale constant for true scale at lat_ts (Snyder 21-33): 2*k0 = 1 + sin(lat_ts)
        let akm1 = 1.0 + lat_ts.sin();

        Self {
            lon0,
            lat_ts,
            false_easting,
            false_northing,
            earth_radius,
            akm1,
        }
    }

    /// Create the WRF Alaska projection with standard parameters.
    ///
    /// The Alaska WRF domain uses polar stereographic with:
    /// - True scale at 64°N
    /// - Central longitude 152°W
    /// - Projection origin at the north pole
    /// - Spherical earth, radius 6,370,000 m
    pub fn wrf_alaska() -> Self {
        Self::new(
            64.0,        // lat_ts
            -152.0,      // lon0
            0.0,         // false easting
            0.0,         // false northing
            6_370_000.0, // earth radius
        )
    }

    /// Project geographic coordinates (lat/lon in degrees) to planar meters.
    ///
    /// Non-finite inputs propagate to non-finite outputs rather than
    /// faulting; callers that need a hard failure must check the result.
    pub fn project(&self, lat_deg: f64, lon_deg: f64) -> PlanarCoord {
        let to_rad = PI / 180.0;
        let lat = lat_deg * to_rad;
        let lon = lon_deg * to_rad;

        // Normalize longitude difference to [-π, π]
        let mut dlon = lon - self.lon0;
        while dlon > PI {
            dlon -= 2.0 * PI;
        }
        while dlon < -PI {
            dlon += 2.0 * PI;
        }

        // Distance from the pole in the projection plane
        let rho = self.earth_radius * self.akm1 * (PI / 4.0 - lat / 2.0).tan();

        PlanarCoord {
            x: self.false_easting + rho * dlon.sin(),
            y: self.false_northing - rho * dlon.cos(),
        }
    }

    /// Convert planar meters back to geographic coordinates.
    ///
    /// Returns (lat, lon) in degrees with longitude normalized to
    /// [-180, 180].
    pub fn inverse(&self, coord: PlanarCoord) -> (f64, f64) {
        let to_deg = 180.0 / PI;

        let x = coord.x - self.false_easting;
        let y = coord.y - self.false_northing;

        let rho = x.hypot(y);
        let lat = PI / 2.0 - 2.0 * (rho / (self.earth_radius * self.akm1)).atan();

        let mut lon = self.lon0 + x.atan2(-y);
        while lon > PI {
            lon -= 2.0 * PI;
        }
        while lon < -PI {
            lon += 2.0 * PI;
        }

        (lat * to_deg, lon * to_deg)
    }
}
