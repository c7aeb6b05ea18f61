//! Iterative ECEF to geodetic conversion
use crate::{
    constants::{Ellipsoid, MaxIterNumber, Tolerance},
    position::EcefPosition,
};

use log::{debug, trace, warn};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Geodetic coordinates of a ground site, obtained by fixed point
/// iteration on the latitude (Bowring style).
#[derive(Default, Copy, Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct GeodeticSolution {
    /// Geodetic latitude [rad]
    pub latitude_rad: f64,
    /// Longitude [rad]
    pub longitude_rad: f64,
    /// Radius of curvature in the prime vertical [km]
    pub curvature_radius_km: f64,
    /// Height above ellipsoid [km]
    pub height_km: f64,
    /// Number of latitude updates actually performed
    pub iterations: u8,
    /// True when successive latitude estimates came within tolerance
    /// before the iteration cap was reached.
    pub converged: bool,
}

/// Prime vertical radius of curvature at given latitude [km]
pub(crate) fn curvature_radius_km(latitude_rad: f64) -> f64 {
    let denom = (1.0 - Ellipsoid::ECCENTRICITY_SQUARED * latitude_rad.sin().powi(2)).sqrt();
    Ellipsoid::EQUATORIAL_RADIUS_KM / denom
}

impl GeodeticSolution {
    /// Solves geodetic coordinates of given ECEF site.
    ///
    /// Longitude is exact. Latitude starts from the geocentric latitude
    /// and is refined until two successive estimates differ by less than
    /// 1E-11 rad, or 10 iterations were performed: whichever comes first.
    /// The value obtained at loop exit is returned in both cases, refer to
    /// [GeodeticSolution::converged].
    pub fn solve(site: &EcefPosition) -> Self {
        let (x, y, z) = (site.x_km, site.y_km, site.z_km);

        let longitude_rad = y.atan2(x);
        let r_xy = site.planar_radius_km();

        let mut latitude_rad = (z / site.norm_km()).asin();
        let mut c_e = f64::NAN;
        let mut iterations = 0_u8;
        let mut converged = false;

        while iterations < MaxIterNumber::GEODETIC_LATITUDE {
            c_e = curvature_radius_km(latitude_rad);

            let prev_rad = latitude_rad;
            latitude_rad =
                ((z + c_e * Ellipsoid::ECCENTRICITY_SQUARED * prev_rad.sin()) / r_xy).atan();

            iterations += 1;

            let delta = (latitude_rad - prev_rad).abs();
            trace!(
                "iter #{}: lat={}rad c_e={}km delta={:e}",
                iterations,
                latitude_rad,
                c_e,
                delta
            );

            if delta <= Tolerance::GEODETIC_LATITUDE_RAD {
                converged = true;
                break;
            }
        }

        if !converged {
            warn!(
                "geodetic latitude did not converge within {} iterations",
                MaxIterNumber::GEODETIC_LATITUDE
            );
        }

        let height_km = r_xy / latitude_rad.cos() - c_e;

        let solution = Self {
            latitude_rad,
            longitude_rad,
            curvature_radius_km: c_e,
            height_km,
            iterations,
            converged,
        };

        debug!("{} solved: {}", site, solution);
        solution
    }
    /// Geodetic latitude in decimal degrees
    pub fn latitude_ddeg(&self) -> f64 {
        self.latitude_rad.to_degrees()
    }
    /// Longitude in decimal degrees
    pub fn longitude_ddeg(&self) -> f64 {
        self.longitude_rad.to_degrees()
    }
}

impl std::fmt::Display for GeodeticSolution {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "lat={:.9}° lon={:.9}° hae={:.6}km ({} iter)",
            self.latitude_ddeg(),
            self.longitude_ddeg(),
            self.height_km,
            self.iterations
        )
    }
}
