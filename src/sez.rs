//! Topocentric South-East-Zenith frame
use crate::{geodetic::GeodeticSolution, position::EcefPosition};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Position expressed in the topocentric South-East-Zenith frame
/// of a ground site, in kilometers.
#[derive(Default, Copy, Debug, Clone, PartialEq, PartialOrd)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SezPosition {
    pub south_km: f64,
    pub east_km: f64,
    pub zenith_km: f64,
}

impl From<(f64, f64, f64)> for SezPosition {
    fn from(sez: (f64, f64, f64)) -> Self {
        Self {
            south_km: sez.0,
            east_km: sez.1,
            zenith_km: sez.2,
        }
    }
}

impl From<SezPosition> for (f64, f64, f64) {
    fn from(val: SezPosition) -> Self {
        (val.south_km, val.east_km, val.zenith_km)
    }
}

impl SezPosition {
    /// Expresses `target` in the SEZ frame centered on `site`,
    /// both being ECEF coordinates. The site geodetic coordinates
    /// are solved internally.
    pub fn from_ecef(site: &EcefPosition, target: &EcefPosition) -> Self {
        let geodetic = GeodeticSolution::solve(site);
        Self::from_geodetic(site, target, &geodetic)
    }
    /// Expresses `target` in the SEZ frame centered on `site`,
    /// using a previously solved [GeodeticSolution] of that site.
    pub fn from_geodetic(
        site: &EcefPosition,
        target: &EcefPosition,
        geodetic: &GeodeticSolution,
    ) -> Self {
        let t = *target - *site;

        let (sin_lon, cos_lon) = geodetic.longitude_rad.sin_cos();
        let (sin_lat, cos_lat) = geodetic.latitude_rad.sin_cos();

        // align x with the site meridian
        let ry = (
            cos_lon * t.x_km + sin_lon * t.y_km,
            -sin_lon * t.x_km + cos_lon * t.y_km,
            t.z_km,
        );

        // align z with local zenith
        Self {
            south_km: sin_lat * ry.0 - cos_lat * ry.2,
            east_km: ry.1,
            zenith_km: cos_lat * ry.0 + sin_lat * ry.2,
        }
    }
    /// Converts Self back to ECEF coordinates, applying the transposed
    /// rotation and adding back the `site` origin.
    pub fn to_ecef(&self, site: &EcefPosition, geodetic: &GeodeticSolution) -> EcefPosition {
        let (sin_lon, cos_lon) = geodetic.longitude_rad.sin_cos();
        let (sin_lat, cos_lat) = geodetic.latitude_rad.sin_cos();

        let ry = (
            sin_lat * self.south_km + cos_lat * self.zenith_km,
            self.east_km,
            -cos_lat * self.south_km + sin_lat * self.zenith_km,
        );

        let t = EcefPosition::new(
            cos_lon * ry.0 - sin_lon * ry.1,
            sin_lon * ry.0 + cos_lon * ry.1,
            ry.2,
        );

        t + *site
    }
    /// Slant range from the site [km]
    pub fn range_km(&self) -> f64 {
        (self.south_km.powi(2) + self.east_km.powi(2) + self.zenith_km.powi(2)).sqrt()
    }
}

impl std::fmt::Display for SezPosition {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "SEZ ({}km {}km {}km)",
            self.south_km, self.east_km, self.zenith_km
        )
    }
}
