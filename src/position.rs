//! ECEF position
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Position in the Earth-Centered-Earth-Fixed frame, in kilometers.
#[derive(Default, Copy, Debug, Clone, PartialEq, PartialOrd)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct EcefPosition {
    pub x_km: f64,
    pub y_km: f64,
    pub z_km: f64,
}

impl From<(f64, f64, f64)> for EcefPosition {
    fn from(xyz: (f64, f64, f64)) -> Self {
        Self {
            x_km: xyz.0,
            y_km: xyz.1,
            z_km: xyz.2,
        }
    }
}

impl From<EcefPosition> for (f64, f64, f64) {
    fn from(val: EcefPosition) -> Self {
        (val.x_km, val.y_km, val.z_km)
    }
}

impl std::ops::Sub for EcefPosition {
    type Output = Self;
    /// Component wise difference: `target - site` is the
    /// vector pointing from the site to the target.
    fn sub(self, rhs: Self) -> Self {
        Self {
            x_km: self.x_km - rhs.x_km,
            y_km: self.y_km - rhs.y_km,
            z_km: self.z_km - rhs.z_km,
        }
    }
}

impl std::ops::Add for EcefPosition {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Self {
            x_km: self.x_km + rhs.x_km,
            y_km: self.y_km + rhs.y_km,
            z_km: self.z_km + rhs.z_km,
        }
    }
}

impl EcefPosition {
    /// Builds Self from ECEF coordinates [km]
    pub fn new(x_km: f64, y_km: f64, z_km: f64) -> Self {
        Self { x_km, y_km, z_km }
    }
    /// Distance to the Earth center [km]
    pub fn norm_km(&self) -> f64 {
        (self.x_km.powi(2) + self.y_km.powi(2) + self.z_km.powi(2)).sqrt()
    }
    /// Distance to the polar axis [km]
    pub fn planar_radius_km(&self) -> f64 {
        (self.x_km.powi(2) + self.y_km.powi(2)).sqrt()
    }
}

impl std::fmt::Display for EcefPosition {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "ECEF ({}km {}km {}km)",
            self.x_km, self.y_km, self.z_km
        )
    }
}
