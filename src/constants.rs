//! Reference ellipsoid and solver constants

/// Reference ellipsoid (WGS84 derived), expressed in kilometers.
pub struct Ellipsoid;

impl Ellipsoid {
    /// Equatorial radius [km]
    pub const EQUATORIAL_RADIUS_KM: f64 = 6378.1363;
    /// First eccentricity
    pub const ECCENTRICITY: f64 = 0.081819221456;
    /// First eccentricity squared
    pub const ECCENTRICITY_SQUARED: f64 = Self::ECCENTRICITY * Self::ECCENTRICITY;
}

pub(crate) struct MaxIterNumber;

impl MaxIterNumber {
    /// Maximum number of iterations in the geodetic latitude solver
    pub const GEODETIC_LATITUDE: u8 = 10;
}

pub(crate) struct Tolerance;

impl Tolerance {
    /// Latitude convergence criterion [rad]
    pub const GEODETIC_LATITUDE_RAD: f64 = 1.0E-11;
}
