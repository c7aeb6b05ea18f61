#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod constants;
pub mod geodetic;
pub mod parsing;
pub mod position;
pub mod sez;

mod error;

#[cfg(test)]
mod tests;

pub use error::Error;

pub mod prelude {
    pub use crate::constants::Ellipsoid;
    pub use crate::ecef_to_sez;
    pub use crate::geodetic::GeodeticSolution;
    pub use crate::parsing::parse_coordinates;
    pub use crate::position::EcefPosition;
    pub use crate::sez::SezPosition;
    pub use crate::Error;
}

use position::EcefPosition;
use sez::SezPosition;

/// Converts ECEF position (x, y, z) into the SEZ frame centered
/// on ECEF origin (o_x, o_y, o_z). All values in kilometers.
/// Returns (south, east, zenith) in kilometers.
pub fn ecef_to_sez(
    o_x_km: f64,
    o_y_km: f64,
    o_z_km: f64,
    x_km: f64,
    y_km: f64,
    z_km: f64,
) -> (f64, f64, f64) {
    let site = EcefPosition::new(o_x_km, o_y_km, o_z_km);
    let target = EcefPosition::new(x_km, y_km, z_km);
    SezPosition::from_ecef(&site, &target).into()
}
