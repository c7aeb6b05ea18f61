//! Command line coordinates parsing
use crate::{error::Error, position::EcefPosition};
use std::str::FromStr;

/// Expected arguments, in order of appearance
pub const ARGUMENTS: [&str; 6] = ["o_x_km", "o_y_km", "o_z_km", "x_km", "y_km", "z_km"];

/// Interprets user arguments as the (site, target) ECEF pair.
///
/// Returns `Ok(None)` when the number of tokens is not exactly 6:
/// caller should then print the usage and stop.
pub fn parse_coordinates<S: AsRef<str>>(
    tokens: &[S],
) -> Result<Option<(EcefPosition, EcefPosition)>, Error> {
    if tokens.len() != ARGUMENTS.len() {
        return Ok(None);
    }

    let mut values = [0.0_f64; 6];
    for (i, (token, name)) in tokens.iter().zip(ARGUMENTS).enumerate() {
        let token = token.as_ref().trim();
        values[i] = f64::from_str(token).map_err(|source| Error::CoordinateParsing {
            name,
            token: token.to_string(),
            source,
        })?;
    }

    let site = EcefPosition::new(values[0], values[1], values[2]);
    let target = EcefPosition::new(values[3], values[4], values[5]);
    Ok(Some((site, target)))
}
