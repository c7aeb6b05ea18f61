//! integrated tests

mod geodetic;
