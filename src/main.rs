//! Command line tool to express an ECEF position in the
//! South-East-Zenith frame of a ground site.
//! Refer to README for command line arguments.
mod cli;
use cli::Cli;

use ecef2sez::prelude::*;
use env_logger::{Builder, Target};
use log::{debug, info};

fn main() {
    let mut builder = Builder::from_default_env();
    builder
        .target(Target::Stderr)
        .format_timestamp_secs()
        .format_module_path(false)
        .init();

    let cli = Cli::new();

    if let Err(e) = run(&cli) {
        eprintln!("{}: {}", env!("CARGO_PKG_NAME"), e);
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<(), Error> {
    let (site, target) = match parse_coordinates(&cli.coordinates())? {
        Some(coordinates) => coordinates,
        None => {
            println!("{}", cli::usage());
            return Ok(());
        },
    };

    info!("site: {}", site);
    info!("target: {}", target);

    let geodetic = GeodeticSolution::solve(&site);
    let sez = SezPosition::from_geodetic(&site, &target, &geodetic);
    debug!("{} (range: {}km)", sez, sez.range_km());

    println!("{:?}", sez.south_km);
    println!("{:?}", sez.east_km);
    println!("{:?}", sez.zenith_km);
    Ok(())
}
