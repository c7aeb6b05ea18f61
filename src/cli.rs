use clap::{Arg, ArgAction, ArgMatches, ColorChoice, Command};
use ecef2sez::parsing::ARGUMENTS;
use std::ffi::OsString;

pub struct Cli {
    /// arguments passed by user
    pub matches: ArgMatches,
}

impl Cli {
    pub fn new() -> Self {
        Self::from_args(std::env::args_os())
    }
    /// Builds Self from raw process arguments, binary name first.
    /// Every user token is a coordinate: help, version and `--`
    /// are not interpreted, so they fall into the usage path.
    pub fn from_args<I, T>(args: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString>,
    {
        let mut args = args.into_iter().map(Into::into);
        let bin = args.next();
        // leading escape: clap treats everything that follows as values
        let args = bin
            .into_iter()
            .chain(std::iter::once(OsString::from("--")))
            .chain(args);
        Self {
            matches: {
                Command::new(env!("CARGO_PKG_NAME"))
                    .version(env!("CARGO_PKG_VERSION"))
                    .about("ECEF to topocentric South-East-Zenith (SEZ) converter")
                    .color(ColorChoice::Always)
                    .disable_help_flag(true)
                    .disable_version_flag(true)
                    .arg(
                        Arg::new("coordinates")
                            .value_name("KM")
                            .num_args(0..)
                            .action(ArgAction::Append)
                            .allow_hyphen_values(true)
                            .help(
                                "ECEF origin of the SEZ frame (o_x_km o_y_km o_z_km)
followed by the ECEF position to convert (x_km y_km z_km).",
                            ),
                    )
                    .get_matches_from(args)
            },
        }
    }
    /// Returns all coordinates tokens, as passed by user
    pub fn coordinates(&self) -> Vec<&String> {
        self.matches
            .get_many::<String>("coordinates")
            .map(|tokens| tokens.collect())
            .unwrap_or_default()
    }
}

/// Usage message, printed when the number of arguments is incorrect
pub fn usage() -> String {
    format!("Usage: {} {}", env!("CARGO_PKG_NAME"), ARGUMENTS.join(" "))
}

#[cfg(test)]
mod test {
    use super::Cli;

    fn tokens(args: &[&str]) -> Vec<String> {
        let cli = Cli::from_args(std::iter::once("ecef2sez").chain(args.iter().copied()));
        cli.coordinates().into_iter().cloned().collect()
    }

    #[test]
    fn every_token_is_a_coordinate() {
        for args in [
            vec!["-h"],
            vec!["--help"],
            vec!["-V"],
            vec!["--version"],
            vec!["--"],
            vec!["--", "1", "2", "3", "4", "5", "6"],
            vec!["-6378.1363", "0", "0", "-7378.1363", "0", "0"],
            vec!["1", "--", "-x", "4"],
        ] {
            assert_eq!(tokens(&args), args, "tokens altered");
        }
    }

    #[test]
    fn no_tokens() {
        assert!(tokens(&[]).is_empty());
    }
}
