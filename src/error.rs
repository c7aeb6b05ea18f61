use std::num::ParseFloatError;
use thiserror::Error;

/// Errors that may rise while interpreting user input
#[derive(Error, Debug)]
pub enum Error {
    /// Argument is not a valid floating point literal
    #[error("invalid {name} coordinate \"{token}\": {source}")]
    CoordinateParsing {
        name: &'static str,
        token: String,
        #[source]
        source: ParseFloatError,
    },
}
