use std::fmt;
use std::io;

#[derive(Debug)]
pub enum Error {
    /// Invalid run configuration, e.g. an unrecognized count mode or an
    /// unmatchable whitelist entry. Raised before any comment is processed.
    ConfigError(String),
    ParserError(String),
    IoError(io::Error),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::ConfigError(msg) => write!(f, "Configuration Error: {}", msg),
            Error::ParserError(msg) => write!(f, "Parser Error: {}", msg),
            Error::IoError(err) => write!(f, "IO Error: {}", err),
        }
    }
}

impl std::error::Error for Error {}

impl From<io::Error> for Error {
    fn from(err: io::Error) -> Error {
        Error::IoError(err)
    }
}
