use std::io;

/// A enum that contains the different types of errors that the library returns as part of Result's.
#[non_exhaustive]
#[derive(Debug)]
pub enum Error {
    Io(io::Error),
    Generic(&'static str),
    GenericDyn(String),
    ConfigError(config::ConfigError),
    SerError(toml::ser::Error),
    ReqwestError(reqwest::Error),
    /// A generation parameter was rejected before any dice were rolled.
    InvalidConfiguration(String),
    /// The wordlist resource could not be fetched or read, with the location attempted.
    WordListUnavailable(String),
    /// A rolled code had no entry in the wordlist.
    MissingWord(String),
    /// A wordlist key that isn't five digits in 1-6.
    InvalidRollCode(String),
}

impl From<io::Error> for Error {
    fn from(err: io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<config::ConfigError> for Error {
    fn from(err: config::ConfigError) -> Self {
        Self::ConfigError(err)
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Self::SerError(err)
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        Self::ReqwestError(err)
    }
}

impl From<&str> for Error {
    fn from(err: &str) -> Self {
        Self::GenericDyn(err.to_owned())
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Io(err) => write!(f, "{err}"),
            Self::Generic(err) => write!(f, "{err}"),
            Self::GenericDyn(err) => write!(f, "{err}"),
            Self::ConfigError(err) => write!(f, "{err}"),
            Self::SerError(err) => write!(f, "{err}"),
            Self::ReqwestError(err) => write!(f, "{err}"),
            Self::InvalidConfiguration(err) => write!(f, "invalid configuration: {err}"),
            Self::WordListUnavailable(location) => {
                write!(f, "wordlist unavailable at {location}")
            }
            Self::MissingWord(code) => write!(f, "no wordlist entry for roll code {code}"),
            Self::InvalidRollCode(code) => write!(f, "invalid roll code {code}"),
        }
    }
}

/// Convenience type for Results
pub type Result<T> = std::result::Result<T, Error>;
