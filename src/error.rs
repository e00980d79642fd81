use std::io;

/// A enum that contains the different types of errors that the library returns as part of Result's.
#[non_exhaustive]
#[derive(Debug)]
pub enum Error {
    Io(io::Error),
    Json(serde_json::Error),
    Generic(&'static str),
    GenericDyn(String),
    ConfigError(config::ConfigError),
    SerError(toml::ser::Error),
    /// The word corpus has no words, so no seed word could be drawn from it.
    EmptyCorpus,
    UnknownSeparatorClass(String),
    InvalidSetting(String),
}

impl From<io::Error> for Error {
    fn from(err: io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err)
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

impl From<std::boxed::Box<dyn std::error::Error>> for Error {
    fn from(err: std::boxed::Box<dyn std::error::Error>) -> Self {
        Self::GenericDyn(err.to_string())
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Io(err) => write!(f, "{err}"),
            Self::Json(err) => write!(f, "{err}"),
            Self::Generic(err) => write!(f, "{err}"),
            Self::GenericDyn(err) => write!(f, "{err}"),
            Self::ConfigError(err) => write!(f, "{err}"),
            Self::SerError(err) => write!(f, "{err}"),
            Self::EmptyCorpus => write!(f, "the word dictionary is empty"),
            Self::UnknownSeparatorClass(name) => write!(f, "unknown separator type: {name}"),
            Self::InvalidSetting(err) => write!(f, "invalid setting: {err}"),
        }
    }
}

impl std::error::Error for Error {}

/// Convenience type for Results
pub type Result<T> = std::result::Result<T, Error>;
