use std::fmt;

/// Result type for rada-gateway operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur at the gateway boundary
#[derive(Debug)]
pub enum Error {
    /// Transport-level HTTP failure (connect, timeout, body decode)
    Http(reqwest::Error),

    /// Backend answered with a non-success status
    Status { status: u16, path: String },

    /// Configuration error
    Config(String),

    /// Backend explicitly rejected a mutation
    Rejected(String),

    /// Generic backend failure (used by alternate backends and test doubles)
    Backend(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Http(err) => write!(f, "HTTP error: {}", err),
            Error::Status { status, path } => {
                write!(f, "Request to '{}' failed with status {}", path, status)
            }
            Error::Config(msg) => write!(f, "Configuration error: {}", msg),
            Error::Rejected(msg) => write!(f, "Mutation rejected: {}", msg),
            Error::Backend(msg) => write!(f, "Backend failure: {}", msg),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Http(err) => Some(err),
            Error::Status { .. } | Error::Config(_) | Error::Rejected(_) | Error::Backend(_) => {
                None
            }
        }
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        Error::Http(err)
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Config(err.to_string())
    }
}
