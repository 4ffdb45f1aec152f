use std::fmt;

/// Result type for rada-engine operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur in the presentation engine
#[derive(Debug)]
pub enum Error {
    /// Gateway boundary error (fetch or mutation submit)
    Gateway(rada_gateway::Error),

    /// A mutation targeted an item ID not present in the loaded list
    UnknownItem(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Gateway(err) => write!(f, "Gateway error: {}", err),
            Error::UnknownItem(id) => write!(f, "No loaded item with id '{}'", id),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Gateway(err) => Some(err),
            Error::UnknownItem(_) => None,
        }
    }
}

impl From<rada_gateway::Error> for Error {
    fn from(err: rada_gateway::Error) -> Self {
        Error::Gateway(err)
    }
}
