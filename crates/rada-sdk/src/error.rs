use std::fmt;

/// Result type for rada-sdk operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types surfaced by the SDK facade
#[derive(Debug)]
pub enum Error {
    /// Gateway boundary error
    Gateway(rada_gateway::Error),

    /// Presentation engine error
    Engine(rada_engine::Error),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Gateway(err) => write!(f, "Gateway error: {}", err),
            Error::Engine(err) => write!(f, "Engine error: {}", err),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Gateway(err) => Some(err),
            Error::Engine(err) => Some(err),
        }
    }
}

impl From<rada_gateway::Error> for Error {
    fn from(err: rada_gateway::Error) -> Self {
        Error::Gateway(err)
    }
}

impl From<rada_engine::Error> for Error {
    fn from(err: rada_engine::Error) -> Self {
        Error::Engine(err)
    }
}
