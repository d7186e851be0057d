use std::fmt;

/// Result type for irlog-store operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur in the persistence layer
#[derive(Debug)]
pub enum Error {
    /// Entry text was empty after trimming; rejected before any I/O
    EmptyDetails,

    /// No image was available for an image save (empty clipboard, or the
    /// capturing runtime has no imaging support)
    CaptureUnavailable,

    /// IO operation failed
    Io(std::io::Error),

    /// Configuration error
    Config(String),

    /// Invalid operation or request
    InvalidOperation(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::EmptyDetails => write!(f, "Details cannot be empty"),
            Error::CaptureUnavailable => write!(f, "No image available to save"),
            Error::Io(err) => write!(f, "IO error: {}", err),
            Error::Config(msg) => write!(f, "Configuration error: {}", msg),
            Error::InvalidOperation(msg) => write!(f, "Invalid operation: {}", msg),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Io(err) => Some(err),
            Error::EmptyDetails
            | Error::CaptureUnavailable
            | Error::Config(_)
            | Error::InvalidOperation(_) => None,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err)
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
