use std::fmt;

/// Result type for irlog-types operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur in the types layer
#[derive(Debug)]
pub enum Error {
    /// Category name outside the closed set
    UnknownCategory(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::UnknownCategory(name) => write!(f, "Unknown category: {}", name),
        }
    }
}

impl std::error::Error for Error {}
