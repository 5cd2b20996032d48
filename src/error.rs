use std::fmt;

#[derive(Debug, Clone)]
pub enum Error {
    /// A dataset shape problem: mismatched feature/target lengths, or an
    /// empty dataset where at least one sample is required.
    InvalidData(String),
    /// A hyperparameter precondition violation at model construction.
    InvalidConfig(String),
}

pub type Result<T> = std::result::Result<T, Error>;

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidData(msg) => write!(f, "invalid data: {msg}"),
            Error::InvalidConfig(msg) => write!(f, "invalid config: {msg}"),
        }
    }
}

impl std::error::Error for Error {}
