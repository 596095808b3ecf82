use std::{fmt, io};

#[derive(Debug)]
pub enum Error {
    /// The base name of a log file was empty
    EmptyBaseName,
    IOError(io::Error),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::EmptyBaseName => write!(f, "log file base name must not be empty"),
            Error::IOError(err) => write!(f, "I/O error: {}", err),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::EmptyBaseName => None,
            Error::IOError(err) => Some(err),
        }
    }
}

impl From<io::Error> for Error {
    fn from(error: io::Error) -> Self {
        Error::IOError(error)
    }
}
