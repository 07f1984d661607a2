use std::error;
use std::fmt;
use std::io;
use std::num::ParseIntError;
use std::result;

/// Errors raised while reading the value and priority pairs.
#[derive(Debug)]
pub enum Error {
    /// An input or output error.
    IOError(io::Error),
    /// A token that is not a valid integer of the expected type.
    ParseError { token: String, error: ParseIntError },
    /// The input held no tokens at all.
    MissingCount,
    /// The input ended before the announced number of pairs was read.
    UnexpectedEof { expected: usize, read: usize },
}

impl From<io::Error> for Error {
    fn from(err: io::Error) -> Error {
        Error::IOError(err)
    }
}

impl error::Error for Error {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match self {
            Error::IOError(error) => Some(error),
            Error::ParseError { error, .. } => Some(error),
            Error::MissingCount | Error::UnexpectedEof { .. } => None,
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::IOError(error) => write!(f, "{}", error),
            Error::ParseError { token, error } => write!(f, "invalid token `{}`: {}", token, error),
            Error::MissingCount => write!(f, "input is empty, expected a record count"),
            Error::UnexpectedEof { expected, read } => write!(
                f,
                "input ended after {} of {} value and priority pairs",
                read, expected,
            ),
        }
    }
}

pub type Result<T> = result::Result<T, Error>;
