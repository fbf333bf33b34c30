use std::fmt;
use std::io;

use crate::compare::CompareError;
use crate::dump::ParseError;

/// Fatal outcomes of a debugger run.
#[derive(Debug)]
pub enum Error {
    Io(io::Error),
    Parse(ParseError),
    Compare(CompareError),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(err) => write!(f, "I/O error: {}", err),
            Error::Parse(err) => write!(f, "{}", err),
            Error::Compare(err) => write!(f, "{}", err),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Io(err) => Some(err),
            Error::Parse(err) => Some(err),
            Error::Compare(err) => Some(err),
        }
    }
}

impl From<io::Error> for Error {
    fn from(err: io::Error) -> Self {
        Error::Io(err)
    }
}

impl From<ParseError> for Error {
    fn from(err: ParseError) -> Self {
        Error::Parse(err)
    }
}

impl From<CompareError> for Error {
    fn from(err: CompareError) -> Self {
        Error::Compare(err)
    }
}
