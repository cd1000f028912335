use std::fmt;
use std::io;
use std::num::NonZeroU64;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineError {
    pub message: String,
    pub line_number: Option<NonZeroU64>,
}

impl fmt::Display for LineError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.line_number {
            Some(ln) => write!(f, "Line {}: {}", ln, self.message),
            None => write!(f, "{}", self.message),
        }
    }
}

#[derive(Debug, Error)]
pub enum Error {
    #[error("Failed to read `{}`: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("{0}")]
    Lexer(LineError),

    #[error("{0}")]
    Parser(LineError),
}

impl Error {
    pub fn from_lexer(message: String, line_number: NonZeroU64) -> Error {
        Error::Lexer(LineError {
            message,
            line_number: Some(line_number),
        })
    }

    pub fn from_parser(message: String, line_number: NonZeroU64) -> Error {
        Error::Parser(LineError {
            message,
            line_number: Some(line_number),
        })
    }

    pub fn from_io(path: impl Into<PathBuf>, source: io::Error) -> Error {
        Error::Io {
            path: path.into(),
            source,
        }
    }

    pub fn eof(line_number: NonZeroU64) -> Error {
        Error::from_parser(String::from("Unexpected end-of-file"), line_number)
    }

    pub fn line_error(&self) -> Option<&LineError> {
        match self {
            Error::Lexer(err) | Error::Parser(err) => Some(err),
            Error::Io { .. } => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
