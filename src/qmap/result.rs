use std::{fmt, io, num::NonZeroU64, num::ParseFloatError};

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
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error("{0}")]
    Parser(LineError),
    #[error("Line {line_number}: cannot convert `{text}` to a number: {source}")]
    Number {
        text: String,
        line_number: NonZeroU64,
        #[source]
        source: ParseFloatError,
    },
}

impl Error {
    pub fn from_parser(message: String, line_number: NonZeroU64) -> Error {
        Error::Parser(LineError {
            message,
            line_number: Some(line_number),
        })
    }

    pub fn from_number(
        text: String,
        line_number: NonZeroU64,
        source: ParseFloatError,
    ) -> Error {
        Error::Number {
            text,
            line_number,
            source,
        }
    }

    /// Line of the offending token, if the error came from the input text
    pub fn line_number(&self) -> Option<NonZeroU64> {
        match self {
            Error::Io(_) => None,
            Error::Parser(err) => err.line_number,
            Error::Number { line_number, .. } => Some(*line_number),
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
