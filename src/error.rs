use std::fmt::{Display, Formatter};
use std::{fmt, io};

use thiserror::Error;

#[derive(Error, Debug)]
pub enum FromFileError {
    #[error("error reading file")]
    Io(#[from] io::Error),
    #[error(transparent)]
    Parse(#[from] ParseError),
}

#[derive(Debug, Error)]
#[cfg_attr(test, derive(PartialEq))]
pub struct ParseError {
    error_type: ParseErrorType,
    line: Option<usize>,
}

impl ParseError {
    pub(crate) const fn from_type(error_type: ParseErrorType) -> Self {
        Self {
            error_type,
            line: None,
        }
    }

    pub(crate) const fn at_line(error_type: ParseErrorType, line: usize) -> Self {
        Self {
            error_type,
            line: Some(line),
        }
    }

    pub fn error_type(&self) -> ParseErrorType {
        self.error_type
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ParseErrorType {
    EmptyStructure,
    InvalidWord,
}

impl Display for ParseErrorType {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let s = match self {
            ParseErrorType::EmptyStructure => "Structure has no cells",
            ParseErrorType::InvalidWord => "Invalid word",
        };
        write!(f, "{}", s)
    }
}

impl Display for ParseError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.error_type)?;
        if let Some(line) = &self.line {
            write!(f, " at line {}", line)?;
        }
        Ok(())
    }
}
