use std::path::PathBuf;

use thiserror::Error;

use crate::document::DocumentError;
use crate::options::OptionsError;
use crate::parser::ParseError;
use crate::resolve::ResolveError;

/// Top-level error type for the mcfg library.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    #[error("failed to open '{path}': {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to read line {line}: {source}")]
    Read {
        line: usize,
        source: std::io::Error,
    },

    #[error("line {line}: {source}")]
    Parse {
        line: usize,
        #[source]
        source: ParseError,
    },

    #[error("options error: {0}")]
    Options(#[from] OptionsError),

    #[error("resolution error: {0}")]
    Resolve(#[from] ResolveError),
}

/// Flat classification of an [`Error`], one code per failure category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    UnknownError,
    DuplicateSector,
    DuplicateSection,
    DuplicateField,
    InvalidSyntax,
    /// Carries the OS error number when there is one.
    Io(Option<i32>),
}

impl Error {
    /// The source line an error occurred on, if it came from the parser.
    pub fn line(&self) -> Option<usize> {
        match self {
            Self::Read { line, .. } | Self::Parse { line, .. } => Some(*line),
            _ => None,
        }
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            Self::Io { source, .. } | Self::Read { source, .. } => {
                ErrorCode::Io(source.raw_os_error())
            }
            Self::Parse { source, .. } => source.code(),
            Self::Options(_) | Self::Resolve(_) => ErrorCode::UnknownError,
        }
    }
}

impl ParseError {
    pub fn code(&self) -> ErrorCode {
        match self {
            Self::InvalidSyntax(_) => ErrorCode::InvalidSyntax,
            Self::Document(err) => err.code(),
        }
    }
}

impl DocumentError {
    pub fn code(&self) -> ErrorCode {
        match self {
            Self::InvalidArgument(_) => ErrorCode::UnknownError,
            Self::DuplicateSector(_) => ErrorCode::DuplicateSector,
            Self::DuplicateSection(_) => ErrorCode::DuplicateSection,
            Self::DuplicateField(_) => ErrorCode::DuplicateField,
            Self::FieldsInLinesSection(_) | Self::LinesInFieldsSection(_) => {
                ErrorCode::InvalidSyntax
            }
        }
    }
}
