use thiserror::Error;

use crate::document::DocumentError;

/// A single line could not be applied to the document.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum ParseError {
    #[error("invalid syntax: {0}")]
    InvalidSyntax(String),

    #[error(transparent)]
    Document(#[from] DocumentError),
}

impl ParseError {
    pub(crate) fn syntax(reason: impl Into<String>) -> Self {
        Self::InvalidSyntax(reason.into())
    }
}
