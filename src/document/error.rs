use thiserror::Error;

/// Errors raised while registering entities into a [`Document`](super::Document).
///
/// Every check runs before the owning collection is touched, so a failed
/// registration leaves the document exactly as it was.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum DocumentError {
    #[error("missing {0}")]
    InvalidArgument(&'static str),

    #[error("duplicate sector '{0}'")]
    DuplicateSector(String),

    #[error("duplicate section '{0}'")]
    DuplicateSection(String),

    #[error("duplicate field '{0}'")]
    DuplicateField(String),

    #[error("section '{0}' holds lines, not fields")]
    FieldsInLinesSection(String),

    #[error("section '{0}' holds fields, not lines")]
    LinesInFieldsSection(String),
}
