use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum ResolveError {
    /// Only raised when a depth limit is configured.
    #[error("reference '{path}' nested {depth} levels deep, likely a cycle")]
    CycleDetected { path: String, depth: usize },
}
