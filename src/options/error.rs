use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum OptionsError {
    #[error("options file '{0}' does not exist")]
    Missing(PathBuf),

    #[error("cannot read options file '{path}': {source}")]
    Unreadable {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("options file '{path}' is not valid TOML: {source}")]
    Malformed {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("invalid resolver options: {0}")]
    Invalid(#[from] toml::de::Error),
}
