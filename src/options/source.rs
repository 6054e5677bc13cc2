use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use toml::Table;
use tracing::debug;

use super::OptionsError;

/// Anything that can contribute resolver options.
///
/// A source yields a flat table of option keys; the loader overlays the
/// tables of later sources onto earlier ones key by key.
pub trait OptionsSource: Send + Sync + std::fmt::Debug {
    fn load(&self) -> Result<Table, OptionsError>;
}

/// Options read from a TOML file.
///
/// A missing optional file contributes nothing; a missing required file is an error.
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
    required: bool,
}

impl FileSource {
    pub fn new(path: impl AsRef<Path>, required: bool) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            required,
        }
    }
}

impl OptionsSource for FileSource {
    fn load(&self) -> Result<Table, OptionsError> {
        let contents = match std::fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == ErrorKind::NotFound && !self.required => {
                debug!(path = %self.path.display(), "optional options file missing");
                return Ok(Table::new());
            }
            Err(e) if e.kind() == ErrorKind::NotFound => {
                return Err(OptionsError::Missing(self.path.clone()));
            }
            Err(source) => {
                return Err(OptionsError::Unreadable {
                    path: self.path.clone(),
                    source,
                });
            }
        };

        let table = toml::from_str(&contents).map_err(|source| OptionsError::Malformed {
            path: self.path.clone(),
            source,
        })?;
        debug!(path = %self.path.display(), "loaded options file");
        Ok(table)
    }
}
