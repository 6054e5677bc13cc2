use std::path::Path;

use tracing::debug;

use super::env::EnvSource;
use super::source::{FileSource, OptionsSource};
use super::{OptionsError, ResolveOptions};

/// Builder for loading [`ResolveOptions`] from layered sources.
///
/// Each source yields top-level option keys; a key set by a later source
/// replaces the same key from an earlier one. Keys that no source sets keep
/// their defaults.
///
/// ```no_run
/// use mcfg::OptionsLoader;
///
/// let options = OptionsLoader::builder()
///     .with_file("mcfg.toml", false)
///     .with_env("MCFG", "__")
///     .build()?;
/// # Ok::<(), mcfg::OptionsError>(())
/// ```
#[derive(Debug, Default)]
#[must_use = "builders do nothing until .build() is called"]
pub struct OptionsLoader {
    sources: Vec<Box<dyn OptionsSource>>,
}

impl OptionsLoader {
    pub fn builder() -> Self {
        Self::default()
    }

    /// Adds a TOML file. If `required` is `true`, the build fails if it doesn't exist.
    pub fn with_file(self, path: impl AsRef<Path>, required: bool) -> Self {
        self.with_source(FileSource::new(path, required))
    }

    /// Adds environment variables named `<prefix><separator><KEY>`.
    pub fn with_env(self, prefix: impl AsRef<str>, separator: impl AsRef<str>) -> Self {
        self.with_source(EnvSource::new(prefix, separator))
    }

    pub fn with_source(mut self, source: impl OptionsSource + 'static) -> Self {
        self.sources.push(Box::new(source));
        self
    }

    /// Loads every source in order, overlays their keys, then deserializes the result.
    pub fn build(self) -> Result<ResolveOptions, OptionsError> {
        let mut merged = toml::Table::new();
        for source in &self.sources {
            merged.extend(source.load()?);
        }

        let options: ResolveOptions = toml::Value::Table(merged).try_into()?;
        debug!(?options, "loaded resolver options");
        Ok(options)
    }
}
