//! Tunables for reference resolution and how to load them.

mod builder;
mod env;
mod error;
mod source;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer};

pub use builder::OptionsLoader;
pub use env::EnvSource;
pub use error::OptionsError;
pub use source::{FileSource, OptionsSource};

/// The root token used when none is configured.
pub const DEFAULT_ROOT: &str = ".config";

/// Settings for a [`Resolver`](crate::Resolver).
///
/// ```toml
/// root = ".config"   # "" disables root prefixing
/// max_depth = 64     # omit for unbounded recursion
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ResolveOptions {
    /// First path segment prepended to absolute references that lack it.
    pub root: Option<String>,
    /// Maximum nesting of field references before resolution gives up.
    /// Accepts an integer or a numeric string; an empty string means unbounded.
    #[serde(deserialize_with = "deserialize_depth")]
    pub max_depth: Option<usize>,
}

impl Default for ResolveOptions {
    fn default() -> Self {
        Self {
            root: Some(DEFAULT_ROOT.to_string()),
            max_depth: None,
        }
    }
}

fn deserialize_depth<'de, D>(deserializer: D) -> Result<Option<usize>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Depth {
        Number(usize),
        Text(String),
    }

    match Depth::deserialize(deserializer)? {
        Depth::Number(n) => Ok(Some(n)),
        Depth::Text(text) if text.trim().is_empty() => Ok(None),
        Depth::Text(text) => text
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| D::Error::custom(format!("expected a nesting depth, found '{text}'"))),
    }
}
