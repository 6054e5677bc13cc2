use toml::{Table, Value};

use super::source::OptionsSource;
use super::OptionsError;

/// Options read from environment variables named `<prefix><separator><KEY>`.
///
/// With prefix `MCFG` and separator `__`, `MCFG__MAX_DEPTH=64` sets `max_depth`.
/// Keys are lowercased. Values are always strings; typed options parse them
/// when the options are deserialized.
#[derive(Debug, Clone)]
pub struct EnvSource {
    prefix: String,
}

impl EnvSource {
    pub fn new(prefix: impl AsRef<str>, separator: impl AsRef<str>) -> Self {
        Self {
            prefix: format!("{}{}", prefix.as_ref(), separator.as_ref()),
        }
    }

    fn table_from(&self, vars: impl IntoIterator<Item = (String, String)>) -> Table {
        vars.into_iter()
            .filter_map(|(key, value)| {
                let key = key.strip_prefix(&self.prefix)?;
                (!key.is_empty()).then(|| (key.to_lowercase(), Value::String(value)))
            })
            .collect()
    }
}

impl OptionsSource for EnvSource {
    fn load(&self) -> Result<Table, OptionsError> {
        Ok(self.table_from(std::env::vars()))
    }
}
