//! The working configuration

use crate::assemble::ClusterConfigFiles;
use crate::{Error, Result};
use llap_fs::{Properties, PropertyStore};
use llap_meta::parse_size;

/// Key/value configuration assembled from the cluster files and then
/// extended by the command line.
///
/// Created empty (nothing is inherited from the process environment) and
/// owned by exactly one pipeline stage at a time.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Configuration {
    values: Properties,
}

impl Configuration {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_properties(values: Properties) -> Self {
        Self { values }
    }

    /// Load every discovered cluster file in order; later files override
    /// keys from earlier ones.
    pub fn load(files: &ClusterConfigFiles) -> Result<Self> {
        let store = PropertyStore::new();
        let mut values = Properties::new();
        for path in files.all() {
            tracing::debug!(path = %path.display(), "loading cluster configuration");
            values.extend(store.load(path)?);
        }
        Ok(Self { values })
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.values.insert(key.into(), value.into());
    }

    pub fn contains(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    pub fn get_i64(&self, key: &str) -> Result<Option<i64>> {
        self.get(key)
            .map(|raw| {
                raw.trim().parse::<i64>().map_err(|_| Error::InvalidValue {
                    key: key.to_string(),
                    value: raw.to_string(),
                })
            })
            .transpose()
    }

    /// Read a byte size, accepting unit suffixes such as `1g` or `512m`.
    pub fn get_size(&self, key: &str) -> Result<Option<i64>> {
        self.get(key)
            .map(|raw| {
                parse_size(raw).map_err(|_| Error::InvalidValue {
                    key: key.to_string(),
                    value: raw.to_string(),
                })
            })
            .transpose()
    }

    pub fn get_bool(&self, key: &str) -> Result<Option<bool>> {
        self.get(key)
            .map(|raw| match raw.trim().to_ascii_lowercase().as_str() {
                "true" => Ok(true),
                "false" => Ok(false),
                _ => Err(Error::InvalidValue {
                    key: key.to_string(),
                    value: raw.to_string(),
                }),
            })
            .transpose()
    }

    pub fn properties(&self) -> &Properties {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}
