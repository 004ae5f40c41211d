//! Configuration layers and their precedence

use llap_fs::Properties;
use serde::Serialize;
use std::fmt;

/// A configuration layer. The derived ordering is the precedence order:
/// a later variant overrides an earlier one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Layer {
    Base,
    Profile,
    Direct,
}

impl Layer {
    /// Provenance label recorded against resolved keys.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Base => "cluster configuration",
            Self::Profile => "command-line profile",
            Self::Direct => "command-line direct",
        }
    }
}

impl fmt::Display for Layer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One layer's keys and the values it was given.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigSource {
    layer: Layer,
    entries: Properties,
}

impl ConfigSource {
    pub fn new(layer: Layer) -> Self {
        Self {
            layer,
            entries: Properties::new(),
        }
    }

    pub fn with_entries(layer: Layer, entries: Properties) -> Self {
        Self { layer, entries }
    }

    pub fn layer(&self) -> Layer {
        self.layer
    }

    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.entries.insert(key.into(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn entries(&self) -> &Properties {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn precedence_is_base_profile_direct() {
        assert!(Layer::Base < Layer::Profile);
        assert!(Layer::Profile < Layer::Direct);

        let mut layers = vec![Layer::Direct, Layer::Base, Layer::Profile];
        layers.sort();
        assert_eq!(layers, vec![Layer::Base, Layer::Profile, Layer::Direct]);
    }

    #[test]
    fn labels() {
        assert_eq!(Layer::Direct.to_string(), "command-line direct");
        assert_eq!(Layer::Profile.label(), "command-line profile");
    }
}
