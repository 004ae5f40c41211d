//! Merging command-line layers into the daemon's resolved configuration

use super::{ConfigSource, Configuration, Layer};
use crate::diagnostics::Diagnostics;
use llap_fs::Properties;
use llap_meta::{DaemonKeyRegistry, KeyClass};
use serde::Serialize;
use std::collections::BTreeMap;

/// Write daemon properties into the working configuration.
///
/// Keys on the daemon allow-list are written as-is. Keys under a daemon
/// namespace prefix are written with a warning. Anything else is dropped
/// with a warning. Never fails: this is a best-effort merge, and every
/// downgraded or dropped key is reported in the returned diagnostics.
pub fn merge_server_properties(
    mut conf: Configuration,
    properties: &Properties,
    registry: &DaemonKeyRegistry,
) -> (Configuration, Diagnostics) {
    let mut diagnostics = Diagnostics::new();

    for (key, value) in properties {
        match registry.classify(key) {
            KeyClass::Known => conf.set(key.clone(), value.clone()),
            KeyClass::Prefixed => {
                diagnostics.warn(
                    key.clone(),
                    format!("Adding key [{key}] even though it is not in the set of known llap-server keys"),
                );
                conf.set(key.clone(), value.clone());
            }
            KeyClass::Unknown => {
                diagnostics.warn(
                    key.clone(),
                    format!("Ignoring unknown llap server parameter: [{key}]"),
                );
            }
        }
    }

    (conf, diagnostics)
}

/// A resolved value and the layer that put it there.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedEntry {
    pub value: String,
    pub source: Layer,
}

/// The configuration written out for the daemon instance.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ResolvedConfig {
    entries: BTreeMap<String, ResolvedEntry>,
}

impl ResolvedConfig {
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(|e| e.value.as_str())
    }

    pub fn source_of(&self, key: &str) -> Option<Layer> {
        self.entries.get(key).map(|e| e.source)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &ResolvedEntry)> {
        self.entries.iter().map(|(k, e)| (k.as_str(), e))
    }

    /// Plain key/value view, provenance dropped.
    pub fn to_properties(&self) -> Properties {
        self.entries
            .iter()
            .map(|(k, e)| (k.clone(), e.value.clone()))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Resolves override layers against the working configuration.
///
/// An override layer only selects *which* keys are externalised: the value
/// written is always the one the working configuration holds when
/// resolution runs, never the literal value the layer was given. Direct
/// values reach the working configuration earlier in the run, which is what
/// makes them visible here.
///
/// These filter semantics look like a leftover of a mutate-then-filter
/// design rather than a contract, but they decide which value wins for keys
/// also set in the cluster files, so they are kept as observed.
pub struct ConfigResolver<'a> {
    registry: &'a DaemonKeyRegistry,
}

impl<'a> ConfigResolver<'a> {
    pub fn new(registry: &'a DaemonKeyRegistry) -> Self {
        Self { registry }
    }

    /// Build the resolved configuration from an empty map.
    ///
    /// Layers are applied in precedence order regardless of the order they
    /// are passed in; a later layer overwrites both value and provenance.
    /// Keys outside the daemon namespace never make it through, even when a
    /// cluster file defines them.
    pub fn resolve(&self, base: &Configuration, layers: &[&ConfigSource]) -> ResolvedConfig {
        let mut ordered: Vec<&ConfigSource> = layers.to_vec();
        ordered.sort_by_key(|source| source.layer());

        let mut resolved = ResolvedConfig::default();
        for source in ordered {
            for key in source.keys() {
                if self.registry.classify(key) == KeyClass::Unknown {
                    continue;
                }
                let Some(value) = base.get(key) else {
                    continue;
                };
                if let Some(previous) = resolved.entries.get(key) {
                    tracing::debug!(
                        key,
                        from = %previous.source,
                        to = %source.layer(),
                        "overriding resolved key"
                    );
                }
                resolved.entries.insert(
                    key.to_string(),
                    ResolvedEntry {
                        value: value.to_string(),
                        source: source.layer(),
                    },
                );
            }
        }

        resolved
    }
}
