//! Turning sizing options into direct configuration values

use super::{ConfigSource, Configuration, Layer};
use crate::budget::{ResourceBudget, UNSET};
use crate::options::PackageOptions;
use crate::Result;
use llap_meta::vars;

/// Validate the requested sizing and write the derived values.
///
/// The budget is checked before anything is written, so a rejected
/// invocation leaves no derived value behind. Every value written to the
/// working configuration is also recorded in the returned direct layer.
pub fn apply_options(
    mut conf: Configuration,
    options: &PackageOptions,
) -> Result<(Configuration, ConfigSource, ResourceBudget)> {
    let mut direct = ConfigSource::new(Layer::Direct);
    let mut put = |conf: &mut Configuration, key: &str, value: String| {
        conf.set(key, value.clone());
        direct.set(key, value);
    };

    if let Some(name) = &options.name {
        put(&mut conf, vars::DAEMON_SERVICE_HOSTS, format!("@{name}"));
    }

    let budget = ResourceBudget {
        container_bytes: options.size,
        cache_bytes: options.cache,
        heap_bytes: options.xmx,
        executors: options.executors,
        direct_allocator: conf
            .get_bool(vars::IO_ALLOCATOR_DIRECT)?
            .unwrap_or(vars::IO_ALLOCATOR_DIRECT_DEFAULT),
    };
    let min_allocation_mb = conf
        .get_i64(vars::RM_SCHEDULER_MINIMUM_ALLOCATION_MB)?
        .unwrap_or(UNSET);
    budget.validate(min_allocation_mb)?;

    if budget.container_bytes != UNSET {
        put(&mut conf, vars::DAEMON_YARN_CONTAINER_MB, budget.container_mb().to_string());
    }
    if budget.executors != UNSET {
        put(&mut conf, vars::DAEMON_NUM_EXECUTORS, budget.executors.to_string());
    }
    if budget.cache_bytes != UNSET {
        put(&mut conf, vars::IO_MEMORY_MAX_SIZE, budget.cache_bytes.to_string());
    }
    if budget.heap_bytes != UNSET {
        put(&mut conf, vars::DAEMON_MEMORY_PER_INSTANCE_MB, budget.heap_mb().to_string());
    }

    Ok((conf, direct, budget))
}
