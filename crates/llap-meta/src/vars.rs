//! Configuration variable names read or written by the builder.

/// Registry address daemons publish under; `@<name>` selects a named instance.
pub const DAEMON_SERVICE_HOSTS: &str = "hive.llap.daemon.service.hosts";
pub const DAEMON_YARN_CONTAINER_MB: &str = "hive.llap.daemon.yarn.container.mb";
pub const DAEMON_NUM_EXECUTORS: &str = "hive.llap.daemon.num.executors";
pub const DAEMON_MEMORY_PER_INSTANCE_MB: &str = "hive.llap.daemon.memory.per.instance.mb";
pub const DAEMON_VCPUS_PER_INSTANCE: &str = "hive.llap.daemon.vcpus.per.instance";
pub const IO_MEMORY_MAX_SIZE: &str = "hive.llap.io.memory.size";
pub const IO_ALLOCATOR_DIRECT: &str = "hive.llap.io.allocator.direct";

/// Off-heap allocation is what the daemon does when nothing says otherwise.
pub const IO_ALLOCATOR_DIRECT_DEFAULT: bool = true;

pub const RM_SCHEDULER_MINIMUM_ALLOCATION_MB: &str = "yarn.scheduler.minimum-allocation-mb";
pub const RM_SCHEDULER_MINIMUM_ALLOCATION_VCORES: &str = "yarn.scheduler.minimum-allocation-vcores";

/// Location of the execution framework's library bundle.
pub const TEZ_LIB_URIS: &str = "tez.lib.uris";

/// Manifest key for the resolved Java installation.
pub const JAVA_HOME: &str = "java.home";

pub const PREFIX_LLAP: &str = "llap.";
pub const PREFIX_HIVE_LLAP: &str = "hive.llap.";
