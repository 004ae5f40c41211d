//! Allow-list of configuration keys a daemon instance understands

use crate::vars;
use std::collections::HashSet;

/// How a key relates to the daemon allow-list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyClass {
    /// Listed in the registry.
    Known,
    /// Not listed, but under a daemon namespace prefix.
    Prefixed,
    /// Neither; the daemon would ignore it.
    Unknown,
}

/// Registry of keys that belong in a daemon's site configuration.
pub struct DaemonKeyRegistry {
    known: HashSet<&'static str>,
    prefixes: Vec<&'static str>,
}

impl DaemonKeyRegistry {
    pub fn with_builtins() -> Self {
        let known = [
            "hive.llap.io.enabled",
            "hive.llap.io.memory.mode",
            "hive.llap.io.allocator.alloc.min",
            "hive.llap.io.allocator.alloc.max",
            "hive.llap.io.allocator.arena.count",
            vars::IO_MEMORY_MAX_SIZE,
            vars::IO_ALLOCATOR_DIRECT,
            "hive.llap.io.allocator.mmap",
            "hive.llap.io.allocator.mmap.path",
            "hive.llap.io.use.lrfu",
            "hive.llap.io.lrfu.lambda",
            "hive.llap.io.threadpool.size",
            "hive.llap.daemon.service.principal",
            "hive.llap.daemon.keytab.file",
            "hive.llap.zk.sm.principal",
            "hive.llap.zk.sm.keytab.file",
            "hive.llap.zk.sm.connectionString",
            "hive.llap.daemon.acl",
            "hive.llap.management.acl",
            "hive.llap.daemon.delegation.token.lifetime",
            "hive.llap.management.rpc.port",
            "hive.llap.auto.auth",
            "hive.llap.daemon.rpc.num.handlers",
            "hive.llap.daemon.work.dirs",
            "hive.llap.daemon.yarn.shuffle.port",
            vars::DAEMON_YARN_CONTAINER_MB,
            "hive.llap.daemon.shuffle.dir.watcher.enabled",
            "hive.llap.daemon.am.liveness.heartbeat.interval.ms",
            "hive.llap.daemon.am.liveness.connection.timeout.ms",
            vars::DAEMON_NUM_EXECUTORS,
            "hive.llap.daemon.rpc.port",
            vars::DAEMON_MEMORY_PER_INSTANCE_MB,
            vars::DAEMON_VCPUS_PER_INSTANCE,
            "hive.llap.daemon.num.file.cleaner.threads",
            "hive.llap.file.cleanup.delay.seconds",
            vars::DAEMON_SERVICE_HOSTS,
            "hive.llap.daemon.service.refresh.interval.sec",
            "hive.llap.daemon.communicator.num.threads",
            "hive.llap.daemon.download.permanent.fns",
            "hive.llap.daemon.task.scheduler.wait.queue.size",
            "hive.llap.daemon.wait.queue.comparator.class.name",
            "hive.llap.daemon.task.scheduler.enable.preemption",
            "hive.llap.daemon.web.port",
            "hive.llap.daemon.web.ssl",
        ]
        .into_iter()
        .collect();

        Self {
            known,
            prefixes: vec![vars::PREFIX_LLAP, vars::PREFIX_HIVE_LLAP],
        }
    }

    pub fn is_known(&self, key: &str) -> bool {
        self.known.contains(key)
    }

    pub fn has_daemon_prefix(&self, key: &str) -> bool {
        self.prefixes.iter().any(|prefix| key.starts_with(prefix))
    }

    pub fn classify(&self, key: &str) -> KeyClass {
        if self.is_known(key) {
            KeyClass::Known
        } else if self.has_daemon_prefix(key) {
            KeyClass::Prefixed
        } else {
            KeyClass::Unknown
        }
    }

    pub fn list_known(&self) -> Vec<&'static str> {
        let mut keys: Vec<_> = self.known.iter().copied().collect();
        keys.sort_unstable();
        keys
    }
}

impl Default for DaemonKeyRegistry {
    fn default() -> Self {
        Self::with_builtins()
    }
}
