use llap_meta::{DaemonKeyRegistry, KeyClass, vars};
use rstest::rstest;

#[rstest]
#[case(vars::DAEMON_YARN_CONTAINER_MB, KeyClass::Known)]
#[case(vars::DAEMON_MEMORY_PER_INSTANCE_MB, KeyClass::Known)]
#[case(vars::IO_ALLOCATOR_DIRECT, KeyClass::Known)]
#[case("hive.llap.daemon.not.a.real.key", KeyClass::Prefixed)]
#[case("llap.daemon.custom", KeyClass::Prefixed)]
#[case(vars::TEZ_LIB_URIS, KeyClass::Unknown)]
#[case(vars::RM_SCHEDULER_MINIMUM_ALLOCATION_MB, KeyClass::Unknown)]
#[case("", KeyClass::Unknown)]
fn test_classification(#[case] key: &str, #[case] expected: KeyClass) {
    assert_eq!(DaemonKeyRegistry::default().classify(key), expected);
}

#[test]
fn test_every_listed_key_is_under_a_daemon_prefix() {
    let registry = DaemonKeyRegistry::with_builtins();
    for key in registry.list_known() {
        assert!(
            registry.has_daemon_prefix(key),
            "known key {key} is outside the daemon namespace"
        );
    }
}
