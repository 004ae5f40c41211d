//! Packaging scenarios run end to end against a fixture cluster
//!
//! Each test builds a complete host with [`TestCluster`], runs the full
//! pipeline through the local filesystem, and inspects what ended up in the
//! staging directory.

use llap_core::{
    DirectoryResolver, Error, Layer, LocalBundleFetcher, PackageBuilder, PackageEnvironment,
    PackageOptions, PackageReport, Result,
};
use llap_fs::LocalFs;
use llap_meta::{MIB, vars};
use llap_test_utils::cluster::TestCluster;
use pretty_assertions::assert_eq;
use rstest::rstest;
use serde_json::Value;

// =============================================================================
// Test Infrastructure
// =============================================================================

fn build(cluster: &TestCluster, options: &PackageOptions) -> Result<PackageReport> {
    let env = PackageEnvironment {
        conf_dirs: vec![cluster.conf_dir()],
        home: Some(cluster.home()),
        java_home_env: None,
        java_installation: None,
    };
    let fs = LocalFs::new();
    let artifacts = DirectoryResolver::new([cluster.lib_dir()]);
    let fetcher = LocalBundleFetcher::new();
    PackageBuilder::new(&env, &fs, &artifacts, &fetcher).build(options)
}

fn options(cluster: &TestCluster) -> PackageOptions {
    let mut options = PackageOptions::new(cluster.staging());
    options.java_home = Some("/usr/lib/jvm/java-8".into());
    options
}

fn sized(cluster: &TestCluster, container_mb: i64, heap_mb: i64, cache_mb: i64) -> PackageOptions {
    let mut options = options(cluster);
    options.size = container_mb * MIB;
    options.xmx = heap_mb * MIB;
    options.cache = cache_mb * MIB;
    options.executors = 4;
    options
}

/// A cluster reporting a 64 MB / 1 vcore minimum allocation.
fn sized_cluster(direct_allocator: bool) -> TestCluster {
    let mut cluster = TestCluster::new();
    cluster.set_property("yarn-site.toml", vars::RM_SCHEDULER_MINIMUM_ALLOCATION_MB, "64");
    cluster.set_property("yarn-site.toml", vars::RM_SCHEDULER_MINIMUM_ALLOCATION_VCORES, "1");
    cluster.set_property(
        "hive-site.toml",
        vars::IO_ALLOCATOR_DIRECT,
        &direct_allocator.to_string(),
    );
    cluster
}

fn manifest_json(cluster: &TestCluster) -> Value {
    let content = std::fs::read_to_string(cluster.staging().join("config.json")).unwrap();
    serde_json::from_str(&content).unwrap()
}

// =============================================================================
// Sizing
// =============================================================================

#[test]
fn consistent_sizing_stages_complete_package() {
    let cluster = sized_cluster(false);

    let report = build(&cluster, &sized(&cluster, 200, 100, 50)).unwrap();

    let json = manifest_json(&cluster);
    assert_eq!(json["hive.llap.daemon.yarn.container.mb"], 200);
    assert_eq!(json["hive.llap.io.memory.size"], 50 * MIB);
    assert_eq!(json["hive.llap.daemon.memory.per.instance.mb"], 100);
    assert_eq!(json["hive.llap.daemon.num.executors"], 4);
    assert_eq!(json["hive.llap.io.allocator.direct"], false);
    assert_eq!(json["yarn.scheduler.minimum-allocation-mb"], 64);
    assert_eq!(json["yarn.scheduler.minimum-allocation-vcores"], 1);
    assert_eq!(json["java.home"], "/usr/lib/jvm/java-8");

    cluster.assert_file_exists("package/lib/tez-runtime-internals-0.9.2.jar");
    cluster.assert_file_exists("package/lib/hive-llap-common-4.0.0.jar");
    cluster.assert_file_exists("package/conf/yarn-site.toml");
    cluster.assert_file_exists("package/conf/llap-daemon-site.toml");
    assert!(report.steps.skipped.is_empty());
}

#[rstest]
#[case::cache_equals_container(200, 100, 200)]
#[case::cache_exceeds_container(200, 100, 250)]
#[case::heap_equals_container(200, 200, 50)]
#[case::heap_exceeds_container(200, 300, 50)]
fn oversized_components_abort_before_staging(
    #[case] container_mb: i64,
    #[case] heap_mb: i64,
    #[case] cache_mb: i64,
) {
    let cluster = sized_cluster(false);

    let err = build(&cluster, &sized(&cluster, container_mb, heap_mb, cache_mb)).unwrap_err();

    assert!(matches!(err, Error::Budget(_)), "{err}");
    cluster.assert_file_not_exists("package");
}

#[rstest]
#[case::over(60, 60, false)]
#[case::equal(50, 50, false)]
#[case::under(40, 40, true)]
fn off_heap_cache_counts_against_container(
    #[case] heap_mb: i64,
    #[case] cache_mb: i64,
    #[case] accepted: bool,
) {
    let cluster = sized_cluster(true);

    let result = build(&cluster, &sized(&cluster, 100, heap_mb, cache_mb));

    assert_eq!(result.is_ok(), accepted);
    if !accepted {
        cluster.assert_file_not_exists("package");
    }
}

#[test]
fn on_heap_cache_is_not_summed() {
    let cluster = sized_cluster(false);
    build(&cluster, &sized(&cluster, 100, 60, 60)).unwrap();
}

#[test]
fn container_below_cluster_minimum_reports_minimum() {
    let mut cluster = sized_cluster(false);
    cluster.set_property("yarn-site.toml", vars::RM_SCHEDULER_MINIMUM_ALLOCATION_MB, "1024");

    let err = build(&cluster, &sized(&cluster, 200, 100, 50)).unwrap_err();

    assert!(err.to_string().contains("1024"), "{err}");
    cluster.assert_file_not_exists("package");
}

// =============================================================================
// Resolution
// =============================================================================

#[test]
fn direct_layer_wins_and_unknown_keys_never_resolve() {
    let mut cluster = sized_cluster(false);
    cluster.set_property("hive-site.toml", "mapreduce.unrelated.key", "1");
    let mut options = sized(&cluster, 200, 100, 50);
    options
        .hiveconf
        .insert(vars::DAEMON_YARN_CONTAINER_MB.into(), "4096".into());
    options.hiveconf.insert("mapreduce.unrelated.key".into(), "2".into());

    let report = build(&cluster, &options).unwrap();

    assert_eq!(report.resolved.get(vars::DAEMON_YARN_CONTAINER_MB), Some("200"));
    assert_eq!(
        report.resolved.source_of(vars::DAEMON_YARN_CONTAINER_MB),
        Some(Layer::Direct)
    );
    assert_eq!(report.resolved.get("mapreduce.unrelated.key"), None);
    assert!(report.diagnostics.mentions("mapreduce.unrelated.key"));
    cluster.assert_file_contains("package/conf/llap-daemon-site.toml", "200");
}

#[test]
fn rebuilding_gives_identical_configuration() {
    let cluster = sized_cluster(false);
    let mut options = sized(&cluster, 200, 100, 50);
    options.name = Some("llap0".into());
    options
        .hiveconf
        .insert("hive.llap.io.threadpool.size".into(), "12".into());

    let first = build(&cluster, &options).unwrap();
    let site = std::fs::read_to_string(cluster.staging().join("conf/llap-daemon-site.toml")).unwrap();
    let second = build(&cluster, &options).unwrap();

    assert_eq!(first.resolved, second.resolved);
    assert_eq!(first.manifest, second.manifest);
    assert_eq!(
        site,
        std::fs::read_to_string(cluster.staging().join("conf/llap-daemon-site.toml")).unwrap()
    );
}

// =============================================================================
// Manifest and staging
// =============================================================================

#[test]
fn unset_inputs_produce_complete_manifest() {
    let cluster = TestCluster::new();

    build(&cluster, &options(&cluster)).unwrap();

    let json = manifest_json(&cluster);
    let object = json.as_object().unwrap();
    assert_eq!(object.len(), 9);
    for key in [
        vars::DAEMON_YARN_CONTAINER_MB,
        vars::IO_MEMORY_MAX_SIZE,
        vars::DAEMON_MEMORY_PER_INSTANCE_MB,
        vars::DAEMON_VCPUS_PER_INSTANCE,
        vars::DAEMON_NUM_EXECUTORS,
        vars::RM_SCHEDULER_MINIMUM_ALLOCATION_MB,
        vars::RM_SCHEDULER_MINIMUM_ALLOCATION_VCORES,
    ] {
        assert_eq!(object[key], -1, "{key}");
    }
    assert_eq!(object[vars::IO_ALLOCATOR_DIRECT], true);
}

#[test]
fn empty_aux_jar_entry_is_skipped() {
    let cluster = TestCluster::new();
    let a = cluster.aux_jar("a.jar");
    let b = cluster.aux_jar("b.jar");
    let mut options = options(&cluster);
    options.aux_jars = Some(format!("{},,{}", a.display(), b.display()));

    let report = build(&cluster, &options).unwrap();

    cluster.assert_file_exists("package/lib/a.jar");
    cluster.assert_file_exists("package/lib/b.jar");
    let aux_steps = report
        .steps
        .completed
        .iter()
        .filter(|s| s.starts_with("aux jar"))
        .count();
    assert_eq!(aux_steps, 2);
}

#[test]
fn hbase_integration_stages_handler_and_dependencies() {
    let cluster = TestCluster::new();
    cluster.add_library("hive-hbase-handler-4.0.0.jar");
    for dependency in llap_core::assemble::HBASE_DEPENDENCIES {
        cluster.add_library(&format!("{dependency}-1.1.1.jar"));
    }
    let mut options = options(&cluster);
    options.include_hbase = true;

    build(&cluster, &options).unwrap();

    cluster.assert_file_exists("package/lib/hive-hbase-handler-4.0.0.jar");
    cluster.assert_file_exists("package/lib/zookeeper-1.1.1.jar");
}

#[test]
fn missing_logging_config_is_fatal() {
    let cluster = TestCluster::new();
    std::fs::remove_file(cluster.conf_dir().join("llap-daemon-log4j2.properties")).unwrap();

    let err = build(&cluster, &options(&cluster)).unwrap_err();

    assert!(matches!(err, Error::MissingLoggingConfig { .. }));
    cluster.assert_file_not_exists("package");
}
