//! Tests for configuration-resource lookup

use assert_fs::prelude::*;
use llap_fs::ResourceLocator;
use predicates::prelude::*;

#[test]
fn test_find_prefers_earlier_directory() {
    let first = assert_fs::TempDir::new().unwrap();
    let second = assert_fs::TempDir::new().unwrap();
    first.child("hive-site.toml").write_str("a = \"1\"").unwrap();
    second.child("hive-site.toml").write_str("a = \"2\"").unwrap();

    let locator = ResourceLocator::new([first.path(), second.path()]);

    assert_eq!(
        locator.find("hive-site.toml"),
        Some(first.path().join("hive-site.toml"))
    );
}

#[test]
fn test_find_falls_through_to_later_directory() {
    let first = assert_fs::TempDir::new().unwrap();
    let second = assert_fs::TempDir::new().unwrap();
    second.child("ssl-server.toml").touch().unwrap();

    let locator = ResourceLocator::new([first.path(), second.path()]);
    let found = locator.find("ssl-server.toml").unwrap();

    assert!(predicate::path::is_file().eval(&found));
    assert!(found.starts_with(second.path()));
}

#[test]
fn test_directories_are_not_resources() {
    let dir = assert_fs::TempDir::new().unwrap();
    dir.child("tez-site.toml").create_dir_all().unwrap();

    let locator = ResourceLocator::new([dir.path()]);

    assert_eq!(locator.find("tez-site.toml"), None);
}
