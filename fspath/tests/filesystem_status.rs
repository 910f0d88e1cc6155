//! Integration tests for the status predicates.

mod common;

use common::Fixture;
use fspath::fspath;

#[test]
fn test_missing_path_answers_false_everywhere() {
    let fixture = Fixture::new();
    let path = fspath!(fixture.root_path(), "nope", "deeper");
    assert!(!path.exists());
    assert!(!path.is_directory());
    assert!(!path.is_file());
    assert!(!path.is_symbolic_link());
}

#[test]
fn test_file_and_directory() {
    let fixture = Fixture::new();
    fixture.file("sub/data.json", "{}");
    let root = fixture.root_path();

    let dir = fspath!(root, "sub");
    assert!(dir.exists() && dir.is_directory() && !dir.is_file());

    let file = fspath!(root, "sub", "data.json");
    assert!(file.exists() && file.is_file() && !file.is_directory());
    assert_eq!(file.extension(), ".json");
    assert_eq!(file.parent(), dir);
}

#[test]
fn test_predicates_observe_live_filesystem() {
    let fixture = Fixture::new();
    let path = fspath!(fixture.root_path(), "late.txt");
    assert!(!path.exists());

    fixture.file("late.txt", "now here");
    assert!(path.exists());

    std::fs::remove_file(path.as_path()).unwrap();
    assert!(!path.exists());
}

#[test]
#[cfg(unix)]
fn test_broken_symlink() {
    let fixture = Fixture::new();
    let link = fixture.symlink("missing-target", "dangling");
    let path = common::to_fs_path(&link);

    assert!(path.is_symbolic_link());
    assert!(!path.exists());
    assert!(!path.is_file());
    assert!(!path.is_directory());
}

#[test]
#[cfg(unix)]
fn test_symlink_to_file() {
    let fixture = Fixture::new();
    fixture.file("target.txt", "x");
    let link = common::to_fs_path(&fixture.symlink("target.txt", "alias.txt"));

    assert!(link.is_symbolic_link());
    assert!(link.is_file());
    assert!(!link.is_directory());
}

#[test]
#[cfg(unix)]
fn test_unsearchable_directory_answers_false() {
    use std::fs;
    use std::os::unix::fs::PermissionsExt;

    let fixture = Fixture::new();
    fixture.file("locked/inner.txt", "secret");
    fixture.dir("locked/sub");
    let locked = fixture.root().join("locked");
    fs::set_permissions(&locked, fs::Permissions::from_mode(0o000)).unwrap();

    // Privileged users bypass permission bits; nothing to observe then.
    if fs::read_dir(&locked).is_ok() {
        fs::set_permissions(&locked, fs::Permissions::from_mode(0o755)).unwrap();
        return;
    }

    let inner = fspath!(fixture.root_path(), "locked", "inner.txt");
    let exists = inner.exists();
    let is_file = inner.is_file();
    let err = inner.contents().unwrap_err();

    let sub = fspath!(fixture.root_path(), "locked", "sub");
    let sub_exists = sub.exists();
    let sub_is_directory = sub.is_directory();

    fs::set_permissions(&locked, fs::Permissions::from_mode(0o755)).unwrap();

    assert!(!exists);
    assert!(!is_file);
    assert!(err.is_permission_denied());
    assert!(!sub_exists);
    assert!(!sub_is_directory);
}
