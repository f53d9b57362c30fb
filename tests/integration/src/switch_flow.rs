//! Cross-crate flows: locate, segment, rewrite, persist, revert.
//!
//! These tests compose the library crates the same way the binary does,
//! without going through the CLI layer.

use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

use senv_blocks::{active_blocks, apply, segment};
use senv_fs::{DEFAULT_ENV_FILE, locate_env_file, read_text, write_text};
use senv_git::restore_from_head;
use senv_test_utils::env_file::{SAMPLE, write_env};
use senv_test_utils::git::{fake_git_dir, repo_with_committed_file};

fn fixture(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("../../test-fixtures/envs")
        .join(name)
}

fn target(names: &[&str]) -> BTreeSet<String> {
    names.iter().map(|n| n.to_string()).collect()
}

#[test]
fn test_locate_segment_rewrite_persist() {
    let dir = TempDir::new().unwrap();
    write_env(dir.path(), DEFAULT_ENV_FILE, SAMPLE);

    let path = locate_env_file(dir.path(), DEFAULT_ENV_FILE).unwrap();
    let text = read_text(&path).unwrap();
    let doc = segment(&text);
    assert_eq!(active_blocks(&doc), target(&["Dev"]));

    let updated = apply(&doc, &target(&["Staging"]));
    write_text(&path, &updated).unwrap();

    let reread = read_text(&path).unwrap();
    assert_eq!(active_blocks(&segment(&reread)), target(&["Staging"]));
}

#[test]
fn test_locate_from_nested_directory_via_repo_root() {
    let dir = TempDir::new().unwrap();
    fake_git_dir(dir.path());
    write_env(dir.path(), DEFAULT_ENV_FILE, SAMPLE);
    let nested = dir.path().join("services/api");
    fs::create_dir_all(&nested).unwrap();

    let path = locate_env_file(&nested, DEFAULT_ENV_FILE).unwrap();
    assert_eq!(path, dir.path().join(DEFAULT_ENV_FILE));
}

#[test]
fn test_switch_then_revert_restores_committed_bytes() {
    let dir = TempDir::new().unwrap();
    repo_with_committed_file(dir.path(), DEFAULT_ENV_FILE, SAMPLE);
    let path = dir.path().join(DEFAULT_ENV_FILE);

    let doc = segment(&read_text(&path).unwrap());
    write_text(&path, &apply(&doc, &target(&["Staging"]))).unwrap();
    assert_ne!(read_text(&path).unwrap(), SAMPLE);

    restore_from_head(&path).unwrap();
    assert_eq!(read_text(&path).unwrap(), SAMPLE);
}

#[test]
fn test_rewrite_is_stable_through_disk() {
    let dir = TempDir::new().unwrap();
    let path = write_env(dir.path(), DEFAULT_ENV_FILE, SAMPLE);

    for _ in 0..2 {
        let doc = segment(&read_text(&path).unwrap());
        write_text(&path, &apply(&doc, &target(&["Dev", "Staging"]))).unwrap();
    }
    let first = read_text(&path).unwrap();

    let doc = segment(&first);
    write_text(&path, &apply(&doc, &target(&["Dev", "Staging"]))).unwrap();
    assert_eq!(read_text(&path).unwrap(), first);
}

#[test]
fn test_sample_fixture_round_trips() {
    let text = fs::read_to_string(fixture("sample.env")).unwrap();
    let doc = segment(&text);

    assert_eq!(active_blocks(&doc), target(&["Local"]));
    assert_eq!(apply(&doc, &active_blocks(&doc)), text);
}

#[test]
fn test_sample_fixture_switches_to_production() {
    let text = fs::read_to_string(fixture("sample.env")).unwrap();
    let doc = segment(&text);

    let out = apply(&doc, &target(&["Production"]));
    let reparsed = segment(&out);
    assert_eq!(active_blocks(&reparsed), target(&["Production"]));
    assert!(out.contains("# API_URL=http://localhost:3000"));
    assert!(out.contains("\nAPI_URL=https://api.example.com"));
    // The unnamed leading section is untouched.
    assert!(out.starts_with("DATABASE_URL=postgres://localhost/app\n"));
}

#[test]
fn test_mixed_endings_fixture_survives_switch_cycle() {
    let dir = TempDir::new().unwrap();
    let original = fs::read_to_string(fixture("mixed-endings.env")).unwrap();
    let path = write_env(dir.path(), DEFAULT_ENV_FILE, &original);

    let doc = segment(&read_text(&path).unwrap());
    let before = active_blocks(&doc);
    write_text(&path, &apply(&doc, &target(&["Production"]))).unwrap();

    let doc = segment(&read_text(&path).unwrap());
    write_text(&path, &apply(&doc, &before)).unwrap();

    assert_eq!(read_text(&path).unwrap(), original);
}
