//! Integration tests for workspace initialization

use linkcard::config::{ConfigLoader, LinkcardConfig};
use linkcard::init;
use linkcard::profile::default_card;
use tempfile::TempDir;

use crate::integration::with_xdg_env;

#[test]
fn test_init_creates_the_starter_file() {
    let test_dir = TempDir::new().unwrap();
    let workspace = test_dir.path();

    let summary = init::initialize_profile(workspace, false).unwrap();

    assert_eq!(summary.created.len(), 1);
    assert!(summary.skipped.is_empty());

    let target = init::starter_path(workspace);
    assert!(target.exists());

    let contents = std::fs::read_to_string(&target).unwrap();
    let parsed: LinkcardConfig = toml::from_str(&contents).unwrap();
    assert_eq!(parsed.profile, default_card());
}

#[test]
fn test_init_skips_an_existing_file_without_force() {
    let test_dir = TempDir::new().unwrap();
    let workspace = test_dir.path();

    init::initialize_profile(workspace, false).unwrap();

    let target = init::starter_path(workspace);
    std::fs::write(&target, "[profile]\nname = \"edited\"\n").unwrap();

    let summary = init::initialize_profile(workspace, false).unwrap();
    assert!(summary.created.is_empty());
    assert_eq!(summary.skipped.len(), 1);

    // The edited file is untouched
    let contents = std::fs::read_to_string(&target).unwrap();
    assert!(contents.contains("edited"));
}

#[test]
fn test_init_force_overwrites_an_existing_file() {
    let test_dir = TempDir::new().unwrap();
    let workspace = test_dir.path();

    init::initialize_profile(workspace, false).unwrap();
    let target = init::starter_path(workspace);
    std::fs::write(&target, "[profile]\nname = \"edited\"\n").unwrap();

    let summary = init::initialize_profile(workspace, true).unwrap();
    assert_eq!(summary.created.len(), 1);

    let contents = std::fs::read_to_string(&target).unwrap();
    let parsed: LinkcardConfig = toml::from_str(&contents).unwrap();
    assert_eq!(parsed.profile.name, "kakadou");
}

#[test]
fn test_initialized_workspace_loads_back_as_the_default_card() {
    let test_dir = TempDir::new().unwrap();
    with_xdg_env(&test_dir, || {
        let workspace = test_dir.path().join("workspace");
        std::fs::create_dir_all(&workspace).unwrap();

        init::initialize_profile(&workspace, false).unwrap();

        let config = ConfigLoader::load(&workspace).unwrap();
        assert_eq!(config.profile, default_card());
    });
}
