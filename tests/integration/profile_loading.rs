//! Integration tests for layered profile loading

use linkcard::config::{ConfigLoader, LinkcardConfig};
use linkcard::profile::default_card;
use tempfile::TempDir;

use crate::integration::test_utils::write_global_config;
use crate::integration::with_xdg_env;

#[test]
fn test_load_without_any_files_yields_the_builtin_card() {
    let test_dir = TempDir::new().unwrap();
    with_xdg_env(&test_dir, || {
        let workspace = test_dir.path().join("workspace");
        std::fs::create_dir_all(&workspace).unwrap();

        let config = ConfigLoader::load(&workspace).unwrap();
        assert_eq!(config.profile, default_card());
        assert!(config.validate().is_ok());
    });
}

#[test]
fn test_global_config_overrides_builtin_card() {
    let test_dir = TempDir::new().unwrap();
    with_xdg_env(&test_dir, || {
        let home = test_dir.path().join("home");
        write_global_config(
            &home,
            r#"
[profile]
name = "global-name"
bio = "Written from the global file."
"#,
        );

        let workspace = test_dir.path().join("workspace");
        std::fs::create_dir_all(&workspace).unwrap();

        let config = ConfigLoader::load(&workspace).unwrap();
        assert_eq!(config.profile.name, "global-name");
        assert_eq!(config.profile.bio, "Written from the global file.");
        // The global file did not touch the link list
        assert_eq!(config.profile.links.len(), 4);
    });
}

#[test]
fn test_workspace_file_overrides_global_file() {
    let test_dir = TempDir::new().unwrap();
    with_xdg_env(&test_dir, || {
        let home = test_dir.path().join("home");
        write_global_config(
            &home,
            r#"
[profile]
name = "global-name"
"#,
        );

        let workspace = test_dir.path().join("workspace");
        let workspace_config = workspace.join("config");
        std::fs::create_dir_all(&workspace_config).unwrap();
        std::fs::write(
            workspace_config.join("profile.toml"),
            r#"
[profile]
name = "workspace-name"

[[profile.links]]
name = "Fediverse"
icon = "simple-icons:mastodon"
url = "https://example.social/@someone"
show_name = true
"#,
        )
        .unwrap();

        let config = ConfigLoader::load(&workspace).unwrap();
        assert_eq!(config.profile.name, "workspace-name");
        // The workspace link list replaces the built-in one wholesale
        assert_eq!(config.profile.links.len(), 1);
        assert!(config.profile.links[0].show_name);
    });
}

#[test]
fn test_environment_overrides_every_file_layer() {
    let test_dir = TempDir::new().unwrap();
    with_xdg_env(&test_dir, || {
        let workspace = test_dir.path().join("workspace");
        let workspace_config = workspace.join("config");
        std::fs::create_dir_all(&workspace_config).unwrap();
        std::fs::write(
            workspace_config.join("profile.toml"),
            r#"
[profile]
name = "workspace-name"
"#,
        )
        .unwrap();

        std::env::set_var("LINKCARD__PROFILE__NAME", "env-name");
        let config = ConfigLoader::load(&workspace);
        std::env::remove_var("LINKCARD__PROFILE__NAME");

        assert_eq!(config.unwrap().profile.name, "env-name");
    });
}

#[test]
fn test_env_specific_workspace_file_wins_over_base_file() {
    let test_dir = TempDir::new().unwrap();
    with_xdg_env(&test_dir, || {
        let workspace = test_dir.path().join("workspace");
        let workspace_config = workspace.join("config");
        std::fs::create_dir_all(&workspace_config).unwrap();
        std::fs::write(
            workspace_config.join("profile.toml"),
            r#"
[profile]
bio = "base bio"
"#,
        )
        .unwrap();
        std::fs::write(
            workspace_config.join("development.toml"),
            r#"
[profile]
bio = "development bio"
"#,
        )
        .unwrap();

        let config = ConfigLoader::load(&workspace).unwrap();
        assert_eq!(config.profile.bio, "development bio");
    });
}

#[test]
fn test_single_file_load_rejects_a_missing_file() {
    let test_dir = TempDir::new().unwrap();
    let missing = test_dir.path().join("does_not_exist.toml");
    assert!(ConfigLoader::load_from_file(&missing).is_err());
}

#[test]
fn test_loaded_card_deep_equals_across_repeated_loads() {
    let test_dir = TempDir::new().unwrap();
    with_xdg_env(&test_dir, || {
        let workspace = test_dir.path().join("workspace");
        std::fs::create_dir_all(&workspace).unwrap();

        let first: LinkcardConfig = ConfigLoader::load(&workspace).unwrap();
        let second: LinkcardConfig = ConfigLoader::load(&workspace).unwrap();
        assert_eq!(first, second);
    });
}
