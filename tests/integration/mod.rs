//! Integration tests for the linkcard profile configuration crate


mod init_command;
mod profile_loading;

pub use test_utils::with_xdg_env;
