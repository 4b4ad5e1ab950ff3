//! Linkcard: Typed Personal Profile Card
//!
//! A strongly-typed profile card (avatar, display name, bio, and an ordered
//! list of outbound links) loaded once from layered TOML configuration and
//! read for the rest of the process lifetime.

pub mod cli;
pub mod config;
pub mod error;
pub mod init;
pub mod logging;
pub mod profile;
pub mod views;
