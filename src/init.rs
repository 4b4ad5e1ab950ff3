//! Workspace initialization: writes a commented starter profile file.

use crate::error::CardError;
use crate::profile::{default_card, ProfileConfig};
use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing::info;

/// Outcome of an init run.
#[derive(Debug, Clone, Default)]
pub struct InitSummary {
    pub created: Vec<String>,
    pub skipped: Vec<String>,
}

/// Authoring header for the starter file: which icon sets ship
/// preinstalled, where to look up icon codes, and what `show_name`
/// controls.
const STARTER_HEADER: &str = "\
# Profile card configuration.
#
# Preinstalled icon sets: fa6-brands, fa6-regular, fa6-solid,
# material-symbols, simple-icons. Browse https://icones.js.org/ for icon
# codes; icons from other sets must be added to the icon catalog before
# the renderer can resolve them.
#
# show_name = true draws the icon and the label, false draws the icon only.

";

#[derive(Serialize)]
struct StarterFile<'a> {
    profile: &'a ProfileConfig,
}

/// Path of the workspace starter file.
pub fn starter_path(workspace_root: &Path) -> PathBuf {
    workspace_root.join("config").join("profile.toml")
}

/// Render the starter file contents: authoring header plus the built-in
/// card serialized as TOML.
pub fn starter_contents() -> Result<String, CardError> {
    let card = default_card();
    let body = toml::to_string_pretty(&StarterFile { profile: &card })?;
    Ok(format!("{}{}", STARTER_HEADER, body))
}

/// Write the starter profile file into the workspace. An existing file is
/// left alone unless `force` is set.
pub fn initialize_profile(workspace_root: &Path, force: bool) -> Result<InitSummary, CardError> {
    let mut summary = InitSummary::default();
    let target = starter_path(workspace_root);

    if target.exists() && !force {
        summary.skipped.push(target.display().to_string());
        return Ok(summary);
    }

    if let Some(parent) = target.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(&target, starter_contents()?)?;
    info!(path = %target.display(), "Wrote starter profile");

    summary.created.push(target.display().to_string());
    Ok(summary)
}
