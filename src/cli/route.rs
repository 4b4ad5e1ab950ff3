//! CLI route: single route table and run context. Dispatches to library
//! calls and presentation.

use crate::cli::parse::Commands;
use crate::cli::presentation::{
    format_card_json, format_card_text, format_init_preview, format_init_summary,
    format_links_json, format_links_text, format_validate_json, format_validate_text,
};
use crate::config::{ConfigLoader, LinkcardConfig};
use crate::error::CardError;
use crate::init;
use crate::views;
use dialoguer::Confirm;
use std::path::PathBuf;

/// Runtime context for CLI execution: workspace root and the loaded,
/// immutable configuration. Built from workspace path and optional config
/// path using ConfigLoader only.
pub struct RunContext {
    config: LinkcardConfig,
    workspace_root: PathBuf,
}

impl RunContext {
    /// Create run context from workspace root and optional config path.
    pub fn new(workspace_root: PathBuf, config_path: Option<PathBuf>) -> Result<Self, CardError> {
        let config = if let Some(ref cfg_path) = config_path {
            ConfigLoader::load_from_file(cfg_path)?
        } else {
            ConfigLoader::load(&workspace_root)?
        };
        Ok(Self {
            config,
            workspace_root,
        })
    }

    /// Loaded configuration.
    pub fn config(&self) -> &LinkcardConfig {
        &self.config
    }

    /// Execute a parsed command and return its rendered output.
    pub fn execute(&self, command: &Commands) -> Result<String, CardError> {
        match command {
            Commands::Show { format } => {
                let card = &self.config.profile;
                if format == "json" {
                    Ok(format_card_json(card))
                } else {
                    Ok(format_card_text(card))
                }
            }
            Commands::Links { format } => {
                let items = views::link_views(&self.config.profile);
                if format == "json" {
                    Ok(format_links_json(&items))
                } else {
                    Ok(format_links_text(&items))
                }
            }
            Commands::Validate { format } => match self.config.validate() {
                Ok(()) => Ok(if format == "json" {
                    format_validate_json(&[])
                } else {
                    format_validate_text(&[])
                }),
                // Report goes through the error path so the process exits
                // non-zero on an invalid card.
                Err(errors) => Err(CardError::Validation(if format == "json" {
                    format_validate_json(&errors)
                } else {
                    format_validate_text(&errors)
                })),
            },
            Commands::Init { force, list } => {
                let target = init::starter_path(&self.workspace_root);
                if *list {
                    return Ok(format_init_preview(&target, &init::starter_contents()?));
                }

                let mut force = *force;
                if target.exists() && !force {
                    let overwrite = Confirm::new()
                        .with_prompt(format!("{} already exists. Overwrite?", target.display()))
                        .default(false)
                        .interact()
                        .unwrap_or(false);
                    if !overwrite {
                        return Ok(format!(
                            "Skipped {} (already exists, use --force to overwrite)",
                            target.display()
                        ));
                    }
                    force = true;
                }

                let summary = init::initialize_profile(&self.workspace_root, force)?;
                Ok(format_init_summary(&summary))
            }
        }
    }
}
