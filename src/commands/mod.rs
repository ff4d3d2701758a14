//! # CLI Command Implementations
//!
//! Each subcommand of `pep-build` lives in its own file with:
//! - an `Args` struct that defines the command-specific arguments and options,
//!   derived using `clap`;
//! - an `execute` function that takes the parsed `Args` and performs the
//!   command's logic by calling into the `pep_build` library.

pub mod build;
pub mod completions;
pub mod index;
pub mod validate;

use std::path::PathBuf;

use anyhow::{Context as _, Result};
use chrono::{Local, NaiveDate};

use pep_build::config::{self, Config};
use pep_build::defaults::CONFIG_FILENAME;
use pep_build::output::OutputConfig;

/// Global options shared by every command.
#[derive(Debug, Clone)]
pub struct Context {
    /// Value of the global --color flag
    pub color: String,
    pub root: PathBuf,
    /// Explicit --config path, if given
    pub config_path: Option<PathBuf>,
}

impl Context {
    pub fn output(&self) -> OutputConfig {
        OutputConfig::from_env_and_flag(&self.color)
    }

    pub fn config_file(&self) -> PathBuf {
        self.config_path
            .clone()
            .unwrap_or_else(|| self.root.join(CONFIG_FILENAME))
    }

    /// Load the project configuration.
    pub fn load_config(&self) -> Result<Config> {
        let path = self.config_file();
        if self.config_path.is_some() && !path.exists() {
            anyhow::bail!("Configuration file not found: {}", path.display());
        }
        config::load(&path).with_context(|| format!("Failed to load {}", path.display()))
    }
}

/// Date stamped into PEP 0.
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}
