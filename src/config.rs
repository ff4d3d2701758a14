//! # Project Configuration
//!
//! This module defines the optional `.pep-build.yaml` file that sits at the
//! root of the PEP repository, and the logic for loading it.
//!
//! ## Example
//!
//! ```yaml
//! source_dir: .
//! build_dir: build
//! generator: sphinx-build
//! base_url: https://peps.python.org
//! author_overrides:
//!   - name: Guido van Rossum
//!     surname_first: van Rossum, Guido (GvR)
//!     name_reference: GvR
//! reserved:
//!   801: Warsaw
//! ```
//!
//! Every key is optional. A repository without the file uses
//! [`Config::default`].

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use log::debug;
use serde::{Deserialize, Serialize};

use crate::defaults;
use crate::error::{Error, Result};

/// Fixed display names for an author whose name the heuristics split wrongly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AuthorOverride {
    /// The name exactly as cited in `Author:` headers.
    pub name: String,
    /// Replacement for the `Surname, Forename` form.
    pub surname_first: String,
    /// Replacement for the short name shown in index rows.
    pub name_reference: String,
}

/// Settings read from `.pep-build.yaml`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Directory holding the `pep-NNNN.rst` sources, relative to the root.
    pub source_dir: PathBuf,
    /// Output directory for the generator, relative to the root.
    pub build_dir: PathBuf,
    /// Documentation generator executable.
    pub generator: String,
    /// Public site URL, used for catalog links.
    pub base_url: String,
    pub author_overrides: Vec<AuthorOverride>,
    /// Reserved PEP numbers and who claimed them.
    pub reserved: BTreeMap<u32, String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            source_dir: PathBuf::from("."),
            build_dir: PathBuf::from(defaults::BUILD_DIR),
            generator: defaults::GENERATOR.to_string(),
            base_url: defaults::BASE_URL.to_string(),
            author_overrides: Vec::new(),
            reserved: defaults::reserved_numbers(),
        }
    }
}

impl Config {
    /// Absolute source directory for a project rooted at `root`.
    pub fn source_path(&self, root: &Path) -> PathBuf {
        root.join(&self.source_dir)
    }

    /// Absolute build directory for a project rooted at `root`.
    pub fn build_path(&self, root: &Path) -> PathBuf {
        root.join(&self.build_dir)
    }
}

/// Parse a configuration from YAML text.
pub fn parse(yaml: &str) -> Result<Config> {
    if yaml.trim().is_empty() {
        return Ok(Config::default());
    }
    serde_yaml::from_str(yaml).map_err(|e| Error::ConfigParse {
        message: e.to_string(),
        hint: hint_for(&e),
    })
}

fn hint_for(error: &serde_yaml::Error) -> Option<String> {
    let message = error.to_string();
    if message.contains("unknown field") {
        Some(
            "valid keys are source_dir, build_dir, generator, base_url, author_overrides, reserved"
                .to_string(),
        )
    } else if message.contains("author_overrides") {
        Some("each override needs name, surname_first and name_reference".to_string())
    } else {
        None
    }
}

/// Load the configuration at `path`, falling back to defaults when the file
/// does not exist.
pub fn load(path: &Path) -> Result<Config> {
    if !path.exists() {
        debug!("No configuration at {}, using defaults", path.display());
        return Ok(Config::default());
    }
    debug!("Loading configuration from {}", path.display());
    let content = std::fs::read_to_string(path)?;
    parse(&content)
}
