//! Default values for pep-build configuration.
//!
//! This module provides centralized default values used across commands,
//! ensuring consistency and avoiding duplication.

use std::collections::BTreeMap;

/// Name of the optional project configuration file.
pub const CONFIG_FILENAME: &str = ".pep-build.yaml";

/// Generator output directory, relative to the project root.
pub const BUILD_DIR: &str = "build";

/// Generator doctree cache, relative to the build directory.
pub const DOCTREE_DIR: &str = ".doctrees";

/// Documentation generator executable.
pub const GENERATOR: &str = "sphinx-build";

/// Environment variable that overrides the generator executable.
pub const GENERATOR_ENV: &str = "PEP_BUILD_GENERATOR";

/// Public URL of the rendered site.
pub const BASE_URL: &str = "https://peps.python.org";

/// File name of the generated index document.
pub const PEP_ZERO_FILENAME: &str = "pep-0000.rst";

/// Catalog location, relative to the build directory.
pub const CATALOG_PATH: &str = "api/peps.json";

/// Reserved PEP numbers.
///
/// Reservations are for "special" numbers that may be used for semantic,
/// humorous, or other such reasons. They are not part of normal number
/// allocation and need a PEP editor's approval.
pub fn reserved_numbers() -> BTreeMap<u32, String> {
    BTreeMap::from([(801, "Warsaw".to_string())])
}
