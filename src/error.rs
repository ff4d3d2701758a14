//! # Error Handling
//!
//! This module defines the centralized error type for the `pep-build`
//! library. It uses `thiserror` to describe every failure the index generator
//! and the build driver can report, with enough context (file name, PEP
//! number, offending author) for an editor to fix the source document.
//!
//! ## Key Components
//!
//! - **`Error`**: The enum of all failures. Malformed PEP headers, PEPs that
//!   fit no index category, and authors cited with conflicting email addresses
//!   each have their own variant.
//!
//! - **`Result<T>`**: A type alias for `std::result::Result<T, Error>`.

use std::path::PathBuf;

use thiserror::Error;

/// Main error type for pep-build operations
#[derive(Error, Debug)]
pub enum Error {
    /// A PEP source file has a malformed or inconsistent header block.
    ///
    /// Renders as `[filename] PEP n: message`, omitting the PEP part when the
    /// number could not be determined.
    #[error("[{filename}] {}{message}", number.map(|n| format!("PEP {}: ", n)).unwrap_or_default())]
    Pep {
        filename: String,
        number: Option<u32>,
        message: String,
    },

    /// An author name could not be decomposed.
    #[error("Author name error: {message}")]
    AuthorName { message: String },

    /// One or more authors are cited with more than one email address.
    #[error("some authors have more than one email address listed:\n{}", conflicts.join("\n"))]
    EmailConflict {
        /// Preformatted `    Surname, Forename: {'a', 'b'}` lines
        conflicts: Vec<String>,
    },

    /// No PEP source documents were found. `dir` is the searched directory,
    /// when known.
    #[error("No PEP documents found{}", dir.as_ref().map(|d| format!(" in {}", d.display())).unwrap_or_default())]
    EmptyCorpus { dir: Option<PathBuf> },

    /// The configuration file could not be parsed.
    #[error("Configuration parsing error: {message}{}", hint.as_ref().map(|h| format!("\n  hint: {}", h)).unwrap_or_default())]
    ConfigParse {
        message: String,
        /// Optional hint for how to fix the configuration issue
        hint: Option<String>,
    },

    /// The documentation generator could not be started.
    #[error("Failed to run documentation generator '{program}': {message}")]
    GeneratorSpawn { program: String, message: String },

    /// The documentation generator ran and reported failure.
    #[error("Documentation generator '{program}' failed with {status}")]
    GeneratorFailed { program: String, status: String },

    /// An I/O error, wrapped from `std::io::Error`.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A YAML parsing error, wrapped from `serde_yaml::Error`.
    #[error("YAML parsing error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// A JSON serialization error, wrapped from `serde_json::Error`.
    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    /// A directory traversal error, wrapped from `walkdir::Error`.
    #[error("Directory walk error: {0}")]
    Walk(#[from] walkdir::Error),
}

impl Error {
    /// Build a [`Error::Pep`] for the given source file.
    pub fn pep(filename: impl Into<String>, number: Option<u32>, message: impl Into<String>) -> Self {
        Error::Pep {
            filename: filename.into(),
            number,
            message: message.into(),
        }
    }
}

/// A convenient type alias for `Result<T, Error>`.
pub type Result<T> = std::result::Result<T, Error>;
