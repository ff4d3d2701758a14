//! # PEP Build Library
//!
//! This library drives the build of the PEP documentation site and generates
//! PEP 0, the index of all PEPs. It is used by the `pep-build` command-line
//! tool.
//!
//! ## Quick Example
//!
//! ```
//! use chrono::NaiveDate;
//! use pep_build::pep::Pep;
//! use pep_build::writer::PepZeroWriter;
//!
//! let source = "\
//! PEP: 8
//! Title: Style Guide for Python Code
//! Author: Guido van Rossum <guido@python.org>, Barry Warsaw <barry@python.org>
//! Status: Active
//! Type: Process
//! ";
//! let pep = Pep::from_text("pep-0008.rst", source, &[]).unwrap();
//! assert_eq!(pep.author_nicks(), "van Rossum, Warsaw");
//!
//! let today = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
//! let pep0 = PepZeroWriter::default().write_pep0(&[pep], today).unwrap();
//! assert!(pep0.contains("Meta-PEPs (PEPs about PEPs or Processes)"));
//! ```
//!
//! ## Core Concepts
//!
//! - **Records (`pep`, `author`)**: typed PEP headers and author names.
//! - **Reading (`parser`, `corpus`)**: header block parsing and discovery of
//!   `pep-NNNN.rst` sources.
//! - **Index (`classify`, `writer`)**: category assignment and the PEP 0
//!   reStructuredText document.
//! - **Catalog (`api`)**: the machine-readable `peps.json`.
//! - **Build (`builder`)**: runs the external documentation generator.
//! - **Configuration (`config`, `defaults`)**: the optional `.pep-build.yaml`.

pub mod api;
pub mod author;
pub mod builder;
pub mod classify;
pub mod config;
pub mod corpus;
pub mod defaults;
pub mod error;
pub mod output;
pub mod parser;
pub mod pep;
pub mod writer;

#[cfg(test)]
mod author_proptest;
