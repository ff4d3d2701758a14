//! Shared test utilities for integration and E2E tests.
//!
//! This module provides a fixture PEP repository and canned PEP sources so
//! that each test file only describes what it checks.
//!
//! ## Usage
//!
//! ```rust,ignore
//! mod common;
//! use common::prelude::*;
//!
//! #[test]
//! fn test_example() {
//!     let fixture = TestFixture::new().with_sample_corpus();
//!     fixture.command().arg("validate").assert().success();
//! }
//! ```

use assert_fs::prelude::*;
use std::path::Path;

/// Re-export commonly used test dependencies for convenience.
pub mod prelude {
    pub use assert_cmd::cargo::cargo_bin_cmd;
    pub use assert_fs::prelude::*;
    #[allow(unused_imports)]
    pub use assert_fs::TempDir;
    pub use predicates::prelude::*;

    #[allow(unused_imports)]
    pub use super::peps;
    pub use super::TestFixture;
}

/// Canned PEP sources.
#[allow(dead_code)]
pub mod peps {
    pub const PEP_1: &str = "\
PEP: 1
Title: PEP Purpose and Guidelines
Author: Barry Warsaw <barry@python.org>, Jeremy Hylton <jeremy@alum.mit.edu>,
        David Goodger <goodger@python.org>, Alyssa Coghlan <ncoghlan@gmail.com>
Status: Active
Type: Process
Created: 13-Jun-2000
Post-History: 21-Mar-2001, 29-Jul-2002

What is a PEP?
==============
";

    pub const PEP_8: &str = "\
PEP: 8
Title: Style Guide for Python Code
Author: Guido van Rossum <guido@python.org>,
        Barry Warsaw <barry@python.org>,
        Alyssa Coghlan <ncoghlan@gmail.com>
Status: Active
Type: Process
Created: 05-Jul-2001

Introduction
============
";

    pub const PEP_20: &str = "\
PEP: 20
Title: The Zen of Python
Author: Tim Peters <tim.peters@gmail.com>
Status: Active
Type: Informational
Content-Type: text/x-rst
Created: 19-Aug-2004

Abstract
========
";

    pub const PEP_373: &str = "\
PEP: 373
Title: Python 2.7 Release Schedule
Author: Benjamin Peterson <benjamin@python.org>
Status: Final
Type: Informational
Created: 03-Nov-2008
";

    pub const PEP_484: &str = "\
PEP: 484
Title: Type Hints
Author: Guido van Rossum <guido@python.org>, Jukka Lehtosalo <jukka.lehtosalo@iki.fi>,
        Łukasz Langa <lukasz@python.org>
Status: Final
Type: Standards Track
Python-Version: 3.5
Created: 29-Sep-2014
Resolution: https://mail.python.org/pipermail/python-dev/2015-May/140104.html
";

    pub const PEP_3099: &str = "\
PEP: 3099
Title: Things that will Not Change in Python 3000
Author: Georg Brandl <georg@python.org>
Status: Final
Type: Process
Created: 04-Apr-2006
";

    pub const PEP_9999_DRAFT: &str = "\
PEP: 9999
Title: An Open Proposal
Author: Jane Q. Public
Status: Draft
Type: Standards Track
Created: 01-Jan-2024
";

    /// A PEP whose header block is missing its Status.
    pub const BROKEN: &str = "\
PEP: 12
Title: Sample reStructuredText PEP Template
Author: David Goodger <goodger@python.org>
Type: Process
";

    /// Cites Guido with an address that conflicts with PEP_8 and PEP_484.
    pub const CONFLICTING_EMAIL: &str = "\
PEP: 13
Title: Python Language Governance
Author: Guido van Rossum <guido@example.com>
Status: Active
Type: Process
";
}

/// A test fixture that provides a temporary PEP repository.
///
/// # Example
///
/// ```rust,ignore
/// let fixture = TestFixture::new()
///     .with_pep(8, peps::PEP_8)
///     .with_file(".pep-build.yaml", "build_dir: _site\n");
///
/// fixture.command().arg("index").assert().success();
/// ```
pub struct TestFixture {
    temp_dir: assert_fs::TempDir,
}

#[allow(dead_code)]
impl TestFixture {
    /// Create a new test fixture with an empty temporary directory.
    pub fn new() -> Self {
        Self {
            temp_dir: assert_fs::TempDir::new().expect("Failed to create temp directory"),
        }
    }

    /// Add `pep-NNNN.rst` with the given source.
    pub fn with_pep(self, number: u32, source: &str) -> Self {
        self.with_file(&format!("pep-{:04}.rst", number), source)
    }

    /// Add a small corpus spread over several index sections.
    pub fn with_sample_corpus(self) -> Self {
        self.with_pep(1, peps::PEP_1)
            .with_pep(8, peps::PEP_8)
            .with_pep(20, peps::PEP_20)
            .with_pep(373, peps::PEP_373)
            .with_pep(484, peps::PEP_484)
            .with_pep(3099, peps::PEP_3099)
            .with_pep(9999, peps::PEP_9999_DRAFT)
    }

    /// Add a `.pep-build.yaml` configuration file.
    pub fn with_config(self, content: &str) -> Self {
        self.with_file(".pep-build.yaml", content)
    }

    /// Add a file with the given path and content.
    pub fn with_file(self, path: &str, content: &str) -> Self {
        self.temp_dir
            .child(path)
            .write_str(content)
            .expect("Failed to write file");
        self
    }

    /// Get the path to the temporary directory.
    pub fn path(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Create a child path in the temp directory.
    pub fn child(&self, path: &str) -> assert_fs::fixture::ChildPath {
        self.temp_dir.child(path)
    }

    /// Read a file from the fixture.
    pub fn read(&self, path: &str) -> String {
        std::fs::read_to_string(self.path().join(path)).expect("Failed to read file")
    }

    /// Create a command configured to run in this fixture's directory.
    pub fn command(&self) -> assert_cmd::Command {
        let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("pep-build");
        cmd.current_dir(self.path())
            .env("NO_COLOR", "1")
            .env_remove("PEP_BUILD_GENERATOR");
        cmd
    }
}

impl Default for TestFixture {
    fn default() -> Self {
        Self::new()
    }
}
