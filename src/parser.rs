//! Reading PEP header blocks.
//!
//! Each PEP source starts with an RFC 822 style header block:
//!
//! ```text
//! PEP: 8
//! Title: Style Guide for Python Code
//! Author: Guido van Rossum <guido@python.org>,
//!         Barry Warsaw <barry@python.org>
//! Status: Active
//! Type: Process
//! ```
//!
//! Only the headers are read; the document body is left to the generator.

use std::path::Path;

use log::trace;

use crate::author::{parse_author_header, Author};
use crate::config::AuthorOverride;
use crate::error::{Error, Result};
use crate::pep::{Pep, PepType, Status};

const REQUIRED_HEADERS: [&str; 5] = ["PEP", "Title", "Status", "Type", "Author"];

/// Header block of a document, in source order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Headers {
    entries: Vec<(String, String)>,
}

impl Headers {
    /// Look up a header value. Names match case-insensitively.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Read `Key: value` lines up to the first blank line. Indented lines
/// continue the previous value.
pub fn parse_headers(text: &str) -> Headers {
    let mut entries: Vec<(String, String)> = Vec::new();

    for line in text.lines() {
        if line.trim().is_empty() {
            break;
        }
        if line.starts_with([' ', '\t']) {
            if let Some((_, value)) = entries.last_mut() {
                let continuation = line.trim();
                if value.is_empty() {
                    value.push_str(continuation);
                } else {
                    value.push(' ');
                    value.push_str(continuation);
                }
            }
            continue;
        }
        match line.split_once(':') {
            Some((key, value)) => entries.push((key.trim().to_string(), value.trim().to_string())),
            None => break,
        }
    }

    Headers { entries }
}

/// Extract the PEP number from a `pep-NNNN` file stem.
pub fn number_from_filename(path: &Path) -> Option<u32> {
    path.file_stem()?
        .to_str()?
        .strip_prefix("pep-")?
        .parse()
        .ok()
}

impl Pep {
    /// Read and parse a PEP source file.
    pub fn from_file(path: &Path, overrides: &[AuthorOverride]) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        let mut pep = Self::from_text(&display_name(path), &text, overrides)?;
        pep.filename = path.to_path_buf();
        Ok(pep)
    }

    /// Parse a PEP from its source text. `filename` is used for the number
    /// cross-check and in error messages.
    pub fn from_text(filename: &str, text: &str, overrides: &[AuthorOverride]) -> Result<Self> {
        let headers = parse_headers(text);
        trace!("{}: {} headers", filename, headers.len());

        let missing: Vec<&str> = REQUIRED_HEADERS
            .into_iter()
            .filter(|name| headers.get(name).is_none())
            .collect();
        if !missing.is_empty() {
            return Err(Error::pep(
                filename,
                None,
                format!("PEP is missing required headers: {}", missing.join(", ")),
            ));
        }
        let header = |name: &str| headers.get(name).unwrap_or_default();

        let number: u32 = header("PEP")
            .parse()
            .map_err(|_| Error::pep(filename, None, "PEP number isn't an integer"))?;
        if number_from_filename(Path::new(filename)) != Some(number) {
            return Err(Error::pep(
                filename,
                Some(number),
                "PEP number does not match file name",
            ));
        }

        let status: Status = header("Status")
            .parse()
            .map_err(|message: String| Error::pep(filename, Some(number), message))?;
        let pep_type: PepType = header("Type")
            .parse()
            .map_err(|message: String| Error::pep(filename, Some(number), message))?;

        if status == Status::Active && !pep_type.allows_active() {
            return Err(Error::pep(
                filename,
                Some(number),
                "Only Process and Informational PEPs may have an Active status",
            ));
        }
        if status == Status::Provisional && pep_type != PepType::StandardsTrack {
            return Err(Error::pep(
                filename,
                Some(number),
                "Only Standards Track PEPs may have a Provisional status",
            ));
        }

        let cited = parse_author_header(header("Author"));
        if cited.is_empty() {
            return Err(Error::pep(filename, Some(number), "no authors found"));
        }
        let authors = cited
            .iter()
            .map(|(name, email)| {
                Author::parse(name, email, overrides)
                    .map_err(|e| Error::pep(filename, Some(number), e.to_string()))
            })
            .collect::<Result<Vec<_>>>()?;

        let optional = |name: &str| headers.get(name).map(str::to_string);

        Ok(Self {
            number,
            title: header("Title").to_string(),
            status,
            pep_type,
            authors,
            filename: filename.into(),
            discussions_to: optional("Discussions-To"),
            created: optional("Created"),
            python_version: optional("Python-Version"),
            post_history: optional("Post-History"),
            resolution: optional("Resolution"),
            requires: optional("Requires"),
            replaces: optional("Replaces"),
            superseded_by: optional("Superseded-By"),
        })
    }
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    const PEP_8: &str = "\
PEP: 8
Title: Style Guide for Python Code
Author: Guido van Rossum <guido@python.org>,
        Barry Warsaw <barry@python.org>
Status: Active
Type: Process
Created: 05-Jul-2001
Post-History: 05-Jul-2001, 01-Aug-2013

Introduction
============

Status: this line is body text, not a header.
";

    #[test]
    fn test_parse_headers_folds_continuations() {
        let headers = parse_headers(PEP_8);
        assert_eq!(headers.len(), 7);
        assert_eq!(
            headers.get("author"),
            Some("Guido van Rossum <guido@python.org>, Barry Warsaw <barry@python.org>")
        );
        assert_eq!(headers.get("Status"), Some("Active"));
    }

    #[test]
    fn test_number_from_filename() {
        assert_eq!(number_from_filename(Path::new("pep-0008.rst")), Some(8));
        assert_eq!(number_from_filename(Path::new("peps/pep-3000.txt")), Some(3000));
        assert_eq!(number_from_filename(Path::new("README.rst")), None);
    }

    #[test]
    fn test_from_text_full_header() {
        let pep = Pep::from_text("pep-0008.rst", PEP_8, &[]).unwrap();
        assert_eq!(pep.number, 8);
        assert_eq!(pep.title, "Style Guide for Python Code");
        assert_eq!(pep.status, Status::Active);
        assert_eq!(pep.pep_type, PepType::Process);
        assert_eq!(pep.authors.len(), 2);
        assert_eq!(pep.authors[0].last_first, "van Rossum, Guido");
        assert_eq!(pep.authors[1].email, "barry@python.org");
        assert_eq!(pep.created.as_deref(), Some("05-Jul-2001"));
        assert_eq!(pep.resolution, None);
    }

    #[test]
    fn test_from_text_number_mismatch() {
        let err = Pep::from_text("pep-0009.rst", PEP_8, &[]).unwrap_err();
        assert_eq!(
            err.to_string(),
            "[pep-0009.rst] PEP 8: PEP number does not match file name"
        );
    }

    #[test]
    fn test_from_text_missing_headers() {
        let err = Pep::from_text("pep-0001.rst", "PEP: 1\nTitle: Purpose\n", &[]).unwrap_err();
        let display = err.to_string();
        assert!(display.contains("missing required headers"));
        assert!(display.contains("Status, Type, Author"));
    }

    #[test]
    fn test_from_text_non_integer_number() {
        let text = "PEP: eight\nTitle: T\nAuthor: A B\nStatus: Draft\nType: Process\n";
        let err = Pep::from_text("pep-0008.rst", text, &[]).unwrap_err();
        assert!(err.to_string().contains("PEP number isn't an integer"));
    }

    #[test]
    fn test_from_text_unknown_status() {
        let text = "PEP: 8\nTitle: T\nAuthor: A B\nStatus: Done\nType: Process\n";
        let err = Pep::from_text("pep-0008.rst", text, &[]).unwrap_err();
        assert!(err.to_string().contains("Done is not a valid Status value"));
    }

    #[test]
    fn test_from_text_active_standards_track_rejected() {
        let text = "PEP: 8\nTitle: T\nAuthor: A B\nStatus: Active\nType: Standards Track\n";
        let err = Pep::from_text("pep-0008.rst", text, &[]).unwrap_err();
        assert!(err.to_string().contains("may have an Active status"));
    }

    #[test]
    fn test_from_text_provisional_process_rejected() {
        let text = "PEP: 8\nTitle: T\nAuthor: A B\nStatus: Provisional\nType: Process\n";
        let err = Pep::from_text("pep-0008.rst", text, &[]).unwrap_err();
        assert!(err.to_string().contains("may have a Provisional status"));
    }

    #[test]
    fn test_from_text_april_fool_is_rejected() {
        let text = "PEP: 401\nTitle: BDFL Retirement\nAuthor: Barry Warsaw, Brett Cannon\nStatus: April Fool!\nType: Process\n";
        let pep = Pep::from_text("pep-0401.txt", text, &[]).unwrap();
        assert_eq!(pep.status, Status::Rejected);
        assert_eq!(pep.author_nicks(), "Warsaw, Cannon");
    }

    #[test]
    fn test_from_file_keeps_path() {
        let temp = tempfile::TempDir::new().unwrap();
        let path = temp.path().join("pep-0008.rst");
        std::fs::write(&path, PEP_8).unwrap();
        let pep = Pep::from_file(&path, &[]).unwrap();
        assert_eq!(pep.filename, path);
    }
}
