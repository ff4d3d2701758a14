//! # PEP 0 Writer
//!
//! Renders the index of all PEPs ("PEP 0") as reStructuredText. The output is
//! itself a PEP source document, so it starts with a standard header block and
//! is rendered by the documentation generator like every other PEP.
//!
//! ## Sections
//!
//! 1. Introduction
//! 2. Index by Category (one table per [`Category`])
//! 3. Numerical Index
//! 4. Reserved PEP Numbers
//! 5. PEP Types Key and PEP Status Key
//! 6. Authors/Owners
//! 7. References

use std::collections::{BTreeMap, BTreeSet, HashMap};

use chrono::NaiveDate;
use log::debug;

use crate::author::{sort_key, Author};
use crate::classify::{classify, Category};
use crate::defaults;
use crate::error::{Error, Result};
use crate::pep::{Pep, PepType, RowFields, Status};

/// Width of the title column.
pub const TITLE_LENGTH: usize = 55;
/// Width of the author column separator.
pub const AUTHOR_LENGTH: usize = 40;

const INTRO: &str = "\
This PEP contains the index of all Python Enhancement Proposals,
known as PEPs.  PEP numbers are assigned by the PEP editors, and
once assigned are never changed [1_].  The version control history [2_] of
the PEP texts represent their historical record.
";

const REFERENCES: &str = "\
.. [1] PEP 1: PEP Purpose and Guidelines
.. [2] View PEP history online: https://github.com/python/peps
";

fn header(today: NaiveDate) -> String {
    format!(
        "\
PEP: 0
Title: Index of Python Enhancement Proposals (PEPs)
Last-Modified: {}
Author: python-dev <python-dev@python.org>
Status: Active
Type: Informational
Content-Type: text/x-rst
Created: 13-Jul-2000
",
        today
    )
}

fn table_separator() -> String {
    format!(
        "== ====  {} {}",
        "=".repeat(TITLE_LENGTH),
        "=".repeat(AUTHOR_LENGTH)
    )
}

fn format_row(fields: &RowFields) -> String {
    format!(
        "{}{}{:>5}  {:<width$} {}",
        fields.type_marker,
        fields.status_marker,
        fields.number,
        fields.title,
        fields.authors,
        width = TITLE_LENGTH
    )
}

/// Accumulates PEP 0 line by line.
#[derive(Debug)]
pub struct PepZeroWriter {
    output: Vec<String>,
    reserved: BTreeMap<u32, String>,
}

impl Default for PepZeroWriter {
    fn default() -> Self {
        Self::new(defaults::reserved_numbers())
    }
}

impl PepZeroWriter {
    /// Create a writer listing the given reserved numbers.
    pub fn new(reserved: BTreeMap<u32, String>) -> Self {
        Self {
            output: Vec::new(),
            reserved,
        }
    }

    fn output(&mut self, content: impl Into<String>) {
        self.output.push(content.into());
    }

    fn emit_newline(&mut self) {
        self.output(String::new());
    }

    fn emit_table_separator(&mut self) {
        self.output(table_separator());
    }

    fn emit_author_table_separator(&mut self, max_name_len: usize) {
        self.output(format!(
            "{}  {}",
            "=".repeat(max_name_len),
            "=".repeat("email address".len())
        ));
    }

    fn emit_column_headers(&mut self) {
        self.emit_table_separator();
        self.output(format_row(&RowFields {
            type_marker: ".".to_string(),
            status_marker: ".".to_string(),
            number: "PEP".to_string(),
            title: "PEP Title".to_string(),
            authors: "PEP Author(s)".to_string(),
        }));
        self.emit_table_separator();
    }

    fn emit_title_with(&mut self, text: &str, anchor: &str, symbol: char) {
        self.output(format!(".. _{}:\n", anchor));
        self.output(text);
        self.output(symbol.to_string().repeat(text.chars().count()));
        self.emit_newline();
    }

    fn emit_title(&mut self, text: &str, anchor: &str) {
        self.emit_title_with(text, anchor, '=');
    }

    fn emit_subtitle(&mut self, text: &str, anchor: &str) {
        self.emit_title_with(text, anchor, '-');
    }

    fn emit_pep_row(&mut self, pep: &Pep) {
        self.output(format_row(&pep.row_fields(TITLE_LENGTH)));
    }

    fn emit_pep_category(&mut self, category: Category, peps: &[&Pep]) {
        self.emit_subtitle(category.title(), category.anchor());
        self.emit_column_headers();
        for pep in peps {
            self.emit_pep_row(pep);
        }
        self.emit_table_separator();
        self.emit_newline();
    }

    /// Render PEP 0 for `peps`, stamped with `today` as its Last-Modified date.
    pub fn write_pep0(&mut self, peps: &[Pep], today: NaiveDate) -> Result<String> {
        if peps.is_empty() {
            return Err(Error::EmptyCorpus { dir: None });
        }
        self.output.clear();
        let mut by_number: Vec<&Pep> = peps.iter().collect();
        by_number.sort();

        // PEP metadata
        self.output(header(today));
        self.emit_newline();

        self.emit_title("Introduction", "intro");
        self.output(INTRO);
        self.emit_newline();

        self.emit_title("Index by Category", "by-category");
        let categories = classify(peps)?;
        for (category, members) in categories.iter() {
            self.emit_pep_category(category, members);
        }
        self.emit_newline();

        self.emit_title("Numerical Index", "by-pep-number");
        self.emit_column_headers();
        let mut prev_pep = 0;
        for pep in &by_number {
            if pep.number.saturating_sub(prev_pep) > 1 {
                self.emit_newline();
            }
            self.emit_pep_row(pep);
            prev_pep = pep.number;
        }
        self.emit_table_separator();
        self.emit_newline();

        self.emit_title("Reserved PEP Numbers", "reserved");
        self.emit_column_headers();
        let reserved: Vec<(u32, String)> = self
            .reserved
            .iter()
            .map(|(number, claimants)| (*number, claimants.clone()))
            .collect();
        for (number, claimants) in reserved {
            self.output(format_row(&RowFields {
                type_marker: ".".to_string(),
                status_marker: ".".to_string(),
                number: number.to_string(),
                title: "RESERVED".to_string(),
                authors: claimants,
            }));
        }
        self.emit_table_separator();
        self.emit_newline();

        self.emit_title("PEP Types Key", "type-key");
        for pep_type in PepType::ALL {
            self.output(format!("    {} - {} PEP", pep_type.initial(), pep_type));
            self.emit_newline();
        }
        self.emit_newline();

        self.emit_title("PEP Status Key", "status-key");
        for status in Status::ALL {
            // Draft has no marker and Active shares the Accepted line
            if status.is_hidden() {
                continue;
            }
            if status == Status::Accepted {
                self.output("    A - Accepted (Standards Track only) or Active proposal");
            } else {
                self.output(format!("    {} - {} proposal", status.initial(), status));
            }
            self.emit_newline();
        }
        self.emit_newline();

        let authors = verify_email_addresses(&by_number)?;
        let max_name_len = authors
            .iter()
            .map(|(author, _)| author.name_width())
            .max()
            .unwrap_or("Name".len());
        self.emit_title("Authors/Owners", "authors");
        self.emit_author_table_separator(max_name_len);
        self.output(format!("{:<width$}  Email Address", "Name", width = max_name_len));
        self.emit_author_table_separator(max_name_len);
        for (author, email) in sort_authors(authors) {
            self.output(format!(
                "{:<width$}  {}",
                author.last_first,
                email,
                width = max_name_len
            ));
        }
        self.emit_author_table_separator(max_name_len);
        self.emit_newline();
        self.emit_newline();

        self.emit_title("References", "references");
        self.output(REFERENCES);

        debug!(
            "Rendered PEP 0: {} PEPs, {} lines",
            peps.len(),
            self.output.len()
        );
        Ok(self.output.join("\n"))
    }
}

/// Collect each author once, with their single email address.
///
/// Authors are returned in order of first citation. An author cited with no
/// email anywhere gets an empty address; one cited with two different
/// addresses is an error.
pub fn verify_email_addresses(peps: &[&Pep]) -> Result<Vec<(Author, String)>> {
    let mut order: Vec<(Author, BTreeSet<String>)> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();

    for pep in peps {
        for author in &pep.authors {
            let slot = match index.get(&author.last_first) {
                Some(&slot) => slot,
                None => {
                    index.insert(author.last_first.clone(), order.len());
                    order.push((author.clone(), BTreeSet::new()));
                    order.len() - 1
                }
            };
            if !author.email.is_empty() {
                order[slot].1.insert(author.email.clone());
            }
        }
    }

    let conflicts: Vec<String> = order
        .iter()
        .filter(|(_, emails)| emails.len() > 1)
        .map(|(author, emails)| {
            let listed: Vec<String> = emails.iter().map(|e| format!("'{}'", e)).collect();
            format!("    {}: {{{}}}", author.last_first, listed.join(", "))
        })
        .collect();
    if !conflicts.is_empty() {
        return Err(Error::EmailConflict { conflicts });
    }

    Ok(order
        .into_iter()
        .map(|(author, emails)| {
            let email = emails.into_iter().next().unwrap_or_default();
            (author, email)
        })
        .collect())
}

/// Order authors for the Authors/Owners table. Ties keep citation order.
pub fn sort_authors(mut authors: Vec<(Author, String)>) -> Vec<(Author, String)> {
    authors.sort_by_cached_key(|(author, _)| sort_key(author));
    authors
}
