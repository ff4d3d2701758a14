//! # Author Names
//!
//! PEP headers cite authors as free-form display names, optionally with an
//! email address. The index needs two derived forms of each name:
//!
//! - **`last_first`**: `Surname, Forename[, Suffix]`, used as the author's
//!   identity and printed in the Authors/Owners table.
//! - **`nick`**: the surname alone, printed in index rows.
//!
//! Names that the heuristics in [`parse_name`] get wrong can be pinned with an
//! [`AuthorOverride`] from the configuration file.

use std::hash::{Hash, Hasher};
use std::sync::LazyLock;

use regex::Regex;
use unicode_normalization::UnicodeNormalization;

use crate::config::AuthorOverride;
use crate::error::{Error, Result};

const NAME_SUFFIXES: [&str; 4] = ["Jr", "Jr.", "II", "III"];

static ANGLED: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?P<author>.+?) <(?P<email>.+?)>(,\s*)?").unwrap());
static PAREN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?P<email>.+?) \((?P<author>.+?)\)(,\s*)?").unwrap());
static SIMPLE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?P<author>[^,]+)(,\s*)?").unwrap());

/// A PEP author. Two authors are the same person when their `last_first`
/// forms match.
#[derive(Debug, Clone)]
pub struct Author {
    pub last_first: String,
    pub nick: String,
    /// Lowercased email address, empty when none was cited
    pub email: String,
    /// Name exactly as cited in the header
    pub full_name: String,
}

impl PartialEq for Author {
    fn eq(&self, other: &Self) -> bool {
        self.last_first == other.last_first
    }
}

impl Eq for Author {}

impl Hash for Author {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.last_first.hash(state);
    }
}

/// A display name split into its parts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NameParts {
    pub forename: String,
    pub surname: String,
    pub suffix: String,
    /// Set when the name is a single word, such as `Aahz`
    pub mononym: Option<String>,
}

impl Author {
    /// Build an author from a cited name and email.
    pub fn parse(name: &str, email: &str, overrides: &[AuthorOverride]) -> Result<Self> {
        let name = name.trim();
        let email = email.trim().to_lowercase();

        if let Some(entry) = overrides.iter().find(|entry| entry.name == name) {
            return Ok(Self {
                last_first: entry.surname_first.clone(),
                nick: entry.name_reference.clone(),
                email,
                full_name: name.to_string(),
            });
        }

        let parts = parse_name(name)?;
        if let Some(mononym) = parts.mononym {
            return Ok(Self {
                last_first: mononym.clone(),
                nick: mononym,
                email,
                full_name: name.to_string(),
            });
        }

        let mut last_first = if parts.forename.is_empty() {
            parts.surname.clone()
        } else {
            format!("{}, {}", parts.surname, parts.forename)
        };
        if !parts.suffix.is_empty() {
            last_first = format!("{}, {}", last_first, parts.suffix);
        }

        Ok(Self {
            last_first,
            nick: parts.surname,
            email,
            full_name: name.to_string(),
        })
    }

    /// Width of the `last_first` form in characters.
    pub fn name_width(&self) -> usize {
        self.last_first.chars().count()
    }
}

/// Decompose a full name into forename, surname and suffix.
///
/// Handles mononyms (`Aahz`), comma suffixes (`Fred Drake, Jr.`), stray word
/// suffixes (`II`), lowercase surname particles (`Guido van Rossum`) and
/// surnames following a middle initial (`Nathaniel J. Vander Weele`).
pub fn parse_name(full_name: &str) -> Result<NameParts> {
    let (pre_suffix, raw_suffix) = match full_name.split_once(',') {
        Some((pre, suffix)) => (pre, suffix),
        None => (full_name, ""),
    };
    let mut name_parts: Vec<&str> = pre_suffix.trim().split(' ').collect();
    let mut suffix = raw_suffix.trim().to_string();

    match name_parts.as_slice() {
        [""] => {
            return Err(Error::AuthorName {
                message: "Name is empty!".to_string(),
            })
        }
        [only] => {
            return Ok(NameParts {
                forename: only.to_string(),
                surname: only.to_string(),
                suffix,
                mononym: Some(only.to_string()),
            })
        }
        [forename, surname] => {
            return Ok(NameParts {
                forename: forename.trim().to_string(),
                surname: surname.to_string(),
                suffix,
                mononym: None,
            })
        }
        _ => {}
    }

    if let Some(last) = name_parts.last().copied() {
        if NAME_SUFFIXES.contains(&last) {
            name_parts.pop();
            suffix = format!("{} {}", last, suffix).trim().to_string();
        }
    }

    let count = name_parts.len();
    if count >= 2 && is_lowercase_word(name_parts[count - 2]) {
        return Ok(NameParts {
            forename: name_parts[..count - 2].join(" ").trim().to_string(),
            surname: name_parts[count - 2..].join(" "),
            suffix,
            mononym: None,
        });
    }

    if let Some(position) = name_parts.iter().rposition(|part| part.ends_with('.')) {
        let split = position + 1;
        return Ok(NameParts {
            forename: name_parts[..split].join(" ").trim().to_string(),
            surname: name_parts[split..].join(" "),
            suffix,
            mononym: None,
        });
    }

    let (surname, forename) = match name_parts.split_last() {
        Some((surname, forename)) => (surname.to_string(), forename.join(" ").trim().to_string()),
        None => (String::new(), String::new()),
    };
    Ok(NameParts {
        forename,
        surname,
        suffix,
        mononym: None,
    })
}

/// True when the word has cased characters and all of them are lowercase.
fn is_lowercase_word(word: &str) -> bool {
    word.chars().any(char::is_lowercase) && !word.chars().any(char::is_uppercase)
}

/// Split an `Author:` header value into `(name, email)` pairs.
///
/// Only one citation style is expected per header: `Name <email>` is tried
/// first, then `email (Name)`, then bare comma-separated names.
pub fn parse_author_header(value: &str) -> Vec<(String, String)> {
    let styles: [(&Regex, bool); 3] = [(&ANGLED, true), (&PAREN, true), (&SIMPLE, false)];
    let mut authors: Vec<(String, String)> = Vec::new();

    for (pattern, has_email) in styles {
        for caps in pattern.captures_iter(value) {
            let name = caps["author"].trim().to_string();
            let email = if has_email {
                caps["email"].trim().to_string()
            } else {
                String::new()
            };
            // `Fred Drake, Jr.` splits into two entries; rejoin the suffix.
            if !name.contains(' ') && name.ends_with('.') {
                if let Some((previous, previous_email)) = authors.pop() {
                    authors.push((format!("{}, {}", previous, name), previous_email));
                    continue;
                }
            }
            authors.push((name, email));
        }
        if !authors.is_empty() {
            break;
        }
    }

    authors
}

/// Sort key for the Authors/Owners table.
///
/// Leading surname words that do not start with an uppercase letter (`van`,
/// `de`) are skipped, then the key is lowercased and NFKD-normalised so that
/// accented names sort next to their unaccented neighbours.
pub fn sort_key(author: &Author) -> String {
    let surname = author
        .last_first
        .split(',')
        .next()
        .unwrap_or_default();
    let words: Vec<&str> = surname.split_whitespace().collect();
    let base = match words
        .iter()
        .position(|word| word.chars().next().is_some_and(char::is_uppercase))
    {
        Some(start) => words[start..].join(" ").to_lowercase(),
        None => surname.to_lowercase(),
    };
    base.nfkd().collect()
}
