//! PEP records and their header vocabularies.
//!
//! A [`Pep`] holds the subset of a document's header block that the index and
//! the JSON catalog need. Ordering and equality are by PEP number.

use std::cmp::Ordering;
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use crate::author::Author;

/// Value of the `Status:` header.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Status {
    Accepted,
    Active,
    Deferred,
    Draft,
    Final,
    Provisional,
    Rejected,
    Superseded,
    Withdrawn,
}

impl Status {
    /// Every status, in alphabetical order.
    pub const ALL: [Status; 9] = [
        Status::Accepted,
        Status::Active,
        Status::Deferred,
        Status::Draft,
        Status::Final,
        Status::Provisional,
        Status::Rejected,
        Status::Superseded,
        Status::Withdrawn,
    ];

    /// Header value that is accepted but recorded as [`Status::Rejected`].
    pub const APRIL_FOOL: &'static str = "April Fool!";

    pub fn as_str(self) -> &'static str {
        match self {
            Status::Accepted => "Accepted",
            Status::Active => "Active",
            Status::Deferred => "Deferred",
            Status::Draft => "Draft",
            Status::Final => "Final",
            Status::Provisional => "Provisional",
            Status::Rejected => "Rejected",
            Status::Superseded => "Superseded",
            Status::Withdrawn => "Withdrawn",
        }
    }

    /// Statuses that get no marker in index rows or in the status key.
    pub fn is_hidden(self) -> bool {
        matches!(self, Status::Draft | Status::Active)
    }

    /// Single-character marker used in index rows.
    pub fn initial(self) -> char {
        if self.is_hidden() {
            ' '
        } else {
            first_char(self.as_str())
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Status {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == Status::APRIL_FOOL {
            return Ok(Status::Rejected);
        }
        Status::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| format!("{} is not a valid Status value", s))
    }
}

/// Value of the `Type:` header.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PepType {
    Informational,
    Process,
    StandardsTrack,
}

impl PepType {
    /// Every type, in alphabetical order.
    pub const ALL: [PepType; 3] = [
        PepType::Informational,
        PepType::Process,
        PepType::StandardsTrack,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            PepType::Informational => "Informational",
            PepType::Process => "Process",
            PepType::StandardsTrack => "Standards Track",
        }
    }

    pub fn initial(self) -> char {
        first_char(self.as_str())
    }

    /// Whether a PEP of this type may carry [`Status::Active`].
    pub fn allows_active(self) -> bool {
        matches!(self, PepType::Process | PepType::Informational)
    }
}

impl fmt::Display for PepType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PepType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PepType::ALL
            .into_iter()
            .find(|pep_type| pep_type.as_str() == s)
            .ok_or_else(|| format!("{} is not a valid Type value", s))
    }
}

fn first_char(s: &str) -> char {
    s.chars().next().unwrap_or(' ')
}

/// A parsed PEP document header.
#[derive(Debug, Clone)]
pub struct Pep {
    pub number: u32,
    pub title: String,
    pub status: Status,
    pub pep_type: PepType,
    pub authors: Vec<Author>,
    /// Source file the header was read from
    pub filename: PathBuf,
    pub discussions_to: Option<String>,
    pub created: Option<String>,
    pub python_version: Option<String>,
    pub post_history: Option<String>,
    pub resolution: Option<String>,
    pub requires: Option<String>,
    pub replaces: Option<String>,
    pub superseded_by: Option<String>,
}

/// Display fields of one index table row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowFields {
    pub type_marker: String,
    pub status_marker: String,
    pub number: String,
    pub title: String,
    pub authors: String,
}

impl Pep {
    /// Create a PEP with only the fields the index requires.
    pub fn new(
        number: u32,
        title: impl Into<String>,
        status: Status,
        pep_type: PepType,
        authors: Vec<Author>,
    ) -> Self {
        Self {
            number,
            title: title.into(),
            status,
            pep_type,
            authors,
            filename: PathBuf::from(format!("pep-{:04}.rst", number)),
            discussions_to: None,
            created: None,
            python_version: None,
            post_history: None,
            resolution: None,
            requires: None,
            replaces: None,
            superseded_by: None,
        }
    }

    /// Fields for an index row, with the title shortened to `title_length`.
    pub fn row_fields(&self, title_length: usize) -> RowFields {
        RowFields {
            type_marker: self.pep_type.initial().to_string(),
            status_marker: self.status.initial().to_string(),
            number: self.number.to_string(),
            title: abbreviate_title(&self.title, title_length),
            authors: self.author_nicks(),
        }
    }

    /// Author nicknames joined for display.
    pub fn author_nicks(&self) -> String {
        self.authors
            .iter()
            .map(|author| author.nick.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// Author display names (`Forename Surname` as cited) joined for display.
    pub fn author_names(&self) -> String {
        self.authors
            .iter()
            .map(|author| author.full_name.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl PartialEq for Pep {
    fn eq(&self, other: &Self) -> bool {
        self.number == other.number
    }
}

impl Eq for Pep {}

impl PartialOrd for Pep {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Pep {
    fn cmp(&self, other: &Self) -> Ordering {
        self.number.cmp(&other.number)
    }
}

/// Shorten a title so it fits in `limit` columns.
///
/// Long titles are word-wrapped at `limit - 4` columns and the first line is
/// kept with a trailing ` ...`.
pub fn abbreviate_title(title: &str, limit: usize) -> String {
    if title.chars().count() <= limit {
        return title.to_string();
    }
    let width = limit.saturating_sub(4).max(1);
    format!("{} ...", first_wrapped_line(title, width))
}

/// First line of a greedy word wrap at `width` columns.
///
/// Lines may break after a hyphen. A word too long for any line fills the
/// space left on the current line instead of starting a new one.
fn first_wrapped_line(text: &str, width: usize) -> String {
    let options = textwrap::Options::new(width).wrap_algorithm(textwrap::WrapAlgorithm::FirstFit);
    let Some(first) = textwrap::wrap(text, options).into_iter().next() else {
        return String::new();
    };
    let mut line = first.into_owned();

    // textwrap moves an over-long word to its own lines; pull its head back.
    let Some(rest) = text.strip_prefix(line.as_str()) else {
        return line;
    };
    if !rest.starts_with(char::is_whitespace) {
        return line;
    }
    let Some(word) = rest.split_whitespace().next() else {
        return line;
    };
    let chunk_end = textwrap::WordSplitter::HyphenSplitter
        .split_points(word)
        .first()
        .copied()
        .unwrap_or(word.len());
    let chunk = &word[..chunk_end];
    let used = line.chars().count() + 1;
    if chunk.chars().count() > width && used < width {
        line.push(' ');
        line.extend(chunk.chars().take(width - used));
    }
    line
}
