//! JSON catalog of all PEPs.
//!
//! The catalog is published next to the rendered site so that tools can look
//! up PEP metadata without scraping HTML. It is a single object keyed by PEP
//! number:
//!
//! ```json
//! {
//!   "8": {
//!     "number": 8,
//!     "title": "Style Guide for Python Code",
//!     "authors": "Guido van Rossum, Barry Warsaw",
//!     "status": "Active",
//!     "type": "Process",
//!     "url": "https://peps.python.org/pep-0008/",
//!     ...
//!   }
//! }
//! ```

use serde::ser::{SerializeMap, Serializer};
use serde::Serialize;

use crate::error::Result;
use crate::pep::Pep;

/// One catalog entry.
#[derive(Debug, Serialize)]
pub struct CatalogEntry<'a> {
    pub number: u32,
    pub title: &'a str,
    pub authors: String,
    pub discussions_to: Option<&'a str>,
    pub status: &'static str,
    #[serde(rename = "type")]
    pub pep_type: &'static str,
    pub created: Option<&'a str>,
    pub python_version: Option<&'a str>,
    pub post_history: Option<&'a str>,
    pub resolution: Option<&'a str>,
    pub requires: Option<&'a str>,
    pub replaces: Option<&'a str>,
    pub superseded_by: Option<&'a str>,
    pub url: String,
}

impl<'a> CatalogEntry<'a> {
    pub fn new(pep: &'a Pep, base_url: &str) -> Self {
        Self {
            number: pep.number,
            title: &pep.title,
            authors: pep.author_names(),
            discussions_to: pep.discussions_to.as_deref(),
            status: pep.status.as_str(),
            pep_type: pep.pep_type.as_str(),
            created: pep.created.as_deref(),
            python_version: pep.python_version.as_deref(),
            post_history: pep.post_history.as_deref(),
            resolution: pep.resolution.as_deref(),
            requires: pep.requires.as_deref(),
            replaces: pep.replaces.as_deref(),
            superseded_by: pep.superseded_by.as_deref(),
            url: pep_url(base_url, pep.number),
        }
    }
}

/// Public URL of a PEP page.
pub fn pep_url(base_url: &str, number: u32) -> String {
    format!("{}/pep-{:04}/", base_url.trim_end_matches('/'), number)
}

/// PEPs serialized as a map keyed by number, in numeric order.
pub struct Catalog<'a> {
    peps: Vec<&'a Pep>,
    base_url: &'a str,
}

impl<'a> Catalog<'a> {
    pub fn new(peps: &'a [Pep], base_url: &'a str) -> Self {
        let mut peps: Vec<&Pep> = peps.iter().collect();
        peps.sort();
        Self { peps, base_url }
    }
}

impl Serialize for Catalog<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.peps.len()))?;
        for pep in &self.peps {
            map.serialize_entry(&pep.number.to_string(), &CatalogEntry::new(pep, self.base_url))?;
        }
        map.end()
    }
}

/// Render the catalog as pretty-printed JSON.
pub fn render_catalog(peps: &[Pep], base_url: &str) -> Result<String> {
    Ok(serde_json::to_string_pretty(&Catalog::new(peps, base_url))?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::author::Author;
    use crate::pep::{PepType, Status};

    fn sample() -> Vec<Pep> {
        let guido = Author::parse("Guido van Rossum", "guido@python.org", &[]).unwrap();
        let barry = Author::parse("Barry Warsaw", "", &[]).unwrap();
        let mut style = Pep::new(
            8,
            "Style Guide for Python Code",
            Status::Active,
            PepType::Process,
            vec![guido.clone(), barry],
        );
        style.created = Some("05-Jul-2001".to_string());
        let zen = Pep::new(20, "The Zen of Python", Status::Active, PepType::Informational, vec![guido]);
        vec![zen, style]
    }

    #[test]
    fn test_pep_url() {
        assert_eq!(pep_url("https://peps.python.org", 8), "https://peps.python.org/pep-0008/");
        assert_eq!(pep_url("https://peps.python.org/", 3000), "https://peps.python.org/pep-3000/");
    }

    #[test]
    fn test_catalog_is_keyed_numerically() {
        let peps = sample();
        let json = render_catalog(&peps, "https://peps.python.org").unwrap();
        let eight = json.find("\"8\"").unwrap();
        let twenty = json.find("\"20\"").unwrap();
        assert!(eight < twenty);
    }

    #[test]
    fn test_catalog_entry_fields() {
        let peps = sample();
        let json = render_catalog(&peps, "https://peps.python.org").unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        let entry = &value["8"];
        assert_eq!(entry["number"], 8);
        assert_eq!(entry["authors"], "Guido van Rossum, Barry Warsaw");
        assert_eq!(entry["type"], "Process");
        assert_eq!(entry["status"], "Active");
        assert_eq!(entry["created"], "05-Jul-2001");
        assert!(entry["resolution"].is_null());
        assert_eq!(entry["url"], "https://peps.python.org/pep-0008/");
    }
}
