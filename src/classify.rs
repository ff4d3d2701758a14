//! Assignment of PEPs to the index categories.
//!
//! Every PEP lands in exactly one category. The rules in [`classify`] run in
//! a fixed order and each only sees PEPs that no earlier rule claimed, so
//! status rules take precedence over type rules where they come first and
//! vice versa.

use crate::error::{Error, Result};
use crate::pep::{Pep, PepType, Status};

/// An index section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Meta,
    Informational,
    Provisional,
    Accepted,
    Open,
    Finished,
    Historical,
    Deferred,
    Abandoned,
}

impl Category {
    /// Categories in the order they appear in PEP 0.
    pub const ALL: [Category; 9] = [
        Category::Meta,
        Category::Informational,
        Category::Provisional,
        Category::Accepted,
        Category::Open,
        Category::Finished,
        Category::Historical,
        Category::Deferred,
        Category::Abandoned,
    ];

    /// Section heading.
    pub fn title(self) -> &'static str {
        match self {
            Category::Meta => "Meta-PEPs (PEPs about PEPs or Processes)",
            Category::Informational => "Other Informational PEPs",
            Category::Provisional => {
                "Provisional PEPs (provisionally accepted; interface may still change)"
            }
            Category::Accepted => "Accepted PEPs (accepted; may not be implemented yet)",
            Category::Open => "Open PEPs (under consideration)",
            Category::Finished => "Finished PEPs (done, with a stable interface)",
            Category::Historical => "Historical Meta-PEPs and Informational PEPs",
            Category::Deferred => "Deferred PEPs (postponed pending further research or updates)",
            Category::Abandoned => "Abandoned, Withdrawn, and Rejected PEPs",
        }
    }

    /// Link target for the section.
    pub fn anchor(self) -> &'static str {
        match self {
            Category::Meta => "by-category-meta",
            Category::Informational => "by-category-other-info",
            Category::Provisional => "by-category-provisional",
            Category::Accepted => "by-category-accepted",
            Category::Open => "by-category-open",
            Category::Finished => "by-category-finished",
            Category::Historical => "by-category-historical",
            Category::Deferred => "by-category-deferred",
            Category::Abandoned => "by-category-abandoned",
        }
    }
}

/// PEPs grouped by category.
#[derive(Debug, Default)]
pub struct Categories<'a> {
    pub meta: Vec<&'a Pep>,
    pub informational: Vec<&'a Pep>,
    pub provisional: Vec<&'a Pep>,
    pub accepted: Vec<&'a Pep>,
    pub open: Vec<&'a Pep>,
    pub finished: Vec<&'a Pep>,
    pub historical: Vec<&'a Pep>,
    pub deferred: Vec<&'a Pep>,
    pub abandoned: Vec<&'a Pep>,
}

impl<'a> Categories<'a> {
    pub fn get(&self, category: Category) -> &[&'a Pep] {
        match category {
            Category::Meta => &self.meta,
            Category::Informational => &self.informational,
            Category::Provisional => &self.provisional,
            Category::Accepted => &self.accepted,
            Category::Open => &self.open,
            Category::Finished => &self.finished,
            Category::Historical => &self.historical,
            Category::Deferred => &self.deferred,
            Category::Abandoned => &self.abandoned,
        }
    }

    /// Category and members, in index order.
    pub fn iter(&self) -> impl Iterator<Item = (Category, &[&'a Pep])> + '_ {
        Category::ALL
            .into_iter()
            .map(move |category| (category, self.get(category)))
    }

    pub fn total(&self) -> usize {
        self.iter().map(|(_, peps)| peps.len()).sum()
    }
}

/// Remove the PEPs matching `predicate` from `remaining`, ordered by number.
fn take<'a>(remaining: &mut Vec<&'a Pep>, predicate: impl Fn(&Pep) -> bool) -> Vec<&'a Pep> {
    let (mut taken, rest): (Vec<&Pep>, Vec<&Pep>) =
        remaining.drain(..).partition(|pep| predicate(pep));
    *remaining = rest;
    taken.sort();
    taken
}

/// Sort PEPs into meta, informational, provisional, accepted, open,
/// finished, historical, deferred and abandoned.
pub fn classify(peps: &[Pep]) -> Result<Categories<'_>> {
    use PepType::{Informational, Process};

    let mut remaining: Vec<&Pep> = peps.iter().collect();
    let mut categories = Categories {
        open: take(&mut remaining, |p| p.status == Status::Draft),
        deferred: take(&mut remaining, |p| p.status == Status::Deferred),
        meta: take(&mut remaining, |p| {
            p.pep_type == Process && p.status == Status::Active
        }),
        abandoned: take(&mut remaining, |p| {
            p.pep_type == Process && matches!(p.status, Status::Withdrawn | Status::Rejected)
        }),
        historical: take(&mut remaining, |p| p.pep_type == Process),
        ..Categories::default()
    };

    categories.abandoned.extend(take(&mut remaining, |p| {
        matches!(
            p.status,
            Status::Rejected | Status::Withdrawn | Status::Superseded
        )
    }));

    // Finished release schedules are historical, active ones are not.
    categories.informational = take(&mut remaining, |p| {
        p.pep_type == Informational
            && (p.status == Status::Active || !p.title.contains("Release Schedule"))
    });
    categories
        .historical
        .extend(take(&mut remaining, |p| p.pep_type == Informational));

    categories.provisional = take(&mut remaining, |p| p.status == Status::Provisional);
    categories.accepted = take(&mut remaining, |p| {
        matches!(p.status, Status::Accepted | Status::Active)
    });
    categories.finished = take(&mut remaining, |p| p.status == Status::Final);

    if let Some(pep) = remaining.first() {
        return Err(Error::pep(
            pep.filename.display().to_string(),
            Some(pep.number),
            format!("unsorted ({}/{})", pep.pep_type, pep.status),
        ));
    }

    Ok(categories)
}
