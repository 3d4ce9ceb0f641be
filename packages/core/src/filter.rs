//! Filter selection, option derivation and the match predicate.

use std::collections::BTreeSet;

use crate::facet::{Choice, Facet, FacetError};
use crate::job::{Contract, JobPosting, Region, Shift, Tag};

/// A change to one filter dimension, as emitted by the filter controls.
///
/// Dimension variants carry the selected option label; `Search` carries
/// the raw text of the search box.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterChange {
    Search(String),
    Region(String),
    Shift(String),
    Contract(String),
    Tag(String),
}

/// The visitor's current filter constraints.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    pub region: Choice<Region>,
    pub shift: Choice<Shift>,
    pub contract: Choice<Contract>,
    pub tag: Choice<Tag>,
    /// Raw search text; trimmed and lowercased at match time.
    pub query: String,
}

impl Selection {
    /// Build the selection that results from applying `change`.
    ///
    /// The receiver is left untouched; on error the caller keeps it.
    pub fn with_change(&self, change: FilterChange) -> Result<Self, FacetError> {
        let mut next = self.clone();
        match change {
            FilterChange::Search(query) => next.query = query,
            FilterChange::Region(label) => next.region = Choice::parse(&label)?,
            FilterChange::Shift(label) => next.shift = Choice::parse(&label)?,
            FilterChange::Contract(label) => next.contract = Choice::parse(&label)?,
            FilterChange::Tag(label) => next.tag = Choice::parse(&label)?,
        }
        Ok(next)
    }

    /// Normalised form of the search text.
    pub fn normalized_query(&self) -> String {
        self.query.trim().to_lowercase()
    }

    /// Whether no constraint is active.
    pub fn is_unfiltered(&self) -> bool {
        self.region.is_any()
            && self.shift.is_any()
            && self.contract.is_any()
            && self.tag.is_any()
            && self.query.trim().is_empty()
    }

    /// Decide whether `job` satisfies every active constraint.
    pub fn matches(&self, job: &JobPosting) -> bool {
        self.matches_query(job, &self.normalized_query())
    }

    fn matches_query(&self, job: &JobPosting, query: &str) -> bool {
        self.region.admits(|region| *region == job.region)
            && self.shift.admits(|shift| *shift == job.shift)
            && self.contract.admits(|contract| *contract == job.contract)
            && self.tag.admits(|tag| job.has_tag(tag))
            && (query.is_empty() || job.search_haystack().contains(query))
    }
}

/// Jobs from `jobs` that match `selection`, in their original order.
pub fn filter_jobs<'a>(jobs: &'a [JobPosting], selection: &Selection) -> Vec<&'a JobPosting> {
    let query = selection.normalized_query();
    jobs.iter()
        .filter(|job| selection.matches_query(job, &query))
        .collect()
}

/// Candidate values for each filter dimension, sentinel first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterOptions {
    pub regions: Vec<Choice<Region>>,
    pub shifts: Vec<Choice<Shift>>,
    pub contracts: Vec<Choice<Contract>>,
    pub tags: Vec<Choice<Tag>>,
}

/// Option labels for every dimension, ready for rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptionLabels {
    pub regions: Vec<String>,
    pub shifts: Vec<String>,
    pub contracts: Vec<String>,
    pub tags: Vec<String>,
}

impl FilterOptions {
    /// Derive options from the job list.
    ///
    /// Regions, shifts and contracts keep first-seen order; tags are
    /// sorted.
    pub fn derive(jobs: &[JobPosting]) -> Self {
        let tags: BTreeSet<&Tag> = jobs.iter().flat_map(|job| job.tags.iter()).collect();

        Self {
            regions: with_sentinel(distinct(jobs.iter().map(|job| job.region.clone()))),
            shifts: with_sentinel(distinct(jobs.iter().map(|job| job.shift))),
            contracts: with_sentinel(distinct(jobs.iter().map(|job| job.contract))),
            tags: with_sentinel(tags.into_iter().cloned()),
        }
    }

    pub fn labels(&self) -> OptionLabels {
        OptionLabels {
            regions: to_labels(&self.regions),
            shifts: to_labels(&self.shifts),
            contracts: to_labels(&self.contracts),
            tags: to_labels(&self.tags),
        }
    }
}

fn distinct<T: PartialEq>(values: impl Iterator<Item = T>) -> Vec<T> {
    let mut seen = Vec::new();
    for value in values {
        if !seen.contains(&value) {
            seen.push(value);
        }
    }
    seen
}

fn with_sentinel<T: Facet>(values: impl IntoIterator<Item = T>) -> Vec<Choice<T>> {
    std::iter::once(Choice::Any)
        .chain(values.into_iter().map(Choice::Only))
        .collect()
}

fn to_labels<T: Facet>(choices: &[Choice<T>]) -> Vec<String> {
    choices.iter().map(ToString::to_string).collect()
}
