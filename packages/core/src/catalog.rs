//! Bundled, read-only listing data.
//!
//! The catalog is compiled into the binary as JSON and parsed once per
//! process on first access.

use std::collections::HashSet;
use std::sync::LazyLock;

use serde::Deserialize;
use thiserror::Error;

use crate::job::{JobId, JobPosting};
use crate::resources::{ApplicantTip, QuickStat, RelocationTip};

const BUNDLED_CATALOG: &str = include_str!("../data/catalog.json");

static CATALOG: LazyLock<Catalog> = LazyLock::new(|| match Catalog::from_json(BUNDLED_CATALOG) {
    Ok(catalog) => {
        tracing::debug!(jobs = catalog.jobs.len(), "Loaded bundled catalog");
        catalog
    }
    Err(e) => {
        tracing::error!("Failed to load bundled catalog: {}", e);
        Catalog::default()
    }
});

/// Catalog loading errors.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Malformed catalog: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("Duplicate job id: {0}")]
    DuplicateId(JobId),
}

/// Everything the listing page displays.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Catalog {
    jobs: Vec<JobPosting>,
    #[serde(default)]
    quick_stats: Vec<QuickStat>,
    #[serde(default)]
    relocation_tips: Vec<RelocationTip>,
    #[serde(default)]
    interview_checklist: Vec<String>,
    #[serde(default)]
    applicant_tip: Option<ApplicantTip>,
}

impl Catalog {
    /// Parse and validate a catalog document.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let catalog: Catalog = serde_json::from_str(json)?;
        catalog.validate()?;
        Ok(catalog)
    }

    /// Build a catalog from jobs alone, validating id uniqueness.
    pub fn from_jobs(jobs: Vec<JobPosting>) -> Result<Self, CatalogError> {
        let catalog = Catalog {
            jobs,
            ..Default::default()
        };
        catalog.validate()?;
        Ok(catalog)
    }

    fn validate(&self) -> Result<(), CatalogError> {
        let mut seen = HashSet::new();
        for job in &self.jobs {
            if !seen.insert(&job.id) {
                return Err(CatalogError::DuplicateId(job.id.clone()));
            }
        }
        Ok(())
    }

    pub fn jobs(&self) -> &[JobPosting] {
        &self.jobs
    }

    pub fn quick_stats(&self) -> &[QuickStat] {
        &self.quick_stats
    }

    pub fn relocation_tips(&self) -> &[RelocationTip] {
        &self.relocation_tips
    }

    pub fn interview_checklist(&self) -> &[String] {
        &self.interview_checklist
    }

    pub fn applicant_tip(&self) -> Option<&ApplicantTip> {
        self.applicant_tip.as_ref()
    }
}

/// The catalog bundled with this build.
pub fn bundled() -> &'static Catalog {
    &CATALOG
}

pub fn list_jobs() -> &'static [JobPosting] {
    bundled().jobs()
}

pub fn list_quick_stats() -> &'static [QuickStat] {
    bundled().quick_stats()
}

pub fn list_relocation_tips() -> &'static [RelocationTip] {
    bundled().relocation_tips()
}

pub fn interview_checklist() -> &'static [String] {
    bundled().interview_checklist()
}

pub fn applicant_tip() -> Option<&'static ApplicantTip> {
    bundled().applicant_tip()
}

#[cfg(test)]
mod tests {
    #![allow(clippy::disallowed_methods)]

    use super::*;

    #[test]
    fn bundled_catalog_parses() -> Result<(), CatalogError> {
        let catalog = Catalog::from_json(BUNDLED_CATALOG)?;
        assert!(!catalog.jobs().is_empty());
        assert_eq!(catalog.quick_stats().len(), 4);
        assert!(!catalog.relocation_tips().is_empty());
        assert!(!catalog.interview_checklist().is_empty());
        assert!(catalog.applicant_tip().is_some());
        assert_eq!(list_jobs().len(), catalog.jobs().len());
        Ok(())
    }

    #[test]
    fn duplicate_ids_are_rejected() -> Result<(), CatalogError> {
        let catalog = Catalog::from_json(BUNDLED_CATALOG)?;
        let mut jobs = catalog.jobs().to_vec();
        jobs.push(jobs[0].clone());

        match Catalog::from_jobs(jobs) {
            Err(CatalogError::DuplicateId(id)) => assert_eq!(id, catalog.jobs()[0].id),
            other => panic!("expected duplicate id error, got {:?}", other),
        }
        Ok(())
    }

    #[test]
    fn inverted_rate_fails_to_parse() {
        let json = r#"{"jobs": [{
            "id": "x", "title": "t", "company": "c", "city": "Oslo",
            "region": "Oslo", "shift": "Day", "contract": "Seasonal",
            "hourlyRate": [250, 200], "salary": "s", "language": "English",
            "posted": "Today", "description": "d", "applyUrl": "https://example.com"
        }]}"#;
        assert!(matches!(
            Catalog::from_json(json),
            Err(CatalogError::Parse(_))
        ));
    }

    #[test]
    fn unknown_fields_are_rejected() {
        let json = r#"{"jobs": [], "featured": true}"#;
        assert!(Catalog::from_json(json).is_err());
    }
}
