//! Core domain types for the Norway stocker job listing.
//!
//! This crate contains everything the page computes, independent of UI:
//! - Job postings and their filterable dimensions
//! - The bundled catalog of jobs and page resources
//! - Filter selection, option derivation and matching
//! - Aggregates for the market snapshot

pub mod catalog;
mod facet;
mod filter;
mod job;
mod resources;
mod site;
mod stats;

pub use catalog::{
    Catalog, CatalogError, applicant_tip, interview_checklist, list_jobs, list_quick_stats,
    list_relocation_tips,
};
pub use facet::{Choice, Facet, FacetError};
pub use filter::{FilterChange, FilterOptions, OptionLabels, Selection, filter_jobs};
pub use job::{Contract, HourlyRange, InvertedRange, JobId, JobPosting, Region, Shift, Tag};
pub use resources::{ApplicantTip, QuickStat, RelocationTip};
pub use site::{DEFAULT_BASE_URL, SiteMetadata};
pub use stats::{Aggregates, AverageRate, NO_AVERAGE};
