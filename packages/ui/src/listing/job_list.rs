//! Job list component for the filtered postings.

use dioxus::prelude::*;
use listing_core::JobPosting;

use super::JobCard;

/// List of job cards, or the empty state when nothing matches.
#[component]
pub fn JobList(jobs: Vec<JobPosting>) -> Element {
    rsx! {
        div { class: "job-list",
            for job in jobs.iter() {
                JobCard { key: "{job.id}", job: job.clone() }
            }

            if jobs.is_empty() {
                div { class: "empty-state",
                    "No matches found. Adjust filters to explore more regions, shifts, or keywords."
                }
            }
        }
    }
}
