//! The listing page and its filter state.

use dioxus::prelude::*;
use listing_core::{
    Aggregates, FilterChange, FilterOptions, Selection, applicant_tip, filter_jobs,
    interview_checklist, list_jobs, list_quick_stats, list_relocation_tips,
};

use super::{FilterPanel, JobList, MarketSnapshot, RelocationSection};
use crate::Hero;

const LISTING_CSS: Asset = asset!("/assets/styling/listing.css");

/// Listing page component.
///
/// Holds the current [`Selection`]; the filtered jobs and aggregates are
/// memos over it and are recomputed on every change.
#[component]
pub fn ListingPage() -> Element {
    let jobs = list_jobs();
    let options = use_hook(|| FilterOptions::derive(jobs).labels());
    let mut selection = use_signal(Selection::default);

    let filtered = use_memo(move || {
        let filtered = filter_jobs(jobs, &selection.read());
        tracing::debug!(matches = filtered.len(), "Filters applied");
        filtered
    });

    let aggregates = use_memo(move || Aggregates::compute(filtered.read().iter().copied()));

    // Each change builds a fresh selection; a rejected label keeps the old one.
    let on_change = move |change: FilterChange| {
        let next = selection.read().with_change(change.clone());
        match next {
            Ok(next) => selection.set(next),
            Err(e) => tracing::warn!("Ignoring filter change {:?}: {}", change, e),
        }
    };

    let cards = filtered.read().iter().map(|job| (*job).clone()).collect::<Vec<_>>();

    rsx! {
        document::Link { rel: "stylesheet", href: LISTING_CSS }

        Hero { stats: list_quick_stats().to_vec() }

        main { class: "listing-main",
            section { class: "filter-card",
                div { class: "filter-grid",
                    FilterPanel {
                        options: options.clone(),
                        selection: selection(),
                        on_change: on_change,
                    }
                    MarketSnapshot { aggregates: aggregates() }
                }
            }

            section { class: "roles",
                div { class: "roles-header",
                    div {
                        h2 { class: "section-title", "Latest roles" }
                        p { class: "section-lead",
                            "Curated inventory of logistics, retail, and automation stocker openings "
                            "sourced from Norwegian employers."
                        }
                    }
                    a { class: "pill-link", href: "#relocation",
                        "Relocation checklist"
                        span { class: "icon", "↗" }
                    }
                }

                JobList { jobs: cards }
            }

            RelocationSection {
                tips: list_relocation_tips().to_vec(),
                checklist: interview_checklist().to_vec(),
                applicant_tip: applicant_tip().cloned(),
            }
        }
    }
}
