//! Card component for a single job posting.

use dioxus::prelude::*;
use listing_core::JobPosting;

/// Props for JobCard component.
#[derive(Props, Clone, PartialEq)]
pub struct JobCardProps {
    /// The job to display.
    pub job: JobPosting,
}

/// Card with the posting summary, apply link, duties, perks and tags.
#[component]
pub fn JobCard(props: JobCardProps) -> Element {
    let job = &props.job;
    let hourly = job.hourly_rate.to_string();

    rsx! {
        article { class: "job-card",
            div { class: "job-card-accent" }
            div { class: "job-card-head",
                div { class: "job-card-summary",
                    span { class: "posted-badge", "{job.posted}" }
                    div {
                        h3 { class: "job-title", "{job.title}" }
                        p { class: "job-meta",
                            span { class: "icon", "▤" }
                            "{job.company}"
                        }
                        p { class: "job-meta",
                            span { class: "icon", "⌖" }
                            "{job.city}, {job.region}"
                        }
                    }
                    p { class: "job-description", "{job.description}" }
                    div { class: "job-chips",
                        span { class: "job-chip", "{job.contract}" }
                        span { class: "job-chip", "{job.shift} shift" }
                        span { class: "job-chip", "{job.salary}" }
                        span { class: "job-chip", "{job.language}" }
                        span { class: "job-chip", "{hourly}" }
                    }
                }
                a {
                    class: "apply-link",
                    href: "{job.apply_url}",
                    target: "_blank",
                    rel: "noopener noreferrer",
                    "Apply now"
                    span { class: "icon", "↗" }
                }
            }

            div { class: "job-card-lists",
                div { class: "job-card-box",
                    h4 { class: "box-title", "Daily responsibilities" }
                    ul { class: "bullet-list",
                        for item in job.responsibilities.iter() {
                            li { key: "{item}",
                                span { class: "bullet bullet-blue" }
                                span { "{item}" }
                            }
                        }
                    }
                }
                div { class: "job-card-box",
                    h4 { class: "box-title", "Benefits & perks" }
                    ul { class: "bullet-list",
                        for item in job.benefits.iter() {
                            li { key: "{item}",
                                span { class: "bullet bullet-green" }
                                span { "{item}" }
                            }
                        }
                    }
                }
            }

            div { class: "job-tags",
                for tag in job.tags.iter() {
                    span { key: "{tag}", class: "job-tag", {tag.slug()} }
                }
            }
        }
    }
}
