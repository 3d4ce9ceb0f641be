//! Relocation resources and interview-readiness checklist.

use dioxus::prelude::*;
use listing_core::{ApplicantTip, RelocationTip};

/// Props for RelocationSection component.
#[derive(Props, Clone, PartialEq)]
pub struct RelocationSectionProps {
    /// External resources, each opened in a new tab.
    pub tips: Vec<RelocationTip>,
    /// Interview-readiness checklist items.
    pub checklist: Vec<String>,
    /// Highlighted advice below the checklist, if any.
    #[props(!optional)]
    pub applicant_tip: Option<ApplicantTip>,
}

#[component]
pub fn RelocationSection(props: RelocationSectionProps) -> Element {
    rsx! {
        section { id: "relocation", class: "relocation",
            div { class: "relocation-tips",
                h2 { class: "section-title", "Move to Norway with confidence" }
                p { class: "section-lead",
                    "Practical steps pulled from NAV, UDI, and worker unions to help you sort "
                    "relocation essentials before you start."
                }
                div { class: "tip-list",
                    for tip in props.tips.iter() {
                        a {
                            key: "{tip.title}",
                            class: "tip-link",
                            href: "{tip.url}",
                            target: "_blank",
                            rel: "noopener noreferrer",
                            div { class: "tip-head",
                                h3 { class: "tip-title", "{tip.title}" }
                                span { class: "icon", "↗" }
                            }
                            p { class: "tip-summary", "{tip.summary}" }
                        }
                    }
                }
            }

            aside { class: "checklist",
                h3 { class: "checklist-title", "Interview-readiness checklist" }
                ul { class: "checklist-items",
                    for item in props.checklist.iter() {
                        li { key: "{item}",
                            span { class: "icon icon-check", "✓" }
                            "{item}"
                        }
                    }
                }
                if let Some(tip) = props.applicant_tip.as_ref() {
                    div { class: "applicant-tip",
                        p { class: "applicant-tip-heading", "{tip.heading}" }
                        p { "{tip.body}" }
                    }
                }
            }
        }
    }
}
