use dioxus::prelude::*;
use listing_core::Aggregates;

/// Market snapshot aside: match count, average rate and English readiness.
#[component]
pub fn MarketSnapshot(aggregates: Aggregates) -> Element {
    let average = aggregates.average_hourly_label();
    let readiness = aggregates.english_ready_label();

    rsx! {
        aside { class: "snapshot",
            h2 { class: "snapshot-title", "Market snapshot" }
            div { class: "snapshot-items",
                div { class: "snapshot-item",
                    div {
                        p { class: "snapshot-label", "Matching roles" }
                        p { class: "snapshot-value", "{aggregates.matches}" }
                    }
                    span { class: "icon", "⛨" }
                }
                div { class: "snapshot-item",
                    div {
                        p { class: "snapshot-label", "Avg hourly range" }
                        p { class: "snapshot-value snapshot-value-small", "{average}" }
                    }
                    span { class: "icon", "◷" }
                }
                div { class: "snapshot-item snapshot-item-stacked",
                    p { class: "snapshot-label", "Language readiness" }
                    p { class: "snapshot-note",
                        span { class: "icon", "文" }
                        "{readiness}"
                    }
                }
            }
        }
    }
}
