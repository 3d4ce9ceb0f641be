use dioxus::prelude::*;
use listing_core::QuickStat;

const HERO_CSS: Asset = asset!("/assets/styling/hero.css");

/// Page header with the headline and the quick-stat grid.
#[component]
pub fn Hero(stats: Vec<QuickStat>) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: HERO_CSS }

        header { id: "hero",
            div { class: "hero-glow" }
            div { class: "hero-inner",
                div { class: "hero-copy",
                    span { class: "hero-badge",
                        span { class: "icon", "✓" }
                        "Ready-to-apply listings"
                    }
                    h1 { class: "hero-title",
                        "Find verified stocker jobs across Norway's logistics and retail hubs"
                    }
                    p { class: "hero-lead",
                        "Explore curated warehouse, retail and automation roles with relocation "
                        "guidance, salary insights, and shift transparency tailored to "
                        "international candidates."
                    }
                }

                div { class: "quick-stats",
                    for stat in stats.iter() {
                        div { key: "{stat.label}", class: "quick-stat",
                            p { class: "quick-stat-label", "{stat.label}" }
                            p { class: "quick-stat-value", "{stat.value}" }
                            p { class: "quick-stat-detail", "{stat.detail}" }
                        }
                    }
                }
            }
        }
    }
}
