use dioxus::prelude::*;

const FOOTER_CSS: Asset = asset!("/assets/styling/footer.css");

#[component]
pub fn Footer() -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: FOOTER_CSS }

        footer { class: "site-footer",
            div { class: "site-footer-inner",
                p {
                    "Built to spotlight warehouse and retail stocker opportunities across "
                    "Norway's cities and logistics corridors."
                }
                p { "Data refreshed weekly • Sources: NAV, Finn.no, regional employer portals." }
            }
        }
    }
}
