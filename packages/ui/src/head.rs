use dioxus::prelude::*;
use listing_core::SiteMetadata;

/// Document title plus description, Open Graph and Twitter card tags.
#[component]
pub fn SiteHead(metadata: SiteMetadata) -> Element {
    rsx! {
        document::Title { "{metadata.title}" }
        document::Meta { name: "description", content: "{metadata.description}" }

        document::Meta { property: "og:title", content: "{metadata.title}" }
        document::Meta { property: "og:description", content: "{metadata.og_description}" }
        document::Meta { property: "og:url", content: "{metadata.base_url}" }
        document::Meta { property: "og:site_name", content: "{metadata.site_name}" }
        document::Meta { property: "og:type", content: "{metadata.og_type}" }

        document::Meta { name: "twitter:card", content: "{metadata.twitter_card}" }
        document::Meta { name: "twitter:title", content: "{metadata.title}" }
        document::Meta { name: "twitter:description", content: "{metadata.twitter_description}" }
    }
}
