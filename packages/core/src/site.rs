//! Static page metadata (title, description, social cards).

/// Default public URL of the deployed site.
pub const DEFAULT_BASE_URL: &str = "https://agentic-1eac6056.vercel.app";

/// Document and social metadata rendered into the page head.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteMetadata {
    pub title: String,
    pub description: String,
    pub base_url: String,
    pub site_name: String,
    pub og_description: String,
    pub og_type: String,
    pub twitter_card: String,
    pub twitter_description: String,
}

impl Default for SiteMetadata {
    fn default() -> Self {
        Self {
            title: "Norway Stocker Jobs | Agentic Logistics Careers".to_string(),
            description: "Curated warehouse, retail, and automation stocker jobs across Norway \
                with salary insights, shift transparency, and relocation support."
                .to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
            site_name: "Agentic Logistics Careers".to_string(),
            og_description: "Explore vetted stocker openings in Oslo, Bergen, Stavanger, \
                Trondheim, and beyond with relocation resources tailored to international talent."
                .to_string(),
            og_type: "website".to_string(),
            twitter_card: "summary_large_image".to_string(),
            twitter_description: "Discover high-demand stocker roles in Norway plus relocation \
                and interview guidance."
                .to_string(),
        }
    }
}

impl SiteMetadata {
    /// Override the public URL. Trailing slashes are dropped; a blank
    /// value keeps the current one.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        let trimmed = base_url.trim().trim_end_matches('/');
        if !trimmed.is_empty() {
            self.base_url = trimmed.to_string();
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_url_override() {
        let meta = SiteMetadata::default().with_base_url("https://jobs.example.no/");
        assert_eq!(meta.base_url, "https://jobs.example.no");

        let meta = SiteMetadata::default().with_base_url("  ");
        assert_eq!(meta.base_url, DEFAULT_BASE_URL);
    }
}
