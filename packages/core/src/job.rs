//! Job posting domain types for the stocker listing.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::facet::{Facet, FacetError};

/// Unique identifier for a job posting within a catalog.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct JobId(pub String);

impl JobId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for JobId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Norwegian region (county) a job is located in.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Region(pub String);

impl Region {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Region {
    type Err = FacetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().is_empty() {
            return Err(FacetError::Empty);
        }
        Ok(Self(s.to_string()))
    }
}

impl Facet for Region {
    const ANY_LABEL: &'static str = "All regions";
}

/// Specialty tag attached to a job (e.g. "Forklift", "Cold storage").
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Tag(pub String);

impl Tag {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Hashtag form shown on job cards: `#` followed by the lowercased tag
    /// with each whitespace run collapsed to a single `-`.
    pub fn slug(&self) -> String {
        let mut slug = String::with_capacity(self.0.len() + 1);
        slug.push('#');
        let mut in_space = false;
        for c in self.0.chars() {
            if c.is_whitespace() {
                if !in_space {
                    slug.push('-');
                }
                in_space = true;
            } else {
                slug.extend(c.to_lowercase());
                in_space = false;
            }
        }
        slug
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Tag {
    type Err = FacetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().is_empty() {
            return Err(FacetError::Empty);
        }
        Ok(Self(s.to_string()))
    }
}

impl Facet for Tag {
    const ANY_LABEL: &'static str = "Any specialty";
}

/// Shift pattern for a position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Shift {
    Day,
    Evening,
    Night,
    Rotating,
    Weekend,
}

impl Shift {
    pub fn as_str(&self) -> &'static str {
        match self {
            Shift::Day => "Day",
            Shift::Evening => "Evening",
            Shift::Night => "Night",
            Shift::Rotating => "Rotating",
            Shift::Weekend => "Weekend",
        }
    }
}

impl fmt::Display for Shift {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Shift {
    type Err = FacetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Day" => Ok(Shift::Day),
            "Evening" => Ok(Shift::Evening),
            "Night" => Ok(Shift::Night),
            "Rotating" => Ok(Shift::Rotating),
            "Weekend" => Ok(Shift::Weekend),
            "" => Err(FacetError::Empty),
            other => Err(FacetError::Unknown {
                facet: "shift",
                label: other.to_string(),
            }),
        }
    }
}

impl Facet for Shift {
    const ANY_LABEL: &'static str = "Any shift";
}

/// Employment contract type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Contract {
    #[serde(rename = "Full-time")]
    FullTime,
    #[serde(rename = "Part-time")]
    PartTime,
    Seasonal,
    Temporary,
}

impl Contract {
    pub fn as_str(&self) -> &'static str {
        match self {
            Contract::FullTime => "Full-time",
            Contract::PartTime => "Part-time",
            Contract::Seasonal => "Seasonal",
            Contract::Temporary => "Temporary",
        }
    }
}

impl fmt::Display for Contract {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Contract {
    type Err = FacetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Full-time" => Ok(Contract::FullTime),
            "Part-time" => Ok(Contract::PartTime),
            "Seasonal" => Ok(Contract::Seasonal),
            "Temporary" => Ok(Contract::Temporary),
            "" => Err(FacetError::Empty),
            other => Err(FacetError::Unknown {
                facet: "contract",
                label: other.to_string(),
            }),
        }
    }
}

impl Facet for Contract {
    const ANY_LABEL: &'static str = "All contracts";
}

/// Returned when a rate range would have its lower bound above the upper.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("hourly rate range is inverted: {min} > {max}")]
pub struct InvertedRange {
    pub min: u32,
    pub max: u32,
}

/// Hourly pay range in NOK. Serialized as a `[min, max]` pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "[u32; 2]", into = "[u32; 2]")]
pub struct HourlyRange {
    min: u32,
    max: u32,
}

impl HourlyRange {
    pub fn new(min: u32, max: u32) -> Result<Self, InvertedRange> {
        if min > max {
            return Err(InvertedRange { min, max });
        }
        Ok(Self { min, max })
    }

    pub fn min(&self) -> u32 {
        self.min
    }

    pub fn max(&self) -> u32 {
        self.max
    }
}

impl TryFrom<[u32; 2]> for HourlyRange {
    type Error = InvertedRange;

    fn try_from([min, max]: [u32; 2]) -> Result<Self, Self::Error> {
        Self::new(min, max)
    }
}

impl From<HourlyRange> for [u32; 2] {
    fn from(range: HourlyRange) -> Self {
        [range.min, range.max]
    }
}

impl fmt::Display for HourlyRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}–{} NOK/hr", self.min, self.max)
    }
}

/// A stocker job posting as shown on the listing page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct JobPosting {
    pub id: JobId,
    pub title: String,
    pub company: String,
    pub city: String,
    pub region: Region,
    pub shift: Shift,
    pub contract: Contract,
    pub hourly_rate: HourlyRange,
    /// Free-text salary summary, e.g. "NOK 420 000 / year".
    pub salary: String,
    /// Free-text language requirement.
    pub language: String,
    /// Human label for when the job was posted, e.g. "Posted 2 days ago".
    pub posted: String,
    pub description: String,
    #[serde(default)]
    pub responsibilities: Vec<String>,
    #[serde(default)]
    pub benefits: Vec<String>,
    #[serde(default)]
    pub tags: Vec<Tag>,
    /// External application link, passed through untouched.
    pub apply_url: String,
}

impl JobPosting {
    /// Whether the language requirement mentions English.
    pub fn accepts_english(&self) -> bool {
        self.language.to_lowercase().contains("english")
    }

    /// Lowercased text searched by the free-text filter.
    ///
    /// Fields are joined with single spaces, so a query may span the
    /// boundary between two of them.
    pub fn search_haystack(&self) -> String {
        let tags = self
            .tags
            .iter()
            .map(Tag::as_str)
            .collect::<Vec<_>>()
            .join(" ");
        [
            self.title.as_str(),
            self.company.as_str(),
            self.city.as_str(),
            self.description.as_str(),
            tags.as_str(),
        ]
        .join(" ")
        .to_lowercase()
    }

    pub fn has_tag(&self, tag: &Tag) -> bool {
        self.tags.contains(tag)
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::disallowed_methods)]

    use super::*;

    #[test]
    fn tag_slug_collapses_whitespace() {
        assert_eq!(Tag::new("Cold storage").slug(), "#cold-storage");
        assert_eq!(Tag::new("SAP  EWM\tscanner").slug(), "#sap-ewm-scanner");
        assert_eq!(Tag::new("Forklift").slug(), "#forklift");
    }

    #[test]
    fn hourly_range_rejects_inverted_bounds() {
        assert!(HourlyRange::new(180, 200).is_ok());
        assert!(HourlyRange::new(200, 200).is_ok());
        assert_eq!(
            HourlyRange::new(210, 200),
            Err(InvertedRange { min: 210, max: 200 })
        );

        let parsed: Result<HourlyRange, _> = serde_json::from_str("[220, 190]");
        assert!(parsed.is_err());
    }

    #[test]
    fn hourly_range_formats_with_en_dash() -> Result<(), InvertedRange> {
        assert_eq!(HourlyRange::new(180, 200)?.to_string(), "180–200 NOK/hr");
        Ok(())
    }

    #[test]
    fn contract_labels_match_serde_names() -> Result<(), serde_json::Error> {
        for contract in [
            Contract::FullTime,
            Contract::PartTime,
            Contract::Seasonal,
            Contract::Temporary,
        ] {
            let json = serde_json::to_string(&contract)?;
            assert_eq!(json, format!("\"{}\"", contract.as_str()));
            assert_eq!(contract.as_str().parse::<Contract>(), Ok(contract));
        }
        Ok(())
    }

    #[test]
    fn shift_rejects_unknown_label() {
        assert_eq!(
            "Graveyard".parse::<Shift>(),
            Err(FacetError::Unknown {
                facet: "shift",
                label: "Graveyard".to_string(),
            })
        );
        assert_eq!("".parse::<Shift>(), Err(FacetError::Empty));
    }
}
