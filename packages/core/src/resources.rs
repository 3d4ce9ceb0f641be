//! Auxiliary page content: quick stats, relocation tips and interview prep.

use serde::{Deserialize, Serialize};

/// Headline figure shown in the hero grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct QuickStat {
    pub label: String,
    pub value: String,
    pub detail: String,
}

/// External relocation resource.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RelocationTip {
    pub title: String,
    pub summary: String,
    /// Opened in a new tab, never rewritten.
    pub url: String,
}

/// Highlighted advice box below the interview checklist.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ApplicantTip {
    pub heading: String,
    pub body: String,
}
