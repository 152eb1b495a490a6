//! Author data models matching the directory wire format.

use serde::{Deserialize, Serialize};

/// Author search result page.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthorSearchResult {
    /// Total matching authors.
    #[serde(default)]
    pub total: i64,

    /// Offset for pagination.
    #[serde(default)]
    pub offset: i32,

    /// Next offset if more results.
    #[serde(default)]
    pub next: Option<i32>,

    /// List of candidates.
    #[serde(default)]
    pub data: Vec<AuthorCandidate>,
}

/// Lightweight search-result handle for a person.
///
/// Carries only the ID needed for a later fill plus a display name.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthorCandidate {
    /// Unique directory author ID.
    pub author_id: String,

    /// Author name.
    #[serde(default)]
    pub name: Option<String>,
}

impl AuthorCandidate {
    /// Get the display name, falling back to "Unknown" if not available.
    #[must_use]
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or("Unknown")
    }
}

/// A full author profile returned by a fill.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthorProfile {
    /// Unique directory author ID.
    pub author_id: String,

    /// Author name.
    #[serde(default)]
    pub name: Option<String>,

    /// Institutional affiliations.
    #[serde(default)]
    pub affiliations: Vec<String>,

    /// Directory profile page URL.
    #[serde(default)]
    pub url: Option<String>,

    /// Total citation count across all papers.
    #[serde(default)]
    pub citation_count: Option<i64>,

    /// Publications, in directory order.
    #[serde(default)]
    pub papers: Vec<PublicationRecord>,
}

impl AuthorProfile {
    /// Get the author name, falling back to "N/A" if not available.
    #[must_use]
    pub fn name_or_default(&self) -> &str {
        self.name.as_deref().unwrap_or("N/A")
    }

    /// Get the primary affiliation, falling back to "N/A".
    #[must_use]
    pub fn primary_affiliation(&self) -> &str {
        self.affiliations.first().map(String::as_str).unwrap_or("N/A")
    }

    /// Get the total citation count or 0 if not available.
    #[must_use]
    pub fn citations(&self) -> i64 {
        self.citation_count.unwrap_or(0)
    }

    /// Get the profile page URL or an empty string.
    #[must_use]
    pub fn profile_link(&self) -> &str {
        self.url.as_deref().unwrap_or("")
    }
}

/// A single publication inside a profile.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PublicationRecord {
    /// Publication title.
    #[serde(default)]
    pub title: Option<String>,

    /// Publication year.
    #[serde(default)]
    pub year: Option<i32>,

    /// Citation count for this publication.
    #[serde(default)]
    pub citation_count: Option<i64>,
}

impl PublicationRecord {
    /// Get the title, falling back to "N/A".
    #[must_use]
    pub fn title_or_default(&self) -> &str {
        self.title.as_deref().unwrap_or("N/A")
    }

    /// Get the year as a label, "N/A" when absent.
    #[must_use]
    pub fn year_label(&self) -> String {
        self.year.map_or_else(|| "N/A".to_string(), |y| y.to_string())
    }

    /// Get the citation count or 0 if not available.
    #[must_use]
    pub fn citations(&self) -> i64 {
        self.citation_count.unwrap_or(0)
    }
}
