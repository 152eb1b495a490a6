//! Bounded summary records returned to API clients.

use serde::{Deserialize, Serialize};

use super::author::{AuthorProfile, PublicationRecord};
use crate::config::limits;

/// Summary of a faculty member's profile.
///
/// Field names are part of the public API surface.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FacultySummary {
    /// Exact name as recorded in the directory.
    pub exact_name: String,

    /// Primary affiliation.
    pub affiliation: String,

    /// Total citations across all publications.
    pub total_citations: i64,

    /// Up to five publications, in directory order.
    pub publications: Vec<PublicationSummary>,

    /// Directory profile page URL, empty when unknown.
    pub profile_link: String,
}

/// A publication entry inside a summary.
///
/// Capitalized keys are preserved from the legacy API surface.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PublicationSummary {
    /// Publication title.
    #[serde(rename = "Title")]
    pub title: String,

    /// Publication year, "N/A" when absent.
    #[serde(rename = "Year")]
    pub year: String,

    /// Citation count for this publication.
    #[serde(rename = "Citations")]
    pub citations: i64,
}

impl FacultySummary {
    /// Project a full profile into a bounded summary.
    ///
    /// Absent upstream fields become their documented defaults; projection
    /// never fails.
    #[must_use]
    pub fn project(profile: &AuthorProfile) -> Self {
        let publications = profile
            .papers
            .iter()
            .take(limits::MAX_PUBLICATIONS)
            .map(PublicationSummary::from_record)
            .collect();

        Self {
            exact_name: profile.name_or_default().to_string(),
            affiliation: profile.primary_affiliation().to_string(),
            total_citations: profile.citations(),
            publications,
            profile_link: profile.profile_link().to_string(),
        }
    }
}

impl PublicationSummary {
    fn from_record(record: &PublicationRecord) -> Self {
        Self {
            title: record.title_or_default().to_string(),
            year: record.year_label(),
            citations: record.citations(),
        }
    }
}
