//! Data models for directory entities and summary projections.
//!
//! Directory models use `#[serde(default)]` for optional fields and
//! `rename` attributes to match the wire naming.

mod author;
mod summary;

pub use author::{AuthorCandidate, AuthorProfile, AuthorSearchResult, PublicationRecord};
pub use summary::{FacultySummary, PublicationSummary};
