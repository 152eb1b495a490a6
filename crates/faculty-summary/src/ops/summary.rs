//! Faculty summary generation.

use super::OpContext;
use crate::error::{OpError, OpResult};
use crate::models::FacultySummary;

/// Resolve a faculty name to its first directory match, fill the profile,
/// and project it into a bounded summary.
///
/// Either a full projection or an error is returned; partial results
/// never are.
///
/// # Errors
///
/// Returns `InvalidInput` for a blank name (no directory call is made),
/// `NotFound` when no author matches, and `Upstream` for any fault during
/// search or fill.
pub async fn generate_summary(ctx: &OpContext, faculty_name: &str) -> OpResult<FacultySummary> {
    let name = faculty_name.trim();
    if name.is_empty() {
        return Err(OpError::invalid_input("Faculty name is required."));
    }

    tracing::info!(name, "Generating summary");

    // Only the first candidate is ever consumed.
    let result = ctx.client.search_authors(name, 1).await?;
    let Some(candidate) = result.data.first() else {
        return Err(OpError::not_found(name));
    };

    let profile = ctx.client.fetch_profile(&candidate.author_id).await?;

    Ok(FacultySummary::project(&profile))
}
