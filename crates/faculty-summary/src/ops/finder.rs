//! Faculty name lookup.

use super::OpContext;
use crate::config::limits;
use crate::error::{OpError, OpResult};

/// Look up candidate faculty names for a search keyword.
///
/// Returns at most [`limits::MAX_FACULTY_RESULTS`] names in directory
/// ranking order, each defaulting to "Unknown" when the directory omits
/// the name.
///
/// # Errors
///
/// Returns `InvalidInput` for a blank keyword (no directory call is made)
/// and `Upstream` for any directory fault.
pub async fn list_faculty_names(ctx: &OpContext, search: &str) -> OpResult<Vec<String>> {
    let keyword = search.trim();
    if keyword.is_empty() {
        return Err(OpError::invalid_input("Search keyword is required."));
    }

    tracing::info!(keyword, "Searching for authors matching keyword");

    let result = ctx.client.search_authors(keyword, limits::MAX_FACULTY_RESULTS).await?;

    Ok(result
        .data
        .iter()
        .take(limits::MAX_FACULTY_RESULTS)
        .map(|candidate| candidate.display_name().to_string())
        .collect())
}
