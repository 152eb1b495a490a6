//! The two lookup operations exposed over HTTP.
//!
//! Each call is a single linear sequence: validate, search, optionally
//! fill, project. Operations return `Result` variants; the transport
//! layer maps them to status codes.

mod finder;
mod summary;

pub use finder::list_faculty_names;
pub use summary::generate_summary;

use std::sync::Arc;

use crate::client::AuthorDirectoryClient;

/// Shared execution context handed to each operation.
#[derive(Debug, Clone)]
pub struct OpContext {
    /// Directory client.
    pub client: Arc<AuthorDirectoryClient>,
}

impl OpContext {
    /// Create a new operation context.
    #[must_use]
    pub fn new(client: Arc<AuthorDirectoryClient>) -> Self {
        Self { client }
    }
}
