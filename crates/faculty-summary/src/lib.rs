//! Faculty Summary Service
//!
//! A small HTTP API that looks up academic authors through an external
//! scholarly-profile directory and returns simplified JSON summaries.
//!
//! # Features
//!
//! - **Faculty search**: resolve a free-text keyword to up to 5 candidate
//!   author names
//! - **Profile summaries**: resolve an exact name, fill the author's full
//!   profile, and project it into a bounded summary (affiliation, total
//!   citations, up to 5 publications, profile link)
//! - **Async-first**: built on Tokio and axum, stateless per request
//!
//! # Example
//!
//! ```no_run
//! use faculty_summary::{AuthorDirectoryClient, config::Config};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::from_env();
//!     let client = AuthorDirectoryClient::new(config)?;
//!
//!     // Use client for directory calls
//!     Ok(())
//! }
//! ```

pub mod client;
pub mod config;
pub mod error;
pub mod models;
pub mod ops;
pub mod server;

pub use client::AuthorDirectoryClient;
pub use config::Config;
pub use error::{ClientError, OpError};
