//! StatusGator API v3 client library.
//!
//! Provides a typed async client for the StatusGator REST API: boards,
//! monitors, incidents, monitor groups, components, services, subscribers,
//! users, and monitoring regions.
//!
//! ```no_run
//! use statusgator::Client;
//!
//! # async fn run() -> Result<(), statusgator::Error> {
//! let client = Client::new("my-api-token")?;
//! let boards = client.boards().list_all().await?;
//! for board in boards {
//!     println!("{}", board.name);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! Failures surface as typed [`Error`] values; use the classification
//! predicates (`is_not_found`, `is_unauthorized`, `is_forbidden`) instead of
//! string matching. No retries are performed; the caller decides whether to
//! retry.

pub mod boards;
pub mod client;
pub mod components;
pub mod custom_monitors;
mod envelope;
pub mod error;
pub mod incidents;
pub mod models;
pub mod monitor_groups;
pub mod monitors;
pub mod pagination;
pub mod ping_monitors;
pub mod regions;
pub mod service_monitors;
pub mod services;
pub mod subscribers;
pub mod users;
pub mod website_monitors;

pub use client::{Client, ClientBuilder, DEFAULT_BASE_URL, DEFAULT_MAX_RESPONSE_SIZE};
pub use error::{ApiError, Error};
pub use models::*;
pub use pagination::{ListOptions, Pagination, DEFAULT_PAGE, DEFAULT_PER_PAGE, MAX_PER_PAGE};

/// Library version for User-Agent and diagnostics.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
