//! # easy-sharepoint
//!
//! Client for the SharePoint REST (`_api`) interface of on-premises sites
//! protected by NTLM authentication.
//!
//! ## Features
//!
//! - NTLMv2 handshake on every request, no external helper needed
//! - Form digest fetched automatically before each mutating request
//! - Lists, columns, views, items, folders, files and item attachments
//! - Escape hatch for any other endpoint through
//!   [`SharePointClient::custom_query`](application::client::SharePointClient::custom_query)
//! - Typed errors carrying the HTTP status and body of failed calls
//!
//! ## Configuration
//!
//! [`Config::new`](application::config::Config::new) reads the following
//! environment variables (a `.env` file is honoured):
//!
//! ```text
//! SHAREPOINT_BASE_URL=https://intranet.example.com/sites/team
//! SHAREPOINT_DOMAIN=eur
//! SHAREPOINT_LOGIN=jdoe
//! SHAREPOINT_PASSWORD=secret
//! SHAREPOINT_TIMEOUT=30
//! SHAREPOINT_PAGE_SIZE=5000
//! SHAREPOINT_SUCCESS_CODES=200,201,202,204
//! LOGLEVEL=INFO
//! ```
//!
//! ## Usage
//!
//! ```ignore
//! use easy_sharepoint::prelude::*;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), AppError> {
//!     setup_logger();
//!     let client = SharePointClient::connect(Config::new()).await?;
//!
//!     let mut data = serde_json::Map::new();
//!     data.insert("Title".into(), "Write report".into());
//!     client.create_item("Tasks", &data).await?;
//!
//!     for item in client.items("Tasks").await? {
//!         info!("{}", item["Title"]);
//!     }
//!     Ok(())
//! }
//! ```

/// Client, session, configuration and services
pub mod application;

/// Library wide constants
pub mod constants;

/// Error type shared by every operation
pub mod error;

/// HTTP plumbing, request settings, payloads and responses
pub mod model;

/// Convenience re-exports
pub mod prelude;

/// Environment and logging helpers
pub mod utils;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Returns the library version
#[must_use]
pub fn version() -> &'static str {
    VERSION
}
