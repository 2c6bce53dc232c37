/******************************************************************************
   Author: easy-sharepoint contributors
   Date: 16/10/26
******************************************************************************/

//! # Prelude
//!
//! Imports the types and traits most programs need:
//!
//! ```rust
//! use easy_sharepoint::prelude::*;
//!
//! let config = Config::with_credentials("https://intranet.example.com", "eur", "jdoe", "secret");
//! assert!(config.validate().is_ok());
//! ```

// ============================================================================
// CONFIGURATION
// ============================================================================

/// Client configuration
pub use crate::application::config::{Config, Credentials, RestApiConfig};

/// Library version information
pub use crate::{VERSION, version};

// ============================================================================
// ERROR HANDLING
// ============================================================================

/// Main error type for the library
pub use crate::error::AppError;

// ============================================================================
// CLIENT AND SESSION
// ============================================================================

/// SharePoint client facade
pub use crate::application::client::SharePointClient;

/// Authenticated session
pub use crate::application::auth::Session;

/// Permission checks on a dedicated session
pub use crate::application::permissions::PermissionHandler;

// ============================================================================
// SERVICE TRAITS
// ============================================================================

pub use crate::application::interfaces::attachment::AttachmentService;
pub use crate::application::interfaces::file::FileService;
pub use crate::application::interfaces::folder::FolderService;
pub use crate::application::interfaces::item::ItemService;
pub use crate::application::interfaces::list::ListService;

// ============================================================================
// MODELS
// ============================================================================

/// HTTP verbs and per request headers
pub use crate::model::http::{RequestBody, RequestHeaders, Verb};

/// OData envelope builder
pub use crate::model::payload::PayloadBuilder;

/// Request settings
pub use crate::model::requests::{CheckInType, FieldType, ListTemplate, NewField, NewList};

// ============================================================================
// UTILITIES
// ============================================================================

/// Logging utilities
pub use crate::utils::logger::setup_logger;

/// Global constants
pub use crate::constants::*;

// ============================================================================
// RE-EXPORTS FROM EXTERNAL CRATES
// ============================================================================

pub use async_trait::async_trait;
pub use serde::{Deserialize, Serialize};
pub use serde_json::{Map, Value, json};
pub use tracing::{debug, error, info, warn};
