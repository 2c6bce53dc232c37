//! Service implementations for [`SharePointClient`](crate::application::client::SharePointClient)

/// List, column and view operations
pub mod list_service;
/// List item operations
pub mod item_service;
/// Folder operations
pub mod folder_service;
/// File operations
pub mod file_service;
/// Attachment operations
pub mod attachment_service;
