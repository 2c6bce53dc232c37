use crate::error::AppError;
use async_trait::async_trait;
use serde_json::Value;
use std::path::Path;

/// Interface for list item attachment operations
#[async_trait]
pub trait AttachmentService: Send + Sync {
    /// Lists the attachments of an item
    async fn list_attachments(&self, list_name: &str, item_id: u64)
    -> Result<Vec<Value>, AppError>;

    /// Downloads the content of an attachment
    async fn get_attachment(
        &self,
        list_name: &str,
        item_id: u64,
        file_name: &str,
    ) -> Result<Vec<u8>, AppError>;

    /// Attaches a local file to an item
    async fn create_attachment(
        &self,
        list_name: &str,
        item_id: u64,
        path: &Path,
    ) -> Result<Value, AppError>;

    /// Replaces the content of the attachment named like the local file
    async fn update_attachment(
        &self,
        list_name: &str,
        item_id: u64,
        path: &Path,
    ) -> Result<Value, AppError>;
}
