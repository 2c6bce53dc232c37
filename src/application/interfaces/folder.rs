use crate::error::AppError;
use async_trait::async_trait;
use serde_json::{Map, Value};

/// Interface for folder operations
#[async_trait]
pub trait FolderService: Send + Sync {
    /// Gets the properties of a folder
    ///
    /// # Arguments
    /// * `folder_name` - Server relative path of the folder, e.g. `Shared Documents/Reports`
    async fn folder_info(&self, folder_name: &str) -> Result<Value, AppError>;

    /// Creates `folder_name` inside `library`
    async fn create_folder(&self, folder_name: &str, library: &str) -> Result<Value, AppError>;

    /// Updates the properties of a folder
    async fn update_folder(
        &self,
        folder_name: &str,
        data: &Map<String, Value>,
    ) -> Result<Value, AppError>;

    /// Deletes a folder
    async fn delete_folder(&self, folder_name: &str) -> Result<Value, AppError>;
}
