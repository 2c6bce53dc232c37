use crate::error::AppError;
use crate::model::requests::CheckInType;
use async_trait::async_trait;
use serde_json::Value;
use std::path::Path;

/// Interface for document library file operations
#[async_trait]
pub trait FileService: Send + Sync {
    /// Downloads the content of a file
    async fn get_file(&self, file_name: &str, library: &str) -> Result<Vec<u8>, AppError>;

    /// Lists the files of a folder
    async fn list_files(&self, folder_name: &str) -> Result<Vec<Value>, AppError>;

    /// Uploads a local file into `library`, replacing a file of the same name
    ///
    /// The file is read fully into memory before it is sent.
    async fn upload_file(&self, path: &Path, library: &str) -> Result<Value, AppError>;

    /// Replaces the content of an existing file with a local file of the same name
    async fn update_file(&self, path: &Path, library: &str) -> Result<Value, AppError>;

    /// Checks a file out
    async fn check_out(&self, file_name: &str, library: &str) -> Result<Value, AppError>;

    /// Checks a file in
    async fn check_in(
        &self,
        file_name: &str,
        library: &str,
        comment: &str,
        check_in_type: CheckInType,
    ) -> Result<Value, AppError>;

    /// Deletes a file
    async fn delete_file(&self, file_name: &str, library: &str) -> Result<Value, AppError>;
}
