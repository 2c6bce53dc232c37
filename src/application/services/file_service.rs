use crate::application::client::{SharePointClient, read_local_file};
use crate::application::endpoints;
use crate::application::interfaces::file::FileService;
use crate::error::AppError;
use crate::model::http::{RequestBody, Verb};
use crate::model::requests::CheckInType;
use async_trait::async_trait;
use serde_json::Value;
use std::path::Path;
use tracing::{debug, info};

#[async_trait]
impl FileService for SharePointClient {
    async fn get_file(&self, file_name: &str, library: &str) -> Result<Vec<u8>, AppError> {
        info!("Downloading {} from {}", file_name, library);
        let content = self
            .fetch_bytes(&endpoints::file_content(library, file_name))
            .await?;
        debug!("Downloaded {} bytes", content.len());
        Ok(content)
    }

    async fn list_files(&self, folder_name: &str) -> Result<Vec<Value>, AppError> {
        info!("Listing files of {}", folder_name);
        self.fetch_collection(&endpoints::folder_files(folder_name))
            .await
    }

    async fn upload_file(&self, path: &Path, library: &str) -> Result<Value, AppError> {
        let (file_name, content) = read_local_file(path).await?;
        info!("Uploading {} to {}", file_name, library);
        self.send_file(
            Verb::Post,
            &endpoints::file_upload(library, &file_name),
            content,
            None,
        )
        .await
    }

    async fn update_file(&self, path: &Path, library: &str) -> Result<Value, AppError> {
        let (file_name, content) = read_local_file(path).await?;
        info!("Replacing content of {} in {}", file_name, library);
        self.send_file(
            Verb::Put,
            &endpoints::file_content(library, &file_name),
            content,
            Some("PUT"),
        )
        .await
    }

    async fn check_out(&self, file_name: &str, library: &str) -> Result<Value, AppError> {
        info!("Checking out {} in {}", file_name, library);
        self.fetch_entity(
            Verb::Post,
            &endpoints::check_out(library, file_name),
            RequestBody::Empty,
        )
        .await
    }

    async fn check_in(
        &self,
        file_name: &str,
        library: &str,
        comment: &str,
        check_in_type: CheckInType,
    ) -> Result<Value, AppError> {
        info!("Checking in {} in {} ({:?})", file_name, library, check_in_type);
        let path = endpoints::check_in(library, file_name, comment, check_in_type.code());
        self.fetch_entity(Verb::Post, &path, RequestBody::Empty)
            .await
    }

    async fn delete_file(&self, file_name: &str, library: &str) -> Result<Value, AppError> {
        info!("Deleting {} from {}", file_name, library);
        self.fetch_entity(
            Verb::Delete,
            &endpoints::file(library, file_name),
            RequestBody::Empty,
        )
        .await
    }
}
