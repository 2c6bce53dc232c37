use crate::application::client::{SharePointClient, read_local_file};
use crate::application::endpoints;
use crate::application::interfaces::attachment::AttachmentService;
use crate::error::AppError;
use crate::model::http::Verb;
use async_trait::async_trait;
use serde_json::Value;
use std::path::Path;
use tracing::info;

#[async_trait]
impl AttachmentService for SharePointClient {
    async fn list_attachments(
        &self,
        list_name: &str,
        item_id: u64,
    ) -> Result<Vec<Value>, AppError> {
        info!("Listing attachments of item {} in {}", item_id, list_name);
        self.fetch_collection(&endpoints::attachments(list_name, item_id))
            .await
    }

    async fn get_attachment(
        &self,
        list_name: &str,
        item_id: u64,
        file_name: &str,
    ) -> Result<Vec<u8>, AppError> {
        info!(
            "Downloading attachment {} of item {} in {}",
            file_name, item_id, list_name
        );
        self.fetch_bytes(&endpoints::attachment_content(list_name, item_id, file_name))
            .await
    }

    async fn create_attachment(
        &self,
        list_name: &str,
        item_id: u64,
        path: &Path,
    ) -> Result<Value, AppError> {
        let (file_name, content) = read_local_file(path).await?;
        info!(
            "Attaching {} to item {} in {}",
            file_name, item_id, list_name
        );
        self.send_file(
            Verb::Post,
            &endpoints::attachment_add(list_name, item_id, &file_name),
            content,
            None,
        )
        .await
    }

    async fn update_attachment(
        &self,
        list_name: &str,
        item_id: u64,
        path: &Path,
    ) -> Result<Value, AppError> {
        let (file_name, content) = read_local_file(path).await?;
        info!(
            "Replacing attachment {} of item {} in {}",
            file_name, item_id, list_name
        );
        self.send_file(
            Verb::Put,
            &endpoints::attachment_content(list_name, item_id, &file_name),
            content,
            Some("PUT"),
        )
        .await
    }
}
