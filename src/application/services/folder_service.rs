use crate::application::client::SharePointClient;
use crate::application::endpoints;
use crate::application::interfaces::folder::FolderService;
use crate::error::AppError;
use crate::model::http::{RequestBody, Verb};
use crate::model::payload::PayloadBuilder;
use async_trait::async_trait;
use serde_json::{Map, Value, json};
use tracing::info;

#[async_trait]
impl FolderService for SharePointClient {
    async fn folder_info(&self, folder_name: &str) -> Result<Value, AppError> {
        info!("Getting information for folder {}", folder_name);
        self.fetch_entity(Verb::Get, &endpoints::folder(folder_name), RequestBody::Empty)
            .await
    }

    async fn create_folder(&self, folder_name: &str, library: &str) -> Result<Value, AppError> {
        info!("Creating folder {} in {}", folder_name, library);
        let mut data = Map::new();
        data.insert(
            "ServerRelativeUrl".into(),
            json!(format!(
                "/{}/{}",
                library.trim_matches('/'),
                folder_name.trim_matches('/')
            )),
        );
        let body = RequestBody::Json(PayloadBuilder::folder(&data));
        self.fetch_entity(Verb::Post, &endpoints::folders(), body).await
    }

    async fn update_folder(
        &self,
        folder_name: &str,
        data: &Map<String, Value>,
    ) -> Result<Value, AppError> {
        info!("Updating folder {}", folder_name);
        let body = RequestBody::Json(PayloadBuilder::folder(data));
        self.fetch_entity(Verb::Put, &endpoints::folder(folder_name), body)
            .await
    }

    async fn delete_folder(&self, folder_name: &str) -> Result<Value, AppError> {
        info!("Deleting folder {}", folder_name);
        self.fetch_entity(
            Verb::Delete,
            &endpoints::folder(folder_name),
            RequestBody::Empty,
        )
        .await
    }
}
