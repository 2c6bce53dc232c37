use crate::application::client::SharePointClient;
use crate::application::endpoints;
use crate::application::interfaces::item::ItemService;
use crate::error::AppError;
use crate::model::http::{RequestBody, Verb};
use crate::model::payload::PayloadBuilder;
use async_trait::async_trait;
use serde_json::{Map, Value};
use tracing::{debug, info};

#[async_trait]
impl ItemService for SharePointClient {
    async fn items(&self, list_name: &str) -> Result<Vec<Value>, AppError> {
        info!("Getting items of {}", list_name);
        let path = endpoints::items_page(list_name, self.config().rest_api.page_size);
        let items = self.fetch_collection(&path).await?;
        debug!("Items obtained from {}: {}", list_name, items.len());
        Ok(items)
    }

    async fn create_item(
        &self,
        list_name: &str,
        data: &Map<String, Value>,
    ) -> Result<Value, AppError> {
        info!("Creating item in {}", list_name);
        let body = RequestBody::Json(PayloadBuilder::list_item(list_name, data));
        self.fetch_entity(Verb::Post, &endpoints::items(list_name), body)
            .await
    }

    async fn update_item(
        &self,
        list_name: &str,
        item_id: u64,
        data: &Map<String, Value>,
    ) -> Result<Value, AppError> {
        info!("Updating item {} in {}", item_id, list_name);
        let body = RequestBody::Json(PayloadBuilder::list_item(list_name, data));
        self.fetch_entity(Verb::Put, &endpoints::item(list_name, item_id), body)
            .await
    }

    async fn delete_item(&self, list_name: &str, item_id: u64) -> Result<Value, AppError> {
        info!("Deleting item {} in {}", item_id, list_name);
        self.fetch_entity(
            Verb::Delete,
            &endpoints::item(list_name, item_id),
            RequestBody::Empty,
        )
        .await
    }
}
