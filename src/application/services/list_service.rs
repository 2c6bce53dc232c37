use crate::application::client::SharePointClient;
use crate::application::endpoints;
use crate::application::interfaces::list::ListService;
use crate::error::AppError;
use crate::model::http::{RequestBody, Verb};
use crate::model::payload::PayloadBuilder;
use crate::model::requests::{NewField, NewList};
use async_trait::async_trait;
use serde_json::{Map, Value};
use tracing::{debug, info};

#[async_trait]
impl ListService for SharePointClient {
    async fn list_all(&self) -> Result<Vec<Value>, AppError> {
        info!("Getting all lists");
        let path = endpoints::lists_page(self.config().rest_api.page_size);
        let lists = self.fetch_collection(&path).await?;
        debug!("Lists obtained: {}", lists.len());
        Ok(lists)
    }

    async fn create_list(&self, list: &NewList) -> Result<Value, AppError> {
        list.validate()?;
        info!("Creating list {}", list.title);
        let body = RequestBody::Json(PayloadBuilder::list(list));
        self.fetch_entity(Verb::Post, &endpoints::lists(), body).await
    }

    async fn update_list(
        &self,
        list_id: &str,
        data: &Map<String, Value>,
    ) -> Result<Value, AppError> {
        info!("Updating list {}", list_id);
        let body = RequestBody::Json(PayloadBuilder::list_update(data));
        self.fetch_entity(Verb::Put, &endpoints::list_by_id(list_id), body)
            .await
    }

    async fn delete_list(&self, list_id: &str) -> Result<Value, AppError> {
        info!("Deleting list {}", list_id);
        self.fetch_entity(Verb::Delete, &endpoints::list_by_id(list_id), RequestBody::Empty)
            .await
    }

    async fn create_field(&self, list_name: &str, field: &NewField) -> Result<Value, AppError> {
        field.validate()?;
        info!(
            "Creating field {} of type {} in {}",
            field.title, field.kind, list_name
        );
        let body = RequestBody::Json(PayloadBuilder::field(field));
        self.fetch_entity(Verb::Post, &endpoints::fields(list_name), body)
            .await
    }

    async fn views(&self, list_id: &str) -> Result<Vec<Value>, AppError> {
        info!("Getting views of list {}", list_id);
        self.fetch_collection(&endpoints::views(list_id)).await
    }

    async fn add_view_field(
        &self,
        list_id: &str,
        view_id: &str,
        field_name: &str,
    ) -> Result<Value, AppError> {
        info!("Adding field {} to view {}", field_name, view_id);
        let path = endpoints::add_view_field(list_id, view_id, field_name);
        self.fetch_entity(Verb::Post, &path, RequestBody::Empty).await
    }
}
