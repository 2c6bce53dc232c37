use crate::error::AppError;
use async_trait::async_trait;
use serde_json::{Map, Value};

/// Interface for list item operations
#[async_trait]
pub trait ItemService: Send + Sync {
    /// Gets the items of a list, up to the configured page size
    async fn items(&self, list_name: &str) -> Result<Vec<Value>, AppError>;

    /// Creates an item
    ///
    /// The entity type is derived from the list name
    /// (`"Tasks"` gives `SP.Data.TasksListItem`).
    async fn create_item(&self, list_name: &str, data: &Map<String, Value>)
    -> Result<Value, AppError>;

    /// Updates an existing item
    async fn update_item(
        &self,
        list_name: &str,
        item_id: u64,
        data: &Map<String, Value>,
    ) -> Result<Value, AppError>;

    /// Deletes an item
    async fn delete_item(&self, list_name: &str, item_id: u64) -> Result<Value, AppError>;
}
