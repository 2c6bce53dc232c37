use crate::error::AppError;
use crate::model::requests::{NewField, NewList};
use async_trait::async_trait;
use serde_json::{Map, Value};

/// Interface for list, column and view operations
#[async_trait]
pub trait ListService: Send + Sync {
    /// Gets all lists of the site, up to the configured page size
    async fn list_all(&self) -> Result<Vec<Value>, AppError>;

    /// Creates a list
    ///
    /// # Arguments
    /// * `list` - List settings; see [`NewList`] for the defaults
    ///
    /// # Returns
    /// * The created list entity
    async fn create_list(&self, list: &NewList) -> Result<Value, AppError>;

    /// Updates the properties of a list
    ///
    /// # Arguments
    /// * `list_id` - GUID of the list
    /// * `data` - Properties to change, wrapped in an `SP.List` envelope
    async fn update_list(&self, list_id: &str, data: &Map<String, Value>)
    -> Result<Value, AppError>;

    /// Deletes a list by GUID
    async fn delete_list(&self, list_id: &str) -> Result<Value, AppError>;

    /// Adds a column to a list
    ///
    /// The field type code is sent as is, without validation.
    async fn create_field(&self, list_name: &str, field: &NewField) -> Result<Value, AppError>;

    /// Gets the views of a list
    async fn views(&self, list_id: &str) -> Result<Vec<Value>, AppError>;

    /// Adds a column to a view
    async fn add_view_field(
        &self,
        list_id: &str,
        view_id: &str,
        field_name: &str,
    ) -> Result<Value, AppError>;
}
