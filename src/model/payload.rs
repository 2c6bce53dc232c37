//! OData request bodies
//!
//! Every body SharePoint accepts in verbose mode starts with a
//! `__metadata.type` naming the entity. Caller supplied fields are written
//! after the envelope, so a caller can override anything, `__metadata`
//! included.

use crate::constants::{ITEM_TYPE_PREFIX, ITEM_TYPE_SUFFIX};
use crate::model::requests::{NewField, NewList};
use serde_json::{Map, Value, json};

/// Builder for the OData envelopes sent by the client
pub struct PayloadBuilder;

impl PayloadBuilder {
    /// Entity type name of the items of `list_name`
    ///
    /// The first character is upper cased and the rest kept verbatim:
    /// `"Tasks"` and `"tasks"` both give `"SP.Data.TasksListItem"`.
    #[must_use]
    pub fn item_type_name(list_name: &str) -> String {
        let mut chars = list_name.chars();
        let capitalized: String = match chars.next() {
            Some(first) => first.to_uppercase().chain(chars).collect(),
            None => String::new(),
        };
        format!("{ITEM_TYPE_PREFIX}{capitalized}{ITEM_TYPE_SUFFIX}")
    }

    /// Body of a list item create or update
    #[must_use]
    pub fn list_item(list_name: &str, data: &Map<String, Value>) -> Value {
        envelope(&Self::item_type_name(list_name), Map::new(), data)
    }

    /// Body of a list creation
    #[must_use]
    pub fn list(list: &NewList) -> Value {
        let mut fields = Map::new();
        fields.insert("AllowContentTypes".into(), json!(list.allow_content_types));
        fields.insert("BaseTemplate".into(), json!(list.base_template));
        fields.insert(
            "ContentTypesEnabled".into(),
            json!(list.content_types_enabled),
        );
        fields.insert("Description".into(), json!(list.description));
        fields.insert("Title".into(), json!(list.title));
        envelope("SP.List", fields, &list.extra)
    }

    /// Body of a list update
    #[must_use]
    pub fn list_update(data: &Map<String, Value>) -> Value {
        envelope("SP.List", Map::new(), data)
    }

    /// Body of a folder create or update
    #[must_use]
    pub fn folder(data: &Map<String, Value>) -> Value {
        envelope("SP.Folder", Map::new(), data)
    }

    /// Body of a column creation
    #[must_use]
    pub fn field(field: &NewField) -> Value {
        let mut fields = Map::new();
        fields.insert("Title".into(), json!(field.title));
        fields.insert("FieldTypeKind".into(), json!(field.kind));
        envelope("SP.Field", fields, &Map::new())
    }
}

fn envelope(entity_type: &str, defaults: Map<String, Value>, data: &Map<String, Value>) -> Value {
    let mut body = Map::new();
    body.insert("__metadata".into(), json!({ "type": entity_type }));
    body.extend(defaults);
    body.extend(data.iter().map(|(k, v)| (k.clone(), v.clone())));
    Value::Object(body)
}
