/******************************************************************************
   Author: easy-sharepoint contributors
   Date: 16/10/26
******************************************************************************/
use crate::error::AppError;
use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Body of `POST _api/contextinfo`
#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone, PartialEq)]
pub struct ContextInfoResponse {
    /// Verbose OData wrapper
    pub d: ContextInfoData,
}

/// Content of the `d` key of a context info response
#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone, PartialEq)]
pub struct ContextInfoData {
    /// Web context information
    #[serde(rename = "GetContextWebInformation")]
    pub context_web_information: ContextWebInformation,
}

/// Web context information, including the form digest
#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone, PartialEq)]
pub struct ContextWebInformation {
    /// Anti-forgery token required by mutating requests
    #[serde(rename = "FormDigestValue")]
    pub form_digest_value: String,
    /// Lifetime of the digest in seconds
    #[serde(rename = "FormDigestTimeoutSeconds", default)]
    pub form_digest_timeout_seconds: Option<u64>,
    /// Full URL of the web
    #[serde(rename = "WebFullUrl", default)]
    pub web_full_url: Option<String>,
    /// Full URL of the site collection
    #[serde(rename = "SiteFullUrl", default)]
    pub site_full_url: Option<String>,
    /// Library version reported by the server
    #[serde(rename = "LibraryVersion", default)]
    pub library_version: Option<String>,
}

/// Parses a response body, mapping an empty body to `null`
///
/// Updates and deletions answer 204 without content.
pub fn parse_body(bytes: &[u8]) -> Result<Value, AppError> {
    if bytes.iter().all(u8::is_ascii_whitespace) {
        return Ok(Value::Null);
    }
    Ok(serde_json::from_slice(bytes)?)
}

/// Takes the entity out of `{"d": {...}}`
///
/// `null` (no content) is passed through.
pub fn unwrap_entity(value: Value) -> Result<Value, AppError> {
    match value {
        Value::Null => Ok(Value::Null),
        Value::Object(mut map) => map
            .remove("d")
            .ok_or_else(|| AppError::Deserialization("missing 'd' in OData response".to_string())),
        other => Err(AppError::Deserialization(format!(
            "expected an OData object, got {other}"
        ))),
    }
}

/// Takes the collection out of `{"d": {"results": [...]}}`
pub fn unwrap_collection(value: Value) -> Result<Vec<Value>, AppError> {
    match unwrap_entity(value)? {
        Value::Object(mut map) => match map.remove("results") {
            Some(Value::Array(results)) => Ok(results),
            _ => Err(AppError::Deserialization(
                "missing 'd.results' array in OData response".to_string(),
            )),
        },
        _ => Err(AppError::Deserialization(
            "expected an OData collection".to_string(),
        )),
    }
}
