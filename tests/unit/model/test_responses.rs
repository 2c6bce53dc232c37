use easy_sharepoint::error::AppError;
use easy_sharepoint::model::responses::{
    ContextInfoResponse, parse_body, unwrap_collection, unwrap_entity,
};
use serde_json::{Value, json};

#[test]
fn test_context_info_deserialization() {
    let body = json!({
        "d": {
            "GetContextWebInformation": {
                "FormDigestValue": "0xABC,16 Oct 2026 10:00:00 -0000",
                "FormDigestTimeoutSeconds": 1800,
                "WebFullUrl": "https://intranet/sites/team"
            }
        }
    });
    let info: ContextInfoResponse = serde_json::from_value(body).unwrap();
    let web = info.d.context_web_information;
    assert_eq!(web.form_digest_value, "0xABC,16 Oct 2026 10:00:00 -0000");
    assert_eq!(web.form_digest_timeout_seconds, Some(1800));
    assert_eq!(web.site_full_url, None);
}

#[test]
fn test_context_info_requires_digest() {
    let body = json!({"d": {"GetContextWebInformation": {}}});
    assert!(serde_json::from_value::<ContextInfoResponse>(body).is_err());
}

#[test]
fn test_parse_body_empty_is_null() {
    assert_eq!(parse_body(b"").unwrap(), Value::Null);
    assert_eq!(parse_body(b"  \n").unwrap(), Value::Null);
}

#[test]
fn test_parse_body_invalid_json() {
    assert!(matches!(parse_body(b"<html>"), Err(AppError::Json(_))));
}

#[test]
fn test_unwrap_entity() {
    let value = json!({"d": {"Id": 7, "Title": "x"}});
    assert_eq!(unwrap_entity(value).unwrap(), json!({"Id": 7, "Title": "x"}));
    assert_eq!(unwrap_entity(Value::Null).unwrap(), Value::Null);
}

#[test]
fn test_unwrap_entity_missing_d() {
    assert!(matches!(
        unwrap_entity(json!({"value": []})),
        Err(AppError::Deserialization(_))
    ));
    assert!(matches!(
        unwrap_entity(json!([1, 2])),
        Err(AppError::Deserialization(_))
    ));
}

#[test]
fn test_unwrap_collection() {
    let value = json!({"d": {"results": [{"Id": 1}, {"Id": 2}]}});
    let results = unwrap_collection(value).unwrap();
    assert_eq!(results.len(), 2);
    assert_eq!(results[1]["Id"], json!(2));
}

#[test]
fn test_unwrap_collection_missing_results() {
    assert!(matches!(
        unwrap_collection(json!({"d": {"Id": 1}})),
        Err(AppError::Deserialization(_))
    ));
    assert!(matches!(
        unwrap_collection(Value::Null),
        Err(AppError::Deserialization(_))
    ));
}
