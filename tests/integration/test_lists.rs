use crate::common::{DIGEST, mock_digest, path, setup};
use easy_sharepoint::prelude::*;
use mockito::Matcher;

#[tokio::test]
async fn test_list_all_uses_page_size() {
    let (mut server, client) = setup().await;
    let mock = server
        .mock("GET", path("_api/web/lists"))
        .match_query(Matcher::UrlEncoded("$top".into(), "5000".into()))
        .match_header("accept", ODATA_VERBOSE)
        .with_status(200)
        .with_body(
            json!({"d": {"results": [{"Title": "Tasks"}, {"Title": "Documents"}]}}).to_string(),
        )
        .create_async()
        .await;

    let lists = client.list_all().await.unwrap();
    assert_eq!(lists.len(), 2);
    assert_eq!(lists[0]["Title"], "Tasks");
    mock.assert_async().await;
}

#[tokio::test]
async fn test_create_list_default_payload() {
    let (mut server, client) = setup().await;
    let digest = mock_digest(&mut server).await;
    let mock = server
        .mock("POST", path("_api/web/lists"))
        .match_header("x-requestdigest", DIGEST)
        .match_header("content-type", ODATA_VERBOSE)
        .match_body(Matcher::PartialJson(json!({
            "__metadata": {"type": "SP.List"},
            "AllowContentTypes": true,
            "BaseTemplate": 100,
            "ContentTypesEnabled": true,
            "Description": "",
            "Title": "Projects"
        })))
        .with_status(201)
        .with_body(json!({"d": {"Id": "abc", "Title": "Projects"}}).to_string())
        .create_async()
        .await;

    let list = client.create_list(&NewList::new("Projects")).await.unwrap();
    assert_eq!(list["Id"], "abc");
    digest.assert_async().await;
    mock.assert_async().await;
}

#[tokio::test]
async fn test_create_list_blank_title_sends_nothing() {
    let (mut server, client) = setup().await;
    let digest = server
        .mock("POST", path("_api/contextinfo"))
        .expect(0)
        .create_async()
        .await;

    let result = client.create_list(&NewList::new("")).await;
    assert!(matches!(result, Err(AppError::InvalidInput(_))));
    digest.assert_async().await;
}

#[tokio::test]
async fn test_update_list_headers() {
    let (mut server, client) = setup().await;
    let _digest = mock_digest(&mut server).await;
    let mock = server
        .mock("POST", path("_api/web/lists(guid'abc')"))
        .match_header("x-http-method", "PATCH")
        .match_header("if-match", "*")
        .match_header("x-requestdigest", DIGEST)
        .match_body(Matcher::PartialJson(json!({
            "__metadata": {"type": "SP.List"},
            "Description": "updated"
        })))
        .with_status(204)
        .create_async()
        .await;

    let mut data = Map::new();
    data.insert("Description".into(), json!("updated"));
    let result = client.update_list("abc", &data).await.unwrap();
    assert_eq!(result, Value::Null);
    mock.assert_async().await;
}

#[tokio::test]
async fn test_delete_list() {
    let (mut server, client) = setup().await;
    let _digest = mock_digest(&mut server).await;
    let mock = server
        .mock("DELETE", path("_api/web/lists(guid'abc')"))
        .match_header("x-http-method", "DELETE")
        .match_header("if-match", "*")
        .match_header("x-requestdigest", DIGEST)
        .with_status(200)
        .create_async()
        .await;

    client.delete_list("abc").await.unwrap();
    mock.assert_async().await;
}

#[tokio::test]
async fn test_create_field() {
    let (mut server, client) = setup().await;
    let _digest = mock_digest(&mut server).await;
    let mock = server
        .mock("POST", path("_api/web/lists/GetByTitle('Tasks')/fields"))
        .match_body(Matcher::Json(json!({
            "__metadata": {"type": "SP.Field"},
            "Title": "Done",
            "FieldTypeKind": 8
        })))
        .with_status(201)
        .with_body(json!({"d": {"InternalName": "Done"}}).to_string())
        .create_async()
        .await;

    let field = client
        .create_field("Tasks", &NewField::new("Done", FieldType::Boolean))
        .await
        .unwrap();
    assert_eq!(field["InternalName"], "Done");
    mock.assert_async().await;
}

#[tokio::test]
async fn test_views_and_add_view_field() {
    let (mut server, client) = setup().await;
    let _digest = mock_digest(&mut server).await;
    let views = server
        .mock("GET", path("_api/web/lists(guid'abc')/views"))
        .with_status(200)
        .with_body(json!({"d": {"results": [{"Id": "v1", "Title": "All Items"}]}}).to_string())
        .create_async()
        .await;
    let add = server
        .mock(
            "POST",
            path("_api/web/lists(guid'abc')/views(guid'v1')/viewfields/addviewfield('Done')"),
        )
        .match_header("x-requestdigest", DIGEST)
        .with_status(200)
        .create_async()
        .await;

    let result = client.views("abc").await.unwrap();
    assert_eq!(result[0]["Id"], "v1");
    client.add_view_field("abc", "v1", "Done").await.unwrap();
    views.assert_async().await;
    add.assert_async().await;
}

#[tokio::test]
async fn test_list_all_error_status() {
    let (mut server, client) = setup().await;
    let _mock = server
        .mock("GET", path("_api/web/lists"))
        .with_status(500)
        .with_body("boom")
        .create_async()
        .await;

    let error = client.list_all().await.unwrap_err();
    assert_eq!(error.status().map(|s| s.as_u16()), Some(500));
}
