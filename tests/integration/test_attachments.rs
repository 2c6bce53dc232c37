use crate::common::{DIGEST, mock_digest, path, setup, temp_file};
use easy_sharepoint::prelude::*;

#[tokio::test]
async fn test_list_attachments() {
    let (mut server, client) = setup().await;
    let _mock = server
        .mock(
            "GET",
            path("_api/web/lists/GetByTitle('Tasks')/items(3)/AttachmentFiles"),
        )
        .with_status(200)
        .with_body(json!({"d": {"results": [{"FileName": "a.pdf"}]}}).to_string())
        .create_async()
        .await;

    let attachments = client.list_attachments("Tasks", 3).await.unwrap();
    assert_eq!(attachments[0]["FileName"], "a.pdf");
}

#[tokio::test]
async fn test_get_attachment() {
    let (mut server, client) = setup().await;
    let _mock = server
        .mock(
            "GET",
            path("_api/web/lists/GetByTitle('Tasks')/items(3)/AttachmentFiles('a.pdf')/$value"),
        )
        .with_status(200)
        .with_body("%PDF-1.4")
        .create_async()
        .await;

    let content = client.get_attachment("Tasks", 3, "a.pdf").await.unwrap();
    assert_eq!(content, b"%PDF-1.4".to_vec());
}

#[tokio::test]
async fn test_create_attachment() {
    let (mut server, client) = setup().await;
    let _digest = mock_digest(&mut server).await;
    let file = temp_file("create-notes.txt", b"notes");
    let mock = server
        .mock(
            "POST",
            path("_api/web/lists/GetByTitle('Tasks')/items(3)/AttachmentFiles/add(FileName='create-notes.txt')"),
        )
        .match_header("x-requestdigest", DIGEST)
        .match_header("content-type", OCTET_STREAM)
        .match_body("notes")
        .with_status(200)
        .with_body(json!({"d": {"FileName": "create-notes.txt"}}).to_string())
        .create_async()
        .await;

    let attachment = client.create_attachment("Tasks", 3, &file).await.unwrap();
    assert_eq!(attachment["FileName"], "create-notes.txt");
    mock.assert_async().await;
}

#[tokio::test]
async fn test_update_attachment() {
    let (mut server, client) = setup().await;
    let _digest = mock_digest(&mut server).await;
    let file = temp_file("update-notes.txt", b"more notes");
    let mock = server
        .mock(
            "POST",
            path("_api/web/lists/GetByTitle('Tasks')/items(3)/AttachmentFiles('update-notes.txt')/$value"),
        )
        .match_header("x-http-method", "PUT")
        .match_header("if-match", "*")
        .match_body("more notes")
        .with_status(204)
        .create_async()
        .await;

    client.update_attachment("Tasks", 3, &file).await.unwrap();
    mock.assert_async().await;
}
