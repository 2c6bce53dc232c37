use easy_sharepoint::prelude::*;
use std::error::Error;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    setup_logger();

    let client = SharePointClient::connect(Config::new()).await?;
    let list = std::env::args().nth(1).unwrap_or_else(|| "Tasks".to_string());

    let mut data = Map::new();
    data.insert("Title".into(), json!("Write the weekly report"));
    let item = client.create_item(&list, &data).await?;
    let id = item["Id"].as_u64().unwrap_or_default();
    info!("Created item {}", id);

    data.insert("Title".into(), json!("Write the monthly report"));
    client.update_item(&list, id, &data).await?;

    for item in client.items(&list).await? {
        info!("{}: {}", item["Id"], item["Title"]);
    }

    match client.delete_item(&list, id).await {
        Ok(_) => info!("Deleted item {}", id),
        Err(e) if e.is_not_found() => warn!("Item {} already gone", id),
        Err(e) => return Err(Box::new(e) as Box<dyn Error>),
    }

    // Anything the typed operations do not cover
    let user = client
        .custom_query("_api/web/currentuser", "GET", None)
        .await?;
    info!("Current user: {}", user["d"]["LoginName"]);
    Ok(())
}
