use easy_sharepoint::prelude::*;
use std::error::Error;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    setup_logger();

    let cfg = Config::new();
    info!("Loaded config → {}", cfg.rest_api.base_url);

    let client = match SharePointClient::connect(cfg).await {
        Ok(client) => client,
        Err(e) => {
            error!("Authentication failed: {e}");
            return Err(Box::new(e) as Box<dyn Error>);
        }
    };

    let lists = client.list_all().await?;
    info!("Found {} lists", lists.len());
    for list in &lists {
        info!("  {} ({})", list["Title"], list["Id"]);
    }

    let title = "Demo Tasks";
    let created = client
        .create_list(&NewList::new(title).description("Created by lists_example"))
        .await?;
    let list_id = created["Id"].as_str().unwrap_or_default().to_string();
    info!("Created list {} with id {}", title, list_id);

    client
        .create_field(title, &NewField::new("Due", FieldType::DateTime))
        .await?;

    let views = client.views(&list_id).await?;
    if let Some(view_id) = views.first().and_then(|v| v["Id"].as_str()) {
        client.add_view_field(&list_id, view_id, "Due").await?;
        info!("Added Due to view {}", view_id);
    }

    client.delete_list(&list_id).await?;
    info!("Deleted list {}", title);
    Ok(())
}
