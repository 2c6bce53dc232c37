use easy_sharepoint::prelude::*;
use std::error::Error;
use std::path::PathBuf;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    setup_logger();

    let mut args = std::env::args().skip(1);
    let (Some(path), Some(library)) = (args.next(), args.next()) else {
        error!("usage: files_example <local file> <library>");
        return Ok(());
    };
    let path = PathBuf::from(path);

    let client = SharePointClient::connect(Config::new()).await?;
    let permissions = PermissionHandler::new(client.config())?;
    info!("Permission session ok: {}", permissions.authenticate().await?);

    client.create_folder("Uploads", &library).await?;
    let uploaded = client.upload_file(&path, &library).await?;
    let name = uploaded["Name"].as_str().unwrap_or_default().to_string();
    info!("Uploaded {}", name);

    client.check_out(&name, &library).await?;
    client.update_file(&path, &library).await?;
    client
        .check_in(&name, &library, "updated by files_example", CheckInType::Major)
        .await?;

    let content = client.get_file(&name, &library).await?;
    info!("Downloaded {} bytes", content.len());

    for file in client.list_files(&library).await? {
        info!("  {}", file["Name"]);
    }

    client.delete_file(&name, &library).await?;
    client.delete_folder(&format!("{library}/Uploads")).await?;
    Ok(())
}
