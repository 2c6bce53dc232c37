//! Relative paths of the `_api` endpoints used by the client

/// Escapes a value placed inside an OData `'...'` literal
#[must_use]
pub fn literal(value: &str) -> String {
    value.replace('\'', "''")
}

/// Server relative URL (`/a/b`) built from path segments
fn server_relative(segments: &[&str]) -> String {
    let joined = segments
        .iter()
        .map(|s| s.trim_matches('/'))
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join("/");
    literal(&format!("/{joined}"))
}

/// Form digest endpoint
#[must_use]
pub fn context_info() -> String {
    "_api/contextinfo".to_string()
}

/// All lists of the web
#[must_use]
pub fn lists() -> String {
    "_api/web/lists".to_string()
}

/// All lists, first `top` entries
#[must_use]
pub fn lists_page(top: u32) -> String {
    format!("{}?$top={top}", lists())
}

/// A list addressed by its GUID
#[must_use]
pub fn list_by_id(list_id: &str) -> String {
    format!("_api/web/lists(guid'{}')", literal(list_id))
}

/// A list addressed by its title
#[must_use]
pub fn list_by_title(list_name: &str) -> String {
    format!("_api/web/lists/GetByTitle('{}')", literal(list_name))
}

/// Columns of a list
#[must_use]
pub fn fields(list_name: &str) -> String {
    format!("{}/fields", list_by_title(list_name))
}

/// Items of a list
#[must_use]
pub fn items(list_name: &str) -> String {
    format!("{}/items", list_by_title(list_name))
}

/// Items of a list, first `top` entries
#[must_use]
pub fn items_page(list_name: &str, top: u32) -> String {
    format!("{}?$top={top}", items(list_name))
}

/// A single list item
#[must_use]
pub fn item(list_name: &str, item_id: u64) -> String {
    format!("{}/items({item_id})", list_by_title(list_name))
}

/// Views of a list
#[must_use]
pub fn views(list_id: &str) -> String {
    format!("{}/views", list_by_id(list_id))
}

/// Adds `field_name` to a view
#[must_use]
pub fn add_view_field(list_id: &str, view_id: &str, field_name: &str) -> String {
    format!(
        "{}/views(guid'{}')/viewfields/addviewfield('{}')",
        list_by_id(list_id),
        literal(view_id),
        literal(field_name)
    )
}

/// Folder collection of the web
#[must_use]
pub fn folders() -> String {
    "_api/web/folders".to_string()
}

/// A folder addressed by its server relative URL
#[must_use]
pub fn folder(folder_name: &str) -> String {
    format!(
        "_api/web/GetFolderByServerRelativeUrl('{}')",
        server_relative(&[folder_name])
    )
}

/// Files of a folder
#[must_use]
pub fn folder_files(folder_name: &str) -> String {
    format!("{}/Files", folder(folder_name))
}

/// Upload target for `file_name` in `library`, replacing any existing file
#[must_use]
pub fn file_upload(library: &str, file_name: &str) -> String {
    format!(
        "{}/Files/add(url='{}',overwrite=true)",
        folder(library),
        literal(file_name)
    )
}

/// A file addressed by library and name
#[must_use]
pub fn file(library: &str, file_name: &str) -> String {
    format!(
        "_api/web/GetFileByServerRelativeUrl('{}')",
        server_relative(&[library, file_name])
    )
}

/// Raw content of a file
#[must_use]
pub fn file_content(library: &str, file_name: &str) -> String {
    format!("{}/$value", file(library, file_name))
}

/// Check-out action of a file
#[must_use]
pub fn check_out(library: &str, file_name: &str) -> String {
    format!("{}/CheckOut()", file(library, file_name))
}

/// Check-in action of a file
#[must_use]
pub fn check_in(library: &str, file_name: &str, comment: &str, check_in_type: u8) -> String {
    format!(
        "{}/CheckIn(comment='{}',checkintype={check_in_type})",
        file(library, file_name),
        literal(comment)
    )
}

/// Attachments of a list item
#[must_use]
pub fn attachments(list_name: &str, item_id: u64) -> String {
    format!("{}/AttachmentFiles", item(list_name, item_id))
}

/// A single attachment
#[must_use]
pub fn attachment(list_name: &str, item_id: u64, file_name: &str) -> String {
    format!(
        "{}('{}')",
        attachments(list_name, item_id),
        literal(file_name)
    )
}

/// Raw content of an attachment
#[must_use]
pub fn attachment_content(list_name: &str, item_id: u64, file_name: &str) -> String {
    format!("{}/$value", attachment(list_name, item_id, file_name))
}

/// Upload target for a new attachment
#[must_use]
pub fn attachment_add(list_name: &str, item_id: u64, file_name: &str) -> String {
    format!(
        "{}/add(FileName='{}')",
        attachments(list_name, item_id),
        literal(file_name)
    )
}
