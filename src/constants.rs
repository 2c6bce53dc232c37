/// User agent string sent with every request
pub const USER_AGENT: &str = concat!("easy-sharepoint/", env!("CARGO_PKG_VERSION"));
/// Media type of SharePoint's verbose OData JSON
pub const ODATA_VERBOSE: &str = "application/json;odata=verbose";
/// Media type used for raw file bodies
pub const OCTET_STREAM: &str = "application/octet-stream";
/// Default NTLM domain when none is configured
pub const DEFAULT_DOMAIN: &str = "eur";
/// Default `$top` used by collection queries
pub const DEFAULT_PAGE_SIZE: u32 = 5000;
/// Default request timeout in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;
/// Status codes treated as success unless configured otherwise
pub const DEFAULT_SUCCESS_CODES: [u16; 4] = [200, 201, 202, 204];
/// Base template of a generic custom list
pub const DEFAULT_LIST_TEMPLATE: u32 = 100;
/// Prefix of every list item entity type name
pub const ITEM_TYPE_PREFIX: &str = "SP.Data.";
/// Suffix of every list item entity type name
pub const ITEM_TYPE_SUFFIX: &str = "ListItem";
