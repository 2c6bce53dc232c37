use crate::constants::{
    DEFAULT_DOMAIN, DEFAULT_PAGE_SIZE, DEFAULT_SUCCESS_CODES, DEFAULT_TIMEOUT_SECS,
};
use crate::error::AppError;
use crate::utils::config::{get_env_list_or_default, get_env_or_default};
use dotenv::dotenv;
use pretty_simple_display::{DebugPretty, DisplaySimple};
use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::{debug, error};

#[derive(Serialize, Deserialize, Clone, PartialEq, Eq)]
/// NTLM credentials for the SharePoint site
pub struct Credentials {
    /// Windows domain the account belongs to
    pub domain: String,
    /// Account name, without the domain
    pub login: String,
    /// Account password
    pub password: String,
}

impl Credentials {
    /// User name in `DOMAIN\login` form
    #[must_use]
    pub fn qualified_user(&self) -> String {
        format!("{}\\{}", self.domain, self.login)
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("domain", &self.domain)
            .field("login", &self.login)
            .field("password", &"********")
            .finish()
    }
}

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone, PartialEq, Eq)]
/// Configuration for the REST API
pub struct RestApiConfig {
    /// Site URL, without the trailing slash (e.g. `https://intranet/sites/team`)
    pub base_url: String,
    /// Timeout in seconds for REST API requests
    pub timeout: u64,
    /// `$top` value used when reading collections
    pub page_size: u32,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
/// Main configuration for the SharePoint client
pub struct Config {
    /// Authentication credentials
    pub credentials: Credentials,
    /// REST API configuration
    pub rest_api: RestApiConfig,
    /// Status codes treated as a successful answer
    pub success_codes: Vec<u16>,
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

impl Config {
    /// Creates a configuration from the environment (and `.env`, if present)
    ///
    /// Reads `SHAREPOINT_BASE_URL`, `SHAREPOINT_DOMAIN`, `SHAREPOINT_LOGIN`,
    /// `SHAREPOINT_PASSWORD`, `SHAREPOINT_TIMEOUT`, `SHAREPOINT_PAGE_SIZE` and
    /// `SHAREPOINT_SUCCESS_CODES`.
    pub fn new() -> Self {
        match dotenv() {
            Ok(_) => debug!("Successfully loaded .env file"),
            Err(e) => debug!("Failed to load .env file: {e}"),
        }

        let base_url = get_env_or_default("SHAREPOINT_BASE_URL", String::new());
        let login = get_env_or_default("SHAREPOINT_LOGIN", String::new());
        let password = get_env_or_default("SHAREPOINT_PASSWORD", String::new());

        if base_url.is_empty() {
            error!("SHAREPOINT_BASE_URL not found in environment variables or .env file");
        }
        if login.is_empty() {
            error!("SHAREPOINT_LOGIN not found in environment variables or .env file");
        }
        if password.is_empty() {
            error!("SHAREPOINT_PASSWORD not found in environment variables or .env file");
        }

        Config {
            credentials: Credentials {
                domain: get_env_or_default("SHAREPOINT_DOMAIN", String::from(DEFAULT_DOMAIN)),
                login,
                password,
            },
            rest_api: RestApiConfig {
                base_url: normalize_base_url(&base_url),
                timeout: get_env_or_default("SHAREPOINT_TIMEOUT", DEFAULT_TIMEOUT_SECS),
                page_size: get_env_or_default("SHAREPOINT_PAGE_SIZE", DEFAULT_PAGE_SIZE),
            },
            success_codes: get_env_list_or_default(
                "SHAREPOINT_SUCCESS_CODES",
                &DEFAULT_SUCCESS_CODES,
            ),
        }
    }

    /// Creates a configuration from explicit credentials, with default tuning values
    pub fn with_credentials(
        base_url: impl AsRef<str>,
        domain: impl Into<String>,
        login: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Config {
            credentials: Credentials {
                domain: domain.into(),
                login: login.into(),
                password: password.into(),
            },
            rest_api: RestApiConfig {
                base_url: normalize_base_url(base_url.as_ref()),
                timeout: DEFAULT_TIMEOUT_SECS,
                page_size: DEFAULT_PAGE_SIZE,
            },
            success_codes: DEFAULT_SUCCESS_CODES.to_vec(),
        }
    }

    /// Replaces the set of status codes treated as success
    #[must_use]
    pub fn with_success_codes(mut self, codes: impl IntoIterator<Item = u16>) -> Self {
        self.success_codes = codes.into_iter().collect();
        self
    }

    /// Checks the configuration before a client is built from it
    pub fn validate(&self) -> Result<(), AppError> {
        let base_url = &self.rest_api.base_url;
        if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
            return Err(AppError::InvalidInput(format!(
                "base url must start with http:// or https://, got '{base_url}'"
            )));
        }
        if self.credentials.login.trim().is_empty() {
            return Err(AppError::InvalidInput("login must not be empty".to_string()));
        }
        if self.rest_api.page_size == 0 {
            return Err(AppError::InvalidInput(
                "page size must be greater than zero".to_string(),
            ));
        }
        if self.success_codes.is_empty() {
            return Err(AppError::InvalidInput(
                "at least one success status code is required".to_string(),
            ));
        }
        Ok(())
    }

    /// Whether `status` belongs to the configured success set
    #[must_use]
    pub fn is_success(&self, status: StatusCode) -> bool {
        self.success_codes.contains(&status.as_u16())
    }
}

fn normalize_base_url(url: &str) -> String {
    url.trim().trim_end_matches('/').to_string()
}
