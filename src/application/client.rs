/******************************************************************************
   Author: easy-sharepoint contributors
   Date: 16/10/26
******************************************************************************/

//! SharePoint REST client
//!
//! This module provides the facade every operation goes through:
//! - NTLM authenticated session bound to one site
//! - A fresh form digest before each mutating request
//! - Header sets built per request from the verb
//! - Status checks against the configured success set
//!
//! The operations themselves live in the service traits
//! ([`ListService`](crate::application::interfaces::list::ListService),
//! [`ItemService`](crate::application::interfaces::item::ItemService), ...).
//!
//! # Example
//! ```ignore
//! use easy_sharepoint::prelude::*;
//!
//! let client = SharePointClient::new(Config::new())?;
//! let items = client.items("Tasks").await?;
//! ```

use crate::application::auth::Session;
use crate::application::config::Config;
use crate::error::AppError;
use crate::model::http::{RequestBody, RequestHeaders, Verb};
use crate::model::responses::{parse_body, unwrap_collection, unwrap_entity};
use serde_json::Value;
use std::path::Path;
use std::sync::Arc;
use tracing::{debug, error, info};

/// Client for one SharePoint site
pub struct SharePointClient {
    session: Session,
    config: Arc<Config>,
}

impl SharePointClient {
    /// Creates a client without contacting the server
    ///
    /// # Returns
    /// * `Ok(SharePointClient)` - ready to use
    /// * `Err(AppError)` - invalid configuration or HTTP client setup failure
    pub fn new(config: Config) -> Result<Self, AppError> {
        config.validate()?;
        let session = Session::new(&config)?;
        Ok(Self {
            session,
            config: Arc::new(config),
        })
    }

    /// Creates a client and checks the credentials against the site
    ///
    /// # Returns
    /// * `Err(AppError::Unauthorized)` - the site did not answer 200
    pub async fn connect(config: Config) -> Result<Self, AppError> {
        let client = Self::new(config)?;
        if !client.authenticate().await? {
            error!("Authentication failed for {}", client.session.user());
            return Err(AppError::Unauthorized);
        }
        Ok(client)
    }

    /// Configuration the client was built from
    #[must_use]
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Underlying session
    #[must_use]
    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Returns `true` iff the site answers the probe with 200
    pub async fn authenticate(&self) -> Result<bool, AppError> {
        self.session.authenticate().await
    }

    /// Fetches a fresh form digest
    pub async fn digest(&self) -> Result<String, AppError> {
        self.session.digest().await
    }

    /// Issues an arbitrary request with the same digest and header handling
    ///
    /// `verb` is one of `GET`, `POST`, `PUT`, `DELETE` (case insensitive).
    /// `POST` and `PUT` require `data`. Arguments are checked before anything
    /// is sent. The parsed body is returned without unwrapping.
    pub async fn custom_query(
        &self,
        path: &str,
        verb: &str,
        data: Option<Value>,
    ) -> Result<Value, AppError> {
        let verb: Verb = verb.parse()?;
        let body = match (verb, data) {
            (Verb::Post | Verb::Put, None) => {
                return Err(AppError::InvalidInput(format!(
                    "{verb} request to '{path}' requires data"
                )));
            }
            (_, Some(data)) => RequestBody::Json(data),
            (_, None) => RequestBody::Empty,
        };

        info!("Custom query {} {}", verb, path);
        let bytes = self.execute(verb, path, body, None).await?;
        parse_body(&bytes)
    }

    /// Sends one request and checks its status
    ///
    /// Mutating verbs fetch a digest first; the header set is built for this
    /// request only. Non-success answers are logged with their body and
    /// returned as [`AppError::Api`].
    pub(crate) async fn execute(
        &self,
        verb: Verb,
        path: &str,
        body: RequestBody,
        method_override: Option<&str>,
    ) -> Result<Vec<u8>, AppError> {
        let digest = if verb.is_mutating() {
            Some(self.session.digest().await?)
        } else {
            None
        };

        let mut headers = RequestHeaders::for_verb(verb, digest.as_deref());
        if matches!(body, RequestBody::Binary(_)) {
            headers = headers.binary();
        }
        if let Some(method) = method_override {
            headers = headers.with_method_override(method);
        }

        let response = self
            .session
            .send(verb.method(), path, &headers, &body)
            .await?;
        let status = response.status;
        debug!("{}: {}", verb, status);

        if self.config.is_success(status) {
            return Ok(response.body);
        }

        let body = String::from_utf8_lossy(&response.body).into_owned();
        error!("{} {} failed with status {}: {}", verb, path, status, body);
        Err(AppError::Api { status, body })
    }

    /// Request whose answer is a single OData entity
    pub(crate) async fn fetch_entity(
        &self,
        verb: Verb,
        path: &str,
        body: RequestBody,
    ) -> Result<Value, AppError> {
        let bytes = self.execute(verb, path, body, None).await?;
        unwrap_entity(parse_body(&bytes)?)
    }

    /// GET whose answer is an OData collection
    pub(crate) async fn fetch_collection(&self, path: &str) -> Result<Vec<Value>, AppError> {
        let bytes = self.execute(Verb::Get, path, RequestBody::Empty, None).await?;
        unwrap_collection(parse_body(&bytes)?)
    }

    /// GET of raw content
    pub(crate) async fn fetch_bytes(&self, path: &str) -> Result<Vec<u8>, AppError> {
        self.execute(Verb::Get, path, RequestBody::Empty, None).await
    }

    /// Sends a local file as the request body
    pub(crate) async fn send_file(
        &self,
        verb: Verb,
        path: &str,
        content: Vec<u8>,
        method_override: Option<&str>,
    ) -> Result<Value, AppError> {
        let bytes = self
            .execute(verb, path, RequestBody::Binary(content), method_override)
            .await?;
        unwrap_entity(parse_body(&bytes)?)
    }
}

/// Reads a local file fully, returning its name and content
pub(crate) async fn read_local_file(path: &Path) -> Result<(String, Vec<u8>), AppError> {
    let name = path
        .file_name()
        .and_then(|name| name.to_str())
        .ok_or_else(|| {
            AppError::InvalidInput(format!("'{}' does not name a file", path.display()))
        })?
        .to_string();
    let content = tokio::fs::read(path).await?;
    debug!("Read {} bytes from {}", content.len(), path.display());
    Ok((name, content))
}
