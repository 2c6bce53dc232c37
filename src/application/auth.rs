/******************************************************************************
   Author: easy-sharepoint contributors
   Date: 16/10/26
******************************************************************************/

//! Authenticated transport for one SharePoint site
//!
//! A [`Session`] owns the HTTP client, the NTLM credentials and the site URL.
//! It is built once and reused for every call; the only value that changes
//! between calls is the form digest, which is fetched on demand and never
//! stored here.

use crate::application::config::Config;
use crate::application::endpoints;
use crate::application::ntlm::NtlmAuth;
use crate::constants::USER_AGENT;
use crate::error::AppError;
use crate::model::http::{HttpResponse, RequestBody, RequestHeaders, Verb, make_http_request};
use crate::model::responses::ContextInfoResponse;
use reqwest::redirect::Policy;
use reqwest::{Client, Method, StatusCode};
use std::time::Duration;
use tokio::sync::Mutex;
use tracing::{debug, error, info};

/// Authenticated HTTP session bound to a site URL
pub struct Session {
    http_client: Client,
    ntlm: NtlmAuth,
    base_url: String,
    user: String,
    // Held for a whole NTLM exchange, body included
    exchange: Mutex<()>,
}

impl Session {
    /// Creates a session from the configuration
    ///
    /// Redirects are not followed: SharePoint answers unauthenticated probes
    /// with a redirect to a login page, which must not count as success.
    /// Exchanges are serialized: the challenged connection is the last one
    /// released to the pool, which hands out the most recent idle connection
    /// first, so the NTLM authenticate message travels on it.
    pub fn new(config: &Config) -> Result<Self, AppError> {
        let http_client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(Duration::from_secs(config.rest_api.timeout))
            .redirect(Policy::none())
            .build()?;

        Ok(Self {
            http_client,
            ntlm: NtlmAuth::new(&config.credentials),
            base_url: config.rest_api.base_url.clone(),
            user: config.credentials.qualified_user(),
            exchange: Mutex::new(()),
        })
    }

    /// Site URL this session talks to
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// NTLM user in `DOMAIN\login` form
    #[must_use]
    pub fn user(&self) -> &str {
        &self.user
    }

    /// Resolves `path` against the site URL; absolute URLs are kept as is
    #[must_use]
    pub fn url(&self, path: &str) -> String {
        if path.starts_with("http://") || path.starts_with("https://") {
            path.to_string()
        } else {
            format!("{}/{}", self.base_url, path.trim_start_matches('/'))
        }
    }

    /// Sends one request through the NTLM handshake
    ///
    /// Concurrent callers wait for each other; the response body is read
    /// before the next exchange starts.
    pub async fn send(
        &self,
        method: Method,
        path: &str,
        headers: &RequestHeaders,
        body: &RequestBody,
    ) -> Result<HttpResponse, AppError> {
        let url = self.url(path);
        let _exchange = self.exchange.lock().await;
        make_http_request(&self.http_client, &self.ntlm, method, &url, headers, body).await
    }

    /// Checks that the credentials give access to the site
    ///
    /// # Returns
    /// * `Ok(true)` - the site answered exactly 200
    /// * `Ok(false)` - any other status, redirects included
    /// * `Err(AppError)` - the request could not be sent
    pub async fn authenticate(&self) -> Result<bool, AppError> {
        let headers = RequestHeaders::for_verb(Verb::Get, None);
        let url = format!("{}/", self.base_url);
        let response = self
            .send(Method::GET, &url, &headers, &RequestBody::Empty)
            .await?;
        let status = response.status;
        debug!("Authenticate {} GET: {}", self.user, status);

        if status == StatusCode::OK {
            info!("Authenticated as {}", self.user);
            Ok(true)
        } else {
            Ok(false)
        }
    }

    /// Fetches a fresh form digest from the context info endpoint
    ///
    /// Fails when the endpoint does not answer 200 or when the body does not
    /// carry `d.GetContextWebInformation.FormDigestValue`.
    pub async fn digest(&self) -> Result<String, AppError> {
        let headers = RequestHeaders::for_verb(Verb::Get, None);
        let response = self
            .send(
                Method::POST,
                &endpoints::context_info(),
                &headers,
                &RequestBody::Empty,
            )
            .await?;

        let HttpResponse {
            status,
            body: bytes,
        } = response;
        if status != StatusCode::OK {
            let body = String::from_utf8_lossy(&bytes).into_owned();
            error!("Digest request failed with status {}: {}", status, body);
            return Err(AppError::Api { status, body });
        }

        let info: ContextInfoResponse = serde_json::from_slice(&bytes).map_err(|e| {
            AppError::Deserialization(format!("unexpected context info response: {e}"))
        })?;
        Ok(info.d.context_web_information.form_digest_value)
    }
}
