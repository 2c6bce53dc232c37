/******************************************************************************
   Author: easy-sharepoint contributors
   Date: 16/10/26
******************************************************************************/
use crate::application::ntlm::NtlmAuth;
use crate::constants::{OCTET_STREAM, ODATA_VERBOSE};
use crate::error::AppError;
use reqwest::header::{AUTHORIZATION, WWW_AUTHENTICATE};
use reqwest::{Client, Method, RequestBuilder, Response, StatusCode};
use serde_json::Value;
use std::fmt;
use std::str::FromStr;
use tracing::{debug, error, warn};

/// Request verbs understood by the SharePoint REST facade
///
/// `Put` is tunnelled through POST with `X-HTTP-Method: PATCH`, the way
/// SharePoint expects partial updates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Verb {
    /// Read only request
    Get,
    /// Create request
    Post,
    /// Partial update
    Put,
    /// Removal
    Delete,
}

impl Verb {
    /// Whether the request changes server state and therefore needs a digest
    #[must_use]
    pub fn is_mutating(self) -> bool {
        !matches!(self, Verb::Get)
    }

    /// HTTP method actually put on the wire
    #[must_use]
    pub fn method(self) -> Method {
        match self {
            Verb::Get => Method::GET,
            Verb::Post | Verb::Put => Method::POST,
            Verb::Delete => Method::DELETE,
        }
    }

    /// Upper case name of the verb
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Verb::Get => "GET",
            Verb::Post => "POST",
            Verb::Put => "PUT",
            Verb::Delete => "DELETE",
        }
    }
}

impl fmt::Display for Verb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Verb {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "GET" => Ok(Verb::Get),
            "POST" => Ok(Verb::Post),
            "PUT" => Ok(Verb::Put),
            "DELETE" => Ok(Verb::Delete),
            _ => Err(AppError::InvalidInput(format!("unrecognized verb '{s}'"))),
        }
    }
}

/// Body of a single request
#[derive(Debug, Clone, PartialEq, Default)]
pub enum RequestBody {
    /// No payload
    #[default]
    Empty,
    /// OData JSON payload
    Json(Value),
    /// Raw file content
    Binary(Vec<u8>),
}

impl RequestBody {
    /// Serializes the body once so it can be replayed during the NTLM handshake
    pub fn to_bytes(&self) -> Result<Vec<u8>, AppError> {
        match self {
            RequestBody::Empty => Ok(Vec::new()),
            RequestBody::Json(value) => Ok(serde_json::to_vec(value)?),
            RequestBody::Binary(bytes) => Ok(bytes.clone()),
        }
    }

    /// True when there is nothing to send
    #[must_use]
    pub fn is_empty(&self) -> bool {
        matches!(self, RequestBody::Empty)
    }
}

/// Header set for one request, built fresh for every call
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestHeaders {
    entries: Vec<(&'static str, String)>,
}

impl RequestHeaders {
    /// Builds the header set SharePoint expects for `verb`
    ///
    /// `digest` is only attached to mutating verbs.
    #[must_use]
    pub fn for_verb(verb: Verb, digest: Option<&str>) -> Self {
        let mut headers = Self {
            entries: vec![("Accept", ODATA_VERBOSE.to_string())],
        };
        if !verb.is_mutating() {
            return headers;
        }

        headers = headers.with("Content-Type", ODATA_VERBOSE);
        if let Some(digest) = digest {
            headers = headers.with("X-RequestDigest", digest);
        }
        match verb {
            Verb::Put => headers
                .with("X-HTTP-Method", "PATCH")
                .with("If-Match", "*"),
            Verb::Delete => headers
                .with("X-HTTP-Method", "DELETE")
                .with("If-Match", "*"),
            Verb::Get | Verb::Post => headers,
        }
    }

    /// Marks the body as raw octets instead of OData JSON
    #[must_use]
    pub fn binary(self) -> Self {
        self.with("Content-Type", OCTET_STREAM)
    }

    /// Overrides the tunnelled method (e.g. `PUT` for content replacement)
    #[must_use]
    pub fn with_method_override(self, method: &str) -> Self {
        self.with("X-HTTP-Method", method)
    }

    /// Sets `name`, replacing any previous value
    #[must_use]
    pub fn with(mut self, name: &'static str, value: impl Into<String>) -> Self {
        let value = value.into();
        match self
            .entries
            .iter_mut()
            .find(|(existing, _)| existing.eq_ignore_ascii_case(name))
        {
            Some(entry) => entry.1 = value,
            None => self.entries.push((name, value)),
        }
        self
    }

    /// Value of header `name`, case insensitive
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(existing, _)| existing.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }

    /// Iterates over `(name, value)` pairs
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> {
        self.entries.iter().map(|(name, value)| (*name, value.as_str()))
    }

    /// Number of headers in the set
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when the set is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Status and fully read body of a request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    /// Final status code
    pub status: StatusCode,
    /// Raw response body
    pub body: Vec<u8>,
}

/// Makes an NTLM authenticated HTTP request
///
/// The request is first sent with an NTLM negotiate message. When the server
/// answers 401 with an NTLM challenge, the request is replayed with the
/// authenticate message computed from it. Any other answer is returned as is,
/// so servers that do not require NTLM (or connections that are already
/// authorized) cost a single round trip.
///
/// NTLM authenticates a connection, not a request: the authenticate message
/// must travel on the connection that received the challenge. Callers run
/// one exchange at a time per client, and the body is read here so the
/// connection is released before the next exchange starts.
///
/// # Arguments
///
/// * `client` - The HTTP client to use for the request
/// * `ntlm` - Credentials used for the handshake
/// * `method` - HTTP method
/// * `url` - Full URL to request
/// * `headers` - Headers built for the verb
/// * `body` - Request body
///
/// # Returns
///
/// * `Ok(HttpResponse)` - Final status and body, whatever the status
/// * `Err(AppError)` - Transport failure or malformed challenge
pub async fn make_http_request(
    client: &Client,
    ntlm: &NtlmAuth,
    method: Method,
    url: &str,
    headers: &RequestHeaders,
    body: &RequestBody,
) -> Result<HttpResponse, AppError> {
    let payload = body.to_bytes()?;

    debug!("{} {}", method, url);

    let response = build_request(client, &method, url, headers, &payload)
        .header(AUTHORIZATION, ntlm.negotiate_header())
        .send()
        .await?;

    if response.status() != StatusCode::UNAUTHORIZED {
        return read_response(response).await;
    }

    let challenge = response
        .headers()
        .get_all(WWW_AUTHENTICATE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .find_map(|value| value.trim().strip_prefix("NTLM "))
        .map(|token| token.trim().to_string());

    let Some(challenge) = challenge else {
        warn!("401 without an NTLM challenge from {}", url);
        return read_response(response).await;
    };

    // The challenged connection only goes back to the pool once drained
    if let Err(e) = response.bytes().await {
        error!("Failed to drain NTLM challenge from {}: {}", url, e);
        return Err(AppError::Network(e));
    }

    let authenticate = ntlm.authenticate_header(&challenge)?;
    let response = build_request(client, &method, url, headers, &payload)
        .header(AUTHORIZATION, authenticate)
        .send()
        .await?;

    debug!("Response status: {}", response.status());
    read_response(response).await
}

async fn read_response(response: Response) -> Result<HttpResponse, AppError> {
    let status = response.status();
    let body = response.bytes().await?.to_vec();
    Ok(HttpResponse { status, body })
}

fn build_request(
    client: &Client,
    method: &Method,
    url: &str,
    headers: &RequestHeaders,
    payload: &[u8],
) -> RequestBuilder {
    let mut request = client.request(method.clone(), url);
    for (name, value) in headers.iter() {
        request = request.header(name, value);
    }
    // POST without a body still needs Content-Length: 0
    if *method != Method::GET {
        request = request.body(payload.to_vec());
    }
    request
}
