// Common utilities for integration tests

use easy_sharepoint::prelude::*;
use mockito::{Matcher, Mock, Server, ServerGuard};
use std::path::PathBuf;

pub const DIGEST: &str = "0xFEED,16 Oct 2026 10:00:00 -0000";

/// Configuration pointing at the mock server
pub fn test_config(url: &str) -> Config {
    Config::with_credentials(url, "eur", "tester", "secret")
}

/// Starts a mock server and a client bound to it
pub async fn setup() -> (ServerGuard, SharePointClient) {
    setup_logger();
    let server = Server::new_async().await;
    let client = SharePointClient::new(test_config(&server.url())).expect("valid test config");
    (server, client)
}

/// Matches a site relative path, with or without a query string
pub fn path(relative: &str) -> Matcher {
    Matcher::Regex(format!(
        r"^{}(\?.*)?$",
        regex::escape(&format!("/{relative}"))
    ))
}

/// Context info endpoint answering with [`DIGEST`], expected once
pub async fn mock_digest(server: &mut ServerGuard) -> Mock {
    mock_digests(server, 1).await
}

/// Context info endpoint expected `hits` times
pub async fn mock_digests(server: &mut ServerGuard, hits: usize) -> Mock {
    server
        .mock("POST", path("_api/contextinfo"))
        .expect(hits)
        .match_header("accept", ODATA_VERBOSE)
        .with_status(200)
        .with_header("content-type", ODATA_VERBOSE)
        .with_body(
            json!({
                "d": {
                    "GetContextWebInformation": {
                        "FormDigestValue": DIGEST,
                        "FormDigestTimeoutSeconds": 1800
                    }
                }
            })
            .to_string(),
        )
        .create_async()
        .await
}

/// Writes `content` to a fresh file under the system temp directory
pub fn temp_file(name: &str, content: &[u8]) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("easy-sharepoint-{}", std::process::id()));
    std::fs::create_dir_all(&dir).expect("create temp dir");
    let path = dir.join(name);
    std::fs::write(&path, content).expect("write temp file");
    path
}

/// Minimal NTLM CHALLENGE message with an empty target info block
pub fn challenge_message(server_challenge: [u8; 8]) -> Vec<u8> {
    let mut message = Vec::new();
    message.extend_from_slice(b"NTLMSSP\0");
    message.extend_from_slice(&2u32.to_le_bytes());
    message.extend_from_slice(&[0, 0, 0, 0, 48, 0, 0, 0]);
    message.extend_from_slice(&0x0080_0201u32.to_le_bytes());
    message.extend_from_slice(&server_challenge);
    message.extend_from_slice(&[0u8; 8]);
    message.extend_from_slice(&[0, 0, 0, 0, 48, 0, 0, 0]);
    message
}
