use crate::common::{challenge_message, test_config};
use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use easy_sharepoint::application::ntlm::{lmv2_response, nt_owf_v2};
use easy_sharepoint::prelude::*;
use std::sync::Arc;
use tokio::io::{AsyncBufReadExt, AsyncReadExt, AsyncWriteExt, BufReader};
use tokio::net::{TcpListener, TcpStream};
use tokio::task::JoinSet;

// Credentials of `test_config`
const LOGIN: &str = "tester";
const DOMAIN: &str = "eur";
const PASSWORD: &str = "secret";

// IIS sends an HTML page with its 401 answers
const UNAUTHORIZED_PAGE: &str = "<html><body>401 - Unauthorized</body></html>";

/// NTLM server for `GET /` that issues a distinct challenge per connection
///
/// An AUTHENTICATE message is accepted only on the connection that received
/// the challenge it answers.
async fn spawn_ntlm_server() -> String {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind test listener");
    let addr = listener.local_addr().expect("listener address");
    tokio::spawn(async move {
        let mut connections = 0u8;
        while let Ok((stream, _)) = listener.accept().await {
            connections = connections.wrapping_add(1);
            tokio::spawn(serve_connection(stream, [connections; 8]));
        }
    });
    format!("http://{addr}")
}

async fn serve_connection(stream: TcpStream, server_challenge: [u8; 8]) {
    let (read, mut write) = stream.into_split();
    let mut reader = BufReader::new(read);
    let mut challenged = false;

    loop {
        let mut line = String::new();
        // Request line; 0 bytes means the client closed the connection
        if !matches!(reader.read_line(&mut line).await, Ok(n) if n > 0) {
            return;
        }

        let mut authorization = None;
        let mut content_length = 0usize;
        loop {
            line.clear();
            if !matches!(reader.read_line(&mut line).await, Ok(n) if n > 0) {
                return;
            }
            let header = line.trim_end();
            if header.is_empty() {
                break;
            }
            if let Some((name, value)) = header.split_once(':') {
                let value = value.trim();
                if name.eq_ignore_ascii_case("authorization") {
                    authorization = Some(value.to_string());
                } else if name.eq_ignore_ascii_case("content-length") {
                    content_length = value.parse().unwrap_or(0);
                }
            }
        }
        if content_length > 0 {
            let mut body = vec![0u8; content_length];
            if reader.read_exact(&mut body).await.is_err() {
                return;
            }
        }

        let token = authorization
            .as_deref()
            .and_then(|value| value.strip_prefix("NTLM "))
            .and_then(|token| STANDARD.decode(token).ok())
            .unwrap_or_default();

        let response = match token.get(8).copied() {
            Some(1) => {
                challenged = true;
                format!(
                    "HTTP/1.1 401 Unauthorized\r\nWWW-Authenticate: NTLM {}\r\nContent-Length: {}\r\n\r\n{}",
                    STANDARD.encode(challenge_message(server_challenge)),
                    UNAUTHORIZED_PAGE.len(),
                    UNAUTHORIZED_PAGE
                )
            }
            Some(3) if challenged && answers_challenge(&token, &server_challenge) => {
                "HTTP/1.1 200 OK\r\nContent-Length: 0\r\n\r\n".to_string()
            }
            _ => format!(
                "HTTP/1.1 401 Unauthorized\r\nContent-Length: {}\r\n\r\n{}",
                UNAUTHORIZED_PAGE.len(),
                UNAUTHORIZED_PAGE
            ),
        };
        if write.write_all(response.as_bytes()).await.is_err() {
            return;
        }
    }
}

/// Checks the LMv2 response of an AUTHENTICATE message against `server_challenge`
fn answers_challenge(message: &[u8], server_challenge: &[u8; 8]) -> bool {
    if message.len() < 20 {
        return false;
    }
    let len = u16::from_le_bytes([message[12], message[13]]) as usize;
    let offset = u32::from_le_bytes([message[16], message[17], message[18], message[19]]) as usize;
    let Some(lm_response) = message.get(offset..offset + len) else {
        return false;
    };
    if lm_response.len() != 24 {
        return false;
    }

    let mut client_challenge = [0u8; 8];
    client_challenge.copy_from_slice(&lm_response[16..]);
    let key = nt_owf_v2(LOGIN, DOMAIN, PASSWORD);
    lmv2_response(&key, server_challenge, &client_challenge)
        .map(|expected| expected == lm_response)
        .unwrap_or(false)
}

#[tokio::test]
async fn test_handshake_answers_connection_challenge() {
    let url = spawn_ntlm_server().await;
    let client = SharePointClient::new(test_config(&url)).unwrap();

    assert!(client.authenticate().await.unwrap());
    // A second exchange reuses the pooled connection and its new challenge
    assert!(client.authenticate().await.unwrap());
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_handshakes_stay_on_their_connection() {
    let url = spawn_ntlm_server().await;
    let client = Arc::new(SharePointClient::new(test_config(&url)).unwrap());

    let mut tasks = JoinSet::new();
    for _ in 0..16 {
        let client = Arc::clone(&client);
        tasks.spawn(async move { client.authenticate().await });
    }

    let mut authenticated = 0;
    while let Some(result) = tasks.join_next().await {
        assert!(result.unwrap().unwrap(), "handshake crossed connections");
        authenticated += 1;
    }
    assert_eq!(authenticated, 16);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_handshakes_through_permission_handler() {
    let url = spawn_ntlm_server().await;
    let handler = Arc::new(PermissionHandler::new(&test_config(&url)).unwrap());

    let mut tasks = JoinSet::new();
    for _ in 0..8 {
        let handler = Arc::clone(&handler);
        tasks.spawn(async move { handler.authenticate().await });
    }
    while let Some(result) = tasks.join_next().await {
        assert!(result.unwrap().unwrap());
    }
}
