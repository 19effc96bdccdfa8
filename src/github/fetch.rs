// src/github/fetch.rs
// =============================================================================
// This module performs the one HTTP GET against the GitHub API.
//
// Strategy:
// - Build a reqwest Client with a bounded timeout and our User-Agent
//   (GitHub rejects requests that don't send one)
// - TLS certificates are always verified; we never turn that off
// - Send exactly one GET; no retries, no pagination
// - Anything other than a 2xx response is a NetworkError
//
// Rust concepts:
// - async functions: For network I/O
// - Result: For error handling
// - map_err: Turning library errors into our own error type
// =============================================================================

use crate::config::Config;
use crate::error::ExportError;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT};
use reqwest::{Client, Response};
use tracing::debug;
use url::Url;

// GitHub's recommended media type for REST API responses
const GITHUB_JSON: &str = "application/vnd.github+json";

// Creates the HTTP client used for the request
//
// Parameters:
//   config: supplies the timeout and the User-Agent header
//
// Returns: a ready Client, or a configuration error (e.g. a User-Agent
//          containing characters that aren't allowed in a header)
pub fn build_client(config: &Config) -> Result<Client, ExportError> {
    let mut headers = HeaderMap::new();
    headers.insert(ACCEPT, HeaderValue::from_static(GITHUB_JSON));

    let user_agent = HeaderValue::from_str(&config.user_agent).map_err(|e| {
        ExportError::Configuration(format!("invalid user agent '{}': {}", config.user_agent, e))
    })?;

    Client::builder()
        .timeout(config.timeout)
        .user_agent(user_agent)
        .default_headers(headers)
        .build()
        .map_err(|e| ExportError::Configuration(format!("failed to create HTTP client: {}", e)))
}

// Fetches the raw response body from a URL
//
// Parameters:
//   client: reqwest HTTP client (from build_client)
//   url: the GitHub API URL to fetch
//
// Returns: the body bytes of a 2xx response, or a NetworkError
pub async fn fetch_raw(client: &Client, url: &Url) -> Result<Vec<u8>, ExportError> {
    debug!(%url, "sending GET request");

    let response = client
        .get(url.clone())
        .send()
        .await
        .map_err(|e| network_error(url, &e))?;

    let status = response.status();
    debug!(%url, status = status.as_u16(), "received response");

    if !status.is_success() {
        return Err(ExportError::Network {
            url: url.to_string(),
            reason: describe_failure(response).await,
        });
    }

    let body = response
        .bytes()
        .await
        .map_err(|e| network_error(url, &e))?;

    debug!(bytes = body.len(), "read response body");
    Ok(body.to_vec())
}

// Builds a NetworkError from a reqwest error, naming the common causes
fn network_error(url: &Url, error: &reqwest::Error) -> ExportError {
    let reason = if error.is_timeout() {
        "request timed out".to_string()
    } else if error.is_connect() {
        format!("connection failed: {}", error)
    } else {
        error.to_string()
    };

    ExportError::Network {
        url: url.to_string(),
        reason,
    }
}

// Describes a non-2xx response, e.g. "HTTP 404 Not Found: Not Found"
//
// GitHub error bodies look like {"message": "...", "documentation_url": "..."};
// when we can read the message we include it.
async fn describe_failure(response: Response) -> String {
    let status = response.status();
    let message = response
        .text()
        .await
        .ok()
        .and_then(|body| serde_json::from_str::<serde_json::Value>(&body).ok())
        .and_then(|json| json.get("message")?.as_str().map(str::to_string));

    match message {
        Some(message) => format!("HTTP {}: {}", status, message),
        None => format!("HTTP {}", status),
    }
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. Why return Vec<u8> instead of String?
//    - serde_json can parse bytes directly (from_slice)
//    - We don't need to check the body is valid UTF-8 first; a broken body
//      is reported as a parse error either way
//
// 2. What does .map_err() do?
//    - Converts the error inside a Result, leaving Ok values alone
//    - Here it turns reqwest::Error into our ExportError::Network
//    - After that, ? can return it from our function
//
// 3. Why is `response` moved into describe_failure?
//    - response.text() consumes the response (takes self, not &self)
//    - Once the body is read, the response can't be used again
// -----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use std::time::Duration;

    fn test_config(server: &mockito::Server) -> Config {
        let mut config = Config::new("owner", "repo", "Alice");
        config.api_base = server.url();
        config
    }

    fn url_for(server: &mockito::Server, path: &str) -> Url {
        Url::parse(&format!("{}{}", server.url(), path)).unwrap()
    }

    #[tokio::test]
    async fn test_fetch_returns_body_and_sends_headers() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/repos/owner/repo/issues")
            .match_query(mockito::Matcher::UrlEncoded(
                "state".into(),
                "open".into(),
            ))
            .match_header("user-agent", crate::config::DEFAULT_USER_AGENT)
            .match_header("accept", GITHUB_JSON)
            .with_status(200)
            .with_body("[]")
            .create_async()
            .await;

        let config = test_config(&server);
        let client = build_client(&config).unwrap();
        let body = fetch_raw(&client, &url_for(&server, "/repos/owner/repo/issues?state=open"))
            .await
            .unwrap();

        assert_eq!(body, b"[]");
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_non_success_status_is_network_error() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("GET", "/repos/owner/missing/issues")
            .with_status(404)
            .with_body(r#"{"message":"Not Found"}"#)
            .create_async()
            .await;

        let client = build_client(&test_config(&server)).unwrap();
        let err = fetch_raw(&client, &url_for(&server, "/repos/owner/missing/issues"))
            .await
            .unwrap_err();

        match err {
            ExportError::Network { url, reason } => {
                assert!(url.ends_with("/repos/owner/missing/issues"));
                assert!(reason.contains("404"));
                assert!(reason.contains("Not Found"));
            }
            other => panic!("expected network error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_server_error_without_json_body() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("GET", "/boom")
            .with_status(502)
            .with_body("<html>bad gateway</html>")
            .create_async()
            .await;

        let client = build_client(&test_config(&server)).unwrap();
        let err = fetch_raw(&client, &url_for(&server, "/boom"))
            .await
            .unwrap_err();

        assert!(matches!(err, ExportError::Network { ref reason, .. } if reason.starts_with("HTTP 502")));
    }

    #[tokio::test]
    async fn test_stalled_response_times_out() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("GET", "/repos/owner/repo/issues")
            .with_status(200)
            .with_chunked_body(|w| {
                std::thread::sleep(Duration::from_secs(1));
                w.write_all(b"[]")
            })
            .create_async()
            .await;

        let mut config = test_config(&server);
        config.timeout = Duration::from_millis(200);
        let client = build_client(&config).unwrap();
        let err = fetch_raw(&client, &url_for(&server, "/repos/owner/repo/issues"))
            .await
            .unwrap_err();

        match err {
            ExportError::Network { reason, .. } => assert_eq!(reason, "request timed out"),
            other => panic!("expected network error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_connection_refused_is_network_error() {
        let mut config = Config::new("owner", "repo", "Alice");
        config.timeout = Duration::from_secs(2);
        let client = build_client(&config).unwrap();

        // Port 1 on localhost is reserved and nothing listens there
        let url = Url::parse("http://127.0.0.1:1/repos/owner/repo/issues").unwrap();
        let err = fetch_raw(&client, &url).await.unwrap_err();

        assert!(matches!(err, ExportError::Network { .. }));
    }

    #[test]
    fn test_invalid_user_agent_is_configuration_error() {
        let mut config = Config::new("owner", "repo", "Alice");
        config.user_agent = "bad\nagent".to_string();
        assert!(matches!(
            build_client(&config),
            Err(ExportError::Configuration(_))
        ));
    }
}
