//! Comparison service HTTP client.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use tracing::{debug, warn};

use super::dto::{ErrorResponse, MovieRow};
use crate::domain::entities::{HandlePair, Movie};
use crate::domain::errors::RecommendationError;
use crate::domain::ports::RecommendationPort;

/// Default address of a locally running comparison service.
pub const DEFAULT_API_URL: &str = "http://127.0.0.1:8000";
/// Default request timeout.
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(60);

const COMPARE_PATH: &str = "/api/compare";
const USER_AGENT: &str = concat!("lettucewatch/", env!("CARGO_PKG_VERSION"));

/// HTTP client for `GET /api/compare`.
pub struct CompareClient {
    client: Client,
    base_url: String,
}

impl CompareClient {
    /// Creates client with custom base URL and timeout.
    ///
    /// # Errors
    /// Returns error if HTTP client creation fails.
    pub fn with_base_url(
        base_url: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, RecommendationError> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(timeout)
            .build()
            .map_err(|e| {
                RecommendationError::unexpected(format!("failed to create HTTP client: {e}"))
            })?;

        Ok(Self::with_client(client, base_url))
    }

    /// Creates client around a preconfigured `reqwest` client.
    #[must_use]
    pub fn with_client(client: Client, base_url: impl Into<String>) -> Self {
        let base_url: String = base_url.into();
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    fn compare_url(&self) -> String {
        format!("{}{COMPARE_PATH}", self.base_url)
    }

    async fn handle_error_response(
        status: StatusCode,
        response: reqwest::Response,
    ) -> RecommendationError {
        match response.json::<ErrorResponse>().await {
            Ok(error) => warn!(status = %status, detail = %error.detail, "Comparison service error"),
            Err(_) => warn!(status = %status, "Comparison service error without detail"),
        }

        RecommendationError::status(status.as_u16())
    }

    fn map_transport_error(e: &reqwest::Error) -> RecommendationError {
        warn!(error = %e, "Failed to reach comparison service");
        if e.is_timeout() {
            RecommendationError::network("request timed out")
        } else if e.is_connect() {
            RecommendationError::network("failed to connect to comparison service")
        } else {
            RecommendationError::network(e.to_string())
        }
    }
}

#[async_trait]
impl RecommendationPort for CompareClient {
    async fn fetch_common_movies(
        &self,
        handles: &HandlePair,
    ) -> Result<Vec<Movie>, RecommendationError> {
        let url = self.compare_url();

        debug!(url = %url, "Requesting common movies");

        let response = self
            .client
            .get(&url)
            .query(&[("username1", handles.user()), ("username2", handles.peer())])
            .send()
            .await
            .map_err(|e| Self::map_transport_error(&e))?;

        let status = response.status();

        if !status.is_success() {
            return Err(Self::handle_error_response(status, response).await);
        }

        let rows: Vec<MovieRow> = response.json().await.map_err(|e| {
            warn!(error = %e, "Failed to parse comparison response");
            RecommendationError::decode(e.to_string())
        })?;

        debug!(count = rows.len(), "Comparison response decoded");

        Ok(rows.into_iter().map(Movie::from).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;
    use tokio::sync::oneshot;

    /// Serves one canned HTTP response and reports the request line.
    async fn serve_once(
        status_line: &'static str,
        body: &'static str,
    ) -> (String, oneshot::Receiver<String>) {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let (tx, rx) = oneshot::channel();

        tokio::spawn(async move {
            let (mut stream, _) = listener.accept().await.unwrap();
            let mut request = Vec::new();
            let mut chunk = [0u8; 1024];
            while !request.windows(4).any(|w| w == b"\r\n\r\n") {
                let n = stream.read(&mut chunk).await.unwrap();
                if n == 0 {
                    break;
                }
                request.extend_from_slice(&chunk[..n]);
            }

            let request = String::from_utf8_lossy(&request);
            let request_line = request.lines().next().unwrap_or_default().to_string();
            let _ = tx.send(request_line);

            let response = format!(
                "HTTP/1.1 {status_line}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
                body.len()
            );
            stream.write_all(response.as_bytes()).await.unwrap();
            stream.shutdown().await.unwrap();
        });

        (format!("http://{addr}"), rx)
    }

    fn client_for(base_url: &str) -> CompareClient {
        let client = Client::builder().no_proxy().build().unwrap();
        CompareClient::with_client(client, base_url)
    }

    fn handles(user: &str, peer: &str) -> HandlePair {
        HandlePair::new(user, peer).unwrap()
    }

    #[test]
    fn test_client_creation() {
        let client = CompareClient::with_base_url(DEFAULT_API_URL, DEFAULT_REQUEST_TIMEOUT);
        assert_eq!(
            client.unwrap().compare_url(),
            "http://127.0.0.1:8000/api/compare"
        );
    }

    #[test]
    fn test_trailing_slash_trimmed() {
        let client = client_for("http://localhost:8000/");
        assert_eq!(client.compare_url(), "http://localhost:8000/api/compare");
    }

    #[tokio::test]
    async fn test_fetch_decodes_movies_and_encodes_handles() {
        let body = r#"[["Heat","Robbers.","https://a.ltrbxd.com/heat.jpg","https://letterboxd.com/film/heat-1995/"],["Ran","Warlord.","","https://letterboxd.com/film/ran/"]]"#;
        let (base_url, request_line) = serve_once("200 OK", body).await;

        let movies = client_for(&base_url)
            .fetch_common_movies(&handles("alice", "bob&co"))
            .await
            .unwrap();

        assert_eq!(movies.len(), 2);
        assert_eq!(movies[0].title(), "Heat");
        assert_eq!(movies[1].poster_url(), "");

        let request_line = request_line.await.unwrap();
        assert!(
            request_line.starts_with("GET /api/compare?username1=alice&username2=bob%26co "),
            "unexpected request line: {request_line}"
        );
    }

    #[tokio::test]
    async fn test_fetch_empty_list() {
        let (base_url, _request_line) = serve_once("200 OK", "[]").await;

        let movies = client_for(&base_url)
            .fetch_common_movies(&handles("alice", "bob"))
            .await
            .unwrap();

        assert!(movies.is_empty());
    }

    #[tokio::test]
    async fn test_fetch_server_error() {
        let body = r#"{"detail":"An internal error occurred while fetching movie data."}"#;
        let (base_url, _request_line) = serve_once("500 Internal Server Error", body).await;

        let result = client_for(&base_url)
            .fetch_common_movies(&handles("alice", "bob"))
            .await;

        assert!(matches!(
            result,
            Err(RecommendationError::UnexpectedStatus { status: 500 })
        ));
    }

    #[tokio::test]
    async fn test_fetch_malformed_body() {
        let (base_url, _request_line) = serve_once("200 OK", r#"{"movies": []}"#).await;

        let result = client_for(&base_url)
            .fetch_common_movies(&handles("alice", "bob"))
            .await;

        assert!(matches!(result, Err(RecommendationError::Decode { .. })));
    }

    #[tokio::test]
    async fn test_fetch_connection_refused() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let result = client_for(&format!("http://{addr}"))
            .fetch_common_movies(&handles("alice", "bob"))
            .await;

        assert!(result.unwrap_err().is_network_error());
    }
}
