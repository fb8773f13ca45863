//! Jira REST API client.
//!
//! Only the issue search endpoint is used. A single page of results is
//! fetched; matches beyond the page size are reported in the logs and dropped.

mod error;
mod fields;
mod issue;

pub use error::JiraError;
pub use fields::{CustomFields, FieldLookup};
pub use issue::{Issue, IssueFields, Named, SearchResponse};
pub(crate) use issue::join_names;

use tracing::{info, info_span, warn, Instrument};
use url::Url;

/// Environment variable holding the Jira personal access token.
pub const TOKEN_ENV: &str = "JIRA_TOKEN";

/// Path of the search endpoint, relative to the server URL.
const SEARCH_PATH: &str = "rest/api/2/search";

/// Reads the bearer token from [`TOKEN_ENV`].
///
/// # Errors
///
/// Returns [`JiraError::MissingToken`] if the variable is unset or blank.
pub fn token_from_env() -> Result<String, JiraError> {
    match std::env::var(TOKEN_ENV) {
        Ok(token) if !token.trim().is_empty() => Ok(token),
        _ => Err(JiraError::MissingToken(TOKEN_ENV)),
    }
}

/// Authenticated client for the Jira search endpoint.
#[derive(Clone)]
pub struct JiraClient {
    http: reqwest::Client,
    search_url: Url,
    token: String,
}

impl JiraClient {
    /// Builds a client for the Jira instance at `server`.
    ///
    /// # Errors
    ///
    /// Returns [`JiraError::InvalidUrl`] if `server` is not a valid base URL, or
    /// [`JiraError::ClientBuild`] if the HTTP client cannot be created.
    pub fn new(server: &str, token: impl Into<String>) -> Result<Self, JiraError> {
        let search_url = search_url(server)?;
        let http = reqwest::Client::builder()
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(JiraError::ClientBuild)?;

        Ok(Self {
            http,
            search_url,
            token: token.into(),
        })
    }

    /// Runs a JQL search and returns the first page of issues.
    ///
    /// # Arguments
    ///
    /// * `query` - JQL query string
    /// * `max_results` - Page size requested from the server
    ///
    /// # Errors
    ///
    /// Returns [`JiraError::Search`] if the request fails, the server answers
    /// with an error status, or the body cannot be decoded.
    pub async fn search(&self, query: &str, max_results: u32) -> Result<Vec<Issue>, JiraError> {
        let span = info_span!("search", query = %query);

        async {
            info!(max_results, "Searching issues");

            let search_error = |source| JiraError::Search {
                query: query.to_string(),
                source,
            };

            let max_results = max_results.to_string();
            let response = self
                .http
                .get(self.search_url.clone())
                .bearer_auth(&self.token)
                .query(&[
                    ("jql", query),
                    ("startAt", "0"),
                    ("maxResults", max_results.as_str()),
                ])
                .send()
                .await
                .and_then(reqwest::Response::error_for_status)
                .map_err(search_error)?;

            let page: SearchResponse = response.json().await.map_err(search_error)?;

            let fetched = page.issues.len() as u64;
            if page.total > fetched {
                warn!(
                    total = page.total,
                    fetched, "Search matched more issues than fit in one page"
                );
            }

            info!(count = fetched, "Search complete");
            Ok(page.issues)
        }
        .instrument(span)
        .await
    }
}

/// Resolves the search endpoint below `server`, treating it as a directory.
fn search_url(server: &str) -> Result<Url, JiraError> {
    let invalid = |source| JiraError::InvalidUrl {
        url: server.to_string(),
        source,
    };

    let mut base = Url::parse(server).map_err(invalid)?;
    if !base.path().ends_with('/') {
        let path = format!("{}/", base.path());
        base.set_path(&path);
    }
    base.join(SEARCH_PATH).map_err(invalid)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;
    use tokio::task::JoinHandle;

    /// Serves `body` as a JSON response to one request and returns the raw request head.
    async fn serve_once(body: &'static str) -> (String, JoinHandle<String>) {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        let handle = tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut request = Vec::new();
            let mut buf = [0u8; 4096];
            while !request.windows(4).any(|w| w == b"\r\n\r\n") {
                let n = socket.read(&mut buf).await.unwrap();
                if n == 0 {
                    break;
                }
                request.extend_from_slice(&buf[..n]);
            }

            let response = format!(
                "HTTP/1.1 200 OK\r\ncontent-type: application/json\r\ncontent-length: {}\r\nconnection: close\r\n\r\n{body}",
                body.len()
            );
            socket.write_all(response.as_bytes()).await.unwrap();
            socket.shutdown().await.unwrap();
            String::from_utf8(request).unwrap()
        });

        (format!("http://{addr}"), handle)
    }

    #[test]
    fn search_url_appends_endpoint() {
        let url = search_url("https://issues.redhat.com/").unwrap();
        assert_eq!(url.as_str(), "https://issues.redhat.com/rest/api/2/search");
    }

    #[test]
    fn search_url_keeps_context_path() {
        let url = search_url("https://example.com/jira").unwrap();
        assert_eq!(url.as_str(), "https://example.com/jira/rest/api/2/search");
    }

    #[test]
    fn client_rejects_invalid_server() {
        let result = JiraClient::new("issues.example.com", "token");
        assert!(matches!(result, Err(JiraError::InvalidUrl { .. })));
    }

    #[test]
    fn token_from_env_reads_variable() {
        temp_env::with_var(TOKEN_ENV, Some("secret"), || {
            assert_eq!(token_from_env().unwrap(), "secret");
        });
    }

    #[test]
    fn token_from_env_rejects_missing_or_blank() {
        temp_env::with_var_unset(TOKEN_ENV, || {
            assert!(matches!(token_from_env(), Err(JiraError::MissingToken(_))));
        });
        temp_env::with_var(TOKEN_ENV, Some("  "), || {
            assert!(matches!(token_from_env(), Err(JiraError::MissingToken(_))));
        });
    }

    #[tokio::test]
    async fn search_sends_query_and_bearer_token() {
        let (base, server) = serve_once(
            r#"{"startAt":0,"maxResults":1,"total":3,"issues":[{"key":"K-1","fields":{"summary":"[x] y","versions":null}}]}"#,
        )
        .await;
        let client = JiraClient::new(&format!("{base}/jira"), "tok").unwrap();

        let issues = client.search("project = X", 1).await.unwrap();
        let request = server.await.unwrap();

        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].key, "K-1");
        assert!(issues[0].fields.versions.is_empty());

        let request_line = request.lines().next().unwrap();
        assert!(request_line.starts_with("GET /jira/rest/api/2/search?"));
        assert!(request_line.contains("jql=project+%3D+X"));
        assert!(request_line.contains("startAt=0"));
        assert!(request_line.contains("maxResults=1"));
        assert!(request
            .lines()
            .any(|line| line.eq_ignore_ascii_case("authorization: Bearer tok")));
    }

    #[tokio::test]
    async fn search_reports_connection_failure() {
        // Port 9 (discard) is not expected to accept HTTP connections.
        let client = JiraClient::new("http://127.0.0.1:9/", "token").unwrap();

        let err = client.search("project = X", 10).await.unwrap_err();
        assert!(matches!(err, JiraError::Search { .. }));
        assert!(err.to_string().contains("project = X"));
    }
}
