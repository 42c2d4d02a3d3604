//! Grafana HTTP client
//!
//! A thin `reqwest` wrapper that builds authenticated GET requests, maps HTTP
//! failures onto [`GrafanaError`], and pages through folder listings.
//! Requests are issued one at a time and are never retried.

use super::api::GrafanaApi;
use super::models::{DashboardEnvelope, DashboardHit, FolderDetail, FolderSummary};
use crate::config::{AuthType, GrafanaConfig, SecretString};
use crate::domain::ids::{DashboardUid, FolderUid};
use crate::domain::{ExportError, GrafanaError, Result};
use async_trait::async_trait;
use base64::{engine::general_purpose, Engine as _};
use reqwest::header::{ACCEPT, AUTHORIZATION};
use reqwest::{Client, ClientBuilder, StatusCode};
use secrecy::ExposeSecret;
use serde::de::DeserializeOwned;
use std::time::Duration;
use url::Url;

/// Search type filter for dashboards (as opposed to folders)
const DASHBOARD_SEARCH_TYPE: &str = "dash-db";

enum Credentials {
    Bearer(Option<SecretString>),
    Basic {
        username: String,
        password: Option<SecretString>,
    },
}

/// Grafana API client
///
/// # Example
///
/// ```no_run
/// use grafana_export::adapters::grafana::{GrafanaApi, GrafanaClient};
/// use grafana_export::config::{secret_string, GrafanaConfig};
///
/// # async fn example() -> grafana_export::domain::Result<()> {
/// let config = GrafanaConfig {
///     url: "https://grafana.example.com".to_string(),
///     api_key: Some(secret_string("glsa_example".to_string())),
///     ..Default::default()
/// };
///
/// let client = GrafanaClient::new(&config)?;
/// let hits = client.search_dashboards(1000).await?;
/// println!("{} dashboards", hits.len());
/// # Ok(())
/// # }
/// ```
pub struct GrafanaClient {
    base_url: Url,
    client: Client,
    credentials: Credentials,
    folder_page_size: usize,
}

impl GrafanaClient {
    /// Create a new client from configuration
    ///
    /// # Errors
    ///
    /// Returns a configuration error if the URL does not parse or the HTTP
    /// client cannot be built.
    pub fn new(config: &GrafanaConfig) -> Result<Self> {
        let base_url = Url::parse(&config.url).map_err(|e| {
            ExportError::Configuration(format!("Invalid Grafana URL '{}': {e}", config.url))
        })?;

        if base_url.cannot_be_a_base() {
            return Err(ExportError::Configuration(format!(
                "Grafana URL '{}' cannot be used as a base URL",
                config.url
            )));
        }

        let mut client_builder = ClientBuilder::new()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .connect_timeout(Duration::from_secs(config.timeout_seconds.min(30)));

        if !config.tls_verify {
            tracing::warn!("TLS certificate verification is disabled for Grafana requests");
            client_builder = client_builder.danger_accept_invalid_certs(true);
        }

        let client = client_builder.build().map_err(|e| {
            ExportError::Configuration(format!("Failed to build HTTP client: {e}"))
        })?;

        let credentials = match config.auth_type {
            AuthType::Bearer => Credentials::Bearer(config.api_key.clone()),
            AuthType::Basic => Credentials::Basic {
                username: config.username.clone().unwrap_or_default(),
                password: config.password.clone(),
            },
        };

        Ok(Self {
            base_url,
            client,
            credentials,
            folder_page_size: config.folder_page_size.max(1),
        })
    }

    /// Build the authorization header value
    fn auth_header_value(&self) -> Option<String> {
        match &self.credentials {
            Credentials::Bearer(Some(key)) => {
                Some(format!("Bearer {}", key.expose_secret().as_ref()))
            }
            Credentials::Bearer(None) => None,
            Credentials::Basic { username, password } => {
                let password = password
                    .as_ref()
                    .map(|p| p.expose_secret().as_ref().to_string())
                    .unwrap_or_default();
                let encoded =
                    general_purpose::STANDARD.encode(format!("{username}:{password}").as_bytes());
                Some(format!("Basic {encoded}"))
            }
        }
    }

    /// Append percent-encoded path segments to the base URL
    fn endpoint(&self, segments: &[&str]) -> Result<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| {
                ExportError::Configuration(format!(
                    "Grafana URL '{}' cannot be used as a base URL",
                    self.base_url
                ))
            })?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    async fn get_json<T: DeserializeOwned>(&self, url: Url, query: &[(&str, String)]) -> Result<T> {
        let path = url.path().to_string();
        tracing::debug!(path = %path, query = ?query, "GET");

        let mut request = self
            .client
            .get(url)
            .query(query)
            .header(ACCEPT, "application/json");

        if let Some(auth) = self.auth_header_value() {
            request = request.header(AUTHORIZATION, auth);
        }

        let response = request
            .send()
            .await
            .map_err(|e| transport_error(&path, e))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(status_error(status, &path, body).into());
        }

        response.json::<T>().await.map_err(|e| {
            if e.is_timeout() {
                GrafanaError::Timeout(path.clone()).into()
            } else {
                GrafanaError::InvalidResponse(format!("{path}: {e}")).into()
            }
        })
    }
}

fn transport_error(path: &str, err: reqwest::Error) -> ExportError {
    if err.is_timeout() {
        GrafanaError::Timeout(path.to_string()).into()
    } else {
        GrafanaError::ConnectionFailed(format!("{path}: {err}")).into()
    }
}

fn status_error(status: StatusCode, path: &str, body: String) -> GrafanaError {
    let message = if body.is_empty() {
        path.to_string()
    } else {
        format!("{path}: {body}")
    };

    match status {
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
            GrafanaError::AuthenticationFailed(message)
        }
        StatusCode::NOT_FOUND => GrafanaError::NotFound(message),
        StatusCode::REQUEST_TIMEOUT | StatusCode::GATEWAY_TIMEOUT => {
            GrafanaError::Timeout(message)
        }
        s if s.is_server_error() => GrafanaError::ServerError {
            status: s.as_u16(),
            message,
        },
        s => GrafanaError::ClientError {
            status: s.as_u16(),
            message,
        },
    }
}

#[async_trait]
impl GrafanaApi for GrafanaClient {
    async fn list_folders(&self, parent: Option<&FolderUid>) -> Result<Vec<FolderSummary>> {
        let url = self.endpoint(&["api", "folders"])?;
        let mut folders = Vec::new();
        let mut page = 1usize;

        loop {
            let mut query: Vec<(&str, String)> = Vec::with_capacity(3);
            if let Some(parent) = parent {
                query.push(("parentUid", parent.as_str().to_string()));
            }
            query.push(("limit", self.folder_page_size.to_string()));
            query.push(("page", page.to_string()));

            let batch: Vec<FolderSummary> = self.get_json(url.clone(), &query).await?;
            let batch_len = batch.len();

            // A server that ignores paging hands back the first page forever
            let repeated = page > 1
                && batch.first().map(|f| f.uid.as_str())
                    == folders.first().map(|f: &FolderSummary| f.uid.as_str());
            if repeated {
                tracing::warn!(
                    parent = ?parent.map(FolderUid::as_str),
                    page = page,
                    "Folder listing repeated its first page; assuming paging is unsupported"
                );
                break;
            }

            folders.extend(batch);

            if batch_len < self.folder_page_size {
                break;
            }
            page += 1;
        }

        tracing::debug!(
            parent = ?parent.map(FolderUid::as_str),
            count = folders.len(),
            "Listed folders"
        );

        Ok(folders)
    }

    async fn get_folder(&self, uid: &FolderUid) -> Result<FolderDetail> {
        let url = self.endpoint(&["api", "folders", uid.as_str()])?;
        self.get_json(url, &[]).await
    }

    async fn search_dashboards(&self, limit: usize) -> Result<Vec<DashboardHit>> {
        let url = self.endpoint(&["api", "search"])?;
        let query = [
            ("type", DASHBOARD_SEARCH_TYPE.to_string()),
            ("limit", limit.to_string()),
        ];
        self.get_json(url, &query).await
    }

    async fn get_dashboard(&self, uid: &DashboardUid) -> Result<DashboardEnvelope> {
        let url = self.endpoint(&["api", "dashboards", "uid", uid.as_str()])?;
        self.get_json(url, &[]).await
    }

    fn base_url(&self) -> &str {
        self.base_url.as_str()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::secret_string;
    use mockito::Matcher;

    fn config(url: String) -> GrafanaConfig {
        GrafanaConfig {
            url,
            api_key: Some(secret_string("glsa_test".to_string())),
            timeout_seconds: 5,
            ..Default::default()
        }
    }

    #[test]
    fn test_invalid_url_rejected() {
        let result = GrafanaClient::new(&config("not a url".to_string()));
        assert!(matches!(result, Err(ExportError::Configuration(_))));
    }

    #[test]
    fn test_endpoint_keeps_sub_path_and_encodes_segments() {
        let client = GrafanaClient::new(&config("https://example.com/grafana/".to_string())).unwrap();
        let url = client.endpoint(&["api", "dashboards", "uid", "a b"]).unwrap();
        assert_eq!(url.as_str(), "https://example.com/grafana/api/dashboards/uid/a%20b");

        let client = GrafanaClient::new(&config("https://example.com".to_string())).unwrap();
        let url = client.endpoint(&["api", "folders"]).unwrap();
        assert_eq!(url.as_str(), "https://example.com/api/folders");
    }

    #[tokio::test]
    async fn test_get_folder_sends_bearer_token() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/api/folders/f2")
            .match_header("authorization", "Bearer glsa_test")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"id": 2, "uid": "f2", "title": "Sub", "parentUid": "f1"}"#)
            .create_async()
            .await;

        let client = GrafanaClient::new(&config(server.url())).unwrap();
        let folder = client.get_folder(&FolderUid::new("f2").unwrap()).await.unwrap();

        mock.assert_async().await;
        assert_eq!(folder.title, "Sub");
        assert_eq!(folder.parent_uid.as_deref(), Some("f1"));
    }

    #[tokio::test]
    async fn test_basic_auth_header() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/api/search")
            .match_header("authorization", "Basic YWRtaW46YWRtaW4=")
            .match_query(Matcher::AllOf(vec![
                Matcher::UrlEncoded("type".into(), "dash-db".into()),
                Matcher::UrlEncoded("limit".into(), "1000".into()),
            ]))
            .with_status(200)
            .with_body("[]")
            .create_async()
            .await;

        let mut cfg = config(server.url());
        cfg.auth_type = AuthType::Basic;
        cfg.api_key = None;
        cfg.username = Some("admin".to_string());
        cfg.password = Some(secret_string("admin".to_string()));

        let client = GrafanaClient::new(&cfg).unwrap();
        let hits = client.search_dashboards(1000).await.unwrap();

        mock.assert_async().await;
        assert!(hits.is_empty());
    }

    #[tokio::test]
    async fn test_list_folders_pages_until_short_page() {
        let mut server = mockito::Server::new_async().await;
        let page1 = server
            .mock("GET", "/api/folders")
            .match_query(Matcher::AllOf(vec![
                Matcher::UrlEncoded("limit".into(), "2".into()),
                Matcher::UrlEncoded("page".into(), "1".into()),
            ]))
            .with_status(200)
            .with_body(r#"[{"uid": "a", "title": "A"}, {"uid": "b", "title": "B"}]"#)
            .create_async()
            .await;
        let page2 = server
            .mock("GET", "/api/folders")
            .match_query(Matcher::AllOf(vec![
                Matcher::UrlEncoded("limit".into(), "2".into()),
                Matcher::UrlEncoded("page".into(), "2".into()),
            ]))
            .with_status(200)
            .with_body(r#"[{"uid": "c", "title": "C"}]"#)
            .create_async()
            .await;

        let mut cfg = config(server.url());
        cfg.folder_page_size = 2;
        let client = GrafanaClient::new(&cfg).unwrap();
        let folders = client.list_folders(None).await.unwrap();

        page1.assert_async().await;
        page2.assert_async().await;
        let uids: Vec<&str> = folders.iter().map(|f| f.uid.as_str()).collect();
        assert_eq!(uids, vec!["a", "b", "c"]);
    }

    #[tokio::test]
    async fn test_list_children_passes_parent_uid() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/api/folders")
            .match_query(Matcher::UrlEncoded("parentUid".into(), "f1".into()))
            .with_status(200)
            .with_body(r#"[{"uid": "f2", "title": "Sub"}]"#)
            .create_async()
            .await;

        let client = GrafanaClient::new(&config(server.url())).unwrap();
        let children = client
            .list_folders(Some(&FolderUid::new("f1").unwrap()))
            .await
            .unwrap();

        mock.assert_async().await;
        assert_eq!(children.len(), 1);
        assert_eq!(children[0].uid, "f2");
    }

    async fn folder_err(client: &GrafanaClient, uid: &str) -> ExportError {
        client
            .get_folder(&FolderUid::new(uid).unwrap())
            .await
            .unwrap_err()
    }

    #[tokio::test]
    async fn test_status_mapping() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/api/folders/missing")
            .with_status(404)
            .with_body(r#"{"message": "folder not found"}"#)
            .create_async()
            .await;
        server
            .mock("GET", "/api/folders/denied")
            .with_status(403)
            .create_async()
            .await;
        server
            .mock("GET", "/api/folders/broken")
            .with_status(500)
            .with_body("boom")
            .create_async()
            .await;
        server
            .mock("GET", "/api/folders/teapot")
            .with_status(418)
            .create_async()
            .await;

        let client = GrafanaClient::new(&config(server.url())).unwrap();

        let err = folder_err(&client, "missing").await;
        assert!(matches!(err, ExportError::Grafana(GrafanaError::NotFound(ref m)) if m.contains("folder not found")));

        let err = folder_err(&client, "denied").await;
        assert!(matches!(err, ExportError::Grafana(GrafanaError::AuthenticationFailed(_))));

        let err = folder_err(&client, "broken").await;
        assert!(matches!(err, ExportError::Grafana(GrafanaError::ServerError { status: 500, .. })));

        let err = folder_err(&client, "teapot").await;
        assert!(matches!(err, ExportError::Grafana(GrafanaError::ClientError { status: 418, .. })));
    }

    #[tokio::test]
    async fn test_invalid_body_is_invalid_response() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/api/dashboards/uid/abc")
            .with_status(200)
            .with_body("<html>login</html>")
            .create_async()
            .await;

        let client = GrafanaClient::new(&config(server.url())).unwrap();
        let err = client
            .get_dashboard(&DashboardUid::new("abc").unwrap())
            .await
            .unwrap_err();

        assert!(matches!(err, ExportError::Grafana(GrafanaError::InvalidResponse(_))));
    }

    #[tokio::test]
    async fn test_connection_refused() {
        let client = GrafanaClient::new(&config("http://127.0.0.1:1".to_string())).unwrap();
        let err = client.search_dashboards(10).await.unwrap_err();
        assert!(matches!(
            err,
            ExportError::Grafana(GrafanaError::ConnectionFailed(_)) | ExportError::Grafana(GrafanaError::Timeout(_))
        ));
    }
}
