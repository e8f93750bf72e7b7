//! Main client implementation.

use std::sync::Arc;
use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use url::Url;

use crate::api::{AuthApi, RobotsApi, TasksApi};
use crate::error::{Error, Result};
use crate::session::Session;

/// Default timeout for requests.
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(5);

/// Header carrying the session token on authenticated endpoints.
const TOKEN_HEADER: &str = "X-Token";

/// FleetNav API client.
///
/// Provides typed access to the fleet service endpoints. Cheap to clone; all
/// clones share one connection pool.
///
/// # Example
///
/// ```no_run
/// use fleetnav_client::FleetClient;
///
/// # async fn example() -> fleetnav_client::Result<()> {
/// let client = FleetClient::builder()
///     .base_url("https://api.example.com")
///     .appcode("raw-appcode")
///     .build()?;
///
/// let session = client.session("app-id", "app-secret");
/// let token = session.token().await?;
/// let robots = client.robots().list(&token, Default::default()).await?;
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct FleetClient {
    /// Inner shared state.
    inner: Arc<ClientInner>,
}

/// Inner client state (shared across clones).
pub(crate) struct ClientInner {
    /// HTTP client.
    pub(crate) http: reqwest::Client,
    /// Base URL for API requests.
    pub(crate) base_url: Url,
    /// Request timeout.
    pub(crate) timeout: Duration,
}

impl FleetClient {
    /// Create a new client builder.
    pub fn builder() -> ClientBuilder {
        ClientBuilder::new()
    }

    /// Get the base URL.
    pub fn base_url(&self) -> &Url {
        &self.inner.base_url
    }

    // ─────────────────────────────────────────────────────────────────────────
    // API accessors
    // ─────────────────────────────────────────────────────────────────────────

    /// Access the auth API.
    pub fn auth(&self) -> AuthApi {
        AuthApi::new(self.clone())
    }

    /// Access the robots API.
    pub fn robots(&self) -> RobotsApi {
        RobotsApi::new(self.clone())
    }

    /// Access the tasks API.
    pub fn tasks(&self) -> TasksApi {
        TasksApi::new(self.clone())
    }

    /// Create a token session backed by this client's auth endpoint.
    pub fn session(&self, app_id: impl Into<String>, app_secret: impl Into<String>) -> Session {
        Session::new(Arc::new(self.auth()), app_id, app_secret)
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Internal HTTP methods
    // ─────────────────────────────────────────────────────────────────────────

    /// Build a URL for an API path.
    pub(crate) fn url(&self, path: &str) -> Result<Url> {
        let path = path.trim_start_matches('/');
        self.inner.base_url.join(path).map_err(Error::from)
    }

    /// Make a GET request.
    pub(crate) async fn get<T: serde::de::DeserializeOwned>(
        &self,
        path: &str,
        token: Option<&str>,
    ) -> Result<T> {
        let url = self.url(path)?;
        let mut request = self.inner.http.get(url).timeout(self.inner.timeout);
        if let Some(token) = token {
            request = request.header(TOKEN_HEADER, token);
        }
        self.handle_response(request.send().await?).await
    }

    /// Make a POST request with a JSON body.
    pub(crate) async fn post<T, B>(&self, path: &str, token: Option<&str>, body: &B) -> Result<T>
    where
        T: serde::de::DeserializeOwned,
        B: serde::Serialize + ?Sized,
    {
        let url = self.url(path)?;
        let mut request = self
            .inner
            .http
            .post(url)
            .json(body)
            .timeout(self.inner.timeout);
        if let Some(token) = token {
            request = request.header(TOKEN_HEADER, token);
        }
        self.handle_response(request.send().await?).await
    }

    /// Make a POST request without a body.
    pub(crate) async fn post_empty<T: serde::de::DeserializeOwned>(
        &self,
        path: &str,
        token: Option<&str>,
    ) -> Result<T> {
        let url = self.url(path)?;
        let mut request = self.inner.http.post(url).timeout(self.inner.timeout);
        if let Some(token) = token {
            request = request.header(TOKEN_HEADER, token);
        }
        self.handle_response(request.send().await?).await
    }

    /// Handle a response, extracting the body or error.
    async fn handle_response<T: serde::de::DeserializeOwned>(
        &self,
        response: reqwest::Response,
    ) -> Result<T> {
        let status = response.status();
        if status.is_success() {
            Ok(response.json().await?)
        } else {
            tracing::debug!(status = status.as_u16(), "request rejected at HTTP layer");
            Err(Error::Api {
                status: status.as_u16(),
            })
        }
    }
}

/// Builder for creating a FleetClient.
#[derive(Debug)]
pub struct ClientBuilder {
    base_url: Option<String>,
    appcode: Option<String>,
    timeout: Duration,
    user_agent: Option<String>,
}

impl ClientBuilder {
    /// Create a new builder with defaults.
    pub fn new() -> Self {
        Self {
            base_url: None,
            appcode: None,
            timeout: DEFAULT_TIMEOUT,
            user_agent: None,
        }
    }

    /// Set the base URL of the fleet service.
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Set the raw authorization code.
    ///
    /// Sent as `Authorization: APPCODE <value>` on every request.
    pub fn appcode(mut self, appcode: impl Into<String>) -> Self {
        self.appcode = Some(appcode.into());
        self
    }

    /// Set the request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set a custom user agent.
    pub fn user_agent(mut self, agent: impl Into<String>) -> Self {
        self.user_agent = Some(agent.into());
        self
    }

    /// Build the client.
    pub fn build(self) -> Result<FleetClient> {
        let base_url = self
            .base_url
            .ok_or_else(|| Error::Config("base_url is required".to_string()))?;

        // Parse and normalize base URL
        let mut base_url = Url::parse(&base_url)?;
        if !base_url.path().ends_with('/') {
            base_url.set_path(&format!("{}/", base_url.path()));
        }

        // Build default headers
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        if let Some(appcode) = &self.appcode {
            let value = HeaderValue::from_str(&format!("APPCODE {}", appcode))
                .map_err(|_| Error::Config("Invalid appcode".to_string()))?;
            headers.insert(AUTHORIZATION, value);
        }

        // Build HTTP client
        let user_agent = self
            .user_agent
            .unwrap_or_else(|| format!("fleetnav-client/{}", env!("CARGO_PKG_VERSION")));

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .user_agent(user_agent)
            .build()?;

        Ok(FleetClient {
            inner: Arc::new(ClientInner {
                http,
                base_url,
                timeout: self.timeout,
            }),
        })
    }
}

impl Default for ClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_requires_base_url() {
        let result = ClientBuilder::new().build();
        assert!(result.is_err());
    }

    #[test]
    fn test_builder_normalizes_trailing_slash() {
        let client = ClientBuilder::new()
            .base_url("http://localhost:8080")
            .build()
            .unwrap();

        assert_eq!(client.base_url().as_str(), "http://localhost:8080/");
    }

    #[test]
    fn test_url_building() {
        let client = ClientBuilder::new()
            .base_url("http://localhost:8080/open")
            .build()
            .unwrap();

        let url = client.url("auth/v1.1/token").unwrap();
        assert_eq!(url.as_str(), "http://localhost:8080/open/auth/v1.1/token");

        let url = client.url("/auth/v1.1/token").unwrap();
        assert_eq!(url.as_str(), "http://localhost:8080/open/auth/v1.1/token");
    }
}
