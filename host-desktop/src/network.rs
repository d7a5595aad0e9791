//! Network implementation using Reqwest

use crate::credentials::CredentialProvider;
use async_trait::async_trait;
use bytes::Bytes;
use plugin_network::{
    HttpMethod, HttpRequest, Network, NetworkError, NetworkRequest, ResponseMetadata, Result,
};
use reqwest::Client;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, warn};
use url::Url;

/// Configuration for [`ReqwestNetwork`]
#[derive(Debug, Clone)]
pub struct ReqwestNetworkConfig {
    /// Base URL of the signed-in org. Relative request URLs resolve against it
    /// and requests to its host are authenticated by default.
    pub instance_url: Option<Url>,
    pub timeout: Duration,
    pub connect_timeout: Duration,
    pub user_agent: String,
}

impl Default for ReqwestNetworkConfig {
    fn default() -> Self {
        Self {
            instance_url: None,
            timeout: Duration::from_secs(30),
            connect_timeout: Duration::from_secs(10),
            user_agent: format!("mobile-interfaces/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

impl ReqwestNetworkConfig {
    pub fn with_instance_url(mut self, url: Url) -> Self {
        self.instance_url = Some(url);
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum AuthScheme {
    None,
    Standard,
    Sfap,
}

/// Reqwest-based network implementation
///
/// Provides:
/// - Relative URL resolution against the instance URL
/// - Bearer or SFAP authentication from a [`CredentialProvider`]
/// - One credential refresh and retry after a 401/403
pub struct ReqwestNetwork {
    client: Client,
    config: ReqwestNetworkConfig,
    credentials: Arc<dyn CredentialProvider>,
}

impl ReqwestNetwork {
    /// Create a network host with its own connection pool
    pub fn new(
        config: ReqwestNetworkConfig,
        credentials: Arc<dyn CredentialProvider>,
    ) -> Result<Self> {
        let client = Client::builder()
            .timeout(config.timeout)
            .connect_timeout(config.connect_timeout)
            .pool_max_idle_per_host(10)
            .user_agent(config.user_agent.clone())
            .build()
            .map_err(|e| NetworkError::Other(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self::with_client(client, config, credentials))
    }

    /// Create a network host around an existing reqwest client
    pub fn with_client(
        client: Client,
        config: ReqwestNetworkConfig,
        credentials: Arc<dyn CredentialProvider>,
    ) -> Self {
        Self {
            client,
            config,
            credentials,
        }
    }

    pub fn config(&self) -> &ReqwestNetworkConfig {
        &self.config
    }

    fn convert_method(method: HttpMethod) -> reqwest::Method {
        match method {
            HttpMethod::Get => reqwest::Method::GET,
            HttpMethod::Post => reqwest::Method::POST,
            HttpMethod::Put => reqwest::Method::PUT,
            HttpMethod::Patch => reqwest::Method::PATCH,
            HttpMethod::Delete => reqwest::Method::DELETE,
            HttpMethod::Head => reqwest::Method::HEAD,
        }
    }

    fn resolve_url(&self, url: &str) -> Result<Url> {
        match Url::parse(url) {
            Ok(url) => Ok(url),
            Err(url::ParseError::RelativeUrlWithoutBase) => {
                let base = self.config.instance_url.as_ref().ok_or_else(|| {
                    NetworkError::InvalidRequest(format!(
                        "Relative URL '{}' requires an instance URL",
                        url
                    ))
                })?;
                base.join(url).map_err(|e| {
                    NetworkError::InvalidRequest(format!("Invalid URL '{}': {}", url, e))
                })
            }
            Err(e) => Err(NetworkError::InvalidRequest(format!(
                "Invalid URL '{}': {}",
                url, e
            ))),
        }
    }

    fn is_instance_host(&self, url: &Url) -> bool {
        self.config.instance_url.as_ref().is_some_and(|instance| {
            instance.host_str() == url.host_str()
                && instance.port_or_known_default() == url.port_or_known_default()
        })
    }

    fn auth_scheme(&self, request: &NetworkRequest, url: &Url) -> AuthScheme {
        if request.requires_sfap_authentication.resolve(false) {
            AuthScheme::Sfap
        } else if request
            .requires_authentication
            .resolve(self.is_instance_host(url))
        {
            AuthScheme::Standard
        } else {
            AuthScheme::None
        }
    }

    async fn authorization(&self, scheme: AuthScheme) -> Result<Option<String>> {
        let token = match scheme {
            AuthScheme::None => return Ok(None),
            AuthScheme::Standard => self.credentials.access_token().await?.ok_or_else(|| {
                NetworkError::Authentication("No access token available".to_string())
            })?,
            AuthScheme::Sfap => self.credentials.sfap_token().await?.ok_or_else(|| {
                NetworkError::Authentication("No SFAP token available".to_string())
            })?,
        };
        Ok(Some(format!("Bearer {}", token)))
    }

    fn build_request(
        &self,
        request: &HttpRequest,
        url: Url,
        authorization: Option<&str>,
    ) -> reqwest::RequestBuilder {
        let method = Self::convert_method(request.method);
        let mut req = self.client.request(method, url);

        for (key, value) in &request.headers {
            // Host credentials take precedence over a caller-supplied header
            if authorization.is_some() && key.eq_ignore_ascii_case("authorization") {
                continue;
            }
            req = req.header(key.as_str(), value.as_str());
        }

        if let Some(authorization) = authorization {
            req = req.header(reqwest::header::AUTHORIZATION, authorization);
        }

        if let Some(body) = &request.body {
            req = req.body(body.clone());
        }

        if let Some(timeout) = request.timeout {
            req = req.timeout(timeout);
        }

        req
    }

    async fn send(
        &self,
        request: &HttpRequest,
        url: Url,
        authorization: Option<&str>,
    ) -> Result<(Bytes, ResponseMetadata)> {
        debug!(
            method = %request.method,
            url = %url,
            authenticated = authorization.is_some(),
            "Executing network request"
        );

        let response = self
            .build_request(request, url, authorization)
            .send()
            .await
            .map_err(map_transport_error)?;

        let mut metadata =
            ResponseMetadata::new(response.url().as_str(), response.status().as_u16());
        metadata.http_version = Some(format!("{:?}", response.version()));
        metadata.headers = response
            .headers()
            .iter()
            .filter_map(|(k, v)| v.to_str().ok().map(|s| (k.to_string(), s.to_string())))
            .collect();

        let body = response.bytes().await.map_err(map_transport_error)?;

        debug!(status = metadata.status, size = body.len(), "Network request completed");
        Ok((body, metadata))
    }
}

fn map_transport_error(e: reqwest::Error) -> NetworkError {
    warn!(error = %e, "Network request failed");

    if e.is_timeout() {
        NetworkError::Timeout
    } else if e.is_connect() {
        NetworkError::Connection(e.to_string())
    } else if e.is_builder() {
        NetworkError::InvalidRequest(e.to_string())
    } else {
        NetworkError::Other(e.to_string())
    }
}

#[async_trait]
impl Network for ReqwestNetwork {
    async fn data(&self, request: NetworkRequest) -> Result<(Bytes, ResponseMetadata)> {
        let url = self.resolve_url(&request.base_request.url)?;
        let scheme = self.auth_scheme(&request, &url);
        let authorization = self.authorization(scheme).await?;

        let (body, metadata) = self
            .send(&request.base_request, url.clone(), authorization.as_deref())
            .await?;

        let rejected = matches!(metadata.status, 401 | 403);
        if !(rejected && request.should_refresh_on_403 && authorization.is_some()) {
            return Ok((body, metadata));
        }

        warn!(
            status = metadata.status,
            url = %url,
            "Credentials rejected, refreshing and retrying once"
        );
        self.credentials.refresh().await?;
        let authorization = self.authorization(scheme).await?;

        self.send(&request.base_request, url, authorization.as_deref())
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::credentials::{MockCredentialProvider, StaticCredentials};
    use plugin_network::AuthRequirement;

    fn network(instance: Option<&str>) -> ReqwestNetwork {
        let mut config = ReqwestNetworkConfig::default();
        config.instance_url = instance.map(|u| Url::parse(u).unwrap());
        ReqwestNetwork::new(config, Arc::new(StaticCredentials::new("token"))).unwrap()
    }

    #[test]
    fn test_resolve_relative_url() {
        let network = network(Some("https://acme.my.example.com"));
        let url = network.resolve_url("/services/data/v59.0").unwrap();
        assert_eq!(url.as_str(), "https://acme.my.example.com/services/data/v59.0");

        let absolute = network.resolve_url("https://other.example.com/a").unwrap();
        assert_eq!(absolute.host_str(), Some("other.example.com"));
    }

    #[test]
    fn test_relative_url_without_instance() {
        let network = network(None);
        assert!(matches!(
            network.resolve_url("/services/data"),
            Err(NetworkError::InvalidRequest(_))
        ));
    }

    #[test]
    fn test_auth_scheme_resolution() {
        let network = network(Some("https://acme.my.example.com"));
        let instance = Url::parse("https://acme.my.example.com/x").unwrap();
        let foreign = Url::parse("https://cdn.example.org/x").unwrap();

        let default = NetworkRequest::new(HttpRequest::get("/x"));
        assert_eq!(network.auth_scheme(&default, &instance), AuthScheme::Standard);
        assert_eq!(network.auth_scheme(&default, &foreign), AuthScheme::None);

        let forced = default
            .clone()
            .requires_authentication(AuthRequirement::Enabled);
        assert_eq!(network.auth_scheme(&forced, &foreign), AuthScheme::Standard);

        let disabled = default.clone().requires_authentication(false);
        assert_eq!(network.auth_scheme(&disabled, &instance), AuthScheme::None);

        let sfap = default.requires_sfap_authentication(true);
        assert_eq!(network.auth_scheme(&sfap, &foreign), AuthScheme::Sfap);
    }

    #[tokio::test]
    async fn test_missing_token_is_authentication_error() {
        let mut credentials = MockCredentialProvider::new();
        credentials.expect_access_token().returning(|| Ok(None));

        let network = ReqwestNetwork::new(
            ReqwestNetworkConfig::default(),
            Arc::new(credentials),
        )
        .unwrap();

        let request = NetworkRequest::new(HttpRequest::get("http://127.0.0.1:1/"))
            .requires_authentication(true);
        let result = network.data(request).await;

        assert!(matches!(result, Err(NetworkError::Authentication(_))));
    }
}
