//! Network Execution Abstraction

use async_trait::async_trait;
use bytes::Bytes;

use crate::error::Result;
use crate::http::ResponseMetadata;
use crate::request::NetworkRequest;

/// Request executor provided by the host application
///
/// Lets plugins send requests through the host's networking stack within the
/// current context (current user, authenticated session). The host is
/// responsible for:
/// - resolving instance-relative URLs
/// - attaching authentication headers when requested
/// - refreshing credentials and retrying once on 401/403 when
///   `should_refresh_on_403` is set; the inner retry is invisible to the caller
/// - detecting connectivity loss and translating transport failures into
///   [`NetworkError`](crate::NetworkError)
///
/// Each call dispatches exactly one logical request. There is no cancellation
/// handle: dropping the future discards the result while the host may still
/// finish the underlying call.
///
/// # Example
///
/// ```ignore
/// use plugin_network::{HttpRequest, Network, NetworkRequest};
///
/// async fn fetch_account(network: &dyn Network, id: &str) -> plugin_network::Result<Vec<u8>> {
///     let base = HttpRequest::get(format!("/services/data/v59.0/sobjects/Account/{}", id))
///         .header("Accept", "application/json");
///     let (body, metadata) = network.data(NetworkRequest::new(base)).await?;
///     tracing::debug!(status = metadata.status, "Fetched account");
///     Ok(body.to_vec())
/// }
/// ```
#[cfg_attr(any(test, feature = "mocks"), mockall::automock)]
#[async_trait]
pub trait Network: Send + Sync {
    /// Send a request through the host and return the body with its metadata
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - the connection fails or times out
    /// - required authentication cannot be obtained
    /// - the host chooses to surface a server error rather than return it
    async fn data(&self, request: NetworkRequest) -> Result<(Bytes, ResponseMetadata)>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::NetworkError;
    use crate::http::HttpRequest;

    #[tokio::test]
    async fn test_mock_network_returns_configured_response() {
        let mut network = MockNetwork::new();
        network
            .expect_data()
            .withf(|request| request.base_request.url == "https://example.com")
            .times(1)
            .returning(|request| {
                Ok((
                    Bytes::from_static(b"Test response"),
                    ResponseMetadata::new(request.base_request.url, 200),
                ))
            });

        let request = NetworkRequest::new(HttpRequest::get("https://example.com"));
        let (data, metadata) = network.data(request).await.unwrap();

        assert_eq!(data, Bytes::from_static(b"Test response"));
        assert_eq!(metadata.status, 200);
    }

    #[tokio::test]
    async fn test_mock_network_raises() {
        let mut network = MockNetwork::new();
        network
            .expect_data()
            .returning(|_| Err(NetworkError::Connection("offline".to_string())));

        let request = NetworkRequest::new(HttpRequest::post("https://example.com"));
        let err = network.data(request).await.unwrap_err();
        assert_eq!(err, NetworkError::Connection("offline".to_string()));
    }
}
