//! Credential source used by the reqwest network host

use async_trait::async_trait;
use plugin_network::Result;

/// Supplies tokens for authenticated requests
///
/// Token acquisition and refresh belong to the host's auth stack; the network
/// adapter only asks for the current token and, after a 401/403, for one
/// refresh.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CredentialProvider: Send + Sync {
    /// Current OAuth access token, if the user is signed in
    async fn access_token(&self) -> Result<Option<String>>;

    /// Current SFAP JWT, if the host supports that scheme
    async fn sfap_token(&self) -> Result<Option<String>> {
        Ok(None)
    }

    /// Refresh credentials after the server rejected them
    async fn refresh(&self) -> Result<()>;
}

/// Fixed tokens, for development and tests
#[derive(Debug, Clone, Default)]
pub struct StaticCredentials {
    access_token: Option<String>,
    sfap_token: Option<String>,
}

impl StaticCredentials {
    pub fn new(access_token: impl Into<String>) -> Self {
        Self {
            access_token: Some(access_token.into()),
            sfap_token: None,
        }
    }

    /// No tokens at all; authenticated requests fail
    pub fn anonymous() -> Self {
        Self::default()
    }

    pub fn with_sfap_token(mut self, token: impl Into<String>) -> Self {
        self.sfap_token = Some(token.into());
        self
    }
}

#[async_trait]
impl CredentialProvider for StaticCredentials {
    async fn access_token(&self) -> Result<Option<String>> {
        Ok(self.access_token.clone())
    }

    async fn sfap_token(&self) -> Result<Option<String>> {
        Ok(self.sfap_token.clone())
    }

    async fn refresh(&self) -> Result<()> {
        Ok(())
    }
}
