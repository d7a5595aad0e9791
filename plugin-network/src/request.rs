//! Network request descriptor with host auth/retry flags

use crate::http::HttpRequest;

/// Three-valued request flag
///
/// Replaces an optional boolean: the host either applies its own default or
/// is told explicitly to enable or disable the behavior.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum AuthRequirement {
    /// Let the host decide (typically: authenticate requests to its own instance)
    #[default]
    HostDefault,
    Enabled,
    Disabled,
}

impl AuthRequirement {
    pub fn as_option(&self) -> Option<bool> {
        match self {
            AuthRequirement::HostDefault => None,
            AuthRequirement::Enabled => Some(true),
            AuthRequirement::Disabled => Some(false),
        }
    }

    /// Collapse to a concrete decision, using `host_default` when unset
    pub fn resolve(&self, host_default: bool) -> bool {
        self.as_option().unwrap_or(host_default)
    }

    pub fn is_host_default(&self) -> bool {
        matches!(self, AuthRequirement::HostDefault)
    }
}

impl From<bool> for AuthRequirement {
    fn from(value: bool) -> Self {
        if value {
            AuthRequirement::Enabled
        } else {
            AuthRequirement::Disabled
        }
    }
}

impl From<Option<bool>> for AuthRequirement {
    fn from(value: Option<bool>) -> Self {
        value.map_or(AuthRequirement::HostDefault, AuthRequirement::from)
    }
}

/// Everything the host needs to execute a request on a plugin's behalf
///
/// The flags are read-only inputs to the host; this crate never interprets
/// them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NetworkRequest {
    /// URL, method, headers, body and timeout
    pub base_request: HttpRequest,

    /// Whether the host attaches its authentication headers.
    ///
    /// `Enabled` adds OAuth headers on top of `base_request.headers`,
    /// `Disabled` sends the request untouched (use for third-party endpoints).
    pub requires_authentication: AuthRequirement,

    /// Whether the host attaches SFAP JWT authentication instead of the
    /// standard scheme.
    pub requires_sfap_authentication: AuthRequirement,

    /// Whether the host refreshes credentials and retries once on HTTP 403.
    ///
    /// Defaults to `true`; opt out to observe raw 403 responses.
    pub should_refresh_on_403: bool,
}

impl NetworkRequest {
    pub fn new(base_request: HttpRequest) -> Self {
        Self {
            base_request,
            requires_authentication: AuthRequirement::HostDefault,
            requires_sfap_authentication: AuthRequirement::HostDefault,
            should_refresh_on_403: true,
        }
    }

    pub fn requires_authentication(mut self, requirement: impl Into<AuthRequirement>) -> Self {
        self.requires_authentication = requirement.into();
        self
    }

    pub fn requires_sfap_authentication(
        mut self,
        requirement: impl Into<AuthRequirement>,
    ) -> Self {
        self.requires_sfap_authentication = requirement.into();
        self
    }

    pub fn should_refresh_on_403(mut self, refresh: bool) -> Self {
        self.should_refresh_on_403 = refresh;
        self
    }
}

impl From<HttpRequest> for NetworkRequest {
    fn from(base_request: HttpRequest) -> Self {
        Self::new(base_request)
    }
}
