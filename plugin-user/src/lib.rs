//! # User Contract
//!
//! Identity of the current user, as handed to plugins by the host.
//!
//! [`User`], [`Org`] and [`Community`] are immutable value records with no
//! behavior beyond construction and field access. Identifiers are 18-character
//! opaque strings; this crate does not validate length or charset.

use serde::{Deserialize, Serialize};
use url::Url;

/// A Salesforce Experience Cloud community (site)
///
/// Operations may behave differently inside a community than in the standard
/// org, e.g. URL construction and API endpoints.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Community {
    id: String,
}

impl Community {
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into() }
    }

    pub fn id(&self) -> &str {
        &self.id
    }
}

/// A Salesforce organization, optionally scoped to a community
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Org {
    id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    community: Option<Community>,
}

impl Org {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            community: None,
        }
    }

    pub fn with_community(id: impl Into<String>, community: Community) -> Self {
        Self {
            id: id.into(),
            community: Some(community),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn community(&self) -> Option<&Community> {
        self.community.as_ref()
    }

    /// Whether the user is operating inside a community
    pub fn is_community(&self) -> bool {
        self.community.is_some()
    }
}

/// The current authenticated user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    user_id: String,
    org: Org,
    /// Login username, typically an email address
    username: String,
    display_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    first_name: Option<String>,
    #[serde(default, rename = "avatarURL", skip_serializing_if = "Option::is_none")]
    avatar_url: Option<Url>,
}

impl User {
    pub fn new(
        user_id: impl Into<String>,
        org: Org,
        username: impl Into<String>,
        display_name: impl Into<String>,
    ) -> Self {
        Self {
            user_id: user_id.into(),
            org,
            username: username.into(),
            display_name: display_name.into(),
            first_name: None,
            avatar_url: None,
        }
    }

    pub fn with_first_name(mut self, first_name: impl Into<String>) -> Self {
        self.first_name = Some(first_name.into());
        self
    }

    pub fn with_avatar_url(mut self, avatar_url: Url) -> Self {
        self.avatar_url = Some(avatar_url);
        self
    }

    pub fn user_id(&self) -> &str {
        &self.user_id
    }

    pub fn org(&self) -> &Org {
        &self.org
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    /// Full name formatted for display
    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    pub fn first_name(&self) -> Option<&str> {
        self.first_name.as_deref()
    }

    /// Profile picture; callers fall back to default imagery when absent
    pub fn avatar_url(&self) -> Option<&Url> {
        self.avatar_url.as_ref()
    }

    pub fn community(&self) -> Option<&Community> {
        self.org.community()
    }
}
