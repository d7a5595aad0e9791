//! Lightning-style page references
//!
//! A page reference is the normalized `{type, attributes, state}` payload
//! describing a navigable target independently of the destination variant
//! that produced it.
//! See <https://developer.salesforce.com/docs/atlas.en-us.lightning.meta/lightning/components_navigation_page_definitions.htm>.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// String-keyed mapping with heterogeneous, statically typed values
pub type Attributes = Map<String, Value>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown page reference type: {0}")]
pub struct UnknownPageType(pub String);

/// Page reference type tags produced by the built-in destinations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PageReferenceType {
    Record,
    Object,
    WebPage,
}

impl PageReferenceType {
    pub fn as_str(&self) -> &'static str {
        match self {
            PageReferenceType::Record => "standard__recordPage",
            PageReferenceType::Object => "standard__objectPage",
            PageReferenceType::WebPage => "standard__webPage",
        }
    }
}

impl fmt::Display for PageReferenceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PageReferenceType {
    type Err = UnknownPageType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "standard__recordPage" => Ok(PageReferenceType::Record),
            "standard__objectPage" => Ok(PageReferenceType::Object),
            "standard__webPage" => Ok(PageReferenceType::WebPage),
            other => Err(UnknownPageType(other.to_string())),
        }
    }
}

/// Well-known keys in a page reference payload
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PageReferenceKey {
    PageType,
    Attributes,
    State,
    RecordId,
    ObjectApiName,
    Url,
    ActionName,
}

impl PageReferenceKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            PageReferenceKey::PageType => "type",
            PageReferenceKey::Attributes => "attributes",
            PageReferenceKey::State => "state",
            PageReferenceKey::RecordId => "recordId",
            PageReferenceKey::ObjectApiName => "objectApiName",
            PageReferenceKey::Url => "url",
            PageReferenceKey::ActionName => "actionName",
        }
    }
}

impl fmt::Display for PageReferenceKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Well-known `actionName` values
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PageReferenceValue {
    Home,
    View,
}

impl PageReferenceValue {
    pub fn as_str(&self) -> &'static str {
        match self {
            PageReferenceValue::Home => "home",
            PageReferenceValue::View => "view",
        }
    }
}

impl fmt::Display for PageReferenceValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Normalized navigation payload
///
/// `page_type` is a free-form tag so hosts can accept types beyond
/// [`PageReferenceType`]; the built-in destinations only ever produce the
/// enumerated tags.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageReference {
    #[serde(rename = "type")]
    pub page_type: String,
    pub attributes: Attributes,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<Attributes>,
}

impl PageReference {
    pub fn new(page_type: impl Into<String>, attributes: Attributes) -> Self {
        Self {
            page_type: page_type.into(),
            attributes,
            state: None,
        }
    }

    pub fn with_state(mut self, state: Option<Attributes>) -> Self {
        self.state = state;
        self
    }

    /// The enumerated type tag, if `page_type` is one of the known ones
    pub fn known_type(&self) -> Option<PageReferenceType> {
        self.page_type.parse().ok()
    }

    pub fn attribute(&self, key: &str) -> Option<&Value> {
        self.attributes.get(key)
    }

    pub fn attribute_str(&self, key: &str) -> Option<&str> {
        self.attribute(key).and_then(Value::as_str)
    }

    pub(crate) fn known(page_type: PageReferenceType, attributes: Attributes) -> Self {
        Self::new(page_type.as_str(), attributes)
    }
}

/// Build an attribute map from well-known keys
pub(crate) fn attributes<I, V>(entries: I) -> Attributes
where
    I: IntoIterator<Item = (PageReferenceKey, V)>,
    V: Into<Value>,
{
    entries
        .into_iter()
        .map(|(key, value)| (key.as_str().to_string(), value.into()))
        .collect()
}
