//! Link destination

use std::sync::Arc;
use url::Url;

use crate::destination::Destination;
use crate::page_reference::{
    attributes, Attributes, PageReference, PageReferenceKey, PageReferenceType,
};

/// A URL to navigate to
///
/// Links represent Salesforce endpoints; org information is inferred from the
/// URL itself by the host.
#[derive(Debug, Clone, PartialEq)]
pub struct Link {
    url: Url,
    original: Option<Arc<Destination>>,
    pub(crate) page_reference: PageReference,
}

impl Link {
    /// Create a link whose page reference is `standard__webPage` with the
    /// absolute URL as its `url` attribute.
    pub fn new(url: Url) -> Self {
        let page_reference = PageReference::known(
            PageReferenceType::WebPage,
            attributes([(PageReferenceKey::Url, url.as_str())]),
        );

        Self {
            url,
            original: None,
            page_reference,
        }
    }

    /// Parse `input` as an absolute URL and build a link from it
    pub fn parse(input: &str) -> Result<Self, url::ParseError> {
        Url::parse(input).map(Self::new)
    }

    /// Create a link with caller-supplied page reference attributes and state
    pub fn with_attributes(url: Url, attributes: Attributes, state: Option<Attributes>) -> Self {
        let mut link = Self::new(url);
        link.page_reference =
            PageReference::known(PageReferenceType::WebPage, attributes).with_state(state);
        link
    }

    pub fn with_original(mut self, original: impl Into<Arc<Destination>>) -> Self {
        self.original = Some(original.into());
        self
    }

    pub fn url(&self) -> &Url {
        &self.url
    }

    pub fn original(&self) -> Option<&Arc<Destination>> {
        self.original.as_ref()
    }

    pub fn page_reference(&self) -> &PageReference {
        &self.page_reference
    }
}
