//! Object home destination

use std::sync::Arc;

use crate::destination::Destination;
use crate::page_reference::{
    attributes, Attributes, PageReference, PageReferenceKey, PageReferenceType, PageReferenceValue,
};

/// The home page of an object (entity) type, e.g. the Contact list
#[derive(Debug, Clone, PartialEq)]
pub struct ObjectHome {
    object_type: String,
    original: Option<Arc<Destination>>,
    pub(crate) page_reference: PageReference,
}

impl ObjectHome {
    /// Create an object home for the entity API name `object_type`
    ///
    /// The page reference is `standard__objectPage` with
    /// `{objectApiName: object_type, actionName: "home"}`.
    pub fn new(object_type: impl Into<String>) -> Self {
        let object_type = object_type.into();
        let page_reference = PageReference::known(
            PageReferenceType::Object,
            attributes([
                (PageReferenceKey::ObjectApiName, object_type.as_str()),
                (PageReferenceKey::ActionName, PageReferenceValue::Home.as_str()),
            ]),
        );

        Self {
            object_type,
            original: None,
            page_reference,
        }
    }

    pub fn with_attributes(
        object_type: impl Into<String>,
        attributes: Attributes,
        state: Option<Attributes>,
    ) -> Self {
        let mut home = Self::new(object_type);
        home.page_reference =
            PageReference::known(PageReferenceType::Object, attributes).with_state(state);
        home
    }

    pub fn with_original(mut self, original: impl Into<Arc<Destination>>) -> Self {
        self.original = Some(original.into());
        self
    }

    /// The API name of the entity
    pub fn object_type(&self) -> &str {
        &self.object_type
    }

    pub fn original(&self) -> Option<&Arc<Destination>> {
        self.original.as_ref()
    }

    pub fn page_reference(&self) -> &PageReference {
        &self.page_reference
    }
}
