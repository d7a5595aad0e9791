//! Record destination

use std::sync::Arc;

use crate::destination::Destination;
use crate::page_reference::{
    attributes, Attributes, PageReference, PageReferenceKey, PageReferenceType, PageReferenceValue,
};

/// A single record, identified by its 18-character entity id
///
/// The id is opaque here; length and charset are the caller's concern.
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    id: String,
    object_type: Option<String>,
    original: Option<Arc<Destination>>,
    pub(crate) page_reference: PageReference,
}

impl Record {
    /// Create a record destination whose API name is unknown
    pub fn new(id: impl Into<String>) -> Self {
        Self::build(id.into(), None)
    }

    /// Create a record destination with a known API name
    ///
    /// The page reference is `standard__recordPage` with
    /// `{recordId, actionName: "view", objectApiName}`.
    pub fn typed(id: impl Into<String>, object_type: impl Into<String>) -> Self {
        Self::build(id.into(), Some(object_type.into()))
    }

    pub fn with_attributes(
        id: impl Into<String>,
        object_type: Option<String>,
        attributes: Attributes,
        state: Option<Attributes>,
    ) -> Self {
        let mut record = Self::build(id.into(), object_type);
        record.page_reference =
            PageReference::known(PageReferenceType::Record, attributes).with_state(state);
        record
    }

    fn build(id: String, object_type: Option<String>) -> Self {
        let mut attrs = attributes([
            (PageReferenceKey::RecordId, id.as_str()),
            (PageReferenceKey::ActionName, PageReferenceValue::View.as_str()),
        ]);
        if let Some(api_name) = &object_type {
            attrs.insert(
                PageReferenceKey::ObjectApiName.as_str().to_string(),
                api_name.as_str().into(),
            );
        }

        Self {
            id,
            object_type,
            original: None,
            page_reference: PageReference::known(PageReferenceType::Record, attrs),
        }
    }

    pub fn with_original(mut self, original: impl Into<Arc<Destination>>) -> Self {
        self.original = Some(original.into());
        self
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    /// The API name of the record's entity, if known
    pub fn object_type(&self) -> Option<&str> {
        self.object_type.as_deref()
    }

    pub fn original(&self) -> Option<&Arc<Destination>> {
        self.original.as_ref()
    }

    pub fn page_reference(&self) -> &PageReference {
        &self.page_reference
    }
}
