//! Quick action destination

use std::sync::Arc;

use crate::destination::Destination;
use crate::page_reference::Attributes;
use crate::record::Record;

/// A server-defined action on an entity, or a global action
///
/// Unlike the other destinations, a quick action has no page reference.
#[derive(Debug, Clone, PartialEq)]
pub struct QuickAction {
    action_name: String,
    attributes: Attributes,
    target: Option<Record>,
    original: Option<Arc<Destination>>,
}

impl QuickAction {
    pub fn new(action_name: impl Into<String>) -> Self {
        Self {
            action_name: action_name.into(),
            attributes: Attributes::new(),
            target: None,
            original: None,
        }
    }

    /// Parameters passed to the action
    pub fn with_action_attributes(mut self, attributes: Attributes) -> Self {
        self.attributes = attributes;
        self
    }

    /// Record that gives the action its context, e.g. the record a feed post
    /// is made on or a new task is attached to
    pub fn with_target(mut self, target: Record) -> Self {
        self.target = Some(target);
        self
    }

    pub fn with_original(mut self, original: impl Into<Arc<Destination>>) -> Self {
        self.original = Some(original.into());
        self
    }

    /// The API name of the action
    pub fn action_name(&self) -> &str {
        &self.action_name
    }

    pub fn attributes(&self) -> &Attributes {
        &self.attributes
    }

    pub fn target(&self) -> Option<&Record> {
        self.target.as_ref()
    }

    pub fn original(&self) -> Option<&Arc<Destination>> {
        self.original.as_ref()
    }
}
