//! Destinations
//!
//! A [`Destination`] is a unit of navigable intent. The variant set is closed;
//! hosts that only care about the normalized payload can ignore the variant
//! and use [`Destination::page_reference`].

use std::sync::Arc;

use crate::link::Link;
use crate::object_home::ObjectHome;
use crate::page_reference::{Attributes, PageReference};
use crate::quick_action::QuickAction;
use crate::record::Record;

/// Anything that can be navigated to
#[derive(Debug, Clone, PartialEq)]
pub enum Destination {
    Link(Link),
    ObjectHome(ObjectHome),
    Record(Record),
    QuickAction(QuickAction),
    PageReference(PageReferenceDestination),
}

impl Destination {
    /// The destination this one was derived from, if any
    ///
    /// Routers pass this along so a plugin can recover extra context, e.g. a
    /// "show comment" destination derived from the feed item's record. The
    /// reference is shared, never owned; building a cycle is a caller error.
    pub fn original(&self) -> Option<&Arc<Destination>> {
        match self {
            Destination::Link(link) => link.original(),
            Destination::ObjectHome(home) => home.original(),
            Destination::Record(record) => record.original(),
            Destination::QuickAction(action) => action.original(),
            Destination::PageReference(reference) => reference.original(),
        }
    }

    /// The normalized page reference, absent only for quick actions
    pub fn page_reference(&self) -> Option<&PageReference> {
        match self {
            Destination::Link(link) => Some(link.page_reference()),
            Destination::ObjectHome(home) => Some(home.page_reference()),
            Destination::Record(record) => Some(record.page_reference()),
            Destination::QuickAction(_) => None,
            Destination::PageReference(reference) => Some(reference.page_reference()),
        }
    }

    /// Short variant name, for logs
    pub fn kind(&self) -> &'static str {
        match self {
            Destination::Link(_) => "link",
            Destination::ObjectHome(_) => "object_home",
            Destination::Record(_) => "record",
            Destination::QuickAction(_) => "quick_action",
            Destination::PageReference(_) => "page_reference",
        }
    }

    pub fn as_record(&self) -> Option<&Record> {
        match self {
            Destination::Record(record) => Some(record),
            _ => None,
        }
    }

    pub fn as_link(&self) -> Option<&Link> {
        match self {
            Destination::Link(link) => Some(link),
            _ => None,
        }
    }

    pub fn as_object_home(&self) -> Option<&ObjectHome> {
        match self {
            Destination::ObjectHome(home) => Some(home),
            _ => None,
        }
    }

    pub fn as_quick_action(&self) -> Option<&QuickAction> {
        match self {
            Destination::QuickAction(action) => Some(action),
            _ => None,
        }
    }

    pub fn as_page_reference(&self) -> Option<&PageReferenceDestination> {
        match self {
            Destination::PageReference(destination) => Some(destination),
            _ => None,
        }
    }
}

/// Destination wrapping an arbitrary page reference
///
/// Covers targets the other variants do not model. Hosts can also use it to
/// ask a plugin to handle a page reference event.
#[derive(Debug, Clone, PartialEq)]
pub struct PageReferenceDestination {
    page_reference: PageReference,
    original: Option<Arc<Destination>>,
}

impl PageReferenceDestination {
    pub fn new(
        page_type: impl Into<String>,
        attributes: Attributes,
        state: Option<Attributes>,
    ) -> Self {
        PageReference::new(page_type, attributes)
            .with_state(state)
            .into()
    }

    pub fn with_original(mut self, original: impl Into<Arc<Destination>>) -> Self {
        self.original = Some(original.into());
        self
    }

    pub fn original(&self) -> Option<&Arc<Destination>> {
        self.original.as_ref()
    }

    pub fn page_reference(&self) -> &PageReference {
        &self.page_reference
    }
}

impl From<PageReference> for PageReferenceDestination {
    fn from(page_reference: PageReference) -> Self {
        Self {
            page_reference,
            original: None,
        }
    }
}

macro_rules! impl_destination_from {
    ($($variant:ident => $ty:ty),* $(,)?) => {
        $(
            impl From<$ty> for Destination {
                fn from(value: $ty) -> Self {
                    Destination::$variant(value)
                }
            }

            impl From<$ty> for Arc<Destination> {
                fn from(value: $ty) -> Self {
                    Arc::new(Destination::$variant(value))
                }
            }
        )*
    };
}

impl_destination_from! {
    Link => Link,
    ObjectHome => ObjectHome,
    Record => Record,
    QuickAction => QuickAction,
    PageReference => PageReferenceDestination,
}
