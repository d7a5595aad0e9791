//! # Navigation Contract
//!
//! Router interface over polymorphic destinations, implemented by the host
//! application and called by plugins.
//!
//! ## Destinations
//!
//! | Variant | Page reference type | Minimum attributes |
//! |---------|---------------------|--------------------|
//! | [`Link`] | `standard__webPage` | `url` |
//! | [`ObjectHome`] | `standard__objectPage` | `objectApiName`, `actionName: "home"` |
//! | [`Record`] | `standard__recordPage` | `recordId`, `actionName: "view"`, `objectApiName` when known |
//! | [`QuickAction`] | none | n/a |
//! | [`PageReferenceDestination`] | caller-defined | caller-defined |
//!
//! Page references are computed eagerly at construction. [`Link`],
//! [`ObjectHome`] and [`Record`] also offer a `with_attributes` constructor
//! that supplies attributes and state directly.
//!
//! Every destination can carry an `original`: a shared `Arc` handle to the
//! destination it was derived from.
//!
//! ## Example
//!
//! ```
//! use plugin_navigation::{Destination, Record};
//!
//! let record = Record::typed("001xx000003DGT2AAO", "Account");
//! let destination = Destination::from(record);
//! let reference = destination.page_reference().unwrap();
//!
//! assert_eq!(reference.page_type, "standard__recordPage");
//! assert_eq!(reference.attribute_str("actionName"), Some("view"));
//! ```

pub mod destination;
pub mod link;
pub mod navigation;
pub mod object_home;
pub mod page_reference;
pub mod quick_action;
pub mod record;

pub use destination::{Destination, PageReferenceDestination};
pub use link::Link;
pub use navigation::Navigation;
pub use object_home::ObjectHome;
pub use page_reference::{
    Attributes, PageReference, PageReferenceKey, PageReferenceType, PageReferenceValue,
    UnknownPageType,
};
pub use quick_action::QuickAction;
pub use record::Record;

// Attribute values are plain JSON values
pub use serde_json::{json, Value};

#[cfg(any(test, feature = "mocks"))]
pub use navigation::MockNavigation;
