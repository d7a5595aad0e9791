//! Navigation Abstraction

use crate::destination::Destination;

/// Router provided by the host application
///
/// Lets plugins navigate to records, object homes, URLs, quick actions and
/// raw page references. Both calls return immediately; the host may perform
/// the transition asynchronously and absorbs any failure itself (typically as
/// a no-op). The navigation stack is entirely host-owned.
///
/// Hosts decide how to render by matching on the [`Destination`] variant or by
/// relying on [`Destination::page_reference`] when present.
///
/// # Example
///
/// ```ignore
/// use plugin_navigation::{Navigation, Record};
///
/// fn open_account(navigation: &dyn Navigation, id: &str) {
///     navigation.go(Record::typed(id, "Account").into());
/// }
/// ```
#[cfg_attr(any(test, feature = "mocks"), mockall::automock)]
pub trait Navigation: Send + Sync {
    /// Navigate to `to`, replacing the current top-level view when `replace`
    /// is true instead of stacking on top of it.
    fn go_with_replace(&self, to: Destination, replace: bool);

    /// Navigate to `to` using the host's default stacking behavior
    ///
    /// Equivalent to `go_with_replace(to, false)`.
    fn go(&self, to: Destination) {
        self.go_with_replace(to, false);
    }
}
