//! Stack-based navigation

use plugin_navigation::{Destination, Navigation};
use std::sync::{Mutex, MutexGuard, PoisonError};
use tracing::debug;

/// Keeps presented destinations on a stack
///
/// Headless hosts and tests use this to observe what a plugin asked for.
#[derive(Debug, Default)]
pub struct StackNavigator {
    stack: Mutex<Vec<Destination>>,
}

impl StackNavigator {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, Vec<Destination>> {
        self.stack.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Destination on top of the stack
    pub fn current(&self) -> Option<Destination> {
        self.lock().last().cloned()
    }

    pub fn depth(&self) -> usize {
        self.lock().len()
    }

    /// Snapshot, bottom first
    pub fn stack(&self) -> Vec<Destination> {
        self.lock().clone()
    }

    pub fn pop(&self) -> Option<Destination> {
        self.lock().pop()
    }
}

impl Navigation for StackNavigator {
    fn go_with_replace(&self, to: Destination, replace: bool) {
        let kind = to.kind();
        let mut stack = self.lock();

        match stack.last_mut() {
            Some(top) if replace => *top = to,
            _ => stack.push(to),
        }

        debug!(kind, replace, depth = stack.len(), "Navigated");
    }
}
