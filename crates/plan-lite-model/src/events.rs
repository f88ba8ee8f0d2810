// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Synchronous callback registries.
//!
//! The whole engine is single-threaded and event-driven: graph
//! mutation happens on the caller's thread and observers are notified
//! synchronously, in registration order, before the mutating call
//! returns. This type makes that observer list explicit.

use std::fmt;

/// Handle for removing a registered callback.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct CallbackId(u64);

/// An ordered list of observers for one event kind.
///
/// Callbacks receive the event payload by reference and may capture
/// mutable state (dirty flags, counters). They must not call back into
/// the object that is firing them.
pub struct Callbacks<T> {
    next_id: u64,
    entries: Vec<(CallbackId, Box<dyn FnMut(&T)>)>,
}

impl<T> Default for Callbacks<T> {
    fn default() -> Self {
        Self {
            next_id: 0,
            entries: Vec::new(),
        }
    }
}

impl<T> fmt::Debug for Callbacks<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Callbacks")
            .field("len", &self.entries.len())
            .finish()
    }
}

impl<T> Callbacks<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an observer; returns a handle for later removal.
    pub fn add(&mut self, callback: impl FnMut(&T) + 'static) -> CallbackId {
        let id = CallbackId(self.next_id);
        self.next_id += 1;
        self.entries.push((id, Box::new(callback)));
        id
    }

    /// Remove a previously registered observer. Unknown handles are
    /// ignored.
    pub fn remove(&mut self, id: CallbackId) {
        self.entries.retain(|(entry_id, _)| *entry_id != id);
    }

    /// Fire the event, invoking observers in registration order.
    pub fn fire(&mut self, event: &T) {
        for (_, callback) in self.entries.iter_mut() {
            callback(event);
        }
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }
}
