//! Change notification for the view layer

use crate::record::{Completable, Record, RecordId};
use crate::task::{select_visible, Filter, TaskCounts};

/// What a completed store operation changed
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Change {
    Added(RecordId),
    Updated(RecordId),
    Removed(RecordId),
    Toggled { id: RecordId, completed: bool },
    ClearedCompleted(usize),
    FilterChanged(Filter),
}

/// Read-only view of the store handed to subscribers
#[derive(Debug)]
pub struct StoreView<'a, C> {
    pub records: &'a [Record<C>],
    pub filter: Filter,
}

impl<'a, C> Clone for StoreView<'a, C> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<'a, C> Copy for StoreView<'a, C> {}

impl<'a, C: Completable> StoreView<'a, C> {
    pub fn visible(&self) -> Vec<&'a Record<C>> {
        select_visible(self.records, self.filter)
    }

    pub fn counts(&self) -> TaskCounts {
        TaskCounts::of(self.records)
    }
}

/// Handle returned by `subscribe`, used to unsubscribe
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Listener<C> = Box<dyn FnMut(&Change, StoreView<'_, C>)>;

pub(crate) struct Subscribers<C> {
    next: u64,
    listeners: Vec<(SubscriptionId, Listener<C>)>,
}

impl<C> Default for Subscribers<C> {
    fn default() -> Self {
        Self {
            next: 0,
            listeners: Vec::new(),
        }
    }
}

impl<C> Subscribers<C> {
    pub(crate) fn subscribe(&mut self, listener: Listener<C>) -> SubscriptionId {
        self.next += 1;
        let id = SubscriptionId(self.next);
        self.listeners.push((id, listener));
        id
    }

    pub(crate) fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(listener_id, _)| *listener_id != id);
        self.listeners.len() != before
    }

    #[cfg(test)]
    pub(crate) fn len(&self) -> usize {
        self.listeners.len()
    }

    /// Call every listener in subscription order
    pub(crate) fn notify(&mut self, change: &Change, view: StoreView<'_, C>) {
        for (_, listener) in self.listeners.iter_mut() {
            listener(change, view);
        }
    }
}
