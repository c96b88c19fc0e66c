//! Persisted record store
//!
//! Holds the ordered record list and the active filter in memory. Every
//! mutation rewrites the full snapshot to the storage slot and then notifies
//! subscribers. Storage failures are logged and never undo the in-memory
//! change: for the current session memory is the source of truth.

use chrono::Utc;

use super::config::{InsertionOrder, StoreConfig};
use super::subscription::{Change, StoreView, Subscribers, SubscriptionId};
use crate::note::Note;
use crate::record::{Completable, Content, IdGenerator, Record, RecordId};
use crate::storage::{MemoryStorage, SlotStorage};
use crate::task::{select_visible, Filter, Task, TaskCounts};
use crate::{Error, Result};

pub struct RecordStore<C: Content, S: SlotStorage = MemoryStorage> {
    records: Vec<Record<C>>,
    filter: Filter,
    config: StoreConfig,
    storage: S,
    ids: IdGenerator,
    subscribers: Subscribers<C>,
}

/// Store of to-do entries
pub type TaskStore<S = MemoryStorage> = RecordStore<Task, S>;

/// Store of notes
pub type NoteStore<S = MemoryStorage> = RecordStore<Note, S>;

impl<C: Content, S: SlotStorage> RecordStore<C, S> {
    /// Open a store, loading its snapshot from `storage` once
    pub fn open(storage: S, config: StoreConfig) -> Self {
        let snapshot = crate::storage::load::<C, S>(&storage, &config.key);
        let filter = if config.persist_filter {
            snapshot.filter.unwrap_or_default()
        } else {
            Filter::default()
        };

        tracing::debug!(
            key = %config.key,
            records = snapshot.records.len(),
            %filter,
            "opened record store"
        );

        Self {
            records: snapshot.records,
            filter,
            config,
            storage,
            ids: IdGenerator::new(C::KIND),
            subscribers: Subscribers::default(),
        }
    }

    /// All records in display order
    pub fn records(&self) -> &[Record<C>] {
        &self.records
    }

    pub fn get(&self, id: &RecordId) -> Option<&Record<C>> {
        self.records.iter().find(|r| &r.id == id)
    }

    pub fn contains(&self, id: &RecordId) -> bool {
        self.get(id).is_some()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Close the store, handing back its storage
    pub fn into_storage(self) -> S {
        self.storage
    }

    pub fn view(&self) -> StoreView<'_, C> {
        StoreView {
            records: &self.records,
            filter: self.filter,
        }
    }

    /// Register a callback run after every completed mutation
    pub fn subscribe<F>(&mut self, listener: F) -> SubscriptionId
    where
        F: FnMut(&Change, StoreView<'_, C>) + 'static,
    {
        self.subscribers.subscribe(Box::new(listener))
    }

    /// Returns `false` if the subscription was already gone
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.subscribers.unsubscribe(id)
    }

    /// Add a record built from `draft`, returning its new id
    ///
    /// Blank content is rejected with [`Error::Validation`] and leaves the
    /// store untouched.
    pub fn add(&mut self, draft: impl Into<C::Draft>) -> Result<RecordId> {
        let content = C::from_draft(draft.into())?;
        let id = self.fresh_id();
        let record = Record::new(id.clone(), content);

        match self.config.insertion {
            InsertionOrder::Prepend => self.records.insert(0, record),
            InsertionOrder::Append => self.records.push(record),
        }

        tracing::debug!(key = %self.config.key, id = %id, total = self.records.len(), "record added");
        self.commit(Change::Added(id.clone()));
        Ok(id)
    }

    /// Replace the content of an existing record
    ///
    /// Keeps `id`, `created_at` and any non-editable fields, and stamps
    /// `updated_at`. Unknown ids and blank content leave the store untouched.
    pub fn update(&mut self, id: &RecordId, draft: impl Into<C::Draft>) -> Result<()> {
        let record = self
            .records
            .iter_mut()
            .find(|r| &r.id == id)
            .ok_or_else(|| Error::NotFound(id.to_string()))?;

        record.content.apply_draft(draft.into())?;
        record.updated_at = Some(Utc::now());

        tracing::debug!(key = %self.config.key, id = %id, "record updated");
        self.commit(Change::Updated(id.clone()));
        Ok(())
    }

    /// Remove a record, returning it if it existed
    pub fn remove(&mut self, id: &RecordId) -> Option<Record<C>> {
        let index = self.records.iter().position(|r| &r.id == id)?;
        let record = self.records.remove(index);

        tracing::debug!(key = %self.config.key, id = %id, remaining = self.records.len(), "record removed");
        self.commit(Change::Removed(id.clone()));
        Some(record)
    }

    fn fresh_id(&mut self) -> RecordId {
        loop {
            let id = self.ids.next_id();
            if !self.contains(&id) {
                return id;
            }
            tracing::error!(key = %self.config.key, id = %id, "generated id already in use, regenerating");
        }
    }

    fn commit(&mut self, change: Change) {
        self.persist();
        self.notify(change);
    }

    fn persist(&mut self) {
        let filter = self.config.persist_filter.then_some(self.filter);
        let key = &self.config.key;
        if let Err(e) = crate::storage::save(&mut self.storage, key, &self.records, filter) {
            tracing::error!(
                key = %key,
                error = %e,
                "failed to persist snapshot, keeping in-memory state"
            );
        }
    }

    fn notify(&mut self, change: Change) {
        let view = StoreView {
            records: &self.records,
            filter: self.filter,
        };
        self.subscribers.notify(&change, view);
    }
}

impl<C: Content + Completable, S: SlotStorage> RecordStore<C, S> {
    pub fn filter(&self) -> Filter {
        self.filter
    }

    /// Change the active filter
    ///
    /// Only writes to storage when the filter is persisted.
    pub fn set_filter(&mut self, filter: Filter) {
        if self.filter == filter {
            return;
        }
        self.filter = filter;

        tracing::debug!(key = %self.config.key, %filter, "filter changed");
        if self.config.persist_filter {
            self.persist();
        }
        self.notify(Change::FilterChanged(filter));
    }

    /// Records passing the active filter, in display order
    pub fn visible(&self) -> Vec<&Record<C>> {
        select_visible(&self.records, self.filter)
    }

    pub fn counts(&self) -> TaskCounts {
        TaskCounts::of(&self.records)
    }

    /// Flip the completion flag, returning the new value
    pub fn toggle_completed(&mut self, id: &RecordId) -> Option<bool> {
        let record = self.records.iter_mut().find(|r| &r.id == id)?;
        let completed = !record.content.is_completed();
        record.content.set_completed(completed);

        tracing::debug!(key = %self.config.key, id = %id, completed, "record toggled");
        self.commit(Change::Toggled {
            id: id.clone(),
            completed,
        });
        Some(completed)
    }

    /// Remove every completed record with a single write
    ///
    /// Returns how many records were removed.
    pub fn clear_completed(&mut self) -> usize {
        let before = self.records.len();
        self.records.retain(|r| !r.content.is_completed());
        let removed = before - self.records.len();
        if removed == 0 {
            return 0;
        }

        tracing::debug!(key = %self.config.key, removed, "completed records cleared");
        self.commit(Change::ClearedCompleted(removed));
        removed
    }
}
