//! Inline edit session
//!
//! Tracks which record, if any, the view layer is editing. Deleting the
//! record under edit through [`EditSession::remove`] ends the session, so the
//! view never holds an edit for a record that no longer exists.

use super::record_store::RecordStore;
use crate::record::{Content, Record, RecordId};
use crate::storage::SlotStorage;
use crate::{Error, Result};

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum EditState {
    #[default]
    Viewing,
    Editing(RecordId),
}

/// Result of [`EditSession::save`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SaveOutcome {
    /// The draft was applied to the record
    Saved(RecordId),
    /// The draft was blank or the record vanished; nothing changed
    Discarded,
    /// No edit was in progress
    NotEditing,
}

#[derive(Debug, Clone, Default)]
pub struct EditSession {
    state: EditState,
}

impl EditSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &EditState {
        &self.state
    }

    /// Id of the record being edited
    pub fn editing(&self) -> Option<&RecordId> {
        match &self.state {
            EditState::Viewing => None,
            EditState::Editing(id) => Some(id),
        }
    }

    pub fn is_editing(&self, id: &RecordId) -> bool {
        self.editing() == Some(id)
    }

    /// Start editing `id`, replacing any edit in progress
    pub fn begin<C: Content, S: SlotStorage>(
        &mut self,
        store: &RecordStore<C, S>,
        id: &RecordId,
    ) -> Result<()> {
        if !store.contains(id) {
            return Err(Error::NotFound(id.to_string()));
        }
        self.state = EditState::Editing(id.clone());
        Ok(())
    }

    /// Apply `draft` to the record under edit and return to viewing
    ///
    /// A blank draft discards the edit instead of clearing the record.
    pub fn save<C: Content, S: SlotStorage>(
        &mut self,
        store: &mut RecordStore<C, S>,
        draft: impl Into<C::Draft>,
    ) -> SaveOutcome {
        let EditState::Editing(id) = std::mem::take(&mut self.state) else {
            return SaveOutcome::NotEditing;
        };

        match store.update(&id, draft) {
            Ok(()) => SaveOutcome::Saved(id),
            Err(e) => {
                tracing::debug!(id = %id, error = %e, "edit discarded");
                SaveOutcome::Discarded
            }
        }
    }

    pub fn cancel(&mut self) {
        self.state = EditState::Viewing;
    }

    /// Remove a record, ending the edit if it was the one being edited
    pub fn remove<C: Content, S: SlotStorage>(
        &mut self,
        store: &mut RecordStore<C, S>,
        id: &RecordId,
    ) -> Option<Record<C>> {
        let removed = store.remove(id);
        if self.is_editing(id) {
            self.state = EditState::Viewing;
        }
        removed
    }
}
