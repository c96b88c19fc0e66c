//! Record store module
//!
//! The in-memory record list, its subscribers and the edit-session state
//! machine driven by the view layer.

mod config;
mod edit;
mod record_store;
mod subscription;

pub use config::{InsertionOrder, StoreConfig};
pub use edit::{EditSession, EditState, SaveOutcome};
pub use record_store::{NoteStore, RecordStore, TaskStore};
pub use subscription::{Change, StoreView, SubscriptionId};
