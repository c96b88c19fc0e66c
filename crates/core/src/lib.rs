//! Core library for jotlist
//!
//! This crate contains the persisted record-list state manager shared by the
//! note and task apps:
//! - Record model and id generation
//! - Slot storage backends and the snapshot adapter
//! - The record store, its filter and subscriptions
//! - The inline edit session

pub mod error;
pub mod note;
pub mod record;
pub mod storage;
pub mod store;
pub mod task;

pub use error::Error;
pub type Result<T> = std::result::Result<T, Error>;
