//! Record module
//!
//! Generic record envelope shared by notes and tasks, plus id generation.

mod id;
mod model;

pub use id::IdGenerator;
pub use model::{Completable, Content, Record, RecordId};
pub(crate) use model::trimmed;
