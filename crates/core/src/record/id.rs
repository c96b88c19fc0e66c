//! Record id generation

use chrono::Utc;
use uuid::Uuid;

use super::model::RecordId;

/// Generates ids of the form `<kind>-<millis>-<seq>-<suffix>`
///
/// `millis` is fixed when the generator is created and `seq` increases by one
/// per id, so ids from one generator never repeat. The random suffix keeps
/// two generators created in the same millisecond apart.
#[derive(Debug, Clone)]
pub struct IdGenerator {
    kind: &'static str,
    seed: i64,
    seq: u64,
}

impl IdGenerator {
    pub fn new(kind: &'static str) -> Self {
        Self {
            kind,
            seed: Utc::now().timestamp_millis(),
            seq: 0,
        }
    }

    pub fn next_id(&mut self) -> RecordId {
        self.seq += 1;
        let uuid = Uuid::new_v4().to_string();
        let suffix = uuid.split('-').next().unwrap_or("0000");
        RecordId::new(format!("{}-{}-{}-{}", self.kind, self.seed, self.seq, suffix))
    }
}
