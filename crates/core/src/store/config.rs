//! Store configuration

/// Where newly added records go
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InsertionOrder {
    /// Newest first
    Prepend,
    /// Creation order
    #[default]
    Append,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    /// Storage slot holding the snapshot
    pub key: String,
    pub insertion: InsertionOrder,
    /// Write the active filter into the snapshot and restore it on open
    pub persist_filter: bool,
}

impl StoreConfig {
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            insertion: InsertionOrder::default(),
            persist_filter: false,
        }
    }

    /// Task list preset: `tasks` slot, creation order
    pub fn tasks() -> Self {
        Self::new("tasks")
    }

    /// Note preset: `notes` slot, newest first
    pub fn notes() -> Self {
        Self::new("notes").with_insertion(InsertionOrder::Prepend)
    }

    pub fn with_key(mut self, key: impl Into<String>) -> Self {
        self.key = key.into();
        self
    }

    pub fn with_insertion(mut self, insertion: InsertionOrder) -> Self {
        self.insertion = insertion;
        self
    }

    pub fn with_persist_filter(mut self, persist_filter: bool) -> Self {
        self.persist_filter = persist_filter;
        self
    }
}
