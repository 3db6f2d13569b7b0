//! ID generators for the in-memory document graph.

use std::sync::atomic::{AtomicU64, Ordering};

use uuid::Uuid;

use crate::ports::{DocId, IdGenerator};

/// ID generator that produces random UUIDs.
pub struct UuidIdGenerator;

impl UuidIdGenerator {
    /// Creates a new UUID generator.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Default for UuidIdGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl IdGenerator for UuidIdGenerator {
    fn next_doc_id(&self) -> DocId {
        DocId::new(Uuid::new_v4().to_string())
    }
}

/// ID generator yielding `<prefix>-1`, `<prefix>-2`, ...
pub struct SequentialIdGenerator {
    prefix: String,
    next: AtomicU64,
}

impl SequentialIdGenerator {
    /// Creates a generator with the given prefix, starting at 1.
    pub fn new(prefix: impl Into<String>) -> Self {
        Self { prefix: prefix.into(), next: AtomicU64::new(1) }
    }
}

impl IdGenerator for SequentialIdGenerator {
    fn next_doc_id(&self) -> DocId {
        let n = self.next.fetch_add(1, Ordering::Relaxed);
        DocId::new(format!("{}-{n}", self.prefix))
    }
}
