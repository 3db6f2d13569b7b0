//! Document id minting port.

use super::graph::DocId;

/// Mints ids for newly stored documents.
///
/// The graph never derives ids from content, so swapping in a predictable
/// sequence makes whole navigation sessions reproducible.
pub trait IdGenerator: Send + Sync {
    /// Returns an id no earlier call has returned.
    fn next_doc_id(&self) -> DocId;
}
