//! Spatial link inference: the left item of a visible pair is the link source.

use tracing::debug;

use super::Navigator;
use crate::error::NavResult;
use crate::ports::{DocId, Geometry, ItemId};

/// Whether an item at `item` sits left of one at `other`.
///
/// Compares horizontal centers strictly, so equal centers are "not left".
#[must_use]
pub fn doc_is_left(item: &Geometry, other: &Geometry) -> bool {
    item.center_x() < other.center_x()
}

impl Navigator<'_> {
    /// Persists a link between `doc_id` and the document of every item
    /// visibly connected to `item_id`, directed left to right.
    ///
    /// Pairs involving the empty item, or a document and itself, are skipped.
    ///
    /// # Errors
    ///
    /// Fails if `item_id` or one of its connections is not a visible item.
    pub fn link_to_connected_items(&self, item_id: ItemId, doc_id: &DocId) -> NavResult<()> {
        if doc_id.is_empty_item() {
            return Ok(());
        }

        for connected_id in self.ctx.canvas.get_connected_item_ids(item_id)? {
            let item = self.ctx.canvas.get_item(item_id)?;
            let connected = self.ctx.canvas.get_item(connected_id)?;
            if connected.is_empty_item() || &connected.doc_id == doc_id {
                continue;
            }

            let (source, target) = if doc_is_left(&item.geometry, &connected.geometry) {
                (doc_id, &connected.doc_id)
            } else {
                (&connected.doc_id, doc_id)
            };
            debug!(%source, %target, "inferred link from layout");
            self.ctx.graph.find_or_add_link(source, target);
        }
        Ok(())
    }
}
