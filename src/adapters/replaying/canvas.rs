//! Replaying adapter for the `CanvasLayout` port.

use std::sync::Mutex;

use serde::de::DeserializeOwned;

use super::{next_output, replay_result};
use crate::cassette::replayer::CassetteReplayer;
use crate::error::CanvasError;
use crate::ports::{CanvasLayout, DocId, Geometry, Item, ItemId, Side};

const PORT: &str = "canvas";

/// Serves recorded canvas results from a cassette.
pub struct ReplayingCanvas {
    replayer: Option<Mutex<CassetteReplayer>>,
}

impl ReplayingCanvas {
    /// Create a replaying canvas backed by the given replayer.
    #[must_use]
    pub fn new(replayer: CassetteReplayer) -> Self {
        Self { replayer: Some(Mutex::new(replayer)) }
    }

    /// Create a replaying canvas with no cassette. Panics when called.
    #[must_use]
    pub fn unconfigured() -> Self {
        Self { replayer: None }
    }

    fn next<T: DeserializeOwned>(&self, method: &str) -> T {
        next_output(self.replayer.as_ref(), PORT, method)
    }

    fn next_result<T: DeserializeOwned>(&self, method: &str) -> Result<T, CanvasError> {
        let output: serde_json::Value = self.next(method);
        replay_result(&output)
    }
}

impl CanvasLayout for ReplayingCanvas {
    fn remove_all_items(&self) {
        self.next::<()>("remove_all_items");
    }

    fn create_item(&self, _doc_id: &DocId, _geometry: Geometry) -> ItemId {
        self.next("create_item")
    }

    fn center_item(&self, _item_id: ItemId) -> Result<(), CanvasError> {
        self.next_result("center_item")
    }

    fn focus_item(&self, _item_id: ItemId) -> Result<(), CanvasError> {
        self.next_result("focus_item")
    }

    fn change_doc(&self, _item_id: ItemId, _doc_id: &DocId) -> Result<(), CanvasError> {
        self.next_result("change_doc")
    }

    fn expand_item(&self, _item_id: ItemId, _animate: bool) -> Result<(), CanvasError> {
        self.next_result("expand_item")
    }

    fn hide_item(&self, _item_id: ItemId) -> Result<(), CanvasError> {
        self.next_result("hide_item")
    }

    fn center_doc_with_friends(
        &self,
        _doc_id: &DocId,
        _item_id: Option<ItemId>,
        _target_doc_ids: &[DocId],
        _source_doc_ids: &[DocId],
        _animate: bool,
    ) -> Result<ItemId, CanvasError> {
        self.next_result("center_doc_with_friends")
    }

    fn show_item_friends(
        &self,
        _item_id: ItemId,
        _friend_doc_ids: &[DocId],
        _side: Side,
        _animate: bool,
    ) -> Result<(), CanvasError> {
        self.next_result("show_item_friends")
    }

    fn get_item(&self, _item_id: ItemId) -> Result<Item, CanvasError> {
        self.next_result("get_item")
    }

    fn get_item_id_for_doc_id(&self, _doc_id: &DocId) -> Result<ItemId, CanvasError> {
        self.next_result("get_item_id_for_doc_id")
    }

    fn get_connected_item_ids(&self, _item_id: ItemId) -> Result<Vec<ItemId>, CanvasError> {
        self.next_result("get_connected_item_ids")
    }

    fn items(&self) -> Vec<Item> {
        self.next("items")
    }

    fn focused_item(&self) -> Option<ItemId> {
        self.next("focused_item")
    }
}
