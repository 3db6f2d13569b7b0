//! Recording adapter for the `CanvasLayout` port.

use serde_json::json;

use super::{record_interaction, record_result};
use crate::cassette::session::SharedRecorder;
use crate::error::CanvasError;
use crate::ports::{CanvasLayout, DocId, Geometry, Item, ItemId, Side};

const PORT: &str = "canvas";

/// Records canvas calls while delegating to an inner implementation.
pub struct RecordingCanvas {
    inner: Box<dyn CanvasLayout>,
    recorder: SharedRecorder,
}

impl RecordingCanvas {
    /// Wraps `inner`, logging into `recorder`.
    pub fn new(inner: Box<dyn CanvasLayout>, recorder: SharedRecorder) -> Self {
        Self { inner, recorder }
    }

    fn record<T: serde::Serialize>(
        &self,
        method: &str,
        input: &serde_json::Value,
        result: &Result<T, CanvasError>,
    ) {
        record_result(&self.recorder, PORT, method, input, result);
    }
}

impl CanvasLayout for RecordingCanvas {
    fn remove_all_items(&self) {
        self.inner.remove_all_items();
        record_interaction(&self.recorder, PORT, "remove_all_items", &(), &());
    }

    fn create_item(&self, doc_id: &DocId, geometry: Geometry) -> ItemId {
        let result = self.inner.create_item(doc_id, geometry);
        let input = json!({ "doc_id": doc_id, "geometry": geometry });
        record_interaction(&self.recorder, PORT, "create_item", &input, &result);
        result
    }

    fn center_item(&self, item_id: ItemId) -> Result<(), CanvasError> {
        let result = self.inner.center_item(item_id);
        self.record("center_item", &json!({ "item_id": item_id }), &result);
        result
    }

    fn focus_item(&self, item_id: ItemId) -> Result<(), CanvasError> {
        let result = self.inner.focus_item(item_id);
        self.record("focus_item", &json!({ "item_id": item_id }), &result);
        result
    }

    fn change_doc(&self, item_id: ItemId, doc_id: &DocId) -> Result<(), CanvasError> {
        let result = self.inner.change_doc(item_id, doc_id);
        self.record("change_doc", &json!({ "item_id": item_id, "doc_id": doc_id }), &result);
        result
    }

    fn expand_item(&self, item_id: ItemId, animate: bool) -> Result<(), CanvasError> {
        let result = self.inner.expand_item(item_id, animate);
        self.record("expand_item", &json!({ "item_id": item_id, "animate": animate }), &result);
        result
    }

    fn hide_item(&self, item_id: ItemId) -> Result<(), CanvasError> {
        let result = self.inner.hide_item(item_id);
        self.record("hide_item", &json!({ "item_id": item_id }), &result);
        result
    }

    fn center_doc_with_friends(
        &self,
        doc_id: &DocId,
        item_id: Option<ItemId>,
        target_doc_ids: &[DocId],
        source_doc_ids: &[DocId],
        animate: bool,
    ) -> Result<ItemId, CanvasError> {
        let result = self.inner.center_doc_with_friends(
            doc_id,
            item_id,
            target_doc_ids,
            source_doc_ids,
            animate,
        );
        let input = json!({
            "doc_id": doc_id,
            "item_id": item_id,
            "target_doc_ids": target_doc_ids,
            "source_doc_ids": source_doc_ids,
            "animate": animate,
        });
        self.record("center_doc_with_friends", &input, &result);
        result
    }

    fn show_item_friends(
        &self,
        item_id: ItemId,
        friend_doc_ids: &[DocId],
        side: Side,
        animate: bool,
    ) -> Result<(), CanvasError> {
        let result = self.inner.show_item_friends(item_id, friend_doc_ids, side, animate);
        let input = json!({
            "item_id": item_id,
            "friend_doc_ids": friend_doc_ids,
            "side": side,
            "animate": animate,
        });
        self.record("show_item_friends", &input, &result);
        result
    }

    fn get_item(&self, item_id: ItemId) -> Result<Item, CanvasError> {
        let result = self.inner.get_item(item_id);
        self.record("get_item", &json!({ "item_id": item_id }), &result);
        result
    }

    fn get_item_id_for_doc_id(&self, doc_id: &DocId) -> Result<ItemId, CanvasError> {
        let result = self.inner.get_item_id_for_doc_id(doc_id);
        self.record("get_item_id_for_doc_id", &json!({ "doc_id": doc_id }), &result);
        result
    }

    fn get_connected_item_ids(&self, item_id: ItemId) -> Result<Vec<ItemId>, CanvasError> {
        let result = self.inner.get_connected_item_ids(item_id);
        self.record("get_connected_item_ids", &json!({ "item_id": item_id }), &result);
        result
    }

    fn items(&self) -> Vec<Item> {
        let result = self.inner.items();
        record_interaction(&self.recorder, PORT, "items", &(), &result);
        result
    }

    fn focused_item(&self) -> Option<ItemId> {
        let result = self.inner.focused_item();
        record_interaction(&self.recorder, PORT, "focused_item", &(), &result);
        result
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use super::*;
    use crate::adapters::memory::MemoryCanvas;
    use crate::cassette::recorder::CassetteRecorder;
    use crate::config::LayoutSettings;

    #[test]
    fn records_ok_and_err_results() {
        let recorder = Arc::new(Mutex::new(CassetteRecorder::new("/unused", "test")));
        {
            let inner = MemoryCanvas::new(LayoutSettings::default());
            let canvas = RecordingCanvas::new(Box::new(inner), Arc::clone(&recorder));
            let item = canvas.create_item(&DocId::new("a"), Geometry::new(0.0, 0.0, 1.0, 1.0));
            canvas.focus_item(item).unwrap();
            assert!(canvas.focus_item(ItemId(99)).is_err());
        }

        let recorder = recorder.lock().unwrap();
        let outputs: Vec<&serde_json::Value> =
            recorder.interactions().iter().map(|i| &i.output).collect();
        assert_eq!(outputs[0], &json!(1));
        assert_eq!(outputs[1], &json!({"Ok": null}));
        assert_eq!(outputs[2], &json!({"Err": "unknown item #99"}));
    }
}
