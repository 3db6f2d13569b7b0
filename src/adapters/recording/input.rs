//! Recording adapter for the `InputPanel` port.

use serde_json::json;

use super::record_interaction;
use crate::cassette::session::SharedRecorder;
use crate::ports::{InputPanel, ItemId, StagedSuggestions};

const PORT: &str = "input";

/// Records input panel calls while delegating to an inner implementation.
pub struct RecordingInputPanel {
    inner: Box<dyn InputPanel>,
    recorder: SharedRecorder,
}

impl RecordingInputPanel {
    /// Wraps `inner`, logging into `recorder`.
    pub fn new(inner: Box<dyn InputPanel>, recorder: SharedRecorder) -> Self {
        Self { inner, recorder }
    }
}

impl InputPanel for RecordingInputPanel {
    fn refresh_suggestions(&self, item_id: ItemId) {
        self.inner.refresh_suggestions(item_id);
        let input = json!({ "item_id": item_id });
        record_interaction(&self.recorder, PORT, "refresh_suggestions", &input, &());
    }

    fn input_value(&self, item_id: ItemId) -> String {
        let result = self.inner.input_value(item_id);
        let input = json!({ "item_id": item_id });
        record_interaction(&self.recorder, PORT, "input_value", &input, &result);
        result
    }

    fn set_input_value(&self, item_id: ItemId, value: &str) {
        self.inner.set_input_value(item_id, value);
        let input = json!({ "item_id": item_id, "value": value });
        record_interaction(&self.recorder, PORT, "set_input_value", &input, &());
    }

    fn stage_suggestions(&self, staged: StagedSuggestions) {
        let input = json!(staged);
        self.inner.stage_suggestions(staged);
        record_interaction(&self.recorder, PORT, "stage_suggestions", &input, &());
    }

    fn shown_suggestions(&self, item_id: ItemId) -> Option<StagedSuggestions> {
        let result = self.inner.shown_suggestions(item_id);
        let input = json!({ "item_id": item_id });
        record_interaction(&self.recorder, PORT, "shown_suggestions", &input, &result);
        result
    }
}
