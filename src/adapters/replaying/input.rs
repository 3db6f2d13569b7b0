//! Replaying adapter for the `InputPanel` port.

use std::sync::Mutex;

use super::next_output;
use crate::cassette::replayer::CassetteReplayer;
use crate::ports::{InputPanel, ItemId, StagedSuggestions};

const PORT: &str = "input";

/// Serves recorded input panel results from a cassette.
pub struct ReplayingInputPanel {
    replayer: Option<Mutex<CassetteReplayer>>,
}

impl ReplayingInputPanel {
    /// Create a replaying panel backed by the given replayer.
    #[must_use]
    pub fn new(replayer: CassetteReplayer) -> Self {
        Self { replayer: Some(Mutex::new(replayer)) }
    }

    /// Create a replaying panel with no cassette. Panics when called.
    #[must_use]
    pub fn unconfigured() -> Self {
        Self { replayer: None }
    }
}

impl InputPanel for ReplayingInputPanel {
    fn refresh_suggestions(&self, _item_id: ItemId) {
        next_output::<()>(self.replayer.as_ref(), PORT, "refresh_suggestions");
    }

    fn input_value(&self, _item_id: ItemId) -> String {
        next_output(self.replayer.as_ref(), PORT, "input_value")
    }

    fn set_input_value(&self, _item_id: ItemId, _value: &str) {
        next_output::<()>(self.replayer.as_ref(), PORT, "set_input_value");
    }

    fn stage_suggestions(&self, _staged: StagedSuggestions) {
        next_output::<()>(self.replayer.as_ref(), PORT, "stage_suggestions");
    }

    fn shown_suggestions(&self, _item_id: ItemId) -> Option<StagedSuggestions> {
        next_output(self.replayer.as_ref(), PORT, "shown_suggestions")
    }
}
