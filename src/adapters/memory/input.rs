//! In-memory input panel.

use std::collections::HashMap;
use std::sync::Mutex;

use crate::ports::{InputPanel, ItemId, StagedSuggestions};

#[derive(Default)]
struct PanelState {
    values: HashMap<ItemId, String>,
    staged: StagedSuggestions,
    shown: HashMap<ItemId, StagedSuggestions>,
}

/// Input values and suggestion lists held in process memory.
#[derive(Default)]
pub struct MemoryInputPanel {
    state: Mutex<PanelState>,
}

impl MemoryInputPanel {
    /// Creates an empty panel.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn state(&self) -> std::sync::MutexGuard<'_, PanelState> {
        self.state.lock().expect("input panel lock poisoned")
    }
}

impl InputPanel for MemoryInputPanel {
    fn refresh_suggestions(&self, item_id: ItemId) {
        let mut state = self.state();
        let staged = state.staged.clone();
        state.shown.insert(item_id, staged);
    }

    fn input_value(&self, item_id: ItemId) -> String {
        self.state().values.get(&item_id).cloned().unwrap_or_default()
    }

    fn set_input_value(&self, item_id: ItemId, value: &str) {
        self.state().values.insert(item_id, value.to_string());
    }

    fn stage_suggestions(&self, staged: StagedSuggestions) {
        self.state().staged = staged;
    }

    fn shown_suggestions(&self, item_id: ItemId) -> Option<StagedSuggestions> {
        self.state().shown.get(&item_id).cloned()
    }
}
