//! Input panel port: the empty item's text field and suggestion list.

use serde::{Deserialize, Serialize};

use super::canvas::ItemId;
use super::graph::Suggestion;

/// A suggestion list together with the input value that produced it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StagedSuggestions {
    /// Input value the list was computed for.
    pub input_value: String,
    /// Suggestions, best first.
    pub suggestions: Vec<Suggestion>,
}

/// UI-side state of the navigation input.
pub trait InputPanel: Send + Sync {
    /// Renders whatever suggestion list is currently staged under `item_id`.
    fn refresh_suggestions(&self, item_id: ItemId);

    /// Current raw input value of an item (empty if never typed into).
    fn input_value(&self, item_id: ItemId) -> String;

    /// Replaces the raw input value of an item.
    fn set_input_value(&self, item_id: ItemId, value: &str);

    /// Stages a suggestion list for the next refresh.
    fn stage_suggestions(&self, staged: StagedSuggestions);

    /// The list last rendered under `item_id`.
    fn shown_suggestions(&self, item_id: ItemId) -> Option<StagedSuggestions>;
}
