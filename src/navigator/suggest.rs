//! Auto-suggest glue between the input panel and the graph search.

use tracing::debug;

use super::Navigator;
use crate::ports::{ItemId, StagedSuggestions};

impl Navigator<'_> {
    /// Refreshes the suggestion list of an empty item.
    ///
    /// Shows whatever is already staged first, then searches for the
    /// current input and stages the result keyed by that input.
    pub fn update_auto_suggest(&self, item_id: ItemId) {
        self.ctx.input.refresh_suggestions(item_id);

        let input_value = self.ctx.input.input_value(item_id);
        let suggestions = self.ctx.graph.auto_suggest_search(&input_value);
        debug!(item = %item_id, input = %input_value, hits = suggestions.len(), "searched");
        self.ctx.input.stage_suggestions(StagedSuggestions { input_value, suggestions });
    }

    /// Sets the text typed into an empty item and updates its suggestions.
    pub fn type_input(&self, item_id: ItemId, value: &str) {
        self.ctx.input.set_input_value(item_id, value);
        self.update_auto_suggest(item_id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Settings;
    use crate::context::ServiceContext;

    #[test]
    fn shows_stale_list_then_stages_fresh_one() {
        let settings = Settings::default();
        let ctx = ServiceContext::deterministic(&settings);
        let nav = Navigator::new(&ctx, &settings.navigator);
        ctx.graph.find_or_add_note("web of notes");
        ctx.graph.find_or_add_note("webbing");
        let item = ItemId(1);

        nav.type_input(item, "web");
        assert_eq!(ctx.input.shown_suggestions(item), Some(StagedSuggestions::default()));

        nav.type_input(item, "webb");
        let shown = ctx.input.shown_suggestions(item).unwrap();
        assert_eq!(shown.input_value, "web");
        assert_eq!(shown.suggestions.len(), 2);

        nav.update_auto_suggest(item);
        let shown = ctx.input.shown_suggestions(item).unwrap();
        assert_eq!(shown.input_value, "webb");
        assert_eq!(shown.suggestions[0].label, "webbing");
    }

    #[test]
    fn blank_input_stages_nothing() {
        let settings = Settings::default();
        let ctx = ServiceContext::deterministic(&settings);
        let nav = Navigator::new(&ctx, &settings.navigator);
        ctx.graph.find_or_add_note("anything");

        nav.type_input(ItemId(1), "");
        nav.update_auto_suggest(ItemId(1));
        let shown = ctx.input.shown_suggestions(ItemId(1)).unwrap();
        assert!(shown.suggestions.is_empty());
    }
}
