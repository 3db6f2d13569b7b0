//! Find-or-create resolution of user input and drop payloads.

use tracing::debug;

use super::{DropPayload, Navigator};
use crate::content::{as_url, strip_nul, text_to_html};
use crate::ports::DocId;

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}

impl Navigator<'_> {
    /// Resolves typed input to a document, creating a note if nothing matches.
    ///
    /// URLs go through the store's URL dedup; other text reuses a note with
    /// exactly the same text. Blank input resolves to nothing.
    pub fn find_or_create_doc(&self, user_input: &str) -> Option<DocId> {
        if user_input.trim().is_empty() {
            debug!("ignoring blank navigation input");
            return None;
        }

        if let Some(url) = as_url(user_input) {
            return Some(self.ctx.graph.find_or_add_url(&url));
        }

        if let Some(doc_id) = self.ctx.graph.get_doc_with_text(user_input) {
            debug!(doc = %doc_id, "reusing note with identical text");
            return Some(doc_id);
        }
        let doc_id = self.ctx.graph.add_note(user_input, None);
        debug!(doc = %doc_id, "created note");
        Some(doc_id)
    }

    /// Resolves a drop payload: URL first, then HTML, then plain text.
    pub fn resolve_drop(&self, payload: &DropPayload) -> Option<DocId> {
        let url = non_blank(payload.url.as_deref())
            .map(str::to_string)
            .or_else(|| non_blank(payload.text.as_deref()).and_then(as_url));
        if let Some(url) = url {
            return Some(self.ctx.graph.find_or_add_url(&url));
        }

        if let Some(html) = non_blank(payload.html.as_deref()) {
            let html = strip_nul(html);
            if !html.trim().is_empty() {
                return Some(self.ctx.graph.find_or_add_note(&html));
            }
        }

        if let Some(text) = non_blank(payload.text.as_deref()) {
            return Some(self.ctx.graph.find_or_add_note(&text_to_html(text)));
        }

        debug!("ignoring empty drop payload");
        None
    }
}
