//! In-memory document graph.

use std::collections::{BTreeMap, HashMap};
use std::sync::Mutex;

use crate::content::normalize_url;
use crate::ports::{
    DocContent, DocId, Document, DocumentGraph, Friends, IdGenerator, Link, Suggestion,
};

#[derive(Default)]
struct GraphState {
    docs: BTreeMap<DocId, DocContent>,
    url_index: HashMap<String, DocId>,
    text_index: HashMap<String, DocId>,
    links: Vec<Link>,
}

impl GraphState {
    fn insert(&mut self, id: DocId, content: DocContent) {
        self.unindex(&id);
        match &content {
            DocContent::Url { url } => {
                self.url_index.entry(url.clone()).or_insert_with(|| id.clone());
            }
            DocContent::Note { text } => {
                self.text_index.entry(text.clone()).or_insert_with(|| id.clone());
            }
        }
        self.docs.insert(id, content);
    }

    fn unindex(&mut self, id: &DocId) {
        let Some(old) = self.docs.get(id) else {
            return;
        };
        let (index, key) = match old {
            DocContent::Url { url } => (&mut self.url_index, url),
            DocContent::Note { text } => (&mut self.text_index, text),
        };
        if index.get(key) == Some(id) {
            index.remove(key);
        }
    }

    fn touches(link: &Link, doc_id: &DocId) -> bool {
        &link.source == doc_id || &link.target == doc_id
    }
}

/// Document graph held in process memory.
///
/// URL documents are keyed by their normalized URL and notes by their
/// exact text. Links keep insertion order so friend lists come back in
/// the order they were authored.
pub struct MemoryGraph {
    id_gen: Box<dyn IdGenerator>,
    suggest_limit: usize,
    state: Mutex<GraphState>,
}

impl MemoryGraph {
    /// Creates an empty graph minting ids from `id_gen`.
    #[must_use]
    pub fn new(id_gen: Box<dyn IdGenerator>, suggest_limit: usize) -> Self {
        Self { id_gen, suggest_limit, state: Mutex::new(GraphState::default()) }
    }

    fn state(&self) -> std::sync::MutexGuard<'_, GraphState> {
        self.state.lock().expect("graph state lock poisoned")
    }

    fn mint(&self) -> DocId {
        self.id_gen.next_doc_id()
    }
}

impl DocumentGraph for MemoryGraph {
    fn find_or_add_url(&self, url: &str) -> DocId {
        let url = normalize_url(url);
        let mut state = self.state();
        if let Some(id) = state.url_index.get(&url) {
            return id.clone();
        }
        let id = self.mint();
        state.insert(id.clone(), DocContent::Url { url });
        id
    }

    fn find_or_add_note(&self, text: &str) -> DocId {
        let mut state = self.state();
        if let Some(id) = state.text_index.get(text) {
            return id.clone();
        }
        let id = self.mint();
        state.insert(id.clone(), DocContent::Note { text: text.to_string() });
        id
    }

    fn add_note(&self, text: &str, doc_id: Option<DocId>) -> DocId {
        let id = doc_id.unwrap_or_else(|| self.mint());
        self.state().insert(id.clone(), DocContent::Note { text: text.to_string() });
        id
    }

    fn find_or_add_link(&self, source: &DocId, target: &DocId) {
        let mut state = self.state();
        let exists = state.links.iter().any(|l| &l.source == source && &l.target == target);
        if !exists {
            state.links.push(Link { source: source.clone(), target: target.clone() });
        }
    }

    fn delete_link(&self, doc1: &DocId, doc2: &DocId) {
        self.state().links.retain(|l| {
            !((&l.source == doc1 && &l.target == doc2) || (&l.source == doc2 && &l.target == doc1))
        });
    }

    fn delete_doc(&self, doc_id: &DocId) {
        let mut state = self.state();
        state.unindex(doc_id);
        state.docs.remove(doc_id);
        state.links.retain(|l| !GraphState::touches(l, doc_id));
    }

    fn get_doc(&self, doc_id: &DocId) -> Option<Document> {
        self.state()
            .docs
            .get(doc_id)
            .map(|content| Document { id: doc_id.clone(), content: content.clone() })
    }

    fn get_doc_with_text(&self, text: &str) -> Option<DocId> {
        self.state().text_index.get(text).cloned()
    }

    fn get_friends(&self, doc_id: &DocId) -> Friends {
        let state = self.state();
        let mut friends = Friends::default();
        for link in &state.links {
            if &link.source == doc_id {
                friends.target_doc_ids.push(link.target.clone());
            }
            if &link.target == doc_id {
                friends.source_doc_ids.push(link.source.clone());
            }
        }
        friends
    }

    fn has_friends(&self, doc_id: &DocId) -> bool {
        self.state().links.iter().any(|l| GraphState::touches(l, doc_id))
    }

    fn auto_suggest_search(&self, input_value: &str) -> Vec<Suggestion> {
        let needle = input_value.trim().to_lowercase();
        if needle.is_empty() {
            return Vec::new();
        }

        let state = self.state();
        let mut hits: Vec<(bool, Suggestion)> = state
            .docs
            .iter()
            .filter_map(|(id, content)| {
                let label = match content {
                    DocContent::Url { url } => url,
                    DocContent::Note { text } => text,
                };
                let haystack = label.to_lowercase();
                haystack.contains(&needle).then(|| {
                    let suggestion = Suggestion { doc_id: id.clone(), label: label.clone() };
                    (haystack.starts_with(&needle), suggestion)
                })
            })
            .collect();

        // Prefix matches first, then alphabetical.
        hits.sort_by(|(a_prefix, a), (b_prefix, b)| {
            b_prefix.cmp(a_prefix).then_with(|| a.label.cmp(&b.label))
        });
        hits.into_iter().take(self.suggest_limit).map(|(_, s)| s).collect()
    }

    fn documents(&self) -> Vec<Document> {
        self.state()
            .docs
            .iter()
            .map(|(id, content)| Document { id: id.clone(), content: content.clone() })
            .collect()
    }

    fn links(&self) -> Vec<Link> {
        self.state().links.clone()
    }
}
