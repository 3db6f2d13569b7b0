//! Replaying adapter for the `DocumentGraph` port.

use std::sync::Mutex;

use super::next_output;
use crate::cassette::replayer::CassetteReplayer;
use crate::ports::{DocId, Document, DocumentGraph, Friends, Link, Suggestion};

const PORT: &str = "graph";

/// Serves recorded graph results from a cassette.
pub struct ReplayingGraph {
    replayer: Option<Mutex<CassetteReplayer>>,
}

impl ReplayingGraph {
    /// Create a replaying graph backed by the given replayer.
    #[must_use]
    pub fn new(replayer: CassetteReplayer) -> Self {
        Self { replayer: Some(Mutex::new(replayer)) }
    }

    /// Create a replaying graph with no cassette. Panics when called.
    #[must_use]
    pub fn unconfigured() -> Self {
        Self { replayer: None }
    }

    fn next<T: serde::de::DeserializeOwned>(&self, method: &str) -> T {
        next_output(self.replayer.as_ref(), PORT, method)
    }
}

impl DocumentGraph for ReplayingGraph {
    fn find_or_add_url(&self, _url: &str) -> DocId {
        self.next("find_or_add_url")
    }

    fn find_or_add_note(&self, _text: &str) -> DocId {
        self.next("find_or_add_note")
    }

    fn add_note(&self, _text: &str, _doc_id: Option<DocId>) -> DocId {
        self.next("add_note")
    }

    fn find_or_add_link(&self, _source: &DocId, _target: &DocId) {
        self.next::<()>("find_or_add_link");
    }

    fn delete_link(&self, _doc1: &DocId, _doc2: &DocId) {
        self.next::<()>("delete_link");
    }

    fn delete_doc(&self, _doc_id: &DocId) {
        self.next::<()>("delete_doc");
    }

    fn get_doc(&self, _doc_id: &DocId) -> Option<Document> {
        self.next("get_doc")
    }

    fn get_doc_with_text(&self, _text: &str) -> Option<DocId> {
        self.next("get_doc_with_text")
    }

    fn get_friends(&self, _doc_id: &DocId) -> Friends {
        self.next("get_friends")
    }

    fn has_friends(&self, _doc_id: &DocId) -> bool {
        self.next("has_friends")
    }

    fn auto_suggest_search(&self, _input_value: &str) -> Vec<Suggestion> {
        self.next("auto_suggest_search")
    }

    fn documents(&self) -> Vec<Document> {
        self.next("documents")
    }

    fn links(&self) -> Vec<Link> {
        self.next("links")
    }
}
