//! Recording adapter for the `DocumentGraph` port.

use serde_json::json;

use super::record_interaction;
use crate::cassette::session::SharedRecorder;
use crate::ports::{DocId, Document, DocumentGraph, Friends, Link, Suggestion};

const PORT: &str = "graph";

/// Records graph calls while delegating to an inner implementation.
pub struct RecordingGraph {
    inner: Box<dyn DocumentGraph>,
    recorder: SharedRecorder,
}

impl RecordingGraph {
    /// Wraps `inner`, logging into `recorder`.
    pub fn new(inner: Box<dyn DocumentGraph>, recorder: SharedRecorder) -> Self {
        Self { inner, recorder }
    }

    fn record<I, O>(&self, method: &str, input: &I, output: &O)
    where
        I: serde::Serialize,
        O: serde::Serialize,
    {
        record_interaction(&self.recorder, PORT, method, input, output);
    }
}

impl DocumentGraph for RecordingGraph {
    fn find_or_add_url(&self, url: &str) -> DocId {
        let result = self.inner.find_or_add_url(url);
        self.record("find_or_add_url", &json!({ "url": url }), &result);
        result
    }

    fn find_or_add_note(&self, text: &str) -> DocId {
        let result = self.inner.find_or_add_note(text);
        self.record("find_or_add_note", &json!({ "text": text }), &result);
        result
    }

    fn add_note(&self, text: &str, doc_id: Option<DocId>) -> DocId {
        let input = json!({ "text": text, "doc_id": doc_id });
        let result = self.inner.add_note(text, doc_id);
        self.record("add_note", &input, &result);
        result
    }

    fn find_or_add_link(&self, source: &DocId, target: &DocId) {
        self.inner.find_or_add_link(source, target);
        self.record("find_or_add_link", &json!({ "source": source, "target": target }), &());
    }

    fn delete_link(&self, doc1: &DocId, doc2: &DocId) {
        self.inner.delete_link(doc1, doc2);
        self.record("delete_link", &json!({ "doc1": doc1, "doc2": doc2 }), &());
    }

    fn delete_doc(&self, doc_id: &DocId) {
        self.inner.delete_doc(doc_id);
        self.record("delete_doc", &json!({ "doc_id": doc_id }), &());
    }

    fn get_doc(&self, doc_id: &DocId) -> Option<Document> {
        let result = self.inner.get_doc(doc_id);
        self.record("get_doc", &json!({ "doc_id": doc_id }), &result);
        result
    }

    fn get_doc_with_text(&self, text: &str) -> Option<DocId> {
        let result = self.inner.get_doc_with_text(text);
        self.record("get_doc_with_text", &json!({ "text": text }), &result);
        result
    }

    fn get_friends(&self, doc_id: &DocId) -> Friends {
        let result = self.inner.get_friends(doc_id);
        self.record("get_friends", &json!({ "doc_id": doc_id }), &result);
        result
    }

    fn has_friends(&self, doc_id: &DocId) -> bool {
        let result = self.inner.has_friends(doc_id);
        self.record("has_friends", &json!({ "doc_id": doc_id }), &result);
        result
    }

    fn auto_suggest_search(&self, input_value: &str) -> Vec<Suggestion> {
        let result = self.inner.auto_suggest_search(input_value);
        self.record("auto_suggest_search", &json!({ "input_value": input_value }), &result);
        result
    }

    fn documents(&self) -> Vec<Document> {
        let result = self.inner.documents();
        self.record("documents", &(), &result);
        result
    }

    fn links(&self) -> Vec<Link> {
        let result = self.inner.links();
        self.record("links", &(), &result);
        result
    }
}
