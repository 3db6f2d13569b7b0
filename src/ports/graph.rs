//! Document graph port: content-addressable documents and the links between them.

use std::fmt;

use serde::{Deserialize, Serialize};

const EMPTY_ITEM: &str = "emptyItem";

/// Stable identifier of a document.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DocId(String);

impl DocId {
    /// Wraps a raw identifier.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// The sentinel id shown by the empty item (the navigation input).
    #[must_use]
    pub fn empty_item() -> Self {
        Self(EMPTY_ITEM.to_string())
    }

    /// Whether this is the empty item sentinel.
    #[must_use]
    pub fn is_empty_item(&self) -> bool {
        self.0 == EMPTY_ITEM
    }

    /// The raw identifier.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DocId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for DocId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

/// What a document holds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DocContent {
    /// A web page, identified by its normalized URL.
    Url {
        /// Normalized URL.
        url: String,
    },
    /// A free-text note (stored as an HTML fragment).
    Note {
        /// Note body.
        text: String,
    },
}

/// A document record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    /// Document id.
    pub id: DocId,
    /// Document body.
    #[serde(flatten)]
    pub content: DocContent,
}

impl Document {
    /// The URL, for web page documents.
    #[must_use]
    pub fn url(&self) -> Option<&str> {
        match &self.content {
            DocContent::Url { url } => Some(url),
            DocContent::Note { .. } => None,
        }
    }

    /// The text, for note documents.
    #[must_use]
    pub fn text(&self) -> Option<&str> {
        match &self.content {
            DocContent::Note { text } => Some(text),
            DocContent::Url { .. } => None,
        }
    }

    /// Human-readable label: the URL or the note text.
    #[must_use]
    pub fn label(&self) -> &str {
        match &self.content {
            DocContent::Url { url } => url,
            DocContent::Note { text } => text,
        }
    }
}

/// A directed edge between two documents.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Link {
    /// Linking document.
    pub source: DocId,
    /// Linked document.
    pub target: DocId,
}

/// Both friend sets of a document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Friends {
    /// Documents this document links to.
    pub target_doc_ids: Vec<DocId>,
    /// Documents linking to this document.
    pub source_doc_ids: Vec<DocId>,
}

impl Friends {
    /// Whether both sets are empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.target_doc_ids.is_empty() && self.source_doc_ids.is_empty()
    }
}

/// One auto-suggest hit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Suggestion {
    /// Suggested document.
    pub doc_id: DocId,
    /// Text shown in the suggestion list.
    pub label: String,
}

/// Store of documents and links with dedup-on-write.
///
/// All writes are find-or-add unless stated otherwise, so repeating a
/// call with the same arguments never creates a second record.
pub trait DocumentGraph: Send + Sync {
    /// Returns the document for `url`, creating it if no document has the
    /// same normalized URL.
    fn find_or_add_url(&self, url: &str) -> DocId;

    /// Returns the note whose text equals `text`, creating it if absent.
    fn find_or_add_note(&self, text: &str) -> DocId;

    /// Unconditionally stores a note and returns its id.
    ///
    /// With `doc_id` given, that document is overwritten instead of a new
    /// id being minted.
    fn add_note(&self, text: &str, doc_id: Option<DocId>) -> DocId;

    /// Adds the link `source -> target` unless it already exists.
    fn find_or_add_link(&self, source: &DocId, target: &DocId);

    /// Deletes every link between `doc1` and `doc2`, in either direction.
    fn delete_link(&self, doc1: &DocId, doc2: &DocId);

    /// Deletes a document together with all links touching it.
    fn delete_doc(&self, doc_id: &DocId);

    /// Looks up a document.
    fn get_doc(&self, doc_id: &DocId) -> Option<Document>;

    /// Finds a note whose text is exactly `text`.
    fn get_doc_with_text(&self, text: &str) -> Option<DocId>;

    /// Outgoing and incoming neighbours of a document.
    fn get_friends(&self, doc_id: &DocId) -> Friends;

    /// Whether any link touches the document.
    fn has_friends(&self, doc_id: &DocId) -> bool;

    /// Suggestion search for the navigation input.
    fn auto_suggest_search(&self, input_value: &str) -> Vec<Suggestion>;

    /// All stored documents.
    fn documents(&self) -> Vec<Document>;

    /// All stored links.
    fn links(&self) -> Vec<Link>;
}
