//! Navigation orchestrator.
//!
//! Each public method handles one user gesture by sequencing reads and
//! writes against the collaborators in a [`ServiceContext`]. The navigator
//! keeps no state of its own: every step observes the effects of the
//! previous ones through the ports, and gestures never interleave.
//!
//! Two rules tie the graph and the canvas together:
//! - geometry authors edges: when a document lands in an item that is
//!   already visibly connected, the left item becomes the link source;
//! - edges author geometry: focusing a document reveals its targets on the
//!   right and its sources on the left, two levels deep.

mod gestures;
mod link;
mod resolve;
mod star;
mod suggest;

pub use gestures::WELCOME_DOC_ID;
pub use link::doc_is_left;

use serde::{Deserialize, Serialize};

use crate::config::NavigatorSettings;
use crate::context::ServiceContext;
use crate::ports::{DocId, ItemId};

/// What the user asked to navigate to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NavigationTarget {
    /// A known document (e.g. a picked suggestion).
    Doc(DocId),
    /// Raw text typed into the input: a URL or note text.
    Input(String),
}

/// Which document a star reveal is centered on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StarFocus<'d> {
    /// Center a document, reusing or creating an item for it.
    Doc(&'d DocId),
    /// Center the document shown by an item.
    Item(ItemId),
}

/// Data carried by a drag-and-drop onto the canvas.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DropPayload {
    /// Explicit `URL` entry.
    pub url: Option<String>,
    /// `text/html` entry.
    pub html: Option<String>,
    /// Plain text entry.
    pub text: Option<String>,
}

/// Edge an item was dragged out over. Both directions behave the same.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DragDirection {
    /// Off the left edge.
    Left,
    /// Off the right edge.
    Right,
}

/// Gesture handlers over an explicit set of collaborators.
pub struct Navigator<'a> {
    ctx: &'a ServiceContext,
    settings: &'a NavigatorSettings,
}

impl<'a> Navigator<'a> {
    /// Creates a navigator driving `ctx`.
    #[must_use]
    pub fn new(ctx: &'a ServiceContext, settings: &'a NavigatorSettings) -> Self {
        Self { ctx, settings }
    }
}
