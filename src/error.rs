//! Error types for the canvas port, the navigation gestures and scripts.

use crate::ports::{DocId, ItemId};

/// Canvas precondition violations.
///
/// These indicate a stale or invented id upstream; nothing in the
/// navigator recovers from them.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CanvasError {
    /// The layout engine never created this item.
    #[error("unknown item {0}")]
    UnknownItem(ItemId),

    /// The item exists but was hidden.
    #[error("item {0} is hidden")]
    HiddenItem(ItemId),

    /// No visible item shows the document.
    #[error("no visible item shows document {0}")]
    NoItemForDoc(DocId),

    /// An error string served from a replayed cassette.
    #[error("{0}")]
    Replayed(String),
}

/// Failure of a navigation gesture.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum NavigationError {
    /// A layout call was made against an invalid item.
    #[error("canvas error: {0}")]
    Canvas(#[from] CanvasError),
}

/// Result alias for gesture handlers.
pub type NavResult<T> = Result<T, NavigationError>;

/// Failure while loading or running a gesture script.
#[derive(Debug, thiserror::Error)]
pub enum ScriptError {
    /// The script file could not be read.
    #[error("failed to read script {path}: {source}")]
    Read {
        /// Script path.
        path: String,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// The script is not valid YAML for the gesture format.
    #[error("failed to parse script: {0}")]
    Parse(#[from] serde_yaml::Error),

    /// An item reference is malformed.
    #[error("invalid item reference `{0}` (expected empty, #<n>, doc:<id> or text:<note>)")]
    BadItemRef(String),

    /// An item reference matched no visible item.
    #[error("step {step}: no visible item matches `{reference}`")]
    UnresolvedItem {
        /// One-based step number.
        step: usize,
        /// The reference as written.
        reference: String,
    },

    /// A navigate step named neither input nor document.
    #[error("step {step}: navigate needs `input` or `doc`")]
    MissingTarget {
        /// One-based step number.
        step: usize,
    },

    /// A gesture failed.
    #[error("step {step}: {source}")]
    Gesture {
        /// One-based step number.
        step: usize,
        /// Underlying navigation error.
        source: NavigationError,
    },
}
