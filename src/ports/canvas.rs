//! Canvas layout port: visible items, their geometry and connections.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::graph::DocId;
use crate::error::CanvasError;

/// Identifier of an item on the canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(pub u64);

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Position and size of an item.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Geometry {
    /// Left edge.
    pub x: f64,
    /// Top edge.
    pub y: f64,
    /// Width.
    pub width: f64,
    /// Height.
    pub height: f64,
}

impl Geometry {
    /// Creates a geometry.
    #[must_use]
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self { x, y, width, height }
    }

    /// A box of the given size centered on `(cx, cy)`.
    #[must_use]
    pub fn centered_on(cx: f64, cy: f64, width: f64, height: f64) -> Self {
        Self::new(cx - width / 2.0, cy - height / 2.0, width, height)
    }

    /// Horizontal center.
    #[must_use]
    pub fn center_x(&self) -> f64 {
        self.x + self.width / 2.0
    }

    /// Vertical center.
    #[must_use]
    pub fn center_y(&self) -> f64 {
        self.y + self.height / 2.0
    }

    /// Right edge.
    #[must_use]
    pub fn right(&self) -> f64 {
        self.x + self.width
    }
}

/// A visual placement of one document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    /// Item id.
    pub id: ItemId,
    /// Document shown; `emptyItem` for the navigation input.
    pub doc_id: DocId,
    /// Current geometry.
    pub geometry: Geometry,
    /// Whether this is the focal item of the current star.
    pub centered: bool,
    /// Whether the embedded view is expanded.
    pub expanded: bool,
    /// Whether the item was removed from view.
    pub hidden: bool,
}

impl Item {
    /// Whether this item is the empty navigation input.
    #[must_use]
    pub fn is_empty_item(&self) -> bool {
        self.doc_id.is_empty_item()
    }
}

/// Which side of an anchor item friends are revealed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Side {
    /// Incoming-edge neighbours.
    Left,
    /// Outgoing-edge neighbours.
    Right,
}

/// Owner of the visible items and their geometry.
///
/// Every method taking an [`ItemId`] fails with [`CanvasError`] when the id
/// is unknown or refers to a hidden item; callers treat that as a logic
/// error upstream, not a recoverable condition.
pub trait CanvasLayout: Send + Sync {
    /// Removes every item.
    fn remove_all_items(&self);

    /// Places a new, unconnected item.
    fn create_item(&self, doc_id: &DocId, geometry: Geometry) -> ItemId;

    /// Moves an item to the middle of the viewport and marks it centered.
    ///
    /// # Errors
    ///
    /// Returns an error if the item is unknown or hidden.
    fn center_item(&self, item_id: ItemId) -> Result<(), CanvasError>;

    /// Gives an item input focus.
    ///
    /// # Errors
    ///
    /// Returns an error if the item is unknown or hidden.
    fn focus_item(&self, item_id: ItemId) -> Result<(), CanvasError>;

    /// Swaps the document an item shows.
    ///
    /// # Errors
    ///
    /// Returns an error if the item is unknown or hidden.
    fn change_doc(&self, item_id: ItemId, doc_id: &DocId) -> Result<(), CanvasError>;

    /// Expands an item's embedded view.
    ///
    /// # Errors
    ///
    /// Returns an error if the item is unknown or hidden.
    fn expand_item(&self, item_id: ItemId, animate: bool) -> Result<(), CanvasError>;

    /// Removes an item from view, dropping its connections.
    ///
    /// # Errors
    ///
    /// Returns an error if the item is unknown or already hidden.
    fn hide_item(&self, item_id: ItemId) -> Result<(), CanvasError>;

    /// Centers `doc_id` (in `item_id` if given) and arranges its first-level
    /// friends around it: targets right, sources left. Returns the focal item.
    ///
    /// # Errors
    ///
    /// Returns an error if `item_id` is given but unknown or hidden.
    fn center_doc_with_friends(
        &self,
        doc_id: &DocId,
        item_id: Option<ItemId>,
        target_doc_ids: &[DocId],
        source_doc_ids: &[DocId],
        animate: bool,
    ) -> Result<ItemId, CanvasError>;

    /// Reveals `friend_doc_ids` next to an item on the given side.
    ///
    /// # Errors
    ///
    /// Returns an error if the item is unknown or hidden.
    fn show_item_friends(
        &self,
        item_id: ItemId,
        friend_doc_ids: &[DocId],
        side: Side,
        animate: bool,
    ) -> Result<(), CanvasError>;

    /// Reads an item, hidden or not.
    ///
    /// # Errors
    ///
    /// Returns an error if the item is unknown.
    fn get_item(&self, item_id: ItemId) -> Result<Item, CanvasError>;

    /// The visible item showing `doc_id`.
    ///
    /// # Errors
    ///
    /// Returns an error if no visible item shows the document.
    fn get_item_id_for_doc_id(&self, doc_id: &DocId) -> Result<ItemId, CanvasError>;

    /// Visible items connected to an item.
    ///
    /// # Errors
    ///
    /// Returns an error if the item is unknown or hidden.
    fn get_connected_item_ids(&self, item_id: ItemId) -> Result<Vec<ItemId>, CanvasError>;

    /// Every item, including hidden ones, ordered by id.
    fn items(&self) -> Vec<Item>;

    /// The item holding input focus.
    fn focused_item(&self) -> Option<ItemId>;
}
