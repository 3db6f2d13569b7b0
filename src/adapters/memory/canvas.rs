//! In-memory canvas layout engine.
//!
//! Items are never dropped individually: hiding keeps the record with
//! `hidden = true` so a stale id still resolves for reads, but hidden items
//! take no part in doc lookups, connections or layout.
//!
//! Records hidden by a recentre stay dormant and are revived the next time
//! their doc is laid out, so the item map grows with the number of distinct
//! docs shown rather than with the number of reveals. Records hidden through
//! `hide_item` are retired for good.

use std::collections::{BTreeMap, BTreeSet};
use std::sync::Mutex;

use crate::config::LayoutSettings;
use crate::error::CanvasError;
use crate::ports::{CanvasLayout, DocId, Geometry, Item, ItemId, Side};

#[derive(Default)]
struct CanvasState {
    items: BTreeMap<ItemId, Item>,
    // Unordered pairs stored as (low, high).
    connections: BTreeSet<(ItemId, ItemId)>,
    focused: Option<ItemId>,
    // Hidden through `hide_item`; never revived.
    retired: BTreeSet<ItemId>,
    next_id: u64,
}

impl CanvasState {
    fn visible(&self, item_id: ItemId) -> Result<&Item, CanvasError> {
        match self.items.get(&item_id) {
            None => Err(CanvasError::UnknownItem(item_id)),
            Some(item) if item.hidden => Err(CanvasError::HiddenItem(item_id)),
            Some(item) => Ok(item),
        }
    }

    fn visible_mut(&mut self, item_id: ItemId) -> Result<&mut Item, CanvasError> {
        match self.items.get_mut(&item_id) {
            None => Err(CanvasError::UnknownItem(item_id)),
            Some(item) if item.hidden => Err(CanvasError::HiddenItem(item_id)),
            Some(item) => Ok(item),
        }
    }

    fn create(&mut self, doc_id: &DocId, geometry: Geometry) -> ItemId {
        self.next_id += 1;
        let id = ItemId(self.next_id);
        self.items.insert(
            id,
            Item {
                id,
                doc_id: doc_id.clone(),
                geometry,
                centered: false,
                expanded: false,
                hidden: false,
            },
        );
        id
    }

    /// First visible item showing `doc_id`, skipping `exclude`.
    fn find_visible(&self, doc_id: &DocId, exclude: &BTreeSet<ItemId>) -> Option<ItemId> {
        self.items
            .values()
            .find(|item| !item.hidden && &item.doc_id == doc_id && !exclude.contains(&item.id))
            .map(|item| item.id)
    }

    /// Hidden record for `doc_id` left behind by an earlier layout, if any.
    fn find_dormant(&self, doc_id: &DocId) -> Option<ItemId> {
        self.items
            .values()
            .find(|item| item.hidden && &item.doc_id == doc_id && !self.retired.contains(&item.id))
            .map(|item| item.id)
    }

    /// Visible item for `doc_id` outside `exclude`, else a revived dormant
    /// record, else a fresh one.
    fn reuse_or_create(
        &mut self,
        doc_id: &DocId,
        exclude: &BTreeSet<ItemId>,
        geometry: Geometry,
    ) -> ItemId {
        if let Some(id) = self.find_visible(doc_id, exclude) {
            return id;
        }
        match self.find_dormant(doc_id) {
            Some(id) => {
                if let Some(item) = self.items.get_mut(&id) {
                    item.hidden = false;
                    item.geometry = geometry;
                }
                id
            }
            None => self.create(doc_id, geometry),
        }
    }

    fn connect(&mut self, a: ItemId, b: ItemId) {
        if a != b {
            self.connections.insert((a.min(b), a.max(b)));
        }
    }

    fn disconnect_all(&mut self, item_id: ItemId) {
        self.connections.retain(|(a, b)| *a != item_id && *b != item_id);
    }
}

/// Vertical offsets of `count` boxes of height `height` stacked around `center_y`.
fn column(count: usize, height: f64, gap: f64, center_y: f64) -> Vec<f64> {
    #[allow(clippy::cast_precision_loss)]
    let n = count as f64;
    let total = n * height + (n - 1.0).max(0.0) * gap;
    let top = center_y - total / 2.0;
    (0..count)
        .map(|i| {
            #[allow(clippy::cast_precision_loss)]
            let i = i as f64;
            top + i * (height + gap)
        })
        .collect()
}

/// Canvas holding items and their connections in process memory.
pub struct MemoryCanvas {
    layout: LayoutSettings,
    state: Mutex<CanvasState>,
}

impl MemoryCanvas {
    /// Creates an empty canvas using the given geometry.
    #[must_use]
    pub fn new(layout: LayoutSettings) -> Self {
        Self { layout, state: Mutex::new(CanvasState::default()) }
    }

    fn state(&self) -> std::sync::MutexGuard<'_, CanvasState> {
        self.state.lock().expect("canvas state lock poisoned")
    }

    fn center_geometry(&self) -> Geometry {
        Geometry::centered_on(
            self.layout.viewport_width / 2.0,
            self.layout.viewport_height / 2.0,
            self.layout.center_width,
            self.layout.center_height,
        )
    }

    /// Places one column of friends beside `anchor` and connects them to it.
    ///
    /// Docs already shown by an item in `placed` (or visible anywhere, when
    /// `reuse_anywhere`) are connected without moving.
    #[allow(clippy::too_many_arguments)]
    fn place_column(
        &self,
        state: &mut CanvasState,
        anchor: ItemId,
        doc_ids: &[DocId],
        side: Side,
        size: (f64, f64),
        placed: &mut BTreeSet<ItemId>,
        reuse_anywhere: bool,
    ) -> Result<(), CanvasError> {
        let anchor_item = state.visible(anchor)?.clone();
        let (width, height) = size;
        let gap = self.layout.gap;

        let mut to_place: Vec<ItemId> = Vec::new();
        for doc_id in doc_ids {
            if doc_id == &anchor_item.doc_id {
                continue;
            }
            let already = placed
                .iter()
                .copied()
                .find(|id| state.items.get(id).is_some_and(|item| &item.doc_id == doc_id));
            if let Some(existing) = already {
                state.connect(anchor, existing);
                continue;
            }
            if reuse_anywhere {
                if let Some(existing) = state.find_visible(doc_id, &BTreeSet::from([anchor])) {
                    state.connect(anchor, existing);
                    placed.insert(existing);
                    continue;
                }
            }
            let id = state.reuse_or_create(doc_id, placed, Geometry::new(0.0, 0.0, width, height));
            state.connect(anchor, id);
            placed.insert(id);
            to_place.push(id);
        }

        let x = match side {
            Side::Right => anchor_item.geometry.right() + gap,
            Side::Left => anchor_item.geometry.x - gap - width,
        };
        let ys = column(to_place.len(), height, gap, anchor_item.geometry.center_y());
        for (id, y) in to_place.into_iter().zip(ys) {
            if let Some(item) = state.items.get_mut(&id) {
                item.geometry = Geometry::new(x, y, width, height);
                item.centered = false;
                item.expanded = false;
            }
        }
        Ok(())
    }
}

impl CanvasLayout for MemoryCanvas {
    fn remove_all_items(&self) {
        let mut state = self.state();
        state.items.clear();
        state.connections.clear();
        state.retired.clear();
        state.focused = None;
    }

    fn create_item(&self, doc_id: &DocId, geometry: Geometry) -> ItemId {
        self.state().create(doc_id, geometry)
    }

    fn center_item(&self, item_id: ItemId) -> Result<(), CanvasError> {
        let geometry = self.center_geometry();
        let mut state = self.state();
        state.visible(item_id)?;
        for item in state.items.values_mut() {
            item.centered = item.id == item_id;
        }
        let item = state.visible_mut(item_id)?;
        item.geometry.x = geometry.center_x() - item.geometry.width / 2.0;
        item.geometry.y = geometry.center_y() - item.geometry.height / 2.0;
        Ok(())
    }

    fn focus_item(&self, item_id: ItemId) -> Result<(), CanvasError> {
        let mut state = self.state();
        state.visible(item_id)?;
        state.focused = Some(item_id);
        Ok(())
    }

    fn change_doc(&self, item_id: ItemId, doc_id: &DocId) -> Result<(), CanvasError> {
        let mut state = self.state();
        let item = state.visible_mut(item_id)?;
        item.doc_id = doc_id.clone();
        item.expanded = false;
        Ok(())
    }

    fn expand_item(&self, item_id: ItemId, _animate: bool) -> Result<(), CanvasError> {
        self.state().visible_mut(item_id)?.expanded = true;
        Ok(())
    }

    fn hide_item(&self, item_id: ItemId) -> Result<(), CanvasError> {
        let mut state = self.state();
        let item = state.visible_mut(item_id)?;
        item.hidden = true;
        item.centered = false;
        item.expanded = false;
        state.disconnect_all(item_id);
        state.retired.insert(item_id);
        if state.focused == Some(item_id) {
            state.focused = None;
        }
        Ok(())
    }

    fn center_doc_with_friends(
        &self,
        doc_id: &DocId,
        item_id: Option<ItemId>,
        target_doc_ids: &[DocId],
        source_doc_ids: &[DocId],
        _animate: bool,
    ) -> Result<ItemId, CanvasError> {
        let center = self.center_geometry();
        let mut state = self.state();

        let focal = match item_id {
            Some(id) => {
                state.visible(id)?;
                id
            }
            None => state.reuse_or_create(doc_id, &BTreeSet::new(), center),
        };

        state.connections.clear();
        for item in state.items.values_mut() {
            item.centered = item.id == focal;
            item.expanded = false;
        }
        state.visible_mut(focal)?.geometry = center;

        let mut placed = BTreeSet::from([focal]);
        let size = (self.layout.friend_width, self.layout.friend_height);
        let targets = (target_doc_ids, Side::Right);
        let sources = (source_doc_ids, Side::Left);
        for (doc_ids, side) in [targets, sources] {
            self.place_column(&mut state, focal, doc_ids, side, size, &mut placed, false)?;
        }

        let stale: Vec<ItemId> = state
            .items
            .values()
            .filter(|item| !item.hidden && !placed.contains(&item.id))
            .map(|item| item.id)
            .collect();
        for id in stale {
            if let Some(item) = state.items.get_mut(&id) {
                item.hidden = true;
            }
            if state.focused == Some(id) {
                state.focused = None;
            }
        }
        Ok(focal)
    }

    fn show_item_friends(
        &self,
        item_id: ItemId,
        friend_doc_ids: &[DocId],
        side: Side,
        _animate: bool,
    ) -> Result<(), CanvasError> {
        let size = (self.layout.second_width, self.layout.second_height);
        let mut state = self.state();
        let mut placed = BTreeSet::from([item_id]);
        self.place_column(&mut state, item_id, friend_doc_ids, side, size, &mut placed, true)
    }

    fn get_item(&self, item_id: ItemId) -> Result<Item, CanvasError> {
        self.state().items.get(&item_id).cloned().ok_or(CanvasError::UnknownItem(item_id))
    }

    fn get_item_id_for_doc_id(&self, doc_id: &DocId) -> Result<ItemId, CanvasError> {
        self.state()
            .find_visible(doc_id, &BTreeSet::new())
            .ok_or_else(|| CanvasError::NoItemForDoc(doc_id.clone()))
    }

    fn get_connected_item_ids(&self, item_id: ItemId) -> Result<Vec<ItemId>, CanvasError> {
        let state = self.state();
        state.visible(item_id)?;
        let mut connected: Vec<ItemId> = state
            .connections
            .iter()
            .filter_map(|&(a, b)| match (a == item_id, b == item_id) {
                (true, _) => Some(b),
                (_, true) => Some(a),
                _ => None,
            })
            .collect();
        connected.sort_unstable();
        Ok(connected)
    }

    fn items(&self) -> Vec<Item> {
        self.state().items.values().cloned().collect()
    }

    fn focused_item(&self) -> Option<ItemId> {
        self.state().focused
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn canvas() -> MemoryCanvas {
        MemoryCanvas::new(LayoutSettings::default())
    }

    fn doc(id: &str) -> DocId {
        DocId::new(id)
    }

    #[test]
    fn star_places_targets_right_and_sources_left() {
        let canvas = canvas();
        let focal = canvas
            .center_doc_with_friends(&doc("a"), None, &[doc("t1"), doc("t2")], &[doc("s1")], true)
            .unwrap();

        let focal_item = canvas.get_item(focal).unwrap();
        assert!(focal_item.centered);
        let t1 = canvas.get_item(canvas.get_item_id_for_doc_id(&doc("t1")).unwrap()).unwrap();
        let s1 = canvas.get_item(canvas.get_item_id_for_doc_id(&doc("s1")).unwrap()).unwrap();
        assert!(t1.geometry.x > focal_item.geometry.right());
        assert!(s1.geometry.right() < focal_item.geometry.x);

        let mut connected = canvas.get_connected_item_ids(focal).unwrap();
        connected.sort_unstable();
        assert_eq!(connected.len(), 3);
    }

    #[test]
    fn recentering_hides_items_outside_the_new_star() {
        let canvas = canvas();
        canvas.center_doc_with_friends(&doc("a"), None, &[doc("b")], &[], false).unwrap();
        let b = canvas.get_item_id_for_doc_id(&doc("b")).unwrap();
        let a = canvas.get_item_id_for_doc_id(&doc("a")).unwrap();

        let focal =
            canvas.center_doc_with_friends(&doc("b"), Some(b), &[doc("c")], &[], false).unwrap();
        assert_eq!(focal, b);
        assert!(canvas.get_item(a).unwrap().hidden);
        let lookup = canvas.get_item_id_for_doc_id(&doc("a"));
        assert!(matches!(lookup, Err(CanvasError::NoItemForDoc(_))));
        assert!(!canvas.get_item(a).unwrap().centered);
    }

    #[test]
    fn alternating_stars_reuse_dormant_items() {
        let canvas = canvas();
        let a = canvas.center_doc_with_friends(&doc("a"), None, &[doc("b")], &[], false).unwrap();

        for _ in 0..50 {
            canvas.center_doc_with_friends(&doc("c"), None, &[doc("d")], &[], false).unwrap();
            let again =
                canvas.center_doc_with_friends(&doc("a"), None, &[doc("b")], &[], false).unwrap();
            assert_eq!(again, a);
        }

        assert_eq!(canvas.items().len(), 4);
        assert_eq!(canvas.items().iter().filter(|item| !item.hidden).count(), 2);
        assert!(canvas.get_item(a).unwrap().centered);
    }

    #[test]
    fn items_hidden_by_hide_item_are_never_revived() {
        let canvas = canvas();
        canvas.center_doc_with_friends(&doc("a"), None, &[doc("b")], &[], false).unwrap();
        let old_b = canvas.get_item_id_for_doc_id(&doc("b")).unwrap();
        canvas.hide_item(old_b).unwrap();

        canvas.center_doc_with_friends(&doc("a"), None, &[doc("b")], &[], false).unwrap();

        let new_b = canvas.get_item_id_for_doc_id(&doc("b")).unwrap();
        assert_ne!(new_b, old_b);
        assert_eq!(canvas.focus_item(old_b), Err(CanvasError::HiddenItem(old_b)));
    }

    #[test]
    fn show_item_friends_reuses_visible_items_without_moving_them() {
        let canvas = canvas();
        canvas.center_doc_with_friends(&doc("a"), None, &[doc("b"), doc("c")], &[], false).unwrap();
        let b = canvas.get_item_id_for_doc_id(&doc("b")).unwrap();
        let c = canvas.get_item_id_for_doc_id(&doc("c")).unwrap();
        let c_before = canvas.get_item(c).unwrap().geometry;

        canvas.show_item_friends(b, &[doc("c"), doc("d")], Side::Right, true).unwrap();

        assert_eq!(canvas.get_item(c).unwrap().geometry, c_before);
        assert!(canvas.get_connected_item_ids(b).unwrap().contains(&c));
        let d = canvas.get_item(canvas.get_item_id_for_doc_id(&doc("d")).unwrap()).unwrap();
        assert!(d.geometry.x > canvas.get_item(b).unwrap().geometry.right());
    }

    #[test]
    fn hidden_items_are_rejected_by_layout_calls() {
        let canvas = canvas();
        let item = canvas.create_item(&doc("a"), Geometry::new(0.0, 0.0, 10.0, 10.0));
        canvas.focus_item(item).unwrap();
        canvas.hide_item(item).unwrap();

        assert_eq!(canvas.focused_item(), None);
        assert_eq!(canvas.focus_item(item), Err(CanvasError::HiddenItem(item)));
        assert_eq!(canvas.hide_item(item), Err(CanvasError::HiddenItem(item)));
        assert!(canvas.get_item(item).unwrap().hidden);
    }

    #[test]
    fn unknown_items_fail_loudly() {
        let canvas = canvas();
        assert_eq!(canvas.get_item(ItemId(42)), Err(CanvasError::UnknownItem(ItemId(42))));
        assert_eq!(
            canvas.get_connected_item_ids(ItemId(42)),
            Err(CanvasError::UnknownItem(ItemId(42)))
        );
    }

    #[test]
    fn column_is_centered_on_anchor() {
        let ys = column(3, 10.0, 5.0, 100.0);
        assert_eq!(ys, vec![80.0, 95.0, 110.0]);
        assert!(column(0, 10.0, 5.0, 100.0).is_empty());
    }
}
