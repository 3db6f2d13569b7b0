//! Gesture handlers: init, navigate, drop, tap and drag-out.

use tracing::{debug, info, warn};

use super::{DragDirection, DropPayload, NavigationTarget, Navigator, StarFocus};
use crate::error::NavResult;
use crate::ports::{DocId, Geometry, ItemId};

/// Fixed id of the welcome note, overwritten on every init.
pub const WELCOME_DOC_ID: &str = "welcomeMessage";

const WELCOME_MESSAGE: &str = "Hi! This is a read/write web browser. \
    It lets you <i>create</i> notes and links, to organise the web your way. \
    It is far from finished, but click this note to browse more info, \
    or enter a URL or note in the bar below.";

const RWWEB: &str = "https://rwweb.org";
const HISTORY: [&str; 3] = [
    "https://www.w3.org/People/Berners-Lee/WorldWideWeb.html",
    "https://www.w3.org/History/1989/proposal.html",
    "http://www.theatlantic.com/magazine/archive/1945/07/as-we-may-think/303881/",
];
const VIDEO: &str = "https://www.youtube.com/embed/vKzYmDUydTw";
const IANNOTATE: &str = "http://iannotate.org";

impl Navigator<'_> {
    /// Clears the canvas and shows a centered, focused empty item.
    ///
    /// With `seed_welcome` set, also stores the welcome note and the demo
    /// pages with their links, and shows the welcome note.
    ///
    /// # Errors
    ///
    /// Fails if the freshly created empty item cannot be centered or focused.
    pub fn init_canvas(&self) -> NavResult<ItemId> {
        info!(seed_welcome = self.settings.seed_welcome, "initializing canvas");
        self.ctx.canvas.remove_all_items();

        if self.settings.seed_welcome {
            self.seed_welcome();
        }

        let empty = self
            .ctx
            .canvas
            .create_item(&DocId::empty_item(), Geometry::new(100.0, 100.0, 400.0, 50.0));
        self.ctx.canvas.center_item(empty)?;
        self.ctx.canvas.focus_item(empty)?;
        Ok(empty)
    }

    fn seed_welcome(&self) {
        let graph = &self.ctx.graph;
        let welcome = graph.add_note(WELCOME_MESSAGE, Some(DocId::new(WELCOME_DOC_ID)));
        self.ctx.canvas.create_item(&welcome, Geometry::new(50.0, 50.0, 500.0, 150.0));

        let rwweb = graph.find_or_add_url(RWWEB);
        let history: Vec<DocId> = HISTORY.iter().map(|url| graph.find_or_add_url(url)).collect();
        let video = graph.find_or_add_url(VIDEO);
        let iannotate = graph.find_or_add_url(IANNOTATE);

        graph.find_or_add_link(&welcome, &rwweb);
        for page in &history {
            graph.find_or_add_link(&rwweb, page);
        }
        graph.find_or_add_link(&welcome, &video);
        graph.find_or_add_link(&video, &iannotate);
        debug!(docs = history.len() + 4, "seeded welcome content");
    }

    /// Shows `target` in `item_id` and re-centers the star on it.
    ///
    /// Runs, in order: resolve, swap the item's document, link it to its
    /// visible neighbours, reveal the star, refocus. Link inference must see
    /// the layout before the star moves anything. Blank input does nothing
    /// and returns `None`.
    ///
    /// # Errors
    ///
    /// Fails if `item_id` is not a visible item.
    pub fn navigate_to(
        &self,
        item_id: ItemId,
        target: &NavigationTarget,
    ) -> NavResult<Option<DocId>> {
        let doc_id = match target {
            NavigationTarget::Doc(doc_id) => doc_id.clone(),
            NavigationTarget::Input(user_input) => match self.find_or_create_doc(user_input) {
                Some(doc_id) => doc_id,
                None => return Ok(None),
            },
        };
        info!(item = %item_id, doc = %doc_id, "navigating");

        self.ctx.canvas.change_doc(item_id, &doc_id)?;
        self.link_to_connected_items(item_id, &doc_id)?;
        self.draw_star(StarFocus::Item(item_id))?;
        self.ctx.canvas.focus_item(item_id)?;
        Ok(Some(doc_id))
    }

    /// Stores a dropped payload and shows it in a new item centered on `(x, y)`.
    ///
    /// The new item is not connected to anything. An empty payload does
    /// nothing and returns `None`.
    pub fn handle_drop(&self, x: f64, y: f64, payload: &DropPayload) -> Option<ItemId> {
        let doc_id = self.resolve_drop(payload)?;
        let geometry =
            Geometry::centered_on(x, y, self.settings.drop_width, self.settings.drop_height);
        let item_id = self.ctx.canvas.create_item(&doc_id, geometry);
        info!(item = %item_id, doc = %doc_id, x, y, "dropped document");
        Some(item_id)
    }

    /// Focuses an item, then reveals its star or expands it.
    ///
    /// The empty item only takes focus. A centered web page expands; a
    /// centered note stays as it is. Any other item becomes the new center.
    ///
    /// # Errors
    ///
    /// Fails if `item_id` is not a visible item.
    pub fn handle_tap(&self, item_id: ItemId) -> NavResult<()> {
        self.ctx.canvas.focus_item(item_id)?;

        let item = self.ctx.canvas.get_item(item_id)?;
        if item.is_empty_item() {
            debug!(item = %item_id, "tapped empty item");
            return Ok(());
        }

        if item.centered {
            match self.ctx.graph.get_doc(&item.doc_id) {
                Some(doc) if doc.url().is_some() => {
                    info!(item = %item_id, doc = %item.doc_id, "expanding page");
                    self.ctx.canvas.expand_item(item_id, true)?;
                }
                Some(_) => debug!(item = %item_id, "tapped centered note"),
                None => {
                    warn!(item = %item_id, doc = %item.doc_id, "centered document is missing");
                }
            }
        } else {
            info!(item = %item_id, doc = %item.doc_id, "revealing star");
            self.draw_star(StarFocus::Item(item_id))?;
        }
        Ok(())
    }

    /// Removes an item dragged off the canvas edge.
    ///
    /// Deletes the links the item visibly shows, hides it, then deletes its
    /// document if no link anywhere in the graph still touches it. The empty
    /// item's document is never deleted. Both directions behave the same.
    ///
    /// # Errors
    ///
    /// Fails if `item_id` is not a visible item.
    pub fn handle_dragged_out(&self, item_id: ItemId, direction: DragDirection) -> NavResult<()> {
        let item = self.ctx.canvas.get_item(item_id)?;
        let doc_id = item.doc_id;
        info!(item = %item_id, doc = %doc_id, ?direction, "dragged out");

        for connected_id in self.ctx.canvas.get_connected_item_ids(item_id)? {
            let connected_doc = self.ctx.canvas.get_item(connected_id)?.doc_id;
            self.ctx.graph.delete_link(&connected_doc, &doc_id);
        }

        self.ctx.canvas.hide_item(item_id)?;

        if !doc_id.is_empty_item() && !self.ctx.graph.has_friends(&doc_id) {
            debug!(doc = %doc_id, "deleting unconnected document");
            self.ctx.graph.delete_doc(&doc_id);
        }
        Ok(())
    }
}
