//! Two-level star reveal around a focal document.

use tracing::debug;

use super::{Navigator, StarFocus};
use crate::error::NavResult;
use crate::ports::{DocId, ItemId, Side};

impl Navigator<'_> {
    /// Centers a document and reveals its neighbourhood two levels deep.
    ///
    /// Targets go right and sources go left; the empty item is always added
    /// as one more target so the user has a slot to navigate from. Each
    /// first-level friend then shows its own friends on the same side.
    /// Returns the focal item.
    ///
    /// # Errors
    ///
    /// Fails if the focal item or a revealed friend has no visible item.
    pub fn draw_star(&self, focus: StarFocus<'_>) -> NavResult<ItemId> {
        let (doc_id, item_id) = match focus {
            StarFocus::Doc(doc_id) => (doc_id.clone(), None),
            StarFocus::Item(item_id) => (self.ctx.canvas.get_item(item_id)?.doc_id, Some(item_id)),
        };

        let friends = self.ctx.graph.get_friends(&doc_id);
        let mut target_doc_ids = friends.target_doc_ids;
        target_doc_ids.push(DocId::empty_item());
        let source_doc_ids = friends.source_doc_ids;

        let focal = self.ctx.canvas.center_doc_with_friends(
            &doc_id,
            item_id,
            &target_doc_ids,
            &source_doc_ids,
            true,
        )?;
        debug!(
            doc = %doc_id,
            item = %focal,
            targets = target_doc_ids.len(),
            sources = source_doc_ids.len(),
            "centered star"
        );

        for target in &target_doc_ids {
            let friend_item = self.ctx.canvas.get_item_id_for_doc_id(target)?;
            let second = self.ctx.graph.get_friends(target).target_doc_ids;
            self.ctx.canvas.show_item_friends(friend_item, &second, Side::Right, true)?;
        }
        for source in &source_doc_ids {
            let friend_item = self.ctx.canvas.get_item_id_for_doc_id(source)?;
            let second = self.ctx.graph.get_friends(source).source_doc_ids;
            self.ctx.canvas.show_item_friends(friend_item, &second, Side::Left, true)?;
        }

        Ok(focal)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Settings;
    use crate::context::ServiceContext;

    fn visible_docs(ctx: &ServiceContext) -> Vec<DocId> {
        ctx.canvas.items().into_iter().filter(|i| !i.hidden).map(|i| i.doc_id).collect()
    }

    #[test]
    fn lonely_doc_is_centered_with_the_empty_item() {
        let settings = Settings::default();
        let ctx = ServiceContext::deterministic(&settings);
        let nav = Navigator::new(&ctx, &settings.navigator);
        let doc = ctx.graph.find_or_add_note("alone");

        let focal = nav.draw_star(StarFocus::Doc(&doc)).unwrap();

        let item = ctx.canvas.get_item(focal).unwrap();
        assert!(item.centered);
        assert_eq!(item.doc_id, doc);
        let connected = ctx.canvas.get_connected_item_ids(focal).unwrap();
        assert_eq!(connected.len(), 1);
        assert!(ctx.canvas.get_item(connected[0]).unwrap().is_empty_item());
    }

    #[test]
    fn right_side_holds_targets_plus_empty_item() {
        let settings = Settings::default();
        let ctx = ServiceContext::deterministic(&settings);
        let nav = Navigator::new(&ctx, &settings.navigator);
        let focal_doc = ctx.graph.find_or_add_note("focal");
        let t1 = ctx.graph.find_or_add_note("t1");
        let t2 = ctx.graph.find_or_add_note("t2");
        let s1 = ctx.graph.find_or_add_note("s1");
        ctx.graph.find_or_add_link(&focal_doc, &t1);
        ctx.graph.find_or_add_link(&focal_doc, &t2);
        ctx.graph.find_or_add_link(&s1, &focal_doc);

        let focal = nav.draw_star(StarFocus::Doc(&focal_doc)).unwrap();
        let focal_geometry = ctx.canvas.get_item(focal).unwrap().geometry;

        let (mut right, mut left) = (0, 0);
        for id in ctx.canvas.get_connected_item_ids(focal).unwrap() {
            let item = ctx.canvas.get_item(id).unwrap();
            if item.geometry.x > focal_geometry.right() {
                right += 1;
            } else if item.geometry.right() < focal_geometry.x {
                left += 1;
            }
        }
        assert_eq!(right, 3);
        assert_eq!(left, 1);
    }

    #[test]
    fn second_level_friends_are_revealed_on_their_side() {
        let settings = Settings::default();
        let ctx = ServiceContext::deterministic(&settings);
        let nav = Navigator::new(&ctx, &settings.navigator);
        let a = ctx.graph.find_or_add_note("a");
        let b = ctx.graph.find_or_add_note("b");
        let c = ctx.graph.find_or_add_note("c");
        let z = ctx.graph.find_or_add_note("z");
        let y = ctx.graph.find_or_add_note("y");
        let far = ctx.graph.find_or_add_note("far");
        ctx.graph.find_or_add_link(&a, &b);
        ctx.graph.find_or_add_link(&b, &c);
        ctx.graph.find_or_add_link(&c, &far);
        ctx.graph.find_or_add_link(&z, &a);
        ctx.graph.find_or_add_link(&y, &z);

        nav.draw_star(StarFocus::Doc(&a)).unwrap();

        let visible = visible_docs(&ctx);
        for doc in [&a, &b, &c, &z, &y] {
            assert!(visible.contains(doc), "{doc} should be visible");
        }
        assert!(!visible.contains(&far), "depth is capped at two");

        let b_item = ctx.canvas.get_item(ctx.canvas.get_item_id_for_doc_id(&b).unwrap()).unwrap();
        let c_item = ctx.canvas.get_item(ctx.canvas.get_item_id_for_doc_id(&c).unwrap()).unwrap();
        let z_item = ctx.canvas.get_item(ctx.canvas.get_item_id_for_doc_id(&z).unwrap()).unwrap();
        let y_item = ctx.canvas.get_item(ctx.canvas.get_item_id_for_doc_id(&y).unwrap()).unwrap();
        assert!(c_item.geometry.x > b_item.geometry.right());
        assert!(y_item.geometry.right() < z_item.geometry.x);
    }

    #[test]
    fn star_by_item_reuses_that_item() {
        let settings = Settings::default();
        let ctx = ServiceContext::deterministic(&settings);
        let nav = Navigator::new(&ctx, &settings.navigator);
        let doc = ctx.graph.find_or_add_note("n");
        let item = ctx.canvas.create_item(&doc, crate::ports::Geometry::new(0.0, 0.0, 10.0, 10.0));

        assert_eq!(nav.draw_star(StarFocus::Item(item)).unwrap(), item);
        assert!(ctx.canvas.get_item(item).unwrap().centered);
    }

    #[test]
    fn star_on_unknown_item_fails() {
        let settings = Settings::default();
        let ctx = ServiceContext::deterministic(&settings);
        let nav = Navigator::new(&ctx, &settings.navigator);
        assert!(nav.draw_star(StarFocus::Item(ItemId(5))).is_err());
    }
}
