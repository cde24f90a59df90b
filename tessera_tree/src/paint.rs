// Copyright 2025 the Tessera Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Paint traversal.
//!
//! Painting itself happens in the `Paint` and `AfterPaint` hooks; this module
//! only decides the order in which they run.

use crate::callbacks::HandlerSlot;
use crate::tree::ContainerTree;
use crate::types::NodeId;
use crate::util::overlaps;

impl ContainerTree {
    /// Paint the whole tree from its root. Does nothing without a root.
    pub fn paint_root(&mut self) {
        let _span = tracing::trace_span!("paint_root").entered();
        if let Some(root) = self.root() {
            self.paint_outline(root);
        }
    }

    /// Paint `id` and, unless it opts out, its subtree.
    ///
    /// Pre-order: `Paint` runs before the children and `AfterPaint` after them.
    /// Containers that do not exist are skipped with their subtrees. Without
    /// [`ContainerFlags::PAINT_CHILDREN`](crate::ContainerFlags::PAINT_CHILDREN)
    /// only `Paint` runs.
    ///
    /// The content children of a scroll composite are painted in ascending
    /// `z_index` order (ties keep insertion order), and only those overlapping
    /// the composite's bounds. Its right and bottom companions follow.
    pub fn paint_outline(&mut self, id: NodeId) {
        if !self.get(id).is_some_and(|c| c.exists()) {
            return;
        }
        self.invoke(id, HandlerSlot::Paint);
        if !self.get(id).is_some_and(|c| c.paints_children()) {
            return;
        }

        let mut descent = self.descent(id);
        if let Some(clip) = descent.paint_clip {
            descent
                .primary
                .retain(|child| self.get(*child).is_some_and(|c| overlaps(c.real_bounds, clip)));
            descent
                .primary
                .sort_by_key(|child| self.get(*child).map_or(0, |c| c.z_index));
        }
        for &child in descent.primary.iter().chain(&descent.companions) {
            self.paint_outline(child);
        }

        self.invoke(id, HandlerSlot::AfterPaint);
        if let Some(c) = self.get_mut(id) {
            c.first_paint = false;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Container, ContainerFlags, Side};
    use crate::Callbacks;
    use alloc::rc::Rc;
    use alloc::string::String;
    use alloc::vec;
    use alloc::vec::Vec;
    use core::cell::RefCell;
    use kurbo::Rect;

    type Log = Rc<RefCell<Vec<String>>>;

    fn recorded(log: &Log, name: &str, bounds: Rect) -> Container {
        let before = (log.clone(), String::from(name));
        let after = (log.clone(), alloc::format!("/{name}"));
        Container::with_bounds(bounds).labeled(name).with_callbacks(
            Callbacks::default()
                .with(HandlerSlot::Paint, move |_, _| before.0.borrow_mut().push(before.1.clone()))
                .with(HandlerSlot::AfterPaint, move |_, _| {
                    after.0.borrow_mut().push(after.1.clone());
                }),
        )
    }

    #[test]
    fn pre_order_with_after_paint() {
        let log: Log = Rc::default();
        let mut tree = ContainerTree::new();
        let r = Rect::new(0.0, 0.0, 10.0, 10.0);
        let root = tree.insert(None, recorded(&log, "root", r)).unwrap();
        let a = tree.insert(Some(root), recorded(&log, "a", r)).unwrap();
        tree.insert(Some(a), recorded(&log, "a1", r)).unwrap();
        tree.insert(Some(root), recorded(&log, "b", r)).unwrap();

        tree.paint_root();
        assert_eq!(
            *log.borrow(),
            vec!["root", "a", "a1", "/a1", "/a", "b", "/b", "/root"]
        );
        assert!(!tree.get(root).unwrap().first_paint, "first paint is one-shot");
    }

    #[test]
    fn opting_out_of_children_skips_after_paint() {
        let log: Log = Rc::default();
        let mut tree = ContainerTree::new();
        let r = Rect::new(0.0, 0.0, 10.0, 10.0);
        let mut leaf_only = recorded(&log, "root", r);
        leaf_only.flags.remove(ContainerFlags::PAINT_CHILDREN);
        let root = tree.insert(None, leaf_only).unwrap();
        tree.insert(Some(root), recorded(&log, "child", r)).unwrap();
        let hidden = tree.insert(None, recorded(&log, "hidden", r)).unwrap();
        tree.get_mut(hidden).unwrap().flags.remove(ContainerFlags::EXISTS);

        tree.paint_root();
        tree.paint_outline(hidden);
        assert_eq!(*log.borrow(), vec!["root"]);
        assert!(tree.get(root).unwrap().first_paint);
    }

    #[test]
    fn scroll_content_sorted_and_culled() {
        let log: Log = Rc::default();
        let mut tree = ContainerTree::new();
        let (scroll, _) = tree
            .insert_scroll(None, recorded(&log, "scroll", Rect::new(0.0, 0.0, 100.0, 100.0)))
            .unwrap();
        let mut high = recorded(&log, "high", Rect::new(0.0, 0.0, 10.0, 10.0));
        high.z_index = 5;
        tree.insert(Some(scroll), high).unwrap();
        tree.insert(Some(scroll), recorded(&log, "low", Rect::new(0.0, 10.0, 10.0, 20.0)))
            .unwrap();
        tree.insert(Some(scroll), recorded(&log, "tie", Rect::new(0.0, 20.0, 10.0, 30.0)))
            .unwrap();
        tree.insert(
            Some(scroll),
            recorded(&log, "offscreen", Rect::new(0.0, 300.0, 10.0, 310.0)),
        )
        .unwrap();
        tree.set_companion(
            scroll,
            Side::Bottom,
            Some(recorded(&log, "bottom", Rect::new(0.0, 90.0, 100.0, 100.0))),
        )
        .unwrap();
        tree.set_companion(
            scroll,
            Side::Right,
            Some(recorded(&log, "right", Rect::new(90.0, 0.0, 100.0, 100.0))),
        )
        .unwrap();

        tree.paint_root();
        assert_eq!(
            *log.borrow(),
            vec![
                "scroll", "low", "/low", "tie", "/tie", "high", "/high", "right", "/right",
                "bottom", "/bottom", "/scroll"
            ]
        );
    }

    #[test]
    fn paint_hook_may_remove_a_sibling() {
        let mut tree = ContainerTree::new();
        let r = Rect::new(0.0, 0.0, 10.0, 10.0);
        let root = tree.insert(None, Container::with_bounds(r)).unwrap();
        let victim = tree.insert(Some(root), Container::with_bounds(r)).unwrap();
        tree.get_mut(root).unwrap().callbacks.set(HandlerSlot::Paint, move |tree, _| {
            tree.remove(victim);
        });

        tree.paint_root();
        assert!(!tree.is_alive(victim));
        assert!(tree.children_of(root).is_empty());
    }
}
