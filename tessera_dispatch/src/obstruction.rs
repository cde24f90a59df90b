// Copyright 2025 the Tessera Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use tessera_tree::{ContainerFlags, ContainerTree, NodeId};

/// Whether `pierced[index]` may receive an event despite what lies on top of it.
///
/// The topmost hit (index `0`) always may. Anything below it needs
/// [`RECEIVE_EVENTS_EVEN_IF_OBSTRUCTED`](ContainerFlags::RECEIVE_EVENTS_EVEN_IF_OBSTRUCTED),
/// or [`RECEIVE_EVENTS_EVEN_IF_OBSTRUCTED_BY_ONE`](ContainerFlags::RECEIVE_EVENTS_EVEN_IF_OBSTRUCTED_BY_ONE)
/// together with being the direct parent of the topmost hit.
///
/// `top_parent` is the parent of `pierced[0]` as it was before any hook ran
/// (see [`top_parent`]), so a topmost hit that removes itself does not
/// change what its parent receives.
pub(crate) fn may_receive(
    tree: &ContainerTree,
    pierced: &[NodeId],
    index: usize,
    top_parent: Option<NodeId>,
) -> bool {
    if index == 0 {
        return true;
    }
    let Some(container) = tree.get(pierced[index]) else {
        return false;
    };
    if !container.receives_obstructed() {
        return false;
    }
    if container
        .flags
        .contains(ContainerFlags::RECEIVE_EVENTS_EVEN_IF_OBSTRUCTED)
    {
        return true;
    }
    container
        .flags
        .contains(ContainerFlags::RECEIVE_EVENTS_EVEN_IF_OBSTRUCTED_BY_ONE)
        && top_parent == Some(pierced[index])
}

/// Parent of the topmost hit, read once before a dispatch pass runs hooks.
pub(crate) fn top_parent(tree: &ContainerTree, pierced: &[NodeId]) -> Option<NodeId> {
    pierced.first().and_then(|&top| tree.parent_of(top))
}

#[cfg(test)]
mod tests {
    use super::*;
    use kurbo::{Point, Rect};
    use tessera_tree::Container;

    fn stack(flags: ContainerFlags) -> (ContainerTree, [NodeId; 3]) {
        let mut tree = ContainerTree::new();
        let r = Rect::new(0.0, 0.0, 10.0, 10.0);
        let root = tree.insert(None, Container::with_bounds(r).with_flags(flags)).unwrap();
        let mid = tree
            .insert(Some(root), Container::with_bounds(r).with_flags(flags))
            .unwrap();
        let top = tree.insert(Some(mid), Container::with_bounds(r)).unwrap();
        (tree, [top, mid, root])
    }

    #[test]
    fn topmost_always_receives() {
        let (tree, ids) = stack(ContainerFlags::empty());
        let pierced = tree.pierced_containers(Point::new(1.0, 1.0));
        assert_eq!(pierced, ids);
        let parent = top_parent(&tree, &pierced);
        assert!(may_receive(&tree, &pierced, 0, parent));
        assert!(!may_receive(&tree, &pierced, 1, parent), "no flags, obstructed");
        assert!(!may_receive(&tree, &pierced, 2, parent), "no flags, obstructed");
    }

    #[test]
    fn even_if_obstructed_reaches_any_depth() {
        let (tree, _) = stack(ContainerFlags::RECEIVE_EVENTS_EVEN_IF_OBSTRUCTED);
        let pierced = tree.pierced_containers(Point::new(1.0, 1.0));
        let parent = top_parent(&tree, &pierced);
        assert!(may_receive(&tree, &pierced, 1, parent));
        assert!(may_receive(&tree, &pierced, 2, parent));
    }

    #[test]
    fn by_one_reaches_only_the_direct_parent() {
        let (tree, _) = stack(ContainerFlags::RECEIVE_EVENTS_EVEN_IF_OBSTRUCTED_BY_ONE);
        let pierced = tree.pierced_containers(Point::new(1.0, 1.0));
        let parent = top_parent(&tree, &pierced);
        assert_eq!(parent, Some(pierced[1]));
        assert!(may_receive(&tree, &pierced, 1, parent), "parent of the topmost hit");
        assert!(!may_receive(&tree, &pierced, 2, parent), "grandparent is obstructed by two");
    }

    #[test]
    fn by_one_survives_removal_of_the_topmost_hit() {
        let (mut tree, [top, mid, _]) = stack(ContainerFlags::RECEIVE_EVENTS_EVEN_IF_OBSTRUCTED_BY_ONE);
        let pierced = tree.pierced_containers(Point::new(1.0, 1.0));
        let parent = top_parent(&tree, &pierced);
        tree.remove(top);
        assert_eq!(parent, Some(mid));
        assert!(may_receive(&tree, &pierced, 1, parent));
    }
}
