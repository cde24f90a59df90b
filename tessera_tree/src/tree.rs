// Copyright 2025 the Tessera Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Core tree implementation: storage, structure, and hook invocation.

use alloc::vec::Vec;
use kurbo::{Rect, Vec2};
use smallvec::SmallVec;
use tessera_event_state::pointer::PointerState;

use crate::callbacks::HandlerSlot;
use crate::error::TreeError;
use crate::types::{Container, ContainerFlags, ContainerKind, NodeId, ScrollParts, Side};
use crate::util::shrink_for_companions;

/// Retained tree of containers.
///
/// Containers live in generational slots and are addressed by [`NodeId`].
/// The tree also carries the pointer record shared by its root, and remembers
/// which container is the root that dispatch starts from.
///
/// Removing a container removes its subtree, except children flagged
/// [`ContainerFlags::KEEP_ON_PARENT_REMOVE`], which are detached instead.
///
/// ## Example
///
/// ```rust
/// use kurbo::{Point, Rect};
/// use tessera_tree::{Container, ContainerTree};
///
/// let mut tree = ContainerTree::new();
/// let root = tree
///     .insert(None, Container::with_bounds(Rect::new(0.0, 0.0, 100.0, 100.0)))
///     .unwrap();
/// let child = tree
///     .insert(Some(root), Container::with_bounds(Rect::new(10.0, 10.0, 50.0, 50.0)))
///     .unwrap();
///
/// assert_eq!(tree.root(), Some(root));
/// assert_eq!(tree.pierced_containers(Point::new(20.0, 20.0)), vec![child, root]);
///
/// tree.remove(child);
/// assert!(!tree.is_alive(child));
/// ```
pub struct ContainerTree {
    /// slots
    nodes: Vec<Option<Node>>,
    /// last generation per slot (persists across frees)
    generations: Vec<u32>,
    free_list: Vec<usize>,
    root: Option<NodeId>,
    pointer: PointerState,
}

impl core::fmt::Debug for ContainerTree {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let total = self.nodes.len();
        let alive = self.nodes.iter().filter(|n| n.is_some()).count();
        let free = self.free_list.len();
        f.debug_struct("ContainerTree")
            .field("nodes_total", &total)
            .field("nodes_alive", &alive)
            .field("free_list", &free)
            .field("root", &self.root)
            .field("pointer", &self.pointer)
            .finish_non_exhaustive()
    }
}

impl Default for ContainerTree {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug)]
struct Node {
    generation: u32,
    parent: Option<NodeId>,
    /// Owned children. For a scroll composite these are its content and companions.
    children: Vec<NodeId>,
    kind: ContainerKind,
    container: Container,
}

impl Node {
    fn new(generation: u32, kind: ContainerKind, container: Container) -> Self {
        Self {
            generation,
            parent: None,
            children: Vec::new(),
            kind,
            container,
        }
    }
}

/// How a walk descends below one container.
///
/// Every tree walk (hit testing, concern collection, active propagation, and
/// painting) asks for this instead of matching on [`ContainerKind`] itself.
#[derive(Clone, Debug, Default)]
pub struct Descent {
    /// Logical children: plain children, or a scroll composite's content children.
    pub primary: SmallVec<[NodeId; 8]>,
    /// Companion panes that are present, right before bottom.
    pub companions: SmallVec<[NodeId; 2]>,
    /// The scroll composite's content container.
    pub content: Option<NodeId>,
    /// Rectangle the pointer must be inside before hit testing descends into
    /// `primary`. For a scroll composite this is its bounds minus the existing
    /// companions; for a scroll pane, its own bounds.
    pub hit_gate: Option<Rect>,
    /// Paint culling rectangle for `primary` (a scroll composite's bounds).
    /// When set, `primary` is also painted in ascending `z_index` order.
    pub paint_clip: Option<Rect>,
}

impl ContainerTree {
    /// Create an empty tree.
    pub fn new() -> Self {
        Self {
            nodes: Vec::new(),
            generations: Vec::new(),
            free_list: Vec::new(),
            root: None,
            pointer: PointerState::default(),
        }
    }

    /// Insert a simple container under `parent` (or parentless if `None`).
    ///
    /// Inserting under a scroll composite inserts under its content container.
    /// The first parentless container becomes the root if none is set.
    pub fn insert(&mut self, parent: Option<NodeId>, container: Container) -> Result<NodeId, TreeError> {
        self.insert_kind(parent, ContainerKind::Simple, container)
    }

    /// Insert a scroll pane: a simple container that only hit tests its
    /// children while the point is inside its own bounds.
    pub fn insert_scroll_pane(
        &mut self,
        parent: Option<NodeId>,
        container: Container,
    ) -> Result<NodeId, TreeError> {
        self.insert_kind(parent, ContainerKind::ScrollPane, container)
    }

    /// Insert a scroll composite and its content container.
    ///
    /// The content starts with the composite's bounds and default flags.
    /// Companions are attached with [`set_companion`](Self::set_companion).
    pub fn insert_scroll(
        &mut self,
        parent: Option<NodeId>,
        container: Container,
    ) -> Result<(NodeId, ScrollParts), TreeError> {
        let bounds = container.real_bounds;
        let scroll = self.insert_kind(parent, ContainerKind::Simple, container)?;
        let content = self.alloc(ContainerKind::Simple, Container::with_bounds(bounds));
        self.link_parent(content, scroll);
        let parts = ScrollParts {
            content,
            right: None,
            bottom: None,
        };
        if let Some(node) = self.node_opt_mut(scroll) {
            node.kind = ContainerKind::Scroll(parts);
        }
        tracing::trace!(?scroll, ?content, "inserted scroll composite");
        Ok((scroll, parts))
    }

    /// Attach, replace, or (with `None`) remove the companion on `side` of a
    /// scroll composite. A replaced companion is removed with its subtree.
    pub fn set_companion(
        &mut self,
        scroll: NodeId,
        side: Side,
        container: Option<Container>,
    ) -> Result<Option<NodeId>, TreeError> {
        let Some(mut parts) = self.scroll_parts(scroll) else {
            return Err(if self.is_alive(scroll) {
                TreeError::NotScroll(scroll)
            } else {
                TreeError::StaleNode(scroll)
            });
        };
        if let Some(old) = parts.companion(side) {
            self.remove(old);
            // `remove` cleared the slot in the stored parts; refresh our copy.
            parts = self.scroll_parts(scroll).ok_or(TreeError::StaleNode(scroll))?;
        }
        let new = container.map(|c| {
            let id = self.alloc(ContainerKind::Simple, c);
            self.link_parent(id, scroll);
            id
        });
        *parts.companion_mut(side) = new;
        if let Some(node) = self.node_opt_mut(scroll) {
            node.kind = ContainerKind::Scroll(parts);
        }
        Ok(new)
    }

    /// Remove a container and its subtree.
    ///
    /// Children flagged [`ContainerFlags::KEEP_ON_PARENT_REMOVE`] are detached
    /// and survive as parentless containers. Removing a stale id does nothing.
    pub fn remove(&mut self, id: NodeId) {
        if !self.is_alive(id) {
            return;
        }
        if let Some(parent) = self.parent_of(id) {
            self.unlink_parent(id, parent);
        }
        self.remove_subtree(id);
    }

    fn remove_subtree(&mut self, id: NodeId) {
        if !self.is_alive(id) {
            return;
        }
        let Some(node) = self.nodes[id.idx()].take() else {
            return;
        };
        // A slot whose generation is exhausted is retired, so no stale id can alias it.
        if self.generations[id.idx()] < u32::MAX {
            self.free_list.push(id.idx());
        }
        if self.root == Some(id) {
            self.root = None;
        }
        tracing::trace!(?id, label = ?node.container.label, "removed container");
        for child in node.children {
            let keep = self
                .get(child)
                .is_some_and(|c| c.flags.contains(ContainerFlags::KEEP_ON_PARENT_REMOVE));
            if keep {
                if let Some(n) = self.node_opt_mut(child) {
                    n.parent = None;
                }
            } else {
                self.remove_subtree(child);
            }
        }
    }

    /// Returns true if `id` refers to a live container.
    ///
    /// A `NodeId` is considered live if its slot exists and its generation matches
    /// the current generation stored in that slot.
    /// See [`NodeId`] docs for the generational semantics.
    pub fn is_alive(&self, id: NodeId) -> bool {
        self.node_opt(id).is_some()
    }

    /// The container record for a live id.
    pub fn get(&self, id: NodeId) -> Option<&Container> {
        self.node_opt(id).map(|n| &n.container)
    }

    /// The mutable container record for a live id.
    pub fn get_mut(&mut self, id: NodeId) -> Option<&mut Container> {
        self.node_opt_mut(id).map(|n| &mut n.container)
    }

    /// The root that dispatch and painting start from.
    pub fn root(&self) -> Option<NodeId> {
        self.root.filter(|&r| self.is_alive(r))
    }

    /// Make `root` the root. Stale ids are rejected.
    pub fn set_root(&mut self, root: NodeId) -> Result<(), TreeError> {
        if !self.is_alive(root) {
            return Err(TreeError::StaleNode(root));
        }
        self.root = Some(root);
        Ok(())
    }

    /// Pointer record shared by the root.
    pub fn pointer(&self) -> &PointerState {
        &self.pointer
    }

    /// Mutable pointer record.
    pub fn pointer_mut(&mut self) -> &mut PointerState {
        &mut self.pointer
    }

    /// Returns the parent of a container if live, or `None` for parentless or stale ids.
    ///
    /// The parent of a scroll composite's content child is the content container.
    pub fn parent_of(&self, id: NodeId) -> Option<NodeId> {
        self.node_opt(id).and_then(|n| n.parent)
    }

    /// Owned children of a container, or an empty slice if the id is stale.
    ///
    /// For a scroll composite these are its content and companions; use
    /// [`descent`](Self::descent) for the logical children.
    pub fn children_of(&self, id: NodeId) -> &[NodeId] {
        self.node_opt(id).map(|n| n.children.as_slice()).unwrap_or(&[])
    }

    /// Structural kind of a live container.
    pub fn kind(&self, id: NodeId) -> Option<ContainerKind> {
        self.node_opt(id).map(|n| n.kind)
    }

    /// Parts of a live scroll composite.
    pub fn scroll_parts(&self, id: NodeId) -> Option<ScrollParts> {
        match self.kind(id)? {
            ContainerKind::Scroll(parts) => Some(parts),
            _ => None,
        }
    }

    /// Iterate live container ids in slot order.
    pub fn ids(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.nodes.iter().enumerate().filter_map(|(i, n)| {
            n.as_ref().map(|n| {
                #[allow(
                    clippy::cast_possible_truncation,
                    reason = "NodeId uses 32-bit indices by design."
                )]
                NodeId::new(i as u32, n.generation)
            })
        })
    }

    /// Number of live containers.
    pub fn len(&self) -> usize {
        self.nodes.iter().filter(|n| n.is_some()).count()
    }

    /// Returns `true` if the tree has no live containers.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Find a live container by its label.
    pub fn find_by_label(&self, label: &str) -> Option<NodeId> {
        self.ids()
            .find(|&id| self.get(id).and_then(|c| c.label.as_deref()) == Some(label))
    }

    /// How walks descend below `id`. Empty for stale ids.
    pub fn descent(&self, id: NodeId) -> Descent {
        let Some(node) = self.node_opt(id) else {
            return Descent::default();
        };
        match node.kind {
            ContainerKind::Simple => Descent {
                primary: SmallVec::from_slice(&node.children),
                ..Descent::default()
            },
            ContainerKind::ScrollPane => Descent {
                primary: SmallVec::from_slice(&node.children),
                hit_gate: Some(node.container.real_bounds),
                ..Descent::default()
            },
            ContainerKind::Scroll(parts) => {
                let existing = |pane: Option<NodeId>| {
                    pane.and_then(|p| self.get(p))
                        .filter(|c| c.exists())
                        .map(|c| c.real_bounds)
                };
                let bounds = node.container.real_bounds;
                Descent {
                    primary: SmallVec::from_slice(self.children_of(parts.content)),
                    companions: parts.right.into_iter().chain(parts.bottom).collect(),
                    content: Some(parts.content),
                    hit_gate: Some(shrink_for_companions(
                        bounds,
                        existing(parts.right),
                        existing(parts.bottom),
                    )),
                    paint_clip: Some(bounds),
                }
            }
        }
    }

    /// Returns `true` if the container has a hook in `slot`.
    pub fn has_handler(&self, id: NodeId, slot: HandlerSlot) -> bool {
        self.get(id).is_some_and(|c| c.callbacks.has(slot))
    }

    /// Call the hook in `slot` of container `id`, if both exist.
    ///
    /// The hook is cloned out first, so it may mutate the tree freely,
    /// including removing `id`. Returns whether a hook ran.
    pub fn invoke(&mut self, id: NodeId, slot: HandlerSlot) -> bool {
        let Some(handler) = self.get(id).and_then(|c| c.callbacks.get(slot)).cloned() else {
            return false;
        };
        handler(self, id);
        true
    }

    /// Call the fine-scroll hook of container `id`, if both exist.
    pub fn invoke_fine_scroll(&mut self, id: NodeId, delta: Vec2, from_pointer_device: bool) -> bool {
        let Some(handler) = self
            .get(id)
            .and_then(|c| c.callbacks.when_fine_scrolled.clone())
        else {
            return false;
        };
        handler(self, id, delta, from_pointer_device);
        true
    }

    // --- internals ---

    fn insert_kind(
        &mut self,
        parent: Option<NodeId>,
        kind: ContainerKind,
        container: Container,
    ) -> Result<NodeId, TreeError> {
        let parent = match parent {
            Some(p) => match self.kind(p) {
                Some(ContainerKind::Scroll(parts)) => Some(parts.content),
                Some(_) => Some(p),
                None => return Err(TreeError::StaleNode(p)),
            },
            None => None,
        };
        // A scroll composite whose content was removed has nowhere to put children.
        if let Some(p) = parent
            && !self.is_alive(p)
        {
            return Err(TreeError::StaleNode(p));
        }
        let id = self.alloc(kind, container);
        tracing::trace!(?id, ?parent, "inserted container");
        match parent {
            Some(p) => self.link_parent(id, p),
            None => {
                if self.root().is_none() {
                    self.root = Some(id);
                }
            }
        }
        Ok(id)
    }

    fn alloc(&mut self, kind: ContainerKind, container: Container) -> NodeId {
        let (idx, generation) = if let Some(idx) = self.free_list.pop() {
            let generation = self.generations[idx] + 1;
            self.generations[idx] = generation;
            self.nodes[idx] = Some(Node::new(generation, kind, container));
            #[allow(
                clippy::cast_possible_truncation,
                reason = "NodeId uses 32-bit indices by design."
            )]
            (idx as u32, generation)
        } else {
            let generation = 1_u32;
            self.nodes.push(Some(Node::new(generation, kind, container)));
            self.generations.push(generation);
            #[allow(
                clippy::cast_possible_truncation,
                reason = "NodeId uses 32-bit indices by design."
            )]
            ((self.nodes.len() - 1) as u32, generation)
        };
        NodeId::new(idx, generation)
    }

    fn node_opt(&self, id: NodeId) -> Option<&Node> {
        let n = self.nodes.get(id.idx())?.as_ref()?;
        (n.generation == id.generation()).then_some(n)
    }

    fn node_opt_mut(&mut self, id: NodeId) -> Option<&mut Node> {
        let n = self.nodes.get_mut(id.idx())?.as_mut()?;
        if n.generation != id.generation() {
            return None;
        }
        Some(n)
    }

    fn link_parent(&mut self, id: NodeId, parent: NodeId) {
        if let Some(p) = self.node_opt_mut(parent) {
            p.children.push(id);
        }
        if let Some(n) = self.node_opt_mut(id) {
            n.parent = Some(parent);
        }
    }

    fn unlink_parent(&mut self, id: NodeId, parent: NodeId) {
        if let Some(p) = self.node_opt_mut(parent) {
            p.children.retain(|c| *c != id);
            if let ContainerKind::Scroll(parts) = &mut p.kind {
                for side in [Side::Right, Side::Bottom] {
                    let slot = parts.companion_mut(side);
                    if *slot == Some(id) {
                        *slot = None;
                    }
                }
            }
        }
        if let Some(n) = self.node_opt_mut(id) {
            n.parent = None;
        }
    }
}
