// Copyright 2025 the Tessera Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Public types for the container tree: identifiers, flags, kinds, and the per-container record.

use alloc::string::String;
use kurbo::Rect;
use tessera_event_state::drag::DragThreshold;
use tessera_event_state::interaction::InteractionState;

use crate::callbacks::Callbacks;

/// Identifier for a container in the tree.
///
/// This is a small, copyable handle that stays stable across updates but becomes
/// invalid when the underlying slot is reused.
/// It consists of a slot index and a generation counter.
///
/// ## Semantics
///
/// - On insert, a fresh slot is allocated with generation `1`.
/// - On remove, the slot is freed; any existing `NodeId` that pointed to that slot is now stale.
/// - On reuse of a freed slot, its generation is incremented, producing a new, distinct `NodeId`.
///
/// ### Liveness
///
/// A `NodeId` doubles as the liveness token used during dispatch: keep the id
/// across a callback and ask [`ContainerTree::is_alive`](crate::ContainerTree::is_alive)
/// afterwards to learn whether that specific container was removed by the callback.
/// Stale `NodeId`s never alias a different live container because the generation must match.
///
/// ### Notes
///
/// - The generation increments on slot reuse and never decreases.
/// - A slot whose generation reaches `u32::MAX` is retired instead of reused.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct NodeId(pub(crate) u32, pub(crate) u32);

impl NodeId {
    pub(crate) const fn new(idx: u32, generation: u32) -> Self {
        Self(idx, generation)
    }

    pub(crate) const fn idx(self) -> usize {
        self.0 as usize
    }

    pub(crate) const fn generation(self) -> u32 {
        self.1
    }
}

bitflags::bitflags! {
    /// Per-container lifecycle, obstruction, and behavior flags.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct ContainerFlags: u16 {
        /// The container logically exists. Cleared containers stay allocated but are
        /// skipped by hit testing, dispatch, and painting, together with their subtree.
        const EXISTS = 1 << 0;
        /// The container takes part in hit testing below its parent.
        const INTERACTABLE = 1 << 1;
        /// Painting recurses into children (and runs `after_paint`).
        const PAINT_CHILDREN = 1 << 2;
        /// Receive pointer events even when another container is on top.
        const RECEIVE_EVENTS_EVEN_IF_OBSTRUCTED = 1 << 3;
        /// Receive pointer events when obstructed only by a direct child.
        const RECEIVE_EVENTS_EVEN_IF_OBSTRUCTED_BY_ONE = 1 << 4;
        /// A drag that ends over the container also counts as a click.
        const DRAG_END_IS_CLICK = 1 << 5;
        /// The container handles key events; presses on it make it active.
        const WANTS_KEY_EVENTS = 1 << 6;
        /// Removing the parent detaches this container instead of removing it.
        const KEEP_ON_PARENT_REMOVE = 1 << 7;
    }
}

impl Default for ContainerFlags {
    fn default() -> Self {
        Self::EXISTS | Self::INTERACTABLE | Self::PAINT_CHILDREN
    }
}

/// Which edge a scroll composite's companion pane sits on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Side {
    /// Right edge; steals its width from the content's hit area.
    Right,
    /// Bottom edge; steals its height from the content's hit area.
    Bottom,
}

/// The parts of a scroll composite.
///
/// `content` holds the logical children. `right` and `bottom` are optional
/// companion panes such as scrollbars or gutters.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ScrollParts {
    /// Container whose children are the composite's logical children.
    pub content: NodeId,
    /// Companion pane along the right edge.
    pub right: Option<NodeId>,
    /// Companion pane along the bottom edge.
    pub bottom: Option<NodeId>,
}

impl ScrollParts {
    /// The companion on `side`, if any.
    pub fn companion(&self, side: Side) -> Option<NodeId> {
        match side {
            Side::Right => self.right,
            Side::Bottom => self.bottom,
        }
    }

    pub(crate) fn companion_mut(&mut self, side: Side) -> &mut Option<NodeId> {
        match side {
            Side::Right => &mut self.right,
            Side::Bottom => &mut self.bottom,
        }
    }
}

/// Structural variant of a container.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ContainerKind {
    /// Plain container; children are hit tested wherever they are.
    Simple,
    /// Simple container that clips hit testing of its children to its own bounds.
    ///
    /// Only the immediate parent's bounds are checked, not clipping accumulated
    /// from further up the tree.
    ScrollPane,
    /// Composite with a content sub-tree and optional right/bottom companions.
    Scroll(ScrollParts),
}

/// The per-container record stored in a [`ContainerTree`](crate::ContainerTree).
///
/// Geometry is resolved elsewhere: a layout pass writes `real_bounds`, which
/// hit testing and painting read. Everything else is interaction state the
/// dispatcher maintains, or hooks it calls.
#[derive(Clone, Debug)]
pub struct Container {
    /// Stable opaque identity used for external correlation (debugging, snapshots).
    pub label: Option<String>,
    /// Resolved rectangle, in tree coordinates.
    pub real_bounds: Rect,
    /// Constraint input for layout. Not read by dispatch.
    pub wanted_bounds: Rect,
    /// Lifecycle, obstruction, and behavior flags.
    pub flags: ContainerFlags,
    /// Interaction state maintained by the dispatcher.
    pub state: InteractionState,
    /// Displacement needed before a press on this container becomes a drag.
    pub drag_threshold: DragThreshold,
    /// Whether this container handled the most recent press.
    pub active: bool,
    /// Paint ordering hint among the content children of a scroll composite.
    pub z_index: i32,
    /// Set until the first full paint of this container completes.
    pub first_paint: bool,
    /// Optional hooks.
    pub callbacks: Callbacks,
}

impl Default for Container {
    fn default() -> Self {
        Self {
            label: None,
            real_bounds: Rect::ZERO,
            wanted_bounds: Rect::ZERO,
            flags: ContainerFlags::default(),
            state: InteractionState::default(),
            drag_threshold: DragThreshold::default(),
            active: false,
            z_index: 0,
            first_paint: true,
            callbacks: Callbacks::default(),
        }
    }
}

impl Container {
    /// A container whose wanted and real bounds are both `bounds`.
    pub fn with_bounds(bounds: Rect) -> Self {
        Self {
            real_bounds: bounds,
            wanted_bounds: bounds,
            ..Self::default()
        }
    }

    /// Set the label.
    pub fn labeled(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Add `flags` to the current flags.
    pub fn with_flags(mut self, flags: ContainerFlags) -> Self {
        self.flags |= flags;
        self
    }

    /// Replace the callbacks.
    pub fn with_callbacks(mut self, callbacks: Callbacks) -> Self {
        self.callbacks = callbacks;
        self
    }

    /// Returns `true` if the container logically exists.
    pub fn exists(&self) -> bool {
        self.flags.contains(ContainerFlags::EXISTS)
    }

    /// Returns `true` if the container takes part in hit testing below its parent.
    pub fn interactable(&self) -> bool {
        self.flags.contains(ContainerFlags::INTERACTABLE)
    }

    /// Returns `true` if painting recurses into the children.
    pub fn paints_children(&self) -> bool {
        self.flags.contains(ContainerFlags::PAINT_CHILDREN)
    }

    /// Returns `true` if either obstruction flag is set.
    pub fn receives_obstructed(&self) -> bool {
        self.flags.intersects(
            ContainerFlags::RECEIVE_EVENTS_EVEN_IF_OBSTRUCTED
                | ContainerFlags::RECEIVE_EVENTS_EVEN_IF_OBSTRUCTED_BY_ONE,
        )
    }
}
