// Copyright 2025 the Tessera Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Optional per-container hooks.
//!
//! Hooks are reference counted so that the tree can clone one out of a
//! container before calling it. The hook then gets the whole tree mutably and
//! may do anything to it, including removing the container it was invoked on.
//! A missing hook is skipped silently.
//!
//! ```
//! use core::cell::Cell;
//! use std::rc::Rc;
//!
//! use kurbo::Rect;
//! use tessera_tree::{Callbacks, Container, ContainerTree, HandlerSlot};
//!
//! let clicks = Rc::new(Cell::new(0));
//! let counter = clicks.clone();
//! let mut tree = ContainerTree::new();
//! let button = tree
//!     .insert(
//!         None,
//!         Container::with_bounds(Rect::new(0.0, 0.0, 10.0, 10.0)).with_callbacks(
//!             Callbacks::default().with(HandlerSlot::Clicked, move |_, _| {
//!                 counter.set(counter.get() + 1);
//!             }),
//!         ),
//!     )
//!     .unwrap();
//!
//! assert!(tree.invoke(button, HandlerSlot::Clicked));
//! assert!(!tree.invoke(button, HandlerSlot::Drag), "no drag hook installed");
//! assert_eq!(clicks.get(), 1);
//! ```

use alloc::rc::Rc;
use kurbo::{Point, Vec2};

use crate::tree::ContainerTree;
use crate::types::NodeId;

/// A hook taking the tree and the container it was installed on.
pub type Handler = Rc<dyn Fn(&mut ContainerTree, NodeId)>;

/// Fine-scroll hook: receives the scroll delta and whether it came from a pointer device.
pub type ScrollHandler = Rc<dyn Fn(&mut ContainerTree, NodeId, Vec2, bool)>;

/// Custom hit predicate replacing the bounds-contains test.
pub type PierceTest = Rc<dyn Fn(&ContainerTree, NodeId, Point) -> bool>;

/// Names the plain [`Handler`] hooks of a container.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum HandlerSlot {
    /// `when_mouse_enters_container`.
    MouseEnters,
    /// `when_mouse_motion`.
    MouseMotion,
    /// `when_mouse_leaves_container`.
    MouseLeaves,
    /// `when_mouse_down`.
    MouseDown,
    /// `when_clicked`.
    Clicked,
    /// `when_drag_start`.
    DragStart,
    /// `when_drag`.
    Drag,
    /// `when_drag_end`.
    DragEnd,
    /// `when_active_status_changed`.
    ActiveStatusChanged,
    /// `when_paint`.
    Paint,
    /// `after_paint`.
    AfterPaint,
}

/// The set of hooks a container may carry.
#[derive(Clone, Default)]
pub struct Callbacks {
    /// Pointer entered the container.
    pub when_mouse_enters_container: Option<Handler>,
    /// Pointer moved while over the container.
    pub when_mouse_motion: Option<Handler>,
    /// Pointer left the container.
    pub when_mouse_leaves_container: Option<Handler>,
    /// A recognized button went down on the container.
    pub when_mouse_down: Option<Handler>,
    /// The container was clicked.
    pub when_clicked: Option<Handler>,
    /// A press on the container crossed its drag threshold.
    pub when_drag_start: Option<Handler>,
    /// The pointer moved during a drag.
    pub when_drag: Option<Handler>,
    /// A drag ended.
    pub when_drag_end: Option<Handler>,
    /// The `active` flag flipped.
    pub when_active_status_changed: Option<Handler>,
    /// Paint the container, before its children.
    pub when_paint: Option<Handler>,
    /// Paint after the children.
    pub after_paint: Option<Handler>,
    /// Scroll input over the container.
    pub when_fine_scrolled: Option<ScrollHandler>,
    /// Replaces the bounds test during hit testing.
    pub handles_pierced: Option<PierceTest>,
}

impl Callbacks {
    /// Install `f` in `slot`, builder style.
    pub fn with(mut self, slot: HandlerSlot, f: impl Fn(&mut ContainerTree, NodeId) + 'static) -> Self {
        self.set(slot, f);
        self
    }

    /// Install a fine-scroll hook, builder style.
    pub fn with_fine_scroll(
        mut self,
        f: impl Fn(&mut ContainerTree, NodeId, Vec2, bool) + 'static,
    ) -> Self {
        self.when_fine_scrolled = Some(Rc::new(f));
        self
    }

    /// Install a custom hit predicate, builder style.
    pub fn with_pierce_test(
        mut self,
        f: impl Fn(&ContainerTree, NodeId, Point) -> bool + 'static,
    ) -> Self {
        self.handles_pierced = Some(Rc::new(f));
        self
    }

    /// Install `f` in `slot`, replacing any previous hook.
    pub fn set(&mut self, slot: HandlerSlot, f: impl Fn(&mut ContainerTree, NodeId) + 'static) {
        *self.slot_mut(slot) = Some(Rc::new(f));
    }

    /// The hook in `slot`, if any.
    pub fn get(&self, slot: HandlerSlot) -> Option<&Handler> {
        match slot {
            HandlerSlot::MouseEnters => self.when_mouse_enters_container.as_ref(),
            HandlerSlot::MouseMotion => self.when_mouse_motion.as_ref(),
            HandlerSlot::MouseLeaves => self.when_mouse_leaves_container.as_ref(),
            HandlerSlot::MouseDown => self.when_mouse_down.as_ref(),
            HandlerSlot::Clicked => self.when_clicked.as_ref(),
            HandlerSlot::DragStart => self.when_drag_start.as_ref(),
            HandlerSlot::Drag => self.when_drag.as_ref(),
            HandlerSlot::DragEnd => self.when_drag_end.as_ref(),
            HandlerSlot::ActiveStatusChanged => self.when_active_status_changed.as_ref(),
            HandlerSlot::Paint => self.when_paint.as_ref(),
            HandlerSlot::AfterPaint => self.after_paint.as_ref(),
        }
    }

    /// Returns `true` if a hook is installed in `slot`.
    pub fn has(&self, slot: HandlerSlot) -> bool {
        self.get(slot).is_some()
    }

    fn slot_mut(&mut self, slot: HandlerSlot) -> &mut Option<Handler> {
        match slot {
            HandlerSlot::MouseEnters => &mut self.when_mouse_enters_container,
            HandlerSlot::MouseMotion => &mut self.when_mouse_motion,
            HandlerSlot::MouseLeaves => &mut self.when_mouse_leaves_container,
            HandlerSlot::MouseDown => &mut self.when_mouse_down,
            HandlerSlot::Clicked => &mut self.when_clicked,
            HandlerSlot::DragStart => &mut self.when_drag_start,
            HandlerSlot::Drag => &mut self.when_drag,
            HandlerSlot::DragEnd => &mut self.when_drag_end,
            HandlerSlot::ActiveStatusChanged => &mut self.when_active_status_changed,
            HandlerSlot::Paint => &mut self.when_paint,
            HandlerSlot::AfterPaint => &mut self.after_paint,
        }
    }
}

impl core::fmt::Debug for Callbacks {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Callbacks")
            .field("when_mouse_enters_container", &self.when_mouse_enters_container.is_some())
            .field("when_mouse_motion", &self.when_mouse_motion.is_some())
            .field("when_mouse_leaves_container", &self.when_mouse_leaves_container.is_some())
            .field("when_mouse_down", &self.when_mouse_down.is_some())
            .field("when_clicked", &self.when_clicked.is_some())
            .field("when_drag_start", &self.when_drag_start.is_some())
            .field("when_drag", &self.when_drag.is_some())
            .field("when_drag_end", &self.when_drag_end.is_some())
            .field("when_active_status_changed", &self.when_active_status_changed.is_some())
            .field("when_paint", &self.when_paint.is_some())
            .field("after_paint", &self.after_paint.is_some())
            .field("when_fine_scrolled", &self.when_fine_scrolled.is_some())
            .field("handles_pierced", &self.handles_pierced.is_some())
            .finish()
    }
}
