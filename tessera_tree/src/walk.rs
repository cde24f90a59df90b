// Copyright 2025 the Tessera Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Read-only walks: hit testing and concern collection.

use alloc::vec::Vec;
use kurbo::Point;

use crate::tree::ContainerTree;
use crate::types::NodeId;
use crate::util::bounds_contains;

impl ContainerTree {
    /// Containers under `point`, deepest first.
    ///
    /// Index `0` is the most specific hit and the root (if hit) comes last.
    /// Containers that do not exist are skipped together with their subtrees,
    /// and non-interactable children are not descended into. A container's own
    /// test is its `handles_pierced` hook when present, its bounds otherwise.
    ///
    /// Returns an empty list when the tree has no root.
    pub fn pierced_containers(&self, point: Point) -> Vec<NodeId> {
        let _span = tracing::trace_span!("pierced_containers", x = point.x, y = point.y).entered();
        let mut out = Vec::new();
        if let Some(root) = self.root() {
            self.fill_pierced(root, point, &mut out);
        }
        out
    }

    /// Every existing container whose `concerned` flag is set.
    ///
    /// The order follows the same post-order walk as hit testing, but the
    /// pointer position plays no part. Subtrees below non-existing containers
    /// are still searched.
    pub fn concerned_containers(&self) -> Vec<NodeId> {
        let mut out = Vec::new();
        if let Some(root) = self.root() {
            self.fill_concerned(root, &mut out);
        }
        out
    }

    fn fill_pierced(&self, id: NodeId, point: Point, out: &mut Vec<NodeId>) {
        let Some(container) = self.get(id) else {
            return;
        };
        if !container.exists() {
            return;
        }
        let descent = self.descent(id);
        let gated_out = descent.hit_gate.is_some_and(|gate| !bounds_contains(gate, point));
        if !gated_out {
            for &child in &descent.primary {
                if self.get(child).is_some_and(|c| c.interactable()) {
                    self.fill_pierced(child, point, out);
                }
            }
        }
        for &companion in &descent.companions {
            self.fill_pierced(companion, point, out);
        }

        let hit = match &container.callbacks.handles_pierced {
            Some(test) => test(self, id, point),
            None => bounds_contains(container.real_bounds, point),
        };
        if hit {
            out.push(id);
        }
    }

    fn fill_concerned(&self, id: NodeId, out: &mut Vec<NodeId>) {
        let descent = self.descent(id);
        for &child in descent.primary.iter().chain(&descent.companions) {
            self.fill_concerned(child, out);
        }
        if self.get(id).is_some_and(|c| c.exists() && c.state.concerned) {
            out.push(id);
        }
    }
}
