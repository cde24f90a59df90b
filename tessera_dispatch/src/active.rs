// Copyright 2025 the Tessera Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use hashbrown::HashSet;
use tessera_tree::{ContainerTree, HandlerSlot, NodeId};

/// Make exactly the containers in `targets` active.
///
/// Walks the whole tree, children before parents. Every visited container
/// whose `active` flag disagrees with membership in `targets` is flipped and
/// receives `ActiveStatusChanged`. A scroll composite contributes its content
/// children and then its content container; the composite itself and its
/// companions are never activated.
pub fn set_active(tree: &mut ContainerTree, targets: &HashSet<NodeId>) {
    let Some(root) = tree.root() else {
        return;
    };
    let _span = tracing::trace_span!("set_active", targets = targets.len()).entered();
    visit(tree, root, targets);
}

fn visit(tree: &mut ContainerTree, id: NodeId, targets: &HashSet<NodeId>) {
    let descent = tree.descent(id);
    for &child in &descent.primary {
        visit(tree, child, targets);
    }

    let unit = descent.content.unwrap_or(id);
    let wanted = targets.contains(&unit);
    let Some(container) = tree.get_mut(unit) else {
        return;
    };
    if container.active != wanted {
        container.active = wanted;
        tracing::debug!(id = ?unit, active = wanted, "active status changed");
        tree.invoke(unit, HandlerSlot::ActiveStatusChanged);
    }
}
