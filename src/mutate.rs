//! Mutation operations: unbalanced insertion and pointer-style deletion.
//!
//! Both walk the existing graph in-order and mutate child pointers in place;
//! callers must own the graph exclusively for the duration of a call.

use std::rc::Rc;

use tracing::{instrument, trace};

use crate::node::{Attrs, Link, TreeNode, TreeNodeRef};
use crate::traverse::in_order;

/// Deletion mode. `Shallow` is accepted for interface compatibility and
/// currently detaches identically to `Deep`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DetachMode {
    /// Detach the target together with its whole subtree.
    #[default]
    Deep,
    /// Reserved for reparenting the target's children; detaches like `Deep`
    /// for now.
    Shallow,
}

/// Insert `value` as a fresh leaf without extra attributes.
pub fn insert<T: PartialOrd>(root: Option<&TreeNodeRef<T>>, value: T) -> TreeNodeRef<T> {
    insert_with_attrs(root, value, Attrs::new())
}

/// Insert `value` as a fresh leaf carrying `attrs`.
///
/// Walks `root` in-order and attaches the leaf at the first visited node
/// whose matching child slot is empty: left when `value` is less than the
/// node's value, right when greater. Equal values never attach at the equal
/// node, so a duplicate drifts to a position chosen by comparisons with
/// further nodes.
///
/// Returns the freshly constructed node, not the root, so the caller can
/// transform it further in place. With an absent root the leaf stays
/// unattached and is itself the resulting tree.
#[instrument(level = "trace", skip_all)]
pub fn insert_with_attrs<T: PartialOrd>(
    root: Option<&TreeNodeRef<T>>,
    value: T,
    attrs: Attrs,
) -> TreeNodeRef<T> {
    let fresh = TreeNode::leaf_with_attrs(value, attrs);
    in_order(root, |node| {
        let mut n = node.borrow_mut();
        let f = fresh.borrow();
        if f.value < n.value && n.left.is_none() {
            n.left = Some(Rc::clone(&fresh));
            trace!("attached as left child");
            return true;
        }
        if f.value > n.value && n.right.is_none() {
            n.right = Some(Rc::clone(&fresh));
            trace!("attached as right child");
            return true;
        }
        false
    });
    fresh
}

/// Detach `target` from the tree rooted at `root`.
pub fn delete<T>(root: &TreeNodeRef<T>, target: &TreeNodeRef<T>) -> Link<T> {
    delete_with(root, target, DetachMode::default(), |_| {})
}

/// Detach `target` from the tree rooted at `root`, invoking `on_visit` for
/// every node visited along the way (observability only).
///
/// If `root` is itself `target`, returns `None`. Otherwise walks in-order
/// and clears the first child pointer that is `target` by reference
/// identity, stopping there; a target not present in the tree leaves the
/// root unmodified. Returns the mutated-in-place root.
// TODO: give Shallow real semantics (reparent the detached node's children)
// once the intended behavior is settled.
#[instrument(level = "trace", skip_all)]
pub fn delete_with<T, F>(
    root: &TreeNodeRef<T>,
    target: &TreeNodeRef<T>,
    _mode: DetachMode,
    mut on_visit: F,
) -> Link<T>
where
    F: FnMut(&TreeNodeRef<T>),
{
    if Rc::ptr_eq(root, target) {
        trace!("target is the root, whole tree dropped");
        return None;
    }

    in_order(Some(root), |node| {
        on_visit(node);
        let mut n = node.borrow_mut();
        if n.left.as_ref().is_some_and(|l| Rc::ptr_eq(l, target)) {
            n.left = None;
            trace!("detached left child");
            return true;
        }
        if n.right.as_ref().is_some_and(|r| Rc::ptr_eq(r, target)) {
            n.right = None;
            trace!("detached right child");
            return true;
        }
        false
    });

    Some(Rc::clone(root))
}
