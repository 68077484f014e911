//! Predicate-based lookup built atop the traversal engine.

use std::rc::Rc;

use crate::node::{Link, TreeNodeRef};
use crate::traverse::{breadth_first, in_order, pre_order};

/// Traversal strategy used by [`find_by`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Traversal {
    Pre,
    #[default]
    In,
    BreadthFirst,
}

/// First node, in in-order visitation order, for which the predicate holds.
pub fn find<T, P>(root: Option<&TreeNodeRef<T>>, predicate: P) -> Link<T>
where
    P: FnMut(&TreeNodeRef<T>) -> bool,
{
    find_by(root, predicate, Traversal::default())
}

/// First node, in the given strategy's visitation order, for which the
/// predicate holds. Traversal stops at the match; the returned handle is the
/// node in the tree, not a copy.
pub fn find_by<T, P>(root: Option<&TreeNodeRef<T>>, mut predicate: P, order: Traversal) -> Link<T>
where
    P: FnMut(&TreeNodeRef<T>) -> bool,
{
    let mut found: Link<T> = None;
    let visit = |node: &TreeNodeRef<T>| {
        if predicate(node) {
            found = Some(Rc::clone(node));
        }
        found.is_some()
    };
    match order {
        Traversal::Pre => pre_order(root, visit),
        Traversal::In => in_order(root, visit),
        Traversal::BreadthFirst => breadth_first(root, visit),
    };
    found
}
