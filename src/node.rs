//! Node model: the recursive tree-node shape and its validity predicates.
//!
//! Nodes are shared handles (`Rc<RefCell<_>>`) so that mutation operations
//! can rewire child pointers in place and deletion can identify its target
//! by reference identity. Tree shape (no aliasing, no cycles) is a checked
//! invariant, not a type-level guarantee; see [`is_valid`].

use std::cell::RefCell;
use std::collections::{BTreeMap, HashSet};
use std::rc::Rc;

use crate::color::NodeColor;
use crate::errors::{ChildSide, TreeError, TreeResult};

/// Open, caller-supplied extra attributes carried on a node.
///
/// Attributes are attached at construction, cloned through reconstruction
/// (coloring) and ignored by all structural predicates and comparisons.
pub type Attrs = BTreeMap<String, String>;

/// Shared handle to a tree node.
pub type TreeNodeRef<T> = Rc<RefCell<TreeNode<T>>>;

/// A child slot: either absent or a handle to a subtree.
pub type Link<T> = Option<TreeNodeRef<T>>;

/// A binary tree node holding an orderable value.
///
/// `left` and `right` are conceptually exclusively owned: no node may be
/// reachable from two parents. `color` is `None` on the base model and only
/// set by the coloring transform.
#[derive(Debug, Clone)]
pub struct TreeNode<T> {
    pub value: T,
    pub left: Link<T>,
    pub right: Link<T>,
    pub attrs: Attrs,
    pub color: Option<NodeColor>,
}

impl<T> TreeNode<T> {
    /// Childless node with no extra attributes.
    pub fn leaf(value: T) -> TreeNodeRef<T> {
        Self::leaf_with_attrs(value, Attrs::new())
    }

    /// Childless node carrying caller-supplied attributes.
    pub fn leaf_with_attrs(value: T, attrs: Attrs) -> TreeNodeRef<T> {
        Rc::new(RefCell::new(TreeNode {
            value,
            left: None,
            right: None,
            attrs,
            color: None,
        }))
    }

    /// Lenient constructor: a provided child that fails [`is_valid`] is
    /// silently replaced with `None`. Construction never fails.
    pub fn branch(value: T, left: Link<T>, right: Link<T>) -> TreeNodeRef<T> {
        Self::branch_with_attrs(value, left, right, Attrs::new())
    }

    /// Lenient constructor carrying caller-supplied attributes.
    pub fn branch_with_attrs(
        value: T,
        left: Link<T>,
        right: Link<T>,
        attrs: Attrs,
    ) -> TreeNodeRef<T> {
        let left = left.filter(|l| is_valid(Some(l)));
        let right = right.filter(|r| is_valid(Some(r)));
        Rc::new(RefCell::new(TreeNode {
            value,
            left,
            right,
            attrs,
            color: None,
        }))
    }

    /// Strict constructor: rejects a child that fails [`is_valid`] instead
    /// of dropping it.
    pub fn try_branch(value: T, left: Link<T>, right: Link<T>) -> TreeResult<TreeNodeRef<T>> {
        if left.as_ref().is_some_and(|l| !is_valid(Some(l))) {
            return Err(TreeError::InvalidNodeShape {
                side: ChildSide::Left,
            });
        }
        if right.as_ref().is_some_and(|r| !is_valid(Some(r))) {
            return Err(TreeError::InvalidNodeShape {
                side: ChildSide::Right,
            });
        }
        Ok(Rc::new(RefCell::new(TreeNode {
            value,
            left,
            right,
            attrs: Attrs::new(),
            color: None,
        })))
    }

    /// Height of the subtree rooted at this node, 1 for a leaf.
    pub fn depth(&self) -> usize {
        let left = self.left.as_ref().map_or(0, |l| l.borrow().depth());
        let right = self.right.as_ref().map_or(0, |r| r.borrow().depth());
        1 + left.max(right)
    }
}

/// Structural predicate: the node is present and every node in the reachable
/// graph is reached exactly once.
///
/// Reaching any node a second time (a shared subtree or a cycle) disqualifies
/// the whole structure. Extra attributes and color never affect the result.
pub fn is_valid<T>(root: Option<&TreeNodeRef<T>>) -> bool {
    let Some(node) = root else {
        return false;
    };
    let mut seen = HashSet::new();
    each_node_once(node, &mut seen)
}

fn each_node_once<T>(
    node: &TreeNodeRef<T>,
    seen: &mut HashSet<*const RefCell<TreeNode<T>>>,
) -> bool {
    if !seen.insert(Rc::as_ptr(node)) {
        return false;
    }
    let n = node.borrow();
    n.left.as_ref().map_or(true, |l| each_node_once(l, seen))
        && n.right.as_ref().map_or(true, |r| each_node_once(r, seen))
}

/// Ordering predicate: pairwise local check, at every node a present left
/// child's value must not exceed the node's value and a present right
/// child's value must not be less than it.
///
/// An absent tree is vacuously ordered. This is deliberately not a full
/// subtree-range check: a grandchild may fall outside its grandparent's
/// range and still pass.
pub fn is_ordered<T: PartialOrd>(root: Option<&TreeNodeRef<T>>) -> bool {
    let Some(node) = root else {
        return true;
    };
    let n = node.borrow();
    if let Some(l) = &n.left {
        if l.borrow().value > n.value {
            return false;
        }
    }
    if let Some(r) = &n.right {
        if r.borrow().value < n.value {
            return false;
        }
    }
    is_ordered(n.left.as_ref()) && is_ordered(n.right.as_ref())
}
