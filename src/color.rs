//! Depth-based two-coloring transform.
//!
//! Produces a structurally new tree with an alternating BLACK/RED label per
//! level. The alternation is unconditional — it matches the "no two
//! consecutive reds" shape of a red-black tree but enforces no black-height
//! balancing, and insertion never rotates or recolors the rest of the tree.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use tracing::instrument;

use crate::mutate::insert_with_attrs;
use crate::node::{Attrs, Link, TreeNode, TreeNodeRef};

/// Node color label. Constant data, two variants.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum NodeColor {
    #[default]
    Black,
    Red,
}

impl NodeColor {
    pub fn opposite(self) -> Self {
        match self {
            NodeColor::Black => NodeColor::Red,
            NodeColor::Red => NodeColor::Black,
        }
    }
}

impl fmt::Display for NodeColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NodeColor::Black => write!(f, "black"),
            NodeColor::Red => write!(f, "red"),
        }
    }
}

/// Recolored copy of the tree with a BLACK root.
pub fn color_tree<T: Clone>(root: Option<&TreeNodeRef<T>>) -> Link<T> {
    color_tree_from(root, NodeColor::Black)
}

/// Recolored copy of the tree, root colored `start`, each child the opposite
/// of its parent.
///
/// No node is shared with the input. Extra attributes are cloned onto the
/// corresponding new nodes; a color already present on an input node is
/// discarded and recomputed. An absent input yields `None`.
#[instrument(level = "trace", skip_all)]
pub fn color_tree_from<T: Clone>(root: Option<&TreeNodeRef<T>>, start: NodeColor) -> Link<T> {
    recolor(root, start)
}

fn recolor<T: Clone>(link: Option<&TreeNodeRef<T>>, color: NodeColor) -> Link<T> {
    let node = link?;
    let n = node.borrow();
    let left = recolor(n.left.as_ref(), color.opposite());
    let right = recolor(n.right.as_ref(), color.opposite());
    Some(Rc::new(RefCell::new(TreeNode {
        value: n.value.clone(),
        left,
        right,
        attrs: n.attrs.clone(),
        color: Some(color),
    })))
}

/// Insert `value` and color the freshly inserted node RED, in place.
pub fn insert_and_color<T: PartialOrd>(root: Option<&TreeNodeRef<T>>, value: T) -> TreeNodeRef<T> {
    insert_and_color_with_attrs(root, value, Attrs::new())
}

/// Insert `value` with `attrs` and color the freshly inserted node RED.
///
/// Only the new node is colored; the rest of the tree is left untouched and
/// no red-black invariant is restored.
#[instrument(level = "trace", skip_all)]
pub fn insert_and_color_with_attrs<T: PartialOrd>(
    root: Option<&TreeNodeRef<T>>,
    value: T,
    attrs: Attrs,
) -> TreeNodeRef<T> {
    let inserted = insert_with_attrs(root, value, attrs);
    inserted.borrow_mut().color = Some(NodeColor::Red);
    inserted
}
