//! Display conversion for shared node handles.
//!
//! Inherent impls on `Rc<RefCell<_>>` are not allowed outside the defining
//! crate (E0116), so the conversion lives on a trait.

use std::fmt;

use termtree::Tree;

use crate::node::TreeNodeRef;

pub trait TreeNodeConvert {
    fn to_tree_string(&self) -> Tree<String>;
}

impl<T: fmt::Display> TreeNodeConvert for TreeNodeRef<T> {
    fn to_tree_string(&self) -> Tree<String> {
        let node = self.borrow();

        let root = match node.color {
            Some(color) => format!("{} [{}]", node.value, color),
            None => node.value.to_string(),
        };

        let mut leaves = Vec::new();
        if let Some(left) = &node.left {
            leaves.push(left.to_tree_string());
        }
        if let Some(right) = &node.right {
            leaves.push(right.to_tree_string());
        }

        Tree::new(root).with_leaves(leaves)
    }
}
