//! Binary tree toolkit: lenient node construction, interruptible traversals,
//! predicate lookup, pointer-style mutation, and a depth-alternating
//! red/black coloring transform.
//!
//! All operations are synchronous and single-threaded; node handles are
//! `Rc<RefCell<_>>` and callers own the graph exclusively while mutating.
//!
//! ```
//! use rstree::{in_order, insert, TreeNode};
//!
//! let root = TreeNode::leaf(4);
//! insert(Some(&root), 6);
//! insert(Some(&root), 2);
//!
//! let mut values = Vec::new();
//! in_order(Some(&root), |node| {
//!     values.push(node.borrow().value);
//!     false
//! });
//! assert_eq!(values, vec![2, 4, 6]);
//! ```

pub mod color;
pub mod errors;
pub mod lookup;
pub mod mutate;
pub mod node;
pub mod traverse;
pub mod tree_traits;
pub mod util;

pub use color::{
    color_tree, color_tree_from, insert_and_color, insert_and_color_with_attrs, NodeColor,
};
pub use errors::{ChildSide, TreeError, TreeResult};
pub use lookup::{find, find_by, Traversal};
pub use mutate::{delete, delete_with, insert, insert_with_attrs, DetachMode};
pub use node::{is_ordered, is_valid, Attrs, Link, TreeNode, TreeNodeRef};
pub use traverse::{breadth_first, in_order, pre_order};
pub use tree_traits::TreeNodeConvert;
