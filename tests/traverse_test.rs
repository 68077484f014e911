//! Tests for the traversal engine and its interrupt contract

use rstree::{breadth_first, in_order, pre_order, TreeNode, TreeNodeRef};

fn leaf(value: i32) -> TreeNodeRef<i32> {
    TreeNode::leaf(value)
}

//        4
//      /   \
//     2     6
//    / \   / \
//   1   3 5   7
fn full_tree() -> TreeNodeRef<i32> {
    TreeNode::branch(
        4,
        Some(TreeNode::branch(2, Some(leaf(1)), Some(leaf(3)))),
        Some(TreeNode::branch(6, Some(leaf(5)), Some(leaf(7)))),
    )
}

//   2
//  / \
// 1   4
//    / \
//   3   5
fn skewed_tree() -> TreeNodeRef<i32> {
    TreeNode::branch(
        2,
        Some(leaf(1)),
        Some(TreeNode::branch(4, Some(leaf(3)), Some(leaf(5)))),
    )
}

// ============================================================
// In-Order Tests
// ============================================================

#[test]
fn given_tree_when_in_order_then_each_node_visited_once_in_sorted_order() {
    let tree = full_tree();
    let mut visited = Vec::new();

    let interrupted = in_order(Some(&tree), |n| {
        visited.push(n.borrow().value);
        false
    });

    assert!(!interrupted);
    assert_eq!(visited, vec![1, 2, 3, 4, 5, 6, 7]);
}

#[test]
fn given_interrupt_when_in_order_then_later_nodes_skipped() {
    let tree = skewed_tree();
    let mut visited = Vec::new();

    let interrupted = in_order(Some(&tree), |n| {
        let value = n.borrow().value;
        visited.push(value);
        value == 4
    });

    assert!(interrupted);
    assert_eq!(visited, vec![1, 2, 3, 4]);
}

#[test]
fn given_interrupt_in_left_subtree_when_in_order_then_ancestors_suppressed() {
    let tree = skewed_tree();
    let mut visited = Vec::new();

    in_order(Some(&tree), |n| {
        let value = n.borrow().value;
        visited.push(value);
        value == 3
    });

    // 4 and 5 sit after 3 in visitation order and must not appear.
    assert_eq!(visited, vec![1, 2, 3]);
}

#[test]
fn given_visitor_mutation_when_in_order_then_remaining_walk_sees_it() {
    let tree = full_tree();
    let mut visited = Vec::new();

    in_order(Some(&tree), |n| {
        let value = n.borrow().value;
        visited.push(value);
        if value == 4 {
            n.borrow_mut().right = None;
        }
        false
    });

    assert_eq!(visited, vec![1, 2, 3, 4]);
}

// ============================================================
// Pre-Order Tests
// ============================================================

#[test]
fn given_tree_when_pre_order_then_node_before_subtrees() {
    let tree = full_tree();
    let mut visited = Vec::new();

    let interrupted = pre_order(Some(&tree), |n| {
        visited.push(n.borrow().value);
        false
    });

    assert!(!interrupted);
    assert_eq!(visited, vec![4, 2, 1, 3, 6, 5, 7]);
}

#[test]
fn given_interrupt_at_node_when_pre_order_then_both_subtrees_skipped() {
    let tree = full_tree();
    let mut visited = Vec::new();

    let interrupted = pre_order(Some(&tree), |n| {
        let value = n.borrow().value;
        visited.push(value);
        value == 2
    });

    assert!(interrupted);
    assert_eq!(visited, vec![4, 2]);
}

#[test]
fn given_interrupt_deep_in_left_subtree_when_pre_order_then_right_subtree_skipped() {
    let tree = full_tree();
    let mut visited = Vec::new();

    pre_order(Some(&tree), |n| {
        let value = n.borrow().value;
        visited.push(value);
        value == 1
    });

    assert_eq!(visited, vec![4, 2, 1]);
}

// ============================================================
// Breadth-First Tests
// ============================================================

#[test]
fn given_tree_when_breadth_first_then_level_by_level_left_before_right() {
    let tree = full_tree();
    let mut visited = Vec::new();

    let interrupted = breadth_first(Some(&tree), |n| {
        visited.push(n.borrow().value);
        false
    });

    assert!(!interrupted);
    assert_eq!(visited, vec![4, 2, 6, 1, 3, 5, 7]);
}

#[test]
fn given_interrupt_when_breadth_first_then_pending_queue_discarded() {
    let tree = full_tree();
    let mut visited = Vec::new();

    let interrupted = breadth_first(Some(&tree), |n| {
        let value = n.borrow().value;
        visited.push(value);
        value == 6
    });

    assert!(interrupted);
    // 1 and 3 were already enqueued when the interrupt fired.
    assert_eq!(visited, vec![4, 2, 6]);
}

// ============================================================
// Absent Root Tests
// ============================================================

#[test]
fn given_absent_root_when_traversing_then_no_op() {
    let mut calls = 0;

    assert!(!pre_order::<i32, _>(None, |_| {
        calls += 1;
        false
    }));
    assert!(!in_order::<i32, _>(None, |_| {
        calls += 1;
        false
    }));
    assert!(!breadth_first::<i32, _>(None, |_| {
        calls += 1;
        false
    }));

    assert_eq!(calls, 0);
}
