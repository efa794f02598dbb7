//! Column-based views of a binary tree. These don't rely on the BST property at all and work on
//! any shape built with [`Tree::branch`].
//!
//! A node's column is its horizontal distance from the root: the root is column 0, a left child is
//! one column left of its parent and a right child one column right. Every view is ordered from
//! the leftmost column to the rightmost. Within a column, nodes are met in level order.
//!
//! ```text
//!         1
//!       /   \
//!      2     3
//!       \   / \
//!        4 5   6
//!         / \
//!        7   8
//!
//! column:  -1  0  1  2
//! ```
//!
//! # Examples
//!
//! ```
//! use ordered_bst::tree::Tree;
//!
//! let leaf = |key| Tree::branch(Tree::new(), key, Tree::new());
//! let tree = Tree::branch(
//!     Tree::branch(Tree::new(), 2, leaf(4)),
//!     1,
//!     Tree::branch(Tree::branch(leaf(7), 5, leaf(8)), 3, leaf(6)),
//! );
//!
//! assert_eq!(tree.top_view(), [&2, &1, &3, &6]);
//! assert_eq!(tree.bottom_view(), [&7, &5, &8, &6]);
//! assert_eq!(tree.vertical_sums(), [9, 10, 11, 6]);
//! ```

use std::collections::{BTreeMap, VecDeque};
use std::ops::Add;

use crate::tree::{Node, Tree};

impl<K> Tree<K> {
    /// The sum of the keys in each column.
    pub fn vertical_sums(&self) -> Vec<K>
    where
        K: Clone + Add<Output = K>,
    {
        let mut sums: BTreeMap<isize, K> = BTreeMap::new();
        for (column, node) in self.columns() {
            let sum = match sums.remove(&column) {
                Some(sum) => sum + node.key.clone(),
                None => node.key.clone(),
            };
            sums.insert(column, sum);
        }
        sums.into_values().collect()
    }

    /// Every column's keys, top to bottom.
    pub fn vertical_order(&self) -> Vec<Vec<&K>> {
        let mut columns: BTreeMap<isize, Vec<&K>> = BTreeMap::new();
        for (column, node) in self.columns() {
            columns.entry(column).or_default().push(&node.key);
        }
        columns.into_values().collect()
    }

    /// The highest key in each column.
    pub fn top_view(&self) -> Vec<&K> {
        let mut top = BTreeMap::new();
        for (column, node) in self.columns() {
            top.entry(column).or_insert(&node.key);
        }
        top.into_values().collect()
    }

    /// The lowest key in each column. When two nodes share the bottom row of a column, the one met
    /// later in level order wins.
    pub fn bottom_view(&self) -> Vec<&K> {
        let mut bottom = BTreeMap::new();
        for (column, node) in self.columns() {
            bottom.insert(column, &node.key);
        }
        bottom.into_values().collect()
    }

    fn columns(&self) -> Columns<'_, K> {
        Columns {
            queue: self.root().map(|root| (0, root)).into_iter().collect(),
        }
    }
}

/// A level-order walk that yields each node along with its column.
struct Columns<'a, K> {
    queue: VecDeque<(isize, &'a Node<K>)>,
}

impl<'a, K> Iterator for Columns<'a, K> {
    type Item = (isize, &'a Node<K>);

    fn next(&mut self) -> Option<Self::Item> {
        let (column, node) = self.queue.pop_front()?;
        if let Some(left) = node.left.as_deref() {
            self.queue.push_back((column - 1, left));
        }
        if let Some(right) = node.right.as_deref() {
            self.queue.push_back((column + 1, right));
        }
        Some((column, node))
    }
}
