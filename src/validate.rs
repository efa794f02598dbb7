//! Checks for whether a binary tree actually satisfies the BST property. [`Tree::insert`] and
//! [`Tree::delete`] always maintain it, but [`Tree::branch`] can build any shape.
//!
//! Checking only that each node is between its two children is not enough: a key deep in a
//! subtree can still be on the wrong side of an ancestor further up.
//!
//! ```
//! use ordered_bst::tree::Tree;
//!
//! //     20
//! //    /  \
//! //   8    30
//! //       /
//! //      18   <- less than 20 but in its right subtree
//! let right = Tree::branch(Tree::from_iter([18]), 30, Tree::new());
//! let tree = Tree::branch(Tree::from_iter([8]), 20, right);
//!
//! assert!(!tree.is_valid());
//! assert!(!tree.is_valid_by_range());
//! ```

use crate::tree::{Node, Tree};

impl<K> Tree<K>
where
    K: Ord,
{
    /// Whether the in-order walk of this tree yields strictly increasing keys, which holds exactly
    /// when every key is greater than its whole left subtree and less than its whole right
    /// subtree. Stops at the first out-of-order pair.
    ///
    /// Runs in `O(n)` time and `O(height)` space.
    pub fn is_valid(&self) -> bool {
        let mut last = None;
        ascending(self.root(), &mut last)
    }

    /// Same answer as [`Tree::is_valid`], found by passing each subtree the open interval its keys
    /// must fall in. `None` means that side is unbounded.
    pub fn is_valid_by_range(&self) -> bool {
        within(self.root(), None, None)
    }

    /// For a tree that was a BST before two of its keys were swapped, finds those two keys. The
    /// first is returned in in-order position, so it's the larger of the two.
    ///
    /// Returns `None` if the in-order walk is already ascending. On a tree with more damage than a
    /// single swap the result doesn't mean much.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_bst::tree::Tree;
    ///
    /// // 10 and 30 have been swapped.
    /// let tree = Tree::branch(Tree::from_iter([30]), 20, Tree::from_iter([10]));
    ///
    /// assert_eq!(tree.swapped_pair(), Some((&30, &10)));
    /// ```
    pub fn swapped_pair(&self) -> Option<(&K, &K)> {
        let mut first = None;
        let mut second = None;
        let mut keys = self.iter();
        let mut prev = keys.next()?;

        for key in keys {
            if key < prev {
                if first.is_none() {
                    first = Some(prev);
                }
                second = Some(key);
            }
            prev = key;
        }

        first.zip(second)
    }
}

/// `last` is the most recently visited key of the walk so far.
fn ascending<'a, K>(node: Option<&'a Node<K>>, last: &mut Option<&'a K>) -> bool
where
    K: Ord,
{
    let Some(node) = node else {
        return true;
    };
    if !ascending(node.left.as_deref(), last) {
        return false;
    }
    if last.map_or(false, |prev| *prev >= node.key) {
        return false;
    }
    *last = Some(&node.key);
    ascending(node.right.as_deref(), last)
}

fn within<K>(node: Option<&Node<K>>, low: Option<&K>, high: Option<&K>) -> bool
where
    K: Ord,
{
    let Some(node) = node else {
        return true;
    };
    low.map_or(true, |low| *low < node.key)
        && high.map_or(true, |high| node.key < *high)
        && within(node.left.as_deref(), low, Some(&node.key))
        && within(node.right.as_deref(), Some(&node.key), high)
}
