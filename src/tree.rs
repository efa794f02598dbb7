//! An unbalanced Binary Search Tree. Every `Node` is exclusively owned by its parent's link (or by
//! the `Tree` itself for the root) so the structure can never share nodes or contain cycles.
//!
//! Nothing here rebalances. Inserting keys in sorted order produces a chain whose height equals
//! its length and every operation degrades to `O(n)` accordingly.
//!
//! # Examples
//!
//! ```
//! use ordered_bst::tree::Tree;
//!
//! let mut tree = Tree::new();
//!
//! // Nothing in here yet.
//! assert!(!tree.contains(&1));
//!
//! assert!(tree.insert(1));
//! assert!(tree.contains(&1));
//!
//! // Inserting a key that's already present is ignored.
//! assert!(!tree.insert(1));
//! assert_eq!(tree.len(), 1);
//!
//! // Deleting reports whether the key was there.
//! assert!(tree.delete(&1));
//! assert!(!tree.delete(&1));
//! assert!(tree.is_empty());
//! ```

use std::cmp::Ordering;
use std::fmt;

use log::{debug, trace};

use crate::error::Error;

/// An owning pointer to a subtree. `None` marks the empty subtree below a leaf.
pub(crate) type Link<K> = Option<Box<Node<K>>>;

/// A Binary Search Tree over unique keys.
#[derive(Clone, PartialEq, Eq)]
pub struct Tree<K> {
    root: Link<K>,
    len: usize,
}

impl<K> Default for Tree<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K> Drop for Tree<K> {
    // Children are unlinked before their parent is dropped so a skewed tree doesn't recurse once
    // per level.
    fn drop(&mut self) {
        let mut stack: Vec<Box<Node<K>>> = self.root.take().into_iter().collect();
        while let Some(mut node) = stack.pop() {
            stack.extend(node.left.take());
            stack.extend(node.right.take());
        }
    }
}

impl<K> fmt::Debug for Tree<K>
where
    K: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Tree")
            .field("len", &self.len)
            .field("root", &self.root)
            .finish()
    }
}

impl<K> Tree<K> {
    /// Generate a new, empty `Tree`.
    pub fn new() -> Self {
        Self { root: None, len: 0 }
    }

    /// Builds a tree with `key` at the root and the given subtrees as its children.
    ///
    /// No ordering is checked. This can build any binary tree, including ones that break the BST
    /// property (see [`Tree::is_valid`]).
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_bst::tree::Tree;
    ///
    /// let good = Tree::branch(Tree::from_iter([1]), 2, Tree::from_iter([3]));
    /// assert!(good.is_valid());
    ///
    /// let bad = Tree::branch(Tree::from_iter([3]), 2, Tree::from_iter([1]));
    /// assert!(!bad.is_valid());
    /// ```
    pub fn branch(mut left: Self, key: K, mut right: Self) -> Self {
        let len = left.len + right.len + 1;
        Self {
            root: Some(Box::new(Node {
                key,
                left: left.root.take(),
                right: right.root.take(),
            })),
            len,
        }
    }

    /// How many keys are in the tree.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the tree holds no keys.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// The number of nodes on the longest path from the root to a leaf. An empty tree has a
    /// height of 0.
    pub fn height(&self) -> usize {
        self.root.as_ref().map_or(0, |n| n.height())
    }

    /// Returns whether `key` is in the tree.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_bst::tree::Tree;
    ///
    /// let tree: Tree<_> = [5, 3, 8].into_iter().collect();
    ///
    /// assert!(tree.contains(&3));
    /// assert!(!tree.contains(&42));
    /// ```
    pub fn contains(&self, key: &K) -> bool
    where
        K: Ord,
    {
        let mut current = self.root.as_deref();
        while let Some(node) = current {
            current = match key.cmp(&node.key) {
                Ordering::Less => node.left.as_deref(),
                Ordering::Equal => return true,
                Ordering::Greater => node.right.as_deref(),
            };
        }
        false
    }

    /// Inserts `key` as a new leaf. Returns `false`, leaving the tree untouched, if the key was
    /// already present.
    pub fn insert(&mut self, key: K) -> bool
    where
        K: Ord,
    {
        let mut link = &mut self.root;
        while let Some(node) = link {
            link = match key.cmp(&node.key) {
                Ordering::Less => &mut node.left,
                Ordering::Equal => {
                    trace!("insert: ignoring duplicate key");
                    return false;
                }
                Ordering::Greater => &mut node.right,
            };
        }
        *link = Some(Box::new(Node::new(key)));
        self.len += 1;
        true
    }

    /// Removes `key` from the tree, returning whether it was present.
    ///
    /// A node with two children takes the key of its in-order successor (the leftmost node of its
    /// right subtree) and the successor's node is unlinked instead. The successor never has a left
    /// child so unlinking it is always the simple case.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_bst::tree::Tree;
    ///
    /// let mut tree: Tree<_> = [5, 3, 8, 1, 4, 7, 9].into_iter().collect();
    ///
    /// assert!(tree.delete(&3));
    /// assert!(tree.delete(&8));
    /// assert!(tree.is_valid());
    /// assert_eq!(tree.iter().copied().collect::<Vec<_>>(), [1, 4, 5, 7, 9]);
    /// ```
    pub fn delete(&mut self, key: &K) -> bool
    where
        K: Ord,
    {
        let deleted = delete_from(&mut self.root, key);
        if deleted {
            self.len -= 1;
        } else {
            trace!("delete: key not found");
        }
        deleted
    }

    /// The greatest key less than or equal to `key`.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_bst::tree::Tree;
    ///
    /// let tree: Tree<_> = [10, 5, 15].into_iter().collect();
    ///
    /// assert_eq!(tree.floor(&12), Some(&10));
    /// assert_eq!(tree.floor(&15), Some(&15));
    /// assert_eq!(tree.floor(&4), None);
    /// ```
    pub fn floor(&self, key: &K) -> Option<&K>
    where
        K: Ord,
    {
        let mut best = None;
        let mut current = self.root.as_deref();
        while let Some(node) = current {
            current = match key.cmp(&node.key) {
                Ordering::Less => node.left.as_deref(),
                Ordering::Equal => return Some(&node.key),
                Ordering::Greater => {
                    best = Some(&node.key);
                    node.right.as_deref()
                }
            };
        }
        best
    }

    /// The smallest key greater than or equal to `key`.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_bst::tree::Tree;
    ///
    /// let tree: Tree<_> = [10, 5, 15].into_iter().collect();
    ///
    /// assert_eq!(tree.ceiling(&12), Some(&15));
    /// assert_eq!(tree.ceiling(&5), Some(&5));
    /// assert_eq!(tree.ceiling(&16), None);
    /// ```
    pub fn ceiling(&self, key: &K) -> Option<&K>
    where
        K: Ord,
    {
        let mut best = None;
        let mut current = self.root.as_deref();
        while let Some(node) = current {
            current = match key.cmp(&node.key) {
                Ordering::Less => {
                    best = Some(&node.key);
                    node.left.as_deref()
                }
                Ordering::Equal => return Some(&node.key),
                Ordering::Greater => node.right.as_deref(),
            };
        }
        best
    }

    /// The smallest key in the tree.
    pub fn min(&self) -> Option<&K> {
        let mut node = self.root.as_deref()?;
        while let Some(left) = node.left.as_deref() {
            node = left;
        }
        Some(&node.key)
    }

    /// The largest key in the tree.
    pub fn max(&self) -> Option<&K> {
        let mut node = self.root.as_deref()?;
        while let Some(right) = node.right.as_deref() {
            node = right;
        }
        Some(&node.key)
    }

    /// Finds the `k`th smallest key (1-based) by counting nodes during an in-order walk. This
    /// costs `O(height + k)`. See [`OrderStatTree`][crate::order_stat::OrderStatTree] for the
    /// `O(height)` version.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_bst::tree::Tree;
    ///
    /// let tree: Tree<_> = [20, 8, 22, 4, 12].into_iter().collect();
    ///
    /// assert_eq!(tree.kth_smallest(3), Ok(&12));
    /// assert!(tree.kth_smallest(6).is_err());
    /// ```
    pub fn kth_smallest(&self, k: usize) -> Result<&K, Error> {
        let out_of_range = Error::RankOutOfRange {
            rank: k,
            len: self.len,
        };
        if k == 0 || k > self.len {
            return Err(out_of_range);
        }

        let mut visited = 0;
        nth_in_order(self.root.as_deref(), k, &mut visited).ok_or(out_of_range)
    }

    /// Visits the keys in ascending order.
    pub fn iter(&self) -> Iter<'_, K> {
        Iter::new(self)
    }

    pub(crate) fn root(&self) -> Option<&Node<K>> {
        self.root.as_deref()
    }
}

impl<K> FromIterator<K> for Tree<K>
where
    K: Ord,
{
    fn from_iter<I: IntoIterator<Item = K>>(iter: I) -> Self {
        let mut tree = Self::new();
        tree.extend(iter);
        tree
    }
}

impl<K> Extend<K> for Tree<K>
where
    K: Ord,
{
    fn extend<I: IntoIterator<Item = K>>(&mut self, iter: I) {
        for key in iter {
            self.insert(key);
        }
    }
}

impl<'a, K> IntoIterator for &'a Tree<K> {
    type Item = &'a K;
    type IntoIter = Iter<'a, K>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// `visited` counts the nodes seen so far across the whole walk.
fn nth_in_order<'a, K>(node: Option<&'a Node<K>>, k: usize, visited: &mut usize) -> Option<&'a K> {
    let node = node?;
    if let Some(found) = nth_in_order(node.left.as_deref(), k, visited) {
        return Some(found);
    }

    *visited += 1;
    if *visited == k {
        return Some(&node.key);
    }
    nth_in_order(node.right.as_deref(), k, visited)
}

fn delete_from<K>(link: &mut Link<K>, key: &K) -> bool
where
    K: Ord,
{
    let Some(node) = link else {
        return false;
    };
    match key.cmp(&node.key) {
        Ordering::Less => delete_from(&mut node.left, key),
        Ordering::Greater => delete_from(&mut node.right, key),
        Ordering::Equal => {
            match (node.left.take(), node.right.take()) {
                (None, child) | (child, None) => *link = child,
                (Some(left), Some(right)) => {
                    debug!("delete: promoting in-order successor");
                    let (successor, rest) = split_min(right);
                    node.key = successor;
                    node.left = Some(left);
                    node.right = rest;
                }
            }
            true
        }
    }
}

/// Unlinks the smallest node of the subtree rooted at `node`. Returns its key and what's left of
/// the subtree.
fn split_min<K>(mut node: Box<Node<K>>) -> (K, Link<K>) {
    match node.left.take() {
        Some(left) => {
            let (min, rest) = split_min(left);
            node.left = rest;
            (min, Some(node))
        }
        None => {
            let Node { key, right, .. } = *node;
            (key, right)
        }
    }
}

/// A `Node` holds a key and up to two children.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct Node<K> {
    pub(crate) key: K,
    pub(crate) left: Link<K>,
    pub(crate) right: Link<K>,
}

impl<K> Node<K> {
    fn new(key: K) -> Self {
        Self {
            key,
            left: None,
            right: None,
        }
    }

    fn height(&self) -> usize {
        let left_height = self.left.as_ref().map_or(0, |n| n.height());
        let right_height = self.right.as_ref().map_or(0, |n| n.height());
        left_height.max(right_height) + 1
    }
}

/// An in-order iterator over the keys of a [`Tree`]. It holds the left spine of the unvisited
/// part of the tree so it uses `O(height)` memory.
pub struct Iter<'a, K> {
    stack: Vec<&'a Node<K>>,
}

impl<'a, K> Iter<'a, K> {
    fn new(tree: &'a Tree<K>) -> Self {
        let mut iter = Self { stack: Vec::new() };
        iter.push_left_spine(tree.root());
        iter
    }

    fn push_left_spine(&mut self, mut node: Option<&'a Node<K>>) {
        while let Some(n) = node {
            self.stack.push(n);
            node = n.left.as_deref();
        }
    }
}

impl<'a, K> Iterator for Iter<'a, K> {
    type Item = &'a K;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.push_left_spine(node.right.as_deref());
        Some(&node.key)
    }
}
