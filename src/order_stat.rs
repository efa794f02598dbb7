//! A BST augmented for order statistics. Each node also stores how many nodes are in its left
//! subtree, which is its own rank within the subtree it roots. That's enough to find the `k`th
//! smallest key, or the rank of a key, in `O(height)` without walking the keys before it.
//!
//! # Examples
//!
//! ```
//! use ordered_bst::order_stat::OrderStatTree;
//!
//! let tree: OrderStatTree<_> = [1, 2, 3, 4, 5].into_iter().collect();
//!
//! assert_eq!(tree.kth_smallest(3), Ok(&3));
//! assert_eq!(tree.rank(&4), Some(4));
//! assert_eq!(tree.len(), 5);
//! ```

use std::cmp::Ordering;

use log::{debug, trace};

use crate::error::Error;

type Link<K> = Option<Box<Node<K>>>;

/// A Binary Search Tree over unique keys that answers rank queries in `O(height)`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OrderStatTree<K> {
    root: Link<K>,
}

impl<K> Default for OrderStatTree<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K> Drop for OrderStatTree<K> {
    fn drop(&mut self) {
        let mut stack: Vec<Box<Node<K>>> = self.root.take().into_iter().collect();
        while let Some(mut node) = stack.pop() {
            stack.extend(node.left.take());
            stack.extend(node.right.take());
        }
    }
}

impl<K> OrderStatTree<K> {
    /// Generate a new, empty `OrderStatTree`.
    pub fn new() -> Self {
        Self { root: None }
    }

    /// How many keys are in the tree. Every node on the right spine accounts for itself and its
    /// left subtree so this only costs `O(height)`.
    pub fn len(&self) -> usize {
        let mut len = 0;
        let mut current = self.root.as_deref();
        while let Some(node) = current {
            len += node.left_count + 1;
            current = node.right.as_deref();
        }
        len
    }

    /// Whether the tree holds no keys.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Returns whether `key` is in the tree.
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

    /// Inserts `key` as a new leaf, bumping the left count of every node it passes on the left.
    /// Returns `false`, leaving every count untouched, if the key was already present.
    pub fn insert(&mut self, key: K) -> bool
    where
        K: Ord,
    {
        // Counts are bumped on the way down so a duplicate has to be ruled out first.
        if self.contains(&key) {
            trace!("insert: ignoring duplicate key");
            return false;
        }

        let mut link = &mut self.root;
        while let Some(node) = link {
            link = if key < node.key {
                node.left_count += 1;
                &mut node.left
            } else {
                &mut node.right
            };
        }
        *link = Some(Box::new(Node::new(key)));
        true
    }

    /// Removes `key` from the tree, returning whether it was present. Uses the same successor
    /// promotion as [`Tree::delete`][crate::tree::Tree::delete] and decrements the left count of
    /// every node whose left subtree shrank.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_bst::order_stat::OrderStatTree;
    ///
    /// let mut tree: OrderStatTree<_> = [50, 30, 70, 20, 40].into_iter().collect();
    ///
    /// assert!(tree.delete(&30));
    /// assert_eq!(tree.kth_smallest(2), Ok(&40));
    /// assert_eq!(tree.len(), 4);
    /// ```
    pub fn delete(&mut self, key: &K) -> bool
    where
        K: Ord,
    {
        let deleted = delete_from(&mut self.root, key);
        if !deleted {
            trace!("delete: key not found");
        }
        deleted
    }

    /// Finds the `k`th smallest key, counting from 1.
    ///
    /// At each node, `left_count + 1` is the node's rank within its subtree. If that's `k` the node
    /// is the answer. If it's more, the answer is on the left. Otherwise it's on the right, `rank`
    /// places further along.
    pub fn kth_smallest(&self, k: usize) -> Result<&K, Error> {
        let mut remaining = k;
        let mut current = self.root.as_deref();
        while let Some(node) = current {
            let rank = node.left_count + 1;
            current = match remaining.cmp(&rank) {
                Ordering::Less => node.left.as_deref(),
                Ordering::Equal => return Ok(&node.key),
                Ordering::Greater => {
                    remaining -= rank;
                    node.right.as_deref()
                }
            };
        }

        Err(Error::RankOutOfRange {
            rank: k,
            len: self.len(),
        })
    }

    /// The 1-based position `key` would have in sorted order, if it's in the tree.
    pub fn rank(&self, key: &K) -> Option<usize>
    where
        K: Ord,
    {
        let mut preceding = 0;
        let mut current = self.root.as_deref();
        while let Some(node) = current {
            current = match key.cmp(&node.key) {
                Ordering::Less => node.left.as_deref(),
                Ordering::Equal => return Some(preceding + node.left_count + 1),
                Ordering::Greater => {
                    preceding += node.left_count + 1;
                    node.right.as_deref()
                }
            };
        }
        None
    }

    /// Visits the keys in ascending order.
    pub fn iter(&self) -> Iter<'_, K> {
        let mut iter = Iter { stack: Vec::new() };
        iter.push_left_spine(self.root.as_deref());
        iter
    }
}

impl<K> FromIterator<K> for OrderStatTree<K>
where
    K: Ord,
{
    fn from_iter<I: IntoIterator<Item = K>>(iter: I) -> Self {
        let mut tree = Self::new();
        for key in iter {
            tree.insert(key);
        }
        tree
    }
}

impl<'a, K> IntoIterator for &'a OrderStatTree<K> {
    type Item = &'a K;
    type IntoIter = Iter<'a, K>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

fn delete_from<K>(link: &mut Link<K>, key: &K) -> bool
where
    K: Ord,
{
    let Some(node) = link else {
        return false;
    };
    match key.cmp(&node.key) {
        Ordering::Less => {
            let deleted = delete_from(&mut node.left, key);
            if deleted {
                node.left_count -= 1;
            }
            deleted
        }
        Ordering::Greater => delete_from(&mut node.right, key),
        Ordering::Equal => {
            match (node.left.take(), node.right.take()) {
                (None, child) | (child, None) => *link = child,
                // The left subtree comes back unchanged so `left_count` still holds.
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

/// Unlinks the smallest node of the subtree rooted at `node`. Every node on the way down loses one
/// node from its left subtree.
fn split_min<K>(mut node: Box<Node<K>>) -> (K, Link<K>) {
    match node.left.take() {
        Some(left) => {
            let (min, rest) = split_min(left);
            node.left = rest;
            node.left_count -= 1;
            (min, Some(node))
        }
        None => {
            let Node { key, right, .. } = *node;
            (key, right)
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
struct Node<K> {
    key: K,
    /// How many nodes are in `left`.
    left_count: usize,
    left: Link<K>,
    right: Link<K>,
}

impl<K> Node<K> {
    fn new(key: K) -> Self {
        Self {
            key,
            left_count: 0,
            left: None,
            right: None,
        }
    }
}

/// An in-order iterator over the keys of an [`OrderStatTree`].
pub struct Iter<'a, K> {
    stack: Vec<&'a Node<K>>,
}

impl<'a, K> Iter<'a, K> {
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
