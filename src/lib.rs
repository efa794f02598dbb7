//! This crate exposes an unbalanced Binary Search Tree and an order-statistic variant of it,
//! mostly for educational purposes.
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is a data structure supporting operations to
//! insert, find, and delete stored keys. BSTs are typically defined
//! recursively using the notion of a `Node`. A `Node` stores a key and
//! sometimes has child `Node`s. The most important invariants of a BST are:
//!
//! 1. For every `Node` in a BST, all the `Node`s in its left subtree have a
//!    key less than its own key.
//! 2. For every `Node` in a BST, all the `Node`s in its right subtree have a
//!    key greater than its own key.
//!
//! > Note that some `Node`s have no children. These `Node`s are called "leaf nodes".
//!
//! Searching for a key takes `O(height)` (where `height` is the longest path from
//! the root `Node` to a leaf `Node`). Nothing in this crate rebalances so inserting
//! keys in sorted order builds a chain with `height == len`. BSTs also naturally
//! support sorted iteration by visiting the left subtree, then the subtree root,
//! then the right subtree.
//!
//! ## Modules
//!
//! - [`tree`]: the BST itself with search, insert, delete, floor/ceiling and iteration.
//! - [`validate`]: checks whether an arbitrary binary tree satisfies the invariants.
//! - [`order_stat`]: a BST whose nodes count their left subtree, giving `O(height)` rank queries.
//! - [`queries`] and [`views`]: classic exercises built on top of [`tree::Tree`].
//!
//! Absence is never an error here: lookups return `false` or `None` for missing keys and deleting
//! a missing key leaves the tree untouched. The library logs through the [`log`] facade and never
//! logs keys.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

pub mod error;
pub mod order_stat;
pub mod queries;
pub mod tree;
pub mod validate;
pub mod views;

pub use error::Error;
