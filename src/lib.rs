//! This crate exposes a plain, unbalanced Binary Search Tree (BST) over any
//! totally ordered key type.
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is a data structure supporting operations to
//! insert, find, and remove stored keys. BSTs are typically defined
//! recursively using the notion of a `Node`. A `Node` stores a key and
//! will sometimes have child `Node`s. The most important invariants of a BST are:
//!
//! 1. For every `Node` in a BST, all the `Node`s in its left subtree have a
//!    key less than its own key.
//! 2. For every `Node` in a BST, all the `Node`s in its right subtree have a
//!    key greater than its own key.
//!
//! > Note that some `Node`s have no children. These `Node`s are called "leaf nodes".
//!
//! Searching for keys in the tree takes `O(height)` (where `height` is defined as
//! the longest path from the root `Node` to a leaf `Node`). This tree does no
//! rebalancing, so inserting keys in sorted order produces a degenerate tree of
//! height `N`. BSTs also naturally support sorted iteration by visiting the
//! left subtree, then the subtree root, then the right subtree.
//!
//! # Examples
//!
//! ```
//! use bst::Tree;
//!
//! let mut tree: Tree<i32> = [5, 3, 8, 1, 4, 7, 9].into_iter().collect();
//!
//! assert_eq!(tree.find(&4), Some(&4));
//! assert_eq!(tree.dfs_in_order().copied().collect::<Vec<_>>(), [1, 3, 4, 5, 7, 8, 9]);
//! assert_eq!(tree.bfs().copied().collect::<Vec<_>>(), [5, 3, 8, 1, 4, 7, 9]);
//!
//! // Removing a node with two children promotes its in-order successor.
//! assert_eq!(tree.remove(&5), Some(5));
//! assert_eq!(tree.root().map(|n| *n.key()), Some(7));
//! ```

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

pub mod iter;
mod node;
mod tree;

#[cfg(test)]
mod test;

pub use node::Node;
pub use tree::Tree;
