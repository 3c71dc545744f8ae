//! Lazy traversals over a [`Tree`][crate::Tree].
//!
//! Every traversal keeps its own explicit work list (a stack for the
//! depth-first orders, a queue for breadth-first) instead of recursing, so
//! walking a degenerate tree costs heap memory proportional to its height
//! rather than call-stack frames.
//!
//! Each iterator borrows the tree, yields every key exactly once and is
//! [`ExactSizeIterator`] since the tree's length is known up front.

use std::collections::VecDeque;
use std::iter::FusedIterator;

use crate::node::Node;

/// Depth-first traversal yielding a node before its left and then its right
/// subtree.
///
/// Created by [`Tree::dfs_pre_order`][crate::Tree::dfs_pre_order].
pub struct PreOrder<'a, K> {
    stack: Vec<&'a Node<K>>,
    remaining: usize,
}

impl<'a, K> PreOrder<'a, K> {
    pub(crate) fn new(root: Option<&'a Node<K>>, len: usize) -> Self {
        Self {
            stack: root.into_iter().collect(),
            remaining: len,
        }
    }
}

impl<'a, K> Iterator for PreOrder<'a, K> {
    type Item = &'a K;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        // Right goes in first so the left subtree is popped first.
        self.stack.extend(node.right());
        self.stack.extend(node.left());
        self.remaining -= 1;
        Some(&node.key)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

/// Depth-first traversal yielding the left subtree, then the node, then the
/// right subtree. For a BST this is ascending key order.
///
/// Created by [`Tree::dfs_in_order`][crate::Tree::dfs_in_order] and
/// [`Tree::iter`][crate::Tree::iter].
pub struct InOrder<'a, K> {
    /// Nodes whose left subtree is being (or has been) visited but which
    /// haven't been yielded themselves.
    stack: Vec<&'a Node<K>>,
    remaining: usize,
}

impl<'a, K> InOrder<'a, K> {
    pub(crate) fn new(root: Option<&'a Node<K>>, len: usize) -> Self {
        let mut iter = Self {
            stack: Vec::new(),
            remaining: len,
        };
        iter.push_left_spine(root);
        iter
    }

    fn push_left_spine(&mut self, mut node: Option<&'a Node<K>>) {
        while let Some(n) = node {
            self.stack.push(n);
            node = n.left();
        }
    }
}

impl<'a, K> Iterator for InOrder<'a, K> {
    type Item = &'a K;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.push_left_spine(node.right());
        self.remaining -= 1;
        Some(&node.key)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

/// Depth-first traversal yielding the left subtree, then the right subtree,
/// then the node.
///
/// Created by [`Tree::dfs_post_order`][crate::Tree::dfs_post_order].
pub struct PostOrder<'a, K> {
    /// Each entry records whether the node's children are already on the
    /// stack above it.
    stack: Vec<(&'a Node<K>, bool)>,
    remaining: usize,
}

impl<'a, K> PostOrder<'a, K> {
    pub(crate) fn new(root: Option<&'a Node<K>>, len: usize) -> Self {
        Self {
            stack: root.map(|n| (n, false)).into_iter().collect(),
            remaining: len,
        }
    }
}

impl<'a, K> Iterator for PostOrder<'a, K> {
    type Item = &'a K;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some((node, expanded)) = self.stack.pop() {
            if expanded {
                self.remaining -= 1;
                return Some(&node.key);
            }
            self.stack.push((node, true));
            self.stack.extend(node.right().map(|n| (n, false)));
            self.stack.extend(node.left().map(|n| (n, false)));
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

/// Breadth-first traversal yielding the root, then every node at depth 1 from
/// left to right, then depth 2, and so on.
///
/// Created by [`Tree::bfs`][crate::Tree::bfs].
pub struct LevelOrder<'a, K> {
    queue: VecDeque<&'a Node<K>>,
    remaining: usize,
}

impl<'a, K> LevelOrder<'a, K> {
    pub(crate) fn new(root: Option<&'a Node<K>>, len: usize) -> Self {
        Self {
            queue: root.into_iter().collect(),
            remaining: len,
        }
    }
}

impl<'a, K> Iterator for LevelOrder<'a, K> {
    type Item = &'a K;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.queue.pop_front()?;
        self.queue.extend(node.left());
        self.queue.extend(node.right());
        self.remaining -= 1;
        Some(&node.key)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

macro_rules! impl_traversal_traits {
    ($($traversal:ident { $work:ident }),*) => {
        $(
            impl<K> ExactSizeIterator for $traversal<'_, K> {}
            impl<K> FusedIterator for $traversal<'_, K> {}

            impl<K> Clone for $traversal<'_, K> {
                fn clone(&self) -> Self {
                    Self {
                        $work: self.$work.clone(),
                        remaining: self.remaining,
                    }
                }
            }
        )*
    };
}

impl_traversal_traits!(
    PreOrder { stack },
    InOrder { stack },
    PostOrder { stack },
    LevelOrder { queue }
);
