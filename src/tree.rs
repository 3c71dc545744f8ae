//! A mutable, unbalanced BST. Nodes own their children through `Box`es so the
//! whole structure is owned by the `Tree` and nothing is ever shared.
//!
//! # Examples
//!
//! ```
//! use bst::Tree;
//!
//! let mut tree = Tree::new();
//!
//! // Nothing in here yet.
//! assert_eq!(tree.find(&1), None);
//!
//! tree.insert(1);
//! assert_eq!(tree.find(&1), Some(&1));
//!
//! // Inserting the same key again changes nothing.
//! assert!(!tree.insert(1));
//! assert_eq!(tree.len(), 1);
//!
//! // Removing a node returns its key.
//! assert_eq!(tree.remove(&1), Some(1));
//! assert_eq!(tree.find(&1), None);
//! assert!(tree.is_empty());
//! ```

use std::cmp::Ordering;
use std::fmt;
use std::mem;

use tracing::trace;

use crate::iter::{InOrder, LevelOrder, PostOrder, PreOrder};
use crate::node::{clone_link, Link, Node};

/// An unbalanced Binary Search Tree of unique keys. This can be used for
/// inserting, finding, removing and traversing keys.
///
/// Nothing keeps the tree balanced: inserting keys in sorted order produces a
/// tree shaped like a linked list. Every operation except the `*_recursive`
/// variants is iterative, so such degenerate trees are slow but never
/// overflow the stack.
pub struct Tree<K> {
    root: Link<K>,
    len: usize,
}

impl<K> Default for Tree<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K> Clone for Tree<K>
where
    K: Clone,
{
    fn clone(&self) -> Self {
        Self {
            root: clone_link(&self.root),
            len: self.len,
        }
    }
}

impl<K> Drop for Tree<K> {
    fn drop(&mut self) {
        free(self.root.take());
    }
}

impl<K> fmt::Debug for Tree<K>
where
    K: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

/// Two trees are equal when they hold the same keys, whatever their shapes.
impl<K> PartialEq for Tree<K>
where
    K: PartialEq,
{
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl<K> Eq for Tree<K> where K: Eq {}

impl<K> Tree<K> {
    /// Generate a new, empty `Tree`.
    pub fn new() -> Self {
        Self { root: None, len: 0 }
    }

    /// Builds a tree around an already assembled root [`Node`]. Mostly useful
    /// for tests that need a tree of a precise shape.
    ///
    /// The caller must make sure `root` satisfies the BST ordering; this is
    /// only checked in debug builds.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst::{Node, Tree};
    ///
    /// let root = Node::with_children(2, Some(Node::new(1)), Some(Node::new(3)));
    /// let tree = Tree::from_root(root);
    ///
    /// assert_eq!(tree.len(), 3);
    /// assert_eq!(tree.bfs().copied().collect::<Vec<_>>(), [2, 1, 3]);
    /// ```
    pub fn from_root(root: Node<K>) -> Self
    where
        K: Ord,
    {
        let len = count(&root);
        let tree = Self {
            root: Some(Box::new(root)),
            len,
        };
        debug_assert!(
            tree.iter().zip(tree.iter().skip(1)).all(|(a, b)| a < b),
            "`Tree::from_root` given a root that violates the BST ordering"
        );
        trace!(len, "seeded tree from a pre-built root");
        tree
    }

    /// The number of keys in the tree.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the tree holds no keys.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// The root node, for inspecting the shape of the tree.
    pub fn root(&self) -> Option<&Node<K>> {
        self.root.as_deref()
    }

    /// Removes every key from the tree.
    pub fn clear(&mut self) {
        free(self.root.take());
        self.len = 0;
        trace!("cleared tree");
    }

    /// Inserts `key` into the tree, walking down from the root with a cursor
    /// until an empty slot is found. Inserting a key that is already present
    /// leaves the tree unchanged.
    ///
    /// Returns whether a new node was created.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst::Tree;
    ///
    /// let mut tree = Tree::new();
    ///
    /// assert!(tree.insert(1));
    /// assert!(!tree.insert(1));
    /// assert_eq!(tree.len(), 1);
    /// ```
    pub fn insert(&mut self, key: K) -> bool
    where
        K: Ord,
    {
        let slot = slot_mut(&mut self.root, &key);
        if slot.is_some() {
            return false;
        }
        *slot = Some(Box::new(Node::new(key)));
        self.len += 1;
        trace!(len = self.len, "attached new node");
        true
    }

    /// Does exactly what [`Tree::insert`] does but descends by recursing into
    /// the subtree that must hold `key`. Both produce identical trees for the
    /// same sequence of keys.
    ///
    /// Recursion depth is the height of the tree.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst::Tree;
    ///
    /// let mut iterative = Tree::new();
    /// let mut recursive = Tree::new();
    /// for key in [3, 1, 2, 5, 4] {
    ///     iterative.insert(key);
    ///     recursive.insert_recursive(key);
    /// }
    ///
    /// assert!(iterative.dfs_pre_order().eq(recursive.dfs_pre_order()));
    /// ```
    pub fn insert_recursive(&mut self, key: K) -> bool
    where
        K: Ord,
    {
        let inserted = match &mut self.root {
            Some(root) => root.insert(key),
            None => {
                self.root = Some(Box::new(Node::new(key)));
                true
            }
        };
        if inserted {
            self.len += 1;
            trace!(len = self.len, "attached new node");
        }
        inserted
    }

    /// Potentially finds the given key in this tree. If no node has the
    /// corresponding key, `None` is returned. Only the path from the root to
    /// where the key would live is visited.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst::Tree;
    ///
    /// let mut tree = Tree::new();
    /// tree.insert(1);
    ///
    /// assert_eq!(tree.find(&1), Some(&1));
    /// assert_eq!(tree.find(&42), None);
    /// ```
    pub fn find(&self, key: &K) -> Option<&K>
    where
        K: Ord,
    {
        let mut link = &self.root;
        while let Some(node) = link {
            link = match key.cmp(&node.key) {
                Ordering::Less => &node.left,
                Ordering::Equal => return Some(&node.key),
                Ordering::Greater => &node.right,
            };
        }
        None
    }

    /// The recursive twin of [`Tree::find`]. Recursion depth is the height of
    /// the tree.
    pub fn find_recursive(&self, key: &K) -> Option<&K>
    where
        K: Ord,
    {
        self.root().and_then(|root| root.find(key))
    }

    /// Whether `key` is in the tree.
    pub fn contains(&self, key: &K) -> bool
    where
        K: Ord,
    {
        self.find(key).is_some()
    }

    /// Removes the node containing the given key from the tree and returns
    /// the key. If the tree does not contain the key, nothing happens.
    ///
    /// A node with one child is replaced by that child. A node with two
    /// children takes the key of its in-order successor, and the successor
    /// node is unlinked instead.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst::Tree;
    ///
    /// let mut tree: Tree<_> = [2, 1, 3].into_iter().collect();
    ///
    /// assert_eq!(tree.remove(&2), Some(2));
    /// assert_eq!(tree.remove(&2), None);
    ///
    /// // 3 was the successor of 2 so it now sits at the root.
    /// assert_eq!(tree.root().map(|n| *n.key()), Some(3));
    /// ```
    pub fn remove(&mut self, key: &K) -> Option<K>
    where
        K: Ord,
    {
        let slot = slot_mut(&mut self.root, key);
        let target = slot.as_mut()?;

        if target.left.is_some() {
            if let Some(successor) = Node::take_min(&mut target.right) {
                self.len -= 1;
                trace!(len = self.len, case = "two children", "removed node");
                return Some(mem::replace(&mut target.key, successor.key));
            }
        }

        let mut target = slot.take()?;
        let case = if target.left.is_none() && target.right.is_none() {
            "leaf"
        } else {
            "one child"
        };
        *slot = target.left.take().or_else(|| target.right.take());
        self.len -= 1;
        trace!(len = self.len, case, "removed node");
        Some(target.key)
    }

    /// Visits every key in pre-order: a node, then its left subtree, then its
    /// right subtree.
    pub fn dfs_pre_order(&self) -> PreOrder<'_, K> {
        PreOrder::new(self.root(), self.len)
    }

    /// Visits every key in in-order: the left subtree, then the node, then
    /// the right subtree. This yields the keys in ascending order.
    pub fn dfs_in_order(&self) -> InOrder<'_, K> {
        InOrder::new(self.root(), self.len)
    }

    /// Visits every key in post-order: the left subtree, then the right
    /// subtree, then the node.
    pub fn dfs_post_order(&self) -> PostOrder<'_, K> {
        PostOrder::new(self.root(), self.len)
    }

    /// Visits every key level by level, left to right within a level.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst::Tree;
    ///
    /// let tree: Tree<_> = [5, 3, 8, 1, 4, 7, 9].into_iter().collect();
    ///
    /// assert_eq!(tree.bfs().copied().collect::<Vec<_>>(), [5, 3, 8, 1, 4, 7, 9]);
    /// ```
    pub fn bfs(&self) -> LevelOrder<'_, K> {
        LevelOrder::new(self.root(), self.len)
    }

    /// Iterates over the keys in ascending order. Same as [`Tree::dfs_in_order`].
    pub fn iter(&self) -> InOrder<'_, K> {
        self.dfs_in_order()
    }

    /// The smallest key in the tree.
    pub fn min(&self) -> Option<&K> {
        self.root().map(|root| &root.leftmost().key)
    }

    /// The largest key in the tree.
    pub fn max(&self) -> Option<&K> {
        self.root().map(|root| &root.rightmost().key)
    }

    /// The largest key that is smaller than [`Tree::max`]. A tree needs at
    /// least two keys to have one.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst::Tree;
    ///
    /// let mut tree: Tree<_> = [5, 3, 8, 7].into_iter().collect();
    /// assert_eq!(tree.second_highest(), Some(&7));
    ///
    /// tree.remove(&7);
    /// assert_eq!(tree.second_highest(), Some(&5));
    ///
    /// let single: Tree<_> = [5].into_iter().collect();
    /// assert_eq!(single.second_highest(), None);
    /// ```
    pub fn second_highest(&self) -> Option<&K> {
        let mut parent = None;
        let mut node = self.root()?;
        while let Some(right) = node.right() {
            parent = Some(node);
            node = right;
        }

        // The maximum has no right child, so its predecessor is either the
        // largest key on its left or the last node we turned right at.
        match node.left() {
            Some(left) => Some(&left.rightmost().key),
            None => parent.map(|p| &p.key),
        }
    }

    /// The number of levels in the tree. An empty tree has height 0 and a
    /// lone root has height 1.
    pub fn height(&self) -> usize {
        self.fold_heights(|_, _| true).unwrap_or(0)
    }

    /// Whether, at every node, the heights of the left and right subtrees
    /// differ by at most one. The empty tree is balanced.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst::Tree;
    ///
    /// let bushy: Tree<_> = [2, 1, 3].into_iter().collect();
    /// assert!(bushy.is_balanced());
    ///
    /// let degenerate: Tree<_> = [1, 2, 3].into_iter().collect();
    /// assert!(!degenerate.is_balanced());
    /// ```
    pub fn is_balanced(&self) -> bool {
        self.fold_heights(|left, right| left.abs_diff(right) <= 1).is_some()
    }

    /// Walks the tree bottom-up computing the height of every subtree. `visit`
    /// is given the left and right subtree heights of each node and can stop
    /// the walk early by returning `false`, in which case this returns `None`.
    fn fold_heights(&self, mut visit: impl FnMut(usize, usize) -> bool) -> Option<usize> {
        let mut heights = Vec::new();
        let mut stack: Vec<(&Node<K>, bool)> =
            self.root().map(|n| (n, false)).into_iter().collect();

        while let Some((node, expanded)) = stack.pop() {
            if !expanded {
                stack.push((node, true));
                stack.extend(node.right().map(|n| (n, false)));
                stack.extend(node.left().map(|n| (n, false)));
                continue;
            }

            // The left subtree finished first so the right one's height is on top.
            let right = if node.right.is_some() { heights.pop()? } else { 0 };
            let left = if node.left.is_some() { heights.pop()? } else { 0 };
            if !visit(left, right) {
                return None;
            }
            heights.push(left.max(right) + 1);
        }

        Some(heights.pop().unwrap_or(0))
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
    type IntoIter = InOrder<'a, K>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Descends from `link` to the slot that holds `key`, or to the empty slot
/// where it would be attached. The slot's owner is the parent of the node.
fn slot_mut<'a, K>(mut link: &'a mut Link<K>, key: &K) -> &'a mut Link<K>
where
    K: Ord,
{
    loop {
        let ordering = match link.as_deref() {
            Some(node) => key.cmp(&node.key),
            None => return link,
        };
        link = match (ordering, link) {
            (Ordering::Less, Some(node)) => &mut node.left,
            (Ordering::Greater, Some(node)) => &mut node.right,
            (_, link) => return link,
        };
    }
}

fn count<K>(root: &Node<K>) -> usize {
    let mut stack = vec![root];
    let mut len = 0;
    while let Some(node) = stack.pop() {
        len += 1;
        stack.extend(node.left());
        stack.extend(node.right());
    }
    len
}

/// Tears a subtree down one node at a time. Letting the `Box`es drop
/// recursively would overflow the stack on a degenerate tree.
fn free<K>(root: Link<K>) {
    let mut stack: Vec<Box<Node<K>>> = root.into_iter().collect();
    while let Some(mut node) = stack.pop() {
        stack.extend(node.left.take());
        stack.extend(node.right.take());
    }
}
