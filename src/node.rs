use std::cmp::Ordering;
use std::fmt;

/// An owned, possibly empty, child slot.
pub(crate) type Link<K> = Option<Box<Node<K>>>;

/// A `Node` has a key that is used for searching/sorting and up to two
/// children. Children are exclusively owned: a subtree belongs to exactly one
/// parent slot (or to a [`Tree`][crate::Tree]'s root slot).
///
/// Nodes can be built by hand to seed a tree with a known shape via
/// [`Tree::from_root`][crate::Tree::from_root], but once inside a tree they
/// can only be inspected, never mutated, from outside the crate.
///
/// Cloning walks the subtree with an explicit stack. `Debug` prints only this
/// node's key and its children's keys, so neither recurses down a deep tree.
/// A free-standing `Node` (one never handed to a `Tree`) is dropped
/// recursively, one frame per level.
pub struct Node<K> {
    pub(crate) key: K,
    pub(crate) left: Link<K>,
    pub(crate) right: Link<K>,
}

impl<K> Clone for Node<K>
where
    K: Clone,
{
    fn clone(&self) -> Self {
        Self {
            key: self.key.clone(),
            left: clone_link(&self.left),
            right: clone_link(&self.right),
        }
    }
}

impl<K> fmt::Debug for Node<K>
where
    K: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Node")
            .field("key", &self.key)
            .field("left", &self.left().map(Node::key))
            .field("right", &self.right().map(Node::key))
            .finish()
    }
}

/// Deep-copies the subtree in `link` bottom-up. Children are built before
/// their parent, so finished copies wait on `built` until the parent claims
/// them.
pub(crate) fn clone_link<K>(link: &Link<K>) -> Link<K>
where
    K: Clone,
{
    let mut built: Vec<Box<Node<K>>> = Vec::new();
    let mut stack: Vec<(&Node<K>, bool)> =
        link.as_deref().map(|n| (n, false)).into_iter().collect();

    while let Some((node, expanded)) = stack.pop() {
        if !expanded {
            stack.push((node, true));
            stack.extend(node.right().map(|n| (n, false)));
            stack.extend(node.left().map(|n| (n, false)));
            continue;
        }

        // The left copy was finished first so the right one is on top.
        let right = if node.right.is_some() { built.pop() } else { None };
        let left = if node.left.is_some() { built.pop() } else { None };
        built.push(Box::new(Node {
            key: node.key.clone(),
            left,
            right,
        }));
    }

    built.pop()
}

impl<K> Node<K> {
    /// Construct a new leaf `Node` holding `key`.
    pub fn new(key: K) -> Self {
        Self {
            key,
            left: None,
            right: None,
        }
    }

    /// Construct a `Node` holding `key` with pre-built children.
    ///
    /// The caller is responsible for the ordering of the children: every key
    /// in `left` must be less than `key` and every key in `right` greater.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst::Node;
    ///
    /// let node = Node::with_children(2, Some(Node::new(1)), Some(Node::new(3)));
    /// assert_eq!(node.left().map(Node::key), Some(&1));
    /// assert_eq!(node.right().map(Node::key), Some(&3));
    /// ```
    pub fn with_children(key: K, left: Option<Node<K>>, right: Option<Node<K>>) -> Self {
        Self {
            key,
            left: left.map(Box::new),
            right: right.map(Box::new),
        }
    }

    /// The key stored in this node.
    pub fn key(&self) -> &K {
        &self.key
    }

    /// The root of the left subtree, if any.
    pub fn left(&self) -> Option<&Self> {
        self.left.as_deref()
    }

    /// The root of the right subtree, if any.
    pub fn right(&self) -> Option<&Self> {
        self.right.as_deref()
    }

    /// Inserts `key` below this node by recursing into the subtree that must
    /// contain it. Returns `false` if the key is already present.
    pub(crate) fn insert(&mut self, key: K) -> bool
    where
        K: Ord,
    {
        let child = match key.cmp(&self.key) {
            Ordering::Less => &mut self.left,
            Ordering::Equal => return false,
            Ordering::Greater => &mut self.right,
        };
        let inserted = match child {
            Some(node) => node.insert(key),
            None => {
                *child = Some(Box::new(Self::new(key)));
                true
            }
        };

        if cfg!(debug_assertions) {
            if let Some(left) = self.left() {
                assert!(self.key > left.key);
            }
            if let Some(right) = self.right() {
                assert!(self.key < right.key);
            }
        }
        inserted
    }

    pub(crate) fn find(&self, key: &K) -> Option<&K>
    where
        K: Ord,
    {
        match key.cmp(&self.key) {
            Ordering::Less => self.left().and_then(|n| n.find(key)),
            Ordering::Equal => Some(&self.key),
            Ordering::Greater => self.right().and_then(|n| n.find(key)),
        }
    }

    /// Follows left children down to the node holding the subtree's minimum.
    pub(crate) fn leftmost(&self) -> &Self {
        let mut node = self;
        while let Some(left) = node.left() {
            node = left;
        }
        node
    }

    /// Follows right children down to the node holding the subtree's maximum.
    pub(crate) fn rightmost(&self) -> &Self {
        let mut node = self;
        while let Some(right) = node.right() {
            node = right;
        }
        node
    }

    /// Detaches the minimum node of the subtree in `link`, splicing its right
    /// child into its place. The returned node has no children.
    pub(crate) fn take_min(mut link: &mut Link<K>) -> Option<Box<Self>> {
        while link.as_ref().is_some_and(|node| node.left.is_some()) {
            link = &mut link.as_mut()?.left;
        }
        let mut min = link.take()?;
        *link = min.right.take();
        Some(min)
    }
}
