//! A Binary Search Tree that is balanced when it is built and stays that way
//! only until it is mutated. Insertion and deletion are plain recursive BST
//! descents. Callers that care about the shape can check
//! [`is_balanced`][Tree::is_balanced] and ask for a
//! [`rebalance`][Tree::rebalance] whenever the tree has drifted.
//!
//! # Examples
//!
//! ```
//! use ordered_tree::Tree;
//!
//! let mut tree = Tree::build(vec![3, 1, 2, 3]);
//!
//! // Duplicates are dropped.
//! assert_eq!(tree.inorder(), vec![&1, &2, &3]);
//! assert!(tree.is_balanced());
//!
//! // Inserting in ascending order grows a list to the right.
//! tree.insert(4);
//! tree.insert(5);
//! assert!(!tree.is_balanced());
//!
//! tree.rebalance();
//! assert!(tree.is_balanced());
//! assert_eq!(tree.inorder(), vec![&1, &2, &3, &4, &5]);
//! ```

use std::collections::BTreeSet;
use std::fmt;
use std::iter::FromIterator;

use crate::node::{self, Link, Node};
use crate::traversal::{self, Collect, Iter, Order, Visitor};

/// A Binary Search Tree of unique keys. Duplicate keys are silently dropped.
///
/// Cloning, comparing and dropping a tree work off an explicit stack, so they
/// cope with trees as deep as they are long. `Debug` still recurses per level.
pub struct Tree<K> {
    root: Link<K>,
}

impl<K> Default for Tree<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K> Drop for Tree<K> {
    // A tree grown by sorted insertion is as deep as it is long, so dropping
    // the `Box`es recursively could blow the stack.
    fn drop(&mut self) {
        let mut stack: Vec<Box<Node<K>>> = self.root.take().into_iter().collect();
        while let Some(mut node) = stack.pop() {
            stack.extend(node.left.take());
            stack.extend(node.right.take());
        }
    }
}

impl<K> Clone for Tree<K>
where
    K: Clone,
{
    // Rebuilds the copy bottom-up: every subtree is finished before its parent,
    // which then pops its right and left copies off `built`.
    fn clone(&self) -> Self {
        let mut pending = vec![(self.root(), false)];
        let mut built: Vec<Link<K>> = Vec::new();

        while let Some((node, children_done)) = pending.pop() {
            match node {
                None => built.push(None),
                Some(n) if !children_done => {
                    pending.push((Some(n), true));
                    pending.push((n.right(), false));
                    pending.push((n.left(), false));
                }
                Some(n) => {
                    let right = built.pop().flatten();
                    let left = built.pop().flatten();
                    built.push(Some(Box::new(Node {
                        key: n.key.clone(),
                        left,
                        right,
                    })));
                }
            }
        }

        Self {
            root: built.pop().flatten(),
        }
    }
}

/// Two trees are equal when they hold the same keys in the same shape.
impl<K> PartialEq for Tree<K>
where
    K: PartialEq,
{
    fn eq(&self, other: &Self) -> bool {
        let mut pairs = vec![(self.root(), other.root())];
        while let Some(pair) = pairs.pop() {
            match pair {
                (None, None) => {}
                (Some(a), Some(b)) if a.key == b.key => {
                    pairs.push((a.left(), b.left()));
                    pairs.push((a.right(), b.right()));
                }
                _ => return false,
            }
        }
        true
    }
}

impl<K> Eq for Tree<K> where K: Eq {}

impl<K> fmt::Debug for Tree<K>
where
    K: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Tree").field("root", &self.root()).finish()
    }
}

impl<K> Tree<K> {
    /// Generates a new, empty `Tree`.
    pub fn new() -> Self {
        Self { root: None }
    }

    /// Builds a minimal-height tree holding every distinct key in `keys`.
    ///
    /// The keys may come in any order and may repeat.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::Tree;
    ///
    /// let tree = Tree::build(vec![7, 1, 5, 3, 1, 6, 2, 4]);
    ///
    /// assert_eq!(tree.len(), 7);
    /// assert_eq!(tree.height(), 2);
    /// assert_eq!(tree.level_order(), vec![&4, &2, &6, &1, &3, &5, &7]);
    /// ```
    pub fn build<I>(keys: I) -> Self
    where
        I: IntoIterator<Item = K>,
        K: Ord,
    {
        let distinct: BTreeSet<K> = keys.into_iter().collect();
        let tree = Self::from_sorted(distinct.into_iter().collect());
        log::debug!(
            "built tree of {} keys with height {}",
            tree.len(),
            tree.height()
        );
        tree
    }

    /// Builds a minimal-height tree out of keys that are already ascending and
    /// unique.
    fn from_sorted(keys: Vec<K>) -> Self {
        let len = keys.len();
        Self {
            root: node::build_sorted(&mut keys.into_iter(), len),
        }
    }

    /// The root node, if the tree isn't empty.
    pub fn root(&self) -> Option<&Node<K>> {
        self.root.as_deref()
    }

    /// Whether the tree holds no keys.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Number of keys in the tree. This walks the whole tree.
    pub fn len(&self) -> usize {
        self.root().map_or(0, Node::count)
    }

    /// Removes every key from the tree.
    pub fn clear(&mut self) {
        *self = Self::new();
    }

    /// Inserts the given key into the tree. Inserting a key that is already
    /// present leaves the tree as it was.
    ///
    /// This never rebalances the tree.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::Tree;
    ///
    /// let mut tree = Tree::new();
    ///
    /// tree.insert(1);
    /// tree.insert(1);
    /// assert_eq!(tree.inorder(), vec![&1]);
    /// ```
    pub fn insert(&mut self, key: K)
    where
        K: Ord,
    {
        self.root = Some(node::insert(self.root.take(), key));
    }

    /// Deletes the given key from the tree. If the tree does not contain the
    /// key, nothing happens.
    ///
    /// A node with two children is not unlinked itself: it takes over the key
    /// of its successor, whose node is unlinked instead. This never rebalances
    /// the tree.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::Tree;
    ///
    /// let mut tree = Tree::build(vec![1, 2, 3]);
    /// tree.delete(&2);
    /// tree.delete(&42);
    ///
    /// assert_eq!(tree.inorder(), vec![&1, &3]);
    /// assert_eq!(tree.root().map(|n| *n.key()), Some(3));
    /// ```
    pub fn delete(&mut self, key: &K)
    where
        K: Ord,
    {
        self.root = node::delete(self.root.take(), key);
    }

    /// Potentially finds the node holding the given key. If no node has the
    /// key, `None` is returned.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::Tree;
    ///
    /// let tree = Tree::build(vec![1, 2, 3]);
    ///
    /// assert_eq!(tree.find(&1).map(|n| n.key()), Some(&1));
    /// assert!(tree.find(&42).is_none());
    /// ```
    pub fn find(&self, key: &K) -> Option<&Node<K>>
    where
        K: Ord,
    {
        self.root().and_then(|n| n.find(key))
    }

    /// Whether the tree holds the given key.
    pub fn contains(&self, key: &K) -> bool
    where
        K: Ord,
    {
        self.find(key).is_some()
    }

    /// Number of edges between the root and the node holding `key`, or `None`
    /// if the key isn't in the tree. The root has a depth of 0.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::Tree;
    ///
    /// let tree = Tree::build(vec![1, 2, 3]);
    ///
    /// assert_eq!(tree.depth(&2), Some(0));
    /// assert_eq!(tree.depth(&3), Some(1));
    /// assert_eq!(tree.depth(&4), None);
    /// ```
    pub fn depth(&self, key: &K) -> Option<usize>
    where
        K: Ord,
    {
        self.root().and_then(|n| n.depth_of(key))
    }

    /// The smallest key in the tree.
    pub fn min(&self) -> Option<&K> {
        self.root().map(Node::min)
    }

    /// The largest key in the tree.
    pub fn max(&self) -> Option<&K> {
        self.root().map(Node::max)
    }

    /// Number of edges on the longest path from the root to a leaf. A tree
    /// with only a root has a height of 0 and an empty tree has a height of -1.
    pub fn height(&self) -> isize {
        node::height(self.root())
    }

    /// Whether, at every node, the heights of the left and right subtrees
    /// differ by at most one. An empty tree is balanced.
    pub fn is_balanced(&self) -> bool {
        self.root().map_or(true, Node::is_balanced)
    }

    /// Rebuilds the tree with minimal height. The keys are unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::Tree;
    ///
    /// let mut tree = Tree::new();
    /// for key in 0..7 {
    ///     tree.insert(key);
    /// }
    /// assert_eq!(tree.height(), 6);
    ///
    /// tree.rebalance();
    /// assert_eq!(tree.height(), 2);
    /// assert!(tree.is_balanced());
    /// ```
    pub fn rebalance(&mut self) {
        let before = if log::log_enabled!(log::Level::Debug) {
            Some(self.height())
        } else {
            None
        };
        let mut keys = Vec::new();
        node::drain_inorder(self.root.take(), &mut keys);
        *self = Self::from_sorted(keys);
        if let Some(before) = before {
            log::debug!(
                "rebalanced tree from height {} to {}",
                before,
                self.height()
            );
        }
    }

    /// Walks the tree in the given order, handing every node to `visitor`.
    pub fn traverse<'a, V>(&'a self, order: Order, visitor: &mut V)
    where
        V: Visitor<'a, K> + ?Sized,
    {
        traversal::walk(self.root(), order, visitor)
    }

    fn collect(&self, order: Order) -> Vec<&K> {
        let mut keys = Collect(Vec::new());
        self.traverse(order, &mut keys);
        keys.0
    }

    /// The keys in pre-order: each node before its left and then its right
    /// subtree.
    pub fn preorder(&self) -> Vec<&K> {
        self.collect(Order::Pre)
    }

    /// The keys in ascending order.
    pub fn inorder(&self) -> Vec<&K> {
        self.collect(Order::In)
    }

    /// The keys in post-order: each node after its left and then its right
    /// subtree.
    pub fn postorder(&self) -> Vec<&K> {
        self.collect(Order::Post)
    }

    /// The keys level by level from the root down, left to right within a
    /// level.
    pub fn level_order(&self) -> Vec<&K> {
        self.collect(Order::Level)
    }

    /// Calls `f` on every node in pre-order.
    pub fn preorder_with<'a, F>(&'a self, mut f: F)
    where
        F: FnMut(&'a Node<K>),
    {
        self.traverse(Order::Pre, &mut f)
    }

    /// Calls `f` on every node in ascending key order.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::Tree;
    ///
    /// let tree = Tree::build(vec![3, 1, 2]);
    /// let mut doubled = Vec::new();
    /// tree.inorder_with(|node| doubled.push(node.key() * 2));
    ///
    /// assert_eq!(doubled, vec![2, 4, 6]);
    /// ```
    pub fn inorder_with<'a, F>(&'a self, mut f: F)
    where
        F: FnMut(&'a Node<K>),
    {
        self.traverse(Order::In, &mut f)
    }

    /// Calls `f` on every node in post-order.
    pub fn postorder_with<'a, F>(&'a self, mut f: F)
    where
        F: FnMut(&'a Node<K>),
    {
        self.traverse(Order::Post, &mut f)
    }

    /// Calls `f` on every node in level order.
    pub fn level_order_with<'a, F>(&'a self, mut f: F)
    where
        F: FnMut(&'a Node<K>),
    {
        self.traverse(Order::Level, &mut f)
    }

    /// A lazy iterator over the keys in ascending order.
    pub fn iter(&self) -> Iter<'_, K> {
        Iter::new(self.root())
    }
}

impl<K> FromIterator<K> for Tree<K>
where
    K: Ord,
{
    fn from_iter<I: IntoIterator<Item = K>>(iter: I) -> Self {
        Self::build(iter)
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

/// Draws the tree sideways, one key per line, each node above its left and
/// then its right subtree.
///
/// ```text
/// ├── 30
/// │   ├── 10
/// │   │   ├── 5
/// │   │   └── 20
/// │   └── 50
/// │       ├── 40
/// │       └── 60
/// ```
impl<K> fmt::Display for Tree<K>
where
    K: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        draw(f, self.root(), &mut String::new(), true)
    }
}

fn draw<K>(
    f: &mut fmt::Formatter<'_>,
    node: Option<&Node<K>>,
    prefix: &mut String,
    is_left: bool,
) -> fmt::Result
where
    K: fmt::Display,
{
    let node = match node {
        Some(node) => node,
        None => return Ok(()),
    };

    writeln!(
        f,
        "{}{}{}",
        prefix,
        if is_left { "├── " } else { "└── " },
        node.key()
    )?;

    let len = prefix.len();
    prefix.push_str(if is_left { "│   " } else { "    " });
    draw(f, node.left(), prefix, true)?;
    draw(f, node.right(), prefix, false)?;
    prefix.truncate(len);

    Ok(())
}
