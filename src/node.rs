//! The recursive building block of a [`Tree`][crate::Tree].
//!
//! Every algorithm in here works on a subtree *owner* (`Option<Box<Node<K>>>`)
//! and hands back the owner of the rewired subtree so the caller can store it
//! in whichever link it came from. Nothing keeps a pointer back to its parent.

use std::cmp::Ordering;

/// An owned, possibly empty, subtree.
pub(crate) type Link<K> = Option<Box<Node<K>>>;

/// A single key along with exclusive ownership of its (optional) left and
/// right subtrees.
///
/// Nodes are only handed out by reference (see [`Tree::find`][crate::Tree::find]),
/// so the BST invariant can't be broken from outside the crate.
///
/// The `Debug` output nests one level per node, so it recurses as deep as the
/// subtree is tall.
#[derive(Debug)]
pub struct Node<K> {
    pub(crate) key: K,
    pub(crate) left: Link<K>,
    pub(crate) right: Link<K>,
}

impl<K> Node<K> {
    pub(crate) fn new_boxed(key: K) -> Box<Self> {
        Box::new(Self {
            key,
            left: None,
            right: None,
        })
    }

    /// The key stored in this node.
    pub fn key(&self) -> &K {
        &self.key
    }

    /// The root of the left subtree, if there is one. All of its keys are
    /// smaller than [`key`][Node::key].
    pub fn left(&self) -> Option<&Self> {
        self.left.as_deref()
    }

    /// The root of the right subtree, if there is one. All of its keys are
    /// larger than [`key`][Node::key].
    pub fn right(&self) -> Option<&Self> {
        self.right.as_deref()
    }

    /// Number of edges on the longest path from this node down to a leaf. A
    /// node without children has a height of 0.
    ///
    /// This walks the whole subtree, nothing is cached.
    pub fn height(&self) -> usize {
        let left = self.left().map_or(0, |n| n.height() + 1);
        let right = self.right().map_or(0, |n| n.height() + 1);
        left.max(right)
    }

    /// Whether, at every node of this subtree, the heights of the left and
    /// right subtrees differ by at most one.
    pub fn is_balanced(&self) -> bool {
        balanced_height(Some(self)).is_some()
    }

    /// Number of nodes in this subtree, this one included.
    pub(crate) fn count(&self) -> usize {
        1 + self.left().map_or(0, Self::count) + self.right().map_or(0, Self::count)
    }

    pub(crate) fn find(&self, key: &K) -> Option<&Self>
    where
        K: Ord,
    {
        match key.cmp(&self.key) {
            Ordering::Less => self.left().and_then(|n| n.find(key)),
            Ordering::Equal => Some(self),
            Ordering::Greater => self.right().and_then(|n| n.find(key)),
        }
    }

    /// Number of edges between this node and the node holding `key`.
    pub(crate) fn depth_of(&self, key: &K) -> Option<usize>
    where
        K: Ord,
    {
        match key.cmp(&self.key) {
            Ordering::Less => self.left().and_then(|n| n.depth_of(key)).map(|d| d + 1),
            Ordering::Equal => Some(0),
            Ordering::Greater => self.right().and_then(|n| n.depth_of(key)).map(|d| d + 1),
        }
    }

    pub(crate) fn min(&self) -> &K {
        let mut node = self;
        while let Some(left) = node.left() {
            node = left;
        }
        &node.key
    }

    pub(crate) fn max(&self) -> &K {
        let mut node = self;
        while let Some(right) = node.right() {
            node = right;
        }
        &node.key
    }
}

/// Height of the subtree rooted at `node`, or -1 if there is no subtree.
pub(crate) fn height<K>(node: Option<&Node<K>>) -> isize {
    node.map_or(-1, |n| n.height() as isize)
}

/// Height of the subtree if it is balanced at every node, `None` otherwise.
///
/// One bottom-up pass so a subtree's height is never computed twice.
fn balanced_height<K>(node: Option<&Node<K>>) -> Option<isize> {
    let node = match node {
        Some(node) => node,
        None => return Some(-1),
    };
    let left = balanced_height(node.left())?;
    let right = balanced_height(node.right())?;

    if (left - right).abs() <= 1 {
        Some(left.max(right) + 1)
    } else {
        None
    }
}

/// Inserts `key` into the subtree and returns the new subtree owner. An empty
/// subtree becomes a leaf. An existing equal key leaves the subtree untouched.
pub(crate) fn insert<K>(link: Link<K>, key: K) -> Box<Node<K>>
where
    K: Ord,
{
    match link {
        None => Node::new_boxed(key),
        Some(mut node) => {
            match key.cmp(&node.key) {
                Ordering::Less => node.left = Some(insert(node.left.take(), key)),
                Ordering::Equal => {}
                Ordering::Greater => node.right = Some(insert(node.right.take(), key)),
            }

            if cfg!(debug_assertions) {
                if let Some(left) = node.left() {
                    assert!(node.key > left.key);
                }
                if let Some(right) = node.right() {
                    assert!(node.key < right.key);
                }
            }
            node
        }
    }
}

/// Removes `key` from the subtree, if present, and returns the new subtree
/// owner.
///
/// A node with two children keeps its place in the tree: it takes over the key
/// of its in-order successor (the smallest key on its right) and that
/// successor's node is unlinked instead.
pub(crate) fn delete<K>(link: Link<K>, key: &K) -> Link<K>
where
    K: Ord,
{
    let mut node = link?;
    match key.cmp(&node.key) {
        Ordering::Less => node.left = delete(node.left.take(), key),
        Ordering::Greater => node.right = delete(node.right.take(), key),
        Ordering::Equal => match (node.left.take(), node.right.take()) {
            (None, right) => return right,
            (left @ Some(_), None) => return left,
            (left, Some(right)) => {
                let (successor, new_right) = take_min(right);
                node.key = successor;
                node.left = left;
                node.right = new_right;
            }
        },
    }
    Some(node)
}

/// Unlinks the leftmost node of a non-empty subtree. Returns its key along with
/// what's left of the subtree. The leftmost node has no left child so it is
/// simply replaced by its right child.
fn take_min<K>(mut node: Box<Node<K>>) -> (K, Link<K>) {
    match node.left.take() {
        None => {
            let right = node.right.take();
            (node.key, right)
        }
        Some(left) => {
            let (min, new_left) = take_min(left);
            node.left = new_left;
            (min, Some(node))
        }
    }
}

/// Builds a minimal-height subtree out of the next `len` keys of an ascending,
/// duplicate-free sequence.
///
/// The root is the key at `(len - 1) / 2`, which is the `floor((start + end) / 2)`
/// midpoint of the slice, with the keys before it going left and the ones after
/// it going right. The left subtree is built first so the keys are consumed in
/// order and never need to be cloned.
pub(crate) fn build_sorted<K, I>(keys: &mut I, len: usize) -> Link<K>
where
    I: Iterator<Item = K>,
{
    if len == 0 {
        return None;
    }

    let mid = (len - 1) / 2;
    let left = build_sorted(keys, mid);
    let key = keys.next()?;
    let right = build_sorted(keys, len - mid - 1);

    Some(Box::new(Node { key, left, right }))
}

/// Consumes the subtree, pushing its keys onto `out` in ascending order.
pub(crate) fn drain_inorder<K>(link: Link<K>, out: &mut Vec<K>) {
    if let Some(mut node) = link {
        drain_inorder(node.left.take(), out);
        let right = node.right.take();
        out.push(node.key);
        drain_inorder(right, out);
    }
}
