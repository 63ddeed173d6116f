//! Depth-first and breadth-first walks over a tree.
//!
//! Every walk is driven by a [`Visitor`]. Any `FnMut(&Node<K>)` closure is a
//! visitor, and collecting keys into a `Vec` is just one more visitor. None of
//! the walks touch the tree, so they can be repeated as often as needed.

use std::collections::VecDeque;

use crate::node::Node;

/// The order in which a walk visits the nodes of a tree.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Order {
    /// Node, then its left subtree, then its right subtree.
    Pre,
    /// Left subtree, then the node, then the right subtree. This yields keys in
    /// ascending order.
    In,
    /// Left subtree, then right subtree, then the node.
    Post,
    /// Breadth first: the root, then every node one level down from left to
    /// right, and so on.
    Level,
}

/// Something that wants to see every node of a walk.
pub trait Visitor<'a, K> {
    /// Called once per node, in the order of the walk.
    fn visit(&mut self, node: &'a Node<K>);
}

impl<'a, K: 'a, F> Visitor<'a, K> for F
where
    F: FnMut(&'a Node<K>),
{
    fn visit(&mut self, node: &'a Node<K>) {
        self(node)
    }
}

/// Gathers the keys of the visited nodes in visiting order.
pub(crate) struct Collect<'a, K>(pub(crate) Vec<&'a K>);

impl<'a, K> Visitor<'a, K> for Collect<'a, K> {
    fn visit(&mut self, node: &'a Node<K>) {
        self.0.push(&node.key);
    }
}

/// Walks the subtree under `root` in the given order. An empty subtree visits
/// nothing.
pub(crate) fn walk<'a, K, V>(root: Option<&'a Node<K>>, order: Order, visitor: &mut V)
where
    V: Visitor<'a, K> + ?Sized,
{
    let root = match root {
        Some(root) => root,
        None => return,
    };

    match order {
        Order::Pre => preorder(root, visitor),
        Order::In => inorder(root, visitor),
        Order::Post => postorder(root, visitor),
        Order::Level => level_order(root, visitor),
    }
}

fn preorder<'a, K, V>(node: &'a Node<K>, visitor: &mut V)
where
    V: Visitor<'a, K> + ?Sized,
{
    visitor.visit(node);
    if let Some(left) = node.left() {
        preorder(left, visitor);
    }
    if let Some(right) = node.right() {
        preorder(right, visitor);
    }
}

fn inorder<'a, K, V>(node: &'a Node<K>, visitor: &mut V)
where
    V: Visitor<'a, K> + ?Sized,
{
    if let Some(left) = node.left() {
        inorder(left, visitor);
    }
    visitor.visit(node);
    if let Some(right) = node.right() {
        inorder(right, visitor);
    }
}

fn postorder<'a, K, V>(node: &'a Node<K>, visitor: &mut V)
where
    V: Visitor<'a, K> + ?Sized,
{
    if let Some(left) = node.left() {
        postorder(left, visitor);
    }
    if let Some(right) = node.right() {
        postorder(right, visitor);
    }
    visitor.visit(node);
}

fn level_order<'a, K, V>(root: &'a Node<K>, visitor: &mut V)
where
    V: Visitor<'a, K> + ?Sized,
{
    let mut queue = VecDeque::new();
    queue.push_back(root);

    while let Some(node) = queue.pop_front() {
        visitor.visit(node);
        if let Some(left) = node.left() {
            queue.push_back(left);
        }
        if let Some(right) = node.right() {
            queue.push_back(right);
        }
    }
}

/// A lazy, ascending iterator over the keys of a [`Tree`][crate::Tree].
///
/// Created by [`Tree::iter`][crate::Tree::iter].
#[derive(Clone, Debug)]
pub struct Iter<'a, K> {
    /// Nodes whose left subtree has been pushed but which haven't been yielded.
    stack: Vec<&'a Node<K>>,
}

impl<'a, K> Iter<'a, K> {
    pub(crate) fn new(root: Option<&'a Node<K>>) -> Self {
        let mut iter = Self { stack: Vec::new() };
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

impl<'a, K> Iterator for Iter<'a, K> {
    type Item = &'a K;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.push_left_spine(node.right());
        Some(&node.key)
    }
}

impl<'a, K> std::iter::FusedIterator for Iter<'a, K> {}
