//! This crate exposes a Binary Search Tree (BST) over unique, totally ordered
//! keys, mostly for educational purposes.
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is a data structure supporting operations to
//! insert, find, and delete stored keys. BSTs are typically defined
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
//! the longest path from the root `Node` to a leaf `Node`). A tree built from a
//! sorted run of keys by repeatedly picking the middle key has a height of
//! `O(lg N)`. Plain insertion and deletion don't preserve that, so the [`Tree`]
//! here can report whether it [is balanced][Tree::is_balanced] and
//! [rebuild][Tree::rebalance] itself on request.
//!
//! BSTs also naturally support sorted iteration by visiting the left subtree,
//! then the subtree root, then the right subtree. That and the other classic
//! walks live in [`traversal`].

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

mod node;
pub mod traversal;
pub mod tree;


pub use node::Node;
pub use traversal::{Order, Visitor};
pub use tree::Tree;
