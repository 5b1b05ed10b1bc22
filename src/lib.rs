//! This crate exposes a plain, unbalanced Binary Search Tree (BST) that
//! behaves like an ordered set.
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is a data structure supporting operations to
//! insert and find stored records. BSTs are typically defined
//! recursively using the notion of a `Node`. A `Node` will typically store
//! some sort of value (the value that was inserted, for example) and will
//! sometimes have child `Node`s. The most important invariants of a BST are:
//!
//! 1. For every `Node` in a BST, all the `Node`s in its left subtree have a
//!    value less than its own value.
//! 2. For every `Node` in a BST, all the `Node`s in its right subtree have a
//!    value greater than its own value.
//!
//! > Note that some `Node`s have no children. These `Node`s are called "leaf nodes".
//!
//! Searching for values in the tree takes `O(height)` (where `height` is defined
//! as the longest path from the root `Node` to a leaf `Node`). The [`Tree`] here
//! never rebalances, so its shape is exactly what the insertion order made it.
//! Inserting sorted values gives a chain where `height == len - 1`. BSTs also
//! naturally support sorted iteration by visiting the left subtree, then the
//! subtree root, then the right subtree. See [`Order`] for the other walks.
//!
//! ## Rebuilding
//!
//! A tree can always be rebuilt by inserting values one at a time, for example
//! through [`FromIterator`]. Inserting the [pre-order][Tree::preorder] sequence
//! reproduces the same shape while inserting the [in-order][Tree::inorder]
//! sequence gives the tallest possible tree for those values.
//!
//! ```
//! use unbalanced_bst::Tree;
//!
//! let tree: Tree<_> = [4, 2, 6, 1, 3, 5, 7].into_iter().collect();
//! assert_eq!(tree.height(), 2);
//!
//! let same: Tree<_> = tree.preorder().copied().collect();
//! assert_eq!(same.height(), 2);
//!
//! let chain: Tree<_> = tree.inorder().copied().collect();
//! assert_eq!(chain.height(), 6);
//! assert!(chain.inorder().eq(tree.inorder()));
//! ```

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

mod error;
mod node;
#[cfg(feature = "serde")]
mod serde_impl;
mod traversal;
mod tree;

pub use error::{Error, Result};
pub use node::Node;
pub use traversal::{Order, Traversal};
pub use tree::{IntoIter, Tree};

#[cfg(test)]
mod test {
    pub(crate) mod quick;
}
