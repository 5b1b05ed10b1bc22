//! Depth-first walks over a [`Tree`][crate::Tree].
//!
//! A [`Traversal`] borrows the tree it walks, so the tree can't change while
//! the traversal is alive. Each call to [`Tree::traverse`][crate::Tree::traverse]
//! (or one of its shorthands) starts a fresh, independent walk.
//!
//! # Examples
//!
//! ```
//! use unbalanced_bst::{Order, Tree};
//!
//! let tree: Tree<_> = [2, 1, 3].into_iter().collect();
//!
//! assert!(tree.traverse(Order::InOrder).eq(&[1, 2, 3]));
//! assert!(tree.traverse(Order::PreOrder).eq(&[2, 1, 3]));
//! assert!(tree.traverse(Order::PostOrder).eq(&[1, 3, 2]));
//! ```

use std::iter::FusedIterator;

use crate::node::Node;

/// The order in which a [`Traversal`] visits nodes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Order {
    /// Left subtree, node, right subtree. Yields values in ascending order.
    InOrder,
    /// Node, left subtree, right subtree. The root comes first.
    PreOrder,
    /// Left subtree, right subtree, node. Children come before their parents.
    PostOrder,
}

/// Pending work on the traversal stack.
enum Visit<'a, T> {
    /// Push this node's value and children in the traversal's order.
    Expand(&'a Node<T>),
    /// Hand this value to the caller.
    Yield(&'a T),
}

// Manual `Clone`/`Copy` so the visit stays copyable when `T` isn't.
impl<T> Clone for Visit<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}
impl<T> Copy for Visit<'_, T> {}

/// An iterator over the values of a tree in a chosen [`Order`]. It yields
/// exactly as many values as the tree held when the traversal was created.
///
/// The walk is lazy: the stack only ever holds pending work along one
/// root-to-leaf path, so it is bounded by the tree's height.
pub struct Traversal<'a, T> {
    order: Order,
    stack: Vec<Visit<'a, T>>,
    remaining: usize,
}

impl<T> Clone for Traversal<'_, T> {
    fn clone(&self) -> Self {
        Self {
            order: self.order,
            stack: self.stack.clone(),
            remaining: self.remaining,
        }
    }
}

impl<'a, T> Traversal<'a, T> {
    /// Starts a walk from `root`, which must be the root of a subtree holding
    /// `len` nodes.
    pub(crate) fn new(root: Option<&'a Node<T>>, len: usize, order: Order) -> Self {
        Self {
            order,
            stack: root.map(Visit::Expand).into_iter().collect(),
            remaining: len,
        }
    }

    /// The order this traversal visits nodes in.
    pub fn order(&self) -> Order {
        self.order
    }

    /// Pushes `node`'s work so that it pops off in this traversal's order.
    fn expand(&mut self, node: &'a Node<T>) {
        let value = Visit::Yield(node.value());
        let left = node.left().map(Visit::Expand);
        let right = node.right().map(Visit::Expand);

        // The stack is LIFO so everything goes on backwards.
        match self.order {
            Order::InOrder => {
                self.stack.extend(right);
                self.stack.push(value);
                self.stack.extend(left);
            }
            Order::PreOrder => {
                self.stack.extend(right);
                self.stack.extend(left);
                self.stack.push(value);
            }
            Order::PostOrder => {
                self.stack.push(value);
                self.stack.extend(right);
                self.stack.extend(left);
            }
        }
    }
}

impl<'a, T> Iterator for Traversal<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(visit) = self.stack.pop() {
            match visit {
                Visit::Expand(node) => self.expand(node),
                Visit::Yield(value) => {
                    self.remaining -= 1;
                    return Some(value);
                }
            }
        }

        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for Traversal<'_, T> {}

impl<T> FusedIterator for Traversal<'_, T> {}
