//! A plain, unbalanced Binary Search Tree used as an ordered set.
//!
//! The shape of the tree is decided entirely by insertion order. Inserting
//! values in sorted order gives a chain whose height is one less than its
//! length, and every operation is `O(height)`. Nothing here rebalances.
//!
//! All walks (including `Drop`) are iterative so even a fully degenerate tree
//! can't overflow the call stack.
//!
//! # Examples
//!
//! ```
//! use unbalanced_bst::Tree;
//!
//! let mut tree = Tree::new();
//!
//! // Nothing in here yet.
//! assert!(!tree.contains(&"cat"));
//! assert_eq!(tree.height(), -1);
//!
//! assert!(tree.insert("dog"));
//! assert!(tree.insert("cat"));
//! assert!(tree.insert("bird"));
//!
//! // The first insertion of a value wins; later ones change nothing.
//! assert!(!tree.insert("cat"));
//! assert_eq!(tree.len(), 3);
//!
//! assert!(tree.inorder().eq(&["bird", "cat", "dog"]));
//!
//! // Removing extremes hands the values back.
//! assert_eq!(tree.remove_min(), Some("bird"));
//! assert_eq!(tree.remove_max(), Some("dog"));
//! assert_eq!(tree.len(), 1);
//! ```

use std::borrow::Borrow;
use std::cmp::Ordering;
use std::fmt;
use std::iter::FusedIterator;

use log::{debug, trace};

use crate::error::{Error, Result};
use crate::node::{Link, Node};
use crate::traversal::{Order, Traversal};

/// An unbalanced Binary Search Tree holding distinct values ordered by [`Ord`].
pub struct Tree<T> {
    root: Link<T>,
    len: usize,
}

impl<T> Default for Tree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for Tree<T> {
    fn drop(&mut self) {
        self.clear();
    }
}

/// Rebuilds the tree by inserting its pre-order sequence, which reproduces the
/// exact same shape.
impl<T> Clone for Tree<T>
where
    T: Clone + Ord,
{
    fn clone(&self) -> Self {
        self.preorder().cloned().collect()
    }
}

impl<T> fmt::Debug for Tree<T>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.inorder()).finish()
    }
}

impl<T> Tree<T> {
    /// Generate a new, empty `Tree`.
    pub fn new() -> Self {
        Self { root: None, len: 0 }
    }

    /// The number of values in the tree.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the tree holds no values.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Removes every value from the tree.
    pub fn clear(&mut self) {
        if self.root.is_some() {
            debug!("clearing tree of {} nodes", self.len);
        }

        // Tear down one node at a time. Letting `Box` drop the root would recurse
        // once per level and a degenerate tree can be arbitrarily deep.
        let mut pending: Vec<Box<Node<T>>> = self.root.take().into_iter().collect();
        while let Some(mut node) = pending.pop() {
            pending.extend(node.left.take());
            pending.extend(node.right.take());
        }
        self.len = 0;
    }

    /// The root node of the tree.
    ///
    /// # Errors
    ///
    /// [`Error::EmptyTree`] if the tree has no nodes.
    ///
    /// # Examples
    ///
    /// ```
    /// use unbalanced_bst::{Error, Tree};
    ///
    /// let mut tree = Tree::new();
    /// assert_eq!(tree.root().unwrap_err(), Error::EmptyTree);
    ///
    /// tree.insert(2);
    /// tree.insert(1);
    /// let root = tree.root().unwrap();
    /// assert_eq!(root.value(), &2);
    /// assert_eq!(root.left().map(|n| n.value()), Some(&1));
    /// ```
    pub fn root(&self) -> Result<&Node<T>> {
        self.root.as_deref().ok_or(Error::EmptyTree)
    }

    /// The number of edges on the longest path from the root to a leaf. A
    /// single node has a height of `0` and an empty tree has a height of `-1`.
    ///
    /// # Examples
    ///
    /// ```
    /// use unbalanced_bst::Tree;
    ///
    /// let mut tree = Tree::new();
    /// assert_eq!(tree.height(), -1);
    ///
    /// tree.insert(1);
    /// assert_eq!(tree.height(), 0);
    ///
    /// // Sorted insertion makes a chain.
    /// tree.extend([2, 3, 4]);
    /// assert_eq!(tree.height(), 3);
    /// ```
    pub fn height(&self) -> isize {
        let mut height = -1;
        let mut pending: Vec<(&Node<T>, isize)> =
            self.root.as_deref().map(|root| (root, 0)).into_iter().collect();

        while let Some((node, depth)) = pending.pop() {
            height = height.max(depth);
            pending.extend(node.left().map(|left| (left, depth + 1)));
            pending.extend(node.right().map(|right| (right, depth + 1)));
        }

        height
    }

    /// Removes the smallest value from the tree and returns it, or `None` if
    /// the tree is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use unbalanced_bst::Tree;
    ///
    /// let mut tree: Tree<_> = [2, 3, 1].into_iter().collect();
    ///
    /// assert_eq!(tree.remove_min(), Some(1));
    /// assert_eq!(tree.remove_min(), Some(2));
    /// assert_eq!(tree.remove_min(), Some(3));
    /// assert_eq!(tree.remove_min(), None);
    /// ```
    pub fn remove_min(&mut self) -> Option<T> {
        let mut slot = &mut self.root;
        while slot.as_ref().map_or(false, |node| node.left.is_some()) {
            if let Some(node) = slot {
                slot = &mut node.left;
            }
        }

        // The minimum has no left child so its right subtree takes its place.
        let (value, _, right) = slot.take()?.into_parts();
        *slot = right;
        self.len -= 1;
        trace!("removed minimum, {} nodes remain", self.len);

        Some(value)
    }

    /// Removes the largest value from the tree and returns it, or `None` if
    /// the tree is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use unbalanced_bst::Tree;
    ///
    /// let mut tree: Tree<_> = [2, 3, 1].into_iter().collect();
    ///
    /// assert_eq!(tree.remove_max(), Some(3));
    /// assert_eq!(tree.remove_max(), Some(2));
    /// assert_eq!(tree.remove_max(), Some(1));
    /// assert_eq!(tree.remove_max(), None);
    /// ```
    pub fn remove_max(&mut self) -> Option<T> {
        let mut slot = &mut self.root;
        while slot.as_ref().map_or(false, |node| node.right.is_some()) {
            if let Some(node) = slot {
                slot = &mut node.right;
            }
        }

        // The maximum has no right child so its left subtree takes its place.
        let (value, left, _) = slot.take()?.into_parts();
        *slot = left;
        self.len -= 1;
        trace!("removed maximum, {} nodes remain", self.len);

        Some(value)
    }

    /// Walks the tree in the given [`Order`].
    pub fn traverse(&self, order: Order) -> Traversal<'_, T> {
        Traversal::new(self.root.as_deref(), self.len, order)
    }

    /// Walks the tree in ascending order.
    pub fn inorder(&self) -> Traversal<'_, T> {
        self.traverse(Order::InOrder)
    }

    /// Walks the tree root first, then the left subtree, then the right.
    pub fn preorder(&self) -> Traversal<'_, T> {
        self.traverse(Order::PreOrder)
    }

    /// Walks the left subtree, then the right, then the root.
    pub fn postorder(&self) -> Traversal<'_, T> {
        self.traverse(Order::PostOrder)
    }

    /// Same as [`Tree::inorder`].
    pub fn iter(&self) -> Traversal<'_, T> {
        self.inorder()
    }
}

impl<T> Tree<T>
where
    T: Ord,
{
    /// Inserts `value` into the tree. Returns `false`, leaving the tree
    /// untouched, if an equal value is already present.
    ///
    /// # Examples
    ///
    /// ```
    /// use unbalanced_bst::Tree;
    ///
    /// let mut tree = Tree::new();
    ///
    /// assert!(tree.insert(1));
    /// assert!(!tree.insert(1));
    /// assert_eq!(tree.len(), 1);
    /// ```
    pub fn insert(&mut self, value: T) -> bool {
        let mut slot = &mut self.root;
        while let Some(node) = slot {
            match value.cmp(node.value()) {
                Ordering::Less => slot = &mut node.left,
                Ordering::Greater => slot = &mut node.right,
                Ordering::Equal => {
                    trace!("rejected duplicate value");
                    return false;
                }
            }
        }

        *slot = Some(Node::new_boxed(value));
        self.len += 1;

        true
    }

    /// Like [`Tree::insert`] but for values that might be absent.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidArgument`] if `value` is `None`. The tree is not touched.
    ///
    /// # Examples
    ///
    /// ```
    /// use unbalanced_bst::{Error, Tree};
    ///
    /// let mut tree = Tree::new();
    ///
    /// assert_eq!(tree.try_insert(Some(1)), Ok(true));
    /// assert_eq!(tree.try_insert(None), Err(Error::InvalidArgument));
    /// assert_eq!(tree.len(), 1);
    /// ```
    pub fn try_insert(&mut self, value: Option<T>) -> Result<bool> {
        value
            .map(|value| self.insert(value))
            .ok_or(Error::InvalidArgument)
    }

    /// Returns `true` if the tree holds a value equal to `value`.
    ///
    /// # Examples
    ///
    /// ```
    /// use unbalanced_bst::Tree;
    ///
    /// let mut tree = Tree::new();
    /// tree.insert(String::from("cat"));
    ///
    /// assert!(tree.contains("cat"));
    /// assert!(!tree.contains("fish"));
    /// ```
    pub fn contains<Q>(&self, value: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.search(value).is_some()
    }

    /// Like [`Tree::contains`] but for values that might be absent.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidArgument`] if `value` is `None`.
    pub fn try_contains<Q>(&self, value: Option<&Q>) -> Result<bool>
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        value
            .map(|value| self.contains(value))
            .ok_or(Error::InvalidArgument)
    }

    /// Potentially finds the node holding a value equal to `value`. If no
    /// node matches, `None` is returned.
    ///
    /// # Examples
    ///
    /// ```
    /// use unbalanced_bst::Tree;
    ///
    /// let tree: Tree<_> = [2, 1, 3].into_iter().collect();
    ///
    /// let node = tree.search(&2).unwrap();
    /// assert_eq!(node.left().map(|n| n.value()), Some(&1));
    /// assert!(tree.search(&42).is_none());
    /// ```
    pub fn search<Q>(&self, value: &Q) -> Option<&Node<T>>
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let mut current = self.root.as_deref();
        while let Some(node) = current {
            current = match value.cmp(node.value().borrow()) {
                Ordering::Less => node.left(),
                Ordering::Equal => return Some(node),
                Ordering::Greater => node.right(),
            };
        }

        None
    }

    /// Like [`Tree::search`] but for values that might be absent.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidArgument`] if `value` is `None`.
    pub fn try_search<Q>(&self, value: Option<&Q>) -> Result<Option<&Node<T>>>
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        value
            .map(|value| self.search(value))
            .ok_or(Error::InvalidArgument)
    }
}

impl<T> FromIterator<T> for Tree<T>
where
    T: Ord,
{
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut tree = Self::new();
        tree.extend(iter);
        tree
    }
}

impl<T> Extend<T> for Tree<T>
where
    T: Ord,
{
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.insert(value);
        }
    }
}

impl<'a, T> IntoIterator for &'a Tree<T> {
    type Item = &'a T;
    type IntoIter = Traversal<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.inorder()
    }
}

/// An owning iterator that drains a [`Tree`] in ascending order.
pub struct IntoIter<T>(Tree<T>);

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.0.remove_min()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.0.len(), Some(self.0.len()))
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.0.remove_max()
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> FusedIterator for IntoIter<T> {}

impl<T> IntoIterator for Tree<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter(self)
    }
}
