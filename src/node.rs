//! The cells a [`Tree`][crate::Tree] is built from.

/// An owned, possibly empty, child slot.
pub(crate) type Link<T> = Option<Box<Node<T>>>;

/// A `Node` stores one value and exclusively owns up to two children. Every
/// value in the left subtree orders before `value` and every value in the right
/// subtree orders after it. The [`Tree`][crate::Tree] maintains that invariant;
/// a `Node` on its own checks nothing.
#[derive(Debug)]
pub struct Node<T> {
    value: T,
    pub(crate) left: Link<T>,
    pub(crate) right: Link<T>,
}

impl<T> Node<T> {
    /// Construct a boxed leaf holding `value`.
    pub(crate) fn new_boxed(value: T) -> Box<Self> {
        Box::new(Self {
            value,
            left: None,
            right: None,
        })
    }

    /// The value stored in this node.
    pub fn value(&self) -> &T {
        &self.value
    }

    /// The root of the left subtree, if there is one.
    pub fn left(&self) -> Option<&Self> {
        self.left.as_deref()
    }

    /// The root of the right subtree, if there is one.
    pub fn right(&self) -> Option<&Self> {
        self.right.as_deref()
    }

    /// Returns `true` if this node has no children.
    pub fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }

    /// Consumes the node and returns its value and children.
    pub(crate) fn into_parts(self) -> (T, Link<T>, Link<T>) {
        (self.value, self.left, self.right)
    }
}
