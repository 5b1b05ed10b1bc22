//! Errors surfaced by [`Tree`][crate::Tree].
//!
//! Both variants are programmer errors. The tree checks for them before it
//! changes anything, so a failed call never leaves a partially modified tree.

/// The ways a tree operation can be rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// An absent value was handed to one of the `try_*` operations.
    #[error("cannot use an absent value with a binary search tree")]
    InvalidArgument,
    /// The root of a tree without any nodes was requested.
    #[error("tree is empty")]
    EmptyTree,
}

/// Shorthand for results carrying this crate's [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages() {
        assert_eq!(
            Error::InvalidArgument.to_string(),
            "cannot use an absent value with a binary search tree"
        );
        assert_eq!(Error::EmptyTree.to_string(), "tree is empty");
    }
}
