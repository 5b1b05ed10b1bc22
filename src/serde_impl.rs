//! `serde` support, enabled with the `serde` feature.
//!
//! A [`Tree`] serializes as the sequence of its values in pre-order.
//! Deserializing inserts them one by one, which rebuilds exactly the same
//! shape. Repeated values in the input are dropped, just as [`Tree::insert`]
//! drops them.

use serde::de::{Deserialize, Deserializer, SeqAccess, Visitor};
use serde::ser::{Serialize, Serializer};
use std::fmt;
use std::marker::PhantomData;

use crate::Tree;

impl<T> Serialize for Tree<T>
where
    T: Serialize,
{
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.preorder())
    }
}

struct TreeVisitor<T>(PhantomData<T>);

impl<'de, T> Visitor<'de> for TreeVisitor<T>
where
    T: Deserialize<'de> + Ord,
{
    type Value = Tree<T>;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a sequence of tree values")
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Self::Value, A::Error> {
        let mut tree = Tree::new();
        while let Some(value) = seq.next_element()? {
            tree.insert(value);
        }
        Ok(tree)
    }
}

impl<'de, T> Deserialize<'de> for Tree<T>
where
    T: Deserialize<'de> + Ord,
{
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_seq(TreeVisitor(PhantomData))
    }
}
