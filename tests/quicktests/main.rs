//! Exercises the public contract of the tree the way callers use it.

mod scenarios;
mod word_index;
