//! A [`skip list`] is a way of storing ordered elements so that insertion,
//! membership search, and removal all run in `O(log n)` on average.
//!
//! Conceptually the structure is a stack of linked lists. Level 0 is the full
//! list holding every element; each level above it holds a random subset of
//! the level immediately below, chosen with a geometric distribution so that
//! traversals can skip large runs of the base list:
//!
//! ```text
//! Level 2: head ----------> [6] ------------------> nil
//! Level 1: head --> [3] --> [6] ----------> [9] --> nil
//! Level 0: head --> [3] --> [6] --> [7] --> [9] --> nil
//! ```
//!
//! Nodes live in a slot arena owned by the list and reference each other by
//! stable indices rather than ownership handles, so the structure carries no
//! reference-counting overhead and cannot form cycles.
//!
//! [`skip list`]: https://en.wikipedia.org/wiki/Skip_list

mod arena;
pub mod errs;
pub mod level_generator;
pub mod skiplist;
mod skipnode;

pub use crate::{
    errs::ListError,
    skiplist::SkipList,
};
