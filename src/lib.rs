//! Implicit binary min-heaps that live inside a caller's `Vec`.
//!
//! The heap is not a separate structure: it is an arrangement of the elements of a
//! plain sequence such that every element is no greater than its children at `2i + 1`
//! and `2i + 2`.  The free functions in [`heap`] maintain that arrangement in place,
//! and [`heap::BinHeap`] wraps them around an owned buffer.
//!
//! Restoring the invariant below the root is delegated to a [`sift::SiftDown`] strategy,
//! so the same `heapify` / `push` / `pop` code runs with either
//! [`sift::BoundedDescent`] or [`sift::FullDescent`].

pub mod sift;
pub mod heap;

use std::{error::Error, fmt};



/// The only capability the heap needs from its elements: a strict less-than.
/// It should be irreflexive and transitive; if it isn't, the resulting arrangement is
/// unspecified (but nothing will index out of bounds).
/// Every `PartialOrd` type gets this for free.
pub trait Ordered {
    fn less_than(&self, other: &Self) -> bool;
}

impl<T: PartialOrd + ?Sized> Ordered for T {
    fn less_than(&self, other: &Self) -> bool {
        self < other
    }
}



/// Returned by [`heap::pop`] and [`heap::BinHeap::pop_min`] when there is nothing to pop.
/// The sequence is left untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct EmptyHeapError;

impl fmt::Display for EmptyHeapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "pop from an empty heap")
    }
}

impl Error for EmptyHeapError {}
