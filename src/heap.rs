use std::marker::PhantomData;

use crate::{EmptyHeapError, Ordered, sift::{self, BoundedDescent, SiftDown}};

/// Rearrange `x` in place so that it satisfies the min-heap invariant.
/// Indices are fixed from the back, so by the time `i` is sifted both of its subtrees
/// are already heaps.  Total cost is O(n).
pub fn heapify<S: SiftDown, T: Ordered>(x: &mut [T]) {
    // everything from len/2 on is a leaf and trivially a heap
    for i in (0..x.len()/2).rev()
        { S::sift_down(x, i) }
}

/// Append `value` and sift it up.  O(log(n))
/// Sifting up doesn't depend on the strategy; `S` is only here so every operation is
/// called the same way.
pub fn push<S: SiftDown, T: Ordered>(x: &mut Vec<T>, value: T) {
    x.push(value);
    let last = x.len() - 1;
    sift::sift_up(x, last)
}

/// Remove and return the minimum.  O(log(n))
/// On an empty sequence this returns [`EmptyHeapError`] and does nothing else.
pub fn pop<S: SiftDown, T: Ordered>(x: &mut Vec<T>) -> Result<T, EmptyHeapError> {
    let l = x.len();
    if l == 0
        { return Err(EmptyHeapError) }
    x.swap(0, l - 1);
    let res = x.pop().ok_or(EmptyHeapError)?;
    if !x.is_empty()
        { S::sift_down(x, 0) }
    Ok(res)
}

/// The minimum of a heap, without removing it.
pub fn peek<T>(x: &[T]) -> Option<&T> {
    x.first()
}

/// Heapsort by repeated [`pop`]: ascending order, not stable.
pub fn sort<S: SiftDown, T: Ordered>(mut x: Vec<T>) -> Vec<T> {
    heapify::<S, T>(&mut x);
    let mut res = Vec::with_capacity(x.len());
    while let Ok(e) = pop::<S, T>(&mut x)
        { res.push(e) }
    res
}

/// Whether no element of `x` is strictly less than its parent.
pub fn is_heap<T: Ordered>(x: &[T]) -> bool {
    (1..x.len()).all(|i|!x[i].less_than(&x[sift::parent(i)]))
}

#[cfg(test)]
#[derive(Debug, PartialEq)]
pub(crate) enum HeapViolation {
    LessThanParent(usize),
    WrongCount(usize, usize)
}

#[cfg(test)]
pub(crate) fn check<T: Ordered>(x: &[T]) -> Result<(), HeapViolation> {
    match (1..x.len()).find(|&i|x[i].less_than(&x[sift::parent(i)])) {
        Some(i) => Err(HeapViolation::LessThanParent(i)),
        None => Ok(())
    }
}



/// An owned implicit binary min-heap.
/// - Find min: O(1)
/// - Pop min: O(log(n))
/// - Push: O(log(n))
/// - Heapify: O(n)
///
/// `S` picks the sift-down strategy; both give the same pop order.
pub struct BinHeap<T, S: SiftDown = BoundedDescent> {
    buf: Vec<T>,
    _strategy: PhantomData<S>
}

impl<T: Ordered, S: SiftDown> BinHeap<T, S> {
    /// Create an empty BinHeap
    pub fn new() -> Self {
        Self{buf: Vec::new(), _strategy: PhantomData}
    }

    /// Create a BinHeap out of a vector, heapifying it
    pub fn make(mut buf: Vec<T>) -> Self {
        heapify::<S, T>(&mut buf);
        Self{buf, _strategy: PhantomData}
    }

    pub fn len(&self) -> usize {
        self.buf.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    /// Get the minimum element without removing it
    pub fn peek_min(&self) -> Option<&T> {
        peek(&self.buf)
    }

    pub fn push(&mut self, e: T) {
        push::<S, T>(&mut self.buf, e)
    }

    /// Get the minimum element and remove it
    pub fn pop_min(&mut self) -> Result<T, EmptyHeapError> {
        pop::<S, T>(&mut self.buf)
    }

    /// Insert a new element and remove the min element in the resulting heap.
    /// If the heap is empty `e` comes straight back without touching the buffer.
    pub fn pushpop_min(&mut self, e: T) -> T {
        match self.buf.first() {
            Some(m) if m.less_than(&e) => {
                let res = std::mem::replace(&mut self.buf[0], e);
                S::sift_down(&mut self.buf, 0);
                res
            }
            _ => e
        }
    }

    /// Drain the heap in ascending order
    pub fn into_sorted_vec(mut self) -> Vec<T> {
        let mut res = Vec::with_capacity(self.buf.len());
        while let Ok(e) = self.pop_min()
            { res.push(e) }
        res
    }

    #[cfg(test)]
    pub(crate) fn check(&self, expected_len: usize) -> Result<(), HeapViolation> {
        if self.buf.len() != expected_len {
            return Err(HeapViolation::WrongCount(self.buf.len(), expected_len))
        }
        check(&self.buf)
    }
}

impl<T: Ordered, S: SiftDown> Default for BinHeap<T, S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Ordered, S: SiftDown> Extend<T> for BinHeap<T, S> {
    fn extend<U: IntoIterator<Item=T>>(&mut self, iter: U) {
        for x in iter {
            self.push(x)
        }
    }
}

impl<T: Ordered, S: SiftDown> From<Vec<T>> for BinHeap<T, S> {
    fn from(buf: Vec<T>) -> Self {
        Self::make(buf)
    }
}

impl<T: Ordered, S: SiftDown> FromIterator<T> for BinHeap<T, S> {
    fn from_iter<U: IntoIterator<Item=T>>(iter: U) -> Self {
        Self::make(iter.into_iter().collect())
    }
}

impl<'a, T, S: SiftDown> IntoIterator for &'a BinHeap<T, S> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;
    fn into_iter(self) -> Self::IntoIter {
        self.buf.iter()
    }
}

impl<T, S: SiftDown> From<BinHeap<T, S>> for Vec<T> {
    fn from(heap: BinHeap<T, S>) -> Self {
        heap.buf
    }
}
