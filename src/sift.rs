use crate::Ordered;

#[inline]
pub(crate) fn parent(i: usize) -> usize {
    (i - 1) >> 1
}

#[inline]
pub(crate) fn left(i: usize) -> usize {
    2*i + 1
}

#[inline]
pub(crate) fn right(i: usize) -> usize {
    2*i + 2
}

/// Index of the smaller child of `i`, or `None` if `i` is a leaf.
/// A missing right child means the left child wins by default.  When both exist,
/// the left child is only chosen if it is strictly less than the right one.
pub fn min_child<T: Ordered>(x: &[T], i: usize) -> Option<usize> {
    let (l, r) = (left(i), right(i));
    if l >= x.len()
        { return None }
    if r >= x.len()
        { return Some(l) }
    Some(if x[l].less_than(&x[r]) { l } else { r })
}

/// Move the element at `i` toward the root while it is strictly less than its parent,
/// but never above index `top`.  `i` must lie in the subtree rooted at `top`.
pub fn sift_up_to<T: Ordered>(x: &mut [T], mut i: usize, top: usize) {
    while i > top {
        let p = parent(i);
        if !x[i].less_than(&x[p])
            { break }
        x.swap(i, p);
        i = p
    }
}

/// Move the element at `i` toward the root while it is strictly less than its parent.
pub fn sift_up<T: Ordered>(x: &mut [T], i: usize) {
    sift_up_to(x, i, 0)
}

/// A way of restoring the heap invariant below an index.
///
/// Precondition: the subtrees rooted at both children of `i` are valid heaps; the element
/// at `i` itself may be out of place.
/// Postcondition: the whole subtree rooted at `i` is a valid heap, and nothing outside
/// that subtree has moved.
pub trait SiftDown {
    fn sift_down<T: Ordered>(x: &mut [T], i: usize);
}

/// Swap the element with its smaller child only while that child is strictly smaller,
/// stopping as soon as it is in place.  Does one swap per level actually descended.
#[derive(Debug, Clone, Copy, Default)]
pub struct BoundedDescent;

impl SiftDown for BoundedDescent {
    fn sift_down<T: Ordered>(x: &mut [T], mut i: usize) {
        while let Some(c) = min_child(x, i) {
            if !x[c].less_than(&x[i])
                { break }
            x.swap(i, c);
            i = c
        }
    }
}

/// Push the element all the way to a leaf along the path of smaller children without
/// comparing against it, then sift it back up to where it belongs.
/// One comparison per level on the way down instead of two.
#[derive(Debug, Clone, Copy, Default)]
pub struct FullDescent;

impl SiftDown for FullDescent {
    fn sift_down<T: Ordered>(x: &mut [T], i: usize) {
        let mut j = i;
        while let Some(c) = min_child(x, j) {
            x.swap(j, c);
            j = c
        }
        // ancestors of i may not be heapified yet (heapify works bottom up), so stop at i
        sift_up_to(x, j, i)
    }
}
