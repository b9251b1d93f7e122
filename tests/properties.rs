use binheap::{EmptyHeapError, heap::{self, BinHeap}, sift::{BoundedDescent, FullDescent, SiftDown}};
use proptest::prelude::*;

#[cfg(not(feature = "stress_tests"))]
const VEC_SIZE: usize = 300;
#[cfg(feature = "stress_tests")]
const VEC_SIZE: usize = 5000;

#[cfg(not(feature = "stress_tests"))]
const PROPTEST_CASES: u32 = 256;
#[cfg(feature = "stress_tests")]
const PROPTEST_CASES: u32 = 4096;

fn sorted(mut v: Vec<i32>) -> Vec<i32> {
    v.sort();
    v
}

fn heapified<S: SiftDown>(mut v: Vec<i32>) -> Vec<i32> {
    heap::heapify::<S, _>(&mut v);
    v
}

fn check_push<S: SiftDown>(v: Vec<i32>, e: i32) -> Result<(), TestCaseError> {
    let mut x = heapified::<S>(v);
    let n = x.len();
    heap::push::<S, _>(&mut x, e);
    prop_assert!(heap::is_heap(&x));
    prop_assert_eq!(x.len(), n + 1);
    Ok(())
}

fn reheapify<S: SiftDown>(v: Vec<i32>) -> Result<(Vec<i32>, Vec<i32>), TestCaseError> {
    let once = heapified::<S>(v);
    let a = heapified::<S>(once.clone());
    let b = heapified::<S>(once.clone());
    prop_assert!(heap::is_heap(&a));
    prop_assert_eq!(&a, &b);
    prop_assert_eq!(sorted(a.clone()), sorted(once.clone()));
    Ok((once, a))
}

fn check_pop<S: SiftDown>(v: Vec<i32>) -> Result<(), TestCaseError> {
    let mut x = heapified::<S>(v);
    let min = x.iter().min().copied();
    match heap::pop::<S, _>(&mut x) {
        Ok(e) => {
            prop_assert_eq!(Some(e), min);
            prop_assert!(heap::is_heap(&x));
        }
        Err(EmptyHeapError) => {
            prop_assert!(min.is_none());
            prop_assert!(x.is_empty());
        }
    }
    Ok(())
}

proptest!(
    #![proptest_config(ProptestConfig::with_cases(PROPTEST_CASES))]

    #[test]
    fn heapify_establishes_invariant(v in proptest::collection::vec(-100..100i32, 0..VEC_SIZE)) {
        prop_assert!(heap::is_heap(&heapified::<BoundedDescent>(v.clone())));
        prop_assert!(heap::is_heap(&heapified::<FullDescent>(v.clone())));
        prop_assert_eq!(sorted(heapified::<FullDescent>(v.clone())), sorted(v));
    }

    #[test]
    fn both_strategies_sort(v in proptest::collection::vec(any::<i32>(), 0..VEC_SIZE)) {
        let expected = sorted(v.clone());
        prop_assert_eq!(&heap::sort::<BoundedDescent, _>(v.clone()), &expected);
        prop_assert_eq!(&heap::sort::<FullDescent, _>(v), &expected);
    }

    #[test]
    fn heapify_on_heap_is_deterministic(v in proptest::collection::vec(-5..5i32, 0..VEC_SIZE)) {
        let (once, again) = reheapify::<BoundedDescent>(v.clone())?;
        prop_assert_eq!(once, again);
        reheapify::<FullDescent>(v)?;
    }

    #[test]
    fn push_preserves_invariant(v in proptest::collection::vec(-50..50i32, 0..VEC_SIZE), e in -60..60i32) {
        check_push::<BoundedDescent>(v.clone(), e)?;
        check_push::<FullDescent>(v, e)?;
    }

    #[test]
    fn pop_returns_min(v in proptest::collection::vec(-50..50i32, 0..VEC_SIZE)) {
        check_pop::<BoundedDescent>(v.clone())?;
        check_pop::<FullDescent>(v)?;
    }

    #[test]
    fn wrapper_matches_free_functions(v in proptest::collection::vec(any::<i16>(), 0..VEC_SIZE)) {
        let a: BinHeap<i16, FullDescent> = v.iter().copied().collect();
        let mut b = BinHeap::<i16, BoundedDescent>::new();
        b.extend(v.iter().copied());
        prop_assert_eq!(a.into_sorted_vec(), b.into_sorted_vec());
    }
);

#[test]
fn scenario_from_docs() {
    let x = vec![5, 2, 4, 1, 3, 1, 5, 6, 7];
    let expected = vec![1, 1, 2, 3, 4, 5, 5, 6, 7];
    assert_eq!(heap::sort::<BoundedDescent, _>(x.clone()), expected);
    assert_eq!(heap::sort::<FullDescent, _>(x), expected);
}

#[test]
fn empty_pop_is_an_error() {
    let mut heap = BinHeap::<f64, FullDescent>::new();
    assert_eq!(heap.pop_min(), Err(EmptyHeapError));
    heap.push(0.5);
    assert_eq!(heap.pop_min(), Ok(0.5));
    assert_eq!(heap.pop_min(), Err(EmptyHeapError));
    let err: Box<dyn std::error::Error> = Box::new(EmptyHeapError);
    assert_eq!(err.to_string(), "pop from an empty heap");
}
