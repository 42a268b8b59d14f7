//! Public sorting entry points.
//!
//! Every entry point funnels into the same kernel:
//! - [`xsort_with`] / [`xsort_ctx`]: comparator plus caller context.
//! - [`xsort_by`], [`xsort_by_key`], [`xsort`]: context-free conveniences.
//! - [`argsort_by`], [`argsort`], [`sort_records_by`]: index sorts for records wider than
//!   a [`Word`] (64-bit targets only).
//!
//! All sorts are stable and allocate one scratch buffer the size of the input.

use crate::core::{Comparator, INITIAL_FRAME_CAPACITY, Ordered, Word};
use crate::engine;
use std::cmp::Ordering;

/// Sorts `v` in place with a [`Comparator`] that is handed `ctx` on every call.
///
/// Slices of length 0 or 1 return immediately without allocating. Otherwise one scratch
/// buffer of `v.len()` elements is allocated for the duration of the call; allocation
/// failure aborts the process.
///
/// # Arguments
///
/// * `v` - The elements to sort.
/// * `cmp` - The ordering oracle.
/// * `ctx` - Opaque context threaded unchanged to every `cmp` call.
pub fn xsort_with<T, C, F>(v: &mut [T], cmp: F, ctx: &C)
where
    T: Word,
    C: ?Sized,
    F: Comparator<T, C>,
{
    if v.len() < 2 {
        return;
    }
    let mut ordered = Ordered::new(cmp, ctx);
    engine::sort(v, &mut ordered, INITIAL_FRAME_CAPACITY);
}

/// Sorts `v` in place with a closure comparator that is handed `ctx` on every call.
///
/// # Examples
///
/// Sorting handles by the records they point at, without building wrapper values:
///
/// ```
/// use xsort::xsort_ctx;
///
/// let prices = [4.5, 1.25, 3.0, 1.25];
/// let mut handles: Vec<u64> = (0..prices.len() as u64).collect();
///
/// xsort_ctx(
///     &mut handles,
///     |a, b, prices: &[f64]| prices[*a as usize].total_cmp(&prices[*b as usize]),
///     &prices[..],
/// );
///
/// assert_eq!(handles, vec![1, 3, 2, 0]);
/// ```
pub fn xsort_ctx<T, C, F>(v: &mut [T], cmp: F, ctx: &C)
where
    T: Word,
    C: ?Sized,
    F: FnMut(&T, &T, &C) -> Ordering,
{
    xsort_with(v, cmp, ctx);
}

/// Sorts `v` in place with a comparator that needs no context.
///
/// # Examples
///
/// ```
/// use xsort::xsort_by;
///
/// let mut v = vec![5i64, -3, 1, 4, -2];
/// xsort_by(&mut v, |a, b| b.cmp(a));
///
/// assert_eq!(v, vec![5, 4, 1, -2, -3]);
/// ```
pub fn xsort_by<T, F>(v: &mut [T], mut cmp: F)
where
    T: Word,
    F: FnMut(&T, &T) -> Ordering,
{
    xsort_with(v, |a: &T, b: &T, _: &()| cmp(a, b), &());
}

/// Sorts `v` in place by the key `key` extracts.
///
/// The key is recomputed on every comparison.
pub fn xsort_by_key<T, K, F>(v: &mut [T], mut key: F)
where
    T: Word,
    K: Ord,
    F: FnMut(&T) -> K,
{
    xsort_by(v, |a, b| key(a).cmp(&key(b)));
}

/// Sorts `v` in place in ascending order.
///
/// # Examples
///
/// ```
/// use xsort::xsort;
///
/// let mut v = vec![5u64, 3, 1, 4, 2];
/// xsort(&mut v);
///
/// assert_eq!(v, vec![1, 2, 3, 4, 5]);
/// ```
pub fn xsort<T: Word + Ord>(v: &mut [T]) {
    xsort_by(v, T::cmp);
}

/// Returns the indices that stably order `items` under `cmp`.
///
/// `items` itself is not modified; it is the context the index comparator reads through.
///
/// # Examples
///
/// ```
/// use xsort::argsort_by;
///
/// let records = [(1, "a"), (1, "b"), (0, "c")];
/// let indices = argsort_by(&records, |a, b| a.0.cmp(&b.0));
///
/// assert_eq!(indices, vec![2, 0, 1]);
/// ```
#[cfg(target_pointer_width = "64")]
pub fn argsort_by<U, F>(items: &[U], mut cmp: F) -> Vec<usize>
where
    F: FnMut(&U, &U) -> Ordering,
{
    let mut indices: Vec<usize> = (0..items.len()).collect();
    xsort_with(
        &mut indices,
        |a: &usize, b: &usize, items: &[U]| cmp(&items[*a], &items[*b]),
        items,
    );
    indices
}

/// Returns the indices that stably order `items` ascending.
#[cfg(target_pointer_width = "64")]
pub fn argsort<U: Ord>(items: &[U]) -> Vec<usize> {
    argsort_by(items, U::cmp)
}

/// Stably sorts records of any width by sorting their indices, then permuting in place.
///
/// # Examples
///
/// ```
/// use xsort::sort_records_by;
///
/// let mut names = vec!["banana".to_string(), "apple".to_string(), "cherry".to_string()];
/// sort_records_by(&mut names, |a, b| a.cmp(b));
///
/// assert_eq!(names, vec!["apple", "banana", "cherry"]);
/// ```
#[cfg(target_pointer_width = "64")]
pub fn sort_records_by<D, F>(data: &mut [D], cmp: F)
where
    F: FnMut(&D, &D) -> Ordering,
{
    let indices = argsort_by(data, cmp);
    permute(data, indices);
}

/// Rearranges `data` so that position `i` receives the element previously at `indices[i]`.
///
/// Walks each cycle of the permutation once, swapping elements into place.
///
/// # Panics
///
/// Panics if `indices` is not a permutation of `0..data.len()`.
pub fn permute<D>(data: &mut [D], mut indices: Vec<usize>) {
    assert_eq!(data.len(), indices.len(), "permutation length mismatch");
    let mut seen = vec![false; indices.len()];
    for &index in &indices {
        assert!(
            index < seen.len() && !std::mem::replace(&mut seen[index], true),
            "indices are not a permutation"
        );
    }

    for start in 0..data.len() {
        let mut current = start;
        while indices[current] != start {
            let next = indices[current];
            data.swap(current, next);
            indices[current] = current;
            current = next;
        }
        indices[current] = current;
    }
}
