//! Core traits and types for xsort.
//!
//! This module defines:
//! - [`Word`]: The sealed marker for the 8-byte elements the kernel moves around.
//! - [`Comparator`]: The three-way ordering oracle, with its opaque context.
//! - Segment: Internal halves/quarters split of a run.

use std::cmp::Ordering;

/// Largest run handed straight to the base-case sorter.
pub const BASE_CASE_MAX: usize = 7;

/// Number of work-stack frames allocated before the first growth event.
pub const INITIAL_FRAME_CAPACITY: usize = 128;

/// Width of every element the kernel sorts, in bytes.
pub const WORD_SIZE: usize = 8;

mod sealed {
    pub trait Sealed {}
}

/// A fixed-width, 8-byte element.
///
/// The kernel never looks inside a `Word`: it only copies it and hands references to the
/// [`Comparator`]. To sort wider records, sort indices or references to them and resolve
/// the real data through the comparator context (see [`argsort_by`](crate::argsort_by)).
///
/// This trait is sealed. It is implemented for `u64`, `i64` and `f64` everywhere, and for
/// `usize`, `isize`, shared references and raw pointers on 64-bit targets.
pub trait Word: Copy + sealed::Sealed {}

macro_rules! impl_word {
    ($($ty:ty),*) => {
        $(
            impl sealed::Sealed for $ty {}
            impl Word for $ty {}
        )*
    };
}

impl_word!(u64, i64, f64);

#[cfg(target_pointer_width = "64")]
impl_word!(usize, isize);

#[cfg(target_pointer_width = "64")]
impl<T> sealed::Sealed for &T {}
#[cfg(target_pointer_width = "64")]
impl<T> Word for &T {}

#[cfg(target_pointer_width = "64")]
impl<T> sealed::Sealed for *const T {}
#[cfg(target_pointer_width = "64")]
impl<T> Word for *const T {}

#[cfg(target_pointer_width = "64")]
impl<T> sealed::Sealed for *mut T {}
#[cfg(target_pointer_width = "64")]
impl<T> Word for *mut T {}

/// A three-way ordering oracle that may consult a caller-supplied context.
///
/// `Less` places `a` before `b`, `Greater` places it after, and `Equal` keeps the input
/// order. The comparator is expected to be a consistent weak ordering. If it is not, the
/// result is still a permutation of the input but its order is unspecified.
///
/// Any `FnMut(&T, &T, &C) -> Ordering` is a comparator, and so is any type implementing
/// this trait directly, such as a collation table that carries its own state:
///
/// ```
/// use std::cmp::Ordering;
/// use xsort::{xsort_with, Comparator};
///
/// /// Orders handles by the length of the name they point at.
/// struct ByNameLength;
///
/// impl<'n> Comparator<u64, [&'n str]> for ByNameLength {
///     fn compare(&mut self, a: &u64, b: &u64, names: &[&'n str]) -> Ordering {
///         names[*a as usize].len().cmp(&names[*b as usize].len())
///     }
/// }
///
/// let names = ["charlie", "al", "bob", "dee"];
/// let mut handles: Vec<u64> = (0..names.len() as u64).collect();
/// xsort_with(&mut handles, ByNameLength, &names[..]);
///
/// // Stable: "bob" and "dee" keep their input order.
/// assert_eq!(handles, vec![1, 2, 3, 0]);
/// ```
pub trait Comparator<T, C: ?Sized> {
    /// Orders `a` relative to `b`.
    fn compare(&mut self, a: &T, b: &T, ctx: &C) -> Ordering;
}

impl<T, C: ?Sized, F> Comparator<T, C> for F
where
    F: FnMut(&T, &T, &C) -> Ordering,
{
    #[inline(always)]
    fn compare(&mut self, a: &T, b: &T, ctx: &C) -> Ordering {
        self(a, b, ctx)
    }
}

/// A comparator bound to its context for the duration of one sort call.
pub(crate) struct Ordered<'c, F, C: ?Sized> {
    cmp: F,
    ctx: &'c C,
}

impl<'c, F, C: ?Sized> Ordered<'c, F, C> {
    pub(crate) fn new(cmp: F, ctx: &'c C) -> Self {
        Self { cmp, ctx }
    }

    /// `true` when `a` must be placed after `b`.
    #[inline(always)]
    pub(crate) fn gt<T>(&mut self, a: &T, b: &T) -> bool
    where
        F: Comparator<T, C>,
    {
        self.cmp.compare(a, b, self.ctx) == Ordering::Greater
    }
}

/// Split of a run into two halves and four quarters.
///
/// The first half (and the first quarter of each half) takes the smaller share when the
/// length is odd, so `left <= right`, `q1 <= q2` and `q3 <= q4`, each differing by at most one.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub(crate) struct Segment {
    pub left: usize,
    pub q1: usize,
    pub q2: usize,
    pub right: usize,
    pub q3: usize,
    pub q4: usize,
}

impl Segment {
    pub(crate) fn split(len: usize) -> Self {
        let left = len / 2;
        let right = len - left;
        Self {
            left,
            q1: left / 2,
            q2: left - left / 2,
            right,
            q3: right / 2,
            q4: right - right / 2,
        }
    }

    /// Offset and length of quarter `index` (0..4) within the run.
    #[inline]
    pub(crate) fn quarter(&self, index: usize) -> (usize, usize) {
        match index {
            0 => (0, self.q1),
            1 => (self.q1, self.q2),
            2 => (self.left, self.q3),
            _ => (self.left + self.q3, self.q4),
        }
    }

    #[inline]
    pub(crate) fn len(&self) -> usize {
        self.left + self.right
    }
}
