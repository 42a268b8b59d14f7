//! Leaf primitives of the sorting kernel.
//!
//! - **Compare-exchange**: branchless conditional swap of two neighbours.
//! - **Odd-even sort**: adaptive transposition sort for runs of at most
//!   [`BASE_CASE_MAX`](crate::core::BASE_CASE_MAX) elements.
//! - **Rotation**: block move through the scratch buffer, no comparisons.
//! - **Parity merge**: stable two-run merge driven from both ends at once.

use crate::core::{Comparator, Ordered, WORD_SIZE, Word};

/// Swaps `v[i]` and `v[i + 1]` when the first must follow the second.
///
/// Both slots are always rewritten, the swap only selects which value lands where.
/// Returns whether the pair was exchanged.
#[inline(always)]
pub(crate) fn exchange<T, C, F>(v: &mut [T], i: usize, cmp: &mut Ordered<'_, F, C>) -> bool
where
    T: Word,
    C: ?Sized,
    F: Comparator<T, C>,
{
    const { assert!(size_of::<T>() == WORD_SIZE) };

    let pair = [v[i], v[i + 1]];
    let swap = cmp.gt(&pair[0], &pair[1]) as usize;
    v[i] = pair[swap];
    v[i + 1] = pair[swap ^ 1];
    swap != 0
}

/// Sorts a run of at most seven elements in place.
///
/// Runs of four or more use odd-even transposition sweeps anchored at the tail. The first
/// sweep is always followed by one of the other parity; after that, sorting stops at the
/// first sweep that exchanges nothing, or after `len` sweeps.
pub(crate) fn oddeven_sort<T, C, F>(v: &mut [T], cmp: &mut Ordered<'_, F, C>)
where
    T: Word,
    C: ?Sized,
    F: Comparator<T, C>,
{
    match v.len() {
        0 | 1 => {}
        2 => {
            exchange(v, 0, cmp);
        }
        3 => {
            exchange(v, 0, cmp);
            if exchange(v, 1, cmp) {
                exchange(v, 0, cmp);
            }
        }
        len => {
            let mut first = true;
            for sweep in 0..len {
                let start = len - 3 + sweep % 2;
                let mut exchanged = false;
                for i in (0..=start).rev().step_by(2) {
                    exchanged |= exchange(v, i, cmp);
                }
                if !(first | exchanged) {
                    break;
                }
                first = false;
            }
        }
    }
}

/// Moves the first `left` elements of `run` behind the following `right` elements.
///
/// `swap` must hold at least `left` elements.
#[inline]
pub(crate) fn rotate<T: Word>(run: &mut [T], swap: &mut [T], left: usize, right: usize) {
    swap[..left].copy_from_slice(&run[..left]);
    run.copy_within(left..left + right, 0);
    run[right..right + left].copy_from_slice(&swap[..left]);
}

/// Merges the sorted runs `src[..left]` and `src[left..left + right]` into `dst`.
///
/// The head front emits the smallest remaining element (ties go to the left run) while
/// the tail front emits the largest (ties go to the right run), so the two meet without
/// gap or overlap. `right` must be `left` or `left + 1`, and `left` at least one.
///
/// If the fronts did not meet exactly the comparator is not a consistent order; `dst` then
/// receives an unmodified copy of `src` so no element is lost or duplicated.
pub(crate) fn parity_merge<T, C, F>(
    src: &[T],
    dst: &mut [T],
    left: usize,
    right: usize,
    cmp: &mut Ordered<'_, F, C>,
) where
    T: Word,
    C: ?Sized,
    F: Comparator<T, C>,
{
    debug_assert!(left >= 1 && (right == left || right == left + 1));

    let len = left + right;
    let src = &src[..len];
    let dst = &mut dst[..len];

    let mut head = Front { l: 0, r: left, out: 0 };
    let mut tail = Front { l: left - 1, r: len - 1, out: len - 1 };

    if left < right {
        head.step_forward(src, dst, cmp);
    }
    for _ in 1..left {
        head.step_forward(src, dst, cmp);
        tail.step_backward(src, dst, cmp);
    }
    tail.step_backward(src, dst, cmp);
    head.step_forward(src, dst, cmp);

    if head.l != tail.l.wrapping_add(1) || head.r != tail.r.wrapping_add(1) {
        dst.copy_from_slice(src);
    }
}

/// Cursor pair into the two source runs, plus the destination slot.
struct Front {
    l: usize,
    r: usize,
    out: usize,
}

impl Front {
    #[inline(always)]
    fn step_forward<T, C, F>(&mut self, src: &[T], dst: &mut [T], cmp: &mut Ordered<'_, F, C>)
    where
        T: Word,
        C: ?Sized,
        F: Comparator<T, C>,
    {
        let (a, b) = (src[self.l], src[self.r]);
        let take_right = cmp.gt(&a, &b);
        dst[self.out] = if take_right { b } else { a };
        self.l += !take_right as usize;
        self.r += take_right as usize;
        self.out += 1;
    }

    #[inline(always)]
    fn step_backward<T, C, F>(&mut self, src: &[T], dst: &mut [T], cmp: &mut Ordered<'_, F, C>)
    where
        T: Word,
        C: ?Sized,
        F: Comparator<T, C>,
    {
        let (a, b) = (src[self.l], src[self.r]);
        let take_left = cmp.gt(&a, &b);
        dst[self.out] = if take_left { a } else { b };
        self.l = self.l.wrapping_sub(take_left as usize);
        self.r = self.r.wrapping_sub(!take_left as usize);
        self.out = self.out.wrapping_sub(1);
    }
}
