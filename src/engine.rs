//! Iterative divide-and-merge driver.
//!
//! Recursion over quarters is replaced by an explicit stack of [`Frame`]s living on the
//! heap. Each frame records the run it owns and the [`Phase`] it resumes in, so a parent
//! is re-pushed beneath each child it schedules and picks up where it left off once the
//! child has finished. Native stack usage stays constant regardless of input length.

use crate::core::{BASE_CASE_MAX, Comparator, Ordered, Segment, Word};
use crate::kernel::{oddeven_sort, parity_merge, rotate};
use cuneiform::cuneiform;
use log::{debug, trace, warn};

/// Step of the quarter protocol a frame executes when it is next popped.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Phase {
    /// Sort directly if small, otherwise split and schedule the first quarter.
    Entry,
    /// First quarter sorted, schedule the second.
    AfterFirst,
    /// Second quarter sorted, schedule the third.
    AfterSecond,
    /// Third quarter sorted, schedule the fourth.
    AfterThird,
    /// All quarters sorted, resolve the run.
    AfterFourth,
}

// One frame per cache line.
#[cuneiform]
#[derive(Clone, Copy, Debug)]
struct Frame {
    start: usize,
    len: usize,
    segment: Segment,
    phase: Phase,
}

impl Frame {
    fn entry(start: usize, len: usize) -> Self {
        Self {
            start,
            len,
            segment: Segment::default(),
            phase: Phase::Entry,
        }
    }
}

/// How a fully partitioned run was resolved.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Resolution {
    Ordered,
    Rotated,
    Merged,
}

/// Counters collected over one engine run.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub(crate) struct EngineReport {
    /// Largest number of frames live at once.
    pub peak_depth: usize,
    /// Number of times the frame stack doubled.
    pub growths: usize,
    /// Runs found already in order after their quarters were sorted.
    pub ordered: usize,
    /// Runs resolved by block rotation.
    pub rotated: usize,
    /// Runs resolved by parity merges.
    pub merged: usize,
}

/// Growable frame stack with explicit doubling.
struct WorkStack {
    frames: Vec<Frame>,
    capacity: usize,
    report: EngineReport,
}

impl WorkStack {
    fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(2);
        Self {
            frames: Vec::with_capacity(capacity),
            capacity,
            report: EngineReport::default(),
        }
    }

    /// Guarantees room for the two pushes a popped frame may issue.
    #[inline]
    fn reserve_headroom(&mut self) {
        if self.frames.len() + 1 >= self.capacity {
            self.capacity *= 2;
            self.frames.reserve_exact(self.capacity - self.frames.len());
            self.report.growths += 1;
            warn!("resizing xsort work stack for {} frames", self.capacity);
        }
    }

    #[inline]
    fn push(&mut self, frame: Frame) {
        self.frames.push(frame);
        self.report.peak_depth = self.report.peak_depth.max(self.frames.len());
    }

    #[inline]
    fn pop(&mut self) -> Option<Frame> {
        self.frames.pop()
    }

    /// Re-pushes `parent` to resume in `next`, then pushes quarter `index` on top of it.
    #[inline]
    fn schedule(&mut self, mut parent: Frame, index: usize, next: Phase) {
        let (offset, len) = parent.segment.quarter(index);
        parent.phase = next;
        self.push(parent);
        self.push(Frame::entry(parent.start + offset, len));
    }
}

/// Sorts `v` with a fresh scratch buffer and a stack of `frame_capacity` initial frames.
pub(crate) fn sort<T, C, F>(
    v: &mut [T],
    cmp: &mut Ordered<'_, F, C>,
    frame_capacity: usize,
) -> EngineReport
where
    T: Word,
    C: ?Sized,
    F: Comparator<T, C>,
{
    trace!("xsort: sorting {} elements", v.len());

    let mut swap = v.to_vec();
    let mut stack = WorkStack::with_capacity(frame_capacity);
    stack.push(Frame::entry(0, v.len()));

    loop {
        stack.reserve_headroom();
        let Some(mut frame) = stack.pop() else {
            break;
        };
        let run = &mut v[frame.start..frame.start + frame.len];

        match frame.phase {
            Phase::Entry => {
                if frame.len <= BASE_CASE_MAX {
                    oddeven_sort(run, cmp);
                    continue;
                }
                frame.segment = Segment::split(frame.len);
                stack.schedule(frame, 0, Phase::AfterFirst);
            }
            Phase::AfterFirst => stack.schedule(frame, 1, Phase::AfterSecond),
            Phase::AfterSecond => stack.schedule(frame, 2, Phase::AfterThird),
            Phase::AfterThird => stack.schedule(frame, 3, Phase::AfterFourth),
            Phase::AfterFourth => match resolve(run, &mut swap, &frame.segment, cmp) {
                Resolution::Ordered => stack.report.ordered += 1,
                Resolution::Rotated => stack.report.rotated += 1,
                Resolution::Merged => stack.report.merged += 1,
            },
        }
    }

    let report = stack.report;
    if v.len() > BASE_CASE_MAX {
        debug!(
            "xsort: {} elements, peak depth {}, {} stack growths, {} ordered / {} rotated / {} merged runs",
            v.len(),
            report.peak_depth,
            report.growths,
            report.ordered,
            report.rotated,
            report.merged
        );
    }
    report
}

/// Combines the four individually sorted quarters of `run`.
///
/// Only the elements at quarter boundaries are inspected to pick the fast paths, so some
/// sorted or reversed inputs still go through the merges.
fn resolve<T, C, F>(
    run: &mut [T],
    swap: &mut [T],
    seg: &Segment,
    cmp: &mut Ordered<'_, F, C>,
) -> Resolution
where
    T: Word,
    C: ?Sized,
    F: Comparator<T, C>,
{
    let len = seg.len();
    let half = seg.left;
    let mid1 = seg.q1;
    let mid2 = seg.left + seg.q3;

    if !cmp.gt(&run[mid1 - 1], &run[mid1])
        && !cmp.gt(&run[half - 1], &run[half])
        && !cmp.gt(&run[mid2 - 1], &run[mid2])
    {
        return Resolution::Ordered;
    }

    // Quarters in strictly descending block order: reassemble them back to front.
    if cmp.gt(&run[0], &run[half - 1])
        && cmp.gt(&run[mid1], &run[mid2 - 1])
        && cmp.gt(&run[half], &run[len - 1])
    {
        rotate(run, swap, seg.q1, seg.q2 + seg.right);
        rotate(run, swap, seg.q2, seg.right);
        rotate(run, swap, seg.q3, seg.q4);
        return Resolution::Rotated;
    }

    parity_merge(&run[..half], &mut swap[..half], seg.q1, seg.q2, cmp);
    parity_merge(&run[half..], &mut swap[half..len], seg.q3, seg.q4, cmp);
    parity_merge(&swap[..len], run, seg.left, seg.right, cmp);
    Resolution::Merged
}
