use std::cmp::Ordering;

use tracing::{debug, trace};

use super::pivot::{PivotPicker, RandomPivot};
use crate::error::SortError;

/// Work done by one sort call.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SortStats {
    /// Element comparisons made while partitioning.
    pub comparisons: usize,
    /// Exchanges of two distinct positions, pivot placement included.
    pub swaps: usize,
}

/// Sorts `v` in place with pivots drawn from the thread-local RNG.
pub fn qsort<T: Ord + Copy>(v: &mut [T]) {
    qsort_with(v, &mut RandomPivot::thread());
}

pub fn qsort_with<T: Ord + Copy, P: PivotPicker>(v: &mut [T], picker: &mut P) {
    qsort_counted(v, picker);
}

/// Like [`qsort_with`], and reports how much work the sort took.
pub fn qsort_counted<T: Ord + Copy, P: PivotPicker>(v: &mut [T], picker: &mut P) -> SortStats {
    let mut stats = SortStats::default();
    let len = v.len();

    if len <= 1 {
        return stats;
    }

    debug!(len, "sorting slice");
    sort(v, 0, len - 1, picker, &mut stats);
    debug!(comparisons = stats.comparisons, swaps = stats.swaps, "sorted slice");
    stats
}

/// Sorts the inclusive range `[low, high]` of `v` in place.
///
/// Elements outside the range are left untouched. An empty slice or
/// `low > high` is already sorted and returns `Ok(())`.
///
/// # Errors
///
/// [`SortError::OutOfBounds`] if `high >= v.len()`; `v` is not modified.
pub fn sort_range<T, P>(
    v: &mut [T],
    low: usize,
    high: usize,
    picker: &mut P,
) -> Result<(), SortError>
where
    T: Ord + Copy,
    P: PivotPicker,
{
    let len = v.len();
    if len == 0 || low > high {
        return Ok(());
    }
    if high >= len {
        return Err(SortError::OutOfBounds { index: high, len });
    }

    debug!(len, low, high, "sorting range");
    sort(v, low, high, picker, &mut SortStats::default());
    Ok(())
}

fn sort<T, P>(
    v: &mut [T],
    mut low: usize,
    mut high: usize,
    picker: &mut P,
    stats: &mut SortStats,
) where
    T: Ord + Copy,
    P: PivotPicker,
{
    // larger halves wait here while the smaller one is processed
    let mut pending: Vec<(usize, usize)> = Vec::new();

    loop {
        while low < high {
            let k = picker.pick(&*v, low, high);
            debug_assert!(low <= k && k <= high, "pivot {k} outside [{low}, {high}]");
            if k != low {
                v.swap(low, k);
                stats.swaps += 1;
            }

            let (lt, gt) = partition(v, low, high, stats);
            trace!(pivot = k, lt, gt, "partitioned");

            let left_len = lt - low;
            let right_len = high - gt;
            if left_len < right_len {
                if right_len > 1 {
                    pending.push((gt + 1, high));
                }
                if left_len <= 1 {
                    break;
                }
                high = lt - 1;
            } else {
                if left_len > 1 {
                    pending.push((low, lt - 1));
                }
                if right_len <= 1 {
                    break;
                }
                low = gt + 1;
            }
        }

        match pending.pop() {
            Some((l, h)) => {
                low = l;
                high = h;
            }
            None => return,
        }
    }
}

/// Three-way partition of `[low, high]` around the value at `v[low]`.
///
/// Returns `(lt, gt)` such that `[low, lt)` holds values less than the pivot,
/// `[lt, gt]` values equal to it and `(gt, high]` values greater. The equal
/// zone is never empty.
///
/// # Panics
///
/// If `low > high` or `high >= v.len()`.
pub fn partition3<T: Ord + Copy>(v: &mut [T], low: usize, high: usize) -> (usize, usize) {
    assert!(low <= high && high < v.len(), "invalid partition range [{low}, {high}]");
    partition(v, low, high, &mut SortStats::default())
}

fn partition<T: Ord + Copy>(
    v: &mut [T],
    low: usize,
    high: usize,
    stats: &mut SortStats,
) -> (usize, usize) {
    let pivot = v[low];
    let mut i = low; // lt
    let mut j = low; // eq
    let mut k = high; // gt

    // v[low] == pivot, so j passes low before k can move and k never drops below low
    while j <= k {
        stats.comparisons += 1;
        match v[j].cmp(&pivot) {
            Ordering::Less => {
                if i != j {
                    v.swap(i, j);
                    stats.swaps += 1;
                }
                i += 1;
                j += 1;
            }
            Ordering::Greater => {
                if k != j {
                    v.swap(k, j);
                    stats.swaps += 1;
                }
                k -= 1;
            }
            Ordering::Equal => j += 1,
        }
    }

    (i, k)
}
