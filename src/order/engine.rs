//! Index-permutation quicksort driven by an ordering chain.

use super::OrderLevel;
use crate::containers::DynArray;
use std::cell::Cell;
use std::cmp::Ordering;
use std::time::Instant;

/// Statistics from the most recent sort.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SortStats {
    /// Number of elements in the sorted snapshot
    pub items_processed: usize,
    /// Number of levels in the ordering chain
    pub levels: usize,
    /// Number of index comparisons performed
    pub comparisons: u64,
    /// Wall time spent computing keys and sorting, in microseconds
    pub processing_time_us: u64,
}

/// Sorts an index permutation of a snapshot according to an ordering chain.
///
/// Keys are computed once per element and level before sorting. Elements
/// whose keys compare equal at every level keep their source order.
#[derive(Debug, Default)]
pub struct SortEngine {
    stats: SortStats,
}

impl SortEngine {
    /// Create an engine with zeroed statistics
    pub fn new() -> Self {
        Self::default()
    }

    /// Statistics of the last call to [`sort_indices`](Self::sort_indices)
    pub fn stats(&self) -> &SortStats {
        &self.stats
    }

    /// Return `map` such that `elements[map[0]], elements[map[1]], ...` is
    /// the ordered sequence.
    ///
    /// Panics raised by key selectors or comparers propagate unchanged.
    pub fn sort_indices<T, L>(&mut self, elements: &DynArray<T>, chain: &L) -> DynArray<usize>
    where
        L: OrderLevel<T>,
    {
        let start_time = Instant::now();
        let count = elements.len();
        let mut map: Vec<usize> = (0..count).collect();
        let comparisons = Cell::new(0u64);

        if count > 0 {
            let keys = chain.compute_keys(elements);
            let compare = |a: usize, b: usize| {
                comparisons.set(comparisons.get() + 1);
                match chain.compare_keys(&keys, a, b) {
                    Ordering::Equal => a.cmp(&b),
                    ord => ord,
                }
            };
            quick_sort(&mut map, 0, count as isize - 1, &compare);
        }

        self.stats = SortStats {
            items_processed: count,
            levels: chain.depth(),
            comparisons: comparisons.get(),
            processing_time_us: start_time.elapsed().as_micros() as u64,
        };
        log::debug!(
            "Sorted {} items over {} levels with {} comparisons in {}us",
            self.stats.items_processed,
            self.stats.levels,
            self.stats.comparisons,
            self.stats.processing_time_us
        );

        DynArray::from(map)
    }
}

/// Hoare-partition quicksort over `map[left..=right]`.
///
/// Recurses into the smaller partition and loops on the larger one, so the
/// stack depth stays logarithmic. `compare` must be a strict total order.
///
/// The middle-element pivot degrades to quadratic time on organ-pipe input
/// (ascending then descending); only the stack depth stays bounded there.
fn quick_sort<F>(map: &mut [usize], mut left: isize, mut right: isize, compare: &F)
where
    F: Fn(usize, usize) -> Ordering,
{
    let len = map.len() as isize;
    loop {
        let mut i = left;
        let mut j = right;
        let pivot = map[(i + ((j - i) >> 1)) as usize];

        loop {
            while i < len && compare(pivot, map[i as usize]) == Ordering::Greater {
                i += 1;
            }
            while j >= 0 && compare(pivot, map[j as usize]) == Ordering::Less {
                j -= 1;
            }
            if i > j {
                break;
            }
            if i < j {
                map.swap(i as usize, j as usize);
            }
            i += 1;
            j -= 1;
            if i > j {
                break;
            }
        }

        if j - left <= right - i {
            if left < j {
                quick_sort(map, left, j, compare);
            }
            left = i;
        } else {
            if i < right {
                quick_sort(map, i, right, compare);
            }
            right = j;
        }

        if left >= right {
            break;
        }
    }
}
