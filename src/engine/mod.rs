mod grid;

use self::grid::live_neighbors;
pub use self::grid::{Grid, GridError};
use crate::rules::RuleSet;
use rayon::prelude::*;
use std::ops::Range;

/// Drives a [`Grid`] from one generation to the next under a [`RuleSet`].
///
/// `workers` is fixed at construction time. With one worker the whole step
/// runs on the calling thread; with more, the cell index space is split
/// into that many contiguous ranges and the ranges are computed on rayon's
/// thread pool, which is created once and reused across generations.
#[derive(Debug, Clone)]
pub struct Engine {
    rules: RuleSet,
    workers: usize,
}

impl Engine {
    pub fn new(rules: RuleSet, workers: usize) -> Self {
        Self {
            rules,
            workers: workers.max(1),
        }
    }

    #[inline]
    pub fn rules(&self) -> &RuleSet {
        &self.rules
    }

    /// Computes the next generation into the grid's back buffer, then swaps.
    ///
    /// All neighbor counts are taken against the snapshot that was current
    /// at call time; the back buffer is the only thing written. Workers each
    /// own a disjoint slice of the back buffer, so the per-cell computation
    /// needs no locking, and the swap happens on the calling thread only
    /// after every worker has joined. A worker panic resurfaces here at the
    /// join rather than leaving a range of the back buffer stale.
    pub fn step(&self, grid: &mut Grid) {
        let width = grid.width();
        let height = grid.height();
        let count = grid.count();
        let (cells, next) = grid.split_buffers();

        if self.workers > 1 {
            let mut tasks = Vec::with_capacity(self.workers);
            let mut rest = next;
            for range in split_ranges(count, self.workers) {
                let (slice, tail) = std::mem::take(&mut rest).split_at_mut(range.len());
                rest = tail;
                tasks.push((range.start, slice));
            }
            tasks.into_par_iter().for_each(|(start, slice)| {
                step_range(cells, slice, start, width, height, &self.rules);
            });
        } else {
            step_range(cells, next, 0, width, height, &self.rules);
        }

        grid.swap_buffers();
    }
}

/// Applies the transition rule to the cells `start..start + out.len()`,
/// reading the full `cells` snapshot and writing only `out`.
fn step_range(
    cells: &[bool],
    out: &mut [bool],
    start: usize,
    width: usize,
    height: usize,
    rules: &RuleSet,
) {
    for (offset, next_cell) in out.iter_mut().enumerate() {
        let i = start + offset;
        let (x, y) = (i % width, i / width);
        let alive = live_neighbors(cells, width, height, x, y);
        *next_cell = if cells[i] {
            rules.survives(alive)
        } else {
            rules.born(alive)
        };
    }
}

/// Partitions `0..count` into `workers` contiguous disjoint ranges; the
/// final range absorbs the remainder when the split is uneven. The worker
/// count is clamped so no range is ever empty.
fn split_ranges(count: usize, workers: usize) -> Vec<Range<usize>> {
    let workers = workers.clamp(1, count.max(1));
    let base = count / workers;
    let mut ranges: Vec<_> = (0..workers).map(|i| i * base..(i + 1) * base).collect();
    if let Some(last) = ranges.last_mut() {
        last.end = count;
    }
    ranges
}
