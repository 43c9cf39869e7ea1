//! Operation statistics and instrumentation for OrderedMap.
//!
//! Counters are diagnostic only and never affect map behavior: recording is
//! off by default, and resetting or disabling it leaves the tree untouched.
//! When disabled, the hot path pays a single branch.

use std::cell::Cell;
use std::time::{Duration, Instant};

use crate::arena::ArenaStats;
use crate::types::OrderedMap;

/// Point-in-time snapshot of a map's operation statistics.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct MapStats {
    /// Number of insert operations recorded (including value updates).
    pub insert_count: usize,
    /// Number of successful remove operations recorded.
    pub delete_count: usize,
    /// Number of lookup operations recorded.
    pub search_count: usize,
    /// Sum of the three counters above.
    pub total_operations: usize,
    /// Running average wall-clock seconds per insert.
    pub avg_insert_time: f64,
    /// Running average wall-clock seconds per remove.
    pub avg_delete_time: f64,
    /// Running average wall-clock seconds per lookup.
    pub avg_search_time: f64,
    /// Largest tree height observed after any recorded mutation.
    pub max_height: usize,
    /// Tree height at the time of the snapshot.
    pub current_height: usize,
}

/// Interior-mutable counter block so lookups on `&self` can record.
#[derive(Debug, Clone, Default)]
pub(crate) struct StatsTracker {
    insert_count: Cell<usize>,
    delete_count: Cell<usize>,
    search_count: Cell<usize>,
    avg_insert_time: Cell<f64>,
    avg_delete_time: Cell<f64>,
    avg_search_time: Cell<f64>,
    max_height: Cell<usize>,
}

/// Updates a running average in place: avg' = (avg * (n - 1) + sample) / n.
fn push_average(count: &Cell<usize>, average: &Cell<f64>, elapsed: Duration) {
    let n = count.get() + 1;
    count.set(n);
    let sample = elapsed.as_secs_f64();
    average.set((average.get() * (n - 1) as f64 + sample) / n as f64);
}

impl StatsTracker {
    pub(crate) fn record_insert(&self, elapsed: Duration) {
        push_average(&self.insert_count, &self.avg_insert_time, elapsed);
    }

    pub(crate) fn record_delete(&self, elapsed: Duration) {
        push_average(&self.delete_count, &self.avg_delete_time, elapsed);
    }

    pub(crate) fn record_search(&self, elapsed: Duration) {
        push_average(&self.search_count, &self.avg_search_time, elapsed);
    }

    pub(crate) fn observe_height(&self, height: usize) {
        if height > self.max_height.get() {
            self.max_height.set(height);
        }
    }

    pub(crate) fn reset(&self) {
        self.insert_count.set(0);
        self.delete_count.set(0);
        self.search_count.set(0);
        self.avg_insert_time.set(0.0);
        self.avg_delete_time.set(0.0);
        self.avg_search_time.set(0.0);
        self.max_height.set(0);
    }

    pub(crate) fn snapshot(&self, current_height: usize) -> MapStats {
        let insert_count = self.insert_count.get();
        let delete_count = self.delete_count.get();
        let search_count = self.search_count.get();
        MapStats {
            insert_count,
            delete_count,
            search_count,
            total_operations: insert_count + delete_count + search_count,
            avg_insert_time: self.avg_insert_time.get(),
            avg_delete_time: self.avg_delete_time.get(),
            avg_search_time: self.avg_search_time.get(),
            max_height: self.max_height.get(),
            current_height,
        }
    }
}

impl<K: Ord + Clone, V: Clone> OrderedMap<K, V> {
    // ============================================================================
    // STATISTICS API
    // ============================================================================

    /// Returns a snapshot of the operation statistics with the current
    /// height refreshed. Recomputing the height walks the tree.
    pub fn stats(&self) -> MapStats {
        self.stats.snapshot(self.height())
    }

    /// Zeroes all counters and timings. Map contents are unaffected.
    pub fn reset_stats(&mut self) {
        self.stats.reset();
    }

    /// Enables or disables statistics recording. Disabled by default.
    pub fn set_stats_enabled(&mut self, enabled: bool) {
        self.stats_enabled = enabled;
    }

    /// Returns true if statistics recording is enabled.
    pub fn stats_enabled(&self) -> bool {
        self.stats_enabled
    }

    /// Occupancy statistics for the node arena.
    pub fn arena_stats(&self) -> ArenaStats {
        self.nodes.stats()
    }

    // ============================================================================
    // RECORDING HELPERS
    // ============================================================================

    /// Starts a timing sample, or `None` when recording is disabled.
    #[inline]
    pub(crate) fn begin_op(&self) -> Option<Instant> {
        self.stats_enabled.then(Instant::now)
    }

    #[inline]
    pub(crate) fn finish_insert(&self, started: Option<Instant>) {
        if let Some(start) = started {
            self.stats.record_insert(start.elapsed());
            self.stats.observe_height(self.height());
        }
    }

    #[inline]
    pub(crate) fn finish_delete(&self, started: Option<Instant>) {
        if let Some(start) = started {
            self.stats.record_delete(start.elapsed());
            self.stats.observe_height(self.height());
        }
    }

    #[inline]
    pub(crate) fn finish_search(&self, started: Option<Instant>) {
        if let Some(start) = started {
            self.stats.record_search(start.elapsed());
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::OrderedMap;

    #[test]
    fn test_stats_disabled_by_default() {
        let mut map = OrderedMap::new();
        map.insert(1, 10);
        map.get(&1);
        map.remove(&1);

        let stats = map.stats();
        assert_eq!(stats.total_operations, 0);
        assert_eq!(stats.max_height, 0);
    }

    #[test]
    fn test_stats_record_counts() {
        let mut map = OrderedMap::new();
        map.set_stats_enabled(true);

        map.insert(1, 10);
        map.insert(2, 20);
        map.insert(1, 11); // update still counts as an insert
        map.get(&1);
        map.get(&99);
        map.remove(&2);
        map.remove(&99); // miss records nothing

        let stats = map.stats();
        assert_eq!(stats.insert_count, 3);
        assert_eq!(stats.search_count, 2);
        assert_eq!(stats.delete_count, 1);
        assert_eq!(stats.total_operations, 6);
        assert!(stats.max_height >= 1);
        assert_eq!(stats.current_height, map.height());
    }

    #[test]
    fn test_stats_reset_keeps_contents() {
        let mut map = OrderedMap::new();
        map.set_stats_enabled(true);
        map.insert(1, 10);

        map.reset_stats();
        let stats = map.stats();
        assert_eq!(stats.total_operations, 0);
        assert_eq!(map.get(&1), Some(&10));
    }
}
