//! Per-lane paging and loading metadata.
//!
//! Tracks where each lane is in its paginated listing, whether a fetch is in
//! flight, and which fetch generation the lane is on. The `loading` flag plus
//! the `page >= total_pages` check are the sole guard against duplicate
//! in-flight load-more fetches for a lane.

use crate::model::{LaneId, PerLane};

// ===== LaneMeta =====

/// Paging state for one lane.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LaneMeta {
    /// Last committed page number (1-based). Monotonically non-decreasing
    /// until a reset sets it back to 1.
    pub page: u32,
    /// Total pages the backend reported for the current filter context.
    pub total_pages: u32,
    /// Total matching incidents the backend reported.
    pub total_count: u64,
    /// True while a fetch for this lane is in flight. A hung request leaves
    /// this stuck and blocks load-more until a reset fetch succeeds.
    pub loading: bool,
    /// Fetch generation, bumped on every reset. Responses tagged with an older
    /// generation are stale and must not be applied.
    pub generation: u64,
}

impl Default for LaneMeta {
    fn default() -> Self {
        Self {
            page: 1,
            total_pages: 0,
            total_count: 0,
            loading: false,
            generation: 0,
        }
    }
}

// ===== PaginationTracker =====

/// Paging metadata for all three lanes.
#[derive(Debug, Clone, Default)]
pub struct PaginationTracker {
    lanes: PerLane<LaneMeta>,
}

impl PaginationTracker {
    /// Create a tracker with every lane at its pre-fetch default.
    pub fn new() -> Self {
        Self::default()
    }

    /// Read one lane's paging state.
    pub fn meta(&self, lane: LaneId) -> &LaneMeta {
        self.lanes.get(lane)
    }

    /// True while a fetch for `lane` is in flight.
    pub fn is_loading(&self, lane: LaneId) -> bool {
        self.lanes.get(lane).loading
    }

    /// The fetch generation `lane` is currently on.
    pub fn generation(&self, lane: LaneId) -> u64 {
        self.lanes.get(lane).generation
    }

    /// Whether a response issued under `generation` is still current for
    /// `lane`.
    pub fn generation_matches(&self, lane: LaneId, generation: u64) -> bool {
        self.lanes.get(lane).generation == generation
    }

    /// Mark a fetch in flight for `lane`.
    pub fn begin_load(&mut self, lane: LaneId) {
        self.lanes.get_mut(lane).loading = true;
    }

    /// Apply a successful page response: clear `loading`, update counters.
    pub fn commit_page(&mut self, lane: LaneId, page: u32, total_pages: u32, total_count: u64) {
        let meta = self.lanes.get_mut(lane);
        meta.loading = false;
        meta.page = page;
        meta.total_pages = total_pages;
        meta.total_count = total_count;
    }

    /// Clear `loading` without touching counters. Failure path: the response
    /// carried no usable payload.
    pub fn finish_load(&mut self, lane: LaneId) {
        self.lanes.get_mut(lane).loading = false;
    }

    /// Rewind `lane` to page 1 and bump its generation, immediately before a
    /// full reset fetch. Counters keep their stale values until the reset
    /// response commits; `loading` is cleared so the reset fetch itself is not
    /// refused.
    pub fn reset_lane(&mut self, lane: LaneId) {
        let meta = self.lanes.get_mut(lane);
        meta.page = 1;
        meta.loading = false;
        meta.generation += 1;
    }

    /// Whether a load-more fetch for `lane` may be issued right now.
    ///
    /// Refused while a fetch is in flight or when the last committed page is
    /// already the final one.
    pub fn can_load_more(&self, lane: LaneId) -> bool {
        let meta = self.lanes.get(lane);
        !meta.loading && meta.page < meta.total_pages
    }

    /// The page number the next load-more fetch should request.
    pub fn next_page(&self, lane: LaneId) -> u32 {
        self.lanes.get(lane).page + 1
    }
}

// ===== Tests =====

#[cfg(test)]
#[path = "pagination_tests.rs"]
mod tests;
