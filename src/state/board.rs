//! Board root state.
//!
//! `BoardState` is the engine's root type: one instance per mounted board,
//! composing the lane store, paging tracker, filter context, drag controller,
//! and sync reconciler behind the operations an event loop actually calls.
//! All methods run to completion on the caller's thread; I/O happens only
//! through the [`Dispatch`] seam, and completions are fed back in as events.
//!
//! Lifecycle: created empty, populated by [`mount`](BoardState::mount)'s
//! reset fetch, torn down by dropping the value.

use crate::config::BoardConfig;
use crate::gateway::{Dispatch, FetchKind, ListingOutcome, QueryGateway};
use crate::model::{IncidentId, IncidentKind, IncidentRecord, LaneId, SearchTerm};
use crate::state::drag::{CommittedTransition, DragController, DropTarget, RevertPolicy};
use crate::state::filter::{FilterContext, FilterSet};
use crate::state::lane_store::LaneStore;
use crate::state::pagination::{LaneMeta, PaginationTracker};
use crate::sync::SyncReconciler;

/// One mounted triage board for a single incident domain.
#[derive(Debug, Clone)]
pub struct BoardState {
    store: LaneStore,
    tracker: PaginationTracker,
    filter: FilterContext,
    drag: DragController,
    reconciler: SyncReconciler,
    gateway: QueryGateway,
    /// Completions still expected from the very first load; the failure
    /// banner is only armed while this is non-zero.
    initial_remaining: u8,
    first_load_failed: bool,
}

impl BoardState {
    /// An unmounted board for `kind`, configured by `config`.
    pub fn new(kind: IncidentKind, config: &BoardConfig) -> Self {
        let policy = if config.revert_on_lost_drop {
            RevertPolicy::RevertToOrigin
        } else {
            RevertPolicy::LeaveInPlace
        };
        Self {
            store: LaneStore::new(),
            tracker: PaginationTracker::new(),
            filter: FilterContext::new(),
            drag: DragController::new(policy),
            reconciler: SyncReconciler::new(),
            gateway: QueryGateway::new(kind, config.page_size),
            initial_remaining: 0,
            first_load_failed: false,
        }
    }

    // ===== Read access =====

    /// The records currently shown in `lane`, in display order.
    pub fn items(&self, lane: LaneId) -> &[IncidentRecord] {
        self.store.items(lane)
    }

    /// One record by id, wherever it currently lives.
    pub fn record(&self, item: IncidentId) -> Option<&IncidentRecord> {
        self.store.record(item)
    }

    /// Paging state for `lane`.
    pub fn meta(&self, lane: LaneId) -> &LaneMeta {
        self.tracker.meta(lane)
    }

    /// The active search term, if any.
    pub fn search(&self) -> Option<&SearchTerm> {
        self.filter.search()
    }

    /// True while a drag gesture is in progress.
    pub fn is_dragging(&self) -> bool {
        self.drag.is_dragging()
    }

    /// Whether the very first board load failed and a banner should show.
    /// Cleared by the next successful completion or any later reset.
    pub fn first_load_failed(&self) -> bool {
        self.first_load_failed
    }

    // ===== Fetch operations =====

    /// Initial load: issue the reset fetch for all three lanes and arm the
    /// first-load failure banner.
    pub fn mount(&mut self, dispatch: &mut dyn Dispatch) {
        self.initial_remaining = LaneId::ALL.len() as u8;
        self.reset(dispatch);
    }

    /// Replace the search term. Any actual change invalidates all three lanes
    /// and triggers a reset fetch; setting the same term again does nothing.
    pub fn set_search(&mut self, term: Option<SearchTerm>, dispatch: &mut dyn Dispatch) -> bool {
        if !self.filter.set_search(term) {
            return false;
        }
        self.reset(dispatch);
        true
    }

    /// Replace the filter set, resetting on any actual change.
    pub fn set_filters(&mut self, filters: FilterSet, dispatch: &mut dyn Dispatch) -> bool {
        if !self.filter.set_filters(filters) {
            return false;
        }
        self.reset(dispatch);
        true
    }

    /// Scroll-proximity trigger for one lane. Returns whether a request was
    /// actually issued (refused while loading or on the final page).
    pub fn load_more(&mut self, lane: LaneId, dispatch: &mut dyn Dispatch) -> bool {
        self.gateway
            .load_more(lane, &mut self.tracker, &self.filter, dispatch)
    }

    /// Feed one listing completion back into the board, in arrival order.
    pub fn apply_listing(&mut self, outcome: ListingOutcome) {
        let failed = outcome.payload.is_none();
        let was_reset = outcome.fetch == FetchKind::Reset;
        let applied = self
            .gateway
            .apply_listing(outcome, &mut self.store, &mut self.tracker);

        if was_reset && self.initial_remaining > 0 {
            self.initial_remaining -= 1;
            if failed {
                self.first_load_failed = true;
            }
        }
        if applied {
            self.first_load_failed = false;
        }
    }

    // ===== Drag operations =====

    /// Gesture start on `item`.
    pub fn drag_start(&mut self, item: IncidentId) -> bool {
        self.drag.begin(item, &self.store)
    }

    /// Hover event during an active gesture; applies optimistic lane
    /// crossings immediately.
    pub fn drag_over(&mut self, target: DropTarget) {
        self.drag.hover(target, &mut self.store);
    }

    /// Gesture end. If the net lane changed, the committed transition is
    /// handed to the reconciler, which issues the one status-update request.
    /// Returns the transition for callers that want to surface it.
    pub fn drag_end(
        &mut self,
        target: Option<DropTarget>,
        dispatch: &mut dyn Dispatch,
    ) -> Option<CommittedTransition> {
        let transition = self.drag.release(target, &mut self.store)?;
        self.reconciler
            .commit(transition, &mut self.store, dispatch);
        Some(transition)
    }

    /// Feed one status-update completion back into the board.
    pub fn apply_sync_result(&mut self, item: IncidentId, payload: Option<serde_json::Value>) {
        self.reconciler.apply_result(item, payload, &mut self.store);
    }

    fn reset(&mut self, dispatch: &mut dyn Dispatch) {
        // A fresh reset supersedes any earlier failure banner.
        if self.initial_remaining == 0 {
            self.first_load_failed = false;
        }
        self.gateway
            .reset(&mut self.store, &mut self.tracker, &self.filter, dispatch);
    }
}

// ===== Tests =====

#[cfg(test)]
#[path = "board_tests.rs"]
mod tests;
