//! Paginated, filtered fetches per lane.
//!
//! The gateway issues listing requests through the [`Dispatch`] seam and
//! applies completions as they arrive on the event thread. Nothing here
//! blocks: issuing returns immediately, and the shell later feeds each
//! completion back through [`QueryGateway::apply_listing`].
//!
//! Responses apply in arrival order, not request order. Every request is
//! tagged with the generation its lane was on when it left; a reset bumps the
//! generation, so anything still in flight from before the reset is dropped
//! on arrival instead of overwriting newer state.

use crate::model::{IncidentKind, LaneId};
use crate::state::filter::FilterContext;
use crate::state::lane_store::LaneStore;
use crate::state::pagination::PaginationTracker;

pub mod request;

pub use request::{decode_listing, ListingEnvelope, ListingQuery, StatusUpdate};

// ===== Dispatch seam =====

/// How a fetch writes its results back into lane state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchKind {
    /// Page 1 under a fresh generation; replaces lane contents.
    Reset,
    /// Continuation page; appends to the lane tail.
    LoadMore,
}

/// One request handed to the external dispatcher.
///
/// The dispatcher owns transport entirely (endpoints, retries it chooses not
/// to do, serialization of the bodies). The engine only ever sees completions
/// come back as [`ListingOutcome`]s or status-update results.
#[derive(Debug, Clone, PartialEq)]
pub enum ApiRequest {
    /// Paginated listing fetch for one lane.
    Listing {
        /// Lane the page is for.
        lane: LaneId,
        /// Generation the request was issued under.
        generation: u64,
        /// Reset or continuation.
        fetch: FetchKind,
        /// Request body.
        query: ListingQuery,
    },
    /// Status update for one completed drag.
    Status(StatusUpdate),
}

/// The sole I/O seam. Implemented by the application shell; test doubles just
/// record what was asked of them.
pub trait Dispatch {
    /// Hand one request to the transport layer. Must not block.
    fn dispatch(&mut self, request: ApiRequest);
}

/// A listing completion, delivered back to the engine by the shell.
///
/// `payload` is `None` for every failure mode the dispatcher can signal:
/// transport error, non-success response, or undecodable body.
#[derive(Debug, Clone, PartialEq)]
pub struct ListingOutcome {
    /// Lane the originating request was for.
    pub lane: LaneId,
    /// Generation the originating request was issued under.
    pub generation: u64,
    /// Reset or continuation, echoed from the request.
    pub fetch: FetchKind,
    /// Decoded envelope, or `None` on failure.
    pub payload: Option<ListingEnvelope>,
}

// ===== QueryGateway =====

/// Issues lane fetches and applies their completions.
#[derive(Debug, Clone)]
pub struct QueryGateway {
    kind: IncidentKind,
    page_size: u32,
}

impl QueryGateway {
    /// A gateway for one incident domain with a fixed page size.
    pub fn new(kind: IncidentKind, page_size: u32) -> Self {
        Self { kind, page_size }
    }

    /// The incident domain this gateway fetches.
    pub fn kind(&self) -> IncidentKind {
        self.kind
    }

    /// Reset fetch: page 1 for all three lanes concurrently.
    ///
    /// Atomically (within this one event) rewinds paging, bumps each lane's
    /// generation, and clears lane contents, then issues the three requests.
    /// Completions arrive in any order and apply independently.
    pub fn reset(
        &self,
        store: &mut LaneStore,
        tracker: &mut PaginationTracker,
        filter: &FilterContext,
        dispatch: &mut dyn Dispatch,
    ) {
        for lane in LaneId::ALL {
            tracker.reset_lane(lane);
            store.initialize_lane(lane, Vec::new());
            tracker.begin_load(lane);
            dispatch.dispatch(ApiRequest::Listing {
                lane,
                generation: tracker.generation(lane),
                fetch: FetchKind::Reset,
                query: self.query(lane, 1, filter),
            });
        }
        tracing::debug!(kind = self.kind.as_str(), "issued reset fetch for all lanes");
    }

    /// Load-more fetch for one lane: request `page + 1`.
    ///
    /// Refused (returns `false`, no request issued) while the lane is loading
    /// or already on its final page.
    pub fn load_more(
        &self,
        lane: LaneId,
        tracker: &mut PaginationTracker,
        filter: &FilterContext,
        dispatch: &mut dyn Dispatch,
    ) -> bool {
        if !tracker.can_load_more(lane) {
            tracing::debug!(%lane, "load-more refused: in flight or exhausted");
            return false;
        }
        let page = tracker.next_page(lane);
        tracker.begin_load(lane);
        dispatch.dispatch(ApiRequest::Listing {
            lane,
            generation: tracker.generation(lane),
            fetch: FetchKind::LoadMore,
            query: self.query(lane, page, filter),
        });
        true
    }

    /// Apply one listing completion. Returns `true` if lane state changed.
    ///
    /// Stale completions (generation no longer current for the lane) are
    /// dropped without touching anything - including `loading`, which belongs
    /// to whatever request the current generation has in flight. Failed
    /// completions clear `loading` and leave items unchanged.
    pub fn apply_listing(
        &self,
        outcome: ListingOutcome,
        store: &mut LaneStore,
        tracker: &mut PaginationTracker,
    ) -> bool {
        let lane = outcome.lane;
        if !tracker.generation_matches(lane, outcome.generation) {
            tracing::warn!(
                %lane,
                stale = outcome.generation,
                current = tracker.generation(lane),
                "dropping stale listing response"
            );
            return false;
        }

        let Some(envelope) = outcome.payload else {
            tracing::warn!(%lane, "listing fetch failed; lane left unchanged");
            tracker.finish_load(lane);
            return false;
        };

        match outcome.fetch {
            FetchKind::Reset => store.initialize_lane(lane, envelope.data),
            FetchKind::LoadMore => store.append_page(lane, envelope.data),
        }
        tracker.commit_page(
            lane,
            envelope.current_page,
            envelope.total_pages,
            envelope.total_count,
        );
        tracing::debug!(
            %lane,
            page = envelope.current_page,
            of = envelope.total_pages,
            "applied listing page"
        );
        true
    }

    fn query(&self, lane: LaneId, page: u32, filter: &FilterContext) -> ListingQuery {
        ListingQuery {
            page,
            limit: self.page_size,
            incident_type: self.kind,
            statuses: vec![lane.status()],
            search: filter.search().map(|s| s.as_str().to_string()),
            filters: filter.filters().clone(),
        }
    }
}

// ===== Tests =====

#[cfg(test)]
#[path = "gateway_tests.rs"]
mod tests;
