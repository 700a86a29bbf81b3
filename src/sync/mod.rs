//! Backend reconciliation of completed drags.
//!
//! Exactly one status-update request per completed gesture, never per
//! hover-time move. Success needs no further local mutation - the lane store
//! already reflects the move. Failure is swallowed by design: the optimistic
//! move stands and the record is marked [`SyncHealth::Failed`] so the
//! divergence is visible until the next full reset fetch replaces lane
//! contents.

use crate::gateway::{ApiRequest, Dispatch, StatusUpdate};
use crate::model::{IncidentId, SyncHealth};
use crate::state::drag::CommittedTransition;
use crate::state::lane_store::LaneStore;

/// Persists committed transitions and tracks which are still unconfirmed.
#[derive(Debug, Clone, Default)]
pub struct SyncReconciler {
    in_flight: Vec<CommittedTransition>,
}

impl SyncReconciler {
    /// A reconciler with nothing in flight.
    pub fn new() -> Self {
        Self::default()
    }

    /// Transitions dispatched but not yet confirmed or failed.
    pub fn in_flight(&self) -> &[CommittedTransition] {
        &self.in_flight
    }

    /// True while a status update for `item` is unconfirmed.
    pub fn is_pending(&self, item: IncidentId) -> bool {
        self.in_flight.iter().any(|t| t.item == item)
    }

    /// Persist one committed transition: mark the record pending and issue
    /// the single status-update request for this gesture.
    pub fn commit(
        &mut self,
        transition: CommittedTransition,
        store: &mut LaneStore,
        dispatch: &mut dyn Dispatch,
    ) {
        if let Some(record) = store.record_mut(transition.item) {
            record.sync = SyncHealth::Pending;
        }
        self.in_flight.push(transition);
        dispatch.dispatch(ApiRequest::Status(StatusUpdate {
            id: transition.item,
            status: transition.to.status(),
        }));
        tracing::info!(
            item = %transition.item,
            from = %transition.from,
            to = %transition.to,
            "committed lane transition"
        );
    }

    /// Apply the backend's answer for `item`'s status update.
    ///
    /// `payload` is the updated record body on success or `None` on failure,
    /// treated as opaque success/fail. Failure performs no rollback: lane
    /// membership is untouched and the record is marked failed.
    pub fn apply_result(
        &mut self,
        item: IncidentId,
        payload: Option<serde_json::Value>,
        store: &mut LaneStore,
    ) {
        match self.in_flight.iter().position(|t| t.item == item) {
            Some(pos) => {
                self.in_flight.remove(pos);
            }
            None => {
                tracing::warn!(%item, "status-update result for unknown transition");
            }
        }

        let health = if payload.is_some() {
            SyncHealth::Clean
        } else {
            tracing::warn!(
                %item,
                "status update failed; optimistic move stands until next reset"
            );
            SyncHealth::Failed
        };
        if let Some(record) = store.record_mut(item) {
            record.sync = health;
        }
    }
}

// ===== Tests =====
