//! Incident record wire type.
//!
//! The engine only interprets `id` and `status`; everything else the backend
//! sends is carried opaquely in `payload` so detail dialogs and tables (out of
//! scope here) can render it without this crate knowing the shape.

use crate::model::{IncidentId, IncidentStatus, LaneId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// ===== SyncHealth =====

/// Local-versus-backend agreement marker for one record.
///
/// Lane membership is mutated optimistically before the backend confirms, so
/// the two can diverge. This marker makes the divergence visible instead of
/// silent; it never influences lane membership itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SyncHealth {
    /// Backend and local state agree (as far as this client knows).
    #[default]
    Clean,
    /// A status update for this record is in flight.
    Pending,
    /// The last status update failed; the optimistic move stands and the
    /// divergence persists until the next full reset fetch.
    Failed,
}

// ===== IncidentRecord =====

/// One security finding as returned by the listing endpoint.
///
/// Owned by exactly one lane at any time; `status` always equals the canonical
/// status of the lane currently containing it (enforced by the lane store, not
/// by this type).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IncidentRecord {
    /// Unique backend identity.
    pub id: IncidentId,

    /// Lifecycle status. Mutated locally the moment a record crosses lanes,
    /// before any server confirmation.
    pub status: IncidentStatus,

    /// When the finding was first detected, if the backend reports it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub detected_at: Option<DateTime<Utc>>,

    /// Everything else the backend sent, untouched.
    #[serde(flatten)]
    pub payload: serde_json::Map<String, serde_json::Value>,

    /// Local sync-health marker. Never on the wire.
    #[serde(skip)]
    pub sync: SyncHealth,
}

impl IncidentRecord {
    /// The lane this record belongs in according to its current status.
    pub fn lane(&self) -> LaneId {
        self.status.lane()
    }
}

// ===== Tests =====
