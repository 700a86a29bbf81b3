//! Wire types for the listing and status-update endpoints.
//!
//! Parse at the boundary: responses are decoded into typed envelopes here, and
//! anything malformed becomes the uniform "no usable payload" failure (`None`)
//! rather than an error the core has to route.

use crate::model::{IncidentId, IncidentKind, IncidentRecord, IncidentStatus};
use crate::state::filter::FilterSet;
use serde::{Deserialize, Serialize};

// ===== Requests =====

/// Body of one paginated listing request for a single lane.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ListingQuery {
    /// 1-based page to fetch.
    pub page: u32,
    /// Fixed page size.
    pub limit: u32,
    /// Which incident domain this board shows.
    pub incident_type: IncidentKind,
    /// Status filter for the lane being fetched. Always a single-element list
    /// on this board, but the endpoint accepts several.
    pub statuses: Vec<IncidentStatus>,
    /// Search term, omitted when no search is active.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
    /// Opaque filter fields, forwarded verbatim.
    #[serde(flatten)]
    pub filters: FilterSet,
}

/// Body of one status-update request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StatusUpdate {
    /// The incident being moved.
    pub id: IncidentId,
    /// Its new canonical status.
    pub status: IncidentStatus,
}

// ===== Responses =====

/// Listing response envelope.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ListingEnvelope {
    /// The page of records, in backend order.
    pub data: Vec<IncidentRecord>,
    /// Page this response is for (1-based).
    pub current_page: u32,
    /// Total pages under the current filter context.
    pub total_pages: u32,
    /// Page size the backend actually applied.
    pub current_limit: u32,
    /// Total matching incidents.
    pub total_count: u64,
}

/// Decode a raw listing response body.
///
/// Malformed JSON and shape mismatches both collapse to `None`, the same
/// failure the dispatcher signals for transport errors.
pub fn decode_listing(raw: &str) -> Option<ListingEnvelope> {
    match serde_json::from_str(raw) {
        Ok(envelope) => Some(envelope),
        Err(err) => {
            tracing::warn!(%err, "discarding undecodable listing response");
            None
        }
    }
}

// ===== Tests =====
