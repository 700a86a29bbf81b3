//! Lane identity and the typed lane ↔ status mapping.
//!
//! The three lifecycle lanes are a closed sum type; the mapping to backend
//! status strings lives here and nowhere else. `PerLane<T>` is a fixed
//! three-slot map keyed by `LaneId`, used wherever per-lane state is tracked.

use serde::{Deserialize, Serialize};
use std::fmt;

// ===== LaneId =====

/// One of the three lifecycle buckets an incident can occupy.
///
/// Sum type - exactly one lane at a time. The canonical backend status value
/// for each lane is given by [`LaneId::status`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LaneId {
    /// Newly reported incidents awaiting triage.
    Open,
    /// Incidents someone is actively working.
    InProgress,
    /// Resolved or dismissed incidents.
    Closed,
}

impl LaneId {
    /// All lanes in board order (left to right).
    pub const ALL: [LaneId; 3] = [LaneId::Open, LaneId::InProgress, LaneId::Closed];

    /// The canonical backend status for incidents in this lane.
    pub fn status(self) -> IncidentStatus {
        match self {
            LaneId::Open => IncidentStatus::Open,
            LaneId::InProgress => IncidentStatus::InProgress,
            LaneId::Closed => IncidentStatus::Closed,
        }
    }
}

impl fmt::Display for LaneId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.status().as_str())
    }
}

// ===== IncidentStatus =====

/// Backend status value carried by each incident record.
///
/// Wire format is kebab-case (`"open"`, `"in-progress"`, `"closed"`), matching
/// the listing and status-update endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum IncidentStatus {
    /// Awaiting triage.
    Open,
    /// Being worked.
    InProgress,
    /// Resolved or dismissed.
    Closed,
}

impl IncidentStatus {
    /// The wire string for this status.
    pub fn as_str(self) -> &'static str {
        match self {
            IncidentStatus::Open => "open",
            IncidentStatus::InProgress => "in-progress",
            IncidentStatus::Closed => "closed",
        }
    }

    /// The lane that displays incidents with this status.
    pub fn lane(self) -> LaneId {
        match self {
            IncidentStatus::Open => LaneId::Open,
            IncidentStatus::InProgress => LaneId::InProgress,
            IncidentStatus::Closed => LaneId::Closed,
        }
    }
}

impl fmt::Display for IncidentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ===== IncidentKind =====

/// Which incident domain a board shows.
///
/// One generic engine serves both domains; the kind is forwarded verbatim as
/// the `incident_type` field of every listing request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IncidentKind {
    /// Dependency / code vulnerability findings.
    Vulnerability,
    /// Leaked secret findings.
    Secret,
}

impl IncidentKind {
    /// The wire string for this kind.
    pub fn as_str(self) -> &'static str {
        match self {
            IncidentKind::Vulnerability => "vulnerability",
            IncidentKind::Secret => "secret",
        }
    }
}

// ===== PerLane =====

/// Fixed three-slot map keyed by [`LaneId`].
///
/// Used for anything tracked independently per lane (item lists, paging
/// metadata). Being a plain struct rather than a hash map keeps lane lookup
/// total: there is no "missing lane" case to handle.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PerLane<T> {
    open: T,
    in_progress: T,
    closed: T,
}

impl<T> PerLane<T> {
    /// Build with every slot produced by `f`.
    pub fn from_fn(mut f: impl FnMut(LaneId) -> T) -> Self {
        Self {
            open: f(LaneId::Open),
            in_progress: f(LaneId::InProgress),
            closed: f(LaneId::Closed),
        }
    }

    /// Shared access to one lane's slot.
    pub fn get(&self, lane: LaneId) -> &T {
        match lane {
            LaneId::Open => &self.open,
            LaneId::InProgress => &self.in_progress,
            LaneId::Closed => &self.closed,
        }
    }

    /// Mutable access to one lane's slot.
    pub fn get_mut(&mut self, lane: LaneId) -> &mut T {
        match lane {
            LaneId::Open => &mut self.open,
            LaneId::InProgress => &mut self.in_progress,
            LaneId::Closed => &mut self.closed,
        }
    }

    /// Iterate slots in board order.
    pub fn iter(&self) -> impl Iterator<Item = (LaneId, &T)> {
        LaneId::ALL.iter().map(move |&lane| (lane, self.get(lane)))
    }
}

// ===== Tests =====
