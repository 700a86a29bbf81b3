//! Domain model: identifiers, lanes, and incident records.

pub mod identifiers;
pub mod incident;
pub mod lane;

pub use identifiers::{IncidentId, SearchTerm};
pub use incident::{IncidentRecord, SyncHealth};
pub use lane::{IncidentKind, IncidentStatus, LaneId, PerLane};
