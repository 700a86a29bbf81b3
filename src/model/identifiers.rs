//! Core identifier and query newtypes with smart constructors.
//!
//! `IncidentId` is the opaque backend identity of an incident.
//! `SearchTerm` validates at construction: a term is never empty or
//! whitespace-only, so "no search" is always `Option::None` rather than `""`.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unique backend identifier for an incident.
///
/// Opaque to the engine: it is only ever compared for equality and forwarded
/// on status-update requests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct IncidentId(u64);

impl IncidentId {
    /// Wrap a raw backend id.
    pub fn new(raw: u64) -> Self {
        Self(raw)
    }

    /// Raw numeric value, as sent on the wire.
    pub fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for IncidentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Validated search term. Never empty.
///
/// Smart constructor enforces the non-empty invariant; callers model an
/// absent/cleared search as `Option<SearchTerm>::None`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchTerm(String);

impl SearchTerm {
    /// Returns `None` if the raw input is empty or whitespace-only.
    pub fn new(raw: impl Into<String>) -> Option<Self> {
        let s = raw.into();
        if s.trim().is_empty() {
            None
        } else {
            Some(Self(s))
        }
    }

    /// The term as entered (untrimmed).
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SearchTerm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ===== Tests =====
