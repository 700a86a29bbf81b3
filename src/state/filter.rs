//! Search and filter context shared by all three lanes.
//!
//! The engine never interprets filter fields; it forwards them verbatim on
//! every listing request. What it does own is change detection: any change to
//! the search term or the filter set invalidates all three lanes and forces a
//! full reset fetch.

use crate::model::SearchTerm;
use std::collections::BTreeMap;

/// Opaque filter field values, keyed by backend field name.
///
/// `BTreeMap` keeps request serialization order deterministic.
pub type FilterSet = BTreeMap<String, Vec<String>>;

/// The current search term and filter selections.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterContext {
    search: Option<SearchTerm>,
    filters: FilterSet,
}

impl FilterContext {
    /// An empty context: no search, no filters.
    pub fn new() -> Self {
        Self::default()
    }

    /// The active search term, if any.
    pub fn search(&self) -> Option<&SearchTerm> {
        self.search.as_ref()
    }

    /// The active filter fields.
    pub fn filters(&self) -> &FilterSet {
        &self.filters
    }

    /// Replace the search term. Returns `true` when this actually changed the
    /// context (and so must invalidate all lanes).
    pub fn set_search(&mut self, search: Option<SearchTerm>) -> bool {
        if self.search == search {
            return false;
        }
        self.search = search;
        true
    }

    /// Replace the filter set. Returns `true` when this actually changed the
    /// context.
    pub fn set_filters(&mut self, filters: FilterSet) -> bool {
        if self.filters == filters {
            return false;
        }
        self.filters = filters;
        true
    }
}

// ===== Tests =====
