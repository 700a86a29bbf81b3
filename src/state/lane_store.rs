//! Authoritative per-lane incident lists.
//!
//! The single source of truth for lane membership and order. Pure data
//! mutation only: fetching, drag interpretation, and backend reconciliation
//! all live elsewhere and funnel through the three mutators here.
//!
//! # Invariants upheld
//!
//! - No incident id is ever present in two lanes at once. Ingest skips records
//!   whose id already lives in another lane (the local copy is newer than the
//!   page the server rendered), and `move_item` removes before inserting.
//! - Every record's `status` equals the canonical status of its lane: ingest
//!   normalizes incoming records and `move_item` restamps on insertion.

use crate::model::{IncidentId, IncidentRecord, LaneId, PerLane};

/// Ordered incident lists for the three lanes.
#[derive(Debug, Clone, Default)]
pub struct LaneStore {
    lanes: PerLane<Vec<IncidentRecord>>,
}

impl LaneStore {
    /// Create an empty store (all lanes empty).
    pub fn new() -> Self {
        Self::default()
    }

    /// The records currently in `lane`, in display order.
    pub fn items(&self, lane: LaneId) -> &[IncidentRecord] {
        self.lanes.get(lane)
    }

    /// Total records across all lanes.
    pub fn len(&self) -> usize {
        LaneId::ALL.iter().map(|&l| self.lanes.get(l).len()).sum()
    }

    /// True when every lane is empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The lane currently containing `item`, if any.
    pub fn lane_of(&self, item: IncidentId) -> Option<LaneId> {
        self.position(item).map(|(lane, _)| lane)
    }

    /// Lane and in-lane index of `item`, if present anywhere.
    pub fn position(&self, item: IncidentId) -> Option<(LaneId, usize)> {
        for lane in LaneId::ALL {
            if let Some(idx) = self.lanes.get(lane).iter().position(|r| r.id == item) {
                return Some((lane, idx));
            }
        }
        None
    }

    /// Shared access to one record by id.
    pub fn record(&self, item: IncidentId) -> Option<&IncidentRecord> {
        let (lane, idx) = self.position(item)?;
        self.lanes.get(lane).get(idx)
    }

    /// Mutable access to one record by id.
    pub fn record_mut(&mut self, item: IncidentId) -> Option<&mut IncidentRecord> {
        let (lane, idx) = self.position(item)?;
        self.lanes.get_mut(lane).get_mut(idx)
    }

    /// Replace `lane`'s items wholesale. Used for the first load and for
    /// filter/search resets.
    ///
    /// Incoming records are normalized to the lane's canonical status. Records
    /// whose id already lives in a *different* lane are skipped: the local
    /// copy reflects an optimistic move more recent than the fetched page.
    pub fn initialize_lane(&mut self, lane: LaneId, records: Vec<IncidentRecord>) {
        let replacement = self.admit(lane, records, |_store, _id| false);
        *self.lanes.get_mut(lane) = replacement;
    }

    /// Append one fetched page to `lane`'s tail, preserving existing order.
    /// Appending an empty batch is a content no-op.
    ///
    /// Records already present anywhere in the store are skipped, covering
    /// both cross-lane optimistic overlap and page-boundary duplicates within
    /// the same lane.
    pub fn append_page(&mut self, lane: LaneId, records: Vec<IncidentRecord>) {
        let admitted = self.admit(lane, records, |store, id| {
            store.lanes.get(lane).iter().any(|r| r.id == id)
        });
        self.lanes.get_mut(lane).extend(admitted);
    }

    /// Move `item` from `source` to `target`, inserting at `index` (clamped to
    /// the target's length) or appending when `index` is `None`.
    ///
    /// The record's status is restamped to the target lane's canonical value
    /// immediately - before any server confirmation. If `item` is not in
    /// `source` the call is a no-op.
    pub fn move_item(
        &mut self,
        item: IncidentId,
        source: LaneId,
        target: LaneId,
        index: Option<usize>,
    ) {
        let source_items = self.lanes.get_mut(source);
        let Some(pos) = source_items.iter().position(|r| r.id == item) else {
            // Stale intent (the record left this lane between gesture events).
            tracing::debug!(%item, %source, %target, "move_item ignored: not in source lane");
            return;
        };
        let mut record = source_items.remove(pos);
        record.status = target.status();

        let target_items = self.lanes.get_mut(target);
        match index {
            Some(idx) => {
                let idx = idx.min(target_items.len());
                target_items.insert(idx, record);
            }
            None => target_items.push(record),
        }
    }

    /// Filter a batch down to admissible records for `lane`, normalizing
    /// status. `also_dup` lets `append_page` additionally reject ids already
    /// in the destination lane itself.
    fn admit(
        &self,
        lane: LaneId,
        records: Vec<IncidentRecord>,
        also_dup: impl Fn(&Self, IncidentId) -> bool,
    ) -> Vec<IncidentRecord> {
        let mut admitted: Vec<IncidentRecord> = Vec::with_capacity(records.len());
        for mut record in records {
            let elsewhere = self
                .lane_of(record.id)
                .is_some_and(|current| current != lane);
            let duplicate_in_batch = admitted.iter().any(|r| r.id == record.id);
            if elsewhere || duplicate_in_batch || also_dup(self, record.id) {
                tracing::debug!(item = %record.id, %lane, "dropping duplicate record on ingest");
                continue;
            }
            record.status = lane.status();
            admitted.push(record);
        }
        admitted
    }
}

// ===== Tests =====

#[cfg(test)]
#[path = "lane_store_tests.rs"]
mod tests;
