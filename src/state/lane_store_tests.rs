//! Tests for lane membership and ordering mutations.

use super::*;
use crate::model::{IncidentStatus, SyncHealth};

// ===== Test Helpers =====

fn record(id: u64, lane: LaneId) -> IncidentRecord {
    IncidentRecord {
        id: IncidentId::new(id),
        status: lane.status(),
        detected_at: None,
        payload: serde_json::Map::new(),
        sync: SyncHealth::default(),
    }
}

fn ids(store: &LaneStore, lane: LaneId) -> Vec<u64> {
    store.items(lane).iter().map(|r| r.id.get()).collect()
}

// ===== initialize_lane =====

#[test]
fn initialize_replaces_items_wholesale() {
    let mut store = LaneStore::new();
    store.initialize_lane(LaneId::Open, vec![record(1, LaneId::Open)]);
    store.initialize_lane(LaneId::Open, vec![record(2, LaneId::Open), record(3, LaneId::Open)]);
    assert_eq!(ids(&store, LaneId::Open), vec![2, 3]);
}

#[test]
fn initialize_with_empty_clears_the_lane() {
    let mut store = LaneStore::new();
    store.initialize_lane(LaneId::Open, vec![record(1, LaneId::Open)]);
    store.initialize_lane(LaneId::Open, Vec::new());
    assert!(store.items(LaneId::Open).is_empty());
}

#[test]
fn initialize_normalizes_status_to_lane() {
    let mut store = LaneStore::new();
    // Backend payload disagrees with the lane it was fetched for.
    store.initialize_lane(LaneId::Closed, vec![record(1, LaneId::Open)]);
    assert_eq!(store.items(LaneId::Closed)[0].status, IncidentStatus::Closed);
}

#[test]
fn initialize_skips_records_living_in_another_lane() {
    let mut store = LaneStore::new();
    store.initialize_lane(LaneId::InProgress, vec![record(7, LaneId::InProgress)]);
    // A reset page for `open` still contains id 7 (server rendered it before
    // the optimistic move that put it in `in-progress`).
    store.initialize_lane(LaneId::Open, vec![record(7, LaneId::Open), record(8, LaneId::Open)]);
    assert_eq!(ids(&store, LaneId::Open), vec![8]);
    assert_eq!(ids(&store, LaneId::InProgress), vec![7]);
}

// ===== append_page =====

#[test]
fn append_preserves_existing_order() {
    let mut store = LaneStore::new();
    store.initialize_lane(LaneId::Open, vec![record(1, LaneId::Open), record(2, LaneId::Open)]);
    store.append_page(LaneId::Open, vec![record(3, LaneId::Open), record(4, LaneId::Open)]);
    assert_eq!(ids(&store, LaneId::Open), vec![1, 2, 3, 4]);
}

#[test]
fn append_empty_batch_is_a_content_noop() {
    let mut store = LaneStore::new();
    store.initialize_lane(LaneId::Open, vec![record(1, LaneId::Open)]);
    store.append_page(LaneId::Open, Vec::new());
    assert_eq!(ids(&store, LaneId::Open), vec![1]);
}

#[test]
fn append_skips_page_boundary_duplicates() {
    let mut store = LaneStore::new();
    store.initialize_lane(LaneId::Open, vec![record(1, LaneId::Open), record(2, LaneId::Open)]);
    // Page 2 overlaps page 1 by one record.
    store.append_page(LaneId::Open, vec![record(2, LaneId::Open), record(3, LaneId::Open)]);
    assert_eq!(ids(&store, LaneId::Open), vec![1, 2, 3]);
}

#[test]
fn append_skips_records_living_in_another_lane() {
    let mut store = LaneStore::new();
    store.initialize_lane(LaneId::Closed, vec![record(5, LaneId::Closed)]);
    store.append_page(LaneId::Open, vec![record(5, LaneId::Open), record(6, LaneId::Open)]);
    assert_eq!(ids(&store, LaneId::Open), vec![6]);
    assert_eq!(ids(&store, LaneId::Closed), vec![5]);
}

// ===== move_item =====

#[test]
fn move_to_index_removes_from_source_and_restamps_status() {
    // open=[1,2], in-progress=[] -> move 1 to index 0.
    let mut store = LaneStore::new();
    store.initialize_lane(LaneId::Open, vec![record(1, LaneId::Open), record(2, LaneId::Open)]);
    store.move_item(IncidentId::new(1), LaneId::Open, LaneId::InProgress, Some(0));

    assert_eq!(ids(&store, LaneId::Open), vec![2]);
    assert_eq!(ids(&store, LaneId::InProgress), vec![1]);
    assert_eq!(
        store.items(LaneId::InProgress)[0].status,
        IncidentStatus::InProgress
    );
}

#[test]
fn move_without_index_appends_to_tail() {
    let mut store = LaneStore::new();
    store.initialize_lane(LaneId::Open, vec![record(1, LaneId::Open)]);
    store.initialize_lane(LaneId::Closed, vec![record(9, LaneId::Closed)]);
    store.move_item(IncidentId::new(1), LaneId::Open, LaneId::Closed, None);
    assert_eq!(ids(&store, LaneId::Closed), vec![9, 1]);
}

#[test]
fn move_clamps_out_of_range_index() {
    let mut store = LaneStore::new();
    store.initialize_lane(LaneId::Open, vec![record(1, LaneId::Open)]);
    store.move_item(IncidentId::new(1), LaneId::Open, LaneId::InProgress, Some(42));
    assert_eq!(ids(&store, LaneId::InProgress), vec![1]);
}

#[test]
fn move_of_absent_item_is_a_noop() {
    let mut store = LaneStore::new();
    store.initialize_lane(LaneId::Open, vec![record(1, LaneId::Open)]);
    store.move_item(IncidentId::new(99), LaneId::Open, LaneId::Closed, None);
    assert_eq!(ids(&store, LaneId::Open), vec![1]);
    assert!(store.items(LaneId::Closed).is_empty());
}

#[test]
fn move_inserts_between_existing_records() {
    let mut store = LaneStore::new();
    store.initialize_lane(LaneId::Open, vec![record(1, LaneId::Open)]);
    store.initialize_lane(
        LaneId::InProgress,
        vec![record(2, LaneId::InProgress), record(3, LaneId::InProgress)],
    );
    store.move_item(IncidentId::new(1), LaneId::Open, LaneId::InProgress, Some(1));
    assert_eq!(ids(&store, LaneId::InProgress), vec![2, 1, 3]);
}

// ===== Lookup =====

#[test]
fn position_reports_lane_and_index() {
    let mut store = LaneStore::new();
    store.initialize_lane(LaneId::Open, vec![record(1, LaneId::Open), record(2, LaneId::Open)]);
    assert_eq!(
        store.position(IncidentId::new(2)),
        Some((LaneId::Open, 1))
    );
    assert_eq!(store.position(IncidentId::new(3)), None);
}

#[test]
fn lane_of_follows_moves() {
    let mut store = LaneStore::new();
    store.initialize_lane(LaneId::Open, vec![record(1, LaneId::Open)]);
    assert_eq!(store.lane_of(IncidentId::new(1)), Some(LaneId::Open));
    store.move_item(IncidentId::new(1), LaneId::Open, LaneId::Closed, None);
    assert_eq!(store.lane_of(IncidentId::new(1)), Some(LaneId::Closed));
}

#[test]
fn record_mut_allows_marking_sync_health() {
    let mut store = LaneStore::new();
    store.initialize_lane(LaneId::Open, vec![record(1, LaneId::Open)]);
    store
        .record_mut(IncidentId::new(1))
        .expect("record present")
        .sync = SyncHealth::Failed;
    assert_eq!(
        store.record(IncidentId::new(1)).expect("record present").sync,
        SyncHealth::Failed
    );
}
