//! Drag gesture state machine.
//!
//! Interprets hover and release events into optimistic lane moves and, on
//! release, at most one committed transition. Two lane references matter and
//! must never be conflated: `origin` is captured once at gesture start and
//! decides what gets committed; `hover` is the rolling lane the item visually
//! occupies and decides where hover-time moves go.

use crate::model::{IncidentId, LaneId};
use crate::state::lane_store::LaneStore;

// ===== DropTarget =====

/// What the pointer is over, as reported by the view layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropTarget {
    /// A lane container (including its empty tail area).
    Lane(LaneId),
    /// Another incident card.
    Card(IncidentId),
}

// ===== RevertPolicy =====

/// What to do with hover-time moves when a gesture ends with no resolvable
/// drop target.
///
/// The shipped dashboards left the item wherever the last hover move put it;
/// whether that is intended is an open product question, so both behaviors
/// are supported behind this flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RevertPolicy {
    /// Leave the item wherever hover left it (legacy behavior).
    #[default]
    LeaveInPlace,
    /// Move the item back to the lane the gesture started in.
    RevertToOrigin,
}

// ===== DragSession =====

/// A gesture in progress. Exists iff the user is mid-drag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DragSession {
    /// The incident being dragged.
    pub item: IncidentId,
    /// Lane the gesture started in. Captured once, never mutated; the commit
    /// decision compares against this, not against `hover`.
    pub origin: LaneId,
    /// Lane the item currently visually occupies. Updated on every lane
    /// crossing during hover.
    pub hover: LaneId,
}

// ===== CommittedTransition =====

/// The net lane change of one completed gesture, ready for reconciliation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommittedTransition {
    /// The incident that moved.
    pub item: IncidentId,
    /// Lane the gesture started in.
    pub from: LaneId,
    /// Lane the gesture ended in.
    pub to: LaneId,
}

// ===== DragController =====

/// Gesture interpreter: Idle until [`begin`](DragController::begin), then
/// Dragging until [`release`](DragController::release), which always returns
/// to Idle.
#[derive(Debug, Clone, Default)]
pub struct DragController {
    session: Option<DragSession>,
    policy: RevertPolicy,
}

impl DragController {
    /// A controller with the given lost-target policy.
    pub fn new(policy: RevertPolicy) -> Self {
        Self {
            session: None,
            policy,
        }
    }

    /// The gesture in progress, if any.
    pub fn session(&self) -> Option<&DragSession> {
        self.session.as_ref()
    }

    /// True while a gesture is in progress.
    pub fn is_dragging(&self) -> bool {
        self.session.is_some()
    }

    /// Start a gesture on `item`. Origin and hover both start as the lane
    /// currently containing the item.
    ///
    /// Ignored (returns `false`) if the item is not in the store or another
    /// gesture is already in progress.
    pub fn begin(&mut self, item: IncidentId, store: &LaneStore) -> bool {
        if self.session.is_some() {
            tracing::warn!(%item, "drag begin ignored: gesture already in progress");
            return false;
        }
        let Some(lane) = store.lane_of(item) else {
            tracing::warn!(%item, "drag begin ignored: item not on the board");
            return false;
        };
        self.session = Some(DragSession {
            item,
            origin: lane,
            hover: lane,
        });
        true
    }

    /// Hover event: the pointer moved over `target`.
    ///
    /// If the resolved target lane differs from the rolling hover lane, the
    /// item is moved there immediately - optimistic, pre-commit, purely
    /// local - and `hover` follows. Hovering within the current lane and
    /// unresolvable targets are no-ops.
    pub fn hover(&mut self, target: DropTarget, store: &mut LaneStore) {
        let Some(session) = self.session else {
            return;
        };
        let Some((lane, index)) = resolve(target, store) else {
            return;
        };
        if lane == session.hover {
            return;
        }
        store.move_item(session.item, session.hover, lane, index);
        if let Some(session) = self.session.as_mut() {
            session.hover = lane;
        }
        tracing::debug!(item = %session.item, %lane, "optimistic hover move");
    }

    /// Release event. Ends the gesture unconditionally.
    ///
    /// With a resolvable target, a final hover-style move is applied, then the
    /// final hover lane is compared against the *captured origin*: a committed
    /// transition is returned only when they differ. With no resolvable
    /// target the commit step is skipped and the lost-target policy decides
    /// whether hover-time moves are reverted.
    pub fn release(
        &mut self,
        target: Option<DropTarget>,
        store: &mut LaneStore,
    ) -> Option<CommittedTransition> {
        let mut session = self.session.take()?;

        match target.and_then(|t| resolve(t, store)) {
            Some((lane, index)) => {
                if lane != session.hover {
                    store.move_item(session.item, session.hover, lane, index);
                    session.hover = lane;
                }
            }
            None => {
                tracing::debug!(item = %session.item, "drop target unresolvable; commit skipped");
                if self.policy == RevertPolicy::RevertToOrigin && session.hover != session.origin {
                    store.move_item(session.item, session.hover, session.origin, None);
                }
                return None;
            }
        }

        if session.hover == session.origin {
            // Net lane unchanged, even if the item visually crossed lanes and
            // came back. No network call.
            return None;
        }
        Some(CommittedTransition {
            item: session.item,
            from: session.origin,
            to: session.hover,
        })
    }
}

/// Resolve a drop target to a lane and insertion index.
///
/// A lane container resolves to that lane with tail insertion; a card
/// resolves to the lane currently containing it, inserting at the card's
/// index. A card no longer on the board is unresolvable.
fn resolve(target: DropTarget, store: &LaneStore) -> Option<(LaneId, Option<usize>)> {
    match target {
        DropTarget::Lane(lane) => Some((lane, None)),
        DropTarget::Card(card) => {
            let (lane, index) = store.position(card)?;
            Some((lane, Some(index)))
        }
    }
}

// ===== Tests =====

#[cfg(test)]
#[path = "drag_tests.rs"]
mod tests;
