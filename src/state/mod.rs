//! Board state machine (pure).
//!
//! All state transitions are plain methods on owned state, testable without
//! any transport or rendering layer.

pub mod board;
pub mod drag;
pub mod filter;
pub mod lane_store;
pub mod pagination;

// Re-export for convenience
pub use board::BoardState;
pub use drag::{CommittedTransition, DragController, DragSession, DropTarget, RevertPolicy};
pub use filter::{FilterContext, FilterSet};
pub use lane_store::LaneStore;
pub use pagination::{LaneMeta, PaginationTracker};
