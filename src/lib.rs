//! Triage board synchronization engine (triboard).
//!
//! Maintains three independently paginated, filterable, searchable ordered
//! collections of security incidents (open / in-progress / closed), applies
//! optimistic cross-lane drag moves with live feedback, and reconciles each
//! completed move with a remote API - all while pages stream in via infinite
//! scroll or get invalidated by search and filter changes.
//!
//! The crate is the pure core of a dashboard: every state transition is a
//! plain method on [`state::BoardState`], and all I/O goes through the
//! [`gateway::Dispatch`] seam whose completions the host event loop feeds
//! back in as values. Rendering, routing, and the transport itself are the
//! host's problem.

pub mod config;
pub mod gateway;
pub mod logging;
pub mod model;
pub mod state;
pub mod sync;
