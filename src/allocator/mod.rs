//! Seat allocation decision engine.
//!
//! One decision runs five stages in order:
//!
//! - **Aggregate**: occupancy counts and team/department anchor zones,
//!   recomputed from the full inventory on every call.
//! - **Filter**: the hard zone department cap, then the anchor lock and
//!   floor/building narrowing, each relaxed rather than allowed to empty
//!   the candidate set.
//! - **Score**: a weighted sum of [`ScoringRule`]s.
//! - **Select**: top-K re-rank with a capacity lookahead and a
//!   department-anchor safeguard.
//! - **Emit**: the [`Assignment`](crate::model::Assignment) with an audit
//!   rationale.
//!
//! [`SeatAllocator`] is stateless. [`StickyAllocator`] adds per-team zone
//! memory on top of any [`SeatSelector`].
//!
//! # Concurrency
//!
//! Decisions must be serialized against one inventory, and the caller
//! must mark each chosen seat occupied and then
//! [`commit`](SeatSelector::commit) it before the next decision.

pub mod aggregate;
mod config;
pub mod emitter;
mod engine;
pub mod filter;
pub mod scoring;
pub mod selector;
mod sticky;

pub use aggregate::{Anchors, OccupancySnapshot};
pub use config::{AllocatorConfig, LookaheadWeights, ScoreWeights};
pub use engine::{SeatAllocator, SeatSelector};
pub use filter::FilterOutcome;
pub use scoring::{ScoredSeat, Scorer, ScoringContext, ScoringRule};
pub use selector::{BeamEntry, Selection};
pub use sticky::StickyAllocator;
