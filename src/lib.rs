//! Deterministic seat allocation engine.
//!
//! Assigns an arriving employee a seat from a zoned inventory. Hard
//! occupancy constraints are enforced first, then team and department
//! cohesion are balanced against utilization:
//!
//! - **Allocator**: occupancy aggregation, constraint filter, weighted
//!   scoring, top-K lookahead selection and the decision record with its
//!   rationale. See [`allocator`].
//! - **Sources**: arrival stream, employee directory and seat inventory
//!   behind traits, with in-memory adapters.
//! - **Orchestrator**: drains arrivals, orders the batch, decides each
//!   event and commits the seat before the next decision.
//! - **Notify / Energy**: downstream consumers of each assignment
//!   (email and SMS messages, zone power commands, device usage).
//! - **Simulation**: a synthetic 800-seat campus for demos and tests.
//!
//! # Example
//!
//! ```
//! use seat_alloc::allocator::SeatAllocator;
//! use seat_alloc::model::{Employee, Seat, ZoneKey};
//!
//! let zone_a = ZoneKey::new("B1", "F1", "A");
//! let zone_b = ZoneKey::new("B1", "F1", "B");
//! let inventory = vec![
//!     Seat::new("S-B1-F1-A-001", zone_a.clone(), "Dept-A", "Team-A1").occupied("E1"),
//!     Seat::new("S-B1-F1-A-002", zone_a.clone(), "Dept-B", "Team-B1").occupied("E2"),
//!     Seat::new("S-B1-F1-A-003", zone_a, "Dept-C", "Team-C1"),
//!     Seat::new("S-B1-F1-B-001", zone_b.clone(), "Dept-C", "Team-C1"),
//! ];
//! let employee = Employee::new("E9", "C9", "Kai", "k@x", "+9", "Dept-C", "Team-C1");
//!
//! // Zone A already hosts two departments, so Dept-C goes to zone B.
//! let decision = SeatAllocator::default()
//!     .select(&employee, &inventory[2..], &inventory)
//!     .unwrap();
//! assert_eq!(decision.location, zone_b);
//! ```

pub mod allocator;
pub mod energy;
pub mod error;
pub mod model;
pub mod notify;
pub mod orchestrator;
pub mod simulation;
pub mod sources;

pub use error::AllocError;
