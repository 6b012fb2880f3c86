//! Collaborators feeding the decision engine.
//!
//! Each concern is a trait with an in-memory adapter:
//!
//! - [`ArrivalSource`] / [`AccessControlStream`]: badge-in events,
//!   drained destructively.
//! - [`EmployeeDirectory`] / [`InMemoryDirectory`]: employee lookup.
//! - [`SeatInventory`] / [`InMemoryInventory`]: seat queries and the
//!   single "mark occupied" mutation.

mod access;
mod directory;
mod inventory;
mod types;

pub use access::AccessControlStream;
pub use directory::InMemoryDirectory;
pub use inventory::InMemoryInventory;
pub use types::{ArrivalSource, EmployeeDirectory, SeatInventory};
