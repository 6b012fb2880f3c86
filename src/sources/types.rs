//! Collaborator traits.

use std::collections::BTreeMap;

use crate::error::AllocError;
use crate::model::{AccessEvent, Employee, Seat, ZoneKey};

/// Ordered stream of arrival events.
pub trait ArrivalSource {
    /// Removes and returns every pending event, oldest first.
    fn drain(&mut self) -> Vec<AccessEvent>;

    fn is_empty(&self) -> bool;
}

/// Employee lookup by id.
pub trait EmployeeDirectory {
    fn get(&self, employee_id: &str) -> Option<&Employee>;
}

/// Seat store.
///
/// Iteration order of [`all_seats`](SeatInventory::all_seats) must be
/// stable between calls; anchor tie-breaks depend on it.
pub trait SeatInventory {
    fn available_seats(&self) -> Vec<Seat>;

    /// Available seats whose template department is `department`.
    fn seats_for_department(&self, department: &str) -> Vec<Seat>;

    fn all_seats(&self) -> &[Seat];

    /// Occupied seats per zone.
    fn occupied_zone_counts(&self) -> BTreeMap<ZoneKey, usize>;

    /// Transitions `seat_id` to occupied with the occupant's actual
    /// department and team.
    fn mark_occupied(
        &mut self,
        seat_id: &str,
        employee_id: &str,
        department: &str,
        team: &str,
    ) -> Result<(), AllocError>;
}
