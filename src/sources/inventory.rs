//! In-memory seat inventory.

use std::collections::{BTreeMap, HashMap};

use super::types::SeatInventory;
use crate::error::AllocError;
use crate::model::{Seat, SeatStatus, ZoneKey};

/// Seats in insertion order, indexed by id.
///
/// # Examples
///
/// ```
/// use seat_alloc::model::{Seat, ZoneKey};
/// use seat_alloc::sources::{InMemoryInventory, SeatInventory};
///
/// let zone = ZoneKey::new("B1", "F1", "A");
/// let mut inventory = InMemoryInventory::new(vec![
///     Seat::new("S-B1-F1-A-001", zone.clone(), "Engineering", "Platform"),
///     Seat::new("S-B1-F1-A-002", zone.clone(), "Finance", "Payroll"),
/// ])
/// .unwrap();
///
/// inventory
///     .mark_occupied("S-B1-F1-A-001", "E1", "Engineering", "Platform")
///     .unwrap();
/// assert!(inventory.seats_for_department("Engineering").is_empty());
/// assert_eq!(inventory.occupied_zone_counts()[&zone], 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct InMemoryInventory {
    seats: Vec<Seat>,
    index: HashMap<String, usize>,
}

impl InMemoryInventory {
    pub fn new(seats: impl IntoIterator<Item = Seat>) -> Result<Self, AllocError> {
        let mut inventory = Self::default();
        for seat in seats {
            if inventory.index.contains_key(&seat.seat_id) {
                return Err(AllocError::DuplicateSeat(seat.seat_id));
            }
            inventory
                .index
                .insert(seat.seat_id.clone(), inventory.seats.len());
            inventory.seats.push(seat);
        }
        Ok(inventory)
    }

    pub fn get(&self, seat_id: &str) -> Option<&Seat> {
        self.index.get(seat_id).map(|&i| &self.seats[i])
    }

    pub fn len(&self) -> usize {
        self.seats.len()
    }

    pub fn is_empty(&self) -> bool {
        self.seats.is_empty()
    }

    pub fn occupied_count(&self) -> usize {
        self.seats.iter().filter(|s| s.is_occupied()).count()
    }
}

impl SeatInventory for InMemoryInventory {
    fn available_seats(&self) -> Vec<Seat> {
        self.seats
            .iter()
            .filter(|s| s.is_available())
            .cloned()
            .collect()
    }

    fn seats_for_department(&self, department: &str) -> Vec<Seat> {
        self.seats
            .iter()
            .filter(|s| s.is_available() && s.department == department)
            .cloned()
            .collect()
    }

    fn all_seats(&self) -> &[Seat] {
        &self.seats
    }

    fn occupied_zone_counts(&self) -> BTreeMap<ZoneKey, usize> {
        let mut counts = BTreeMap::new();
        for seat in self.seats.iter().filter(|s| s.is_occupied()) {
            *counts.entry(seat.location.clone()).or_insert(0) += 1;
        }
        counts
    }

    fn mark_occupied(
        &mut self,
        seat_id: &str,
        employee_id: &str,
        department: &str,
        team: &str,
    ) -> Result<(), AllocError> {
        let &i = self
            .index
            .get(seat_id)
            .ok_or_else(|| AllocError::UnknownSeat(seat_id.to_string()))?;
        let seat = &mut self.seats[i];
        if seat.is_occupied() {
            return Err(AllocError::SeatAlreadyOccupied(seat_id.to_string()));
        }
        seat.status = SeatStatus::Occupied;
        seat.occupied_by = Some(employee_id.to_string());
        seat.occupied_department = Some(department.to_string());
        seat.occupied_team = Some(team.to_string());
        Ok(())
    }
}
