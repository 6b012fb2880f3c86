//! Stateful zone memory layered over any [`SeatSelector`].

use std::collections::{BTreeMap, HashMap};

use super::engine::{SeatAllocator, SeatSelector};
use crate::model::{Assignment, Employee, Seat, ZoneKey};

/// Remembers where each `(department, team)` last landed and tries that
/// zone first on the next decision.
///
/// The memory never expires and only learns from committed decisions.
/// When the remembered zone has no candidate, or the inner selector
/// rejects all of them, the full candidate set is offered instead.
///
/// # Examples
///
/// ```
/// use seat_alloc::allocator::{SeatSelector, StickyAllocator};
/// use seat_alloc::model::{Employee, Seat, ZoneKey};
///
/// let zone_b = ZoneKey::new("B1", "F1", "B");
/// let seats = vec![
///     Seat::new("S-B1-F1-A-001", ZoneKey::new("B1", "F1", "A"), "D", "T"),
///     Seat::new("S-B1-F1-B-001", zone_b.clone(), "D", "T"),
/// ];
/// let employee = Employee::new("E1", "C1", "Ada", "a@x", "+1", "D", "T");
///
/// let mut sticky = StickyAllocator::default();
/// sticky.remember("D", "T", zone_b.clone());
/// let assignment = sticky.select_seat(&employee, &seats, &seats).unwrap();
/// assert_eq!(assignment.location, zone_b);
///
/// sticky.commit(&employee, &assignment);
/// assert_eq!(sticky.seat_successes("S-B1-F1-B-001"), 1);
/// ```
#[derive(Debug)]
pub struct StickyAllocator<S: SeatSelector = SeatAllocator> {
    inner: S,
    zone_memory: BTreeMap<(String, String), ZoneKey>,
    seat_successes: HashMap<String, u32>,
}

impl<S: SeatSelector> StickyAllocator<S> {
    pub fn new(inner: S) -> Self {
        Self {
            inner,
            zone_memory: BTreeMap::new(),
            seat_successes: HashMap::new(),
        }
    }

    pub fn inner(&self) -> &S {
        &self.inner
    }

    /// Zone last used by `(department, team)`.
    pub fn remembered_zone(&self, department: &str, team: &str) -> Option<&ZoneKey> {
        self.zone_memory
            .get(&(department.to_string(), team.to_string()))
    }

    /// Seeds or overrides the memory for `(department, team)`.
    pub fn remember(&mut self, department: impl Into<String>, team: impl Into<String>, zone: ZoneKey) {
        self.zone_memory.insert((department.into(), team.into()), zone);
    }

    /// Number of committed decisions that picked `seat_id`.
    pub fn seat_successes(&self, seat_id: &str) -> u32 {
        self.seat_successes.get(seat_id).copied().unwrap_or(0)
    }

    pub fn remembered_teams(&self) -> usize {
        self.zone_memory.len()
    }

    fn record(&mut self, employee: &Employee, assignment: &Assignment) {
        self.remember(
            employee.department.clone(),
            employee.team.clone(),
            assignment.location.clone(),
        );
        *self
            .seat_successes
            .entry(assignment.seat_id.clone())
            .or_insert(0) += 1;
    }
}

impl Default for StickyAllocator<SeatAllocator> {
    fn default() -> Self {
        Self::new(SeatAllocator::default())
    }
}

impl<S: SeatSelector> SeatSelector for StickyAllocator<S> {
    fn select_seat(
        &mut self,
        employee: &Employee,
        candidates: &[Seat],
        all_seats: &[Seat],
    ) -> Option<Assignment> {
        let sticky_zone = self
            .remembered_zone(&employee.department, &employee.team)
            .cloned();

        let sticky_pick = sticky_zone.as_ref().and_then(|zone| {
            let subset: Vec<Seat> = candidates
                .iter()
                .filter(|seat| &seat.location == zone)
                .cloned()
                .collect();
            if subset.is_empty() {
                return None;
            }
            self.inner.select_seat(employee, &subset, all_seats)
        });

        let mut assignment = match sticky_pick {
            Some(assignment) => assignment,
            None => self.inner.select_seat(employee, candidates, all_seats)?,
        };

        let used = match &sticky_zone {
            Some(zone) if *zone == assignment.location => zone.to_string(),
            _ => "none".to_string(),
        };
        assignment.reasoning.push_str(&format!("; sticky_zone={used}"));

        tracing::debug!(
            employee_id = %employee.employee_id,
            seat_id = %assignment.seat_id,
            sticky_zone = %used,
            "sticky decision"
        );

        Some(assignment)
    }

    fn commit(&mut self, employee: &Employee, assignment: &Assignment) {
        self.record(employee, assignment);
        self.inner.commit(employee, assignment);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn z(zone: &str) -> ZoneKey {
        ZoneKey::new("B1", "F1", zone)
    }

    fn emp(id: &str) -> Employee {
        Employee::new(id, "C", id, "e@x", "+1", "Dept-A", "Team-X")
    }

    fn free_seats() -> Vec<Seat> {
        vec![
            Seat::new("S-B1-F1-A-001", z("A"), "Dept-A", "Team-X"),
            Seat::new("S-B1-F1-A-002", z("A"), "Dept-A", "Team-X"),
            Seat::new("S-B1-F1-B-001", z("B"), "Dept-A", "Team-X"),
            Seat::new("S-B1-F1-B-002", z("B"), "Dept-A", "Team-X"),
        ]
    }

    #[test]
    fn test_records_zone_and_seat_success() {
        let seats = free_seats();
        let mut sticky = StickyAllocator::default();

        let a = sticky.select_seat(&emp("E1"), &seats, &seats).unwrap();
        assert_eq!(a.seat_id, "S-B1-F1-A-001");
        assert!(a.reasoning.ends_with("sticky_zone=none"));
        sticky.commit(&emp("E1"), &a);
        assert_eq!(sticky.remembered_zone("Dept-A", "Team-X"), Some(&z("A")));
        assert_eq!(sticky.seat_successes("S-B1-F1-A-001"), 1);
        assert_eq!(sticky.seat_successes("S-B1-F1-B-001"), 0);
        assert_eq!(sticky.remembered_teams(), 1);
    }

    #[test]
    fn test_remembered_zone_is_tried_first() {
        let seats = free_seats();
        let mut sticky = StickyAllocator::default();
        sticky.remember("Dept-A", "Team-X", z("B"));

        let a = sticky.select_seat(&emp("E1"), &seats, &seats).unwrap();
        assert_eq!(a.location, z("B"));
        assert!(a.reasoning.ends_with("sticky_zone=B1/F1/B"));
    }

    #[test]
    fn test_falls_back_when_remembered_zone_has_no_candidates() {
        let seats = free_seats();
        let mut sticky = StickyAllocator::default();
        sticky.remember("Dept-A", "Team-X", z("C"));

        let a = sticky.select_seat(&emp("E1"), &seats, &seats).unwrap();
        assert_eq!(a.location, z("A"));
        assert!(a.reasoning.ends_with("sticky_zone=none"));
        sticky.commit(&emp("E1"), &a);
        // memory follows the latest success
        assert_eq!(sticky.remembered_zone("Dept-A", "Team-X"), Some(&z("A")));
    }

    #[test]
    fn test_falls_back_when_remembered_zone_is_cap_blocked() {
        let seats = vec![
            Seat::new("S-B1-F1-A-001", z("A"), "Dept-A", "Team-X")
                .occupied_as("O1", "Dept-B", "Team-B"),
            Seat::new("S-B1-F1-A-002", z("A"), "Dept-A", "Team-X")
                .occupied_as("O2", "Dept-C", "Team-C"),
            Seat::new("S-B1-F1-A-003", z("A"), "Dept-A", "Team-X"),
            Seat::new("S-B1-F1-B-001", z("B"), "Dept-A", "Team-X"),
        ];
        let candidates: Vec<Seat> = seats.iter().filter(|s| s.is_available()).cloned().collect();

        let mut sticky = StickyAllocator::default();
        sticky.remember("Dept-A", "Team-X", z("A"));
        let a = sticky.select_seat(&emp("E1"), &candidates, &seats).unwrap();
        assert_eq!(a.location, z("B"));
    }

    #[test]
    fn test_uncommitted_decision_is_not_remembered() {
        let seats = free_seats();
        let mut sticky = StickyAllocator::default();
        sticky.remember("Dept-A", "Team-X", z("B"));

        let a = sticky.select_seat(&emp("E1"), &seats, &seats).unwrap();
        assert_eq!(a.location, z("B"));

        // a second decision without a commit still sees the seeded zone only
        let again = sticky.select_seat(&emp("E2"), &seats, &seats).unwrap();
        assert_eq!(again.location, z("B"));
        assert_eq!(sticky.seat_successes(&a.seat_id), 0);
        assert_eq!(sticky.remembered_zone("Dept-A", "Team-X"), Some(&z("B")));
    }

    #[test]
    fn test_none_leaves_memory_untouched() {
        let mut sticky = StickyAllocator::default();
        assert!(sticky.select_seat(&emp("E1"), &[], &[]).is_none());
        assert_eq!(sticky.remembered_teams(), 0);
    }
}
