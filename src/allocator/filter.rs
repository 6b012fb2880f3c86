//! Constraint filter: zone department cap, anchor lock, location narrowing.

use super::aggregate::OccupancySnapshot;
use crate::model::{Employee, FloorKey, Seat};

/// Candidates surviving the filter, with the flags that fired.
#[derive(Debug, Clone, PartialEq)]
pub struct FilterOutcome<'a> {
    pub candidates: Vec<&'a Seat>,
    /// The team+department anchor zone had candidates and the lock engaged.
    pub dept_locked: bool,
    /// The lock emptied the set and fell back to all cap-valid candidates.
    pub lock_relaxed: bool,
    /// Floor the scorer treats as "home"; `None` only when nothing survived.
    pub preferred_floor: Option<FloorKey>,
    /// Candidates were narrowed to `preferred_floor`.
    pub floor_preferred: bool,
    /// Candidates were narrowed to the building of `preferred_floor`.
    pub building_preferred: bool,
}

impl FilterOutcome<'_> {
    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }
}

/// Applies the hard cap, then the soft preferences, to `candidates`.
///
/// The cap is never relaxed. The anchor lock and the floor/building
/// narrowing only restrict the set when something survives the
/// restriction.
pub fn apply<'a>(
    employee: &Employee,
    candidates: &'a [Seat],
    snapshot: &OccupancySnapshot,
    zone_department_cap: usize,
) -> FilterOutcome<'a> {
    let cap_valid: Vec<&Seat> = candidates
        .iter()
        .filter(|seat| {
            snapshot.departments_with(&seat.location, &employee.department) <= zone_department_cap
        })
        .collect();

    let mut dept_locked = false;
    let mut lock_relaxed = false;
    let anchors = snapshot.anchors();

    let pool = match &anchors.team_dept {
        Some(anchor) if candidates.iter().any(|s| &s.location == anchor) => {
            dept_locked = true;
            let locked: Vec<&Seat> = cap_valid
                .iter()
                .copied()
                .filter(|s| &s.location == anchor)
                .collect();
            if locked.is_empty() {
                lock_relaxed = true;
                cap_valid
            } else {
                locked
            }
        }
        _ => cap_valid,
    };

    if pool.is_empty() {
        return FilterOutcome {
            candidates: pool,
            dept_locked,
            lock_relaxed,
            preferred_floor: None,
            floor_preferred: false,
            building_preferred: false,
        };
    }

    let preferred_floor = anchors
        .team_dept
        .as_ref()
        .or(anchors.team_only.as_ref())
        .or(anchors.dept.as_ref())
        .map(|zone| zone.floor_key())
        .or_else(|| snapshot.busiest_floor().cloned())
        .or_else(|| pool.iter().map(|s| s.location.floor_key()).min());

    let mut floor_preferred = false;
    let mut building_preferred = false;
    let candidates = match &preferred_floor {
        Some(floor) => {
            let on_floor: Vec<&Seat> = pool
                .iter()
                .copied()
                .filter(|s| s.location.is_on(floor))
                .collect();
            if !on_floor.is_empty() {
                floor_preferred = true;
                on_floor
            } else {
                let in_building: Vec<&Seat> = pool
                    .iter()
                    .copied()
                    .filter(|s| s.location.building == floor.building)
                    .collect();
                if !in_building.is_empty() {
                    building_preferred = true;
                    in_building
                } else {
                    pool
                }
            }
        }
        None => pool,
    };

    FilterOutcome {
        candidates,
        dept_locked,
        lock_relaxed,
        preferred_floor,
        floor_preferred,
        building_preferred,
    }
}
