//! Occupancy aggregation and anchor discovery.
//!
//! One pass over the full inventory produces every count the filter,
//! scorer and selector need. The pass is recomputed per decision so that
//! assignments committed earlier in the same batch are always visible.
//!
//! # Tie-breaking
//!
//! When two zones share the maximum count, the zone whose first
//! qualifying occupied seat appears earliest in inventory order wins.

use std::borrow::Borrow;
use std::collections::{BTreeMap, BTreeSet};

use crate::model::{Employee, FloorKey, Seat, ZoneKey};

/// Counts keyed by `K`, remembering the order in which keys were first seen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tally<K: Ord + Clone> {
    counts: BTreeMap<K, usize>,
    first_seen: Vec<K>,
}

impl<K: Ord + Clone> Default for Tally<K> {
    fn default() -> Self {
        Self {
            counts: BTreeMap::new(),
            first_seen: Vec::new(),
        }
    }
}

impl<K: Ord + Clone> Tally<K> {
    fn add(&mut self, key: &K) {
        match self.counts.get_mut(key) {
            Some(count) => *count += 1,
            None => {
                self.counts.insert(key.clone(), 1);
                self.first_seen.push(key.clone());
            }
        }
    }

    /// Count for `key`, zero when absent.
    pub fn get<Q>(&self, key: &Q) -> usize
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.counts.get(key).copied().unwrap_or(0)
    }

    /// Key with the highest count; ties go to the earliest-seen key.
    pub fn leader(&self) -> Option<&K> {
        let mut best: Option<(&K, usize)> = None;
        for key in &self.first_seen {
            let count = self.get(key);
            match best {
                Some((_, top)) if count <= top => {}
                _ => best = Some((key, count)),
            }
        }
        best.map(|(k, _)| k)
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Iterates `(key, count)` in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&K, usize)> {
        self.counts.iter().map(|(k, &c)| (k, c))
    }
}

/// Zones where the requesting employee's team and department cluster.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Anchors {
    /// Zone holding the most occupied seats of the same team and department.
    pub team_dept: Option<ZoneKey>,
    /// Zone holding the most occupied seats of the same team, any department.
    pub team_only: Option<ZoneKey>,
    /// Zone holding the most occupied seats of the same department.
    pub dept: Option<ZoneKey>,
}

/// Occupancy aggregates for one decision, relative to one employee.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OccupancySnapshot {
    zone_load: Tally<ZoneKey>,
    floor_load: Tally<FloorKey>,
    building_load: Tally<String>,
    zone_departments: BTreeMap<ZoneKey, BTreeSet<String>>,
    team_zone: Tally<ZoneKey>,
    team_only_zone: Tally<ZoneKey>,
    dept_zone: Tally<ZoneKey>,
    team_seat_numbers: BTreeMap<ZoneKey, Vec<u64>>,
    available_team: BTreeMap<ZoneKey, usize>,
    available_dept: BTreeMap<ZoneKey, usize>,
    anchors: Anchors,
}

impl OccupancySnapshot {
    /// Scans `all_seats` once. Pure: the inventory is only read.
    pub fn collect(employee: &Employee, all_seats: &[Seat]) -> Self {
        let mut snap = Self::default();

        for seat in all_seats {
            let zone = &seat.location;

            if seat.is_available() {
                if seat.department == employee.department {
                    *snap.available_dept.entry(zone.clone()).or_insert(0) += 1;
                    if seat.team == employee.team {
                        *snap.available_team.entry(zone.clone()).or_insert(0) += 1;
                    }
                }
                continue;
            }

            let department = seat.effective_department();
            let team = seat.effective_team();

            snap.zone_load.add(zone);
            snap.floor_load.add(&zone.floor_key());
            snap.building_load.add(&zone.building);
            snap.zone_departments
                .entry(zone.clone())
                .or_default()
                .insert(department.to_string());

            let same_dept = department == employee.department;
            let same_team = team == employee.team;
            if same_dept {
                snap.dept_zone.add(zone);
            }
            if same_team {
                snap.team_only_zone.add(zone);
            }
            if same_dept && same_team {
                snap.team_zone.add(zone);
                snap.team_seat_numbers
                    .entry(zone.clone())
                    .or_default()
                    .push(seat.seat_number());
            }
        }

        snap.anchors = Anchors {
            team_dept: snap.team_zone.leader().cloned(),
            team_only: snap.team_only_zone.leader().cloned(),
            dept: snap.dept_zone.leader().cloned(),
        };
        snap
    }

    pub fn anchors(&self) -> &Anchors {
        &self.anchors
    }

    /// Occupied seats in the zone.
    pub fn zone_load(&self, zone: &ZoneKey) -> usize {
        self.zone_load.get(zone)
    }

    /// Occupied seats on the floor.
    pub fn floor_load(&self, floor: &FloorKey) -> usize {
        self.floor_load.get(floor)
    }

    /// Occupied seats in the building.
    pub fn building_load(&self, building: &str) -> usize {
        self.building_load.get(building)
    }

    /// Occupied same team+department seats in the zone.
    pub fn team_zone_count(&self, zone: &ZoneKey) -> usize {
        self.team_zone.get(zone)
    }

    /// Occupied same-team seats in the zone, any department.
    pub fn team_only_zone_count(&self, zone: &ZoneKey) -> usize {
        self.team_only_zone.get(zone)
    }

    /// Occupied same-department seats in the zone.
    pub fn dept_zone_count(&self, zone: &ZoneKey) -> usize {
        self.dept_zone.get(zone)
    }

    /// Distinct departments among the zone's occupied seats.
    pub fn zone_departments(&self, zone: &ZoneKey) -> Option<&BTreeSet<String>> {
        self.zone_departments.get(zone)
    }

    /// Distinct departments in the zone once `department` joins it.
    pub fn departments_with(&self, zone: &ZoneKey, department: &str) -> usize {
        match self.zone_departments.get(zone) {
            Some(set) if set.contains(department) => set.len(),
            Some(set) => set.len() + 1,
            None => 1,
        }
    }

    /// Mean seat number of the zone's occupied same team+department seats.
    pub fn team_cluster_center(&self, zone: &ZoneKey) -> Option<f64> {
        let numbers = self.team_seat_numbers.get(zone)?;
        if numbers.is_empty() {
            return None;
        }
        let sum: f64 = numbers.iter().map(|&n| n as f64).sum();
        Some(sum / numbers.len() as f64)
    }

    /// Available seats in the zone templated for the employee's team and department.
    pub fn available_same_team(&self, zone: &ZoneKey) -> usize {
        self.available_team.get(zone).copied().unwrap_or(0)
    }

    /// Available seats in the zone templated for the employee's department.
    pub fn available_same_dept(&self, zone: &ZoneKey) -> usize {
        self.available_dept.get(zone).copied().unwrap_or(0)
    }

    /// Most-occupied floor; ties go to the floor seen first.
    pub fn busiest_floor(&self) -> Option<&FloorKey> {
        self.floor_load.leader()
    }

    /// Iterates per-zone occupied counts in zone order.
    pub fn zone_loads(&self) -> impl Iterator<Item = (&ZoneKey, usize)> {
        self.zone_load.iter()
    }

    pub fn is_empty(&self) -> bool {
        self.zone_load.is_empty()
    }
}
