//! Decision pipeline: aggregate → filter → score → select → emit.

use chrono::{DateTime, Utc};

use super::aggregate::OccupancySnapshot;
use super::config::AllocatorConfig;
use super::emitter;
use super::filter;
use super::scoring::{Scorer, ScoringContext};
use super::selector;
use crate::error::AllocError;
use crate::model::{Assignment, Employee, Seat};

/// Anything that turns an employee and a candidate set into a decision.
///
/// `candidates` are available seats already narrowed to the employee's
/// department by the caller; `all_seats` is the full inventory snapshot
/// (available and occupied). Implementations must not mutate inventory;
/// the caller applies the decision and then reports it through
/// [`commit`](SeatSelector::commit).
pub trait SeatSelector {
    fn select_seat(
        &mut self,
        employee: &Employee,
        candidates: &[Seat],
        all_seats: &[Seat],
    ) -> Option<Assignment>;

    /// Called once `assignment` has been applied to the inventory.
    ///
    /// Decisions the caller failed to apply are never committed, so
    /// stateful selectors should learn here rather than in `select_seat`.
    fn commit(&mut self, _employee: &Employee, _assignment: &Assignment) {}
}

/// The stateless allocation engine.
///
/// Every call recomputes occupancy from `all_seats`, so the result is a
/// pure function of `(employee, candidates, all_seats)` apart from the
/// record's timestamp.
///
/// # Examples
///
/// ```
/// use seat_alloc::allocator::SeatAllocator;
/// use seat_alloc::model::{Employee, Seat, ZoneKey};
///
/// let zone_a = ZoneKey::new("B1", "F1", "A");
/// let zone_b = ZoneKey::new("B1", "F1", "B");
/// let all = vec![
///     Seat::new("S-B1-F1-A-001", zone_a.clone(), "Dept-A", "Team-X").occupied("E1"),
///     Seat::new("S-B1-F1-A-002", zone_a.clone(), "Dept-A", "Team-X"),
///     Seat::new("S-B1-F1-B-001", zone_b, "Dept-A", "Team-X"),
/// ];
/// let employee = Employee::new("E2", "C2", "Pat", "p@x", "+2", "Dept-A", "Team-X");
///
/// let allocator = SeatAllocator::default();
/// let assignment = allocator
///     .select(&employee, &all[1..], &all)
///     .expect("a seat is available");
/// assert_eq!(assignment.location, zone_a);
/// ```
pub struct SeatAllocator {
    config: AllocatorConfig,
    scorer: Scorer,
}

impl SeatAllocator {
    /// Creates an allocator with the standard scoring rules.
    pub fn new(config: AllocatorConfig) -> Self {
        Self {
            config,
            scorer: Scorer::standard(),
        }
    }

    /// Like [`new`](Self::new), rejecting invalid configurations.
    pub fn try_new(config: AllocatorConfig) -> Result<Self, AllocError> {
        config.validate().map_err(AllocError::InvalidConfig)?;
        Ok(Self::new(config))
    }

    /// Replaces the scoring rules.
    pub fn with_scorer(mut self, scorer: Scorer) -> Self {
        self.scorer = scorer;
        self
    }

    pub fn config(&self) -> &AllocatorConfig {
        &self.config
    }

    /// Decides with the current time as the record timestamp.
    pub fn select(
        &self,
        employee: &Employee,
        candidates: &[Seat],
        all_seats: &[Seat],
    ) -> Option<Assignment> {
        self.select_at(employee, candidates, all_seats, Utc::now())
    }

    /// Decides, stamping the record with `assigned_at`.
    ///
    /// Returns `None` when no candidate survives the filter.
    pub fn select_at(
        &self,
        employee: &Employee,
        candidates: &[Seat],
        all_seats: &[Seat],
        assigned_at: DateTime<Utc>,
    ) -> Option<Assignment> {
        if candidates.is_empty() {
            tracing::debug!(employee_id = %employee.employee_id, "no candidate seats supplied");
            return None;
        }

        let snapshot = OccupancySnapshot::collect(employee, all_seats);
        let anchors = snapshot.anchors();

        let filtered = filter::apply(
            employee,
            candidates,
            &snapshot,
            self.config.zone_department_cap,
        );
        if filtered.is_empty() {
            tracing::debug!(
                employee_id = %employee.employee_id,
                lock_relaxed = filtered.lock_relaxed,
                "every candidate violates the zone department cap"
            );
            return None;
        }

        let ctx = ScoringContext {
            employee,
            snapshot: &snapshot,
            preferred_floor: filtered.preferred_floor.as_ref(),
            weights: &self.config.weights,
        };
        let ranked = self.scorer.rank(&filtered.candidates, &ctx);

        let selection = selector::select(
            &ranked,
            &snapshot,
            self.config.beam_width,
            &self.config.lookahead,
        )?;

        tracing::debug!(
            employee_id = %employee.employee_id,
            seat_id = %selection.winner.seat.seat_id,
            team_dept_anchor = ?anchors.team_dept,
            dept_anchor = ?anchors.dept,
            dept_locked = filtered.dept_locked,
            lock_relaxed = filtered.lock_relaxed,
            safeguard = selection.safeguard_applied,
            "seat selected"
        );

        Some(emitter::emit(
            employee,
            &selection,
            &filtered,
            anchors,
            assigned_at,
        ))
    }
}

impl std::fmt::Debug for SeatAllocator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SeatAllocator")
            .field("config", &self.config)
            .field("rules", &self.scorer.rule_names())
            .finish()
    }
}

impl Default for SeatAllocator {
    fn default() -> Self {
        Self::new(AllocatorConfig::default())
    }
}

impl SeatSelector for SeatAllocator {
    fn select_seat(
        &mut self,
        employee: &Employee,
        candidates: &[Seat],
        all_seats: &[Seat],
    ) -> Option<Assignment> {
        self.select(employee, candidates, all_seats)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ZoneKey;
    use std::collections::BTreeSet;

    fn z(b: &str, f: &str, zone: &str) -> ZoneKey {
        ZoneKey::new(b, f, zone)
    }

    fn seat(id: &str, dept: &str, team: &str) -> Seat {
        // S-B1-F1-A-001 → (B1, F1, A)
        let parts: Vec<&str> = id.split('-').collect();
        Seat::new(id, z(parts[1], parts[2], parts[3]), dept, team)
    }

    fn emp(id: &str, dept: &str, team: &str) -> Employee {
        Employee::new(id, format!("CARD-{id}"), id, "e@x", "+1", dept, team)
    }

    fn pick(all: &[Seat], ids: &[&str]) -> Vec<Seat> {
        ids.iter()
            .map(|id| all.iter().find(|s| s.seat_id == *id).unwrap().clone())
            .collect()
    }

    fn decide(employee: &Employee, all: &[Seat], candidate_ids: &[&str]) -> Option<Assignment> {
        let candidates = pick(all, candidate_ids);
        SeatAllocator::default().select(employee, &candidates, all)
    }

    #[test]
    fn test_same_team_prefers_same_zone() {
        let all = vec![
            seat("S-B1-F1-A-001", "Dept-A", "Team-X").occupied("E1"),
            seat("S-B1-F1-A-002", "Dept-A", "Team-X"),
            seat("S-B1-F1-B-001", "Dept-A", "Team-X"),
        ];
        let a = decide(&emp("E2", "Dept-A", "Team-X"), &all, &["S-B1-F1-A-002", "S-B1-F1-B-001"])
            .unwrap();
        assert_eq!(a.location.zone, "A");
        assert!(a.reasoning.contains("dept_locked=yes"));
    }

    #[test]
    fn test_department_teams_cluster_in_zone() {
        let all = vec![
            seat("S-B1-F1-A-001", "Dept-A", "Team-Z").occupied("E1"),
            seat("S-B1-F1-A-002", "Dept-A", "Team-Y"),
            seat("S-B1-F1-B-001", "Dept-A", "Team-Y"),
        ];
        let a = decide(&emp("E3", "Dept-A", "Team-Y"), &all, &["S-B1-F1-A-002", "S-B1-F1-B-001"])
            .unwrap();
        assert_eq!(a.location.zone, "A");
    }

    #[test]
    fn test_zone_rejects_third_department() {
        let all = vec![
            seat("S-B1-F1-A-001", "Dept-A", "Team-A1").occupied("E1"),
            seat("S-B1-F1-A-002", "Dept-B", "Team-B1").occupied("E2"),
            seat("S-B1-F1-A-003", "Dept-C", "Team-C1"),
            seat("S-B1-F1-B-001", "Dept-C", "Team-C1"),
        ];
        let a = decide(&emp("E9", "Dept-C", "Team-C1"), &all, &["S-B1-F1-A-003", "S-B1-F1-B-001"])
            .unwrap();
        assert_eq!(a.location.zone, "B");
    }

    #[test]
    fn test_zone_allows_second_department() {
        let all = vec![
            seat("S-B1-F1-A-001", "Dept-A", "Team-A1").occupied("E1"),
            seat("S-B1-F1-A-002", "Dept-B", "Team-B1"),
            seat("S-B1-F1-B-001", "Dept-B", "Team-B1"),
        ];
        let a = decide(&emp("E10", "Dept-B", "Team-B1"), &all, &["S-B1-F1-A-002", "S-B1-F1-B-001"])
            .unwrap();
        assert_eq!(a.location.zone, "A");
    }

    #[test]
    fn test_over_capacity_zone_is_skipped_by_resident_department() {
        let all = vec![
            seat("S-B1-F1-A-001", "Dept-A", "Team-A1").occupied("E1"),
            seat("S-B1-F1-A-002", "Dept-B", "Team-B1").occupied("E2"),
            seat("S-B1-F1-A-003", "Dept-C", "Team-C1").occupied("E3"),
            seat("S-B1-F1-A-004", "Dept-A", "Team-A2"),
            seat("S-B1-F1-B-001", "Dept-A", "Team-A2"),
        ];
        let a = decide(&emp("E11", "Dept-A", "Team-A2"), &all, &["S-B1-F1-A-004", "S-B1-F1-B-001"])
            .unwrap();
        assert_eq!(a.location.zone, "B");
    }

    #[test]
    fn test_relaxed_lock_falls_back_to_other_department_zone() {
        let all = vec![
            seat("S-B1-F1-A-001", "Dept-A", "Team-A1").occupied_as("E1", "Dept-A", "Team-A1"),
            seat("S-B1-F1-A-002", "Dept-A", "Team-A1").occupied_as("E2", "Dept-B", "Team-B1"),
            seat("S-B1-F1-A-003", "Dept-A", "Team-A1").occupied_as("E3", "Dept-C", "Team-C1"),
            seat("S-B1-F1-B-001", "Dept-A", "Team-A2").occupied_as("E4", "Dept-A", "Team-A2"),
            seat("S-B1-F1-A-010", "Dept-A", "Team-A9"),
            seat("S-B1-F1-B-010", "Dept-A", "Team-A9"),
            seat("S-B2-F2-B-010", "Dept-A", "Team-A9"),
        ];
        let a = decide(
            &emp("E15", "Dept-A", "Team-A9"),
            &all,
            &["S-B1-F1-A-010", "S-B1-F1-B-010", "S-B2-F2-B-010"],
        )
        .unwrap();
        assert_eq!(a.location, z("B1", "F1", "B"));
    }

    #[test]
    fn test_team_anchor_relaxation_prefers_existing_department_zone() {
        // The team's anchor zone A is full of two other departments, so the
        // lock relaxes; zone C already hosts Dept-A and beats fresh zone D.
        let all = vec![
            seat("S-B1-F1-A-001", "Dept-A", "Team-A1").occupied_as("E1", "Dept-A", "Team-A1"),
            seat("S-B1-F1-A-002", "Dept-A", "Team-A1").occupied_as("E2", "Dept-A", "Team-A1"),
            seat("S-B1-F1-A-003", "Dept-A", "Team-A1").occupied_as("E3", "Dept-B", "Team-B1"),
            seat("S-B1-F1-A-004", "Dept-A", "Team-A1").occupied_as("E4", "Dept-C", "Team-C1"),
            seat("S-B1-F1-C-001", "Dept-A", "Team-A2").occupied_as("E5", "Dept-A", "Team-A2"),
            seat("S-B1-F1-A-005", "Dept-A", "Team-A1"),
            seat("S-B1-F1-C-002", "Dept-A", "Team-A1"),
            seat("S-B1-F1-D-001", "Dept-A", "Team-A1"),
        ];
        let a = decide(
            &emp("E6", "Dept-A", "Team-A1"),
            &all,
            &["S-B1-F1-A-005", "S-B1-F1-C-002", "S-B1-F1-D-001"],
        )
        .unwrap();
        assert_eq!(a.location, z("B1", "F1", "C"));
        assert!(a.reasoning.contains("lock_relaxed=yes"));
    }

    #[test]
    fn test_prefers_same_floor_before_other_floor_or_building() {
        let all = vec![
            seat("S-B1-F1-A-001", "Dept-A", "Team-A1").occupied("E1"),
            seat("S-B1-F1-B-001", "Dept-A", "Team-A1"),
            seat("S-B1-F2-A-001", "Dept-A", "Team-A1"),
            seat("S-B2-F1-A-001", "Dept-A", "Team-A1"),
        ];
        let a = decide(
            &emp("E12", "Dept-A", "Team-A1"),
            &all,
            &["S-B1-F2-A-001", "S-B2-F1-A-001", "S-B1-F1-B-001"],
        )
        .unwrap();
        assert_eq!(a.location, z("B1", "F1", "B"));
        assert!(a.reasoning.contains("floor_preferred=yes"));
    }

    #[test]
    fn test_zone_cap_uses_actual_occupied_department() {
        let all = vec![
            seat("S-B1-F1-A-001", "Dept-A", "Team-A1").occupied_as("E1", "Dept-A", "Team-A1"),
            seat("S-B1-F1-A-002", "Dept-A", "Team-A1").occupied_as("E2", "Dept-B", "Team-B2"),
            seat("S-B1-F1-A-003", "Dept-A", "Team-A1"),
            seat("S-B1-F1-B-001", "Dept-C", "Team-C2"),
        ];
        let a = decide(&emp("E13", "Dept-C", "Team-C2"), &all, &["S-B1-F1-A-003", "S-B1-F1-B-001"])
            .unwrap();
        assert_eq!(a.location.zone, "B");
    }

    #[test]
    fn test_floor_preference_follows_occupied_floor_without_anchor() {
        let all = vec![
            seat("S-B2-F2-A-001", "Dept-A", "Team-A1").occupied("E1"),
            seat("S-B2-F2-A-002", "Dept-X", "Team-X1"),
            seat("S-B1-F1-A-001", "Dept-X", "Team-X1"),
        ];
        let a = decide(&emp("E14", "Dept-X", "Team-X1"), &all, &["S-B2-F2-A-002", "S-B1-F1-A-001"])
            .unwrap();
        assert_eq!(a.location, z("B2", "F2", "A"));
    }

    #[test]
    fn test_same_team_prefers_nearby_seat_numbers() {
        let all = vec![
            seat("S-B1-F1-A-049", "Dept-A", "Team-X").occupied_as("E1", "Dept-A", "Team-X"),
            seat("S-B1-F1-A-001", "Dept-A", "Team-X"),
            seat("S-B1-F1-A-050", "Dept-A", "Team-X"),
        ];
        let a = decide(&emp("E16", "Dept-A", "Team-X"), &all, &["S-B1-F1-A-001", "S-B1-F1-A-050"])
            .unwrap();
        assert_eq!(a.seat_id, "S-B1-F1-A-050");
    }

    #[test]
    fn test_lower_seat_number_wins_among_equals() {
        let all = vec![
            seat("S-B1-F1-A-007", "Dept-A", "Team-X"),
            seat("S-B1-F1-A-003", "Dept-A", "Team-X"),
            seat("S-B1-F1-A-005", "Dept-A", "Team-X"),
        ];
        let a = decide(
            &emp("E1", "Dept-A", "Team-X"),
            &all,
            &["S-B1-F1-A-007", "S-B1-F1-A-003", "S-B1-F1-A-005"],
        )
        .unwrap();
        assert_eq!(a.seat_id, "S-B1-F1-A-003");
    }

    #[test]
    fn test_oversized_seat_number_does_not_win_tiebreak() {
        let all = vec![
            seat("S-B1-F1-A-4294967296", "Dept-A", "Team-X"),
            seat("S-B1-F1-A-002", "Dept-A", "Team-X"),
        ];
        let a = decide(
            &emp("E1", "Dept-A", "Team-X"),
            &all,
            &["S-B1-F1-A-4294967296", "S-B1-F1-A-002"],
        )
        .unwrap();
        assert_eq!(a.seat_id, "S-B1-F1-A-002");
    }

    #[test]
    fn test_no_candidates_returns_none() {
        let all = vec![seat("S-B1-F1-A-001", "Dept-A", "Team-X")];
        assert!(SeatAllocator::default()
            .select(&emp("E1", "Dept-A", "Team-X"), &[], &all)
            .is_none());
    }

    #[test]
    fn test_all_candidates_cap_blocked_returns_none() {
        let all = vec![
            seat("S-B1-F1-A-001", "Dept-A", "T1").occupied("E1"),
            seat("S-B1-F1-A-002", "Dept-B", "T2").occupied("E2"),
            seat("S-B1-F1-A-003", "Dept-C", "T3"),
        ];
        assert!(decide(&emp("E3", "Dept-C", "T3"), &all, &["S-B1-F1-A-003"]).is_none());
    }

    #[test]
    fn test_decision_is_deterministic() {
        let all = vec![
            seat("S-B1-F1-A-001", "Dept-A", "Team-X").occupied("E1"),
            seat("S-B1-F1-A-002", "Dept-A", "Team-X"),
            seat("S-B1-F1-B-001", "Dept-A", "Team-X"),
            seat("S-B2-F1-A-001", "Dept-A", "Team-Y"),
        ];
        let e = emp("E2", "Dept-A", "Team-X");
        let ids = ["S-B2-F1-A-001", "S-B1-F1-B-001", "S-B1-F1-A-002"];
        let allocator = SeatAllocator::default();
        let now = Utc::now();

        let first = allocator.select_at(&e, &pick(&all, &ids), &all, now).unwrap();
        let second = allocator.select_at(&e, &pick(&all, &ids), &all, now).unwrap();
        assert_eq!(first, second);

        let mut reversed = pick(&all, &ids);
        reversed.reverse();
        let third = allocator.select_at(&e, &reversed, &all, now).unwrap();
        assert_eq!(first.seat_id, third.seat_id);
    }

    #[test]
    fn test_sequential_decisions_respect_cap() {
        // Three departments arrive into a two-zone floor; zone A can only
        // ever hold two of them.
        let mut all: Vec<Seat> = Vec::new();
        for zone in ["A", "B"] {
            for dept in ["Dept-A", "Dept-B", "Dept-C"] {
                for _ in 0..3 {
                    let idx = all.len() + 1;
                    all.push(Seat::new(
                        format!("S-B1-F1-{zone}-{idx:03}"),
                        z("B1", "F1", zone),
                        dept,
                        format!("{dept}-T"),
                    ));
                }
            }
        }
        let allocator = SeatAllocator::default();
        let mut next = 0;
        for round in 0..3 {
            for dept in ["Dept-A", "Dept-B", "Dept-C"] {
                next += 1;
                let e = emp(&format!("E{next}"), dept, &format!("{dept}-T"));
                let candidates: Vec<Seat> = all
                    .iter()
                    .filter(|s| s.is_available() && s.department == dept)
                    .cloned()
                    .collect();
                let a = allocator.select(&e, &candidates, &all);
                let Some(a) = a else {
                    panic!("round {round}: no seat for {dept}");
                };
                let target = all.iter_mut().find(|s| s.seat_id == a.seat_id).unwrap();
                *target = target.clone().occupied_as(&e.employee_id, dept, &e.team);
            }
        }

        for zone in ["A", "B"] {
            let depts: BTreeSet<&str> = all
                .iter()
                .filter(|s| s.is_occupied() && s.location.zone == zone)
                .map(|s| s.effective_department())
                .collect();
            assert!(depts.len() <= 2, "zone {zone} mixes {depts:?}");
        }
    }

    #[test]
    fn test_try_new_rejects_invalid_config() {
        let err = SeatAllocator::try_new(AllocatorConfig::default().with_beam_width(0));
        assert!(matches!(err, Err(AllocError::InvalidConfig(_))));
        assert!(SeatAllocator::try_new(AllocatorConfig::default()).is_ok());
    }

    #[test]
    fn test_selector_trait_delegates() {
        let all = vec![seat("S-B1-F1-A-001", "Dept-A", "Team-X")];
        let mut allocator = SeatAllocator::default();
        let a = allocator.select_seat(&emp("E1", "Dept-A", "Team-X"), &all, &all);
        assert_eq!(a.unwrap().seat_id, "S-B1-F1-A-001");
    }
}
