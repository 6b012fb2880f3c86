//! Bounded best-first selection with one-step lookahead.
//!
//! # Algorithm
//!
//! 1. Take the `beam_width` best-scored candidates (the beam)
//! 2. Add a lookahead bonus for the same-team / same-department capacity
//!    the candidate's zone keeps after this seat is consumed
//! 3. Re-rank the beam by `score + lookahead`; the top entry is the
//!    provisional winner
//! 4. If a beam member sits in the department anchor zone and that zone
//!    still has same-department capacity, that member wins instead
//!
//! This is a two-phase top-K re-rank, not a multi-step sequence search.

use std::cmp::Ordering;

use super::aggregate::OccupancySnapshot;
use super::config::LookaheadWeights;
use super::scoring::ScoredSeat;
use crate::model::{Seat, ZoneKey};

/// A beam member with its lookahead bonus.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BeamEntry<'a> {
    pub seat: &'a Seat,
    pub score: f64,
    pub lookahead: f64,
}

impl BeamEntry<'_> {
    pub fn total(&self) -> f64 {
        self.score + self.lookahead
    }
}

/// Outcome of the selector.
#[derive(Debug, Clone, PartialEq)]
pub struct Selection<'a> {
    pub winner: BeamEntry<'a>,
    /// Beam members, re-ranked best first.
    pub beam: Vec<BeamEntry<'a>>,
    /// The department-anchor safeguard displaced the provisional winner.
    pub safeguard_applied: bool,
}

/// Lookahead bonus for placing the employee in `zone`.
///
/// Counts the zone's available same-team and same-department seats,
/// minus the one being consumed.
pub fn lookahead(zone: &ZoneKey, snapshot: &OccupancySnapshot, weights: &LookaheadWeights) -> f64 {
    let team = snapshot.available_same_team(zone).saturating_sub(1);
    let dept = snapshot.available_same_dept(zone).saturating_sub(1);
    team as f64 * weights.same_team + dept as f64 * weights.same_department
}

fn compare_total(a: &BeamEntry<'_>, b: &BeamEntry<'_>) -> Ordering {
    b.total()
        .total_cmp(&a.total())
        .then_with(|| a.seat.seat_id.cmp(&b.seat.seat_id))
}

/// Picks the winner from `ranked` (best first). Returns `None` when empty.
pub fn select<'a>(
    ranked: &[ScoredSeat<'a>],
    snapshot: &OccupancySnapshot,
    beam_width: usize,
    weights: &LookaheadWeights,
) -> Option<Selection<'a>> {
    let mut beam: Vec<BeamEntry<'a>> = ranked
        .iter()
        .take(beam_width)
        .map(|scored| BeamEntry {
            seat: scored.seat,
            score: scored.score,
            lookahead: lookahead(&scored.seat.location, snapshot, weights),
        })
        .collect();
    beam.sort_by(compare_total);

    let provisional = *beam.first()?;

    let anchored = snapshot.anchors().dept.as_ref().and_then(|anchor| {
        if snapshot.available_same_dept(anchor) == 0 {
            return None;
        }
        beam.iter().find(|entry| &entry.seat.location == anchor).copied()
    });

    let (winner, safeguard_applied) = match anchored {
        Some(entry) if entry.seat.seat_id != provisional.seat.seat_id => (entry, true),
        _ => (provisional, false),
    };

    Some(Selection {
        winner,
        beam,
        safeguard_applied,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Employee, Seat};

    fn z(b: &str, f: &str, zone: &str) -> ZoneKey {
        ZoneKey::new(b, f, zone)
    }

    fn emp(dept: &str, team: &str) -> Employee {
        Employee::new("E-NEW", "C", "New", "n@x", "+0", dept, team)
    }

    #[test]
    fn test_empty_beam_is_none() {
        let snap = OccupancySnapshot::collect(&emp("D", "T"), &[]);
        assert!(select(&[], &snap, 40, &LookaheadWeights::default()).is_none());
    }

    #[test]
    fn test_lookahead_counts_remaining_capacity() {
        let all = vec![
            Seat::new("S-B1-F1-A-001", z("B1", "F1", "A"), "D", "T"),
            Seat::new("S-B1-F1-A-002", z("B1", "F1", "A"), "D", "T"),
            Seat::new("S-B1-F1-A-003", z("B1", "F1", "A"), "D", "T"),
            Seat::new("S-B1-F1-A-004", z("B1", "F1", "A"), "D", "Other"),
        ];
        let snap = OccupancySnapshot::collect(&emp("D", "T"), &all);
        let w = LookaheadWeights::default();
        // 2 teammates' seats left, 3 department seats left
        assert_eq!(lookahead(&z("B1", "F1", "A"), &snap, &w), 2.0 * 130.0 + 3.0 * 90.0);
        assert_eq!(lookahead(&z("B9", "F1", "A"), &snap, &w), 0.0);
    }

    #[test]
    fn test_beam_width_limits_candidates() {
        // Zone B has lookahead capacity but sits outside a beam of one.
        let all = vec![
            Seat::new("S-B1-F1-A-001", z("B1", "F1", "A"), "D", "T"),
            Seat::new("S-B1-F1-B-001", z("B1", "F1", "B"), "D", "T"),
            Seat::new("S-B1-F1-B-002", z("B1", "F1", "B"), "D", "T"),
            Seat::new("S-B1-F1-B-003", z("B1", "F1", "B"), "D", "T"),
        ];
        let snap = OccupancySnapshot::collect(&emp("D", "T"), &all);
        let ranked = vec![
            ScoredSeat { seat: &all[0], score: 10.0 },
            ScoredSeat { seat: &all[1], score: 5.0 },
        ];
        let w = LookaheadWeights::default();

        let narrow = select(&ranked, &snap, 1, &w).unwrap();
        assert_eq!(narrow.winner.seat.seat_id, "S-B1-F1-A-001");
        assert_eq!(narrow.beam.len(), 1);

        let wide = select(&ranked, &snap, 2, &w).unwrap();
        assert_eq!(wide.winner.seat.seat_id, "S-B1-F1-B-001");
        assert!(!wide.safeguard_applied);
    }

    #[test]
    fn test_safeguard_prefers_department_anchor_zone() {
        let all = vec![
            Seat::new("S-B1-F1-A-001", z("B1", "F1", "A"), "D", "T1").occupied("E1"),
            Seat::new("S-B1-F1-A-002", z("B1", "F1", "A"), "D", "T2"),
            Seat::new("S-B1-F1-B-001", z("B1", "F1", "B"), "D", "T2"),
        ];
        let snap = OccupancySnapshot::collect(&emp("D", "T2"), &all);
        let ranked = vec![
            ScoredSeat { seat: &all[2], score: 100.0 },
            ScoredSeat { seat: &all[1], score: 50.0 },
        ];

        let sel = select(&ranked, &snap, 40, &LookaheadWeights::default()).unwrap();
        assert_eq!(sel.winner.seat.seat_id, "S-B1-F1-A-002");
        assert!(sel.safeguard_applied);
    }

    #[test]
    fn test_safeguard_idle_when_provisional_already_in_anchor() {
        let all = vec![
            Seat::new("S-B1-F1-A-001", z("B1", "F1", "A"), "D", "T1").occupied("E1"),
            Seat::new("S-B1-F1-A-002", z("B1", "F1", "A"), "D", "T2"),
            Seat::new("S-B1-F1-B-001", z("B1", "F1", "B"), "D", "T2"),
        ];
        let snap = OccupancySnapshot::collect(&emp("D", "T2"), &all);
        let ranked = vec![
            ScoredSeat { seat: &all[1], score: 100.0 },
            ScoredSeat { seat: &all[2], score: 50.0 },
        ];

        let sel = select(&ranked, &snap, 40, &LookaheadWeights::default()).unwrap();
        assert_eq!(sel.winner.seat.seat_id, "S-B1-F1-A-002");
        assert!(!sel.safeguard_applied);
    }
}
