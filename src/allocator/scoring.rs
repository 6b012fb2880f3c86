//! Seat scoring by weighted rule composition.
//!
//! Each cohesion or utilization concern is a named [`ScoringRule`]; a
//! [`Scorer`] sums their weighted contributions. Scores are **higher is
//! better**.
//!
//! The standard rule set, in decreasing order of influence:
//!
//! 1. Team+department anchor zone
//! 2. Team cohesion (team-only anchor, same team+department occupants)
//! 3. Department cohesion (department anchor, same-department occupants)
//! 4. Utilization consolidation (zone, floor and building load)
//! 5. Locality penalties (off preferred floor / building)
//! 6. Seat-number locality within the team's cluster, and the final
//!    lower-seat-number tie-break

use std::cmp::Ordering;

use super::aggregate::OccupancySnapshot;
use super::config::ScoreWeights;
use crate::model::{Employee, FloorKey, Seat};

/// Read-only state shared by all rules during one decision.
#[derive(Debug, Clone, Copy)]
pub struct ScoringContext<'a> {
    pub employee: &'a Employee,
    pub snapshot: &'a OccupancySnapshot,
    pub preferred_floor: Option<&'a FloorKey>,
    pub weights: &'a ScoreWeights,
}

/// A scoring rule contributing one additive term to a seat's score.
///
/// # Examples
///
/// ```
/// use seat_alloc::allocator::{ScoringContext, ScoringRule};
/// use seat_alloc::model::Seat;
///
/// // Prefer zone "A" over every other zone letter.
/// struct PreferZoneA;
///
/// impl ScoringRule for PreferZoneA {
///     fn name(&self) -> &str { "PreferZoneA" }
///     fn score(&self, seat: &Seat, _ctx: &ScoringContext<'_>) -> f64 {
///         if seat.location.zone == "A" { 1.0 } else { 0.0 }
///     }
/// }
/// ```
pub trait ScoringRule: Send + Sync {
    /// Returns the name of this rule.
    fn name(&self) -> &str;

    /// Computes this rule's contribution for `seat`.
    fn score(&self, seat: &Seat, ctx: &ScoringContext<'_>) -> f64;
}

/// +`team_dept_anchor` inside the team+department anchor zone.
pub struct TeamDeptAnchor;

impl ScoringRule for TeamDeptAnchor {
    fn name(&self) -> &str {
        "TeamDeptAnchor"
    }

    fn score(&self, seat: &Seat, ctx: &ScoringContext<'_>) -> f64 {
        match &ctx.snapshot.anchors().team_dept {
            Some(anchor) if *anchor == seat.location => ctx.weights.team_dept_anchor,
            _ => 0.0,
        }
    }
}

/// Team-only anchor bonus plus a per-teammate bonus.
pub struct TeamCohesion;

impl ScoringRule for TeamCohesion {
    fn name(&self) -> &str {
        "TeamCohesion"
    }

    fn score(&self, seat: &Seat, ctx: &ScoringContext<'_>) -> f64 {
        let zone = &seat.location;
        let mut score = ctx.snapshot.team_zone_count(zone) as f64 * ctx.weights.team_per_seat;
        if ctx.snapshot.anchors().team_only.as_ref() == Some(zone) {
            score += ctx.weights.team_anchor;
        }
        score
    }
}

/// Department anchor bonus plus a per-colleague bonus.
pub struct DeptCohesion;

impl ScoringRule for DeptCohesion {
    fn name(&self) -> &str {
        "DeptCohesion"
    }

    fn score(&self, seat: &Seat, ctx: &ScoringContext<'_>) -> f64 {
        let zone = &seat.location;
        let mut score = ctx.snapshot.dept_zone_count(zone) as f64 * ctx.weights.dept_per_seat;
        if ctx.snapshot.anchors().dept.as_ref() == Some(zone) {
            score += ctx.weights.dept_anchor;
        }
        score
    }
}

/// Rewards filling already-busy zones, floors and buildings.
pub struct Utilization;

impl ScoringRule for Utilization {
    fn name(&self) -> &str {
        "Utilization"
    }

    fn score(&self, seat: &Seat, ctx: &ScoringContext<'_>) -> f64 {
        let zone = &seat.location;
        let w = ctx.weights;
        ctx.snapshot.zone_load(zone) as f64 * w.zone_load
            + ctx.snapshot.floor_load(&zone.floor_key()) as f64 * w.floor_load
            + ctx.snapshot.building_load(&zone.building) as f64 * w.building_load
    }
}

/// Penalizes leaving the preferred floor, and more so the building.
pub struct Locality;

impl ScoringRule for Locality {
    fn name(&self) -> &str {
        "Locality"
    }

    fn score(&self, seat: &Seat, ctx: &ScoringContext<'_>) -> f64 {
        let Some(preferred) = ctx.preferred_floor else {
            return 0.0;
        };
        let mut score = 0.0;
        if !seat.location.is_on(preferred) {
            score -= ctx.weights.off_floor_penalty;
        }
        if seat.location.building != preferred.building {
            score -= ctx.weights.off_building_penalty;
        }
        score
    }
}

/// Pulls new seats toward the team's existing cluster inside the zone.
pub struct SeatCluster;

impl ScoringRule for SeatCluster {
    fn name(&self) -> &str {
        "SeatCluster"
    }

    fn score(&self, seat: &Seat, ctx: &ScoringContext<'_>) -> f64 {
        match ctx.snapshot.team_cluster_center(&seat.location) {
            Some(center) => -ctx.weights.cluster_distance * (seat.seat_number() as f64 - center).abs(),
            None => 0.0,
        }
    }
}

/// Negligible penalty per seat number; lower-numbered seats win ties.
pub struct SeatNumberTieBreak;

impl ScoringRule for SeatNumberTieBreak {
    fn name(&self) -> &str {
        "SeatNumberTieBreak"
    }

    fn score(&self, seat: &Seat, ctx: &ScoringContext<'_>) -> f64 {
        -(seat.seat_number() as f64) * ctx.weights.seat_number_tiebreak
    }
}

/// A rule paired with its multiplier.
struct WeightedRule {
    rule: Box<dyn ScoringRule>,
    weight: f64,
}

/// A seat with its score.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoredSeat<'a> {
    pub seat: &'a Seat,
    pub score: f64,
}

/// Sums weighted rule contributions and ranks seats.
///
/// # Examples
///
/// ```
/// use seat_alloc::allocator::Scorer;
///
/// let scorer = Scorer::standard();
/// assert_eq!(
///     scorer.rule_names(),
///     vec![
///         "TeamDeptAnchor",
///         "TeamCohesion",
///         "DeptCohesion",
///         "Utilization",
///         "Locality",
///         "SeatCluster",
///         "SeatNumberTieBreak",
///     ]
/// );
/// ```
pub struct Scorer {
    rules: Vec<WeightedRule>,
}

impl Scorer {
    /// Creates a scorer with no rules; every seat scores 0.
    pub fn new() -> Self {
        Self { rules: Vec::new() }
    }

    /// The standard seat-allocation rule set, each with multiplier 1.0.
    pub fn standard() -> Self {
        Self::new()
            .with_rule(TeamDeptAnchor)
            .with_rule(TeamCohesion)
            .with_rule(DeptCohesion)
            .with_rule(Utilization)
            .with_rule(Locality)
            .with_rule(SeatCluster)
            .with_rule(SeatNumberTieBreak)
    }

    /// Adds a rule with multiplier 1.0.
    pub fn with_rule<R: ScoringRule + 'static>(self, rule: R) -> Self {
        self.with_weighted_rule(rule, 1.0)
    }

    /// Adds a rule with a custom multiplier.
    pub fn with_weighted_rule<R: ScoringRule + 'static>(mut self, rule: R, weight: f64) -> Self {
        self.rules.push(WeightedRule {
            rule: Box::new(rule),
            weight,
        });
        self
    }

    pub fn rule_count(&self) -> usize {
        self.rules.len()
    }

    /// Returns the names of all rules in order.
    pub fn rule_names(&self) -> Vec<&str> {
        self.rules.iter().map(|wr| wr.rule.name()).collect()
    }

    /// Total weighted score of one seat.
    pub fn score(&self, seat: &Seat, ctx: &ScoringContext<'_>) -> f64 {
        self.rules
            .iter()
            .map(|wr| wr.rule.score(seat, ctx) * wr.weight)
            .sum()
    }

    /// Per-rule weighted contributions, in rule order.
    pub fn breakdown(&self, seat: &Seat, ctx: &ScoringContext<'_>) -> Vec<(&str, f64)> {
        self.rules
            .iter()
            .map(|wr| (wr.rule.name(), wr.rule.score(seat, ctx) * wr.weight))
            .collect()
    }

    /// Scores `seats` and sorts them best first.
    ///
    /// Equal scores are ordered by seat id, so the result never depends
    /// on the order of `seats`.
    pub fn rank<'a>(&self, seats: &[&'a Seat], ctx: &ScoringContext<'_>) -> Vec<ScoredSeat<'a>> {
        let mut scored: Vec<ScoredSeat<'a>> = seats
            .iter()
            .map(|&seat| ScoredSeat {
                seat,
                score: self.score(seat, ctx),
            })
            .collect();
        scored.sort_by(compare_best_first);
        scored
    }
}

impl Default for Scorer {
    fn default() -> Self {
        Self::standard()
    }
}

/// Descending score, then ascending seat id.
pub(crate) fn compare_best_first(a: &ScoredSeat<'_>, b: &ScoredSeat<'_>) -> Ordering {
    b.score
        .total_cmp(&a.score)
        .then_with(|| a.seat.seat_id.cmp(&b.seat.seat_id))
}
