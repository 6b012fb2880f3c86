//! Allocator configuration.
//!
//! [`AllocatorConfig`] holds the beam width, the zone department cap and
//! the scoring/lookahead weights. Defaults are the tuned design
//! constants; changing them changes which seat wins.

/// Weights of the additive seat score.
///
/// Every term is a bonus except `off_floor_penalty`,
/// `off_building_penalty`, `cluster_distance` and `seat_number_tiebreak`,
/// which are subtracted.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoreWeights {
    /// Bonus for sitting in the team+department anchor zone.
    pub team_dept_anchor: f64,
    /// Bonus for sitting in the team-only anchor zone.
    pub team_anchor: f64,
    /// Per occupied same team+department seat in the zone.
    pub team_per_seat: f64,
    /// Bonus for sitting in the department anchor zone.
    pub dept_anchor: f64,
    /// Per occupied same-department seat in the zone.
    pub dept_per_seat: f64,
    /// Per occupied seat in the zone.
    pub zone_load: f64,
    /// Per occupied seat on the floor.
    pub floor_load: f64,
    /// Per occupied seat in the building.
    pub building_load: f64,
    /// Subtracted when the zone is off the preferred floor.
    pub off_floor_penalty: f64,
    /// Subtracted when the zone is outside the preferred building.
    pub off_building_penalty: f64,
    /// Per seat-number of distance from the team's cluster centre.
    pub cluster_distance: f64,
    /// Per seat-number; prefers lower-numbered seats among equals.
    pub seat_number_tiebreak: f64,
}

impl Default for ScoreWeights {
    fn default() -> Self {
        Self {
            team_dept_anchor: 20_000.0,
            team_anchor: 9_000.0,
            team_per_seat: 1_100.0,
            dept_anchor: 8_000.0,
            dept_per_seat: 700.0,
            zone_load: 18.0,
            floor_load: 5.0,
            building_load: 2.0,
            off_floor_penalty: 500.0,
            off_building_penalty: 300.0,
            cluster_distance: 0.35,
            seat_number_tiebreak: 0.001,
        }
    }
}

/// Weights of the one-step lookahead term applied inside the beam.
#[derive(Debug, Clone, PartialEq)]
pub struct LookaheadWeights {
    /// Per remaining available same team+department seat in the zone.
    pub same_team: f64,
    /// Per remaining available same-department seat in the zone.
    pub same_department: f64,
}

impl Default for LookaheadWeights {
    fn default() -> Self {
        Self {
            same_team: 130.0,
            same_department: 90.0,
        }
    }
}

/// Configuration for [`SeatAllocator`](super::SeatAllocator).
///
/// # Examples
///
/// ```
/// use seat_alloc::allocator::AllocatorConfig;
///
/// let config = AllocatorConfig::default()
///     .with_beam_width(10)
///     .with_zone_department_cap(3);
/// assert_eq!(config.beam_width, 10);
/// assert_eq!(config.zone_department_cap, 3);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct AllocatorConfig {
    /// Number of top-scored candidates re-ranked with lookahead.
    pub beam_width: usize,

    /// Maximum distinct departments allowed to share one zone,
    /// counting the requesting employee's department.
    pub zone_department_cap: usize,

    pub weights: ScoreWeights,

    pub lookahead: LookaheadWeights,
}

impl Default for AllocatorConfig {
    fn default() -> Self {
        Self {
            beam_width: 40,
            zone_department_cap: 2,
            weights: ScoreWeights::default(),
            lookahead: LookaheadWeights::default(),
        }
    }
}

impl AllocatorConfig {
    /// Sets the beam width.
    pub fn with_beam_width(mut self, width: usize) -> Self {
        self.beam_width = width;
        self
    }

    /// Sets the per-zone department cap.
    pub fn with_zone_department_cap(mut self, cap: usize) -> Self {
        self.zone_department_cap = cap;
        self
    }

    /// Replaces the score weights.
    pub fn with_weights(mut self, weights: ScoreWeights) -> Self {
        self.weights = weights;
        self
    }

    /// Replaces the lookahead weights.
    pub fn with_lookahead(mut self, lookahead: LookaheadWeights) -> Self {
        self.lookahead = lookahead;
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), String> {
        if self.beam_width == 0 {
            return Err("beam_width must be at least 1".into());
        }
        if self.zone_department_cap == 0 {
            return Err("zone_department_cap must be at least 1".into());
        }
        let w = &self.weights;
        let all = [
            w.team_dept_anchor,
            w.team_anchor,
            w.team_per_seat,
            w.dept_anchor,
            w.dept_per_seat,
            w.zone_load,
            w.floor_load,
            w.building_load,
            w.off_floor_penalty,
            w.off_building_penalty,
            w.cluster_distance,
            w.seat_number_tiebreak,
            self.lookahead.same_team,
            self.lookahead.same_department,
        ];
        if all.iter().any(|v| !v.is_finite()) {
            return Err("weights must be finite".into());
        }
        Ok(())
    }
}
