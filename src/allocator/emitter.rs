//! Packages the winning seat into a decision record.

use chrono::{DateTime, Utc};

use super::aggregate::Anchors;
use super::filter::FilterOutcome;
use super::selector::Selection;
use crate::model::{Assignment, Employee, ZoneKey};

/// Prefix of every rationale string.
pub const RATIONALE_PREFIX: &str =
    "Beam search scoring: team_together > dept_zone_together > utilization";

fn zone_or_none(zone: Option<&ZoneKey>) -> String {
    zone.map_or_else(|| "none".to_string(), ZoneKey::to_string)
}

fn yes_no(flag: bool) -> &'static str {
    if flag {
        "yes"
    } else {
        "no"
    }
}

/// Audit trace naming the winner, the anchors and every rule that fired.
///
/// Contains no timestamp, so identical inputs produce identical text.
pub fn rationale(selection: &Selection<'_>, filter: &FilterOutcome<'_>, anchors: &Anchors) -> String {
    let winner = &selection.winner;
    let preferred_floor = filter
        .preferred_floor
        .as_ref()
        .map_or_else(|| "none".to_string(), |f| f.to_string());

    format!(
        "{RATIONALE_PREFIX}; selected={}; team_dept_anchor={}; team_anchor={}; dept_anchor={}; \
         dept_locked={}; lock_relaxed={}; preferred_floor={}; floor_preferred={}; \
         building_preferred={}; anchor_safeguard={}; beam={}; score={:.3}; lookahead={:.1}",
        winner.seat.seat_id,
        zone_or_none(anchors.team_dept.as_ref()),
        zone_or_none(anchors.team_only.as_ref()),
        zone_or_none(anchors.dept.as_ref()),
        yes_no(filter.dept_locked),
        yes_no(filter.lock_relaxed),
        preferred_floor,
        yes_no(filter.floor_preferred),
        yes_no(filter.building_preferred),
        yes_no(selection.safeguard_applied),
        selection.beam.len(),
        winner.score,
        winner.lookahead,
    )
}

/// Builds the immutable decision record.
pub fn emit(
    employee: &Employee,
    selection: &Selection<'_>,
    filter: &FilterOutcome<'_>,
    anchors: &Anchors,
    assigned_at: DateTime<Utc>,
) -> Assignment {
    let seat = selection.winner.seat;
    Assignment {
        employee_id: employee.employee_id.clone(),
        seat_id: seat.seat_id.clone(),
        location: seat.location.clone(),
        reasoning: rationale(selection, filter, anchors),
        assigned_at,
    }
}
