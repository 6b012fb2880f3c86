//! Core records: employees, seats, locations and decision records.

use std::fmt;

use chrono::{DateTime, Utc};

/// Occupancy state of a seat.
///
/// Transitions are one-way: `Available` → `Occupied`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SeatStatus {
    #[default]
    Available,
    Occupied,
}

/// A `(building, floor)` prefix of a [`ZoneKey`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FloorKey {
    pub building: String,
    pub floor: String,
}

impl FloorKey {
    pub fn new(building: impl Into<String>, floor: impl Into<String>) -> Self {
        Self {
            building: building.into(),
            floor: floor.into(),
        }
    }
}

impl fmt::Display for FloorKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.building, self.floor)
    }
}

/// The `(building, floor, zone)` triple.
///
/// The unit of department-mixing caps and cohesion scoring. Every
/// occupancy aggregate is keyed by it, or by its floor and building
/// prefixes.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ZoneKey {
    pub building: String,
    pub floor: String,
    pub zone: String,
}

impl ZoneKey {
    pub fn new(
        building: impl Into<String>,
        floor: impl Into<String>,
        zone: impl Into<String>,
    ) -> Self {
        Self {
            building: building.into(),
            floor: floor.into(),
            zone: zone.into(),
        }
    }

    /// Returns the `(building, floor)` prefix.
    pub fn floor_key(&self) -> FloorKey {
        FloorKey::new(self.building.clone(), self.floor.clone())
    }

    /// Returns true when this zone lies on the given floor.
    pub fn is_on(&self, floor: &FloorKey) -> bool {
        self.building == floor.building && self.floor == floor.floor
    }
}

impl fmt::Display for ZoneKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}/{}", self.building, self.floor, self.zone)
    }
}

/// A person requesting a seat.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Employee {
    pub employee_id: String,
    pub card_id: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub department: String,
    /// Refinement of `department`; a team belongs to exactly one department.
    pub team: String,
}

impl Employee {
    pub fn new(
        employee_id: impl Into<String>,
        card_id: impl Into<String>,
        name: impl Into<String>,
        email: impl Into<String>,
        phone: impl Into<String>,
        department: impl Into<String>,
        team: impl Into<String>,
    ) -> Self {
        Self {
            employee_id: employee_id.into(),
            card_id: card_id.into(),
            name: name.into(),
            email: email.into(),
            phone: phone.into(),
            department: department.into(),
            team: team.into(),
        }
    }
}

/// A physical seat.
///
/// `department`/`team` are the template tags describing intended use.
/// Once occupied, `occupied_department`/`occupied_team` hold the actual
/// occupant's affiliation and take precedence over the template in
/// every aggregate.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Seat {
    pub seat_id: String,
    pub location: ZoneKey,
    pub department: String,
    pub team: String,
    pub status: SeatStatus,
    pub occupied_by: Option<String>,
    pub occupied_department: Option<String>,
    pub occupied_team: Option<String>,
}

impl Seat {
    /// Creates an available seat.
    pub fn new(
        seat_id: impl Into<String>,
        location: ZoneKey,
        department: impl Into<String>,
        team: impl Into<String>,
    ) -> Self {
        Self {
            seat_id: seat_id.into(),
            location,
            department: department.into(),
            team: team.into(),
            status: SeatStatus::Available,
            occupied_by: None,
            occupied_department: None,
            occupied_team: None,
        }
    }

    /// Marks the seat occupied by `employee_id` without recording an
    /// actual affiliation; aggregates then fall back to the template tags.
    pub fn occupied(mut self, employee_id: impl Into<String>) -> Self {
        self.status = SeatStatus::Occupied;
        self.occupied_by = Some(employee_id.into());
        self
    }

    /// Marks the seat occupied with the occupant's actual affiliation.
    pub fn occupied_as(
        mut self,
        employee_id: impl Into<String>,
        department: impl Into<String>,
        team: impl Into<String>,
    ) -> Self {
        self.status = SeatStatus::Occupied;
        self.occupied_by = Some(employee_id.into());
        self.occupied_department = Some(department.into());
        self.occupied_team = Some(team.into());
        self
    }

    pub fn is_available(&self) -> bool {
        self.status == SeatStatus::Available
    }

    pub fn is_occupied(&self) -> bool {
        self.status == SeatStatus::Occupied
    }

    /// Actual department if set, else the template department.
    pub fn effective_department(&self) -> &str {
        self.occupied_department
            .as_deref()
            .unwrap_or(&self.department)
    }

    /// Actual team if set, else the template team.
    pub fn effective_team(&self) -> &str {
        self.occupied_team.as_deref().unwrap_or(&self.team)
    }

    /// Numeric suffix of the seat id (`S-B1-F1-A-042` → 42).
    ///
    /// Ids whose last `-` segment is not all digits yield 0. An all-digit
    /// suffix too large for `u64` saturates to `u64::MAX`.
    pub fn seat_number(&self) -> u64 {
        let suffix = self.seat_id.rsplit('-').next().unwrap_or("");
        if !suffix.is_empty() && suffix.bytes().all(|b| b.is_ascii_digit()) {
            suffix.parse().unwrap_or(u64::MAX)
        } else {
            0
        }
    }
}

/// A badge swipe at a building entrance.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AccessEvent {
    pub employee_id: String,
    pub card_id: String,
    pub entered_at: DateTime<Utc>,
}

impl AccessEvent {
    pub fn new(
        employee_id: impl Into<String>,
        card_id: impl Into<String>,
        entered_at: DateTime<Utc>,
    ) -> Self {
        Self {
            employee_id: employee_id.into(),
            card_id: card_id.into(),
            entered_at,
        }
    }
}

/// Immutable decision record produced once per successful selection.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Assignment {
    pub employee_id: String,
    pub seat_id: String,
    pub location: ZoneKey,
    /// Audit trace: anchors, lock/relaxation flags, narrowing applied.
    pub reasoning: String,
    pub assigned_at: DateTime<Utc>,
}

/// Zone power state requested from building devices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PowerCommand {
    PowerOn,
    PowerOff,
}

impl fmt::Display for PowerCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PowerCommand::PowerOn => f.write_str("POWER_ON"),
            PowerCommand::PowerOff => f.write_str("POWER_OFF"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DeviceCommand {
    pub location: ZoneKey,
    pub command: PowerCommand,
    pub reason: String,
}
