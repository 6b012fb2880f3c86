//! Synthetic campus for demos, property tests and benchmarks.
//!
//! # Topology
//!
//! 2 buildings × 2 floors × 2 zones × 100 seats. Zone index `k` (building,
//! floor, zone order) is templated for `Department-0{k+1}`; seats cycle
//! through that department's teams by seat number.
//!
//! # Organization
//!
//! 8 departments and 20 teams; team `i` belongs to department
//! `((i - 1) % 8) + 1`. Employee `i` joins team `((i - 1) % 20) + 1`.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::allocator::SeatSelector;
use crate::energy::IoTDeviceClient;
use crate::error::AllocError;
use crate::model::{AccessEvent, Employee, OrgChart, Seat, ZoneKey};
use crate::orchestrator::ProcessOrchestrator;
use crate::sources::{AccessControlStream, InMemoryDirectory, InMemoryInventory};

pub const BUILDINGS: usize = 2;
pub const FLOORS_PER_BUILDING: usize = 2;
pub const ZONES: [&str; 2] = ["A", "B"];
pub const SEATS_PER_ZONE: usize = 100;
pub const DEPARTMENT_COUNT: usize = 8;
pub const TEAM_COUNT: usize = 20;
pub const DEFAULT_EMPLOYEES: usize = 300;

// ============================================================================
// Organization
// ============================================================================

pub fn department_name(index: usize) -> String {
    format!("Department-{index:02}")
}

pub fn team_name(index: usize) -> String {
    format!("Team-{index:02}")
}

/// 1-based department index of 1-based team `team`.
pub fn department_of_team(team: usize) -> usize {
    (team - 1) % DEPARTMENT_COUNT + 1
}

/// 1-based team indices belonging to `department`, ascending.
pub fn teams_of_department(department: usize) -> Vec<usize> {
    (1..=TEAM_COUNT)
        .filter(|&t| department_of_team(t) == department)
        .collect()
}

/// The team → department hierarchy of the simulated company.
pub fn org_chart() -> Result<OrgChart, AllocError> {
    OrgChart::from_pairs(
        (1..=TEAM_COUNT).map(|t| (team_name(t), department_name(department_of_team(t)))),
    )
}

// ============================================================================
// Seats and employees
// ============================================================================

/// Every zone in building, floor, zone order.
pub fn zones() -> Vec<ZoneKey> {
    let mut zones = Vec::with_capacity(BUILDINGS * FLOORS_PER_BUILDING * ZONES.len());
    for b in 1..=BUILDINGS {
        for f in 1..=FLOORS_PER_BUILDING {
            for zone in ZONES {
                zones.push(ZoneKey::new(format!("B{b}"), format!("F{f}"), zone));
            }
        }
    }
    zones
}

/// All seats, available, in building, floor, zone, seat-number order.
pub fn build_seat_topology() -> Vec<Seat> {
    let mut seats = Vec::with_capacity(zones().len() * SEATS_PER_ZONE);
    for (k, zone) in zones().into_iter().enumerate() {
        let department = (k % DEPARTMENT_COUNT) + 1;
        let teams = teams_of_department(department);
        for number in 1..=SEATS_PER_ZONE {
            let team = teams[(number - 1) % teams.len()];
            seats.push(Seat::new(
                format!(
                    "S-{}-{}-{}-{number:03}",
                    zone.building, zone.floor, zone.zone
                ),
                zone.clone(),
                department_name(department),
                team_name(team),
            ));
        }
    }
    seats
}

/// `total` employees `E0001..`, spread round-robin over the teams.
pub fn build_employee_directory(total: usize) -> Vec<Employee> {
    (1..=total)
        .map(|i| {
            let team = (i - 1) % TEAM_COUNT + 1;
            let id = format!("E{i:04}");
            Employee::new(
                id.clone(),
                format!("CARD-{id}"),
                format!("Employee {i}"),
                format!("employee{i}@corp.com"),
                format!("+1202555{i:04}"),
                department_name(department_of_team(team)),
                team_name(team),
            )
        })
        .collect()
}

// ============================================================================
// Events
// ============================================================================

/// Deterministic RNG for reproducible runs.
pub fn seeded_rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

/// Badge-in of a uniformly chosen employee, stamped now.
///
/// Returns `None` when `employees` is empty.
pub fn random_employee_event<R: Rng + ?Sized>(
    employees: &[Employee],
    rng: &mut R,
) -> Option<AccessEvent> {
    if employees.is_empty() {
        return None;
    }
    let employee = &employees[rng.random_range(0..employees.len())];
    Some(AccessEvent::new(
        employee.employee_id.clone(),
        employee.card_id.clone(),
        chrono::Utc::now(),
    ))
}

/// Wires the simulated campus into an orchestrator driven by `selector`.
pub fn bootstrap<S: SeatSelector>(
    employees: usize,
    selector: S,
) -> Result<ProcessOrchestrator<S>, AllocError> {
    let directory = InMemoryDirectory::new(build_employee_directory(employees))?;
    let inventory = InMemoryInventory::new(build_seat_topology())?;
    Ok(ProcessOrchestrator::new(
        AccessControlStream::new(),
        directory,
        inventory,
        selector,
        IoTDeviceClient::new(),
    ))
}
