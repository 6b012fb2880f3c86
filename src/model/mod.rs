//! Domain records shared by the engine and its collaborators.

mod org;
mod types;

pub use org::OrgChart;
pub use types::{
    AccessEvent, Assignment, DeviceCommand, Employee, FloorKey, PowerCommand, Seat, SeatStatus,
    ZoneKey,
};
