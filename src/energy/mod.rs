//! Zone power management downstream of seat decisions.
//!
//! - [`EnergyOptimizer`] turns occupied-seat counts into per-zone power
//!   commands.
//! - [`DeviceGateway`] sends them; [`IoTDeviceClient`] records them.
//! - [`summarize_device_usage`] and [`power_saving_percent`] estimate the
//!   devices running for the current occupancy.

mod iot;
mod optimizer;
mod usage;

pub use iot::{DeviceGateway, IoTDeviceClient};
pub use optimizer::EnergyOptimizer;
pub use usage::{power_saving_percent, summarize_device_usage, DeviceUsageRow, DeviceUsageTotals};
