//! Occupancy → power command derivation.

use std::collections::{BTreeMap, BTreeSet};

use crate::model::{DeviceCommand, PowerCommand, ZoneKey};

const ACTIVE_REASON: &str = "Active occupancy detected";
const IDLE_REASON: &str = "No occupancy detected";

/// Powers zones on above an occupancy threshold and off otherwise.
///
/// # Examples
///
/// ```
/// use std::collections::BTreeMap;
/// use seat_alloc::energy::EnergyOptimizer;
/// use seat_alloc::model::{PowerCommand, ZoneKey};
///
/// let a = ZoneKey::new("B1", "F1", "A");
/// let b = ZoneKey::new("B1", "F1", "B");
/// let optimizer = EnergyOptimizer::new(0).with_known_zones([a.clone(), b.clone()]);
///
/// let counts = BTreeMap::from([(a, 3)]);
/// let commands = optimizer.optimize(&counts);
/// assert_eq!(commands[0].command, PowerCommand::PowerOn);
/// assert_eq!(commands[1].command, PowerCommand::PowerOff);
/// ```
#[derive(Debug, Clone, Default)]
pub struct EnergyOptimizer {
    idle_zone_threshold: usize,
    known_zones: BTreeSet<ZoneKey>,
}

impl EnergyOptimizer {
    pub fn new(idle_zone_threshold: usize) -> Self {
        Self {
            idle_zone_threshold,
            known_zones: BTreeSet::new(),
        }
    }

    /// Zones that receive a command even when absent from the counts.
    pub fn with_known_zones(mut self, zones: impl IntoIterator<Item = ZoneKey>) -> Self {
        self.known_zones.extend(zones);
        self
    }

    pub fn idle_zone_threshold(&self) -> usize {
        self.idle_zone_threshold
    }

    /// One command per zone in known ∪ counted zones, in zone order.
    pub fn optimize(&self, occupied: &BTreeMap<ZoneKey, usize>) -> Vec<DeviceCommand> {
        let zones: BTreeSet<&ZoneKey> = self.known_zones.iter().chain(occupied.keys()).collect();

        zones
            .into_iter()
            .map(|zone| {
                let count = occupied.get(zone).copied().unwrap_or(0);
                let (command, reason) = if count > self.idle_zone_threshold {
                    (PowerCommand::PowerOn, ACTIVE_REASON)
                } else {
                    (PowerCommand::PowerOff, IDLE_REASON)
                };
                DeviceCommand {
                    location: zone.clone(),
                    command,
                    reason: reason.to_string(),
                }
            })
            .collect()
    }
}
