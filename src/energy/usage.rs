//! Device usage estimate per zone.

use std::collections::BTreeMap;

use crate::model::{Seat, ZoneKey};

const LIGHTS_PER_ZONE: usize = 10;
const SEATS_PER_LIGHT: usize = 10;
const ROUTERS_PER_ZONE: usize = 1;
const VENTS_PER_ZONE: usize = 3;
const SEATS_PER_VENT: usize = 20;

/// Devices running in one zone.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DeviceUsageRow {
    pub location: ZoneKey,
    pub occupied_seats: usize,
    pub lights_on: usize,
    pub routers_on: usize,
    pub monitors_on: usize,
    pub desktop_cpus_on: usize,
    pub ac_vents_on: usize,
}

impl DeviceUsageRow {
    pub fn for_occupancy(location: ZoneKey, occupied: usize) -> Self {
        Self {
            location,
            occupied_seats: occupied,
            lights_on: LIGHTS_PER_ZONE.min(occupied.div_ceil(SEATS_PER_LIGHT)),
            routers_on: if occupied > 0 { ROUTERS_PER_ZONE } else { 0 },
            monitors_on: occupied,
            desktop_cpus_on: occupied,
            ac_vents_on: VENTS_PER_ZONE.min(occupied.div_ceil(SEATS_PER_VENT)),
        }
    }

    /// Devices on in this zone.
    pub fn active_devices(&self) -> usize {
        self.lights_on + self.routers_on + self.monitors_on + self.desktop_cpus_on + self.ac_vents_on
    }
}

/// Column sums over a usage table.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeviceUsageTotals {
    pub occupied_seats: usize,
    pub lights_on: usize,
    pub routers_on: usize,
    pub monitors_on: usize,
    pub desktop_cpus_on: usize,
    pub ac_vents_on: usize,
}

impl DeviceUsageTotals {
    pub fn from_rows(rows: &[DeviceUsageRow]) -> Self {
        rows.iter().fold(Self::default(), |mut t, r| {
            t.occupied_seats += r.occupied_seats;
            t.lights_on += r.lights_on;
            t.routers_on += r.routers_on;
            t.monitors_on += r.monitors_on;
            t.desktop_cpus_on += r.desktop_cpus_on;
            t.ac_vents_on += r.ac_vents_on;
            t
        })
    }

    pub fn active_devices(&self) -> usize {
        self.lights_on + self.routers_on + self.monitors_on + self.desktop_cpus_on + self.ac_vents_on
    }
}

/// One row per zone present in `seats`, in zone order.
pub fn summarize_device_usage(seats: &[Seat]) -> Vec<DeviceUsageRow> {
    let mut occupied: BTreeMap<&ZoneKey, usize> = BTreeMap::new();
    for seat in seats {
        let count = occupied.entry(&seat.location).or_insert(0);
        if seat.is_occupied() {
            *count += 1;
        }
    }
    occupied
        .into_iter()
        .map(|(zone, n)| DeviceUsageRow::for_occupancy(zone.clone(), n))
        .collect()
}

/// Share of devices switched off, in percent.
///
/// The maximum is every light, router and vent in `zone_count` zones plus
/// a monitor and desktop per seat. Returns 0 when that maximum is 0.
pub fn power_saving_percent(rows: &[DeviceUsageRow], total_seats: usize, zone_count: usize) -> f64 {
    let active: usize = rows.iter().map(DeviceUsageRow::active_devices).sum();
    let max = zone_count * (LIGHTS_PER_ZONE + ROUTERS_PER_ZONE + VENTS_PER_ZONE) + 2 * total_seats;
    if max == 0 {
        return 0.0;
    }
    ((1.0 - active as f64 / max as f64) * 100.0).max(0.0)
}
