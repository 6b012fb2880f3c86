//! The processing loop.

use chrono::{DateTime, Utc};

use super::config::RuntimeConfig;
use crate::allocator::{SeatAllocator, SeatSelector};
use crate::energy::{DeviceGateway, EnergyOptimizer, IoTDeviceClient};
use crate::model::{AccessEvent, Assignment};
use crate::notify::{EmailNotifier, MessageNotifier, Notifier};
use crate::sources::{
    AccessControlStream, ArrivalSource, EmployeeDirectory, InMemoryDirectory, InMemoryInventory,
    SeatInventory,
};

/// Batch ordering key; unknown employees sort after every known one.
type BatchKey = (bool, String, String, DateTime<Utc>, String);

/// Wires the arrival source, directory, inventory, decision engine,
/// notifiers and device gateway together.
///
/// The decision engine is any [`SeatSelector`], so the stateless
/// [`SeatAllocator`] and the sticky decorator plug in the same way.
///
/// # Examples
///
/// ```
/// use seat_alloc::allocator::SeatAllocator;
/// use seat_alloc::energy::IoTDeviceClient;
/// use seat_alloc::model::{Employee, Seat, ZoneKey};
/// use seat_alloc::orchestrator::ProcessOrchestrator;
/// use seat_alloc::sources::{AccessControlStream, InMemoryDirectory, InMemoryInventory};
///
/// let zone = ZoneKey::new("B1", "F1", "A");
/// let inventory = InMemoryInventory::new(vec![
///     Seat::new("S-B1-F1-A-001", zone.clone(), "Engineering", "Platform"),
/// ])
/// .unwrap();
/// let directory = InMemoryDirectory::new(vec![Employee::new(
///     "E1", "CARD-E1", "Ada", "ada@corp.com", "+1", "Engineering", "Platform",
/// )])
/// .unwrap();
///
/// let mut orchestrator = ProcessOrchestrator::new(
///     AccessControlStream::new(),
///     directory,
///     inventory,
///     SeatAllocator::default(),
///     IoTDeviceClient::new(),
/// );
/// orchestrator.source_mut().publish("E1", "CARD-E1");
///
/// let assigned = orchestrator.run_once();
/// assert_eq!(assigned.len(), 1);
/// assert_eq!(assigned[0].location, zone);
/// ```
pub struct ProcessOrchestrator<
    S = SeatAllocator,
    A = AccessControlStream,
    D = InMemoryDirectory,
    I = InMemoryInventory,
    G = IoTDeviceClient,
> {
    source: A,
    directory: D,
    inventory: I,
    selector: S,
    gateway: G,
    energy: EnergyOptimizer,
    notifiers: Vec<Box<dyn Notifier>>,
    config: RuntimeConfig,
    history: Vec<Assignment>,
}

impl<S, A, D, I, G> ProcessOrchestrator<S, A, D, I, G>
where
    S: SeatSelector,
    A: ArrivalSource,
    D: EmployeeDirectory,
    I: SeatInventory,
    G: DeviceGateway,
{
    /// Creates an orchestrator with the default runtime configuration and
    /// the email and SMS channels.
    ///
    /// Every zone present in the inventory is known to the energy
    /// optimizer, so idle zones are powered off explicitly.
    pub fn new(source: A, directory: D, inventory: I, selector: S, gateway: G) -> Self {
        let config = RuntimeConfig::default();
        let energy = Self::optimizer_for(&inventory, &config);
        Self {
            source,
            directory,
            inventory,
            selector,
            gateway,
            energy,
            notifiers: vec![
                Box::new(EmailNotifier::new()) as Box<dyn Notifier>,
                Box::new(MessageNotifier::new()),
            ],
            config,
            history: Vec::new(),
        }
    }

    fn optimizer_for(inventory: &I, config: &RuntimeConfig) -> EnergyOptimizer {
        EnergyOptimizer::new(config.idle_zone_threshold)
            .with_known_zones(inventory.all_seats().iter().map(|s| s.location.clone()))
    }

    pub fn with_config(mut self, config: RuntimeConfig) -> Self {
        self.energy = Self::optimizer_for(&self.inventory, &config);
        self.config = config;
        self
    }

    /// Replaces the notification channels.
    pub fn with_notifiers(mut self, notifiers: Vec<Box<dyn Notifier>>) -> Self {
        self.notifiers = notifiers;
        self
    }

    pub fn config(&self) -> &RuntimeConfig {
        &self.config
    }

    pub fn source_mut(&mut self) -> &mut A {
        &mut self.source
    }

    pub fn directory(&self) -> &D {
        &self.directory
    }

    pub fn inventory(&self) -> &I {
        &self.inventory
    }

    pub fn selector(&self) -> &S {
        &self.selector
    }

    pub fn gateway(&self) -> &G {
        &self.gateway
    }

    pub fn notifiers(&self) -> &[Box<dyn Notifier>] {
        &self.notifiers
    }

    /// Messages sent on `channel` so far.
    pub fn sent_messages(&self, channel: &str) -> &[String] {
        self.notifiers
            .iter()
            .find(|n| n.channel() == channel)
            .map(|n| n.sent_messages())
            .unwrap_or_default()
    }

    /// Every assignment made, in decision order.
    pub fn history(&self) -> &[Assignment] {
        &self.history
    }

    fn batch_key(&self, event: &AccessEvent) -> BatchKey {
        match self.directory.get(&event.employee_id) {
            Some(e) => (
                false,
                e.department.clone(),
                e.team.clone(),
                event.entered_at,
                event.employee_id.clone(),
            ),
            None => (
                true,
                String::new(),
                String::new(),
                event.entered_at,
                event.employee_id.clone(),
            ),
        }
    }

    /// Drains and processes every pending arrival.
    ///
    /// Returns the assignments made by this call.
    pub fn run_once(&mut self) -> Vec<Assignment> {
        let mut batch = self.source.drain();
        batch.sort_by_cached_key(|event| self.batch_key(event));

        let mut made = Vec::new();
        for event in batch {
            if let Some(assignment) = self.process(&event) {
                made.push(assignment);
            }
        }
        made
    }

    fn process(&mut self, event: &AccessEvent) -> Option<Assignment> {
        tracing::info!(
            employee_id = %event.employee_id,
            card_id = %event.card_id,
            "access event received"
        );

        let Some(employee) = self.directory.get(&event.employee_id).cloned() else {
            tracing::warn!(employee_id = %event.employee_id, "employee profile missing");
            return None;
        };

        let candidates = self.inventory.seats_for_department(&employee.department);
        let Some(assignment) =
            self.selector
                .select_seat(&employee, &candidates, self.inventory.all_seats())
        else {
            tracing::warn!(
                employee_id = %employee.employee_id,
                department = %employee.department,
                candidates = candidates.len(),
                "no seat available"
            );
            return None;
        };

        if let Err(err) = self.inventory.mark_occupied(
            &assignment.seat_id,
            &employee.employee_id,
            &employee.department,
            &employee.team,
        ) {
            tracing::error!(
                employee_id = %employee.employee_id,
                seat_id = %assignment.seat_id,
                error = %err,
                "failed to commit seat"
            );
            return None;
        }

        self.selector.commit(&employee, &assignment);

        for notifier in &mut self.notifiers {
            notifier.send_seat_assignment(&employee, &assignment);
        }

        tracing::info!(
            employee_id = %employee.employee_id,
            seat_id = %assignment.seat_id,
            department = %employee.department,
            team = %employee.team,
            "seat assigned"
        );

        if self.config.dispatch_energy {
            let commands = self.energy.optimize(&self.inventory.occupied_zone_counts());
            let dispatched = commands.len();
            for command in commands {
                self.gateway.send_command(command);
            }
            tracing::info!(commands = dispatched, "energy optimization dispatched");
        }

        self.history.push(assignment.clone());
        Some(assignment)
    }
}
