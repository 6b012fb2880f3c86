use clap::Parser;
use seat_alloc::allocator::{AllocatorConfig, SeatAllocator, SeatSelector, StickyAllocator};
use seat_alloc::energy::{power_saving_percent, summarize_device_usage, DeviceUsageTotals};
use seat_alloc::orchestrator::RuntimeConfig;
use seat_alloc::simulation;
use seat_alloc::sources::SeatInventory;
use tracing_subscriber::{fmt, EnvFilter};

/// `seat_sim` - Runs a batch of random badge-ins through the allocator.
///
/// Builds the synthetic 800-seat campus, publishes `events` arrivals for
/// randomly chosen employees, processes them in one batch and reports
/// zone occupancy and estimated power saving.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Config {
    /// Number of arrival events to publish.
    #[arg(long, env = "SEAT_SIM_EVENTS", default_value_t = 120)]
    events: usize,

    /// Seed for the event generator.
    #[arg(long, env = "SEAT_SIM_SEED", default_value_t = 42)]
    seed: u64,

    /// Employees in the simulated directory.
    #[arg(long, env = "SEAT_SIM_EMPLOYEES", default_value_t = simulation::DEFAULT_EMPLOYEES)]
    employees: usize,

    /// Candidates carried into the lookahead re-rank.
    #[arg(long, env = "SEAT_SIM_BEAM_WIDTH", default_value_t = 40)]
    beam_width: usize,

    /// Zones at or below this occupancy are powered off.
    #[arg(long, env = "SEAT_SIM_IDLE_ZONE_THRESHOLD", default_value_t = 0)]
    idle_zone_threshold: usize,

    /// Remember each team's last zone and try it first.
    #[arg(long, env = "SEAT_SIM_STICKY")]
    sticky: bool,

    /// Emit logs as JSON lines.
    #[arg(long, env = "SEAT_SIM_JSON")]
    json: bool,
}

fn main() -> anyhow::Result<()> {
    let config = Config::parse();
    let subscriber = fmt().with_env_filter(
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
    );
    if config.json {
        subscriber.json().init();
    } else {
        subscriber.init();
    }
    tracing::info!(config = ?config, "seat simulation starting");

    let allocator =
        SeatAllocator::try_new(AllocatorConfig::default().with_beam_width(config.beam_width))?;
    if config.sticky {
        run(&config, StickyAllocator::new(allocator))
    } else {
        run(&config, allocator)
    }
}

fn run<S: SeatSelector>(config: &Config, selector: S) -> anyhow::Result<()> {
    let mut orchestrator = simulation::bootstrap(config.employees, selector)?.with_config(
        RuntimeConfig::default().with_idle_zone_threshold(config.idle_zone_threshold),
    );

    let employees = simulation::build_employee_directory(config.employees);
    let mut rng = simulation::seeded_rng(config.seed);
    for _ in 0..config.events {
        if let Some(event) = simulation::random_employee_event(&employees, &mut rng) {
            orchestrator.source_mut().push(event);
        }
    }

    let assigned = orchestrator.run_once();
    tracing::info!(
        events = config.events,
        assigned = assigned.len(),
        "batch processed"
    );

    let seats = orchestrator.inventory().all_seats();
    let rows = summarize_device_usage(seats);
    for row in &rows {
        tracing::info!(
            zone = %row.location,
            occupied = row.occupied_seats,
            lights = row.lights_on,
            routers = row.routers_on,
            monitors = row.monitors_on,
            desktops = row.desktop_cpus_on,
            ac_vents = row.ac_vents_on,
            "zone usage"
        );
    }

    let totals = DeviceUsageTotals::from_rows(&rows);
    let saving = power_saving_percent(&rows, seats.len(), rows.len());
    tracing::info!(
        occupied = totals.occupied_seats,
        active_devices = totals.active_devices(),
        power_saving_percent = saving,
        "device totals"
    );
    Ok(())
}
