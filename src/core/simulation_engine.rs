use super::config::SimulationConfig;
use super::coordinator::{StationTally, VehicleLifecycle};
use super::errors::{Result, StationError};
use super::generator::VehicleGenerator;
use super::observer::{LoggingObserver, StationObserver};
use super::registry::StationRegistry;
use super::report::SimulationReport;
use log::{debug, info};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};
use uuid::Uuid;

/// Runs arrivals against a station and collects the report
///
/// Every vehicle gets its own scoped thread the moment it arrives, so pump
/// admission never waits behind other vehicles' service or register retries.
pub struct SimulationEngine {
    config: SimulationConfig,
    registry: StationRegistry,
    observer: Arc<dyn StationObserver>,
}

impl SimulationEngine {
    pub fn new(config: SimulationConfig, registry: StationRegistry) -> Result<Self> {
        config.validate().map_err(StationError::InvalidConfig)?;

        Ok(Self {
            config,
            registry,
            observer: Arc::new(LoggingObserver),
        })
    }

    /// Replace the default logging observer
    pub fn with_observer(mut self, observer: Arc<dyn StationObserver>) -> Self {
        self.observer = observer;
        self
    }

    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    pub fn registry(&self) -> &StationRegistry {
        &self.registry
    }

    /// Generate arrivals until the configured duration has passed, then wait
    /// for every vehicle already at the station to finish
    pub fn run(self) -> Result<SimulationReport> {
        let run_id = Uuid::new_v4().to_string();
        let clock = self.config.clock();
        let seed = self.config.random_seed;
        let tally = StationTally::new();
        let lifecycle = VehicleLifecycle::new(
            &self.registry,
            &tally,
            &*self.observer,
            clock,
            self.config.register_retry_backoff,
        );
        let mut generator = VehicleGenerator::new(seed);
        let mut generated = 0u64;

        info!(
            "[Station {}] Starting simulation: {} pumps, {} registers, {:.1}s",
            run_id,
            self.registry.pumps().len(),
            self.registry.registers().len(),
            self.config.duration.as_secs_f64()
        );

        let start = Instant::now();
        // Leaving the scope joins every vehicle thread, including the ones
        // still retrying registers
        thread::scope(|scope| -> Result<()> {
            while clock.simulated_since(start) < self.config.duration {
                if self.config.max_vehicles.map_or(false, |max| generated >= max) {
                    debug!("[Station {}] Vehicle limit reached", run_id);
                    break;
                }

                generated += 1;
                let vehicle = generator.next(generated);
                thread::Builder::new()
                    .name(format!("fuelsim-vehicle-{}", vehicle.id))
                    .spawn_scoped(scope, move || {
                        let mut rng = vehicle_rng(seed, vehicle.id);
                        lifecycle.run(vehicle, &mut rng);
                    })
                    .map_err(|e| StationError::Spawn(format!("vehicle {}: {}", vehicle.id, e)))?;

                let delay = generator.next_arrival_delay(&self.config.arrival_interval);
                clock.sleep(delay);
            }
            debug!(
                "[Station {}] Arrivals closed after {} vehicles, draining",
                run_id, generated
            );
            Ok(())
        })?;

        let report = SimulationReport::new(
            run_id,
            generated,
            tally.serviced(),
            tally.skipped(),
            self.registry.pumps().iter().map(|p| p.summary()).collect(),
            self.registry.registers().iter().map(|r| r.summary()).collect(),
        );

        info!(
            "[Station {}] Simulation finished: {} arrived, {} serviced, {} skipped",
            report.run_id,
            report.vehicles_generated,
            report.vehicles_serviced,
            report.skipped_vehicles
        );

        Ok(report)
    }
}

/// Per-vehicle RNG so service times do not depend on thread interleaving
fn vehicle_rng(seed: Option<u64>, vehicle_id: u64) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed.wrapping_add(vehicle_id)),
        None => StdRng::from_entropy(),
    }
}

/// Run `registry` with the default configuration for `duration`
pub fn run_simulation(duration: Duration, registry: StationRegistry) -> Result<SimulationReport> {
    let config = SimulationConfig::default().with_duration(duration);
    SimulationEngine::new(config, registry)?.run()
}
