use super::clock::SimClock;
use super::observer::StationObserver;
use super::resource::SlotPermit;
use super::types::Vehicle;
use rand::Rng;
use std::time::Duration;

/// Holds a vehicle on a claimed slot for its service time
///
/// The only code that records visits on a resource.
#[derive(Clone, Copy)]
pub struct ServiceExecutor<'a> {
    clock: SimClock,
    observer: &'a dyn StationObserver,
}

impl<'a> ServiceExecutor<'a> {
    pub fn new(clock: SimClock, observer: &'a dyn StationObserver) -> Self {
        Self { clock, observer }
    }

    /// Serve `vehicle` on the permit's resource, then record and release.
    /// Returns the simulated service duration.
    pub fn occupy<R: Rng + ?Sized>(
        &self,
        permit: SlotPermit<'_>,
        vehicle: &Vehicle,
        rng: &mut R,
    ) -> Duration {
        let resource = permit.resource();
        let duration = resource.service_time().sample(rng);

        self.observer
            .on_service_start(vehicle, resource.id(), permit.occupancy_at_acquire(), duration);
        self.clock.sleep(duration);
        permit.complete(duration);
        self.observer.on_service_end(vehicle, resource.id(), duration);

        duration
    }
}
