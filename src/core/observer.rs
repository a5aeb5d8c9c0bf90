use super::types::{ResourceId, Vehicle};
use log::{debug, info, trace};
use std::time::Duration;

/// Observer trait for per-vehicle station events
///
/// Callbacks run on the vehicle's own task, concurrently with other vehicles.
pub trait StationObserver: Send + Sync {
    /// Called when a vehicle arrives at the station
    fn on_arrival(&self, _vehicle: &Vehicle) {}

    /// Called when no pump of the vehicle's type had a free slot
    fn on_turned_away(&self, _vehicle: &Vehicle) {}

    /// Called after a slot is claimed, before the service wait begins
    fn on_service_start(
        &self,
        _vehicle: &Vehicle,
        _resource: ResourceId,
        _occupancy: usize,
        _duration: Duration,
    ) {
    }

    /// Called after the visit is recorded and the slot released
    fn on_service_end(&self, _vehicle: &Vehicle, _resource: ResourceId, _duration: Duration) {}

    /// Called each time a refueled vehicle finds every register full
    fn on_register_busy(&self, _vehicle: &Vehicle, _attempt: u32) {}

    /// Called when a vehicle has paid and leaves
    fn on_departure(&self, _vehicle: &Vehicle) {}
}

/// Observer that ignores every event
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopObserver;

impl StationObserver for NoopObserver {}

/// Default observer: reports station events through the `log` facade
#[derive(Debug, Default, Clone, Copy)]
pub struct LoggingObserver;

impl StationObserver for LoggingObserver {
    fn on_arrival(&self, vehicle: &Vehicle) {
        debug!("[Vehicle {}] Arrived", vehicle);
    }

    fn on_turned_away(&self, vehicle: &Vehicle) {
        info!(
            "[Vehicle {}] Left without refueling because all {} pumps are busy",
            vehicle, vehicle.fuel
        );
    }

    fn on_service_start(
        &self,
        vehicle: &Vehicle,
        resource: ResourceId,
        occupancy: usize,
        duration: Duration,
    ) {
        debug!(
            "[{}] Serving vehicle {} for {:.2}s (occupancy {})",
            resource,
            vehicle,
            duration.as_secs_f64(),
            occupancy
        );
    }

    fn on_service_end(&self, vehicle: &Vehicle, resource: ResourceId, duration: Duration) {
        debug!(
            "[{}] Vehicle {} done after {:.2}s",
            resource,
            vehicle,
            duration.as_secs_f64()
        );
    }

    fn on_register_busy(&self, vehicle: &Vehicle, attempt: u32) {
        trace!("[Vehicle {}] All registers busy (attempt {})", vehicle, attempt);
    }

    fn on_departure(&self, vehicle: &Vehicle) {
        debug!("[Vehicle {}] Paid and left", vehicle);
    }
}
