mod selector_tests;

use crate::core::clock::TimeRange;
use crate::core::observer::StationObserver;
use crate::core::registry::{PumpGroup, RegisterGroup, StationRegistry, StationTopology};
use crate::core::types::{ResourceId, Vehicle, VehicleType};
use parking_lot::Mutex;
use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Observed {
    Arrival,
    TurnedAway,
    ServiceStart { resource: ResourceId, occupancy: usize },
    ServiceEnd { resource: ResourceId },
    RegisterBusy { attempt: u32 },
    Departure,
}

/// Keeps every callback with the vehicle id and the time it happened
#[derive(Debug, Default)]
pub(crate) struct RecordingObserver {
    events: Mutex<Vec<(u64, Observed, Instant)>>,
}

impl RecordingObserver {
    pub(crate) fn events(&self) -> Vec<(u64, Observed, Instant)> {
        self.events.lock().clone()
    }

    pub(crate) fn for_vehicle(&self, id: u64) -> Vec<(Observed, Instant)> {
        self.events()
            .into_iter()
            .filter(|(vehicle, _, _)| *vehicle == id)
            .map(|(_, event, at)| (event, at))
            .collect()
    }

    pub(crate) fn register_busy_count(&self) -> usize {
        self.events()
            .iter()
            .filter(|(_, event, _)| matches!(event, Observed::RegisterBusy { .. }))
            .count()
    }

    fn push(&self, vehicle: &Vehicle, event: Observed) {
        self.events.lock().push((vehicle.id, event, Instant::now()));
    }
}

impl StationObserver for RecordingObserver {
    fn on_arrival(&self, vehicle: &Vehicle) {
        self.push(vehicle, Observed::Arrival);
    }

    fn on_turned_away(&self, vehicle: &Vehicle) {
        self.push(vehicle, Observed::TurnedAway);
    }

    fn on_service_start(
        &self,
        vehicle: &Vehicle,
        resource: ResourceId,
        occupancy: usize,
        _duration: Duration,
    ) {
        self.push(vehicle, Observed::ServiceStart { resource, occupancy });
    }

    fn on_service_end(&self, vehicle: &Vehicle, resource: ResourceId, _duration: Duration) {
        self.push(vehicle, Observed::ServiceEnd { resource });
    }

    fn on_register_busy(&self, vehicle: &Vehicle, attempt: u32) {
        self.push(vehicle, Observed::RegisterBusy { attempt });
    }

    fn on_departure(&self, vehicle: &Vehicle) {
        self.push(vehicle, Observed::Departure);
    }
}

/// One Gas pump and one register, both single-slot with a fixed 1s service
pub(crate) fn single_lane_station() -> StationRegistry {
    let one_second = TimeRange::fixed(Duration::from_secs(1));
    let topology = StationTopology::new(
        vec![PumpGroup::new(VehicleType::Gas, 1, 1, one_second)],
        RegisterGroup {
            count: 1,
            capacity: 1,
            service_time: one_second,
        },
    );
    StationRegistry::from_topology(&topology).unwrap()
}

/// One single-slot pump of every type and one register, all with a fixed 1s service
pub(crate) fn one_pump_per_type_station() -> StationRegistry {
    let one_second = TimeRange::fixed(Duration::from_secs(1));
    let pumps = VehicleType::ALL
        .iter()
        .map(|fuel| PumpGroup::new(*fuel, 1, 1, one_second))
        .collect();
    let topology = StationTopology::new(
        pumps,
        RegisterGroup {
            count: 1,
            capacity: 1,
            service_time: one_second,
        },
    );
    StationRegistry::from_topology(&topology).unwrap()
}
