use super::clock::SimClock;
use super::executor::ServiceExecutor;
use super::observer::StationObserver;
use super::registry::StationRegistry;
use super::resource::SlotPermit;
use super::selector::ResourceSelector;
use super::types::{ResourceId, Vehicle};
use rand::Rng;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

/// Run-wide vehicle counters shared by every lifecycle task
#[derive(Debug, Default)]
pub struct StationTally {
    serviced: AtomicU64,
    skipped: AtomicU64,
}

impl StationTally {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn serviced(&self) -> u64 {
        self.serviced.load(Ordering::SeqCst)
    }

    pub fn skipped(&self) -> u64 {
        self.skipped.load(Ordering::SeqCst)
    }

    fn record_serviced(&self) {
        self.serviced.fetch_add(1, Ordering::SeqCst);
    }

    fn record_skipped(&self) {
        self.skipped.fetch_add(1, Ordering::SeqCst);
    }
}

/// How a vehicle's visit ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VehicleOutcome {
    Serviced {
        pump: ResourceId,
        register: ResourceId,
        refuel: Duration,
        payment: Duration,
    },
    TurnedAway,
}

impl VehicleOutcome {
    pub fn is_serviced(&self) -> bool {
        matches!(self, VehicleOutcome::Serviced { .. })
    }
}

/// Stages of one vehicle's visit
#[derive(Debug)]
pub enum LifecycleState<'a> {
    SeekingPump,
    Refueling(SlotPermit<'a>),
    SeekingRegister {
        pump: ResourceId,
        refuel: Duration,
        attempts: u32,
    },
    Paying {
        pump: ResourceId,
        refuel: Duration,
        permit: SlotPermit<'a>,
    },
    Done(VehicleOutcome),
    Rejected,
}

/// Drives a vehicle through refuel then payment
///
/// Pump admission is accept-or-leave. Register admission retries after a
/// fixed backoff until a slot frees up.
#[derive(Clone, Copy)]
pub struct VehicleLifecycle<'a> {
    selector: ResourceSelector<'a>,
    executor: ServiceExecutor<'a>,
    observer: &'a dyn StationObserver,
    tally: &'a StationTally,
    clock: SimClock,
    register_backoff: Duration,
}

impl<'a> VehicleLifecycle<'a> {
    pub fn new(
        registry: &'a StationRegistry,
        tally: &'a StationTally,
        observer: &'a dyn StationObserver,
        clock: SimClock,
        register_backoff: Duration,
    ) -> Self {
        Self {
            selector: ResourceSelector::new(registry),
            executor: ServiceExecutor::new(clock, observer),
            observer,
            tally,
            clock,
            register_backoff,
        }
    }

    pub fn run<R: Rng + ?Sized>(&self, vehicle: Vehicle, rng: &mut R) -> VehicleOutcome {
        self.observer.on_arrival(&vehicle);

        let mut state = LifecycleState::SeekingPump;
        loop {
            state = match state {
                LifecycleState::SeekingPump => match self.selector.claim_pump(vehicle.fuel) {
                    Some(permit) => LifecycleState::Refueling(permit),
                    None => LifecycleState::Rejected,
                },
                LifecycleState::Refueling(permit) => {
                    let pump = permit.resource().id();
                    let refuel = self.executor.occupy(permit, &vehicle, &mut *rng);
                    LifecycleState::SeekingRegister {
                        pump,
                        refuel,
                        attempts: 0,
                    }
                }
                LifecycleState::SeekingRegister {
                    pump,
                    refuel,
                    attempts,
                } => match self.selector.claim_register() {
                    Some(permit) => LifecycleState::Paying {
                        pump,
                        refuel,
                        permit,
                    },
                    None => {
                        let attempts = attempts + 1;
                        self.observer.on_register_busy(&vehicle, attempts);
                        self.clock.sleep(self.register_backoff);
                        LifecycleState::SeekingRegister {
                            pump,
                            refuel,
                            attempts,
                        }
                    }
                },
                LifecycleState::Paying {
                    pump,
                    refuel,
                    permit,
                } => {
                    let register = permit.resource().id();
                    let payment = self.executor.occupy(permit, &vehicle, &mut *rng);
                    LifecycleState::Done(VehicleOutcome::Serviced {
                        pump,
                        register,
                        refuel,
                        payment,
                    })
                }
                LifecycleState::Done(outcome) => {
                    self.tally.record_serviced();
                    self.observer.on_departure(&vehicle);
                    return outcome;
                }
                LifecycleState::Rejected => {
                    self.observer.on_turned_away(&vehicle);
                    self.tally.record_skipped();
                    return VehicleOutcome::TurnedAway;
                }
            };
        }
    }
}
