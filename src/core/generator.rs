use super::clock::TimeRange;
use super::types::Vehicle;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::time::Duration;

/// Produces arriving vehicles and the gaps between them
#[derive(Debug)]
pub struct VehicleGenerator {
    rng: StdRng,
}

impl VehicleGenerator {
    /// Seeded generators replay the same arrival stream
    pub fn new(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self { rng }
    }

    pub fn next(&mut self, id: u64) -> Vehicle {
        Vehicle::new(id, self.rng.gen())
    }

    pub fn next_arrival_delay(&mut self, interval: &TimeRange) -> Duration {
        interval.sample(&mut self.rng)
    }
}
