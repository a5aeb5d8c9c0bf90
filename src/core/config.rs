//! Configuration for a fuel station simulation run
//!
//! All durations are simulated time. `time_scale` maps them onto the wall
//! clock, so tests can replay a one-minute run in a fraction of a second.

use super::clock::{SimClock, TimeRange};
use serde::{Deserialize, Serialize};
use std::time::Duration;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationConfig {
    /// How long new vehicles keep arriving
    pub duration: Duration,
    /// Gap between consecutive arrivals
    pub arrival_interval: TimeRange,
    /// Wait before a refueled vehicle looks for a free register again
    pub register_retry_backoff: Duration,
    /// Wall seconds per simulated second
    pub time_scale: f64,
    pub random_seed: Option<u64>,
    /// Stop generating after this many vehicles. `Some(0)` disables arrivals.
    pub max_vehicles: Option<u64>,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            duration: Duration::from_secs(60),
            arrival_interval: TimeRange::from_millis(100, 1000),
            register_retry_backoff: Duration::from_millis(100),
            time_scale: 1.0,
            random_seed: None,
            max_vehicles: None,
        }
    }
}

impl SimulationConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_duration(mut self, duration: Duration) -> Self {
        self.duration = duration;
        self
    }

    pub fn with_arrival_interval(mut self, interval: TimeRange) -> Self {
        self.arrival_interval = interval;
        self
    }

    pub fn with_register_retry_backoff(mut self, backoff: Duration) -> Self {
        self.register_retry_backoff = backoff;
        self
    }

    pub fn with_time_scale(mut self, time_scale: f64) -> Self {
        self.time_scale = time_scale;
        self
    }

    pub fn with_random_seed(mut self, seed: Option<u64>) -> Self {
        self.random_seed = seed;
        self
    }

    pub fn with_max_vehicles(mut self, max_vehicles: Option<u64>) -> Self {
        self.max_vehicles = max_vehicles;
        self
    }

    pub fn clock(&self) -> SimClock {
        SimClock::new(self.time_scale)
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.duration.is_zero() {
            return Err("Simulation duration must be greater than 0".to_string());
        }

        self.arrival_interval
            .validate()
            .map_err(|e| format!("Arrival interval: {}", e))?;

        if self.arrival_interval.max.is_zero() {
            return Err("Arrival interval must be greater than 0".to_string());
        }

        if self.register_retry_backoff.is_zero() {
            return Err("Register retry backoff must be greater than 0".to_string());
        }

        if !self.time_scale.is_finite() || self.time_scale <= 0.0 {
            return Err(format!(
                "Time scale must be a positive number, got {}",
                self.time_scale
            ));
        }

        Ok(())
    }
}
