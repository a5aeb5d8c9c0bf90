use rand::Rng;
use serde::{Deserialize, Serialize};
use std::time::{Duration, Instant};

/// Inclusive-exclusive range of simulated durations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeRange {
    pub min: Duration,
    pub max: Duration,
}

impl TimeRange {
    pub fn new(min: Duration, max: Duration) -> Self {
        Self { min, max }
    }

    pub fn fixed(duration: Duration) -> Self {
        Self::new(duration, duration)
    }

    pub fn from_millis(min: u64, max: u64) -> Self {
        Self::new(Duration::from_millis(min), Duration::from_millis(max))
    }

    pub fn from_secs(min: u64, max: u64) -> Self {
        Self::new(Duration::from_secs(min), Duration::from_secs(max))
    }

    /// Draw `min + uniform[0, max - min)`. A zero-width range returns `min`.
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Duration {
        let nanos = self.max.saturating_sub(self.min).as_nanos();
        let span = u64::try_from(nanos).unwrap_or(u64::MAX);
        if span == 0 {
            return self.min;
        }
        self.min + Duration::from_nanos(rng.gen_range(0..span))
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.min > self.max {
            return Err(format!(
                "range minimum {:?} is greater than maximum {:?}",
                self.min, self.max
            ));
        }
        Ok(())
    }
}

/// Maps simulated time onto wall-clock time
///
/// Every suspension in the simulation goes through here, so a scale below
/// 1.0 runs the whole station faster than real time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SimClock {
    time_scale: f64,
}

impl SimClock {
    pub fn new(time_scale: f64) -> Self {
        Self { time_scale }
    }

    pub fn real_time() -> Self {
        Self::new(1.0)
    }

    pub fn time_scale(&self) -> f64 {
        self.time_scale
    }

    /// Saturates at `Duration::MAX`
    pub fn to_wall(&self, simulated: Duration) -> Duration {
        scale(simulated, self.time_scale)
    }

    pub fn to_simulated(&self, wall: Duration) -> Duration {
        scale(wall, self.time_scale.recip())
    }

    /// Simulated time elapsed since `start`
    pub fn simulated_since(&self, start: Instant) -> Duration {
        self.to_simulated(start.elapsed())
    }

    pub fn sleep(&self, simulated: Duration) {
        let wall = self.to_wall(simulated);
        if !wall.is_zero() {
            std::thread::sleep(wall);
        }
    }
}

impl Default for SimClock {
    fn default() -> Self {
        Self::real_time()
    }
}

fn scale(duration: Duration, factor: f64) -> Duration {
    Duration::try_from_secs_f64(duration.as_secs_f64() * factor).unwrap_or(Duration::MAX)
}
