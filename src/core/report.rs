use super::types::ResourceId;
use serde::Serialize;
use std::fmt;
use std::time::Duration;

/// Average visit length in seconds, `None` when there were no visits
pub fn average_seconds(total: Duration, visits: u64) -> Option<f64> {
    if visits == 0 {
        return None;
    }
    Some(total.as_secs_f64() / visits as f64)
}

/// Statistics of one pump or register at the end of a run
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResourceSummary {
    pub id: ResourceId,
    pub capacity: usize,
    pub served: u64,
    pub total_seconds: f64,
    pub average_seconds: Option<f64>,
}

impl ResourceSummary {
    pub fn new(id: ResourceId, capacity: usize, served: u64, total: Duration) -> Self {
        Self {
            id,
            capacity,
            served,
            total_seconds: total.as_secs_f64(),
            average_seconds: average_seconds(total, served),
        }
    }
}

/// Outcome of a whole simulation run
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SimulationReport {
    pub run_id: String,
    pub vehicles_generated: u64,
    pub vehicles_serviced: u64,
    pub skipped_vehicles: u64,
    pub average_refuel_seconds: Option<f64>,
    pub average_payment_seconds: Option<f64>,
    pub pumps: Vec<ResourceSummary>,
    pub registers: Vec<ResourceSummary>,
}

impl SimulationReport {
    pub fn new(
        run_id: String,
        vehicles_generated: u64,
        vehicles_serviced: u64,
        skipped_vehicles: u64,
        pumps: Vec<ResourceSummary>,
        registers: Vec<ResourceSummary>,
    ) -> Self {
        Self {
            run_id,
            vehicles_generated,
            vehicles_serviced,
            skipped_vehicles,
            average_refuel_seconds: pooled_average(&pumps),
            average_payment_seconds: pooled_average(&registers),
            pumps,
            registers,
        }
    }

    pub fn pump_visits(&self) -> u64 {
        self.pumps.iter().map(|p| p.served).sum()
    }

    pub fn register_visits(&self) -> u64 {
        self.registers.iter().map(|r| r.served).sum()
    }
}

/// Total time over total visits across a group of resources
fn pooled_average(resources: &[ResourceSummary]) -> Option<f64> {
    let visits: u64 = resources.iter().map(|r| r.served).sum();
    if visits == 0 {
        return None;
    }
    let total: f64 = resources.iter().map(|r| r.total_seconds).sum();
    Some(total / visits as f64)
}

struct Seconds(Option<f64>);

impl fmt::Display for Seconds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(secs) => write!(f, "{:.2} seconds", secs),
            None => f.write_str("undefined"),
        }
    }
}

impl fmt::Display for SimulationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Simulation completed. Statistics:")?;
        writeln!(f, "Vehicles arrived: {}", self.vehicles_generated)?;
        writeln!(f, "Vehicles serviced: {}", self.vehicles_serviced)?;
        writeln!(f, "Skipped vehicles: {}", self.skipped_vehicles)?;
        writeln!(
            f,
            "Average refueling time: {}",
            Seconds(self.average_refuel_seconds)
        )?;
        write!(
            f,
            "Average cash register waiting time: {}",
            Seconds(self.average_payment_seconds)
        )
    }
}
