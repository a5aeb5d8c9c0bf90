use super::clock::TimeRange;
use super::errors::{Result, StationError};
use super::resource::ServiceResource;
use super::types::{ResourceId, ResourceKind, VehicleType};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// A run of identical pumps serving one vehicle type
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PumpGroup {
    pub fuel: VehicleType,
    pub count: usize,
    pub capacity: usize,
    pub service_time: TimeRange,
}

impl PumpGroup {
    pub fn new(fuel: VehicleType, count: usize, capacity: usize, service_time: TimeRange) -> Self {
        Self {
            fuel,
            count,
            capacity,
            service_time,
        }
    }
}

/// The shared pool of cash registers
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegisterGroup {
    pub count: usize,
    pub capacity: usize,
    pub service_time: TimeRange,
}

/// Layout of the whole station
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StationTopology {
    pub pumps: Vec<PumpGroup>,
    pub registers: RegisterGroup,
}

impl Default for StationTopology {
    fn default() -> Self {
        let fossil = TimeRange::from_secs(1, 5);
        Self {
            pumps: vec![
                PumpGroup::new(VehicleType::Gas, 4, 2, fossil),
                PumpGroup::new(VehicleType::Diesel, 4, 2, fossil),
                PumpGroup::new(VehicleType::Lpg, 1, 2, fossil),
                PumpGroup::new(VehicleType::Electric, 8, 2, TimeRange::from_secs(3, 10)),
            ],
            registers: RegisterGroup {
                count: 2,
                capacity: 2,
                service_time: TimeRange::new(Duration::from_millis(500), Duration::from_secs(2)),
            },
        }
    }
}

impl StationTopology {
    pub fn new(pumps: Vec<PumpGroup>, registers: RegisterGroup) -> Self {
        Self { pumps, registers }
    }

    pub fn validate(&self) -> Result<()> {
        for group in &self.pumps {
            if group.count > 0 && group.capacity == 0 {
                return Err(StationError::InvalidTopology(format!(
                    "{} pumps must have a capacity greater than 0",
                    group.fuel
                )));
            }
            group.service_time.validate().map_err(|e| {
                StationError::InvalidTopology(format!("{} pump service time: {}", group.fuel, e))
            })?;
        }

        let has_pumps = self.pumps.iter().any(|g| g.count > 0);
        if has_pumps && self.registers.count == 0 {
            return Err(StationError::InvalidTopology(
                "a station with pumps needs at least one cash register".to_string(),
            ));
        }
        if self.registers.count > 0 && self.registers.capacity == 0 {
            return Err(StationError::InvalidTopology(
                "cash registers must have a capacity greater than 0".to_string(),
            ));
        }
        self.registers
            .service_time
            .validate()
            .map_err(|e| StationError::InvalidTopology(format!("register service time: {}", e)))
    }
}

/// Owned arena of every pump and cash register in the station
///
/// Resources are addressed by index into [`pumps`](Self::pumps) and
/// [`registers`](Self::registers); the order is fixed at construction and is
/// the order in which selection scans.
#[derive(Debug)]
pub struct StationRegistry {
    pumps: Vec<ServiceResource>,
    registers: Vec<ServiceResource>,
}

impl StationRegistry {
    pub fn from_topology(topology: &StationTopology) -> Result<Self> {
        topology.validate()?;
        Ok(Self::build(topology))
    }

    /// The default 17-pump, 2-register station
    pub fn reference() -> Self {
        Self::build(&StationTopology::default())
    }

    fn build(topology: &StationTopology) -> Self {
        let mut pumps = Vec::new();
        for group in &topology.pumps {
            for _ in 0..group.count {
                let id = ResourceId::pump(group.fuel, pumps.len() + 1);
                pumps.push(ServiceResource::new(id, group.capacity, group.service_time));
            }
        }

        let registers = (1..=topology.registers.count)
            .map(|station_id| {
                ServiceResource::new(
                    ResourceId::register(station_id),
                    topology.registers.capacity,
                    topology.registers.service_time,
                )
            })
            .collect();

        Self { pumps, registers }
    }

    pub fn pumps(&self) -> &[ServiceResource] {
        &self.pumps
    }

    pub fn registers(&self) -> &[ServiceResource] {
        &self.registers
    }

    pub fn pump(&self, index: usize) -> Option<&ServiceResource> {
        self.pumps.get(index)
    }

    pub fn register(&self, index: usize) -> Option<&ServiceResource> {
        self.registers.get(index)
    }

    pub fn pump_count(&self, fuel: VehicleType) -> usize {
        self.pumps
            .iter()
            .filter(|p| p.id().kind == ResourceKind::Pump(fuel))
            .count()
    }

    /// Sum of every slot across pumps and registers
    pub fn total_slots(&self) -> usize {
        self.pumps
            .iter()
            .chain(self.registers.iter())
            .map(|r| r.capacity())
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_layout() {
        let registry = StationRegistry::reference();
        assert_eq!(registry.pumps().len(), 17);
        assert_eq!(registry.registers().len(), 2);
        assert_eq!(registry.pump_count(VehicleType::Gas), 4);
        assert_eq!(registry.pump_count(VehicleType::Diesel), 4);
        assert_eq!(registry.pump_count(VehicleType::Lpg), 1);
        assert_eq!(registry.pump_count(VehicleType::Electric), 8);
        assert_eq!(registry.total_slots(), 38);

        let lpg = registry.pump(8).unwrap();
        assert_eq!(lpg.id(), ResourceId::pump(VehicleType::Lpg, 9));
        assert_eq!(registry.pump(16).unwrap().service_time(), TimeRange::from_secs(3, 10));
        assert_eq!(registry.register(1).unwrap().id().kind, ResourceKind::Register);
        assert_eq!(registry.register(1).unwrap().id().station_id, 2);
    }

    #[test]
    fn test_reference_matches_default_topology() {
        let built = StationRegistry::from_topology(&StationTopology::default()).unwrap();
        let reference = StationRegistry::reference();
        let ids = |r: &StationRegistry| r.pumps().iter().map(|p| p.id()).collect::<Vec<_>>();
        assert_eq!(ids(&built), ids(&reference));
        assert_eq!(built.total_slots(), reference.total_slots());
    }

    #[test]
    fn test_zero_capacity_rejected() {
        let mut topology = StationTopology::default();
        topology.pumps[0].capacity = 0;
        assert!(matches!(
            StationRegistry::from_topology(&topology),
            Err(StationError::InvalidTopology(_))
        ));
    }

    #[test]
    fn test_missing_registers_rejected() {
        let mut topology = StationTopology::default();
        topology.registers.count = 0;
        assert!(StationRegistry::from_topology(&topology).is_err());
    }

    #[test]
    fn test_type_without_pumps_is_allowed() {
        let mut topology = StationTopology::default();
        topology.pumps.retain(|g| g.fuel != VehicleType::Lpg);
        let registry = StationRegistry::from_topology(&topology).unwrap();
        assert_eq!(registry.pump_count(VehicleType::Lpg), 0);
        assert_eq!(registry.pumps().len(), 16);
    }
}
