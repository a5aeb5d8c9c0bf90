use rand::distributions::{Distribution, Standard};
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Fuel or charging type a vehicle needs, and the type a pump serves
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum VehicleType {
    Gas,
    Diesel,
    Lpg,
    Electric,
}

impl VehicleType {
    pub const ALL: [VehicleType; 4] = [
        VehicleType::Gas,
        VehicleType::Diesel,
        VehicleType::Lpg,
        VehicleType::Electric,
    ];
}

impl Distribution<VehicleType> for Standard {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> VehicleType {
        VehicleType::ALL[rng.gen_range(0..VehicleType::ALL.len())]
    }
}

impl fmt::Display for VehicleType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            VehicleType::Gas => "Gas",
            VehicleType::Diesel => "Diesel",
            VehicleType::Lpg => "LPG",
            VehicleType::Electric => "Electric",
        };
        f.write_str(name)
    }
}

/// A single arriving vehicle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Vehicle {
    pub id: u64,
    pub fuel: VehicleType,
}

impl Vehicle {
    pub fn new(id: u64, fuel: VehicleType) -> Self {
        Self { id, fuel }
    }
}

impl fmt::Display for Vehicle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.id, self.fuel)
    }
}

/// What a resource is: a typed pump or an untyped cash register
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ResourceKind {
    Pump(VehicleType),
    Register,
}

/// Identity of a resource inside the station
///
/// Station ids are 1-based and unique within their kind, so pump 3 and
/// cash register 3 may both exist.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ResourceId {
    pub kind: ResourceKind,
    pub station_id: usize,
}

impl ResourceId {
    pub fn pump(fuel: VehicleType, station_id: usize) -> Self {
        Self {
            kind: ResourceKind::Pump(fuel),
            station_id,
        }
    }

    pub fn register(station_id: usize) -> Self {
        Self {
            kind: ResourceKind::Register,
            station_id,
        }
    }

    pub fn is_pump(&self) -> bool {
        matches!(self.kind, ResourceKind::Pump(_))
    }
}

impl fmt::Display for ResourceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            ResourceKind::Pump(fuel) => write!(f, "Pump {} ({})", self.station_id, fuel),
            ResourceKind::Register => write!(f, "Register {}", self.station_id),
        }
    }
}
