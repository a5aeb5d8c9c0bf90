pub mod core;

// Re-export commonly used types
pub use crate::core::clock::{SimClock, TimeRange};
pub use crate::core::config::SimulationConfig;
pub use crate::core::coordinator::{StationTally, VehicleLifecycle, VehicleOutcome};
pub use crate::core::errors::StationError;
pub use crate::core::observer::{LoggingObserver, NoopObserver, StationObserver};
pub use crate::core::registry::{PumpGroup, RegisterGroup, StationRegistry, StationTopology};
pub use crate::core::report::{ResourceSummary, SimulationReport};
pub use crate::core::simulation_engine::{run_simulation, SimulationEngine};
pub use crate::core::types::{ResourceId, ResourceKind, Vehicle, VehicleType};
