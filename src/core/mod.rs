pub mod clock;
pub mod config;
pub mod coordinator;
pub mod errors;
pub mod executor;
pub mod generator;
pub mod observer;
pub mod registry;
pub mod report;
pub mod resource;
pub mod selector;
pub mod simulation_engine;
pub mod types;

#[cfg(test)]
mod tests;
