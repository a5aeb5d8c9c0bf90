use fuelsim::{SimulationConfig, SimulationEngine, StationRegistry};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp(None)
        .init();

    let engine = SimulationEngine::new(SimulationConfig::default(), StationRegistry::reference())?;
    let config = engine.config();
    let registry = engine.registry();

    println!("⛽ Starting fuel station simulation");
    println!("Configuration:");
    println!(
        "  Pumps: {}, cash registers: {}",
        registry.pumps().len(),
        registry.registers().len()
    );
    println!(
        "  Duration: {:.0}s, arrivals every {:?} to {:?}",
        config.duration.as_secs_f64(),
        config.arrival_interval.min,
        config.arrival_interval.max
    );
    println!();

    let report = engine.run()?;
    println!("{}", report);

    Ok(())
}
