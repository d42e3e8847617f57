//! Assign velocities to a toy white dwarf population and print them.
//!
//! Usage: cargo run -p kinematics --example assign_velocities [config.toml]
//!
//! Set `RUST_LOG=debug` to see compaction and assignment progress.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaChaRng;
use tracing_subscriber::EnvFilter;
use units::Length;

use kinematics::{
    KinematicsConfig, StarRecord, ToomreDiagram, VelocityAssigner, compact_white_dwarfs,
};

fn toy_population(size: usize, seed: u64) -> Vec<StarRecord> {
    let mut rng = ChaChaRng::seed_from_u64(seed);
    (0..size)
        .map(|_| StarRecord {
            vertical_height: Length::from_parsecs(rng.random_range(-500.0..500.0)),
            galactocentric_radius: Length::from_kpc(rng.random_range(8.0..9.0)),
            galactocentric_azimuth: rng.random_range(-0.05..0.05),
            white_dwarf_flag: if rng.random_bool(0.7) { 1.0 } else { 0.0 },
            disk_membership: if rng.random_bool(0.85) { 1 } else { 2 },
        })
        .collect()
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let config = match std::env::args().nth(1) {
        Some(path) => match KinematicsConfig::load(&path) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("❌ {}: {}", path, e);
                std::process::exit(1);
            }
        },
        None => KinematicsConfig::default(),
    };

    let stars = toy_population(50, config.seed);
    let population = compact_white_dwarfs(&stars, config.geometry);
    let assigner = VelocityAssigner::from_config(&config);
    let mut sampler = config.sampler();

    println!(
        "{} stars, {} white dwarfs, geometry {}, seed {}\n",
        stars.len(),
        population.len(),
        config.geometry,
        config.seed
    );
    println!("{:>5} {:>6} {:>9} {:>9} {:>9}", "index", "disk", "U", "V", "W");

    let mut records = Vec::with_capacity(population.len());
    let result = assigner.assign_each(&population, &mut sampler, |record| {
        println!(
            "{:>5} {:>6} {:>9.2} {:>9.2} {:>9.2}",
            record.index,
            record.disk.to_string(),
            record.velocity.u.to_km_per_sec(),
            record.velocity.v.to_km_per_sec(),
            record.velocity.w.to_km_per_sec()
        );
        records.push(record);
    });

    if let Err(e) = result {
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }

    // Toomre diagram relative to the local standard of rest
    let lsr_offset = -config.solar_peculiar_velocity.v;
    let diagram = ToomreDiagram::from_records(&records, lsr_offset);
    println!(
        "\nToomre diagram: {} thin disk points, {} thick disk points",
        diagram.thin.len(),
        diagram.thick.len()
    );
}
