//! Test that the same seed produces identical velocities
//!
//! Usage: cargo run -p kinematics --example test_seed_stability

use units::Length;

use kinematics::{KinematicsConfig, StarRecord, assign_population_velocities};

fn main() {
    let stars: Vec<StarRecord> = (0..1_000)
        .map(|i| StarRecord {
            vertical_height: Length::from_kpc(0.001 * i as f64),
            galactocentric_radius: Length::from_kpc(7.0 + 0.003 * i as f64),
            galactocentric_azimuth: 0.0005 * i as f64,
            white_dwarf_flag: if i % 3 == 0 { 0.0 } else { 1.0 },
            disk_membership: if i % 5 == 0 { 2 } else { 1 },
        })
        .collect();
    let config = KinematicsConfig::default();

    println!("Testing seed stability with seed: {}", config.seed);

    let runs: Vec<_> = (1..=5)
        .map(|run| match assign_population_velocities(&stars, &config) {
            Ok(records) => {
                println!("Run {}: {} white dwarfs", run, records.len());
                records
            }
            Err(e) => {
                eprintln!("❌ FAIL: run {} aborted: {}", run, e);
                std::process::exit(1);
            }
        })
        .collect();

    for (run, records) in runs.iter().enumerate().skip(1) {
        for (first, other) in runs[0].iter().zip(records) {
            let a = first.velocity.to_vector();
            let b = other.velocity.to_vector();
            if a.iter().zip(b.iter()).any(|(x, y)| x.to_bits() != y.to_bits()) {
                eprintln!(
                    "❌ FAIL: white dwarf {} differs in run {}! {:?} vs {:?}",
                    first.index,
                    run + 1,
                    a,
                    b
                );
                std::process::exit(1);
            }
        }
    }

    println!("\n✅ All runs produced bit-identical velocities");
}
