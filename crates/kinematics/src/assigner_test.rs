use approx::assert_relative_eq;
use units::{Length, Velocity};

use crate::assigner::{
    HeliocentricVelocity, KinematicRecord, VelocityAssigner, asymmetric_drift,
    assign_population_velocities,
};
use crate::config::KinematicsConfig;
use crate::disk::DiskMembership;
use crate::error::KinematicsError;
use crate::population::{CompactedPopulation, GeometryMode, StarRecord, compact_white_dwarfs};
use crate::rotation::RotationModel;
use crate::sampling::{GaussianSampler, SeededSampler};

/// Degenerate sampler: every deviate is zero.
struct ZeroSampler;

impl GaussianSampler for ZeroSampler {
    fn standard_normal(&mut self) -> f64 {
        0.0
    }
}

/// Replays a fixed list of deviates and counts draws.
struct ScriptedSampler {
    values: Vec<f64>,
    draws: usize,
}

impl ScriptedSampler {
    fn new(values: Vec<f64>) -> Self {
        Self { values, draws: 0 }
    }
}

impl GaussianSampler for ScriptedSampler {
    fn standard_normal(&mut self) -> f64 {
        let value = self.values[self.draws % self.values.len()];
        self.draws += 1;
        value
    }
}

fn white_dwarf(radius: f64, azimuth: f64, disk: i32) -> StarRecord {
    StarRecord {
        vertical_height: Length::from_kpc(0.1),
        galactocentric_radius: Length::from_kpc(radius),
        galactocentric_azimuth: azimuth,
        white_dwarf_flag: 1.0,
        disk_membership: disk,
    }
}

fn compacted(stars: &[StarRecord]) -> CompactedPopulation {
    compact_white_dwarfs(stars, GeometryMode::Cones)
}

fn single(radius: f64, azimuth: f64, disk: i32) -> CompactedPopulation {
    compacted(&[white_dwarf(radius, azimuth, disk)])
}

#[test]
fn zero_deviates_give_thin_disk_means() {
    let assigner = VelocityAssigner::default();
    let model = RotationModel::default();
    let r = Length::from_kpc(7.2);
    let theta = 0.4;

    let records = assigner
        .assign_all(&single(7.2, theta, 1), &mut ZeroSampler)
        .unwrap();
    assert_eq!(records.len(), 1);

    let record = records[0];
    assert_eq!(record.disk, DiskMembership::Thin);
    assert_eq!(record.velocity.u, model.mean_radial(r, theta));
    assert_relative_eq!(
        record.velocity.v.to_km_per_sec(),
        model.mean_tangential(r, theta).to_km_per_sec() - 8.748,
        epsilon = 1e-9
    );
    assert_eq!(record.velocity.w.to_km_per_sec(), -7.0);
}

#[test]
fn zero_deviates_give_thick_disk_means() {
    let assigner = VelocityAssigner::default();
    let model = RotationModel::default();

    let records = assigner
        .assign_all(&single(8.5, 0.0, 2), &mut ZeroSampler)
        .unwrap();

    let record = records[0];
    assert_eq!(record.disk, DiskMembership::Thick);
    assert_eq!(record.velocity.u.to_km_per_sec(), -11.0);
    assert_relative_eq!(
        record.velocity.v.to_km_per_sec(),
        model.mean_tangential(Length::from_kpc(8.5), 0.0).to_km_per_sec() - 2500.0 / 120.0,
        epsilon = 1e-9
    );
    assert_eq!(record.velocity.w.to_km_per_sec(), -7.0);
}

#[test]
fn deviates_are_drawn_u_then_v_then_w() {
    let assigner = VelocityAssigner::default();
    let model = RotationModel::default();
    let r = Length::from_kpc(9.1);
    let theta = -0.7;
    let mut sampler = ScriptedSampler::new(vec![1.0, 2.0, 3.0]);

    let records = assigner
        .assign_all(&single(9.1, theta, 1), &mut sampler)
        .unwrap();
    let velocity = records[0].velocity;

    assert_eq!(sampler.draws, 3);
    assert_relative_eq!(
        velocity.u.to_km_per_sec(),
        32.4 + model.mean_radial(r, theta).to_km_per_sec(),
        epsilon = 1e-9
    );
    assert_relative_eq!(
        velocity.v.to_km_per_sec(),
        46.0 + model.mean_tangential(r, theta).to_km_per_sec() - 8.748,
        epsilon = 1e-9
    );
    assert_relative_eq!(velocity.w.to_km_per_sec(), 3.0 * 18.1 - 7.0, epsilon = 1e-9);
}

#[test]
fn asymmetric_drift_scales_with_radial_dispersion() {
    assert_relative_eq!(
        asymmetric_drift(Velocity::from_km_per_sec(32.4)).to_km_per_sec(),
        8.748,
        epsilon = 1e-12
    );
    assert_relative_eq!(
        asymmetric_drift(Velocity::from_km_per_sec(50.0)).to_km_per_sec(),
        20.833_333_333_333_332,
        epsilon = 1e-12
    );
}

#[test]
fn unknown_label_aborts_at_its_index() {
    let assigner = VelocityAssigner::default();

    for bad in 0..4 {
        let stars: Vec<StarRecord> = (0..4)
            .map(|i| white_dwarf(8.0, 0.1, if i == bad { 3 } else { 1 }))
            .collect();
        let population = compacted(&stars);
        let mut sampler = ScriptedSampler::new(vec![0.5]);
        let mut emitted = Vec::new();

        let result = assigner.assign_each(&population, &mut sampler, |r| emitted.push(r));

        match result {
            Err(KinematicsError::UnknownDiskMembership {
                index,
                total,
                value,
            }) => {
                assert_eq!(index, bad);
                assert_eq!(total, 4);
                assert_eq!(value, 3);
            }
            other => panic!("expected UnknownDiskMembership, got {:?}", other),
        }

        // Records before the bad one were emitted, nothing after was drawn
        assert_eq!(emitted.len(), bad);
        assert_eq!(sampler.draws, 3 * bad);
    }
}

#[test]
fn empty_population_assigns_nothing() {
    let assigner = VelocityAssigner::default();
    let empty = compacted(&[]);
    let mut calls = 0;

    let count = assigner
        .assign_each(&empty, &mut ZeroSampler, |_| calls += 1)
        .unwrap();

    assert_eq!(count, 0);
    assert_eq!(calls, 0);
    assert!(assigner.assign_with_substreams(&empty, 42).unwrap().is_empty());
}

#[test]
fn emission_follows_compacted_order() {
    let assigner = VelocityAssigner::default();
    let mut stars = vec![
        white_dwarf(7.0, 0.1, 1),
        white_dwarf(8.0, 0.2, 2),
        white_dwarf(9.0, 0.3, 1),
    ];
    stars.insert(1, StarRecord {
        white_dwarf_flag: 0.0,
        ..white_dwarf(1.0, 1.0, 1)
    });

    let records = assigner
        .assign_all(&compacted(&stars), &mut SeededSampler::from_seed(3))
        .unwrap();

    let indices: Vec<usize> = records.iter().map(|r| r.index).collect();
    let sources: Vec<usize> = records.iter().map(|r| r.source_index).collect();
    let disks: Vec<DiskMembership> = records.iter().map(|r| r.disk).collect();
    assert_eq!(indices, vec![0, 1, 2]);
    assert_eq!(sources, vec![0, 2, 3]);
    assert_eq!(
        disks,
        vec![DiskMembership::Thin, DiskMembership::Thick, DiskMembership::Thin]
    );
}

#[test]
fn same_seed_reproduces_batch_bit_for_bit() {
    let assigner = VelocityAssigner::default();
    let stars: Vec<StarRecord> = (0..200)
        .map(|i| white_dwarf(4.0 + i as f64 * 0.05, i as f64 * 0.03, (1 + i % 2) as i32))
        .collect();
    let population = compacted(&stars);

    let first = assigner
        .assign_all(&population, &mut SeededSampler::from_seed(42))
        .unwrap();
    let second = assigner
        .assign_all(&population, &mut SeededSampler::from_seed(42))
        .unwrap();
    assert_eq!(first, second);

    let bits = |records: &[KinematicRecord]| -> Vec<[u64; 3]> {
        records
            .iter()
            .map(|r| {
                [
                    r.velocity.u.to_km_per_sec().to_bits(),
                    r.velocity.v.to_km_per_sec().to_bits(),
                    r.velocity.w.to_km_per_sec().to_bits(),
                ]
            })
            .collect()
    };
    assert_eq!(bits(&first), bits(&second));

    let other = assigner
        .assign_all(&population, &mut SeededSampler::from_seed(43))
        .unwrap();
    assert_ne!(first, other);
}

#[test]
fn substreams_do_not_depend_on_other_records() {
    let assigner = VelocityAssigner::default();
    let stars = vec![
        white_dwarf(7.0, 0.1, 1),
        white_dwarf(8.0, 0.2, 2),
        white_dwarf(9.0, 0.3, 1),
    ];

    let full = assigner
        .assign_with_substreams(&compacted(&stars), 42)
        .unwrap();
    let prefix = assigner
        .assign_with_substreams(&compacted(&stars[..2]), 42)
        .unwrap();

    assert_eq!(&full[..2], &prefix[..]);
    assert_eq!(
        full,
        assigner
            .assign_with_substreams(&compacted(&stars), 42)
            .unwrap()
    );
}

#[test]
fn substreams_report_unknown_labels() {
    let assigner = VelocityAssigner::default();
    let stars = vec![white_dwarf(7.0, 0.1, 1), white_dwarf(8.0, 0.2, 5)];

    let err = assigner
        .assign_with_substreams(&compacted(&stars), 42)
        .unwrap_err();
    assert!(matches!(
        err,
        KinematicsError::UnknownDiskMembership {
            index: 1,
            total: 2,
            value: 5
        }
    ));
}

#[test]
fn thin_disk_sample_matches_dispersion() {
    let assigner = VelocityAssigner::default();
    let stars: Vec<StarRecord> = (0..20_000).map(|_| white_dwarf(8.5, 0.0, 1)).collect();
    let records = assigner
        .assign_all(&compacted(&stars), &mut SeededSampler::from_seed(42))
        .unwrap();

    let n = records.len() as f64;
    let stats = |component: fn(&HeliocentricVelocity) -> f64| {
        let values: Vec<f64> = records.iter().map(|r| component(&r.velocity)).collect();
        let mean = values.iter().sum::<f64>() / n;
        let variance = values.iter().map(|x| (x - mean).powi(2)).sum::<f64>() / n;
        (mean, variance.sqrt())
    };

    let (u_mean, u_std) = stats(|v| v.u.to_km_per_sec());
    let (v_mean, v_std) = stats(|v| v.v.to_km_per_sec());
    let (w_mean, w_std) = stats(|v| v.w.to_km_per_sec());

    assert!((u_mean - -11.0).abs() < 1.0, "U mean {}", u_mean);
    assert!((v_mean - (-12.0 - 8.748)).abs() < 1.0, "V mean {}", v_mean);
    assert!((w_mean - -7.0).abs() < 1.0, "W mean {}", w_mean);
    assert!((u_std - 32.4).abs() < 1.0, "U std {}", u_std);
    assert!((v_std - 23.0).abs() < 1.0, "V std {}", v_std);
    assert!((w_std - 18.1).abs() < 1.0, "W std {}", w_std);
}

#[test]
fn population_entry_point_uses_config_seed_and_geometry() {
    let config = KinematicsConfig {
        seed: 11,
        geometry: GeometryMode::Cones,
        ..KinematicsConfig::default()
    };
    let stars = vec![
        white_dwarf(7.0, 0.1, 1),
        StarRecord {
            white_dwarf_flag: 0.2,
            ..white_dwarf(1.0, 1.0, 9)
        },
        white_dwarf(9.0, 0.3, 2),
    ];

    let records = assign_population_velocities(&stars, &config).unwrap();

    let expected = VelocityAssigner::from_config(&config)
        .assign_all(
            &compact_white_dwarfs(&stars, GeometryMode::Cones),
            &mut SeededSampler::from_seed(11),
        )
        .unwrap();
    assert_eq!(records, expected);
    assert_eq!(records.len(), 2);
    assert_eq!(records[1].source_index, 2);
}

#[test]
fn heliocentric_speed() {
    let velocity = HeliocentricVelocity::from_km_per_sec(3.0, 4.0, 12.0);
    assert_relative_eq!(velocity.speed().to_km_per_sec(), 13.0);
    assert_eq!(velocity.to_vector().y, 4.0);
}
