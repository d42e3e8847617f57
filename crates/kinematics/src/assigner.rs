//! Heliocentric velocity assignment for compacted white dwarfs.

use nalgebra::Vector3;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};
use units::Velocity;

use crate::config::KinematicsConfig;
use crate::disk::DiskMembership;
use crate::dispersion::dispersion_for_code;
use crate::error::KinematicsResult;
use crate::population::{CompactedPopulation, StarRecord, WhiteDwarfRecord, compact_white_dwarfs};
use crate::rotation::RotationModel;
use crate::sampling::{GaussianSampler, SeededSampler};

/// Divisor of σ_U² in the asymmetric drift lag of the tangential mean (km/s)
pub const ASYMMETRIC_DRIFT_SCALE_KM_S: f64 = 120.0;

/// Asymmetric drift lag σ_U²/120 for a radial dispersion.
pub fn asymmetric_drift(sigma_u: Velocity) -> Velocity {
    Velocity::from_km_per_sec(sigma_u.squared() / ASYMMETRIC_DRIFT_SCALE_KM_S)
}

/// Velocity of a star relative to the Sun along the galactic radial (U),
/// rotation (V) and vertical (W) axes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HeliocentricVelocity {
    pub u: Velocity,
    pub v: Velocity,
    pub w: Velocity,
}

impl HeliocentricVelocity {
    pub fn from_km_per_sec(u: f64, v: f64, w: f64) -> Self {
        Self {
            u: Velocity::from_km_per_sec(u),
            v: Velocity::from_km_per_sec(v),
            w: Velocity::from_km_per_sec(w),
        }
    }

    /// (U, V, W) in km/s
    pub fn to_vector(&self) -> Vector3<f64> {
        Vector3::new(
            self.u.to_km_per_sec(),
            self.v.to_km_per_sec(),
            self.w.to_km_per_sec(),
        )
    }

    /// Total speed relative to the Sun
    pub fn speed(&self) -> Velocity {
        Velocity::from_km_per_sec(self.to_vector().norm())
    }
}

/// One assigned white dwarf, in the order it was produced.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct KinematicRecord {
    /// Position in the compacted population
    pub index: usize,
    /// Position in the original population
    pub source_index: usize,
    pub disk: DiskMembership,
    pub velocity: HeliocentricVelocity,
}

/// Draws a velocity for each white dwarf from a disk-dependent anisotropic
/// Gaussian around the rotation-corrected mean motion.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct VelocityAssigner {
    rotation: RotationModel,
}

impl VelocityAssigner {
    pub fn new(rotation: RotationModel) -> Self {
        Self { rotation }
    }

    pub fn from_config(config: &KinematicsConfig) -> Self {
        Self::new(config.rotation_model())
    }

    pub fn rotation(&self) -> &RotationModel {
        &self.rotation
    }

    /// Assign one record.
    ///
    /// The disk label is resolved before any deviate is drawn, so a bad
    /// label leaves the sampler untouched. Deviates are then drawn in the
    /// order U, V, W.
    ///
    /// # Errors
    ///
    /// `UnknownDiskMembership` carrying `index`, `total` and the label.
    pub fn assign_record<S: GaussianSampler + ?Sized>(
        &self,
        index: usize,
        total: usize,
        record: &WhiteDwarfRecord,
        sampler: &mut S,
    ) -> KinematicsResult<KinematicRecord> {
        let (disk, dispersion) = dispersion_for_code(index, total, record.disk_membership)?;

        let r = record.galactocentric_radius;
        let theta = record.galactocentric_azimuth;
        if !r.is_finite() || !theta.is_finite() {
            warn!(index, source_index = record.source_index, "non-finite galactocentric position");
        }

        let y1 = sampler.standard_normal();
        let u = dispersion.sigma_u * y1 + self.rotation.mean_radial(r, theta);

        let y2 = sampler.standard_normal();
        let v = dispersion.sigma_v * y2 + self.rotation.mean_tangential(r, theta)
            - asymmetric_drift(dispersion.sigma_u);

        let y3 = sampler.standard_normal();
        let w = dispersion.sigma_w * y3 + self.rotation.mean_vertical();

        Ok(KinematicRecord {
            index,
            source_index: record.source_index,
            disk,
            velocity: HeliocentricVelocity { u, v, w },
        })
    }

    /// Assign the whole population in index order, handing every record to
    /// `emit` as soon as it is produced.
    ///
    /// Stops at the first record with an unknown disk label; records before
    /// it have already been emitted, nothing after it is computed.
    ///
    /// Returns the number of records emitted.
    pub fn assign_each<S, F>(
        &self,
        population: &CompactedPopulation,
        sampler: &mut S,
        mut emit: F,
    ) -> KinematicsResult<usize>
    where
        S: GaussianSampler + ?Sized,
        F: FnMut(KinematicRecord),
    {
        let total = population.len();
        info!(white_dwarfs = total, geometry = %population.geometry(), "assigning velocities");

        for (index, record) in population.iter().enumerate() {
            emit(self.assign_record(index, total, record, sampler)?);
        }

        info!(white_dwarfs = total, "velocities assigned");
        Ok(total)
    }

    /// Assign the whole population from one shared sampler and collect the result.
    pub fn assign_all<S: GaussianSampler + ?Sized>(
        &self,
        population: &CompactedPopulation,
        sampler: &mut S,
    ) -> KinematicsResult<Vec<KinematicRecord>> {
        let mut records = Vec::with_capacity(population.len());
        self.assign_each(population, sampler, |record| records.push(record))?;
        Ok(records)
    }

    /// Assign every record from its own substream of `seed`.
    ///
    /// The result of record i depends only on `seed`, `i` and the record, so
    /// records may be evaluated in any order or on any thread.
    pub fn assign_with_substreams(
        &self,
        population: &CompactedPopulation,
        seed: u64,
    ) -> KinematicsResult<Vec<KinematicRecord>> {
        let total = population.len();
        population
            .iter()
            .enumerate()
            .map(|(index, record)| {
                let mut sampler = SeededSampler::for_record(seed, index);
                self.assign_record(index, total, record, &mut sampler)
            })
            .collect()
    }
}

/// Compact `stars` to their white dwarfs and assign velocities from a
/// sampler seeded with `config.seed`.
pub fn assign_population_velocities(
    stars: &[StarRecord],
    config: &KinematicsConfig,
) -> KinematicsResult<Vec<KinematicRecord>> {
    let population = compact_white_dwarfs(stars, config.geometry);
    let mut sampler = config.sampler();
    VelocityAssigner::from_config(config).assign_all(&population, &mut sampler)
}
