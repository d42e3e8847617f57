//! White dwarf kinematics for synthetic galactic populations.
//!
//! Given the galactocentric positions and disk membership of a simulated
//! population, assigns each white dwarf a heliocentric (U, V, W) velocity
//! drawn around the differential-rotation mean motion with the velocity
//! dispersion of its disk component.

pub mod assigner;
pub mod config;
pub mod disk;
pub mod dispersion;
pub mod error;
pub mod population;
pub mod rotation;
pub mod sampling;
pub mod toomre;

#[cfg(test)]
mod assigner_test;
#[cfg(test)]
mod dispersion_test;

pub use assigner::{
    HeliocentricVelocity, KinematicRecord, VelocityAssigner, assign_population_velocities,
};
pub use config::KinematicsConfig;
pub use disk::DiskMembership;
pub use dispersion::{DispersionTriple, dispersion_for_code};
pub use error::{KinematicsError, KinematicsResult};
pub use population::{
    CompactedPopulation, GeometryMode, StarRecord, WhiteDwarfRecord, compact_white_dwarfs,
};
pub use rotation::{RotationConstants, RotationModel, SolarPeculiarVelocity};
pub use sampling::{GaussianSampler, SeededSampler};
pub use toomre::{ToomreDiagram, ToomrePoint};
