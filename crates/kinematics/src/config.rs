//! Run configuration: random seed, survey geometry and the physical
//! constants of the rotation model.
//!
//! Every field has a default, so a TOML file only lists what it overrides:
//!
//! ```toml
//! seed = 7
//! geometry = "cones"
//!
//! [rotation]
//! oort_a = 15.3
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{KinematicsError, KinematicsResult};
use crate::population::GeometryMode;
use crate::rotation::{RotationConstants, RotationModel, SolarPeculiarVelocity};
use crate::sampling::SeededSampler;

pub const DEFAULT_SEED: u64 = 42;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct KinematicsConfig {
    /// Seed of the single ChaCha stream shared by the whole run
    pub seed: u64,
    pub geometry: GeometryMode,
    pub rotation: RotationConstants,
    pub solar_peculiar_velocity: SolarPeculiarVelocity,
}

impl Default for KinematicsConfig {
    fn default() -> Self {
        Self {
            seed: DEFAULT_SEED,
            geometry: GeometryMode::default(),
            rotation: RotationConstants::default(),
            solar_peculiar_velocity: SolarPeculiarVelocity::default(),
        }
    }
}

impl KinematicsConfig {
    /// Parse and validate a TOML document.
    pub fn from_toml_str(text: &str) -> KinematicsResult<Self> {
        let config: Self =
            toml::from_str(text).map_err(|e| KinematicsError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a TOML file.
    pub fn load(path: impl AsRef<Path>) -> KinematicsResult<Self> {
        let text = fs::read_to_string(path)?;
        Self::from_toml_str(&text)
    }

    /// Reject constants the rotation model cannot work with.
    pub fn validate(&self) -> KinematicsResult<()> {
        let rotation = &self.rotation;
        if !rotation.oort_a.is_finite() || !rotation.oort_b.is_finite() {
            return Err(KinematicsError::Config(format!(
                "Oort constants must be finite, got A = {}, B = {}",
                rotation.oort_a.to_km_per_sec_per_kpc(),
                rotation.oort_b.to_km_per_sec_per_kpc()
            )));
        }
        let r0 = rotation.solar_distance.to_kpc();
        if !(r0.is_finite() && r0 > 0.0) {
            return Err(KinematicsError::Config(format!(
                "solar_distance must be a positive number of kpc, got {}",
                r0
            )));
        }
        let solar = &self.solar_peculiar_velocity;
        if !(solar.u.is_finite() && solar.v.is_finite() && solar.w.is_finite()) {
            return Err(KinematicsError::Config(format!(
                "solar peculiar velocity must be finite, got ({}, {}, {})",
                solar.u.to_km_per_sec(),
                solar.v.to_km_per_sec(),
                solar.w.to_km_per_sec()
            )));
        }
        Ok(())
    }

    pub fn rotation_model(&self) -> RotationModel {
        RotationModel::new(self.rotation, self.solar_peculiar_velocity)
    }

    pub fn sampler(&self) -> SeededSampler {
        SeededSampler::from_seed(self.seed)
    }
}
