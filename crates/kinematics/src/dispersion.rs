//! Velocity dispersions of the galactic disk components.

use serde::{Deserialize, Serialize};
use units::Velocity;

use crate::disk::DiskMembership;
use crate::error::{KinematicsError, KinematicsResult};

/// Thin disk dispersions (σ_U, σ_V, σ_W) in km/s
pub const THIN_DISK_DISPERSION_KM_S: [f64; 3] = [32.4, 23.0, 18.1];

/// Thick disk dispersions (σ_U, σ_V, σ_W) in km/s
pub const THICK_DISK_DISPERSION_KM_S: [f64; 3] = [50.0, 56.0, 34.0];

/// Anisotropic Gaussian velocity dispersion along the U, V and W axes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DispersionTriple {
    pub sigma_u: Velocity,
    pub sigma_v: Velocity,
    pub sigma_w: Velocity,
}

impl DispersionTriple {
    pub fn from_km_per_sec([sigma_u, sigma_v, sigma_w]: [f64; 3]) -> Self {
        Self {
            sigma_u: Velocity::from_km_per_sec(sigma_u),
            sigma_v: Velocity::from_km_per_sec(sigma_v),
            sigma_w: Velocity::from_km_per_sec(sigma_w),
        }
    }

    /// Fixed dispersion of a disk component.
    ///
    /// # Examples
    ///
    /// ```
    /// use kinematics::{DiskMembership, DispersionTriple};
    ///
    /// let thin = DispersionTriple::for_disk(DiskMembership::Thin);
    /// assert_eq!(thin.sigma_u.to_km_per_sec(), 32.4);
    /// ```
    pub fn for_disk(disk: DiskMembership) -> Self {
        match disk {
            DiskMembership::Thin => Self::from_km_per_sec(THIN_DISK_DISPERSION_KM_S),
            DiskMembership::Thick => Self::from_km_per_sec(THICK_DISK_DISPERSION_KM_S),
        }
    }
}

/// Resolve the dispersion for the raw disk code of compacted record `index`.
///
/// `total` is the number of white dwarfs in the batch and only feeds the
/// diagnostic.
///
/// # Errors
///
/// [`KinematicsError::UnknownDiskMembership`] for any code other than
/// thin (1) or thick (2).
pub fn dispersion_for_code(
    index: usize,
    total: usize,
    code: i32,
) -> KinematicsResult<(DiskMembership, DispersionTriple)> {
    let disk = DiskMembership::try_from(code).map_err(|value| {
        KinematicsError::UnknownDiskMembership {
            index,
            total,
            value,
        }
    })?;
    Ok((disk, DispersionTriple::for_disk(disk)))
}
