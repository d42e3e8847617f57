//! Differential galactic rotation about the solar position.
//!
//! The mean motion of a star at galactocentric radius `r` and azimuth `θ` is
//! the solar peculiar velocity plus a first-order expansion of the rotation
//! curve in the Oort constants:
//!
//! ```text
//! ⟨U⟩ = U0 + ((3 − 2r/R0)·A − B) · r · sin θ
//! ⟨V⟩ = V0 + ((3 − 2r/R0)·A − B) · r · cos θ − (A − B)·R0
//! ```
//!
//! Angles are in radians and taken as given by the coordinate producer.

use serde::{Deserialize, Serialize};
use units::{AngularVelocity, Length, Velocity};

/// Oort constant A in km/s/kpc
pub const OORT_A_KM_S_KPC: f64 = 14.4;

/// Oort constant B in km/s/kpc
pub const OORT_B_KM_S_KPC: f64 = -12.8;

/// Galactocentric distance of the Sun in kpc
pub const SOLAR_GALACTOCENTRIC_DISTANCE_KPC: f64 = 8.5;

/// Solar peculiar velocity (U0, V0, W0) in km/s
pub const SOLAR_PECULIAR_VELOCITY_KM_S: [f64; 3] = [-11.0, -12.0, -7.0];

fn streaming_gradient(r: f64, a: f64, b: f64, r0: f64) -> f64 {
    ((3.0 - 2.0 * r / r0) * a - b) * r
}

/// Rotation-corrected mean radial velocity (km/s).
///
/// # Arguments
/// * `r` - Galactocentric radius in kpc
/// * `theta` - Galactocentric azimuth in radians
/// * `a`, `b` - Oort constants in km/s/kpc
/// * `r0` - Solar galactocentric distance in kpc
/// * `u0` - Solar peculiar U in km/s
pub fn mean_radial_velocity(r: f64, theta: f64, a: f64, b: f64, r0: f64, u0: f64) -> f64 {
    u0 + streaming_gradient(r, a, b, r0) * theta.sin()
}

/// Rotation-corrected mean tangential velocity (km/s).
///
/// Same arguments as [`mean_radial_velocity`], with the solar peculiar V.
///
/// # Examples
///
/// ```
/// use kinematics::rotation::mean_tangential_velocity;
///
/// // A star at the solar position shares the Sun's mean motion
/// let v = mean_tangential_velocity(8.5, 0.0, 14.4, -12.8, 8.5, -12.0);
/// assert!((v - -12.0).abs() < 1e-9);
/// ```
pub fn mean_tangential_velocity(r: f64, theta: f64, a: f64, b: f64, r0: f64, v0: f64) -> f64 {
    v0 + streaming_gradient(r, a, b, r0) * theta.cos() - (a - b) * r0
}

/// Oort constants and the solar galactocentric distance, fixed for a run.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RotationConstants {
    pub oort_a: AngularVelocity,
    pub oort_b: AngularVelocity,
    pub solar_distance: Length,
}

impl Default for RotationConstants {
    fn default() -> Self {
        Self {
            oort_a: AngularVelocity::from_km_per_sec_per_kpc(OORT_A_KM_S_KPC),
            oort_b: AngularVelocity::from_km_per_sec_per_kpc(OORT_B_KM_S_KPC),
            solar_distance: Length::from_kpc(SOLAR_GALACTOCENTRIC_DISTANCE_KPC),
        }
    }
}

impl RotationConstants {
    /// Circular rotation speed at the solar circle, (A − B)·R0.
    pub fn circular_velocity(&self) -> Velocity {
        (self.oort_a - self.oort_b) * self.solar_distance
    }
}

/// Velocity of the Sun relative to the local standard of rest.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SolarPeculiarVelocity {
    pub u: Velocity,
    pub v: Velocity,
    pub w: Velocity,
}

impl Default for SolarPeculiarVelocity {
    fn default() -> Self {
        let [u, v, w] = SOLAR_PECULIAR_VELOCITY_KM_S;
        Self {
            u: Velocity::from_km_per_sec(u),
            v: Velocity::from_km_per_sec(v),
            w: Velocity::from_km_per_sec(w),
        }
    }
}

/// Mean heliocentric motion as a function of galactocentric position.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct RotationModel {
    pub constants: RotationConstants,
    pub solar_motion: SolarPeculiarVelocity,
}

impl RotationModel {
    pub fn new(constants: RotationConstants, solar_motion: SolarPeculiarVelocity) -> Self {
        Self {
            constants,
            solar_motion,
        }
    }

    /// Mean U at radius `r` and azimuth `theta` (radians).
    pub fn mean_radial(&self, r: Length, theta: f64) -> Velocity {
        Velocity::from_km_per_sec(mean_radial_velocity(
            r.to_kpc(),
            theta,
            self.constants.oort_a.to_km_per_sec_per_kpc(),
            self.constants.oort_b.to_km_per_sec_per_kpc(),
            self.constants.solar_distance.to_kpc(),
            self.solar_motion.u.to_km_per_sec(),
        ))
    }

    /// Mean V at radius `r` and azimuth `theta` (radians).
    pub fn mean_tangential(&self, r: Length, theta: f64) -> Velocity {
        Velocity::from_km_per_sec(mean_tangential_velocity(
            r.to_kpc(),
            theta,
            self.constants.oort_a.to_km_per_sec_per_kpc(),
            self.constants.oort_b.to_km_per_sec_per_kpc(),
            self.constants.solar_distance.to_kpc(),
            self.solar_motion.v.to_km_per_sec(),
        ))
    }

    /// Mean W. The vertical component carries no rotation term.
    pub fn mean_vertical(&self) -> Velocity {
        self.solar_motion.w
    }
}
