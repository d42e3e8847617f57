use std::ops::{Add, Div, Mul, Neg, Sub};

use serde::{Deserialize, Serialize};

use crate::length::KPC_TO_KM;

/// Kilometres in one astronomical unit
pub const AU_TO_KM: f64 = 1.495_978_707e8;

/// Seconds in one Julian year
pub const SECONDS_PER_YEAR: f64 = 3.155_76e7;

// Convert between km/s and AU/year
pub const KM_SEC_TO_AU_YEAR: f64 = SECONDS_PER_YEAR / AU_TO_KM;

/// Seconds in one million years
pub const SECONDS_PER_MYR: f64 = SECONDS_PER_YEAR * 1.0e6;

/// A stellar velocity component.
///
/// Galactic kinematics quote velocities in km/s, so that is the base unit.
///
/// # Examples
///
/// ```rust
/// use units::Velocity;
///
/// let lag = Velocity::from_km_per_sec(-12.0);
/// assert_eq!(lag.to_meters_per_sec(), -12_000.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Velocity(f64); // Base unit: km/s

impl Velocity {
    pub fn zero() -> Self {
        Self(0.0)
    }

    pub fn from_km_per_sec(value: f64) -> Self {
        Self(value)
    }

    pub fn from_meters_per_sec(value: f64) -> Self {
        Self(value / 1000.0)
    }

    pub fn from_au_per_year(value: f64) -> Self {
        Self(value / KM_SEC_TO_AU_YEAR)
    }

    /// Kiloparsecs per million years, the unit orbit integrators tend to use.
    pub fn from_kpc_per_myr(value: f64) -> Self {
        Self(value * KPC_TO_KM / SECONDS_PER_MYR)
    }

    pub fn to_km_per_sec(&self) -> f64 {
        self.0
    }

    pub fn to_meters_per_sec(&self) -> f64 {
        self.0 * 1000.0
    }

    pub fn to_au_per_year(&self) -> f64 {
        self.0 * KM_SEC_TO_AU_YEAR
    }

    pub fn to_kpc_per_myr(&self) -> f64 {
        self.0 * SECONDS_PER_MYR / KPC_TO_KM
    }

    /// Square of the value in (km/s)², e.g. for variances.
    pub fn squared(&self) -> f64 {
        self.0 * self.0
    }

    pub fn abs(self) -> Self {
        Self(self.0.abs())
    }

    pub fn is_finite(&self) -> bool {
        self.0.is_finite()
    }
}

impl Add for Velocity {
    type Output = Velocity;

    fn add(self, rhs: Velocity) -> Velocity {
        Velocity(self.0 + rhs.0)
    }
}

impl Sub for Velocity {
    type Output = Velocity;

    fn sub(self, rhs: Velocity) -> Velocity {
        Velocity(self.0 - rhs.0)
    }
}

impl Neg for Velocity {
    type Output = Velocity;

    fn neg(self) -> Velocity {
        Velocity(-self.0)
    }
}

impl Mul<f64> for Velocity {
    type Output = Velocity;

    fn mul(self, rhs: f64) -> Velocity {
        Velocity(self.0 * rhs)
    }
}

/// Allow f64 * Velocity (commutative multiplication)
impl Mul<Velocity> for f64 {
    type Output = Velocity;

    fn mul(self, rhs: Velocity) -> Velocity {
        rhs * self
    }
}

impl Div<f64> for Velocity {
    type Output = Velocity;

    fn div(self, rhs: f64) -> Velocity {
        Velocity(self.0 / rhs)
    }
}

/// Division of Velocity by Velocity returns a dimensionless ratio
impl Div for Velocity {
    type Output = f64;

    fn div(self, rhs: Velocity) -> f64 {
        self.0 / rhs.0
    }
}
