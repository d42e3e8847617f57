use std::ops::{Add, Mul, Neg, Sub};

use serde::{Deserialize, Serialize};

use crate::length::{KPC_TO_KM, Length};
use crate::velocity::Velocity;

/// Angular velocity in km/s/kpc, the unit the Oort constants are quoted in.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AngularVelocity(pub f64);

impl AngularVelocity {
    pub fn from_km_per_sec_per_kpc(value: f64) -> Self {
        Self(value)
    }

    pub fn from_rad_per_sec(value: f64) -> Self {
        Self(value * KPC_TO_KM)
    }

    pub fn to_km_per_sec_per_kpc(&self) -> f64 {
        self.0
    }

    pub fn to_rad_per_sec(&self) -> f64 {
        self.0 / KPC_TO_KM
    }

    pub fn is_finite(&self) -> bool {
        self.0.is_finite()
    }
}

impl Add for AngularVelocity {
    type Output = AngularVelocity;

    fn add(self, rhs: AngularVelocity) -> AngularVelocity {
        AngularVelocity(self.0 + rhs.0)
    }
}

impl Sub for AngularVelocity {
    type Output = AngularVelocity;

    fn sub(self, rhs: AngularVelocity) -> AngularVelocity {
        AngularVelocity(self.0 - rhs.0)
    }
}

impl Neg for AngularVelocity {
    type Output = AngularVelocity;

    fn neg(self) -> AngularVelocity {
        AngularVelocity(-self.0)
    }
}

impl Mul<f64> for AngularVelocity {
    type Output = AngularVelocity;

    fn mul(self, rhs: f64) -> AngularVelocity {
        AngularVelocity(self.0 * rhs)
    }
}

/// Angular velocity times a radius gives a linear velocity, e.g. (A − B)·R0
impl Mul<Length> for AngularVelocity {
    type Output = Velocity;

    fn mul(self, rhs: Length) -> Velocity {
        Velocity::from_km_per_sec(self.0 * rhs.to_kpc())
    }
}
