use serde::{Deserialize, Serialize};
use std::ops::{Add, Div, Mul, Sub};

pub const KPC_TO_PC: f64 = 1.0e3;
pub const KPC_TO_KM: f64 = 3.085_677_581e16;
pub const PC_TO_AU: f64 = 206_264.806;

/// A galactic length quantity using f64 precision.
///
/// The `Length` struct uses kiloparsecs as the base unit, the natural scale
/// for galactocentric radii and disk scale heights.
///
/// # Examples
///
/// ```rust
/// use units::Length;
///
/// let solar_distance = Length::from_kpc(8.5);
/// let scale_height = Length::from_parsecs(250.0);
///
/// assert_eq!(solar_distance.to_parsecs(), 8500.0);
/// assert_eq!(scale_height.to_kpc(), 0.25);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Deserialize, Serialize)]
#[serde(transparent)]
pub struct Length(f64); // Base unit: kpc

impl Length {
    /// Creates a zero length value
    pub fn zero() -> Self {
        Self(0.0)
    }

    /// Creates a new `Length` from a value in kiloparsecs.
    pub fn from_kpc(value: f64) -> Self {
        Self(value)
    }

    /// Creates a new `Length` from a value in parsecs.
    pub fn from_parsecs(value: f64) -> Self {
        Self(value / KPC_TO_PC)
    }

    /// Creates a new `Length` from a value in astronomical units.
    pub fn from_au(value: f64) -> Self {
        Self(value / (PC_TO_AU * KPC_TO_PC))
    }

    /// Creates a new `Length` from a value in kilometers.
    pub fn from_km(value: f64) -> Self {
        Self(value / KPC_TO_KM)
    }

    /// Returns the length in kiloparsecs.
    pub fn to_kpc(&self) -> f64 {
        self.0
    }

    /// Converts the length to parsecs.
    pub fn to_parsecs(&self) -> f64 {
        self.0 * KPC_TO_PC
    }

    /// Converts the length to astronomical units.
    pub fn to_au(&self) -> f64 {
        self.0 * KPC_TO_PC * PC_TO_AU
    }

    /// Converts the length to kilometers.
    pub fn to_km(&self) -> f64 {
        self.0 * KPC_TO_KM
    }

    /// Returns the minimum of two lengths.
    pub fn min(self, other: Self) -> Self {
        if self.0 < other.0 { self } else { other }
    }

    /// Returns the maximum of two lengths.
    pub fn max(self, other: Self) -> Self {
        if self.0 > other.0 { self } else { other }
    }

    pub fn abs(self) -> Self {
        Self(self.0.abs())
    }

    pub fn is_finite(&self) -> bool {
        self.0.is_finite()
    }
}

impl Add for Length {
    type Output = Length;

    fn add(self, rhs: Length) -> Length {
        Length(self.0 + rhs.0)
    }
}

impl Sub for Length {
    type Output = Length;

    fn sub(self, rhs: Length) -> Length {
        Length(self.0 - rhs.0)
    }
}

impl Mul<f64> for Length {
    type Output = Length;

    fn mul(self, rhs: f64) -> Length {
        Length(self.0 * rhs)
    }
}

impl Div<f64> for Length {
    type Output = Length;

    fn div(self, rhs: f64) -> Length {
        Length(self.0 / rhs)
    }
}

/// Division of Length by Length returns a dimensionless ratio
impl Div for Length {
    type Output = f64;

    fn div(self, rhs: Self) -> f64 {
        self.0 / rhs.0
    }
}

/// Allow f64 * Length (commutative multiplication)
impl Mul<Length> for f64 {
    type Output = Length;

    fn mul(self, rhs: Length) -> Length {
        rhs * self
    }
}
