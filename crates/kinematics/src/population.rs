//! Star records handed over by the population synthesis, and their
//! compaction down to the white dwarfs this crate assigns velocities to.

use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::debug;
use units::Length;

/// Lower bound (exclusive) of the white dwarf flag band around 1.0
pub const WHITE_DWARF_FLAG_MIN: f64 = 0.95;

/// Upper bound (exclusive) of the white dwarf flag band around 1.0
pub const WHITE_DWARF_FLAG_MAX: f64 = 1.05;

/// Float-safe equality test against the 1.0 white dwarf sentinel.
pub fn is_white_dwarf_flag(flag: f64) -> bool {
    flag > WHITE_DWARF_FLAG_MIN && flag < WHITE_DWARF_FLAG_MAX
}

/// Survey geometry the population was generated for.
///
/// Only `"cones"` is recognised by name. Every other value behaves as the
/// full-sphere geometry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum GeometryMode {
    Cones,
    #[default]
    Sphere,
}

impl GeometryMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            GeometryMode::Cones => "cones",
            GeometryMode::Sphere => "sphere",
        }
    }
}

impl FromStr for GeometryMode {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "cones" => GeometryMode::Cones,
            _ => GeometryMode::Sphere,
        })
    }
}

impl From<&str> for GeometryMode {
    fn from(s: &str) -> Self {
        match s.parse() {
            Ok(mode) => mode,
            Err(never) => match never {},
        }
    }
}

impl From<String> for GeometryMode {
    fn from(s: String) -> Self {
        GeometryMode::from(s.as_str())
    }
}

impl From<GeometryMode> for String {
    fn from(mode: GeometryMode) -> Self {
        mode.as_str().to_owned()
    }
}

impl fmt::Display for GeometryMode {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One star of the synthetic population, as produced upstream.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StarRecord {
    pub vertical_height: Length,
    pub galactocentric_radius: Length,
    /// Radians
    pub galactocentric_azimuth: f64,
    /// ~1.0 marks a white dwarf
    pub white_dwarf_flag: f64,
    /// Raw classifier output: 1 = thin disk, 2 = thick disk
    pub disk_membership: i32,
}

impl StarRecord {
    pub fn is_white_dwarf(&self) -> bool {
        is_white_dwarf_flag(self.white_dwarf_flag)
    }
}

/// A white dwarf after compaction.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WhiteDwarfRecord {
    /// Position of the star in the uncompacted population
    pub source_index: usize,
    pub vertical_height: Length,
    pub galactocentric_radius: Length,
    /// Radians
    pub galactocentric_azimuth: f64,
    pub disk_membership: i32,
}

/// Dense, order-preserving sequence of the white dwarfs of a population.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CompactedPopulation {
    geometry: GeometryMode,
    records: Vec<WhiteDwarfRecord>,
}

impl CompactedPopulation {
    pub fn geometry(&self) -> GeometryMode {
        self.geometry
    }

    pub fn records(&self) -> &[WhiteDwarfRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &WhiteDwarfRecord> {
        self.records.iter()
    }

    pub fn into_records(self) -> Vec<WhiteDwarfRecord> {
        self.records
    }
}

/// Select the white dwarfs of `stars` into a new dense sequence.
///
/// The k-th output record is the k-th star, in scan order, whose flag lies
/// in (0.95, 1.05). Height and disk label always travel with that star.
///
/// In [`GeometryMode::Cones`] the radius and azimuth are compacted along
/// with the height. In any other geometry they are not: the producer
/// already stores them in white dwarf order, so output record k takes the
/// radius and azimuth found at position k of `stars`.
///
/// # Example
/// ```
/// use kinematics::population::{GeometryMode, StarRecord, compact_white_dwarfs};
/// use units::Length;
///
/// let star = |flag: f64| StarRecord {
///     vertical_height: Length::from_kpc(0.1),
///     galactocentric_radius: Length::from_kpc(8.0),
///     galactocentric_azimuth: 0.0,
///     white_dwarf_flag: flag,
///     disk_membership: 1,
/// };
///
/// let population = compact_white_dwarfs(&[star(0.0), star(1.0)], GeometryMode::Cones);
/// assert_eq!(population.len(), 1);
/// assert_eq!(population.records()[0].source_index, 1);
/// ```
pub fn compact_white_dwarfs(stars: &[StarRecord], geometry: GeometryMode) -> CompactedPopulation {
    let records: Vec<WhiteDwarfRecord> = stars
        .iter()
        .enumerate()
        .filter(|(_, star)| star.is_white_dwarf())
        .enumerate()
        .map(|(k, (source_index, star))| {
            let position = match geometry {
                GeometryMode::Cones => star,
                GeometryMode::Sphere => &stars[k],
            };
            WhiteDwarfRecord {
                source_index,
                vertical_height: star.vertical_height,
                galactocentric_radius: position.galactocentric_radius,
                galactocentric_azimuth: position.galactocentric_azimuth,
                disk_membership: star.disk_membership,
            }
        })
        .collect();

    debug!(
        stars = stars.len(),
        white_dwarfs = records.len(),
        %geometry,
        "compacted population"
    );

    CompactedPopulation { geometry, records }
}
