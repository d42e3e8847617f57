//! Toomre diagram coordinates: tangential velocity against the combined
//! radial and vertical speed, split by disk component.

use nalgebra::Vector2;
use serde::{Deserialize, Serialize};
use units::Velocity;

use crate::assigner::{HeliocentricVelocity, KinematicRecord};
use crate::disk::DiskMembership;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ToomrePoint {
    /// Tangential velocity, shifted by the requested offset
    pub v: Velocity,
    /// sqrt(U² + W²)
    pub uw: Velocity,
}

impl ToomrePoint {
    /// `v_offset` is added to V, e.g. the solar peculiar V to move the
    /// point into the local standard of rest.
    pub fn from_velocity(velocity: &HeliocentricVelocity, v_offset: Velocity) -> Self {
        let uw = Vector2::new(velocity.u.to_km_per_sec(), velocity.w.to_km_per_sec()).norm();
        Self {
            v: velocity.v + v_offset,
            uw: Velocity::from_km_per_sec(uw),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ToomreDiagram {
    pub thin: Vec<ToomrePoint>,
    pub thick: Vec<ToomrePoint>,
}

impl ToomreDiagram {
    pub fn from_records<'a>(
        records: impl IntoIterator<Item = &'a KinematicRecord>,
        v_offset: Velocity,
    ) -> Self {
        let mut diagram = Self::default();
        for record in records {
            let point = ToomrePoint::from_velocity(&record.velocity, v_offset);
            match record.disk {
                DiskMembership::Thin => diagram.thin.push(point),
                DiskMembership::Thick => diagram.thick.push(point),
            }
        }
        diagram
    }

    pub fn len(&self) -> usize {
        self.thin.len() + self.thick.len()
    }

    pub fn is_empty(&self) -> bool {
        self.thin.is_empty() && self.thick.is_empty()
    }
}
