use std::fmt;

use serde::{Deserialize, Serialize};

/// Galactic disk component a star was classified into upstream.
///
/// Producers hand the label over as an integer code, `1` for the thin disk
/// and `2` for the thick disk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DiskMembership {
    Thin,
    Thick,
}

impl DiskMembership {
    pub const THIN_CODE: i32 = 1;
    pub const THICK_CODE: i32 = 2;

    pub fn code(&self) -> i32 {
        match self {
            DiskMembership::Thin => Self::THIN_CODE,
            DiskMembership::Thick => Self::THICK_CODE,
        }
    }
}

/// Fails with the unrecognised code itself.
impl TryFrom<i32> for DiskMembership {
    type Error = i32;

    fn try_from(code: i32) -> Result<Self, Self::Error> {
        match code {
            Self::THIN_CODE => Ok(DiskMembership::Thin),
            Self::THICK_CODE => Ok(DiskMembership::Thick),
            other => Err(other),
        }
    }
}

impl fmt::Display for DiskMembership {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let str = match self {
            DiskMembership::Thin => "thin",
            DiskMembership::Thick => "thick",
        };
        write!(f, "{}", str)
    }
}
