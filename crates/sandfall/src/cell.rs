//! Species stored in the occupancy grid.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Discriminant values are uploaded as-is by `Universe::cells`; do not reorder.
#[repr(u8)]
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Species {
    #[default]
    Empty = 0,
    Sand = 1,
    Salt = 2,
}

impl fmt::Display for Species {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "Empty"),
            Self::Sand => write!(f, "Sand"),
            Self::Salt => write!(f, "Salt"),
        }
    }
}

impl Species {
    /// Decode a discriminant coming from the driver. Unknown values map to `None`.
    #[must_use]
    pub fn from_u8(value: u8) -> Option<Self> {
        match value {
            0 => Some(Self::Empty),
            1 => Some(Self::Sand),
            2 => Some(Self::Salt),
            _ => None,
        }
    }

    /// Display colour as RGB.
    #[must_use]
    pub fn color(self) -> [u8; 3] {
        match self {
            Self::Empty => [0, 0, 0],
            Self::Sand => [235, 168, 52],
            Self::Salt => [200, 200, 200],
        }
    }

    #[must_use]
    pub fn is_empty(self) -> bool {
        self == Self::Empty
    }
}
