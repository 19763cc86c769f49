//! Material and Cell types for the simulation grid.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::MaterialError;
use crate::particle::ParticleId;

/// Discriminant values are the tags hosts send over the wasm boundary and the
/// digits printed by the text dump. Do not reorder.
#[repr(u8)]
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Material {
    #[default]
    Empty = 0,
    Sand = 1,
    Metal = 2,
    Stone = 3,
    Water = 4,
    Steam = 5,
}

impl Material {
    pub const ALL: [Material; 6] = [
        Material::Empty,
        Material::Sand,
        Material::Metal,
        Material::Stone,
        Material::Water,
        Material::Steam,
    ];

    /// Lowercase name used by spawn commands.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Empty => "empty",
            Self::Sand => "sand",
            Self::Metal => "metal",
            Self::Stone => "stone",
            Self::Water => "water",
            Self::Steam => "steam",
        }
    }

    /// Kinds a falling solid may sink into.
    #[must_use]
    pub fn yields_to_solids(self) -> bool {
        matches!(self, Self::Empty | Self::Water)
    }
}

impl fmt::Display for Material {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "Empty"),
            Self::Sand => write!(f, "Sand"),
            Self::Metal => write!(f, "Metal"),
            Self::Stone => write!(f, "Stone"),
            Self::Water => write!(f, "Water"),
            Self::Steam => write!(f, "Steam"),
        }
    }
}

impl TryFrom<u8> for Material {
    type Error = MaterialError;

    fn try_from(tag: u8) -> Result<Self, Self::Error> {
        Self::ALL
            .get(usize::from(tag))
            .copied()
            .ok_or(MaterialError::UnknownTag(tag))
    }
}

impl FromStr for Material {
    type Err = MaterialError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.to_ascii_lowercase();
        if lower == "air" {
            return Ok(Self::Empty);
        }
        Self::ALL
            .into_iter()
            .find(|m| m.name() == lower)
            .ok_or_else(|| MaterialError::UnknownName(s.to_owned()))
    }
}

/// Grid cell: the material shown at a coordinate plus the particle that owns
/// it, if any. Settled particles keep their occupancy.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
pub struct Cell {
    pub material: Material,
    pub occupant: Option<ParticleId>,
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.material)
    }
}

impl Cell {
    #[must_use]
    pub fn new(material: Material) -> Self {
        Self {
            material,
            occupant: None,
        }
    }

    #[must_use]
    pub fn empty() -> Self {
        Self::new(Material::Empty)
    }

    #[must_use]
    pub fn occupied(material: Material, id: ParticleId) -> Self {
        Self {
            material,
            occupant: Some(id),
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.material == Material::Empty
    }
}
