//! Textual spawn commands of the form `<material> <x> <y>`, e.g. `sand 2 0`.

use std::fmt;
use std::str::FromStr;

use crate::cell::Material;
use crate::error::CommandError;

/// A parsed request to place one particle.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct SpawnRequest {
    pub material: Material,
    pub x: i32,
    pub y: i32,
}

impl fmt::Display for SpawnRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.material.name(), self.x, self.y)
    }
}

fn coordinate<'a>(
    parts: &mut impl Iterator<Item = &'a str>,
    axis: &'static str,
) -> Result<i32, CommandError> {
    let raw = parts.next().ok_or(CommandError::MissingCoordinate(axis))?;
    raw.parse().map_err(|_| CommandError::InvalidCoordinate {
        axis,
        value: raw.to_owned(),
    })
}

impl FromStr for SpawnRequest {
    type Err = CommandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = s.split_whitespace();
        let material = parts.next().ok_or(CommandError::Empty)?.parse::<Material>()?;
        let x = coordinate(&mut parts, "x")?;
        let y = coordinate(&mut parts, "y")?;
        if let Some(extra) = parts.next() {
            return Err(CommandError::TrailingInput(extra.to_owned()));
        }
        Ok(Self { material, x, y })
    }
}
