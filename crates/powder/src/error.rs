//! Error types surfaced at the crate boundary.
//!
//! Every variant here is recoverable at the call site. Corrupted simulation
//! state is not represented: the tick engine panics instead.

use thiserror::Error;

use crate::cell::Material;

/// A material tag or name that does not map to a known kind.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MaterialError {
    #[error("unknown material tag {0}")]
    UnknownTag(u8),
    #[error("unknown material name `{0}`")]
    UnknownName(String),
}

/// Reasons a spawn request is refused. A refused spawn leaves the grid,
/// registry and budget untouched.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum SpawnError {
    #[error("({x}, {y}) is outside the {width}x{height} grid")]
    OutOfBounds {
        x: i32,
        y: i32,
        width: usize,
        height: usize,
    },
    #[error("particle budget exhausted")]
    BudgetExhausted,
    #[error("({x}, {y}) already holds {occupant}")]
    CellOccupied { x: i32, y: i32, occupant: Material },
    #[error("cannot spawn a particle of Empty")]
    EmptyMaterial,
}

/// Errors raised when validating a simulation configuration.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid configuration: {0}")]
    InvalidConfig(&'static str),
}

/// Errors raised while parsing a textual spawn command such as `sand 2 0`.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CommandError {
    #[error("empty command")]
    Empty,
    #[error(transparent)]
    UnknownMaterial(#[from] MaterialError),
    #[error("missing {0} coordinate")]
    MissingCoordinate(&'static str),
    #[error("invalid {axis} coordinate `{value}`")]
    InvalidCoordinate { axis: &'static str, value: String },
    #[error("unexpected trailing input `{0}`")]
    TrailingInput(String),
}
