//! Spawn controller: the only way particles enter the world.

use tracing::{debug, warn};

use crate::cell::{Cell, Material};
use crate::error::SpawnError;
use crate::particle::{ParticleId, Registry, Tick};
use crate::Grid;

/// Lifetime particle quota. Spawns draw it down; nothing refills it.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Budget {
    total: usize,
    remaining: usize,
}

impl Budget {
    #[must_use]
    pub fn new(total: usize) -> Self {
        Self {
            total,
            remaining: total,
        }
    }

    #[must_use]
    pub fn total(&self) -> usize {
        self.total
    }

    #[must_use]
    pub fn remaining(&self) -> usize {
        self.remaining
    }

    #[must_use]
    pub fn is_exhausted(&self) -> bool {
        self.remaining == 0
    }
}

/// Place a new `material` particle at `(x, y)`, stamped with `tick`.
///
/// Checks run in order: budget, bounds, material, occupancy. A refused spawn
/// leaves grid, registry and budget untouched. Occupied targets are refused
/// rather than overwritten.
pub fn spawn(
    grid: &mut Grid,
    registry: &mut Registry,
    budget: &mut Budget,
    tick: Tick,
    material: Material,
    x: i32,
    y: i32,
) -> Result<ParticleId, SpawnError> {
    if budget.is_exhausted() {
        warn!(total = budget.total, %material, x, y, "particle budget exhausted");
        return Err(SpawnError::BudgetExhausted);
    }
    if !grid.in_bounds(x, y) {
        return Err(SpawnError::OutOfBounds {
            x,
            y,
            width: grid.width,
            height: grid.height,
        });
    }
    if material == Material::Empty {
        return Err(SpawnError::EmptyMaterial);
    }
    let occupant = grid.get(x, y);
    if occupant != Material::Empty {
        return Err(SpawnError::CellOccupied { x, y, occupant });
    }

    let id = registry.insert(material, x, y, tick);
    grid.set_cell(x, y, Cell::occupied(material, id));
    budget.remaining -= 1;
    debug!(particle = %id, %material, x, y, tick, remaining = budget.remaining, "spawned");
    Ok(id)
}
