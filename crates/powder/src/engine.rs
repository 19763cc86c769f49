//! Single in-place pass over the registry that advances the world one tick.
//!
//! Particles are visited in registry (insertion) order and their moves are
//! written straight into the grid, so particle N sees the moves already made
//! by particles `0..N` this tick. A particle pushed aside by another mover is
//! stamped with the current tick and skipped when its own turn comes.

use rand::Rng;
use tracing::{debug, trace};

use crate::api::Neighborhood;
use crate::cell::Cell;
use crate::elements::{self, Motion};
use crate::particle::{ParticleId, Registry, Tick};
use crate::Grid;

/// What one pass did.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct StepReport {
    pub tick: Tick,
    /// Particles whose rule was evaluated this tick.
    pub evaluated: usize,
    pub moved: usize,
    pub settled: usize,
    /// Particles relocated by another particle sinking into their cell.
    pub displaced: usize,
}

/// Advance `grid` and `registry` through tick `tick`.
///
/// Does not touch the clock; the caller advances it once the pass returns.
///
/// # Panics
///
/// Panics if a live particle's cell does not name it as occupant. Grid and
/// registry have diverged and no further tick can be trusted.
pub fn step<R: Rng + ?Sized>(
    grid: &mut Grid,
    registry: &mut Registry,
    tick: Tick,
    rng: &mut R,
) -> StepReport {
    let mut report = StepReport {
        tick,
        ..StepReport::default()
    };
    let ids: Vec<ParticleId> = registry.ids().collect();

    for id in ids {
        let particle = registry[id];
        if !particle.alive || particle.updated_at(tick) {
            continue;
        }
        report.evaluated += 1;

        let (x, y) = particle.position();
        let occupant = grid.cell(x, y).occupant;
        assert_eq!(
            occupant,
            Some(id),
            "particle {id} ({}) lost its cell at ({x}, {y})",
            particle.material
        );

        let motion = elements::evaluate(particle.material, &Neighborhood::new(grid, x, y), rng);
        match motion {
            Motion::Stay => {}
            Motion::Settle => {
                registry[id].alive = false;
                report.settled += 1;
                debug!(particle = %id, material = %particle.material, x, y, tick, "settled");
            }
            Motion::Move { dx, dy, displaced } => {
                let (nx, ny) = (x + dx, y + dy);
                let target = grid.cell(nx, ny);
                debug_assert_eq!(target.material, displaced);

                // The displaced content, owner included, takes the vacated cell.
                grid.set_cell(x, y, target);
                grid.set_cell(nx, ny, Cell::occupied(particle.material, id));

                if let Some(other) = target.occupant {
                    let pushed = &mut registry[other];
                    pushed.x = x;
                    pushed.y = y;
                    pushed.last_updated = Some(tick);
                    report.displaced += 1;
                }

                let mover = &mut registry[id];
                mover.x = nx;
                mover.y = ny;
                report.moved += 1;
            }
        }
        registry[id].last_updated = Some(tick);
    }

    trace!(
        tick,
        evaluated = report.evaluated,
        moved = report.moved,
        settled = report.settled,
        displaced = report.displaced,
        "tick complete"
    );
    report
}
