//! Falling sand powder simulation core.
//!
//! The world lives in two coupled places: a dense [`Grid`] of materials that
//! renderers read, and a sparse [`Registry`] of particles that the tick engine
//! drives. Every occupied grid cell carries the id of the particle that owns
//! it, so a particle pushed out of its cell by another mover is relocated in
//! the same write.

pub mod api;
pub mod cell;
pub mod command;
pub mod config;
pub mod elements;
pub mod engine;
pub mod error;
pub mod particle;
pub mod spawn;
pub mod wasm;

use std::fmt;

use cell::{Cell, Material};
use command::SpawnRequest;
use config::SimConfig;
use engine::StepReport;
use error::{ConfigError, SpawnError};
use particle::{Particle, ParticleId, Registry, Tick};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use spawn::Budget;

/// 2D grid of cells, row-major. Coordinates outside the grid are programming
/// errors: `get` and `set` panic on them, callers check `in_bounds` first.
#[derive(Debug, Clone)]
pub struct Grid {
    pub width: usize,
    pub height: usize,
    cells: Vec<Cell>,
}

impl Grid {
    #[must_use]
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            cells: vec![Cell::empty(); width * height],
        }
    }

    #[must_use]
    pub fn in_bounds(&self, x: i32, y: i32) -> bool {
        x >= 0 && (x as usize) < self.width && y >= 0 && (y as usize) < self.height
    }

    fn index(&self, x: i32, y: i32) -> usize {
        assert!(
            self.in_bounds(x, y),
            "({x}, {y}) is outside the {}x{} grid",
            self.width,
            self.height
        );
        y as usize * self.width + x as usize
    }

    #[must_use]
    pub fn get(&self, x: i32, y: i32) -> Material {
        self.cell(x, y).material
    }

    /// Raw material write. The cell loses any occupant.
    pub fn set(&mut self, x: i32, y: i32, material: Material) {
        self.set_cell(x, y, Cell::new(material));
    }

    #[must_use]
    pub fn cell(&self, x: i32, y: i32) -> Cell {
        self.cells[self.index(x, y)]
    }

    pub fn set_cell(&mut self, x: i32, y: i32, cell: Cell) {
        let i = self.index(x, y);
        self.cells[i] = cell;
    }

    #[must_use]
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    #[must_use]
    pub fn count(&self, material: Material) -> usize {
        self.cells.iter().filter(|c| c.material == material).count()
    }
}

/// Read-only view of the grid handed to renderers between ticks.
#[derive(Debug, Clone, Copy)]
pub struct Snapshot<'a> {
    grid: &'a Grid,
}

impl<'a> Snapshot<'a> {
    #[must_use]
    pub fn width(&self) -> usize {
        self.grid.width
    }

    #[must_use]
    pub fn height(&self) -> usize {
        self.grid.height
    }

    #[must_use]
    pub fn in_bounds(&self, x: i32, y: i32) -> bool {
        self.grid.in_bounds(x, y)
    }

    #[must_use]
    pub fn get(&self, x: i32, y: i32) -> Material {
        self.grid.get(x, y)
    }

    #[must_use]
    pub fn count(&self, material: Material) -> usize {
        self.grid.count(material)
    }

    /// Row-major material tags, one byte per cell.
    pub fn tags(&self) -> impl Iterator<Item = u8> + 'a {
        let grid = self.grid;
        grid.cells.iter().map(|c| c.material as u8)
    }

    /// One slice of cells per row, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &'a [Cell]> + 'a {
        let grid = self.grid;
        grid.cells.chunks(grid.width.max(1))
    }
}

/// One line per row of material tags, e.g. `0 1 0 0 0`.
impl fmt::Display for Snapshot<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.rows() {
            let mut first = true;
            for cell in row {
                if !first {
                    write!(f, " ")?;
                }
                write!(f, "{}", cell.material as u8)?;
                first = false;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Complete simulation state owned by the caller's frame loop.
#[derive(Debug)]
pub struct Simulation<R = StdRng> {
    grid: Grid,
    registry: Registry,
    clock: Tick,
    budget: Budget,
    rng: R,
}

impl Simulation<StdRng> {
    /// Build a simulation from `config`. A configured seed makes every
    /// tie-break reproducible; without one the RNG is seeded from entropy.
    pub fn new(config: &SimConfig) -> Result<Self, ConfigError> {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self::with_rng(config, rng)
    }
}

impl<R: Rng> Simulation<R> {
    /// Build a simulation that draws its tie-breaks from `rng`. The
    /// configured seed is ignored.
    pub fn with_rng(config: &SimConfig, rng: R) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            grid: Grid::new(config.width, config.height),
            registry: Registry::new(),
            clock: 0,
            budget: Budget::new(config.budget()),
            rng,
        })
    }

    /// Place a new `material` particle at `(x, y)`.
    pub fn spawn(&mut self, material: Material, x: i32, y: i32) -> Result<ParticleId, SpawnError> {
        spawn::spawn(
            &mut self.grid,
            &mut self.registry,
            &mut self.budget,
            self.clock,
            material,
            x,
            y,
        )
    }

    pub fn spawn_request(&mut self, request: SpawnRequest) -> Result<ParticleId, SpawnError> {
        self.spawn(request.material, request.x, request.y)
    }

    /// Advance the world by one tick and return what happened.
    pub fn step(&mut self) -> StepReport {
        let report = engine::step(&mut self.grid, &mut self.registry, self.clock, &mut self.rng);
        self.clock += 1;
        report
    }

    #[must_use]
    pub fn snapshot(&self) -> Snapshot<'_> {
        Snapshot { grid: &self.grid }
    }

    /// Number of completed ticks.
    #[must_use]
    pub fn tick(&self) -> Tick {
        self.clock
    }

    #[must_use]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    #[must_use]
    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    #[must_use]
    pub fn particle(&self, id: ParticleId) -> Option<&Particle> {
        self.registry.get(id)
    }

    #[must_use]
    pub fn particle_count(&self) -> usize {
        self.registry.len()
    }

    #[must_use]
    pub fn live_count(&self) -> usize {
        self.registry.live_count()
    }

    #[must_use]
    pub fn remaining_budget(&self) -> usize {
        self.budget.remaining()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn seeded(width: usize, height: usize, seed: u64) -> Simulation {
        let config = SimConfig {
            width,
            height,
            budget: None,
            seed: Some(seed),
        };
        Simulation::new(&config).unwrap()
    }

    #[test]
    fn grid_new_initializes_all_empty() {
        let grid = Grid::new(5, 5);
        assert_eq!(grid.width, 5);
        assert_eq!(grid.height, 5);
        assert_eq!(grid.cells().len(), 25);
        assert!(grid.cells().iter().all(|c| *c == Cell::empty()));
    }

    #[test]
    fn grid_get_set_in_bounds() {
        let mut grid = Grid::new(8, 4);
        grid.set(7, 3, Material::Stone);
        assert_eq!(grid.get(7, 3), Material::Stone);
        assert_eq!(grid.cell(7, 3).occupant, None);
        assert_eq!(grid.count(Material::Stone), 1);
    }

    #[test]
    fn grid_in_bounds_checks() {
        let grid = Grid::new(5, 5);
        assert!(grid.in_bounds(0, 0));
        assert!(grid.in_bounds(4, 4));
        assert!(!grid.in_bounds(-1, 0));
        assert!(!grid.in_bounds(5, 0));
        assert!(!grid.in_bounds(0, -1));
        assert!(!grid.in_bounds(0, 5));
    }

    #[test]
    #[should_panic(expected = "outside the 5x5 grid")]
    fn grid_get_out_of_bounds_panics() {
        let grid = Grid::new(5, 5);
        let _ = grid.get(5, 0);
    }

    #[test]
    #[should_panic(expected = "outside the 5x5 grid")]
    fn grid_set_out_of_bounds_panics() {
        let mut grid = Grid::new(5, 5);
        grid.set(0, -1, Material::Sand);
    }

    proptest! {
        #[test]
        fn prop_grid_set_touches_one_cell(
            x in 0i32..16,
            y in 0i32..16,
            tag in 0u8..6,
        ) {
            let material = Material::try_from(tag).unwrap();
            let mut grid = Grid::new(16, 16);
            grid.set(x, y, material);
            prop_assert_eq!(grid.get(x, y), material);
            let others = grid
                .cells()
                .iter()
                .enumerate()
                .filter(|(i, _)| *i != y as usize * 16 + x as usize)
                .all(|(_, c)| c.is_empty());
            prop_assert!(others);
        }
    }

    #[test]
    fn snapshot_display_prints_tag_rows() {
        let mut sim = seeded(3, 2, 1);
        sim.spawn(Material::Metal, 1, 0).unwrap();
        sim.spawn(Material::Steam, 2, 1).unwrap();
        assert_eq!(sim.snapshot().to_string(), "0 2 0\n0 0 5\n");
    }

    #[test]
    fn snapshot_exposes_tags_and_counts() {
        let mut sim = seeded(3, 3, 1);
        sim.spawn(Material::Metal, 0, 0).unwrap();
        let snap = sim.snapshot();
        assert_eq!(snap.width(), 3);
        assert_eq!(snap.height(), 3);
        assert_eq!(snap.get(0, 0), Material::Metal);
        assert_eq!(snap.count(Material::Empty), 8);
        let tags: Vec<u8> = snap.tags().collect();
        assert_eq!(tags, vec![2, 0, 0, 0, 0, 0, 0, 0, 0]);
        assert_eq!(snap.rows().count(), 3);
    }

    #[test]
    fn step_advances_clock() {
        let mut sim = seeded(5, 5, 3);
        assert_eq!(sim.tick(), 0);
        let report = sim.step();
        assert_eq!(report.tick, 0);
        sim.step();
        assert_eq!(sim.tick(), 2);
    }

    #[test]
    fn counts_track_spawns_and_settling() {
        let mut sim = seeded(5, 5, 9);
        sim.spawn(Material::Stone, 0, 4).unwrap();
        sim.spawn(Material::Metal, 2, 2).unwrap();
        assert_eq!(sim.particle_count(), 2);
        assert_eq!(sim.live_count(), 2);
        assert_eq!(sim.remaining_budget(), 23);
        sim.step();
        assert_eq!(sim.particle_count(), 2);
        assert_eq!(sim.live_count(), 1);
    }

    #[test]
    fn same_seed_same_world() {
        let mut a = seeded(8, 8, 42);
        let mut b = seeded(8, 8, 42);
        for (i, material) in [Material::Water, Material::Steam, Material::Sand]
            .into_iter()
            .cycle()
            .take(12)
            .enumerate()
        {
            let (x, y) = ((i % 8) as i32, (i / 8 * 3) as i32);
            a.spawn(material, x, y).unwrap();
            b.spawn(material, x, y).unwrap();
        }
        for _ in 0..20 {
            a.step();
            b.step();
            assert_eq!(a.grid().cells(), b.grid().cells());
        }
    }

    #[test]
    fn spawn_request_delegates_to_spawn() {
        let mut sim = seeded(5, 5, 0);
        let request: SpawnRequest = "sand 2 0".parse().unwrap();
        let id = sim.spawn_request(request).unwrap();
        assert_eq!(sim.particle(id).unwrap().position(), (2, 0));
        assert_eq!(sim.grid().get(2, 0), Material::Sand);
    }

    #[test]
    fn invalid_config_is_rejected() {
        let config = SimConfig {
            width: 0,
            ..SimConfig::default()
        };
        assert!(Simulation::new(&config).is_err());
    }
}
