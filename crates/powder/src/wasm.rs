//! Browser-facing wrapper around [`Simulation`].
//!
//! The host renders straight out of a byte buffer of material tags (see
//! [`Material`]) that is refreshed after every spawn and tick.

use tracing::debug;
use wasm_bindgen::prelude::*;

use crate::cell::Material;
use crate::command::SpawnRequest;
use crate::config::SimConfig;
use crate::Simulation;

#[wasm_bindgen]
#[derive(Debug)]
pub struct Universe {
    sim: Simulation,
    cells: Vec<u8>,
}

impl Universe {
    fn sync_cells(&mut self) {
        self.cells.clear();
        self.cells.extend(self.sim.snapshot().tags());
    }

    fn place(&mut self, request: SpawnRequest) -> bool {
        match self.sim.spawn_request(request) {
            Ok(_) => {
                self.sync_cells();
                true
            }
            Err(err) => {
                debug!(%err, %request, "spawn refused");
                false
            }
        }
    }
}

#[wasm_bindgen]
impl Universe {
    /// The host supplies the seed so a session can be replayed.
    #[wasm_bindgen(constructor)]
    pub fn new(width: usize, height: usize, seed: u64) -> Result<Universe, JsError> {
        let config = SimConfig {
            width,
            height,
            budget: None,
            seed: Some(seed),
        };
        let sim = Simulation::new(&config)?;
        let mut universe = Self {
            sim,
            cells: Vec::with_capacity(width * height),
        };
        universe.sync_cells();
        Ok(universe)
    }

    /// Returns false when the tag is unknown or the spawn is refused.
    pub fn spawn(&mut self, material: u8, x: i32, y: i32) -> bool {
        let Ok(material) = Material::try_from(material) else {
            debug!(tag = material, "unknown material tag");
            return false;
        };
        self.place(SpawnRequest { material, x, y })
    }

    /// Parse and apply a textual command such as `sand 2 0`.
    pub fn command(&mut self, text: &str) -> bool {
        match text.parse::<SpawnRequest>() {
            Ok(request) => self.place(request),
            Err(err) => {
                debug!(%err, text, "rejected command");
                false
            }
        }
    }

    pub fn tick(&mut self) {
        self.sim.step();
        self.sync_cells();
    }

    #[must_use]
    pub fn generation(&self) -> u64 {
        self.sim.tick()
    }

    #[must_use]
    pub fn width(&self) -> usize {
        self.sim.grid().width
    }

    #[must_use]
    pub fn height(&self) -> usize {
        self.sim.grid().height
    }

    #[must_use]
    pub fn remaining_budget(&self) -> usize {
        self.sim.remaining_budget()
    }

    #[must_use]
    pub fn live_count(&self) -> usize {
        self.sim.live_count()
    }

    #[must_use]
    pub fn cells_ptr(&self) -> *const u8 {
        self.cells.as_ptr()
    }

    #[must_use]
    pub fn cells_len(&self) -> usize {
        self.cells.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn universe(width: usize, height: usize) -> Universe {
        let Ok(universe) = Universe::new(width, height, 11) else {
            panic!("valid universe");
        };
        universe
    }

    #[test]
    fn buffer_mirrors_grid() {
        let mut u = universe(5, 5);
        assert_eq!(u.cells_len(), 25);
        assert!(u.cells.iter().all(|&tag| tag == 0));

        assert!(u.spawn(Material::Stone as u8, 2, 0));
        assert_eq!(u.cells[2], Material::Stone as u8);

        u.tick();
        assert_eq!(u.generation(), 1);
        assert_eq!(u.cells[2], 0);
        assert_eq!(u.cells[5 + 2], Material::Stone as u8);
    }

    #[test]
    fn rejected_spawns_return_false() {
        let mut u = universe(5, 5);
        assert!(!u.spawn(9, 0, 0));
        assert!(!u.spawn(Material::Sand as u8, 5, 0));
        assert!(u.spawn(Material::Metal as u8, 0, 0));
        assert!(!u.spawn(Material::Sand as u8, 0, 0));
        assert_eq!(u.remaining_budget(), 24);
    }

    #[test]
    fn commands_are_parsed() {
        let mut u = universe(5, 5);
        assert!(u.command("water 1 4"));
        assert!(!u.command("water 1"));
        assert_eq!(u.cells[4 * 5 + 1], Material::Water as u8);
        assert_eq!(u.live_count(), 1);
        assert_eq!((u.width(), u.height()), (5, 5));
    }
}
